//! Sub-entities owned by the variant aggregate.
//!
//! These structs are mutated only from the aggregate's apply step; the rest
//! of the world gets read access through the aggregate's views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::{AttributeId, DetailId, ImageId, Price, PriceRecordId};

/// A key/value attribute of a variant, e.g. `MATERIAL` / `linen`.
///
/// Keys are stored upper-cased so lookups and display grouping do not
/// depend on how the seller typed them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    id: AttributeId,
    key: String,
    value: String,
    is_deleted: bool,
}

impl Attribute {
    pub(crate) fn new(id: AttributeId, key: String, value: String) -> Self {
        Self {
            id,
            key,
            value,
            is_deleted: false,
        }
    }

    /// Stable id of this attribute.
    pub fn id(&self) -> AttributeId {
        self.id
    }

    /// Upper-cased category label.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Attribute value as the seller entered it.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// True once the attribute has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    #[allow(dead_code)] // No apply arm folds attribute deletion yet
    pub(crate) fn delete(&mut self) {
        self.is_deleted = true;
    }

    #[allow(dead_code)] // No apply arm folds attribute restoration yet
    pub(crate) fn restore(&mut self) {
        // TODO: restore currently leaves the entry flagged as deleted,
        // matching the behavior shipped so far; confirm whether it should
        // clear the flag instead.
        self.is_deleted = true;
    }
}

/// An image owned by a variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    id: ImageId,
    file_name: String,
    path: String,
    size_bytes: u64,
    width: u32,
    height: u32,
    sort_order: u32,
    is_main: bool,
    is_deleted: bool,
}

impl Image {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        id: ImageId,
        file_name: String,
        path: String,
        size_bytes: u64,
        width: u32,
        height: u32,
        sort_order: u32,
        is_main: bool,
    ) -> Self {
        Self {
            id,
            file_name,
            path,
            size_bytes,
            width,
            height,
            sort_order,
            is_main,
            is_deleted: false,
        }
    }

    /// Stable id of this image.
    pub fn id(&self) -> ImageId {
        self.id
    }

    /// Original file name as uploaded.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Storage path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Size in bytes.
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Position in gallery ordering.
    pub fn sort_order(&self) -> u32 {
        self.sort_order
    }

    /// True for the variant's single showcase image.
    pub fn is_main(&self) -> bool {
        self.is_main
    }

    /// True once the image has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    pub(crate) fn set_main(&mut self) {
        self.is_main = true;
    }

    pub(crate) fn unset_main(&mut self) {
        self.is_main = false;
    }

    #[allow(dead_code)] // Image deletion raises no event yet
    pub(crate) fn delete(&mut self) {
        self.is_deleted = true;
    }

    #[allow(dead_code)] // Image restoration raises no event yet
    pub(crate) fn restore(&mut self) {
        // TODO: restore currently leaves the entry flagged as deleted,
        // matching the behavior shipped so far; confirm whether it should
        // clear the flag instead.
        self.is_deleted = true;
    }
}

/// The single long-form description record a variant may own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detail {
    id: DetailId,
    description: String,
    composition: String,
    model_features: String,
    decorative_elements: String,
    equipment: String,
    caring_of_things: String,
}

impl Detail {
    pub(crate) fn new(
        id: DetailId,
        description: String,
        composition: String,
        model_features: String,
        decorative_elements: String,
        equipment: String,
        caring_of_things: String,
    ) -> Self {
        Self {
            id,
            description,
            composition,
            model_features,
            decorative_elements,
            equipment,
            caring_of_things,
        }
    }

    /// Stable id of this record.
    pub fn id(&self) -> DetailId {
        self.id
    }

    /// Long-form description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Fabric or material composition.
    pub fn composition(&self) -> &str {
        &self.composition
    }

    /// Model features text; empty when the seller left it out.
    pub fn model_features(&self) -> &str {
        &self.model_features
    }

    /// Decorative elements text; empty when the seller left it out.
    pub fn decorative_elements(&self) -> &str {
        &self.decorative_elements
    }

    /// Included equipment text; empty when the seller left it out.
    pub fn equipment(&self) -> &str {
        &self.equipment
    }

    /// Care instructions; empty when the seller left them out.
    pub fn caring_of_things(&self) -> &str {
        &self.caring_of_things
    }
}

/// One entry in a variant's price history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRecord {
    id: PriceRecordId,
    price: Price,
    recorded_at: DateTime<Utc>,
}

impl PriceRecord {
    pub(crate) fn new(id: PriceRecordId, price: Price, recorded_at: DateTime<Utc>) -> Self {
        Self {
            id,
            price,
            recorded_at,
        }
    }

    /// Stable id of this entry.
    pub fn id(&self) -> PriceRecordId {
        self.id
    }

    /// The price that became effective.
    pub fn price(&self) -> Price {
        self.price
    }

    /// When the price was set.
    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}
