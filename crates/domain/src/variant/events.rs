//! Variant domain events.
//!
//! Every event payload carries the timestamp of the command that raised it
//! and any sub-entity ids minted for it, so replaying a stored history never
//! consults a clock or an id source.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use event_core::DomainEvent;

use super::value_objects::{
    ArticleNumber, AttributeId, ColorId, DetailId, ImageId, Price, PriceRecordId, ProductId,
    VariantId,
};

/// Events that can occur on a variant aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum VariantEvent {
    /// Variant was created in draft state.
    VariantCreated(VariantCreatedData),

    /// Long-form detail record was attached.
    VariantDetailsCreated(VariantDetailsCreatedData),

    /// Attribute was added.
    VariantAttributeCreated(VariantAttributeCreatedData),

    /// Attribute deletion was recorded.
    VariantAttributeDeleted(VariantAttributeDeletedData),

    /// Image was added.
    VariantImageCreated(VariantImageCreatedData),

    /// An image lost its main flag.
    VariantImageMainUnset(VariantImageMainUnsetData),

    /// An image became the main one.
    VariantImageMainSet(VariantImageMainSetData),

    /// Variant became visible in the catalog.
    VariantPublished(VariantPublishedData),

    /// Display name was changed.
    VariantNameChanged(VariantNameChangedData),

    /// Units were added to stock.
    VariantAddedToStock(VariantAddedToStockData),

    /// Units were removed from stock.
    VariantRemovedFromStock(VariantRemovedFromStockData),

    /// Units were sold.
    SaleOfVariantOccurred(SaleOfVariantOccurredData),

    /// A buyer rated the variant.
    VariantRatingUpdated(VariantRatingUpdatedData),

    /// Availability flag was set by the seller.
    VariantAvailabilitySet(VariantAvailabilitySetData),

    /// A new price became effective.
    VariantPriceSet(VariantPriceSetData),

    /// Variant was soft-deleted.
    VariantDeleted(VariantDeletedData),
}

impl DomainEvent for VariantEvent {
    fn event_type(&self) -> &'static str {
        match self {
            VariantEvent::VariantCreated(_) => "VariantCreated",
            VariantEvent::VariantDetailsCreated(_) => "VariantDetailsCreated",
            VariantEvent::VariantAttributeCreated(_) => "VariantAttributeCreated",
            VariantEvent::VariantAttributeDeleted(_) => "VariantAttributeDeleted",
            VariantEvent::VariantImageCreated(_) => "VariantImageCreated",
            VariantEvent::VariantImageMainUnset(_) => "VariantImageMainUnset",
            VariantEvent::VariantImageMainSet(_) => "VariantImageMainSet",
            VariantEvent::VariantPublished(_) => "VariantPublished",
            VariantEvent::VariantNameChanged(_) => "VariantNameChanged",
            VariantEvent::VariantAddedToStock(_) => "VariantAddedToStock",
            VariantEvent::VariantRemovedFromStock(_) => "VariantRemovedFromStock",
            VariantEvent::SaleOfVariantOccurred(_) => "SaleOfVariantOccurred",
            VariantEvent::VariantRatingUpdated(_) => "VariantRatingUpdated",
            VariantEvent::VariantAvailabilitySet(_) => "VariantAvailabilitySet",
            VariantEvent::VariantPriceSet(_) => "VariantPriceSet",
            VariantEvent::VariantDeleted(_) => "VariantDeleted",
        }
    }
}

/// Data for VariantCreated event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantCreatedData {
    /// The minted variant id.
    pub variant_id: VariantId,

    /// The product this variant belongs to.
    pub product_id: ProductId,

    /// The color this variant is sold in.
    pub color_id: ColorId,

    /// Display name, trimmed.
    pub name: String,

    /// Article number derived from the variant id.
    pub article: ArticleNumber,

    /// Units in stock at creation.
    pub initial_stock: u32,

    /// Catalog URL slug.
    pub url: String,

    /// When the variant was created.
    pub created_at: DateTime<Utc>,
}

/// Data for VariantDetailsCreated event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantDetailsCreatedData {
    /// The minted detail record id.
    pub detail_id: DetailId,

    /// Long-form description.
    pub description: String,

    /// Fabric or material composition.
    pub composition: String,

    /// Model features; empty when left out.
    pub model_features: String,

    /// Decorative elements; empty when left out.
    pub decorative_elements: String,

    /// Included equipment; empty when left out.
    pub equipment: String,

    /// Care instructions; empty when left out.
    pub caring_of_things: String,

    /// When the record was attached.
    pub created_at: DateTime<Utc>,
}

/// Data for VariantAttributeCreated event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantAttributeCreatedData {
    /// The minted attribute id.
    pub attribute_id: AttributeId,

    /// Upper-cased category label.
    pub key: String,

    /// Attribute value.
    pub value: String,

    /// When the attribute was added.
    pub created_at: DateTime<Utc>,
}

/// Data for VariantAttributeDeleted event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantAttributeDeletedData {
    /// The attribute whose deletion was recorded.
    pub attribute_id: AttributeId,

    /// When the deletion was recorded.
    pub deleted_at: DateTime<Utc>,
}

/// Data for VariantImageCreated event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantImageCreatedData {
    /// The minted image id.
    pub image_id: ImageId,

    /// Original file name as uploaded.
    pub file_name: String,

    /// Storage path.
    pub path: String,

    /// Size in bytes.
    pub size_bytes: u64,

    /// Width in pixels.
    pub width: u32,

    /// Height in pixels.
    pub height: u32,

    /// Position in gallery ordering.
    pub sort_order: u32,

    /// Whether this image is the main one.
    pub is_main: bool,

    /// When the image was added.
    pub created_at: DateTime<Utc>,
}

/// Data for VariantImageMainUnset event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantImageMainUnsetData {
    /// The image that lost the main flag.
    pub image_id: ImageId,

    /// When the flag moved.
    pub unset_at: DateTime<Utc>,
}

/// Data for VariantImageMainSet event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantImageMainSetData {
    /// The image that became main.
    pub image_id: ImageId,

    /// When the flag moved.
    pub set_at: DateTime<Utc>,
}

/// Data for VariantPublished event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantPublishedData {
    /// When the variant went live.
    pub published_at: DateTime<Utc>,
}

/// Data for VariantNameChanged event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantNameChangedData {
    /// New display name, trimmed.
    pub name: String,

    /// When the name changed.
    pub changed_at: DateTime<Utc>,
}

/// Data for VariantAddedToStock event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantAddedToStockData {
    /// Units added.
    pub count: u32,

    /// When stock was added.
    pub added_at: DateTime<Utc>,
}

/// Data for VariantRemovedFromStock event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantRemovedFromStockData {
    /// Units removed.
    pub count: u32,

    /// When stock was removed.
    pub removed_at: DateTime<Utc>,
}

/// Data for SaleOfVariantOccurred event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleOfVariantOccurredData {
    /// Units sold.
    pub count: u32,

    /// When the sale happened.
    pub sold_at: DateTime<Utc>,
}

/// Data for VariantRatingUpdated event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantRatingUpdatedData {
    /// The score the buyer gave, 1 to 5.
    pub score: u8,

    /// When the vote was cast.
    pub updated_at: DateTime<Utc>,
}

/// Data for VariantAvailabilitySet event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantAvailabilitySetData {
    /// The new availability flag.
    pub available: bool,

    /// When the flag was set.
    pub set_at: DateTime<Utc>,
}

/// Data for VariantPriceSet event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantPriceSetData {
    /// The minted price record id.
    pub price_record_id: PriceRecordId,

    /// The price that became effective.
    pub price: Price,

    /// When the price was set.
    pub set_at: DateTime<Utc>,
}

/// Data for VariantDeleted event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantDeletedData {
    /// When the variant was soft-deleted.
    pub deleted_at: DateTime<Utc>,
}

// Convenience constructors for events
impl VariantEvent {
    /// Creates a VariantCreated event.
    #[allow(clippy::too_many_arguments)]
    pub fn variant_created(
        variant_id: VariantId,
        product_id: ProductId,
        color_id: ColorId,
        name: String,
        article: ArticleNumber,
        initial_stock: u32,
        url: String,
        now: DateTime<Utc>,
    ) -> Self {
        VariantEvent::VariantCreated(VariantCreatedData {
            variant_id,
            product_id,
            color_id,
            name,
            article,
            initial_stock,
            url,
            created_at: now,
        })
    }

    /// Creates a VariantDetailsCreated event.
    #[allow(clippy::too_many_arguments)]
    pub fn variant_details_created(
        detail_id: DetailId,
        description: String,
        composition: String,
        model_features: String,
        decorative_elements: String,
        equipment: String,
        caring_of_things: String,
        now: DateTime<Utc>,
    ) -> Self {
        VariantEvent::VariantDetailsCreated(VariantDetailsCreatedData {
            detail_id,
            description,
            composition,
            model_features,
            decorative_elements,
            equipment,
            caring_of_things,
            created_at: now,
        })
    }

    /// Creates a VariantAttributeCreated event.
    pub fn variant_attribute_created(
        attribute_id: AttributeId,
        key: String,
        value: String,
        now: DateTime<Utc>,
    ) -> Self {
        VariantEvent::VariantAttributeCreated(VariantAttributeCreatedData {
            attribute_id,
            key,
            value,
            created_at: now,
        })
    }

    /// Creates a VariantAttributeDeleted event.
    pub fn variant_attribute_deleted(attribute_id: AttributeId, now: DateTime<Utc>) -> Self {
        VariantEvent::VariantAttributeDeleted(VariantAttributeDeletedData {
            attribute_id,
            deleted_at: now,
        })
    }

    /// Creates a VariantImageCreated event.
    #[allow(clippy::too_many_arguments)]
    pub fn variant_image_created(
        image_id: ImageId,
        file_name: String,
        path: String,
        size_bytes: u64,
        width: u32,
        height: u32,
        sort_order: u32,
        is_main: bool,
        now: DateTime<Utc>,
    ) -> Self {
        VariantEvent::VariantImageCreated(VariantImageCreatedData {
            image_id,
            file_name,
            path,
            size_bytes,
            width,
            height,
            sort_order,
            is_main,
            created_at: now,
        })
    }

    /// Creates a VariantImageMainUnset event.
    pub fn variant_image_main_unset(image_id: ImageId, now: DateTime<Utc>) -> Self {
        VariantEvent::VariantImageMainUnset(VariantImageMainUnsetData {
            image_id,
            unset_at: now,
        })
    }

    /// Creates a VariantImageMainSet event.
    pub fn variant_image_main_set(image_id: ImageId, now: DateTime<Utc>) -> Self {
        VariantEvent::VariantImageMainSet(VariantImageMainSetData {
            image_id,
            set_at: now,
        })
    }

    /// Creates a VariantPublished event.
    pub fn variant_published(now: DateTime<Utc>) -> Self {
        VariantEvent::VariantPublished(VariantPublishedData { published_at: now })
    }

    /// Creates a VariantNameChanged event.
    pub fn variant_name_changed(name: String, now: DateTime<Utc>) -> Self {
        VariantEvent::VariantNameChanged(VariantNameChangedData {
            name,
            changed_at: now,
        })
    }

    /// Creates a VariantAddedToStock event.
    pub fn variant_added_to_stock(count: u32, now: DateTime<Utc>) -> Self {
        VariantEvent::VariantAddedToStock(VariantAddedToStockData {
            count,
            added_at: now,
        })
    }

    /// Creates a VariantRemovedFromStock event.
    pub fn variant_removed_from_stock(count: u32, now: DateTime<Utc>) -> Self {
        VariantEvent::VariantRemovedFromStock(VariantRemovedFromStockData {
            count,
            removed_at: now,
        })
    }

    /// Creates a SaleOfVariantOccurred event.
    pub fn sale_of_variant_occurred(count: u32, now: DateTime<Utc>) -> Self {
        VariantEvent::SaleOfVariantOccurred(SaleOfVariantOccurredData {
            count,
            sold_at: now,
        })
    }

    /// Creates a VariantRatingUpdated event.
    pub fn variant_rating_updated(score: u8, now: DateTime<Utc>) -> Self {
        VariantEvent::VariantRatingUpdated(VariantRatingUpdatedData {
            score,
            updated_at: now,
        })
    }

    /// Creates a VariantAvailabilitySet event.
    pub fn variant_availability_set(available: bool, now: DateTime<Utc>) -> Self {
        VariantEvent::VariantAvailabilitySet(VariantAvailabilitySetData {
            available,
            set_at: now,
        })
    }

    /// Creates a VariantPriceSet event.
    pub fn variant_price_set(
        price_record_id: PriceRecordId,
        price: Price,
        now: DateTime<Utc>,
    ) -> Self {
        VariantEvent::VariantPriceSet(VariantPriceSetData {
            price_record_id,
            price,
            set_at: now,
        })
    }

    /// Creates a VariantDeleted event.
    pub fn variant_deleted(now: DateTime<Utc>) -> Self {
        VariantEvent::VariantDeleted(VariantDeletedData { deleted_at: now })
    }
}
