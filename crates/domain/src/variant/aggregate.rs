//! Variant aggregate implementation.

use chrono::{DateTime, Utc};

use event_core::{Aggregate, AggregateRoot, Arena, DomainError, DomainResult, IdSource};

use crate::validate;

use super::{
    entities::{Attribute, Detail, Image, PriceRecord},
    events::{
        VariantAttributeCreatedData, VariantCreatedData, VariantDetailsCreatedData, VariantEvent,
        VariantImageCreatedData,
    },
    state::VariantStatus,
    value_objects::{
        ArticleNumber, AttributeId, ColorId, DetailId, ImageId, Price, PriceRecordId, ProductId,
        Rating, VariantId,
    },
};

/// Most attributes a variant may own.
pub const MAX_ATTRIBUTES: usize = 50;

/// Most images a variant may own.
pub const MAX_IMAGES: usize = 50;

/// Largest accepted image, in bytes.
pub const MAX_IMAGE_BYTES: u64 = 50 * 1024 * 1024;

/// Variant aggregate root.
///
/// A variant is one sellable version of a product (a product in a specific
/// color), carrying its own images, attributes, detail record, stock
/// counters and price history. All of it changes only through the command
/// methods below, which raise events that [`apply`](Aggregate::apply) folds
/// into state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variant {
    root: AggregateRoot<VariantEvent>,

    /// Unique variant identifier, set by the creation event.
    id: Option<VariantId>,

    /// The product this variant belongs to.
    product_id: Option<ProductId>,

    /// The color this variant is sold in.
    color_id: Option<ColorId>,

    /// Display name.
    name: String,

    /// Upper-cased copy of the name kept for case-insensitive search.
    normalized_name: String,

    /// Article number derived from the variant id.
    article: Option<ArticleNumber>,

    /// Catalog URL slug.
    url: String,

    /// Units on hand.
    stock: u32,

    /// Units sold over the variant's lifetime.
    sold: u32,

    /// Accumulated buyer rating.
    rating: Rating,

    /// Lifecycle state.
    status: VariantStatus,

    /// Whether the variant is orderable right now.
    available: bool,

    /// Attributes keyed by their minted id, in insertion order.
    attributes: Arena<AttributeId, Attribute>,

    /// Images keyed by their minted id, in insertion order.
    images: Arena<ImageId, Image>,

    /// The single long-form detail record, once attached.
    detail: Option<Detail>,

    /// Price history, oldest first.
    price_history: Vec<PriceRecord>,

    /// When the variant was created.
    created_at: Option<DateTime<Utc>>,

    /// Timestamp of the last applied event.
    updated_at: Option<DateTime<Utc>>,
}

impl Aggregate for Variant {
    type Event = VariantEvent;

    fn aggregate_type() -> &'static str {
        "Variant"
    }

    fn root(&self) -> &AggregateRoot<VariantEvent> {
        &self.root
    }

    fn root_mut(&mut self) -> &mut AggregateRoot<VariantEvent> {
        &mut self.root
    }

    fn apply(&mut self, event: Self::Event) {
        match event {
            VariantEvent::VariantCreated(data) => self.apply_created(data),
            VariantEvent::VariantDetailsCreated(data) => self.apply_details_created(data),
            VariantEvent::VariantAttributeCreated(data) => self.apply_attribute_created(data),
            VariantEvent::VariantAttributeDeleted(data) => {
                // Raised by delete_attribute, but the fold shipped so far
                // leaves the owned attribute untouched. TODO: confirm the
                // intended removal semantics before wiring the arena update.
                self.updated_at = Some(data.deleted_at);
            }
            VariantEvent::VariantImageCreated(data) => self.apply_image_created(data),
            VariantEvent::VariantImageMainUnset(data) => {
                if let Some(image) = self.images.get_mut(data.image_id) {
                    image.unset_main();
                }
                self.updated_at = Some(data.unset_at);
            }
            VariantEvent::VariantImageMainSet(data) => {
                if let Some(image) = self.images.get_mut(data.image_id) {
                    image.set_main();
                }
                self.updated_at = Some(data.set_at);
            }
            VariantEvent::VariantPublished(data) => {
                self.status = VariantStatus::Published;
                self.updated_at = Some(data.published_at);
            }
            VariantEvent::VariantNameChanged(data) => {
                self.normalized_name = data.name.to_uppercase();
                self.name = data.name;
                self.updated_at = Some(data.changed_at);
            }
            VariantEvent::VariantAddedToStock(data) => {
                self.stock = self.stock.saturating_add(data.count);
                self.updated_at = Some(data.added_at);
            }
            VariantEvent::VariantRemovedFromStock(data) => {
                self.apply_removed_from_stock(data.count, data.removed_at);
            }
            VariantEvent::SaleOfVariantOccurred(data) => {
                // A sale is a stock removal plus the lifetime sold counter.
                self.apply_removed_from_stock(data.count, data.sold_at);
                self.sold += data.count;
            }
            VariantEvent::VariantRatingUpdated(data) => {
                self.rating = self.rating.record(data.score);
                self.updated_at = Some(data.updated_at);
            }
            VariantEvent::VariantAvailabilitySet(data) => {
                self.available = data.available;
                self.updated_at = Some(data.set_at);
            }
            VariantEvent::VariantPriceSet(data) => {
                self.price_history
                    .push(PriceRecord::new(data.price_record_id, data.price, data.set_at));
                self.updated_at = Some(data.set_at);
            }
            VariantEvent::VariantDeleted(data) => {
                self.status = VariantStatus::Deleted;
                self.updated_at = Some(data.deleted_at);
            }
        }
    }
}

// Query methods
impl Variant {
    /// Returns the variant ID.
    pub fn id(&self) -> Option<VariantId> {
        self.id
    }

    /// Returns the owning product reference.
    pub fn product_id(&self) -> Option<ProductId> {
        self.product_id
    }

    /// Returns the color reference.
    pub fn color_id(&self) -> Option<ColorId> {
        self.color_id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the upper-cased name used for case-insensitive search.
    pub fn normalized_name(&self) -> &str {
        &self.normalized_name
    }

    /// Returns the article number.
    pub fn article(&self) -> Option<ArticleNumber> {
        self.article
    }

    /// Returns the catalog URL slug.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the units on hand.
    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// Returns the lifetime units sold.
    pub fn sold(&self) -> u32 {
        self.sold
    }

    /// Returns the accumulated rating.
    pub fn rating(&self) -> Rating {
        self.rating
    }

    /// Returns the lifecycle state.
    pub fn status(&self) -> VariantStatus {
        self.status
    }

    /// Returns true while the variant is orderable.
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Returns the attributes in the order they were added.
    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }

    /// Returns an attribute by id.
    pub fn attribute(&self, id: AttributeId) -> Option<&Attribute> {
        self.attributes.get(id)
    }

    /// Returns the number of attributes.
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// Returns the images in the order they were added.
    pub fn images(&self) -> impl Iterator<Item = &Image> {
        self.images.iter()
    }

    /// Returns an image by id.
    pub fn image(&self, id: ImageId) -> Option<&Image> {
        self.images.get(id)
    }

    /// Returns the number of images.
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Returns the current main image, if any.
    pub fn main_image(&self) -> Option<&Image> {
        self.images.iter().find(|image| image.is_main())
    }

    /// Returns the detail record, once attached.
    pub fn detail(&self) -> Option<&Detail> {
        self.detail.as_ref()
    }

    /// Returns the price history, oldest first.
    pub fn price_history(&self) -> &[PriceRecord] {
        &self.price_history
    }

    /// Returns when the variant was created.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Returns the timestamp of the last applied event.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

// Command methods
impl Variant {
    /// Creates a new variant in draft state.
    ///
    /// Mints the variant id and derives the article number from it; both are
    /// recorded in the creation event. The variant starts unavailable.
    pub fn create(
        ids: &mut dyn IdSource,
        product_id: ProductId,
        color_id: ColorId,
        name: &str,
        initial_stock: u32,
        url: &str,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if product_id.is_nil() {
            return Err(DomainError::new("variant requires a product reference"));
        }
        if color_id.is_nil() {
            return Err(DomainError::new("variant requires a color reference"));
        }
        let name = validate::required_text("variant name", name, 25, 500)?;
        let url = validate::non_blank("variant url", url)?;

        let id = VariantId::mint(ids);
        let article = ArticleNumber::derive(id);

        let mut variant = Self::default();
        variant.raise(VariantEvent::variant_created(
            id,
            product_id,
            color_id,
            name,
            article,
            initial_stock,
            url,
            now,
        ));
        Ok(variant)
    }

    /// Attaches the long-form detail record. A variant gets at most one.
    #[allow(clippy::too_many_arguments)]
    pub fn add_details(
        &mut self,
        ids: &mut dyn IdSource,
        description: &str,
        composition: &str,
        model_features: Option<&str>,
        decorative_elements: Option<&str>,
        equipment: Option<&str>,
        caring_of_things: Option<&str>,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.ensure_not_deleted("add details to")?;
        if self.detail.is_some() {
            return Err(DomainError::new("variant already has a detail record"));
        }
        let description = validate::required_text("detail description", description, 25, 500)?;
        let composition = validate::non_blank("detail composition", composition)?;
        let model_features = validate::optional_text("model features", model_features, 25, 500)?;
        let decorative_elements =
            validate::optional_text("decorative elements", decorative_elements, 25, 500)?;
        let equipment = validate::optional_text("equipment", equipment, 25, 500)?;
        let caring_of_things =
            validate::optional_text("caring of things", caring_of_things, 25, 500)?;

        self.raise(VariantEvent::variant_details_created(
            DetailId::mint(ids),
            description,
            composition,
            model_features,
            decorative_elements,
            equipment,
            caring_of_things,
            now,
        ));
        Ok(())
    }

    /// Adds a key/value attribute. Keys are upper-cased before storage.
    pub fn add_attribute(
        &mut self,
        ids: &mut dyn IdSource,
        key: &str,
        value: &str,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.ensure_not_deleted("add an attribute to")?;
        if self.attributes.len() >= MAX_ATTRIBUTES {
            return Err(DomainError::new(format!(
                "variant cannot hold more than {MAX_ATTRIBUTES} attributes"
            )));
        }
        let key = validate::required_text("attribute key", key, 1, 100)?.to_uppercase();
        let value = validate::required_text("attribute value", value, 1, 500)?;

        self.raise(VariantEvent::variant_attribute_created(
            AttributeId::mint(ids),
            key,
            value,
            now,
        ));
        Ok(())
    }

    /// Records the deletion of an attribute.
    pub fn delete_attribute(
        &mut self,
        attribute_id: AttributeId,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.ensure_not_deleted("delete an attribute of")?;
        let attribute = self.attributes.get(attribute_id).ok_or_else(|| {
            DomainError::new(format!(
                "attribute {attribute_id} does not belong to this variant"
            ))
        })?;
        if attribute.is_deleted() {
            return Err(DomainError::new("attribute is already deleted"));
        }

        self.raise(VariantEvent::variant_attribute_deleted(attribute_id, now));
        Ok(())
    }

    /// Adds an image to the gallery.
    ///
    /// An image arriving with the main flag displaces the current main
    /// image: the unset event is raised first, so the created image is the
    /// only main one the moment it lands.
    #[allow(clippy::too_many_arguments)]
    pub fn add_image(
        &mut self,
        ids: &mut dyn IdSource,
        file_name: &str,
        path: &str,
        size_bytes: u64,
        width: u32,
        height: u32,
        sort_order: u32,
        is_main: bool,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.ensure_not_deleted("add an image to")?;
        if self.images.len() >= MAX_IMAGES {
            return Err(DomainError::new(format!(
                "variant cannot hold more than {MAX_IMAGES} images"
            )));
        }
        let path = validate::required_text("image path", path, 25, 500)?;
        validate::in_range("image size in bytes", size_bytes, 1, MAX_IMAGE_BYTES)?;
        validate::in_range("image width", u64::from(width), 50, 5000)?;
        validate::in_range("image height", u64::from(height), 50, 5000)?;
        validate::in_range("image sort order", u64::from(sort_order), 1, 50)?;

        if is_main && let Some(current) = self.main_image() {
            let displaced = current.id();
            self.raise(VariantEvent::variant_image_main_unset(displaced, now));
        }
        self.raise(VariantEvent::variant_image_created(
            ImageId::mint(ids),
            file_name.to_string(),
            path,
            size_bytes,
            width,
            height,
            sort_order,
            is_main,
            now,
        ));
        Ok(())
    }

    /// Makes an existing image the main one.
    ///
    /// Marking the current main image again is a no-op: no event is raised.
    pub fn mark_image_as_main(&mut self, image_id: ImageId, now: DateTime<Utc>) -> DomainResult<()> {
        self.ensure_not_deleted("mark an image as main on")?;
        let Some(target) = self.images.get(image_id) else {
            return Err(DomainError::new(format!(
                "image {image_id} does not belong to this variant"
            )));
        };
        if target.is_main() {
            return Ok(());
        }

        let displaced = self.main_image().map(Image::id);
        if let Some(previous) = displaced {
            self.raise(VariantEvent::variant_image_main_unset(previous, now));
        }
        self.raise(VariantEvent::variant_image_main_set(image_id, now));
        Ok(())
    }

    /// Validates an image deletion.
    ///
    /// The shipped surface stops after the checks: no event is raised and
    /// the image keeps its flags. TODO: raise a soft-delete event here once
    /// the intended semantics are confirmed.
    pub fn delete_image(&mut self, image_id: ImageId, _now: DateTime<Utc>) -> DomainResult<()> {
        self.ensure_not_deleted("delete an image of")?;
        let image = self.images.get(image_id).ok_or_else(|| {
            DomainError::new(format!("image {image_id} does not belong to this variant"))
        })?;
        if image.is_deleted() {
            return Err(DomainError::new("image is already deleted"));
        }
        Ok(())
    }

    /// Validates an image restoration.
    ///
    /// Same gap as [`delete_image`](Variant::delete_image): the checks run,
    /// nothing is raised. Because no event ever marks an image deleted, this
    /// rejects every existing image as not deleted.
    pub fn restore_image(&mut self, image_id: ImageId, _now: DateTime<Utc>) -> DomainResult<()> {
        self.ensure_not_deleted("restore an image of")?;
        let image = self.images.get(image_id).ok_or_else(|| {
            DomainError::new(format!("image {image_id} does not belong to this variant"))
        })?;
        if !image.is_deleted() {
            return Err(DomainError::new("image is not deleted"));
        }
        Ok(())
    }

    /// Publishes the variant to the catalog.
    pub fn publish(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        self.ensure_not_deleted("publish")?;
        if self.images.is_empty() {
            return Err(DomainError::new(
                "variant needs at least one image before publishing",
            ));
        }
        if self.detail.is_none() {
            return Err(DomainError::new(
                "variant needs a detail record before publishing",
            ));
        }

        self.raise(VariantEvent::variant_published(now));
        Ok(())
    }

    /// Changes the display name.
    pub fn change_name(&mut self, name: &str, now: DateTime<Utc>) -> DomainResult<()> {
        self.ensure_not_deleted("rename")?;
        let name = validate::required_text("variant name", name, 25, 500)?;

        self.raise(VariantEvent::variant_name_changed(name, now));
        Ok(())
    }

    /// Adds units to stock.
    pub fn add_to_stock(&mut self, count: u32, now: DateTime<Utc>) -> DomainResult<()> {
        self.ensure_not_deleted("add stock to")?;
        if count == 0 {
            return Err(DomainError::new("stock count to add must be positive"));
        }

        self.raise(VariantEvent::variant_added_to_stock(count, now));
        Ok(())
    }

    /// Removes units from stock, e.g. for damage or recounts.
    pub fn remove_from_stock(&mut self, count: u32, now: DateTime<Utc>) -> DomainResult<()> {
        self.ensure_not_deleted("remove stock from")?;
        self.check_stock_removal(count)?;

        self.raise(VariantEvent::variant_removed_from_stock(count, now));
        Ok(())
    }

    /// Records a sale: stock goes down, the sold counter goes up.
    pub fn sell(&mut self, count: u32, now: DateTime<Utc>) -> DomainResult<()> {
        self.ensure_not_deleted("sell")?;
        self.check_stock_removal(count)?;

        self.raise(VariantEvent::sale_of_variant_occurred(count, now));
        Ok(())
    }

    /// Folds one buyer vote into the rating.
    pub fn update_rating(&mut self, score: u8, now: DateTime<Utc>) -> DomainResult<()> {
        self.ensure_not_deleted("rate")?;
        validate::in_range(
            "rating score",
            u64::from(score),
            u64::from(Rating::MIN_SCORE),
            u64::from(Rating::MAX_SCORE),
        )?;

        self.raise(VariantEvent::variant_rating_updated(score, now));
        Ok(())
    }

    /// Sets the availability flag.
    pub fn set_availability(&mut self, available: bool, now: DateTime<Utc>) -> DomainResult<()> {
        self.ensure_not_deleted("change availability of")?;

        self.raise(VariantEvent::variant_availability_set(available, now));
        Ok(())
    }

    /// Sets a new price, appending to the price history.
    pub fn set_price(
        &mut self,
        ids: &mut dyn IdSource,
        price: Price,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.ensure_not_deleted("set a price on")?;
        if !price.is_positive() {
            return Err(DomainError::new("price must be positive"));
        }

        self.raise(VariantEvent::variant_price_set(
            PriceRecordId::mint(ids),
            price,
            now,
        ));
        Ok(())
    }

    /// Soft-deletes the variant. Terminal: nothing may touch it afterwards.
    pub fn delete(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        if self.status.is_deleted() {
            return Err(DomainError::new("variant is already deleted"));
        }

        self.raise(VariantEvent::variant_deleted(now));
        Ok(())
    }

    fn ensure_not_deleted(&self, action: &str) -> DomainResult<()> {
        if self.status.is_deleted() {
            return Err(DomainError::new(format!(
                "cannot {action} a deleted variant"
            )));
        }
        Ok(())
    }

    fn check_stock_removal(&self, count: u32) -> DomainResult<()> {
        if count == 0 {
            return Err(DomainError::new("stock count to remove must be positive"));
        }
        if count > self.stock {
            return Err(DomainError::new(format!(
                "cannot remove {count} units from a stock of {}",
                self.stock
            )));
        }
        Ok(())
    }
}

// Apply helpers
impl Variant {
    fn apply_created(&mut self, data: VariantCreatedData) {
        self.id = Some(data.variant_id);
        self.product_id = Some(data.product_id);
        self.color_id = Some(data.color_id);
        self.normalized_name = data.name.to_uppercase();
        self.name = data.name;
        self.article = Some(data.article);
        self.url = data.url;
        self.stock = data.initial_stock;
        self.status = VariantStatus::Draft;
        self.available = false;
        self.created_at = Some(data.created_at);
        self.updated_at = Some(data.created_at);
    }

    fn apply_details_created(&mut self, data: VariantDetailsCreatedData) {
        self.detail = Some(Detail::new(
            data.detail_id,
            data.description,
            data.composition,
            data.model_features,
            data.decorative_elements,
            data.equipment,
            data.caring_of_things,
        ));
        self.updated_at = Some(data.created_at);
    }

    fn apply_attribute_created(&mut self, data: VariantAttributeCreatedData) {
        self.attributes.insert(
            data.attribute_id,
            Attribute::new(data.attribute_id, data.key, data.value),
        );
        self.updated_at = Some(data.created_at);
    }

    fn apply_image_created(&mut self, data: VariantImageCreatedData) {
        self.images.insert(
            data.image_id,
            Image::new(
                data.image_id,
                data.file_name,
                data.path,
                data.size_bytes,
                data.width,
                data.height,
                data.sort_order,
                data.is_main,
            ),
        );
        self.updated_at = Some(data.created_at);
    }

    fn apply_removed_from_stock(&mut self, count: u32, at: DateTime<Utc>) {
        self.stock = self.stock.saturating_sub(count);
        if self.stock == 0 {
            self.available = false;
        }
        self.updated_at = Some(at);
    }
}
