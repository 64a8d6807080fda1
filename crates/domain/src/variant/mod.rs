//! Variant aggregate and related types.

mod aggregate;
mod entities;
mod events;
mod state;
mod value_objects;

pub use aggregate::{MAX_ATTRIBUTES, MAX_IMAGE_BYTES, MAX_IMAGES, Variant};
pub use entities::{Attribute, Detail, Image, PriceRecord};
pub use events::{
    SaleOfVariantOccurredData, VariantAddedToStockData, VariantAttributeCreatedData,
    VariantAttributeDeletedData, VariantAvailabilitySetData, VariantCreatedData,
    VariantDeletedData, VariantDetailsCreatedData, VariantEvent, VariantImageCreatedData,
    VariantImageMainSetData, VariantImageMainUnsetData, VariantNameChangedData,
    VariantPriceSetData, VariantPublishedData, VariantRatingUpdatedData,
    VariantRemovedFromStockData,
};
pub use state::VariantStatus;
pub use value_objects::{
    ArticleNumber, AttributeId, ColorId, DetailId, ImageId, Price, PriceRecordId, ProductId,
    Rating, VariantId,
};
