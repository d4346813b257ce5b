//! Mapper Module
//!
//! Field-for-field conversion between [`ProductEntity`] rows and the
//! [`Product`] wire model. No validation happens here.

use crate::models::Product;
use crate::persistence::ProductEntity;

impl From<ProductEntity> for Product {
    fn from(entity: ProductEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
        }
    }
}

impl From<Product> for ProductEntity {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
        }
    }
}

/// Converts a stored row into its wire model.
pub fn entity_to_model(entity: ProductEntity) -> Product {
    Product::from(entity)
}

/// Converts a wire model into a row ready to persist.
pub fn model_to_entity(product: Product) -> ProductEntity {
    ProductEntity::from(product)
}
