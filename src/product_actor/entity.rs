use crate::actor_framework::{Entity, EntityId};
use crate::domain::{Product, ProductCreate};

/// Filters understood by the product collection's `List` request.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductFilter {
    /// Exact, case-sensitive category match.
    Category(String),
}

impl Entity for Product {
    type CreateParams = ProductCreate;
    type Filter = ProductFilter;

    const NAME: &'static str = "product";

    fn id(&self) -> EntityId {
        self.id
    }

    /// Creates a new Product from creation parameters.
    ///
    /// # Arguments
    /// * `id` - Identifier assigned by the actor
    /// * `params` - Catalog fields of the product
    fn from_create_params(id: EntityId, params: ProductCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            name: params.name,
            description: params.description,
            price: params.price,
            category: params.category,
            image_url: params.image_url,
            in_stock: params.in_stock,
        })
    }

    fn matches(&self, filter: &ProductFilter) -> bool {
        match filter {
            ProductFilter::Category(category) => &self.category == category,
        }
    }
}
