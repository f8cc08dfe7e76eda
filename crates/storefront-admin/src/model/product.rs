use serde::{Deserialize, Serialize};

super::sequence_id!(
    /// Store-assigned identifier for products, rendered `product_<n>`.
    ProductId,
    "product",
    "Product"
);

/// Represents a catalog item.
///
/// # Resource Actor
/// This struct implements the [`ResourceEntity`](resource_actor::ResourceEntity) trait,
/// allowing it to be owned by a [`ResourceActor`](resource_actor::ResourceActor).
///
/// See [`impl ResourceEntity for Product`](#impl-ResourceEntity-for-Product) for details on:
/// - Creation parameters ([`ProductDraft`])
/// - Update parameters ([`ProductPatch`])
/// - Transitions ([`ProductTransition`](crate::product_actor::ProductTransition))
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub is_sold_out: bool,
}

/// A validated product ready to be stored.
///
/// Built by [`validation::product::create`](crate::validation::product::create).
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub category: Option<String>,
}

/// Partial field set for the general update.
///
/// `None` leaves a field untouched. `category: Some(None)` clears the category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<Option<String>>,
    pub is_sold_out: Option<bool>,
}
