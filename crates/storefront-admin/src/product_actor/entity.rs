//! [`ResourceEntity`] implementation for [`Product`].
//!
//! The store re-checks the price invariant on create and update, so a hand-built
//! [`ProductDraft`] or [`ProductPatch`] cannot smuggle a negative price past the validator.

use super::{ProductError, ProductTransition};
use crate::model::{Product, ProductDraft, ProductId, ProductPatch};
use crate::validation::ValidationErrors;
use resource_actor::ResourceEntity;

fn check_price(price: f64) -> Result<(), ProductError> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(ValidationErrors::single(Product::KIND, "price", "must not be negative").into())
    }
}

impl ResourceEntity for Product {
    const KIND: &'static str = "Product";

    type Id = ProductId;
    type Create = ProductDraft;
    type Update = ProductPatch;
    type Transition = ProductTransition;
    type Error = ProductError;

    fn id(&self) -> &ProductId {
        &self.id
    }

    /// New products always start available.
    fn from_create_params(id: ProductId, draft: ProductDraft) -> Result<Self, ProductError> {
        check_price(draft.price)?;
        Ok(Self {
            id,
            name: draft.name,
            price: draft.price,
            category: draft.category,
            is_sold_out: false,
        })
    }

    /// Merges the supplied fields. `is_sold_out` may move in either direction here.
    fn on_update(&mut self, patch: ProductPatch) -> Result<(), ProductError> {
        if let Some(price) = patch.price {
            check_price(price)?;
            self.price = price;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(is_sold_out) = patch.is_sold_out {
            self.is_sold_out = is_sold_out;
        }
        Ok(())
    }

    fn apply_transition(&mut self, transition: ProductTransition) -> Result<(), ProductError> {
        match transition {
            ProductTransition::MarkSoldOut => self.is_sold_out = true,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mug() -> Product {
        Product::from_create_params(
            ProductId(1),
            ProductDraft {
                name: "Mug".into(),
                price: 9.5,
                category: None,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_new_product_is_available() {
        let product = mug();
        assert_eq!(product.id, ProductId(1));
        assert!(!product.is_sold_out);
    }

    #[test]
    fn test_sold_out_transition_is_idempotent() {
        let mut product = mug();
        product.apply_transition(ProductTransition::MarkSoldOut).unwrap();
        assert!(product.is_sold_out);
        product.apply_transition(ProductTransition::MarkSoldOut).unwrap();
        assert!(product.is_sold_out);
    }

    #[test]
    fn test_update_reverts_sold_out() {
        let mut product = mug();
        product.is_sold_out = true;
        product
            .on_update(ProductPatch {
                is_sold_out: Some(false),
                ..ProductPatch::default()
            })
            .unwrap();
        assert!(!product.is_sold_out);
        assert_eq!(product.name, "Mug");
    }

    #[test]
    fn test_negative_price_never_reaches_the_record() {
        let draft = ProductDraft {
            name: "Bad".into(),
            price: -2.0,
            category: None,
        };
        assert!(matches!(
            Product::from_create_params(ProductId(2), draft),
            Err(ProductError::Validation(_))
        ));

        let mut product = mug();
        let result = product.on_update(ProductPatch {
            price: Some(f64::NAN),
            ..ProductPatch::default()
        });
        assert!(result.is_err());
        assert_eq!(product.price, 9.5);
    }
}
