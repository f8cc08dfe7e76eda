//! Product schema: `name` and `price` required, `price >= 0`, `category` optional.

use super::{FieldReader, ValidationErrors};
use crate::model::{ProductDraft, ProductPatch};
use serde_json::Value;

const KIND: &str = "Product";

/// Validates a create body.
pub fn create(body: &Value) -> Result<ProductDraft, ValidationErrors> {
    let mut fields = FieldReader::new(KIND, body)?;
    let name = fields.required_text("name", true);
    let price = fields.required_price("price");
    let category = fields.optional_text("category").flatten();

    let draft = name.zip(price).map(|(name, price)| ProductDraft {
        name,
        price,
        category,
    });
    fields.finish(draft)
}

/// Validates a general update body. Unknown keys, `_id` included, are ignored.
pub fn patch(body: &Value) -> Result<ProductPatch, ValidationErrors> {
    let mut fields = FieldReader::new(KIND, body)?;
    let patch = ProductPatch {
        name: fields.text_if_present("name", true),
        price: fields.price_if_present("price"),
        category: fields.optional_text("category"),
        is_sold_out: fields.flag("isSoldOut"),
    };
    fields.finish(Some(patch))
}
