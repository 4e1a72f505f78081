use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Product entity - one row of the `product` table.
///
/// The identifier is an opaque string: empty until persisted, assigned by
/// storage on creation, non-empty thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Product {
    /// Storage-assigned identifier
    #[serde(rename = "productId", default)]
    pub id: String,
    /// Short product code
    #[serde(rename = "productCode")]
    #[validate(length(max = 255))]
    pub product_code: String,
    /// One-line description
    #[serde(rename = "shortDesc")]
    #[validate(length(max = 255))]
    pub short_desc: String,
    /// Full description
    #[serde(rename = "longDesc")]
    pub long_desc: String,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[serde(rename = "productCode")]
    #[validate(length(min = 1, max = 255))]
    pub product_code: String,
    #[serde(rename = "shortDesc", default)]
    #[validate(length(max = 255))]
    pub short_desc: String,
    #[serde(rename = "longDesc", default)]
    pub long_desc: String,
}

impl Product {
    /// Build a not-yet-persisted product from a CreateProduct DTO.
    ///
    /// The identifier stays empty until the repository assigns one.
    pub fn new(input: CreateProduct) -> Self {
        Self {
            id: String::new(),
            product_code: input.product_code,
            short_desc: input.short_desc,
            long_desc: input.long_desc,
        }
    }

    /// Whether the product has been assigned a storage identifier.
    pub fn is_persisted(&self) -> bool {
        !self.id.is_empty()
    }
}
