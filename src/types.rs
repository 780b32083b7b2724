use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Catalog product
///
/// `price_per_unit` is kept as the raw JSON number so it is echoed back
/// exactly as supplied. The same holds for batch sizes and quantities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub code: String,
    pub name: String,
    pub price_per_unit: Number,
}

/// Batch size definition: a named number of units per batch
///
/// `size` is any JSON number and is compared numerically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSize {
    pub code: String,
    pub size: Number,
}

impl BatchSize {
    pub fn new(code: impl Into<String>, size: impl Into<Number>) -> Self {
        Self {
            code: code.into(),
            size: size.into(),
        }
    }

    /// Size as a float, for ordering candidates
    pub fn size_value(&self) -> f64 {
        self.size.as_f64().unwrap_or(f64::NAN)
    }
}

/// Links a product to a batch size it may be ordered in
///
/// Rows with a missing code are accepted but never match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductBatchSize {
    #[serde(default)]
    pub product_code: Option<String>,
    #[serde(default)]
    pub batch_size_code: Option<String>,
}

impl ProductBatchSize {
    pub fn new(product_code: impl Into<String>, batch_size_code: impl Into<String>) -> Self {
        Self {
            product_code: Some(product_code.into()),
            batch_size_code: Some(batch_size_code.into()),
        }
    }
}

/// Requested number of batches for a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchQuantity {
    #[serde(default)]
    pub product_code: Option<String>,
    pub quantity: Number,
}

impl BatchQuantity {
    pub fn new(product_code: impl Into<String>, quantity: impl Into<Number>) -> Self {
        Self {
            product_code: Some(product_code.into()),
            quantity: quantity.into(),
        }
    }
}

/// One derived order row
///
/// Field order is part of the wire format: consumers read the serialized
/// object as `productCode, batchSizeCode, productName, batchSize,
/// batchQuantity, pricePerUnit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_code: String,
    pub batch_size_code: String,
    pub product_name: String,
    pub batch_size: Number,
    pub batch_quantity: Number,
    pub price_per_unit: Number,
}
