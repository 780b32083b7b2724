use super::InputError;
use crate::{
    deriver::derive_orders,
    policy::{resolve_policy, BatchSizePolicy},
    BatchQuantity, BatchSize, OrderLine, Product, ProductBatchSize,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Order derivation input
///
/// # Example JSON
/// ```json
/// {
///   "product": [{ "code": "P1", "name": "Widget", "pricePerUnit": 10 }],
///   "batchSize": [{ "code": "B1", "size": 5 }, { "code": "B2", "size": 20 }],
///   "productBatchSize": [{ "productCode": "P1", "batchSizeCode": "B1" }],
///   "numberOfBatches": [{ "productCode": "P1", "quantity": 3 }],
///   "useMaximumBatchSize": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInput {
    pub product: Vec<Product>,
    pub batch_size: Vec<BatchSize>,
    pub product_batch_size: Vec<ProductBatchSize>,
    pub number_of_batches: Vec<BatchQuantity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_maximum_batch_size: Option<bool>,
}

impl OrderInput {
    /// Parse input from JSON text
    ///
    /// # Returns
    /// * `Err(InputError::Empty)` if the text is blank
    /// * `Err(InputError::Malformed)` if it is not JSON of the expected shape
    pub fn parse(text: &str) -> Result<Self, InputError> {
        if text.trim().is_empty() {
            return Err(InputError::Empty);
        }
        Ok(serde_json::from_str(text)?)
    }

    /// Parse input from an already decoded JSON value
    pub fn from_value(value: Value) -> Result<Self, InputError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Policy for this input given a caller override and the configured default
    pub fn policy(
        &self,
        explicit: Option<BatchSizePolicy>,
        default: BatchSizePolicy,
    ) -> BatchSizePolicy {
        resolve_policy(explicit, self.use_maximum_batch_size, default)
    }

    /// Derive the order lines for this input under `policy`
    pub fn derive(&self, policy: BatchSizePolicy) -> Vec<OrderLine> {
        derive_orders(
            &self.product,
            &self.batch_size,
            &self.product_batch_size,
            &self.number_of_batches,
            policy,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const WIDGET_INPUT: &str = r#"{
        "product": [
            { "code": "P1", "name": "Widget", "pricePerUnit": 10 },
            { "code": "P2", "name": "Gadget", "pricePerUnit": 2.5 }
        ],
        "batchSize": [{ "code": "B1", "size": 5 }, { "code": "B2", "size": 20 }],
        "productBatchSize": [
            { "productCode": "P1", "batchSizeCode": "B1" },
            { "productCode": "P1", "batchSizeCode": "B2" }
        ],
        "numberOfBatches": [{ "productCode": "P1", "quantity": 3 }],
        "useMaximumBatchSize": true
    }"#;

    #[test]
    fn test_parse_full_payload() {
        let input = OrderInput::parse(WIDGET_INPUT).unwrap();

        assert_eq!(input.product.len(), 2);
        assert_eq!(input.batch_size[1], BatchSize::new("B2", 20));
        assert_eq!(input.product_batch_size[0], ProductBatchSize::new("P1", "B1"));
        assert_eq!(input.number_of_batches[0], BatchQuantity::new("P1", 3));
        assert_eq!(input.use_maximum_batch_size, Some(true));
    }

    #[test]
    fn test_derive_uses_payload_flag() {
        let input = OrderInput::parse(WIDGET_INPUT).unwrap();
        let policy = input.policy(None, BatchSizePolicy::Minimum);
        assert_eq!(policy, BatchSizePolicy::Maximum);

        let lines = input.derive(policy);
        assert_eq!(lines[0].batch_size_code, "B2");
        assert_eq!(lines[0].batch_quantity, serde_json::Number::from(3));
        assert_eq!(lines[1].batch_size_code, "BS_GENERATED_P2");
        assert_eq!(lines[1].batch_quantity, serde_json::Number::from(1));
    }

    #[test]
    fn test_flag_is_optional() {
        let input = OrderInput::from_value(json!({
            "product": [],
            "batchSize": [],
            "productBatchSize": [],
            "numberOfBatches": []
        }))
        .unwrap();

        assert_eq!(input.use_maximum_batch_size, None);
        assert_eq!(
            input.policy(None, BatchSizePolicy::Minimum),
            BatchSizePolicy::Minimum
        );
        assert!(input.derive(BatchSizePolicy::Minimum).is_empty());
    }

    #[test]
    fn test_link_rows_may_omit_codes() {
        let input = OrderInput::from_value(json!({
            "product": [{ "code": "P1", "name": "Widget", "pricePerUnit": 10 }],
            "batchSize": [{ "code": "B1", "size": 5 }],
            "productBatchSize": [{ "batchSizeCode": "B1" }],
            "numberOfBatches": [{ "quantity": 4 }]
        }))
        .unwrap();

        let lines = input.derive(BatchSizePolicy::Maximum);
        assert_eq!(lines[0].batch_size_code, "BS_GENERATED_P1");
        assert_eq!(lines[0].batch_quantity, serde_json::Number::from(1));
    }

    #[test]
    fn test_float_sizes_and_quantities_accepted() {
        let cases = [("5", "2.5"), ("5.0", "3"), ("2.5", "3"), ("5", "3.0")];

        for (size, quantity) in cases {
            let text = format!(
                r#"{{
                    "product": [{{ "code": "P1", "name": "Widget", "pricePerUnit": 10 }}],
                    "batchSize": [{{ "code": "B1", "size": {size} }}],
                    "productBatchSize": [{{ "productCode": "P1", "batchSizeCode": "B1" }}],
                    "numberOfBatches": [{{ "productCode": "P1", "quantity": {quantity} }}]
                }}"#
            );

            let input = OrderInput::parse(&text).unwrap();
            let lines = input.derive(BatchSizePolicy::Maximum);
            let json = serde_json::to_value(&lines[0]).unwrap();

            assert_eq!(lines[0].batch_size_code, "B1");
            assert_eq!(json["batchSize"].to_string(), size);
            assert_eq!(json["batchQuantity"].to_string(), quantity);
        }
    }

    #[test]
    fn test_blank_input_is_empty() {
        assert!(matches!(OrderInput::parse(""), Err(InputError::Empty)));
        assert!(matches!(OrderInput::parse("  \n\t"), Err(InputError::Empty)));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let err = OrderInput::parse("{ \"product\": [").unwrap_err();
        match err {
            InputError::Malformed { line, .. } => assert_eq!(line, 1),
            other => panic!("Expected malformed input, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_table_is_malformed() {
        let err = OrderInput::parse(r#"{ "product": [], "batchSize": [] }"#).unwrap_err();
        assert!(matches!(err, InputError::Malformed { .. }));
        assert!(err.to_string().contains("productBatchSize"));
    }

    #[test]
    fn test_wrong_field_type_is_malformed() {
        let err = OrderInput::from_value(json!({
            "product": [{ "code": "P1", "name": "Widget", "pricePerUnit": "ten" }],
            "batchSize": [],
            "productBatchSize": [],
            "numberOfBatches": []
        }))
        .unwrap_err();
        assert!(matches!(err, InputError::Malformed { .. }));
    }
}
