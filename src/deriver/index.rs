use crate::{BatchQuantity, ProductBatchSize};
use serde_json::Number;
use std::collections::{HashMap, HashSet};

/// Batch size codes linked to each product code
///
/// Answers the same question as scanning every association row for a
/// `(product, batch size)` pair, without rescanning per product.
pub(crate) struct AssociationIndex<'a> {
    by_product: HashMap<&'a str, HashSet<&'a str>>,
}

impl<'a> AssociationIndex<'a> {
    pub(crate) fn build(associations: &'a [ProductBatchSize]) -> Self {
        let mut by_product: HashMap<&'a str, HashSet<&'a str>> = HashMap::new();
        for link in associations {
            // A row missing either code links nothing.
            if let (Some(product), Some(batch_size)) =
                (link.product_code.as_deref(), link.batch_size_code.as_deref())
            {
                by_product.entry(product).or_default().insert(batch_size);
            }
        }
        Self { by_product }
    }

    pub(crate) fn links(&self, product_code: &str, batch_size_code: &str) -> bool {
        self.by_product
            .get(product_code)
            .is_some_and(|codes| codes.contains(batch_size_code))
    }

    pub(crate) fn product_count(&self) -> usize {
        self.by_product.len()
    }
}

/// First requested quantity per product code
pub(crate) struct QuantityIndex<'a> {
    by_product: HashMap<&'a str, &'a Number>,
}

impl<'a> QuantityIndex<'a> {
    pub(crate) fn build(quantities: &'a [BatchQuantity]) -> Self {
        let mut by_product = HashMap::new();
        for request in quantities {
            if let Some(product) = request.product_code.as_deref() {
                // Earlier requests shadow later duplicates.
                by_product.entry(product).or_insert(&request.quantity);
            }
        }
        Self { by_product }
    }

    pub(crate) fn quantity_for(&self, product_code: &str) -> Option<&'a Number> {
        self.by_product.get(product_code).copied()
    }
}
