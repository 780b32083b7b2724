//! Order Derivation Engine
//!
//! For every product, in input order:
//! 1. Collect the batch sizes associated with the product
//! 2. Sort them largest first by numeric value (stable, so equal sizes keep input order)
//! 3. Let the policy pick one, or generate a one-unit batch if none qualify
//! 4. Look up the requested number of batches (defaults to one)
//! 5. Emit an `OrderLine`

use super::index::{AssociationIndex, QuantityIndex};
use crate::{
    policy::BatchSizePolicy, BatchQuantity, BatchSize, OrderLine, Product, ProductBatchSize,
};
use serde_json::Number;
use tracing::{debug, trace};

/// Code prefix of the batch size generated for products without associations
pub const GENERATED_BATCH_SIZE_PREFIX: &str = "BS_GENERATED_";

/// Units per batch of a generated batch size
pub const GENERATED_BATCH_SIZE: u64 = 1;

/// Number of batches ordered when a product has no quantity request
pub const DEFAULT_BATCH_QUANTITY: u64 = 1;

fn default_batch_quantity() -> Number {
    Number::from(DEFAULT_BATCH_QUANTITY)
}

/// Batch size used for a product that has no associated batch sizes
pub fn generated_batch_size(product_code: &str) -> BatchSize {
    BatchSize::new(
        format!("{GENERATED_BATCH_SIZE_PREFIX}{product_code}"),
        GENERATED_BATCH_SIZE,
    )
}

/// Derive one order line per product
///
/// # Arguments
/// * `products` - Products to order, in output order
/// * `batch_sizes` - All batch size definitions
/// * `associations` - Product to batch size links
/// * `quantities` - Requested number of batches per product
/// * `policy` - Whether the smallest or the largest associated batch size is used
///
/// # Returns
/// Exactly `products.len()` lines, in the same order as `products`
pub fn derive_orders(
    products: &[Product],
    batch_sizes: &[BatchSize],
    associations: &[ProductBatchSize],
    quantities: &[BatchQuantity],
    policy: BatchSizePolicy,
) -> Vec<OrderLine> {
    let links = AssociationIndex::build(associations);
    let requested = QuantityIndex::build(quantities);

    debug!(
        "Deriving orders for {} products ({} batch sizes, {} linked products, policy {})",
        products.len(),
        batch_sizes.len(),
        links.product_count(),
        policy
    );

    products
        .iter()
        .map(|product| {
            let mut candidates: Vec<&BatchSize> = batch_sizes
                .iter()
                .filter(|batch_size| links.links(&product.code, &batch_size.code))
                .collect();
            candidates.sort_by(|a, b| b.size_value().total_cmp(&a.size_value()));

            let chosen = match policy.choose(&candidates) {
                Some(batch_size) => batch_size.clone(),
                None => {
                    trace!("No batch sizes linked to {}, generating one", product.code);
                    generated_batch_size(&product.code)
                }
            };

            let batch_quantity = requested
                .quantity_for(&product.code)
                .cloned()
                .unwrap_or_else(default_batch_quantity);

            OrderLine {
                product_code: product.code.clone(),
                batch_size_code: chosen.code,
                product_name: product.name.clone(),
                batch_size: chosen.size,
                batch_quantity,
                price_per_unit: product.price_per_unit.clone(),
            }
        })
        .collect()
}
