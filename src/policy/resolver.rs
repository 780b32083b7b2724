use super::BatchSizePolicy;

/// Resolve the policy for one derivation
///
/// Precedence: `explicit` (a caller override such as the "minimum" or
/// "maximum" action), then `payload_flag` (`useMaximumBatchSize` inside the
/// input), then `default` from configuration.
pub fn resolve_policy(
    explicit: Option<BatchSizePolicy>,
    payload_flag: Option<bool>,
    default: BatchSizePolicy,
) -> BatchSizePolicy {
    explicit
        .or_else(|| payload_flag.map(BatchSizePolicy::from_use_maximum))
        .unwrap_or(default)
}
