//! Tests for batch size policies and their resolution

#[cfg(test)]
mod tests {
    use crate::{
        policy::{BatchSizePolicy, resolve_policy},
        BatchSize,
    };

    fn sizes() -> Vec<BatchSize> {
        vec![
            BatchSize::new("B_BIG", 50),
            BatchSize::new("B_MID", 20),
            BatchSize::new("B_SMALL", 5),
        ]
    }

    #[test]
    fn test_maximum_takes_first_of_sorted() {
        let sizes = sizes();
        let sorted: Vec<&BatchSize> = sizes.iter().collect();

        let chosen = BatchSizePolicy::Maximum.choose(&sorted).unwrap();
        assert_eq!(chosen.code, "B_BIG");
    }

    #[test]
    fn test_minimum_takes_last_of_sorted() {
        let sizes = sizes();
        let sorted: Vec<&BatchSize> = sizes.iter().collect();

        let chosen = BatchSizePolicy::Minimum.choose(&sorted).unwrap();
        assert_eq!(chosen.code, "B_SMALL");
    }

    #[test]
    fn test_choose_from_nothing() {
        assert!(BatchSizePolicy::Maximum.choose(&[]).is_none());
        assert!(BatchSizePolicy::Minimum.choose(&[]).is_none());
    }

    #[test]
    fn test_single_candidate_is_both_min_and_max() {
        let only = BatchSize::new("B_ONLY", 12);
        let sorted = vec![&only];

        assert_eq!(BatchSizePolicy::Maximum.choose(&sorted), Some(&only));
        assert_eq!(BatchSizePolicy::Minimum.choose(&sorted), Some(&only));
    }

    #[test]
    fn test_from_use_maximum_flag() {
        assert_eq!(BatchSizePolicy::from_use_maximum(true), BatchSizePolicy::Maximum);
        assert_eq!(BatchSizePolicy::from_use_maximum(false), BatchSizePolicy::Minimum);
    }

    #[test]
    fn test_explicit_override_wins() {
        let policy = resolve_policy(
            Some(BatchSizePolicy::Minimum),
            Some(true),
            BatchSizePolicy::Maximum,
        );
        assert_eq!(policy, BatchSizePolicy::Minimum);

        let policy = resolve_policy(
            Some(BatchSizePolicy::Maximum),
            Some(false),
            BatchSizePolicy::Minimum,
        );
        assert_eq!(policy, BatchSizePolicy::Maximum);
    }

    #[test]
    fn test_payload_flag_used_without_override() {
        let policy = resolve_policy(None, Some(true), BatchSizePolicy::Minimum);
        assert_eq!(policy, BatchSizePolicy::Maximum);

        let policy = resolve_policy(None, Some(false), BatchSizePolicy::Maximum);
        assert_eq!(policy, BatchSizePolicy::Minimum);
    }

    #[test]
    fn test_configured_default_is_last_resort() {
        assert_eq!(
            resolve_policy(None, None, BatchSizePolicy::Minimum),
            BatchSizePolicy::Minimum
        );
        assert_eq!(
            resolve_policy(None, None, BatchSizePolicy::Maximum),
            BatchSizePolicy::Maximum
        );
    }

    #[test]
    fn test_policy_serialized_lowercase() {
        let json = serde_json::to_string(&BatchSizePolicy::Maximum).unwrap();
        assert_eq!(json, "\"maximum\"");

        let parsed: BatchSizePolicy = serde_json::from_str("\"minimum\"").unwrap();
        assert_eq!(parsed, BatchSizePolicy::Minimum);
        assert_eq!(parsed.to_string(), "minimum");
    }
}
