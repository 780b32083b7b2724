use crate::{policy::BatchSizePolicy, OrderLine};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of one derivation kept on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSheet {
    pub lines: Vec<OrderLine>,
    /// Policy the lines were derived with
    pub policy: BatchSizePolicy,
    pub computed_at: DateTime<Utc>,
}

impl OrderSheet {
    pub fn new(lines: Vec<OrderLine>, policy: BatchSizePolicy) -> Self {
        Self {
            lines,
            policy,
            computed_at: Utc::now(),
        }
    }
}
