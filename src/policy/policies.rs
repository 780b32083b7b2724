use crate::BatchSize;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Batch size selection policy
///
/// Serialized in lowercase (`"minimum"` / `"maximum"`), which is also the
/// form used in the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchSizePolicy {
    Minimum,
    Maximum,
}

impl BatchSizePolicy {
    /// Maps the payload's `useMaximumBatchSize` flag onto a policy
    pub fn from_use_maximum(use_maximum: bool) -> Self {
        if use_maximum {
            BatchSizePolicy::Maximum
        } else {
            BatchSizePolicy::Minimum
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BatchSizePolicy::Minimum => "minimum",
            BatchSizePolicy::Maximum => "maximum",
        }
    }

    /// Choose a batch size from candidates sorted largest first
    ///
    /// # Returns
    /// `None` only when there are no candidates
    pub fn choose<'a>(&self, largest_first: &[&'a BatchSize]) -> Option<&'a BatchSize> {
        match self {
            BatchSizePolicy::Maximum => largest_first.first().copied(),
            BatchSizePolicy::Minimum => largest_first.last().copied(),
        }
    }
}

impl fmt::Display for BatchSizePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
