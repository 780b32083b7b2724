use super::OrderSheet;
use crate::{
    input::{InputError, OrderInput},
    policy::BatchSizePolicy,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Shared working input and last derived sheet
///
/// Cloning is cheap; clones share the same state.
#[derive(Clone)]
pub struct OrderBoard {
    input: Arc<RwLock<String>>,
    latest: Arc<RwLock<Option<OrderSheet>>>,
    default_policy: BatchSizePolicy,
}

impl OrderBoard {
    /// Creates a board holding `input` and no sheet yet
    ///
    /// # Arguments
    /// * `input` - Initial input text (usually the predefined payload)
    /// * `default_policy` - Policy used when neither the caller nor the input picks one
    pub fn new(input: String, default_policy: BatchSizePolicy) -> Self {
        Self {
            input: Arc::new(RwLock::new(input)),
            latest: Arc::new(RwLock::new(None)),
            default_policy,
        }
    }

    pub fn default_policy(&self) -> BatchSizePolicy {
        self.default_policy
    }

    pub async fn input(&self) -> String {
        self.input.read().await.clone()
    }

    /// Replace the working input text
    ///
    /// The text is not parsed until the next `produce`.
    pub async fn set_input(&self, text: String) {
        debug!("Replacing input ({} bytes)", text.len());
        let mut input = self.input.write().await;
        *input = text;
    }

    /// Derive an order sheet from the current input
    ///
    /// On success the sheet replaces the latest one. On failure the latest
    /// sheet is left as it was.
    ///
    /// # Arguments
    /// * `explicit` - Caller override; `None` defers to the input's flag
    pub async fn produce(
        &self,
        explicit: Option<BatchSizePolicy>,
    ) -> Result<OrderSheet, InputError> {
        let parsed = {
            let text = self.input.read().await;
            OrderInput::parse(&text)
        };
        let input = match parsed {
            Ok(input) => input,
            Err(e) => {
                warn!("Cannot derive orders from current input: {}", e);
                return Err(e);
            }
        };

        let policy = input.policy(explicit, self.default_policy);
        let sheet = OrderSheet::new(input.derive(policy), policy);
        info!(
            "Derived {} order lines with {} batch size policy",
            sheet.lines.len(),
            policy
        );

        let mut latest = self.latest.write().await;
        *latest = Some(sheet.clone());
        Ok(sheet)
    }

    pub async fn latest(&self) -> Option<OrderSheet> {
        self.latest.read().await.clone()
    }
}
