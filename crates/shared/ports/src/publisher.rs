use async_trait::async_trait;
use signalfeed_core::{StrategyId, StrategySignalBatch};

use crate::error::PublishResult;

/// Port for the remote strategy-signal endpoint
///
/// A batch is published in a single request or not at all. Any non-success
/// answer must come back as an error; implementations never swallow it.
#[async_trait]
pub trait SignalPublisher: Send + Sync {
    /// Upload every signal of the batch
    async fn publish(&self, batch: &StrategySignalBatch) -> PublishResult<()>;

    /// Remove every signal previously uploaded for a strategy
    async fn delete_signals(&self, strategy_id: StrategyId) -> PublishResult<()>;

    /// Destination description for logging
    fn destination(&self) -> &str;
}
