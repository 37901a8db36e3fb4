//! Read → transform → publish

use log::{debug, info, warn};
use serde::Serialize;
use signalfeed_core::{StrategyId, StrategySignalBatch};
use signalfeed_ports::{SignalPublisher, TradeSource};
use signalfeed_transformer::{TransformParams, transform};

use crate::error::WorkflowResult;

/// Outcome of an upload run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UploadReport {
    pub strategy_id: StrategyId,
    pub rows_read: usize,
    pub signals: usize,
    /// False when the batch was empty and nothing was sent
    pub published: bool,
}

/// Read the trade list and build the batch without sending it
pub fn transform_only<S>(source: &S, params: &TransformParams) -> WorkflowResult<StrategySignalBatch>
where
    S: TradeSource + ?Sized,
{
    read_and_transform(source, params).map(|(_, batch)| batch)
}

fn read_and_transform<S>(
    source: &S,
    params: &TransformParams,
) -> WorkflowResult<(usize, StrategySignalBatch)>
where
    S: TradeSource + ?Sized,
{
    let rows = source.read_trades()?;
    debug!("Read {} rows from {}", rows.len(), source.name());

    let batch = transform(&rows, params)?;
    debug!(
        "Transform successful: {} signals for strategy {}",
        batch.len(),
        batch.strategy_id
    );
    Ok((rows.len(), batch))
}

/// Upload the signals of a TradingView trade list
///
/// One request per run. An empty batch is skipped rather than sent.
pub async fn upload_tradingview_signal<S, P>(
    source: &S,
    publisher: &P,
    params: &TransformParams,
) -> WorkflowResult<UploadReport>
where
    S: TradeSource + ?Sized,
    P: SignalPublisher + ?Sized,
{
    let (rows_read, batch) = read_and_transform(source, params)?;

    let mut report = UploadReport {
        strategy_id: params.strategy_id,
        rows_read,
        signals: batch.len(),
        published: false,
    };

    if batch.is_empty() {
        warn!(
            "No signals in {} for strategy {}, nothing uploaded",
            source.name(),
            params.strategy_id
        );
        return Ok(report);
    }

    publisher.publish(&batch).await?;
    report.published = true;
    info!(
        "Uploaded {} signals for strategy {} to {}",
        report.signals,
        report.strategy_id,
        publisher.destination()
    );
    Ok(report)
}

/// Delete every signal of a strategy
pub async fn delete_backtest_signals<P>(publisher: &P, strategy_id: StrategyId) -> WorkflowResult<()>
where
    P: SignalPublisher + ?Sized,
{
    publisher.delete_signals(strategy_id).await?;
    info!(
        "Deleted signals of strategy {} at {}",
        strategy_id,
        publisher.destination()
    );
    Ok(())
}
