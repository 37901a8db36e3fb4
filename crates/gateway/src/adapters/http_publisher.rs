//! HTTP publisher for the strategy-signal endpoint

use async_trait::async_trait;
use log::{debug, info};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use signalfeed_core::{StrategyId, StrategySignalBatch};
use signalfeed_ports::{PublishError, PublishResult, SignalPublisher};

use crate::config::PublisherConfig;
use crate::error::GatewayError;

/// Body of a delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteSignalsRequest {
    pub strategy_id: StrategyId,
}

/// Publishes signal batches with one JSON request each
///
/// Authorization headers are fixed when the publisher is built.
#[derive(Clone)]
pub struct HttpSignalPublisher {
    client: Client,
    endpoint: Url,
    destination: String,
}

impl HttpSignalPublisher {
    pub fn new(config: &PublisherConfig) -> Result<Self, GatewayError> {
        let endpoint = config.endpoint_url()?;
        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(config.auth.headers()?)
            .build()?;

        debug!(
            "HTTP publisher for {} (auth: {}, timeout: {:?})",
            endpoint,
            config.auth.mode(),
            config.timeout
        );

        Ok(Self {
            client,
            destination: endpoint.to_string(),
            endpoint,
        })
    }

    async fn handle_response(&self, resp: reqwest::Response) -> PublishResult<()> {
        let status = resp.status();
        let body = resp.text().await.map_err(transport_error)?;

        if !status.is_success() {
            return Err(PublishError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Endpoint answered {}: {}", status, body);
        Ok(())
    }
}

fn transport_error(err: reqwest::Error) -> PublishError {
    PublishError::Transport(err.to_string())
}

#[async_trait]
impl SignalPublisher for HttpSignalPublisher {
    async fn publish(&self, batch: &StrategySignalBatch) -> PublishResult<()> {
        info!(
            "Uploading {} signals for strategy {} to {}",
            batch.len(),
            batch.strategy_id,
            self.endpoint
        );
        let resp = self
            .client
            .post(self.endpoint.clone())
            .json(batch)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(resp).await
    }

    async fn delete_signals(&self, strategy_id: StrategyId) -> PublishResult<()> {
        info!(
            "Deleting all signals of strategy {} at {}",
            strategy_id, self.endpoint
        );
        let resp = self
            .client
            .delete(self.endpoint.clone())
            .json(&DeleteSignalsRequest { strategy_id })
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(resp).await
    }

    fn destination(&self) -> &str {
        &self.destination
    }
}
