use anyhow::{Context, Result};
use reqwest::{RequestBuilder, Response, Url};
use serde::Serialize;
use tracing::debug;

use crate::model::{
    IntentHash, Network, StateVersion, TransactionDetailRequest, TransactionStreamRequest,
};

pub const COMMITTED_DETAILS_PATH: &str = "transaction/committed-details";
pub const STREAM_TRANSACTIONS_PATH: &str = "stream/transactions";

/// Thin client over the Gateway API. Responses are handed back as-is:
/// no status check, no body parsing.
#[derive(Clone, Debug)]
pub struct GatewayApiHttpClient {
    pub url: Url,
    pub reqwest_client: reqwest::Client,
}

impl GatewayApiHttpClient {
    pub fn new(url: &str) -> Result<Self> {
        let mut url = Url::parse(url).context(format!("parsing gateway url {url}"))?;
        // Url::join drops the last segment unless the base ends with a slash
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(GatewayApiHttpClient {
            url,
            reqwest_client: reqwest::Client::new(),
        })
    }

    pub fn for_network(network: Network) -> Result<Self> {
        Self::new(network.gateway_url())
    }

    pub fn mainnet() -> Result<Self> {
        Self::for_network(Network::Mainnet)
    }

    pub fn transaction_details_request(&self, intent_hash: &IntentHash) -> Result<RequestBuilder> {
        self.post_json(
            COMMITTED_DETAILS_PATH,
            &TransactionDetailRequest::new(intent_hash.clone()),
        )
    }

    pub fn transaction_stream_request(&self, state_version: StateVersion) -> Result<RequestBuilder> {
        self.post_json(
            STREAM_TRANSACTIONS_PATH,
            &TransactionStreamRequest::new(state_version),
        )
    }

    pub async fn get_transaction_details(&self, intent_hash: &IntentHash) -> Result<Response> {
        self.transaction_details_request(intent_hash)?
            .send()
            .await
            .context(format!("getting committed details of {intent_hash}"))
    }

    pub async fn get_transaction_stream(&self, state_version: StateVersion) -> Result<Response> {
        self.transaction_stream_request(state_version)?
            .send()
            .await
            .context(format!("getting transaction stream at state version {state_version}"))
    }

    fn post_json<T: Serialize>(&self, endpoint: &str, payload: &T) -> Result<RequestBuilder> {
        let url = self
            .url
            .join(endpoint)
            .context(format!("building url for {endpoint}"))?;
        debug!("POST {}", url);
        Ok(self
            .reqwest_client
            .post(url)
            .body(serde_json::to_string(payload)?)
            .header("accept", "application/json")
            .header("Content-Type", "application/json"))
    }
}

/// Fetches committed details of `intent_hash` from the mainnet gateway.
pub async fn get_transaction_details(intent_hash: &IntentHash) -> Result<Response> {
    GatewayApiHttpClient::mainnet()?
        .get_transaction_details(intent_hash)
        .await
}

/// Fetches successful committed transactions at `state_version` from the mainnet gateway.
pub async fn get_transaction_stream(state_version: StateVersion) -> Result<Response> {
    GatewayApiHttpClient::mainnet()?
        .get_transaction_stream(state_version)
        .await
}
