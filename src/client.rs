//! Blocking client for the rippled JSON-RPC admin API

use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL, CONTENT_TYPE};
use serde::de::DeserializeOwned;

use crate::error::{Result, RippledError};
use crate::request;
use crate::status::{self, Classify, Status};
use crate::types::{
    AuthorizeResult, ChannelOptions, ChannelsResult, ClientConfig, EngineResult, PingResult,
    Request, Response,
};

/// A classified reply.
///
/// A server-side failure (overload, duplicate submission, engine rejection)
/// is reported in `status`, not as an `Err`, so callers can decide whether
/// to resubmit.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<R> {
    pub status: Status,
    /// `None` when the server sent no `result` object.
    pub result: Option<R>,
}

impl<R> Outcome<R> {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Turns any non-success status into [`RippledError::Protocol`].
    pub fn into_result(self) -> Result<R> {
        match (self.status, self.result) {
            (Status::Success, Some(result)) => Ok(result),
            (Status::Success, None) => Err(RippledError::Protocol(Status::UnknownFailure(
                "missing result".to_string(),
            ))),
            (status, _) => Err(RippledError::Protocol(status)),
        }
    }
}

/// Client for one rippled server
///
/// Holds only the configured URL and an HTTP client, so one instance can be
/// shared between threads. Every method is a single independent POST.
///
/// # Example
///
/// ```rust,no_run
/// use rippled_rpc::{ClientConfig, Network, RippledClient};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = RippledClient::new(ClientConfig::new(Network::Local))?;
///
/// let outcome = client.get_channels("rSource...", "rDestination...")?;
/// if let Some(result) = outcome.result {
///     for channel in result.channels.unwrap_or_default() {
///         println!("{} holds {} drops", channel.channel_id, channel.amount);
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct RippledClient {
    config: ClientConfig,
    client: reqwest::blocking::Client,
}

impl RippledClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers())
            .build()
            .map_err(|e| RippledError::Configuration(format!("HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    pub fn url(&self) -> &str {
        self.config.network.api_url()
    }

    pub fn ping(&self) -> Result<Outcome<PingResult>> {
        self.invoke(&request::ping())
    }

    /// Asks the server to sign an XRP payment. The signed blob comes back in `tx_blob`.
    pub fn sign(
        &self,
        secret: &str,
        account: &str,
        destination: &str,
        amount_drops: u64,
    ) -> Result<Outcome<EngineResult>> {
        self.invoke(&request::sign(secret, account, destination, amount_drops)?)
    }

    pub fn submit_blob(&self, tx_blob: &str) -> Result<Outcome<EngineResult>> {
        self.invoke(&request::submit_blob(tx_blob)?)
    }

    /// Opens a payment channel from `account` to `destination`.
    ///
    /// `public_key_hex` is the hex form of the key that will sign claims.
    pub fn open_payment_channel(
        &self,
        secret: &str,
        account: &str,
        amount_drops: u64,
        destination: &str,
        public_key_hex: &str,
    ) -> Result<Outcome<EngineResult>> {
        self.open_payment_channel_with(
            secret,
            account,
            amount_drops,
            destination,
            public_key_hex,
            ChannelOptions::default(),
        )
    }

    pub fn open_payment_channel_with(
        &self,
        secret: &str,
        account: &str,
        amount_drops: u64,
        destination: &str,
        public_key_hex: &str,
        options: ChannelOptions,
    ) -> Result<Outcome<EngineResult>> {
        self.invoke(&request::open_payment_channel_with(
            secret,
            account,
            amount_drops,
            destination,
            public_key_hex,
            options,
        )?)
    }

    /// Lists channels open from `account` to `destination`.
    ///
    /// There is no way to ask for one channel in particular; pick from the list.
    pub fn get_channels(&self, account: &str, destination: &str) -> Result<Outcome<ChannelsResult>> {
        self.invoke(&request::get_channels(account, destination)?)
    }

    pub fn channel_authorize(
        &self,
        channel_id: &str,
        secret: &str,
        amount_drops: u64,
    ) -> Result<Outcome<AuthorizeResult>> {
        self.invoke(&request::channel_authorize(channel_id, secret, amount_drops)?)
    }

    /// Sends `request` and classifies the reply as `R`.
    pub fn invoke<R>(&self, request: &Request) -> Result<Outcome<R>>
    where
        R: DeserializeOwned + Classify,
    {
        let body = self.post(request)?;

        if let Some(status) = status::classify_body(&body) {
            warn!("{}: {}", request.method, status);
            return Ok(Outcome {
                status,
                result: None,
            });
        }

        let response: Response<R> = serde_json::from_str(&body).map_err(|source| {
            warn!("{}: undecodable response body: {}", request.method, source);
            RippledError::Decode { source, body }
        })?;

        let status = match &response.result {
            Some(result) => status::classify(result),
            None => Status::UnknownFailure("response has no result".to_string()),
        };
        if !status.is_success() {
            warn!("{}: {}", request.method, status);
        }

        Ok(Outcome {
            status,
            result: response.result,
        })
    }

    /// One POST of the encoded request. Returns the whole body as text.
    fn post(&self, request: &Request) -> Result<String> {
        let url = self.url();
        if url.trim().is_empty() {
            return Err(RippledError::Configuration("rippled URL is empty".to_string()));
        }

        let payload = serde_json::to_vec(request).map_err(RippledError::Serialization)?;
        debug!("{} -> {}", request.method, url);

        let response = self
            .client
            .post(url)
            .body(payload)
            .send()
            .map_err(|e| {
                if e.is_builder() {
                    RippledError::Configuration(format!("invalid rippled URL {url}: {e}"))
                } else {
                    RippledError::Transport(e)
                }
            })?;

        debug!("{} <- HTTP {}", request.method, response.status());
        Ok(response.text()?)
    }
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers
}
