//! Wire types for the rippled JSON-RPC API and client configuration

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constant::{DEFAULT_FEE_MULT_MAX, DEFAULT_SETTLE_DELAY, DEFAULT_TIMEOUT};
use crate::error::{Result, RippledError};

/// rippled server to talk to
#[derive(Debug, Clone, PartialEq)]
pub enum Network {
    /// Admin port of a server on this host
    Local,
    /// Any other server, by URL
    Custom(String),
}

impl Network {
    pub fn api_url(&self) -> &str {
        match self {
            Network::Local => "http://localhost:5005/",
            Network::Custom(url) => url,
        }
    }
}

/// Settings a [`crate::RippledClient`] is built from. Read-only once the client exists.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub network: Network,
    /// Whole-request timeout for each call.
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(network: Network) -> Self {
        Self {
            network,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads `RIPPLED_URL` and, if set, `RIPPLED_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        let url = std::env::var("RIPPLED_URL")
            .map_err(|_| RippledError::Configuration("RIPPLED_URL is not set".to_string()))?;
        let mut config = Self::new(Network::Custom(url));

        if let Ok(secs) = std::env::var("RIPPLED_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                RippledError::Configuration(format!("RIPPLED_TIMEOUT_SECS is not a number: {secs}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(Network::Local)
    }
}

/// Knobs for `PaymentChannelCreate`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelOptions {
    /// Seconds the source must wait before closing a channel with unclaimed XRP.
    pub settle_delay: u32,
    pub fee_mult_max: u32,
}

impl Default for ChannelOptions {
    fn default() -> Self {
        Self {
            settle_delay: DEFAULT_SETTLE_DELAY,
            fee_mult_max: DEFAULT_FEE_MULT_MAX,
        }
    }
}

/// An amount of XRP in drops.
///
/// rippled reports response-side amounts as decimal strings. Only strings of
/// ASCII digits are accepted; JSON numbers and anything else fail to decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Drops(pub u64);

impl FromStr for Drops {
    type Err = RippledError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RippledError::Validation(format!(
                "not a decimal drops amount: {s:?}"
            )));
        }
        s.parse::<u64>()
            .map(Drops)
            .map_err(|e| RippledError::Validation(format!("drops amount {s:?}: {e}")))
    }
}

impl fmt::Display for Drops {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Drops {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Drops {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// `{"method": ..., "params": [...]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub method: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Param>,
}

impl Request {
    pub fn new(method: &str) -> Self {
        Self {
            method: method.to_string(),
            params: Vec::new(),
        }
    }

    pub fn with_param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }
}

/// One entry of `params`. Unset fields are left off the wire entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Param {
    /// `true` stops the server from auto-filling sequence and fee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offline: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_json: Option<Transaction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_blob: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_mult_max: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    Payment,
    PaymentChannelCreate,
}

/// Unsigned transaction body sent as `tx_json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    /// Drops.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,
    /// Seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settle_delay: Option<u32>,
    /// Hex encoded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
}

impl Transaction {
    pub fn payment(account: &str, destination: &str, amount_drops: u64) -> Self {
        Self {
            account: Some(account.to_string()),
            amount: Some(amount_drops),
            destination: Some(destination.to_string()),
            transaction_type: Some(TransactionType::Payment),
            ..Default::default()
        }
    }

    pub fn payment_channel_create(
        account: &str,
        destination: &str,
        amount_drops: u64,
        settle_delay: u32,
        public_key_hex: &str,
    ) -> Self {
        Self {
            account: Some(account.to_string()),
            amount: Some(amount_drops),
            destination: Some(destination.to_string()),
            transaction_type: Some(TransactionType::PaymentChannelCreate),
            settle_delay: Some(settle_delay),
            public_key: Some(public_key_hex.to_string()),
        }
    }

    /// Checks the fields `TransactionType` makes mandatory are present.
    pub fn validate(&self) -> Result<()> {
        let kind = self
            .transaction_type
            .ok_or_else(|| RippledError::Validation("TransactionType is missing".to_string()))?;

        require(&self.account, "Account")?;
        require(&self.destination, "Destination")?;
        if self.amount.is_none() {
            return Err(RippledError::Validation("Amount is missing".to_string()));
        }

        if kind == TransactionType::PaymentChannelCreate {
            if self.settle_delay.is_none() {
                return Err(RippledError::Validation("SettleDelay is missing".to_string()));
            }
            require(&self.public_key, "PublicKey")?;
        }

        Ok(())
    }
}

fn require(field: &Option<String>, name: &str) -> Result<()> {
    match field {
        Some(v) if !v.is_empty() => Ok(()),
        _ => Err(RippledError::Validation(format!("{name} is missing"))),
    }
}

/// `{"result": ...}`, with the result shape picked by the caller per method.
#[derive(Debug, Clone, Deserialize)]
pub struct Response<R> {
    pub result: Option<R>,
}

/// Fields every result may carry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatusFields {
    #[serde(default)]
    pub status: String,
    /// Short error token, e.g. `actNotFound`.
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Transaction engine outcome, reported by `sign` and `submit`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EngineFields {
    #[serde(default)]
    pub engine_result: Option<String>,
    #[serde(default)]
    pub engine_result_code: Option<i64>,
    #[serde(default)]
    pub engine_result_message: Option<String>,
}

/// `ping`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PingResult {
    #[serde(flatten)]
    pub status: StatusFields,
    #[serde(default)]
    pub role: Option<String>,
}

/// `sign` and `submit`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EngineResult {
    #[serde(flatten)]
    pub status: StatusFields,
    #[serde(flatten)]
    pub engine: EngineFields,
    #[serde(default)]
    pub tx_blob: Option<String>,
    #[serde(default)]
    pub tx_json: Option<TxDetail>,
    #[serde(default)]
    pub accepted: Option<bool>,
    #[serde(default)]
    pub applied: Option<bool>,
}

/// Transaction as echoed back by the server.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TxDetail {
    #[serde(default)]
    pub account: Option<String>,
    #[serde(default)]
    pub amount: Option<Drops>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub fee: Option<Drops>,
    #[serde(default)]
    pub flags: Option<u32>,
    #[serde(default)]
    pub sequence: Option<u32>,
    #[serde(default)]
    pub signing_pub_key: Option<String>,
    #[serde(default)]
    pub transaction_type: Option<String>,
    #[serde(default)]
    pub txn_signature: Option<String>,
    #[serde(default, rename = "hash")]
    pub hash: Option<String>,
}

/// `account_channels`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChannelsResult {
    #[serde(flatten)]
    pub status: StatusFields,
    #[serde(default)]
    pub account: Option<String>,
    #[serde(default)]
    pub channels: Option<Vec<ChannelInfo>>,
    #[serde(default)]
    pub ledger_index: Option<u64>,
    #[serde(default)]
    pub validated: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChannelInfo {
    pub account: String,
    /// Total XRP allocated to the channel.
    pub amount: Drops,
    /// XRP already paid out of the channel.
    pub balance: Drops,
    pub channel_id: String,
    pub destination_account: String,
    #[serde(default)]
    pub public_key: Option<String>,
    #[serde(default)]
    pub public_key_hex: Option<String>,
    pub settle_delay: u32,
    #[serde(default)]
    pub expiration: Option<u32>,
    #[serde(default)]
    pub cancel_after: Option<u32>,
}

/// `channel_authorize`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AuthorizeResult {
    #[serde(flatten)]
    pub status: StatusFields,
    /// Claim signature, hex encoded.
    #[serde(default)]
    pub signature: Option<String>,
}
