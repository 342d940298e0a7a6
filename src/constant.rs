//! Literals defined by the rippled admin API.
//!
//! [`SENTINELS`] is the single list of failure strings the classifier
//! recognises; supporting a new one means adding an entry here.

use std::time::Duration;

pub const METHOD_PING: &str = "ping";
pub const METHOD_SIGN: &str = "sign";
pub const METHOD_SUBMIT: &str = "submit";
pub const METHOD_ACCOUNT_CHANNELS: &str = "account_channels";
pub const METHOD_CHANNEL_AUTHORIZE: &str = "channel_authorize";

/// Value of `result.status` when a request succeeds.
pub const REQUEST_SUCCESS: &str = "success";
/// Value of `result.engine_result` when the transaction engine accepts a transaction.
pub const ENGINE_SUCCESS: &str = "tesSUCCESS";

/// Engine message for a destination account that does not hold enough XRP to exist.
pub const NO_DESTINATION: &str = "Destination does not exist. Send XRP to create it.";
/// Body returned when the rippled instance cannot take the request.
pub const SERVER_OVERLOADED: &str = "Server is overloaded";
/// Engine message when the same transaction hash is submitted twice.
pub const XACTION_EXISTS: &str = "The exact transaction was already in this ledger.";

/// Default `SettleDelay` for new payment channels (one day).
pub const DEFAULT_SETTLE_DELAY: u32 = 86_400;
/// Default `fee_mult_max` for channel creation.
pub const DEFAULT_FEE_MULT_MAX: u32 = 1_000;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where in a response a sentinel string is looked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentinelField {
    EngineResultMessage,
    ErrorMessage,
    /// The raw HTTP body, for replies that are not JSON at all.
    Body,
}

/// Failure category a sentinel maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentinelKind {
    DuplicateTransaction,
    ServerOverloaded,
    DestinationNotFunded,
}

#[derive(Debug, Clone, Copy)]
pub struct Sentinel {
    pub field: SentinelField,
    pub text: &'static str,
    pub kind: SentinelKind,
}

/// Every failure string the classifier recognises, checked in order.
pub const SENTINELS: &[Sentinel] = &[
    Sentinel {
        field: SentinelField::EngineResultMessage,
        text: XACTION_EXISTS,
        kind: SentinelKind::DuplicateTransaction,
    },
    Sentinel {
        field: SentinelField::ErrorMessage,
        text: SERVER_OVERLOADED,
        kind: SentinelKind::ServerOverloaded,
    },
    Sentinel {
        field: SentinelField::Body,
        text: SERVER_OVERLOADED,
        kind: SentinelKind::ServerOverloaded,
    },
    Sentinel {
        field: SentinelField::EngineResultMessage,
        text: NO_DESTINATION,
        kind: SentinelKind::DestinationNotFunded,
    },
];
