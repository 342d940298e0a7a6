//! Classification of rippled results into success and failure categories.
//!
//! rippled reports most failures with HTTP 200, so the decision is made from
//! the decoded result alone, by matching the literal strings in
//! [`crate::constant::SENTINELS`] and then the status and engine result fields.

use std::fmt;

use crate::constant::{
    SentinelField, SentinelKind, ENGINE_SUCCESS, REQUEST_SUCCESS, SENTINELS,
};
use crate::types::{
    AuthorizeResult, ChannelsResult, EngineFields, EngineResult, PingResult, StatusFields,
};

/// Outcome category of one call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Success,
    /// The transaction engine returned something other than `tesSUCCESS`.
    EngineFailure {
        result: String,
        code: Option<i64>,
        message: String,
    },
    ServerOverloaded,
    DuplicateTransaction,
    DestinationNotFunded,
    UnknownFailure(String),
}

impl Status {
    pub fn is_success(&self) -> bool {
        matches!(self, Status::Success)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Success => write!(f, "success"),
            Status::EngineFailure {
                result,
                code,
                message,
            } => match code {
                Some(code) => write!(f, "{result} ({code}): {message}"),
                None => write!(f, "{result}: {message}"),
            },
            Status::ServerOverloaded => write!(f, "server is overloaded"),
            Status::DuplicateTransaction => write!(f, "transaction already in ledger"),
            Status::DestinationNotFunded => write!(f, "destination account does not exist"),
            Status::UnknownFailure(raw) => write!(f, "unknown failure: {raw}"),
        }
    }
}

impl From<SentinelKind> for Status {
    fn from(kind: SentinelKind) -> Self {
        match kind {
            SentinelKind::DuplicateTransaction => Status::DuplicateTransaction,
            SentinelKind::ServerOverloaded => Status::ServerOverloaded,
            SentinelKind::DestinationNotFunded => Status::DestinationNotFunded,
        }
    }
}

/// Access to the fields the classifier reads.
pub trait Classify {
    fn status_fields(&self) -> &StatusFields;

    fn engine_fields(&self) -> Option<&EngineFields> {
        None
    }
}

impl Classify for PingResult {
    fn status_fields(&self) -> &StatusFields {
        &self.status
    }
}

impl Classify for EngineResult {
    fn status_fields(&self) -> &StatusFields {
        &self.status
    }

    fn engine_fields(&self) -> Option<&EngineFields> {
        Some(&self.engine)
    }
}

impl Classify for ChannelsResult {
    fn status_fields(&self) -> &StatusFields {
        &self.status
    }
}

impl Classify for AuthorizeResult {
    fn status_fields(&self) -> &StatusFields {
        &self.status
    }
}

/// Classifies a decoded result.
pub fn classify<R: Classify + ?Sized>(result: &R) -> Status {
    let fields = result.status_fields();
    let engine = result.engine_fields();
    let engine_message = engine.and_then(|e| e.engine_result_message.as_deref());

    for sentinel in SENTINELS {
        let value = match sentinel.field {
            SentinelField::EngineResultMessage => engine_message,
            SentinelField::ErrorMessage => fields.error_message.as_deref(),
            SentinelField::Body => None,
        };
        if value == Some(sentinel.text) {
            return sentinel.kind.into();
        }
    }

    let engine_result = engine
        .and_then(|e| e.engine_result.as_deref())
        .filter(|r| !r.is_empty());

    if fields.status == REQUEST_SUCCESS && engine_result.map_or(true, |r| r == ENGINE_SUCCESS) {
        return Status::Success;
    }

    if let (Some(result), Some(engine)) = (engine_result, engine) {
        if result != ENGINE_SUCCESS {
            return Status::EngineFailure {
                result: result.to_string(),
                code: engine.engine_result_code,
                message: engine.engine_result_message.clone().unwrap_or_default(),
            };
        }
    }

    Status::UnknownFailure(raw_failure(fields))
}

/// Classifies a raw body that is not a JSON envelope, if it is a known sentinel.
pub fn classify_body(body: &str) -> Option<Status> {
    let body = body.trim();
    SENTINELS
        .iter()
        .find(|s| s.field == SentinelField::Body && s.text == body)
        .map(|s| s.kind.into())
}

fn raw_failure(fields: &StatusFields) -> String {
    fields
        .error_message
        .clone()
        .or_else(|| fields.error.clone())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            if fields.status.is_empty() {
                "empty result".to_string()
            } else {
                fields.status.clone()
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::{NO_DESTINATION, SERVER_OVERLOADED, XACTION_EXISTS};
    use crate::types::Response;

    fn engine(status: &str, result: Option<&str>, code: Option<i64>, message: Option<&str>) -> EngineResult {
        EngineResult {
            status: StatusFields {
                status: status.to_string(),
                ..Default::default()
            },
            engine: EngineFields {
                engine_result: result.map(str::to_string),
                engine_result_code: code,
                engine_result_message: message.map(str::to_string),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_success_with_engine_success() {
        let body = r#"{"result":{"status":"success","engine_result":"tesSUCCESS"}}"#;
        let response: Response<EngineResult> = serde_json::from_str(body).unwrap();
        assert_eq!(classify(&response.result.unwrap()), Status::Success);
    }

    #[test]
    fn test_success_without_engine_result() {
        let result = PingResult {
            status: StatusFields {
                status: "success".to_string(),
                ..Default::default()
            },
            role: Some("admin".to_string()),
        };
        assert_eq!(classify(&result), Status::Success);
        assert_eq!(classify(&engine("success", None, None, None)), Status::Success);
    }

    #[test]
    fn test_overloaded_error_message() {
        let body = r#"{"result":{"error_message":"Server is overloaded"}}"#;
        let response: Response<EngineResult> = serde_json::from_str(body).unwrap();
        assert_eq!(classify(&response.result.unwrap()), Status::ServerOverloaded);
    }

    #[test]
    fn test_duplicate_regardless_of_status_and_code() {
        for status in ["success", "error", ""] {
            for code in [None, Some(-190), Some(0), Some(101)] {
                let result = engine(status, Some("tefPAST_SEQ"), code, Some(XACTION_EXISTS));
                assert_eq!(classify(&result), Status::DuplicateTransaction);
            }
        }
    }

    #[test]
    fn test_destination_not_funded() {
        let result = engine("success", Some("tecNO_DST_INSUF_XRP"), Some(125), Some(NO_DESTINATION));
        assert_eq!(classify(&result), Status::DestinationNotFunded);
    }

    #[test]
    fn test_engine_failure() {
        let result = engine(
            "success",
            Some("tecUNFUNDED_PAYMENT"),
            Some(104),
            Some("Insufficient XRP balance to send."),
        );
        assert_eq!(
            classify(&result),
            Status::EngineFailure {
                result: "tecUNFUNDED_PAYMENT".to_string(),
                code: Some(104),
                message: "Insufficient XRP balance to send.".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_failure_carries_error_message() {
        let result = ChannelsResult {
            status: StatusFields {
                status: "error".to_string(),
                error: Some("actNotFound".to_string()),
                error_code: Some(19),
                error_message: Some("Account not found.".to_string()),
            },
            ..Default::default()
        };
        assert_eq!(
            classify(&result),
            Status::UnknownFailure("Account not found.".to_string())
        );
    }

    #[test]
    fn test_unknown_failure_on_error_status_with_engine_success() {
        let result = engine("error", Some("tesSUCCESS"), Some(0), None);
        assert_eq!(classify(&result), Status::UnknownFailure("error".to_string()));
    }

    #[test]
    fn test_empty_engine_result_is_absent() {
        assert_eq!(classify(&engine("success", Some(""), None, None)), Status::Success);
        assert!(matches!(
            classify(&engine("error", Some(""), None, None)),
            Status::UnknownFailure(_)
        ));
    }

    #[test]
    fn test_classify_is_pure() {
        let result = engine("success", Some("terQUEUED"), Some(-89), Some("Held until escalated fee drops."));
        assert_eq!(classify(&result), classify(&result));
    }

    #[test]
    fn test_classify_body() {
        assert_eq!(classify_body(SERVER_OVERLOADED), Some(Status::ServerOverloaded));
        assert_eq!(classify_body("Server is overloaded\n"), Some(Status::ServerOverloaded));
        assert_eq!(classify_body("<html>502</html>"), None);
    }
}
