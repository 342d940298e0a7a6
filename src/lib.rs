//! rippled RPC Library
//!
//! A blocking client for the rippled JSON-RPC admin API: ping, server-side
//! signing, blob submission and payment channel operations.
//!
//! # Example
//!
//! ```rust,no_run
//! use rippled_rpc::{ClientConfig, Network, RippledClient, Status};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = RippledClient::new(ClientConfig::new(Network::Local))?;
//!
//! let signed = client.sign("sSecret...", "rSource...", "rDestination...", 1_000_000)?;
//! let blob = signed.into_result()?.tx_blob.unwrap_or_default();
//!
//! match client.submit_blob(&blob)?.status {
//!     Status::Success | Status::DuplicateTransaction => println!("in the ledger"),
//!     Status::ServerOverloaded => println!("try again later"),
//!     other => println!("rejected: {}", other),
//! }
//! # Ok(())
//! # }
//! ```

// Public so callers can read the sentinel table and method names
pub mod constant;
pub mod error;
pub mod types;

pub mod client;
pub mod request;
pub mod status;

// Re-export main types for convenience
pub use client::{Outcome, RippledClient};
pub use error::{Result, RippledError};
pub use status::Status;
pub use types::{ChannelOptions, ClientConfig, Network, Request, Response};
