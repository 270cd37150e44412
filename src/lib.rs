//! # radix-gateway-fetch
//!
//! *Two request builders for the [Radix Gateway API](https://radix-babylon-gateway-api.redoc.ly/).*
//!
//! * [`get_transaction_details`]: `POST /transaction/committed-details` for one intent hash,
//!   with every detail opt-in enabled.
//! * [`get_transaction_stream`]: `POST /stream/transactions` at a given state version,
//!   successful transactions only, with detailed events.
//!
//! Both hand back the raw [`reqwest::Response`]. Status codes are not checked and bodies
//! are not parsed, that is left to the caller.

pub mod model;
pub mod rest;
pub mod utils;

pub use model::{IntentHash, Network, StateVersion};
pub use rest::{get_transaction_details, get_transaction_stream, GatewayApiHttpClient};
