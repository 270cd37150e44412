//! HTTP access to the Radix Gateway API.

pub mod client;

pub use client::{get_transaction_details, get_transaction_stream, GatewayApiHttpClient};
