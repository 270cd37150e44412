//! Request payloads sent to the Gateway API.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Identifier of a submitted transaction intent, e.g. `txid_rdx1...`.
#[derive(Default, Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct IntentHash(pub String);

impl From<&str> for IntentHash {
    fn from(value: &str) -> Self {
        IntentHash(value.to_string())
    }
}

impl From<String> for IntentHash {
    fn from(value: String) -> Self {
        IntentHash(value)
    }
}

/// Ledger checkpoint, increases by one for every committed transaction.
#[derive(
    Default,
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
)]
pub struct StateVersion(pub u64);

impl From<u64> for StateVersion {
    fn from(value: u64) -> Self {
        StateVersion(value)
    }
}

/// Radix network a Gateway instance serves.
#[derive(Default, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Network {
    #[default]
    Mainnet,
    Stokenet,
}

const STOKENET_HRP_MARKER: &str = "_tdx_2_";

impl Network {
    pub fn gateway_url(&self) -> &'static str {
        match self {
            Network::Mainnet => "https://mainnet.radixdlt.com",
            Network::Stokenet => "https://stokenet.radixdlt.com",
        }
    }

    /// Guesses the network from a bech32 identifier (address, intent hash...).
    /// Anything that is not visibly a stokenet identifier is considered mainnet.
    pub fn from_identifier(identifier: &str) -> Self {
        if identifier.contains(STOKENET_HRP_MARKER) {
            Network::Stokenet
        } else {
            Network::Mainnet
        }
    }
}

/// Optional fields of `/transaction/committed-details`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionDetailsOptIns {
    pub raw_hex: bool,
    pub receipt_state_changes: bool,
    pub receipt_fee_summary: bool,
    pub manifest_instructions: bool,
    pub receipt_fee_source: bool,
    pub receipt_fee_destination: bool,
    pub receipt_costing_parameters: bool,
    pub receipt_events: bool,
    pub receipt_output: bool,
    pub affected_global_entities: bool,
    pub balance_changes: bool,
}

impl TransactionDetailsOptIns {
    pub fn all() -> Self {
        TransactionDetailsOptIns {
            raw_hex: true,
            receipt_state_changes: true,
            receipt_fee_summary: true,
            manifest_instructions: true,
            receipt_fee_source: true,
            receipt_fee_destination: true,
            receipt_costing_parameters: true,
            receipt_events: true,
            receipt_output: true,
            affected_global_entities: true,
            balance_changes: true,
        }
    }
}

impl Default for TransactionDetailsOptIns {
    fn default() -> Self {
        Self::all()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TransactionDetailRequest {
    pub intent_hash: IntentHash,
    pub opt_ins: TransactionDetailsOptIns,
}

impl TransactionDetailRequest {
    pub fn new(intent_hash: IntentHash) -> Self {
        TransactionDetailRequest {
            intent_hash,
            opt_ins: TransactionDetailsOptIns::all(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerStateSelector {
    pub state_version: StateVersion,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionStreamOptIns {
    pub detailed_events: bool,
}

#[derive(Default, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatusFilter {
    #[default]
    Success,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionStreamRequest {
    pub at_ledger_state: LedgerStateSelector,
    pub opt_ins: TransactionStreamOptIns,
    pub transaction_status_filter: TransactionStatusFilter,
}

impl TransactionStreamRequest {
    pub fn new(state_version: StateVersion) -> Self {
        TransactionStreamRequest {
            at_ledger_state: LedgerStateSelector { state_version },
            opt_ins: TransactionStreamOptIns {
                detailed_events: true,
            },
            transaction_status_filter: TransactionStatusFilter::Success,
        }
    }
}
