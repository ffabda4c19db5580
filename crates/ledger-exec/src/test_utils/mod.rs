//! Shared fixtures for unit and scenario tests.

mod interpreter;
pub use interpreter::*;

mod ledger;
pub use ledger::*;

use alloy_primitives::{Address, Bytes, TxKind, U256};

use crate::Transaction;

/// Builds a transaction with a recovered sender and a well-formed dummy
/// signature (`s` far below the half-order bound).
pub fn signed_tx(
    sender: Address,
    to: TxKind,
    value: U256,
    nonce: u64,
    data: impl Into<Bytes>,
) -> Transaction {
    Transaction {
        sender: Some(sender),
        to,
        value,
        nonce,
        data: data.into(),
        v: 27,
        r: U256::from(1),
        s: U256::from(1),
    }
}
