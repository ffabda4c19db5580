//! Transaction and message-call execution engine for a blockchain ledger.
//!
//! Given a signed [`Transaction`] and a mutable world-state behind the
//! [`Ledger`] capability trait, [`Executor::apply_transaction`] deterministically
//! applies state changes (balances, nonces, code, storage, logs) with
//! all-or-nothing semantics per nested call frame. Bytecode interpretation is
//! delegated to an opaque [`Interpreter`]; this crate owns the call/create
//! orchestration around it, including deterministic contract-address
//! derivation, snapshot/revert unwinding and fork-dependent consensus rules.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod constants;

mod address;
pub use address::*;

mod bloom;
pub use bloom::*;

mod config;
pub use config::*;

mod error;
pub use error::*;

mod executor;
pub use executor::*;

mod host;
pub use host::*;

mod interpreter;
pub use interpreter::*;

mod ledger;
pub use ledger::*;

pub mod precompiles;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

mod types;
pub use types::*;
