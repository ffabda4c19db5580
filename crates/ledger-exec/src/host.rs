//! The surface nested execution sees.
//!
//! The interpreter and the builtins run against `dyn Host` rather than the
//! concrete executor, so re-entrant calls and creates are ordinary trait
//! methods instead of captured callbacks. [`crate::Executor`] is the only
//! implementation in this crate.

use alloy_primitives::{Address, Bytes, B256, U256};

use crate::{CallOutcome, Message, TxError};

/// World-state and block context exposed to running code, plus the re-entry
/// points for nested calls and creates.
pub trait Host {
    /// Balance of `address`.
    fn balance(&self, address: Address) -> U256;
    /// Sets the balance of `address`.
    fn set_balance(&mut self, address: Address, balance: U256);
    /// Code stored at `address`.
    fn code(&self, address: Address) -> Bytes;
    /// Storage value of `address` at `key`.
    fn storage(&self, address: Address, key: U256) -> U256;
    /// Sets the storage value of `address` at `key`.
    fn set_storage(&mut self, address: Address, key: U256, value: U256);
    /// Whether an account exists at `address`.
    fn account_exists(&self, address: Address) -> bool;

    /// Emits a log from `address`.
    fn log(&mut self, address: Address, topics: Vec<B256>, data: Bytes);
    /// Enqueues `address` for removal at the end of the transaction.
    fn add_suicide(&mut self, address: Address);

    /// Hash of the block at `number`. Only the 256 most recent ancestors are
    /// retrievable; anything else yields the zero hash.
    fn block_hash(&self, number: u64) -> B256;
    /// Number of the current block.
    fn block_number(&self) -> u64;
    /// Beneficiary of the current block.
    fn coinbase(&self) -> Address;
    /// Timestamp of the current block.
    fn timestamp(&self) -> u64;
    /// Sender of the top-level transaction.
    fn tx_origin(&self) -> Address;

    /// Dispatches a nested message call. Execution failures come back as
    /// [`CallOutcome`] values; `Err` is reserved for fatal processing errors
    /// such as the depth bound.
    fn call(&mut self, msg: Message) -> Result<CallOutcome, TxError>;
    /// Runs a nested contract creation.
    fn create(&mut self, msg: Message) -> Result<CallOutcome, TxError>;
}
