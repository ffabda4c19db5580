//! The ledger capability trait.
//!
//! A narrow mutation/query surface bound to one ledger/block instance. All
//! state access of the engine funnels through this trait; the engine assumes
//! exclusive ownership of the ledger for the duration of one transaction and
//! performs no locking of its own. Hosts wanting concurrent validation must
//! present each transaction with an isolated ledger.

use alloy_primitives::{Address, Bytes, Log, B256, U256};

use crate::Transaction;

/// Mutation and query surface a transaction needs from the world-state.
#[auto_impl::auto_impl(&mut, Box)]
pub trait Ledger {
    /// Opaque point-in-time capture of the ledger state. Reverting to it must
    /// restore exactly that state: storage, balances, code, nonces and the
    /// pending log/suicide queues touched since the capture.
    type Snapshot;

    /// Balance of `address`, zero for absent accounts.
    fn balance(&self, address: Address) -> U256;
    /// Sets the balance of `address`, instantiating the account if needed.
    fn set_balance(&mut self, address: Address, balance: U256);
    /// Atomically moves `value` from `from` to `to`. Returns `false` and has
    /// no side effect if `from`'s balance is insufficient.
    fn transfer_value(&mut self, from: Address, to: Address, value: U256) -> bool;

    /// Nonce of `address`.
    fn nonce(&self, address: Address) -> u64;
    /// Sets the nonce of `address`.
    fn set_nonce(&mut self, address: Address, nonce: u64);
    /// Increments the nonce of `address` by exactly one.
    fn increment_nonce(&mut self, address: Address);

    /// Code stored at `address`, empty for absent accounts.
    fn code(&self, address: Address) -> Bytes;
    /// Sets the code of `address`.
    fn set_code(&mut self, address: Address, code: Bytes);

    /// Storage value of `address` at `key`, zero when unset.
    fn storage(&self, address: Address, key: U256) -> U256;
    /// Sets the storage value of `address` at `key`.
    fn set_storage(&mut self, address: Address, key: U256, value: U256);
    /// Clears the whole storage of `address`.
    fn reset_storage(&mut self, address: Address);

    /// Whether an account exists at `address`.
    fn account_exists(&self, address: Address) -> bool;
    /// Removes the account at `address` entirely.
    fn delete_account(&mut self, address: Address);

    /// Captures the current state.
    fn snapshot(&self) -> Self::Snapshot;
    /// Restores a previously captured state.
    fn revert(&mut self, snapshot: Self::Snapshot);
    /// Flushes pending writes to the backing store.
    fn commit(&mut self);

    /// Appends a log to the per-transaction list.
    fn add_log(&mut self, log: Log);
    /// Drains the per-transaction log list.
    fn take_logs(&mut self) -> Vec<Log>;

    /// Enqueues `address` for removal at the end of the transaction. No
    /// immediate effect.
    fn add_suicide(&mut self, address: Address);
    /// Drains the suicide queue.
    fn take_suicides(&mut self) -> Vec<Address>;
    /// Subtracts `amount` from the running ether-removed counter.
    fn sub_ether_delta(&mut self, amount: U256);

    /// Number of the block this ledger instance is bound to.
    fn block_number(&self) -> u64;
    /// Beneficiary of the current block.
    fn coinbase(&self) -> Address;
    /// Timestamp of the current block.
    fn timestamp(&self) -> u64;
    /// Hash of the ancestor block at absolute `number`. The engine only asks
    /// for ancestors inside the 256-block window.
    fn ancestor_hash(&self, number: u64) -> B256;

    /// Appends a processed transaction to the block's transaction record.
    fn record_transaction(&mut self, tx: &Transaction);
}
