//! An in-memory [`Ledger`] with whole-state snapshots.

use std::collections::BTreeMap;

use alloy_primitives::{Address, Bytes, Log, B256, I256, U256};

use crate::{Ledger, Transaction};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Account {
    balance: U256,
    nonce: u64,
    code: Bytes,
    storage: BTreeMap<U256, U256>,
}

/// Everything a [`MemoryLedger::revert`] restores.
#[derive(Clone, Debug)]
pub struct MemorySnapshot {
    accounts: BTreeMap<Address, Account>,
    logs: Vec<Log>,
    suicides: Vec<Address>,
    ether_delta: I256,
}

/// A map-backed ledger for tests. Writes apply eagerly, so [`Ledger::commit`]
/// is a no-op and snapshots clone the full account state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryLedger {
    accounts: BTreeMap<Address, Account>,
    logs: Vec<Log>,
    suicides: Vec<Address>,
    ether_delta: I256,
    block_number: u64,
    coinbase: Address,
    timestamp: u64,
    ancestor_hashes: BTreeMap<u64, B256>,
    transactions: Vec<Transaction>,
}

impl MemoryLedger {
    /// Sets the block number this ledger is bound to.
    pub fn with_block_number(mut self, number: u64) -> Self {
        self.block_number = number;
        self
    }

    /// Sets the block beneficiary.
    pub fn with_coinbase(mut self, coinbase: Address) -> Self {
        self.coinbase = coinbase;
        self
    }

    /// Sets the block timestamp.
    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Registers the hash of the ancestor block at `number`.
    pub fn with_ancestor_hash(mut self, number: u64, hash: B256) -> Self {
        self.ancestor_hashes.insert(number, hash);
        self
    }

    /// Sets the balance of `address`.
    pub fn with_balance(mut self, address: Address, balance: U256) -> Self {
        self.accounts.entry(address).or_default().balance = balance;
        self
    }

    /// Sets the nonce of `address`.
    pub fn with_nonce(mut self, address: Address, nonce: u64) -> Self {
        self.accounts.entry(address).or_default().nonce = nonce;
        self
    }

    /// Sets the code of `address`.
    pub fn with_code(mut self, address: Address, code: impl Into<Bytes>) -> Self {
        self.accounts.entry(address).or_default().code = code.into();
        self
    }

    /// Sets one storage slot of `address`.
    pub fn with_storage(mut self, address: Address, key: U256, value: U256) -> Self {
        self.accounts.entry(address).or_default().storage.insert(key, value);
        self
    }

    /// The running ether-delta counter. Suicide resolution decreases it by
    /// exactly the removed balances.
    pub const fn ether_delta(&self) -> I256 {
        self.ether_delta
    }

    /// Logs pending for the current transaction.
    pub fn pending_logs(&self) -> &[Log] {
        &self.logs
    }

    /// Accounts queued for end-of-transaction removal.
    pub fn pending_suicides(&self) -> &[Address] {
        &self.suicides
    }

    /// Transactions recorded into the block so far.
    pub fn recorded_transactions(&self) -> &[Transaction] {
        &self.transactions
    }
}

impl Ledger for MemoryLedger {
    type Snapshot = MemorySnapshot;

    fn balance(&self, address: Address) -> U256 {
        self.accounts.get(&address).map(|a| a.balance).unwrap_or_default()
    }

    fn set_balance(&mut self, address: Address, balance: U256) {
        self.accounts.entry(address).or_default().balance = balance;
    }

    fn transfer_value(&mut self, from: Address, to: Address, value: U256) -> bool {
        if self.balance(from) < value {
            return false;
        }
        self.accounts.entry(from).or_default().balance -= value;
        self.accounts.entry(to).or_default().balance += value;
        true
    }

    fn nonce(&self, address: Address) -> u64 {
        self.accounts.get(&address).map(|a| a.nonce).unwrap_or_default()
    }

    fn set_nonce(&mut self, address: Address, nonce: u64) {
        self.accounts.entry(address).or_default().nonce = nonce;
    }

    fn increment_nonce(&mut self, address: Address) {
        self.accounts.entry(address).or_default().nonce += 1;
    }

    fn code(&self, address: Address) -> Bytes {
        self.accounts.get(&address).map(|a| a.code.clone()).unwrap_or_default()
    }

    fn set_code(&mut self, address: Address, code: Bytes) {
        self.accounts.entry(address).or_default().code = code;
    }

    fn storage(&self, address: Address, key: U256) -> U256 {
        self.accounts
            .get(&address)
            .and_then(|a| a.storage.get(&key).copied())
            .unwrap_or_default()
    }

    fn set_storage(&mut self, address: Address, key: U256, value: U256) {
        self.accounts.entry(address).or_default().storage.insert(key, value);
    }

    fn reset_storage(&mut self, address: Address) {
        if let Some(account) = self.accounts.get_mut(&address) {
            account.storage.clear();
        }
    }

    fn account_exists(&self, address: Address) -> bool {
        self.accounts.contains_key(&address)
    }

    fn delete_account(&mut self, address: Address) {
        self.accounts.remove(&address);
    }

    fn snapshot(&self) -> Self::Snapshot {
        MemorySnapshot {
            accounts: self.accounts.clone(),
            logs: self.logs.clone(),
            suicides: self.suicides.clone(),
            ether_delta: self.ether_delta,
        }
    }

    fn revert(&mut self, snapshot: Self::Snapshot) {
        self.accounts = snapshot.accounts;
        self.logs = snapshot.logs;
        self.suicides = snapshot.suicides;
        self.ether_delta = snapshot.ether_delta;
    }

    fn commit(&mut self) {}

    fn add_log(&mut self, log: Log) {
        self.logs.push(log);
    }

    fn take_logs(&mut self) -> Vec<Log> {
        std::mem::take(&mut self.logs)
    }

    fn add_suicide(&mut self, address: Address) {
        self.suicides.push(address);
    }

    fn take_suicides(&mut self) -> Vec<Address> {
        std::mem::take(&mut self.suicides)
    }

    fn sub_ether_delta(&mut self, amount: U256) {
        self.ether_delta -= I256::from_raw(amount);
    }

    fn block_number(&self) -> u64 {
        self.block_number
    }

    fn coinbase(&self) -> Address {
        self.coinbase
    }

    fn timestamp(&self) -> u64 {
        self.timestamp
    }

    fn ancestor_hash(&self, number: u64) -> B256 {
        self.ancestor_hashes.get(&number).copied().unwrap_or_default()
    }

    fn record_transaction(&mut self, tx: &Transaction) {
        self.transactions.push(tx.clone());
    }
}
