//! Transaction application and the call/create state machine.
//!
//! [`Executor`] owns one transaction's journey through the engine: stateless
//! validation, the unconditional nonce spend, message dispatch or contract
//! creation, and end-of-transaction finalization (suicide queue, logs,
//! transaction record). Every nested frame runs between a snapshot and a
//! conditional revert, so a failing frame erases its own effects and nothing
//! else.

use alloy_primitives::{Address, Bytes, Log, LogData, B256, U256};
use tracing::{debug, warn};

use crate::{
    constants, contract_address, logs_bloom, precompiles, CallData, CallOutcome, ChainConfig,
    ForkId, Host, Interpreter, Ledger, Message, Payload, Transaction, TxError, TxOutcome,
};

/// Executes transactions against a [`Ledger`], delegating bytecode to an
/// [`Interpreter`].
#[allow(missing_debug_implementations)]
pub struct Executor<'a, L: Ledger> {
    ledger: &'a mut L,
    interpreter: &'a dyn Interpreter,
    config: &'a ChainConfig,
    fork: ForkId,
    origin: Address,
    depth: u32,
}

impl<'a, L: Ledger> Executor<'a, L> {
    /// Binds an executor to a ledger, an interpreter and a chain
    /// configuration. The active fork is fixed by the ledger's block number.
    pub fn new(
        ledger: &'a mut L,
        interpreter: &'a dyn Interpreter,
        config: &'a ChainConfig,
    ) -> Self {
        let fork = config.fork_at(ledger.block_number());
        Self { ledger, interpreter, config, fork, origin: Address::ZERO, depth: 0 }
    }

    /// The rule set active for this executor's block.
    pub const fn fork(&self) -> ForkId {
        self.fork
    }

    /// Stateless transaction checks. No mutation occurs on failure.
    fn validate(&self, tx: &Transaction) -> Result<Address, TxError> {
        let sender = tx.sender.ok_or(TxError::UnsignedTransaction)?;
        let expected = self.ledger.nonce(sender);
        if expected != tx.nonce {
            return Err(TxError::InvalidNonce { expected, got: tx.nonce });
        }
        Ok(sender)
    }

    /// Applies one transaction to the ledger.
    ///
    /// Fatal errors (`Err`) abort with the ledger untouched. An execution
    /// failure is an `Ok` outcome with `success == false`: the failed frame's
    /// effects are unwound, but the sender's nonce spend persists.
    pub fn apply_transaction(&mut self, tx: &Transaction) -> Result<TxOutcome, TxError> {
        let sender = self.validate(tx)?;
        debug!(
            target: "exec::tx",
            sender = %sender,
            nonce = tx.nonce,
            value = %tx.value,
            create = tx.is_create(),
            "new transaction"
        );

        // Low-s enforcement belongs to the fatal channel, which guarantees
        // zero mutation, so it runs ahead of the nonce spend.
        if self.fork.is_homestead() && tx.s > constants::SECP256K1_HALF_ORDER {
            return Err(TxError::HighS);
        }

        // A failed transaction still costs exactly one nonce increment.
        self.ledger.increment_nonce(sender);

        self.origin = sender;
        self.depth = 0;
        let msg = Message::from_transaction(tx);
        let result =
            if tx.is_create() { self.create_contract(msg)? } else { self.call_message(msg)? };
        debug!(target: "exec::tx", success = result.success, "transaction applied");

        let (success, output) = match result {
            CallOutcome { success: false, .. } => (false, Payload::Empty),
            // The refused-transfer sentinel: the frame reported success but
            // nothing happened. The transaction as a whole is a failure.
            CallOutcome { success: true, payload: Payload::Empty } => (false, Payload::Empty),
            CallOutcome { success: true, payload } => (true, payload),
        };

        self.ledger.commit();
        for account in self.ledger.take_suicides() {
            let balance = self.ledger.balance(account);
            self.ledger.sub_ether_delta(balance);
            self.ledger.set_balance(account, U256::ZERO);
            self.ledger.delete_account(account);
        }
        let logs = self.ledger.take_logs();
        let bloom = logs_bloom(&logs);
        self.ledger.record_transaction(tx);

        Ok(TxOutcome { success, output, logs, bloom })
    }

    /// Dispatches a message call, resolving the code from `code_address`.
    pub fn call_message(&mut self, msg: Message) -> Result<CallOutcome, TxError> {
        let code = self.ledger.code(msg.code_address);
        self.execute_message(msg, &code)
    }

    /// Runs `code` in the context of `msg`, wrapped in snapshot/revert.
    ///
    /// A refused value transfer is not an execution failure: it yields the
    /// `(success, empty)` sentinel with no effect beyond the snapshot being
    /// dropped. A genuine failure reverts every effect of this frame and its
    /// sub-frames and propagates unchanged.
    fn execute_message(&mut self, msg: Message, code: &Bytes) -> Result<CallOutcome, TxError> {
        if msg.depth > self.config.max_call_depth {
            return Err(TxError::DepthLimit { limit: self.config.max_call_depth });
        }
        debug!(
            target: "exec::msg",
            sender = %msg.sender,
            to = %msg.to,
            value = %msg.value,
            depth = msg.depth,
            "message apply"
        );

        let snapshot = self.ledger.snapshot();
        if !self.ledger.transfer_value(msg.sender, msg.to, msg.value) {
            debug!(
                target: "exec::msg",
                have = %self.ledger.balance(msg.sender),
                want = %msg.value,
                "message transfer failed"
            );
            return Ok(CallOutcome::no_effect());
        }

        let outcome = if let Some(builtin) = precompiles::lookup(msg.code_address) {
            builtin(self, &msg)
        } else {
            let parent_depth = self.depth;
            self.depth = msg.depth;
            let interpreter = self.interpreter;
            let result = interpreter.execute(self, &msg, code);
            self.depth = parent_depth;
            result?
        };

        if !outcome.success {
            debug!(target: "exec::msg", "reverting");
            self.ledger.revert(snapshot);
        }
        Ok(outcome)
    }

    /// Creates a contract from `msg`, whose data carries the init code.
    pub fn create_contract(&mut self, mut msg: Message) -> Result<CallOutcome, TxError> {
        // The transaction's own creation already spent its nonce in
        // `apply_transaction`; nested creations spend one here.
        if self.origin != msg.sender {
            self.ledger.increment_nonce(msg.sender);
        }
        let nonce = self.ledger.nonce(msg.sender) - 1;
        msg.to = contract_address(msg.sender, nonce);

        // Address reuse before deploy: keep the funds, wipe everything else,
        // and create over the pre-funded account instead of failing.
        let balance = self.ledger.balance(msg.to);
        if balance > U256::ZERO {
            self.ledger.set_balance(msg.to, balance);
            self.ledger.set_nonce(msg.to, self.config.account_initial_nonce);
            self.ledger.set_code(msg.to, Bytes::new());
            self.ledger.reset_storage(msg.to);
        }

        // Init code runs with empty call data.
        msg.is_create = true;
        let init_code = msg.data.extract_all();
        msg.data = CallData::empty();
        let target = msg.to;

        let outcome = self.execute_message(msg, &init_code)?;
        if !outcome.success {
            return Ok(CallOutcome::failure());
        }
        let runtime_code = outcome.payload.bytes();
        if runtime_code.is_empty() {
            // The contract has no runtime code; nothing is stored.
            return Ok(CallOutcome::created(target));
        }
        if self.fork.is_homestead() {
            // Corrected rule: a creation that completes with a non-empty
            // payload after exhausting its gas is an outright failure.
            return Ok(CallOutcome::failure());
        }
        // Historic rule, kept bit-for-bit: the anomaly is logged, the payload
        // is discarded, and the deployment goes through with empty code.
        warn!(target: "exec::msg", address = %target, "contract creation out of gas");
        self.ledger.set_code(target, Bytes::new());
        Ok(CallOutcome::created(target))
    }
}

impl<L: Ledger> Host for Executor<'_, L> {
    fn balance(&self, address: Address) -> U256 {
        self.ledger.balance(address)
    }

    fn set_balance(&mut self, address: Address, balance: U256) {
        self.ledger.set_balance(address, balance);
    }

    fn code(&self, address: Address) -> Bytes {
        self.ledger.code(address)
    }

    fn storage(&self, address: Address, key: U256) -> U256 {
        self.ledger.storage(address, key)
    }

    fn set_storage(&mut self, address: Address, key: U256, value: U256) {
        self.ledger.set_storage(address, key, value);
    }

    fn account_exists(&self, address: Address) -> bool {
        self.ledger.account_exists(address)
    }

    fn log(&mut self, address: Address, topics: Vec<B256>, data: Bytes) {
        self.ledger.add_log(Log { address, data: LogData::new_unchecked(topics, data) });
    }

    fn add_suicide(&mut self, address: Address) {
        self.ledger.add_suicide(address);
    }

    fn block_hash(&self, number: u64) -> B256 {
        let current = self.ledger.block_number();
        if number < current && current - number <= constants::BLOCKHASH_WINDOW {
            self.ledger.ancestor_hash(number)
        } else {
            B256::ZERO
        }
    }

    fn block_number(&self) -> u64 {
        self.ledger.block_number()
    }

    fn coinbase(&self) -> Address {
        self.ledger.coinbase()
    }

    fn timestamp(&self) -> u64 {
        self.ledger.timestamp()
    }

    fn tx_origin(&self) -> Address {
        self.origin
    }

    fn call(&mut self, mut msg: Message) -> Result<CallOutcome, TxError> {
        msg.depth = self.depth + 1;
        self.call_message(msg)
    }

    fn create(&mut self, mut msg: Message) -> Result<CallOutcome, TxError> {
        msg.depth = self.depth + 1;
        self.create_contract(msg)
    }
}
