//! The fatal error channel of the engine.
//!
//! Fatal errors abort the whole transaction and are raised before any ledger
//! mutation. Ordinary execution failures (out of gas, reverted sub-call,
//! failed transfer) deliberately do not appear here: they travel as plain
//! [`crate::CallOutcome`] values so that nonce consumption persists while the
//! failed frame's effects are unwound through snapshot/revert.

/// Errors that abort transaction processing outright.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TxError {
    /// No sender could be recovered from the transaction signature.
    #[error("transaction has no recovered sender")]
    UnsignedTransaction,
    /// The transaction nonce does not match the sender account's nonce.
    #[error("invalid nonce: account is at {expected}, transaction carries {got}")]
    InvalidNonce {
        /// The sender account's current nonce.
        expected: u64,
        /// The nonce carried by the transaction.
        got: u64,
    },
    /// The signature `s` component exceeds half the secp256k1 group order.
    /// Enforced from the Homestead fork onward.
    #[error("signature s component exceeds the half-order bound")]
    HighS,
    /// A nested call or create exceeded the configured depth bound. This is a
    /// resource exhaustion of the engine itself, not an execution failure of
    /// the running code.
    #[error("call depth limit of {limit} exceeded")]
    DepthLimit {
        /// The configured maximum call depth.
        limit: u32,
    },
}
