//! Core data types of the execution engine.

use alloy_primitives::{Address, Bloom, Bytes, Log, TxKind, U256};
use serde::{Deserialize, Serialize};

/// A signed transaction, immutable once constructed.
///
/// Signature recovery happens upstream; `sender` is `None` when no sender
/// could be recovered, which makes the transaction unprocessable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Sender recovered from the signature, if any.
    pub sender: Option<Address>,
    /// Call target, or [`TxKind::Create`] for contract creation.
    pub to: TxKind,
    /// Value transferred to the recipient.
    pub value: U256,
    /// Sender account nonce this transaction spends.
    pub nonce: u64,
    /// Call data, or init code for creations.
    pub data: Bytes,
    /// Signature recovery id.
    pub v: u64,
    /// Signature `r` component.
    pub r: U256,
    /// Signature `s` component.
    pub s: U256,
}

impl Transaction {
    /// Whether this transaction creates a contract.
    pub const fn is_create(&self) -> bool {
        self.to.is_create()
    }
}

/// A logical byte range over an immutable buffer.
///
/// Extraction is bounds-safe: reads never go past the declared length, and
/// ranges extending beyond it are zero-filled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallData {
    buf: Bytes,
    offset: usize,
    len: usize,
}

impl CallData {
    /// Creates a view over `buf` starting at `offset` spanning `len` bytes.
    /// The range is clamped to the buffer.
    pub fn new(buf: Bytes, offset: usize, len: usize) -> Self {
        let offset = offset.min(buf.len());
        let len = len.min(buf.len() - offset);
        Self { buf, offset, len }
    }

    /// Creates a view over the whole of `buf`.
    pub fn whole(buf: Bytes) -> Self {
        let len = buf.len();
        Self { buf, offset: 0, len }
    }

    /// The empty view.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Declared length of the view.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the view is empty.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Copies the entire view out.
    pub fn extract_all(&self) -> Bytes {
        self.buf.slice(self.offset..self.offset + self.len)
    }

    /// Copies `size` bytes starting at `start` within the view, zero-filling
    /// everything past the declared length.
    pub fn extract(&self, start: usize, size: usize) -> Bytes {
        let mut out = vec![0u8; size];
        if start < self.len {
            let n = size.min(self.len - start);
            let from = self.offset + start;
            out[..n].copy_from_slice(&self.buf[from..from + n]);
        }
        out.into()
    }
}

/// One message in the call tree, either a call or a create-init execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// Account the message executes on behalf of.
    pub sender: Address,
    /// Recipient of value and execution context. For creations this is the
    /// zero sentinel until the creator resolves the target address.
    pub to: Address,
    /// Value transferred from sender to recipient.
    pub value: U256,
    /// Input view. Cleared before init code runs.
    pub data: CallData,
    /// Account whose code executes. May differ from `to` for delegated
    /// execution and selects the builtin for precompile addresses.
    pub code_address: Address,
    /// Whether this message deploys a contract.
    pub is_create: bool,
    /// Nesting depth, zero for the transaction's own message.
    pub depth: u32,
}

impl Message {
    /// Builds the initial message of a transaction.
    ///
    /// Must only be called on a validated transaction with a recovered
    /// sender. For creations the recipient stays the zero sentinel until
    /// [`crate::Executor`] derives the contract address.
    pub fn from_transaction(tx: &Transaction) -> Self {
        let to = tx.to.to().copied().unwrap_or(Address::ZERO);
        Self {
            sender: tx.sender.unwrap_or(Address::ZERO),
            to,
            value: tx.value,
            data: CallData::whole(tx.data.clone()),
            code_address: to,
            is_create: false,
            depth: 0,
        }
    }
}

/// Result payload of a call or create.
///
/// The three shapes are part of the engine's contract and must not be
/// normalized away: a plain call yields output bytes, a creation yields the
/// deployed address, and the no-effect/failure cases yield nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Payload {
    /// No payload.
    #[default]
    Empty,
    /// Output bytes returned by executed code.
    Output(Bytes),
    /// Address of a deployed contract.
    Created(Address),
}

impl Payload {
    /// The output bytes, empty for the other shapes.
    pub fn bytes(&self) -> Bytes {
        match self {
            Self::Output(bytes) => bytes.clone(),
            Self::Empty | Self::Created(_) => Bytes::new(),
        }
    }

    /// The created address, if this payload carries one.
    pub const fn created(&self) -> Option<Address> {
        match self {
            Self::Created(address) => Some(*address),
            Self::Empty | Self::Output(_) => None,
        }
    }
}

/// Outcome of one message dispatch or contract creation.
///
/// Failure is an ordinary value here, never a raised error: the caller
/// unwinds the frame's effects through snapshot/revert and keeps going.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallOutcome {
    /// Whether the frame completed successfully.
    pub success: bool,
    /// Result payload.
    pub payload: Payload,
}

impl CallOutcome {
    /// An execution failure. The dispatching frame reverts to its snapshot.
    pub const fn failure() -> Self {
        Self { success: false, payload: Payload::Empty }
    }

    /// The insufficient-balance sentinel: a *successful* result carrying no
    /// effect beyond the refused transfer. Distinct from [`Self::failure`]
    /// and must not be conflated with it.
    pub const fn no_effect() -> Self {
        Self { success: true, payload: Payload::Empty }
    }

    /// A successful call returning `output`.
    pub const fn output(output: Bytes) -> Self {
        Self { success: true, payload: Payload::Output(output) }
    }

    /// A successful creation deploying at `address`.
    pub const fn created(address: Address) -> Self {
        Self { success: true, payload: Payload::Created(address) }
    }
}

/// Outcome of a fully applied transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxOutcome {
    /// Whether the transaction's execution succeeded.
    pub success: bool,
    /// Output bytes for calls, the deployed address for creations, empty on
    /// failure.
    pub output: Payload,
    /// Logs emitted by the transaction, in emission order.
    pub logs: Vec<Log>,
    /// Bloom filter over the emitted logs' addresses and topics.
    pub bloom: Bloom,
}
