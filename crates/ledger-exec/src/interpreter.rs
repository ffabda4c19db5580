//! The opaque bytecode interpreter boundary.

use alloy_primitives::Bytes;

use crate::{CallOutcome, Host, Message, TxError};

/// Executes bytecode against a [`Host`].
///
/// Opcode semantics and gas metering live entirely behind this trait; the
/// engine only cares about the success flag and the output bytes. The
/// interpreter may re-enter the engine through [`Host::call`] and
/// [`Host::create`], and must propagate any fatal error those return
/// unchanged.
pub trait Interpreter {
    /// Runs `code` in the context of `msg`.
    fn execute(
        &self,
        host: &mut dyn Host,
        msg: &Message,
        code: &Bytes,
    ) -> Result<CallOutcome, TxError>;
}
