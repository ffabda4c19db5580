//! Interpreter doubles for driving the engine without real bytecode.

use core::fmt;
use std::collections::HashMap;

use alloy_primitives::Bytes;

use crate::{CallOutcome, Host, Interpreter, Message, TxError};

/// An interpreter that treats all code as a no-op returning empty output.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullInterpreter;

impl Interpreter for NullInterpreter {
    fn execute(
        &self,
        _host: &mut dyn Host,
        _msg: &Message,
        _code: &Bytes,
    ) -> Result<CallOutcome, TxError> {
        Ok(CallOutcome::output(Bytes::new()))
    }
}

type Script = Box<dyn Fn(&mut dyn Host, &Message) -> Result<CallOutcome, TxError> + Send + Sync>;

/// An interpreter scripted per code blob.
///
/// Code bytes act as the lookup key: whatever behavior a test registers for a
/// blob runs whenever an account carrying that blob (or a creation with it as
/// init code) executes. Unscripted code behaves like [`NullInterpreter`].
#[derive(Default)]
pub struct ScriptedInterpreter {
    scripts: HashMap<Bytes, Script>,
}

impl ScriptedInterpreter {
    /// Creates an interpreter with no scripts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `script` for executions of `code`.
    pub fn on_code(
        mut self,
        code: impl Into<Bytes>,
        script: impl Fn(&mut dyn Host, &Message) -> Result<CallOutcome, TxError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.scripts.insert(code.into(), Box::new(script));
        self
    }
}

impl Interpreter for ScriptedInterpreter {
    fn execute(
        &self,
        host: &mut dyn Host,
        msg: &Message,
        code: &Bytes,
    ) -> Result<CallOutcome, TxError> {
        match self.scripts.get(code) {
            Some(script) => script(host, msg),
            None => Ok(CallOutcome::output(Bytes::new())),
        }
    }
}

impl fmt::Debug for ScriptedInterpreter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptedInterpreter").field("scripts", &self.scripts.len()).finish()
    }
}
