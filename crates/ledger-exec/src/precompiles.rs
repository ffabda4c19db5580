//! Builtin contracts addressable like ordinary accounts.
//!
//! Builtins use the same calling contract as the interpreter: they receive
//! the host and the message and report their result as a plain
//! [`CallOutcome`]. The dispatcher routes to them by `code_address`, bypassing
//! the interpreter entirely.

use alloy_primitives::{map::HashMap, Address, Bytes, B256};
use once_cell::sync::Lazy;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use crate::{constants, CallOutcome, Host, Message};

/// A builtin host function.
pub type PrecompileFn = fn(&mut dyn Host, &Message) -> CallOutcome;

static PRECOMPILES: Lazy<HashMap<Address, PrecompileFn>> = Lazy::new(|| {
    let mut map = HashMap::default();
    map.insert(constants::SHA256_ADDRESS, proc_sha256 as PrecompileFn);
    map.insert(constants::RIPEMD160_ADDRESS, proc_ripemd160 as PrecompileFn);
    map.insert(constants::IDENTITY_ADDRESS, proc_identity as PrecompileFn);
    map
});

/// Looks up the builtin registered at `address`.
pub fn lookup(address: Address) -> Option<PrecompileFn> {
    PRECOMPILES.get(&address).copied()
}

/// Whether a builtin is registered at `address`.
pub fn is_precompile(address: Address) -> bool {
    PRECOMPILES.contains_key(&address)
}

fn proc_sha256(_host: &mut dyn Host, msg: &Message) -> CallOutcome {
    let digest = Sha256::digest(msg.data.extract_all());
    CallOutcome::output(Bytes::copy_from_slice(&digest))
}

fn proc_ripemd160(_host: &mut dyn Host, msg: &Message) -> CallOutcome {
    let digest = Ripemd160::digest(msg.data.extract_all());
    // Left-padded to a 32-byte word.
    let mut out = B256::ZERO;
    out[12..].copy_from_slice(&digest);
    CallOutcome::output(Bytes::copy_from_slice(out.as_slice()))
}

fn proc_identity(_host: &mut dyn Host, msg: &Message) -> CallOutcome {
    CallOutcome::output(msg.data.extract_all())
}
