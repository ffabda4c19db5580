//! Consensus constants shared across the execution engine.

use alloy_primitives::{address, Address, U256};

/// Order of the secp256k1 group.
pub const SECP256K1_ORDER: U256 = U256::from_limbs([
    0xBFD2_5E8C_D036_4141,
    0xBAAE_DCE6_AF48_A03B,
    0xFFFF_FFFF_FFFF_FFFE,
    0xFFFF_FFFF_FFFF_FFFF,
]);

/// Half of the secp256k1 group order, rounded down.
///
/// From Homestead onward a transaction whose signature `s` component exceeds
/// this bound is rejected as malleable. `s > ORDER >> 1` is equivalent to the
/// historical `s * 2 < ORDER` check since the order is odd.
pub const SECP256K1_HALF_ORDER: U256 = U256::from_limbs([
    0xDFE9_2F46_681B_20A0,
    0x5D57_6E73_57A4_501D,
    0xFFFF_FFFF_FFFF_FFFF,
    0x7FFF_FFFF_FFFF_FFFF,
]);

/// Number of ancestor block hashes retrievable through [`crate::Host::block_hash`].
pub const BLOCKHASH_WINDOW: u64 = 256;

/// Default maximum nesting depth for message calls and creates.
pub const DEFAULT_MAX_CALL_DEPTH: u32 = 1024;

/// Address of the SHA-256 builtin.
pub const SHA256_ADDRESS: Address = address!("0000000000000000000000000000000000000002");

/// Address of the RIPEMD-160 builtin.
pub const RIPEMD160_ADDRESS: Address = address!("0000000000000000000000000000000000000003");

/// Address of the identity (data copy) builtin.
pub const IDENTITY_ADDRESS: Address = address!("0000000000000000000000000000000000000004");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_order_matches_shifted_order() {
        assert_eq!(SECP256K1_HALF_ORDER, SECP256K1_ORDER >> 1);
    }
}
