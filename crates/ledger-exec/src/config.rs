//! Chain configuration and the fork activation policy.

use std::collections::BTreeMap;

use alloy_primitives::{Address, Bytes, B256, B64, U256};
use serde::{Deserialize, Serialize};

use crate::constants;

/// Execution rule sets, ordered by activation.
///
/// Rule sets are backward compatible: a later fork implies all earlier ones,
/// so activation checks compare ordinals rather than matching exact variants.
#[derive(
    Clone,
    Copy,
    Debug,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[repr(u8)]
pub enum ForkId {
    /// The launch rule set.
    #[display("Frontier")]
    Frontier,
    /// The Homestead rule set. Two consensus rules change at activation:
    /// low-`s` signature enforcement and the handling of contract creation
    /// that completes with a non-empty result after running out of gas.
    #[display("Homestead")]
    Homestead,
}

impl ForkId {
    /// Checks whether the given rule set is active under `self`.
    pub const fn is_enabled(self, other: Self) -> bool {
        other as u8 <= self as u8
    }

    /// Whether the Homestead rules are active.
    pub const fn is_homestead(self) -> bool {
        self.is_enabled(Self::Homestead)
    }
}

/// Genesis parameters carried by the chain configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisConfig {
    /// Hash of the (non-existent) parent of the genesis block.
    pub prevhash: B256,
    /// Beneficiary of the genesis block.
    pub coinbase: Address,
    /// Proof-of-work nonce of the genesis block.
    pub nonce: B64,
    /// Mix hash of the genesis block.
    pub mixhash: B256,
    /// Timestamp of the genesis block.
    pub timestamp: u64,
    /// Extra data of the genesis block.
    pub extra_data: Bytes,
    /// Balances allocated at genesis.
    pub initial_alloc: BTreeMap<Address, U256>,
}

impl Default for GenesisConfig {
    fn default() -> Self {
        Self {
            prevhash: B256::ZERO,
            coinbase: Address::ZERO,
            nonce: B64::with_last_byte(42),
            mixhash: B256::ZERO,
            timestamp: 0,
            extra_data: Bytes::new(),
            initial_alloc: BTreeMap::new(),
        }
    }
}

/// Chain-wide execution parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Block number at which the Homestead rules activate.
    pub homestead_fork_block: u64,
    /// Nonce assigned to newly created accounts.
    pub account_initial_nonce: u64,
    /// Maximum length of a block's extra-data field.
    pub max_extra_data_length: usize,
    /// Maximum nesting depth for message calls and creates. Exceeding it is a
    /// fatal processing error, not an ordinary execution failure.
    pub max_call_depth: u32,
    /// Genesis parameters.
    pub genesis: GenesisConfig,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            homestead_fork_block: 1_150_000,
            account_initial_nonce: 0,
            max_extra_data_length: 32,
            max_call_depth: constants::DEFAULT_MAX_CALL_DEPTH,
            genesis: GenesisConfig::default(),
        }
    }
}

impl ChainConfig {
    /// Returns the rule set active at the given block number.
    pub const fn fork_at(&self, block_number: u64) -> ForkId {
        if block_number >= self.homestead_fork_block {
            ForkId::Homestead
        } else {
            ForkId::Frontier
        }
    }
}
