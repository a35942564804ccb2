// Chain-level configuration consumed by the finality gates
use serde::{Deserialize, Serialize};

use crate::primitives::Height;

/// Network the chain instance belongs to; carried in activation logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkId {
    Mainnet,
    Testnet,
    Devnet,
}

impl std::fmt::Display for NetworkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetworkId::Mainnet => write!(f, "mainnet"),
            NetworkId::Testnet => write!(f, "testnet"),
            NetworkId::Devnet => write!(f, "devnet"),
        }
    }
}

/// Chain configuration for artificial finality.
///
/// The transition block is supplied by the integrator; this crate never
/// defines fork numbers of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainSpec {
    pub network: NetworkId,
    /// Block number at which ECBP-1100 activates; `None` means never.
    pub ecbp1100_block: Option<Height>,
}

impl ChainSpec {
    pub fn new(network: NetworkId, ecbp1100_block: Option<Height>) -> Self {
        Self {
            network,
            ecbp1100_block,
        }
    }

    /// Whether the ECBP-1100 transition has been crossed at `number`.
    pub fn is_ecbp1100(&self, number: Height) -> bool {
        self.ecbp1100_block.map_or(false, |block| number >= block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_is_crossed_at_its_own_block() {
        let spec = ChainSpec::new(NetworkId::Devnet, Some(100));
        assert!(!spec.is_ecbp1100(99));
        assert!(spec.is_ecbp1100(100));
        assert!(spec.is_ecbp1100(101));
    }

    #[test]
    fn absent_transition_never_activates() {
        let spec = ChainSpec::new(NetworkId::Devnet, None);
        assert!(!spec.is_ecbp1100(u64::MAX));
    }
}
