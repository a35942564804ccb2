// Error types for the finality gates
use thiserror::Error;

use crate::primitives::{BlockHash, Height};

pub type Result<T> = std::result::Result<T, FinalityError>;

#[derive(Error, Debug)]
pub enum FinalityError {
    /// A gate declined the proposed reorganization. The message carries the
    /// full diagnostic line surfaced in logs; callers keep the current head.
    #[error("finality-enforced invalid new chain: {0}")]
    ReorgFinality(String),

    /// A segment walk hit a parent hash with no stored header.
    /// Data-corruption class; never produced by an honest chain.
    #[error("missing header {0} during segment traversal")]
    MissingHeader(BlockHash),

    /// No total difficulty recorded for a header on either segment.
    #[error("missing total difficulty for block #{number} ({hash})")]
    MissingTotalDifficulty { hash: BlockHash, number: Height },

    /// A segment head reported a total difficulty below its common ancestor.
    #[error("total difficulty of {0} is below its common ancestor")]
    TotalDifficultyUnderflow(BlockHash),
}

impl FinalityError {
    /// True for policy rejections, false for structural failures.
    pub fn is_reorg_finality(&self) -> bool {
        matches!(self, FinalityError::ReorgFinality(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reorg_finality_carries_sentinel_text() {
        let err = FinalityError::ReorgFinality("status=rejected".into());
        assert!(err.to_string().starts_with("finality-enforced invalid new chain"));
        assert!(err.is_reorg_finality());
    }

    #[test]
    fn structural_errors_are_not_policy_rejections() {
        let err = FinalityError::MissingHeader(BlockHash::zero());
        assert!(!err.is_reorg_finality());
        let err = FinalityError::MissingTotalDifficulty {
            hash: BlockHash::zero(),
            number: 9,
        };
        assert!(!err.is_reorg_finality());
    }
}
