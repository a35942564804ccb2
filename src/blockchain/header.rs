// Proof-of-work block header
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::primitives::{hash_json, BlockHash, Height, Timestamp};

/// Header of a proof-of-work block.
///
/// Headers are immutable once admitted to the store. Along a well-formed
/// segment, `parent.number + 1 == child.number` and the parent hash resolves
/// through the header store until the common ancestor is reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub parent_hash: BlockHash,
    pub number: Height,
    /// Unsigned block difficulty; total difficulty is the sum of these
    /// from genesis through the header.
    pub difficulty: BigUint,
    /// UNIX-seconds timestamp.
    pub time: Timestamp,
    pub extra_data: Vec<u8>,
}

impl Header {
    /// Content hash identifying this header.
    pub fn hash(&self) -> BlockHash {
        hash_json(self)
    }
}
