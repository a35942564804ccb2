// In-memory chain store backing the finality gates in tests and harnesses
use std::collections::HashMap;

use num_bigint::BigUint;
use parking_lot::RwLock;

use crate::blockchain::Header;
use crate::common::{premier_canonical_key, HeaderReader, PremierCanonicalReader};
use crate::primitives::{BlockHash, FinalityError, Height, Result};

/// Header store plus premier-canonical registry held in memory.
///
/// `insert` plays the role of the import pipeline: it derives the
/// cumulative total difficulty from the parent and records the first-seen
/// hash for the header's key. First-seen wins permanently, so competing
/// headers become premier-canonical in insertion order. Reads implement
/// the gate-facing capabilities and are safe for concurrent readers.
#[derive(Default)]
pub struct MemoryChain {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    headers: HashMap<BlockHash, Header>,
    total_difficulties: HashMap<BlockHash, BigUint>,
    premier_canonical: HashMap<u64, BlockHash>,
    head_number: Height,
}

impl MemoryChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit a header. Non-genesis headers require their parent's total
    /// difficulty to be present already.
    pub fn insert(&self, header: Header) -> Result<BlockHash> {
        let hash = header.hash();
        let mut inner = self.inner.write();

        let td = if header.number == 0 {
            header.difficulty.clone()
        } else {
            let parent_td = inner.total_difficulties.get(&header.parent_hash).ok_or(
                FinalityError::MissingTotalDifficulty {
                    hash: header.parent_hash,
                    number: header.number - 1,
                },
            )?;
            parent_td + &header.difficulty
        };

        inner.total_difficulties.insert(hash, td);
        inner
            .premier_canonical
            .entry(premier_canonical_key(&header))
            .or_insert(hash);
        if header.number > inner.head_number {
            inner.head_number = header.number;
        }
        inner.headers.insert(hash, header);

        Ok(hash)
    }

    pub fn len(&self) -> usize {
        self.inner.read().headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().headers.is_empty()
    }
}

impl HeaderReader for MemoryChain {
    fn header_by_hash(&self, hash: &BlockHash) -> Option<Header> {
        self.inner.read().headers.get(hash).cloned()
    }

    fn total_difficulty(&self, hash: &BlockHash, _number: Height) -> Option<BigUint> {
        self.inner.read().total_difficulties.get(hash).cloned()
    }

    fn head_number(&self) -> Height {
        self.inner.read().head_number
    }
}

impl PremierCanonicalReader for MemoryChain {
    fn premier_canonical_hash(&self, key: u64) -> Option<BlockHash> {
        self.inner.read().premier_canonical.get(&key).copied()
    }
}
