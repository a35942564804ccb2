// Read-only chain capabilities consumed by the finality gates
use num_bigint::BigUint;

use crate::blockchain::Header;
use crate::primitives::{BlockHash, Height};

/// Read-only access to the header store.
///
/// Both lookups must be safe for concurrent readers; the integrator holds
/// the chain read lock across a gate invocation so a single call observes a
/// consistent snapshot.
pub trait HeaderReader: Send + Sync {
    /// Get a header by its hash.
    fn header_by_hash(&self, hash: &BlockHash) -> Option<Header>;

    /// Total difficulty from genesis through the given header.
    fn total_difficulty(&self, hash: &BlockHash, number: Height) -> Option<BigUint>;

    /// Block number of the current canonical head.
    fn head_number(&self) -> Height;
}

/// Read-only access to the premier-canonical registry: the hash first
/// observed at a given key. Entries are written by the import pipeline;
/// first-seen wins permanently.
pub trait PremierCanonicalReader: Send + Sync {
    fn premier_canonical_hash(&self, key: u64) -> Option<BlockHash>;
}

/// Key under which a header's premier-canonical entry is registered.
///
/// Currently the block number. Timestamp and difficulty keying have been
/// trialled; this function is the single point of change if the keying
/// policy moves.
pub fn premier_canonical_key(header: &Header) -> u64 {
    header.number
}
