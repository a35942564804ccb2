// Premier-canonical scoring along chain segments
use num_bigint::BigUint;
use num_traits::Zero;

use crate::blockchain::Header;
use crate::common::{premier_canonical_key, HeaderReader, PremierCanonicalReader};
use crate::primitives::{BlockHash, FinalityError, Result, Timestamp};

/// Iterator over a segment from `head` back to the common ancestor,
/// exclusive of the ancestor itself. Parent pointers are followed through
/// the header store; a hash that fails to resolve yields a structural
/// error and ends the walk.
pub(crate) struct SegmentWalk<'a> {
    headers: &'a dyn HeaderReader,
    ancestor: BlockHash,
    cursor: Option<Header>,
    missing: Option<BlockHash>,
}

impl<'a> SegmentWalk<'a> {
    pub(crate) fn new(
        headers: &'a dyn HeaderReader,
        common_ancestor: &Header,
        head: &Header,
    ) -> Self {
        let ancestor = common_ancestor.hash();
        let cursor = if head.hash() == ancestor {
            None
        } else {
            Some(head.clone())
        };
        Self {
            headers,
            ancestor,
            cursor,
            missing: None,
        }
    }
}

impl Iterator for SegmentWalk<'_> {
    type Item = Result<Header>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(hash) = self.missing.take() {
            return Some(Err(FinalityError::MissingHeader(hash)));
        }
        let focus = self.cursor.take()?;
        if focus.parent_hash != self.ancestor {
            match self.headers.header_by_hash(&focus.parent_hash) {
                Some(parent) => self.cursor = Some(parent),
                None => self.missing = Some(focus.parent_hash),
            }
        }
        Some(Ok(focus))
    }
}

/// Sum of time-weighted contributions of premier-canonical headers on the
/// segment from `head` down to `common_ancestor` (exclusive).
///
/// Each premier-canonical header within the reference window contributes
/// `segment_latest_time - header.time`, so the oldest first-seen blocks
/// weigh the most. Headers strictly newer than `segment_latest_time` lie
/// outside the window and contribute nothing. Both competing segments are
/// scored against the same `segment_latest_time`, typically the incumbent
/// tip's timestamp.
pub fn premier_canonical_score(
    headers: &dyn HeaderReader,
    registry: &dyn PremierCanonicalReader,
    common_ancestor: &Header,
    head: &Header,
    segment_latest_time: Timestamp,
) -> Result<BigUint> {
    let mut score = BigUint::zero();

    for step in SegmentWalk::new(headers, common_ancestor, head) {
        let focus = step?;

        if focus.time > segment_latest_time {
            continue;
        }

        if registry.premier_canonical_hash(premier_canonical_key(&focus)) == Some(focus.hash()) {
            // Old blocks get big numbers, eg. 1 hour = 3600.
            // Young blocks get small numbers, eg. 2 minutes = 120.
            score += segment_latest_time - focus.time;
        }
    }

    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryChain;
    use num_bigint::BigUint;

    fn genesis() -> Header {
        Header {
            parent_hash: BlockHash::zero(),
            number: 0,
            difficulty: BigUint::from(1_000u64),
            time: 1_000,
            extra_data: b"genesis".to_vec(),
        }
    }

    fn child(parent: &Header, time: Timestamp, extra: &[u8]) -> Header {
        Header {
            parent_hash: parent.hash(),
            number: parent.number + 1,
            difficulty: BigUint::from(1_000u64),
            time,
            extra_data: extra.to_vec(),
        }
    }

    #[test]
    fn empty_segment_scores_zero() {
        let chain = MemoryChain::new();
        let g = genesis();
        chain.insert(g.clone()).unwrap();

        let score = premier_canonical_score(&chain, &chain, &g, &g, 5_000).unwrap();
        assert!(score.is_zero());
    }

    #[test]
    fn older_premier_blocks_weigh_more() {
        let chain = MemoryChain::new();
        let g = genesis();
        let b1 = child(&g, 1_100, b"a");
        let b2 = child(&b1, 1_200, b"a");
        chain.insert(g.clone()).unwrap();
        chain.insert(b1).unwrap();
        chain.insert(b2.clone()).unwrap();

        // Both b1 and b2 were first-seen: (1250 - 1100) + (1250 - 1200).
        let score = premier_canonical_score(&chain, &chain, &g, &b2, 1_250).unwrap();
        assert_eq!(score, BigUint::from(200u64));
    }

    #[test]
    fn non_premier_segment_scores_zero() {
        let chain = MemoryChain::new();
        let g = genesis();
        let first_seen = child(&g, 1_100, b"canonical");
        let latecomer = child(&g, 1_090, b"side");
        chain.insert(g.clone()).unwrap();
        chain.insert(first_seen).unwrap();
        chain.insert(latecomer.clone()).unwrap();

        let score = premier_canonical_score(&chain, &chain, &g, &latecomer, 1_250).unwrap();
        assert!(score.is_zero());
    }

    #[test]
    fn headers_outside_the_window_are_skipped() {
        let chain = MemoryChain::new();
        let g = genesis();
        let early = child(&g, 1_100, b"a");
        let late = child(&early, 2_000, b"a");
        chain.insert(g.clone()).unwrap();
        chain.insert(early).unwrap();
        chain.insert(late.clone()).unwrap();

        // Only the early header lies within the window.
        let score = premier_canonical_score(&chain, &chain, &g, &late, 1_500).unwrap();
        assert_eq!(score, BigUint::from(400u64));
    }

    #[test]
    fn broken_parent_link_is_a_structural_error() {
        let chain = MemoryChain::new();
        let g = genesis();
        chain.insert(g.clone()).unwrap();

        let orphan = Header {
            parent_hash: BlockHash::from_bytes([9u8; 32]),
            number: 5,
            difficulty: BigUint::from(1_000u64),
            time: 1_400,
            extra_data: vec![],
        };

        let err = premier_canonical_score(&chain, &chain, &g, &orphan, 1_500).unwrap_err();
        assert!(matches!(err, FinalityError::MissingHeader(_)));
    }
}
