// MESS (ECBP-1100) and ADESS reorganization gates
use num_bigint::BigUint;
use num_traits::{CheckedSub, ToPrimitive, Zero};

use super::curve;
use super::score::{premier_canonical_score, SegmentWalk};
use super::ArtificialFinality;
use crate::blockchain::Header;
use crate::common::{premier_canonical_key, pretty_age, pretty_duration};
use crate::primitives::{BlockHash, FinalityError, Height, Result};

/// Grace period in blocks above the common ancestor during which
/// premier-canonical tallies are not counted by ADESS.
pub const ADESS_OMEGA: u64 = 4;

/// Per-block ADESS penalty divisor: each block on the proposed segment is
/// discounted by `TD(block) / ADESS_EPSILON_QUO`.
pub const ADESS_EPSILON_QUO: u64 = 1_000;

impl ArtificialFinality {
    /// The ECBP-1100 "MESS" gate: modified exponential subjective scoring,
    /// preferring known chain segments over later-to-come counterparts,
    /// especially proposed segments stretching far into the past.
    ///
    /// Returns `Ok` to permit the reorganization, or a
    /// [`FinalityError::ReorgFinality`] rejection with the full diagnostic
    /// line. Segments more saturated with first-seen blocks than the
    /// incumbent are exempted outright: competitive publicity is taken as
    /// indicative of honesty, while attack segments exhibit low first-seen
    /// saturation because of their necessary initial secrecy.
    pub fn ecbp1100(
        &self,
        common_ancestor: &Header,
        current: &Header,
        proposed: &Header,
    ) -> Result<()> {
        let current_pcs = premier_canonical_score(
            self.headers.as_ref(),
            self.registry.as_ref(),
            common_ancestor,
            current,
            current.time,
        )?;
        let proposed_pcs = premier_canonical_score(
            self.headers.as_ref(),
            self.registry.as_ref(),
            common_ancestor,
            proposed,
            current.time,
        )?;

        if proposed_pcs > current_pcs {
            // The proposed chain is better saturated with first-seen
            // blocks; the reorg proceeds without MESS intervention.
            return Ok(());
        }

        let (proposed_sub, local_sub) = self.subchain_tds(common_ancestor, current, proposed)?;

        let x = current.time.saturating_sub(common_ancestor.time);
        let numerator = curve::polynomial_v(x);
        let denominator = BigUint::from(curve::CURVE_DENOMINATOR);

        let want = &numerator * &local_sub;
        let got = &proposed_sub * &denominator;

        if got < want {
            let ratio = big_ratio(&got, &want);
            return Err(FinalityError::ReorgFinality(format!(
                "ECBP1100-MESS 🔒 status=rejected age={} current.span={} proposed.span={} tdr/gravity={:.6} common.bno={} common.hash={} current.bno={} current.hash={} proposed.bno={} proposed.hash={}",
                pretty_age(common_ancestor.time),
                pretty_duration(x),
                pretty_duration(x.min(curve::XCAP)),
                ratio,
                common_ancestor.number,
                common_ancestor.hash(),
                current.number,
                current.hash(),
                proposed.number,
                proposed.hash(),
            )));
        }
        Ok(())
    }

    /// The ADESS gate, after 'A Proof-of-Work Protocol to Deter Double-Spend
    /// Attacks': when the incumbent segment carries more premier-canonical
    /// blocks past the grace period, the proposed segment's subchain total
    /// difficulty is handicapped by a per-block discount before comparison.
    pub fn adess(
        &self,
        common_ancestor: &Header,
        current: &Header,
        proposed: &Header,
    ) -> Result<()> {
        if !self.adess_penalty_assignment(common_ancestor, current, proposed)? {
            return Ok(());
        }

        let (proposed_sub, local_sub) = self.subchain_tds(common_ancestor, current, proposed)?;
        let penalty = self.adess_penalty_proposed(common_ancestor, proposed)?;

        // local > proposed - penalty, rearranged to stay in unsigned
        // arithmetic when the penalty exceeds the proposed subchain TD.
        if &local_sub + &penalty > proposed_sub {
            return Err(FinalityError::ReorgFinality(format!(
                "ADESS status=rejected penalty={} common.bno={} common.hash={} current.bno={} current.hash={} proposed.bno={} proposed.hash={}",
                penalty,
                common_ancestor.number,
                common_ancestor.hash(),
                current.number,
                current.hash(),
                proposed.number,
                proposed.hash(),
            )));
        }
        Ok(())
    }

    /// Total difficulty ratio of the proposed segment over the incumbent
    /// one. Diagnostic only; gate decisions never touch floating point.
    pub fn td_ratio(
        &self,
        common_ancestor: &Header,
        current: &Header,
        proposed: &Header,
    ) -> Result<f64> {
        let (proposed_sub, local_sub) = self.subchain_tds(common_ancestor, current, proposed)?;
        Ok(big_ratio(&proposed_sub, &local_sub))
    }

    /// Whether the ADESS penalty engages: the proposed head must clear the
    /// grace height, and the incumbent segment must carry strictly more
    /// premier-canonical blocks than the proposed one. Otherwise eligibility
    /// for canonical status is invariant from plain heaviest-chain choice.
    fn adess_penalty_assignment(
        &self,
        common_ancestor: &Header,
        current: &Header,
        proposed: &Header,
    ) -> Result<bool> {
        let alpha_height = common_ancestor.number + ADESS_OMEGA;
        if proposed.number < alpha_height {
            return Ok(false);
        }

        let current_count = self.adess_count_premier_canonical(common_ancestor, current)?;
        let proposed_count = self.adess_count_premier_canonical(common_ancestor, proposed)?;

        Ok(current_count > proposed_count)
    }

    /// Count of premier-canonical headers on the segment, skipping the
    /// grace range below `common_ancestor.number + ADESS_OMEGA`.
    fn adess_count_premier_canonical(
        &self,
        common_ancestor: &Header,
        head: &Header,
    ) -> Result<u64> {
        let mut total = 0;
        for step in SegmentWalk::new(self.headers.as_ref(), common_ancestor, head) {
            let focus = step?;

            if focus.number < common_ancestor.number + ADESS_OMEGA {
                continue;
            }

            if self
                .registry
                .premier_canonical_hash(premier_canonical_key(&focus))
                == Some(focus.hash())
            {
                total += 1;
            }
        }
        Ok(total)
    }

    /// Discount, expressed in total difficulty, deducted from the proposed
    /// segment when the penalty is assigned.
    fn adess_penalty_proposed(
        &self,
        common_ancestor: &Header,
        proposed: &Header,
    ) -> Result<BigUint> {
        let mut discount = BigUint::zero();
        let quo = BigUint::from(ADESS_EPSILON_QUO);
        for step in SegmentWalk::new(self.headers.as_ref(), common_ancestor, proposed) {
            let focus = step?;
            let block_td = self.stored_td(&focus.hash(), focus.number)?;
            discount += block_td / &quo;
        }
        Ok(discount)
    }

    /// Subchain total difficulties `(proposed, local)` above the common
    /// ancestor. The proposed tip's own TD is derived from its parent's
    /// stored TD plus its difficulty, since the tip may not be indexed yet.
    fn subchain_tds(
        &self,
        common_ancestor: &Header,
        current: &Header,
        proposed: &Header,
    ) -> Result<(BigUint, BigUint)> {
        let ancestor_td = self.stored_td(&common_ancestor.hash(), common_ancestor.number)?;

        let parent_number = proposed.number.checked_sub(1).ok_or(
            FinalityError::MissingTotalDifficulty {
                hash: proposed.parent_hash,
                number: 0,
            },
        )?;
        let proposed_parent_td = self.stored_td(&proposed.parent_hash, parent_number)?;
        let proposed_td = proposed_parent_td + &proposed.difficulty;

        let local_td = self.stored_td(&current.hash(), current.number)?;

        let proposed_sub = proposed_td
            .checked_sub(&ancestor_td)
            .ok_or_else(|| FinalityError::TotalDifficultyUnderflow(proposed.hash()))?;
        let local_sub = local_td
            .checked_sub(&ancestor_td)
            .ok_or_else(|| FinalityError::TotalDifficultyUnderflow(current.hash()))?;

        Ok((proposed_sub, local_sub))
    }

    fn stored_td(&self, hash: &BlockHash, number: Height) -> Result<BigUint> {
        self.headers
            .total_difficulty(hash, number)
            .ok_or(FinalityError::MissingTotalDifficulty {
                hash: *hash,
                number,
            })
    }
}

/// Approximate quotient of two big integers for diagnostics.
fn big_ratio(numerator: &BigUint, denominator: &BigUint) -> f64 {
    match (numerator.to_f64(), denominator.to_f64()) {
        (Some(n), Some(d)) if d > 0.0 => n / d,
        _ => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_of_equal_values_is_one() {
        let a = BigUint::from(12_345u64);
        assert!((big_ratio(&a, &a) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn ratio_against_zero_is_nan() {
        let a = BigUint::from(5u64);
        assert!(big_ratio(&a, &BigUint::zero()).is_nan());
    }
}
