// Artificial finality: reorganization gates for proof-of-work chains
//
// Two independent gates decide whether a proposed chain segment may replace
// the incumbent one despite greater cumulative work: ECBP-1100 "MESS"
// (modified exponential subjective scoring) and ADESS (anti double-spend
// scoring). Both consume the header store and the premier-canonical
// registry read-only and are invoked from the chain-import critical
// section, one reorganization decision in flight per chain instance.

pub mod activation;
pub mod curve;
pub mod gate;
pub mod score;

use std::sync::atomic::AtomicI32;
use std::sync::{Arc, OnceLock};

use crate::blockchain::ChainSpec;
use crate::common::{HeaderReader, PremierCanonicalReader};

/// Reorganization gates plus the per-chain activation state.
pub struct ArtificialFinality {
    headers: Arc<dyn HeaderReader>,
    registry: Arc<dyn PremierCanonicalReader>,
    spec: ChainSpec,
    /// 1 when the gates are consulted during import, 0 otherwise.
    enabled: AtomicI32,
    /// Allocated on first use; value 1 suppresses disable requests.
    no_disable: OnceLock<AtomicI32>,
}

impl ArtificialFinality {
    pub fn new(
        headers: Arc<dyn HeaderReader>,
        registry: Arc<dyn PremierCanonicalReader>,
        spec: ChainSpec,
    ) -> Self {
        Self {
            headers,
            registry,
            spec,
            enabled: AtomicI32::new(0),
            no_disable: OnceLock::new(),
        }
    }

    pub fn chain_spec(&self) -> &ChainSpec {
        &self.spec
    }
}
