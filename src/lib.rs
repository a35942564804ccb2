// Artificial-finality reorganization gates for proof-of-work chains
//
// Given a candidate chain segment competing with the current canonical
// segment, the gates decide whether the reorganization is permitted or
// rejected despite the candidate's greater cumulative work. ECBP-1100
// "MESS" penalizes deep reorganizations with a time-dependent antigravity
// curve; ADESS handicaps segments with less first-seen publicity than the
// incumbent. All consensus-visible arithmetic is exact big-integer work.

// Standard Rust module structure
pub mod primitives;
pub mod blockchain;
pub mod common;
pub mod finality;
pub mod storage;

// Re-export key types for easy access
pub use primitives::{
    hash_data, hash_json, BlockHash, FinalityError, Height, Result, Timestamp,
};

pub use blockchain::{ChainSpec, Header, NetworkId};

pub use common::{
    premier_canonical_key, pretty_age, pretty_duration, HeaderReader, PremierCanonicalReader,
};

pub use finality::{
    curve::{polynomial_v, CURVE_DENOMINATOR, XCAP},
    gate::{ADESS_EPSILON_QUO, ADESS_OMEGA},
    score::premier_canonical_score,
    ArtificialFinality,
};

pub use storage::MemoryChain;
