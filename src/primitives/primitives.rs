// Core primitives shared by the finality gates
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

pub type Height = u64;
pub type Timestamp = u64;

/// 32-byte block hash identifying a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockHash(pub [u8; 32]);

impl BlockHash {
    pub fn zero() -> Self {
        BlockHash([0u8; 32])
    }

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        BlockHash(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Display for BlockHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

pub fn hash_data(data: &[u8]) -> BlockHash {
    let mut hasher = Sha256::new();
    hasher.update(data);
    BlockHash(hasher.finalize().into())
}

pub fn hash_json<T: serde::Serialize>(data: &T) -> BlockHash {
    let json = serde_json::to_string(data).unwrap();
    hash_data(json.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_display_is_prefixed_hex() {
        let hash = BlockHash::from_bytes([0xab; 32]);
        let shown = format!("{}", hash);
        assert!(shown.starts_with("0xabab"));
        assert_eq!(shown.len(), 2 + 64);
    }

    #[test]
    fn hash_json_is_deterministic() {
        let a = hash_json(&("block", 7u64));
        let b = hash_json(&("block", 7u64));
        assert_eq!(a, b);
        assert_ne!(a, hash_json(&("block", 8u64)));
    }
}
