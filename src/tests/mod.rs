mod hash;
mod properties;

use crate::KeyEquality;

/// Sends every key to the same bucket, so all entries share one chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleBucket;

impl KeyEquality<u32> for SingleBucket {
    fn hash(&self, _key: &u32) -> u64 {
        0
    }

    fn eq(&self, a: &u32, b: &u32) -> bool {
        a == b
    }
}

/// ASCII case-insensitive string keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreAsciiCase;

impl KeyEquality<String> for IgnoreAsciiCase {
    fn hash(&self, key: &String) -> u64 {
        crate::hash::hash_one(&key.to_ascii_lowercase())
    }

    fn eq(&self, a: &String, b: &String) -> bool {
        a.eq_ignore_ascii_case(b)
    }
}
