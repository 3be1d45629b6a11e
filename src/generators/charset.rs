// src/generators/charset.rs
use crate::models::GenerationRequest;

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SPECIAL: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Optional sets enabled by the request, in uppercase, digits, special order.
pub fn required_sets(request: &GenerationRequest) -> Vec<&'static [u8]> {
    let mut sets = Vec::with_capacity(3);
    if request.include_uppercase {
        sets.push(UPPERCASE);
    }
    if request.include_digits {
        sets.push(DIGITS);
    }
    if request.include_special {
        sets.push(SPECIAL);
    }
    sets
}

/// Full sampling pool: lowercase plus every enabled optional set.
pub fn build_pool(request: &GenerationRequest) -> Vec<u8> {
    let mut pool = LOWERCASE.to_vec();
    for set in required_sets(request) {
        pool.extend_from_slice(set);
    }
    pool
}
