use once_cell::sync::Lazy;
use regex::Regex;
use sha2::{Digest, Sha256};

use crate::query::types::QueryDescriptor;
use crate::resolvers::{Answer, ResolveError, Resolver, ResultItem};

static HEX_DIGEST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9a-fA-F]+$").expect("hex digest pattern is valid"));

const DIGEST_KEYWORD: &str = "sha256 ";

/// Computes `sha256 <text>` and recognizes bare hex digests by length.
pub struct HashResolver;

impl Resolver for HashResolver {
    fn name(&self) -> &str {
        "hash"
    }

    fn resolve(&self, query: &QueryDescriptor) -> Result<Vec<ResultItem>, ResolveError> {
        let text = query.text();

        if let Some(input) = strip_keyword(text.trim_start()) {
            let digest = hex::encode(Sha256::digest(input.as_bytes()));
            return Ok(vec![ResultItem::new(Answer::section(
                "SHA-256",
                vec![Answer::fixed(digest)],
            ))]);
        }

        let candidate = text.trim();
        if !HEX_DIGEST.is_match(candidate) {
            return Ok(Vec::new());
        }
        let Some(algorithm) = algorithm_for_len(candidate.len()) else {
            return Ok(Vec::new());
        };

        Ok(vec![ResultItem::new(Answer::text(format!(
            "Looks like a {algorithm} hash ({} bits)",
            candidate.len() * 4
        )))])
    }
}

fn strip_keyword(text: &str) -> Option<&str> {
    let head = text.get(..DIGEST_KEYWORD.len())?;
    if head.eq_ignore_ascii_case(DIGEST_KEYWORD) {
        Some(&text[DIGEST_KEYWORD.len()..])
    } else {
        None
    }
}

pub fn algorithm_for_len(hex_len: usize) -> Option<&'static str> {
    match hex_len {
        32 => Some("MD5"),
        40 => Some("SHA-1"),
        64 => Some("SHA-256"),
        128 => Some("SHA-512"),
        _ => None,
    }
}
