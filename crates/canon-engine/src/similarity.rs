//! Token-overlap similarity between fact values and subject names.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use canon_core::FactValue;

/// Alphanumeric runs; everything else (punctuation, whitespace) separates
/// tokens.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z0-9]+").unwrap());

/// Lowercased alphanumeric tokens of a string.
pub fn tokenize(text: &str) -> BTreeSet<String> {
    let lowered = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Jaccard overlap of lowercased tokens. Two empty strings are identical
/// (1.0); one empty side shares nothing (0.0).
pub fn token_jaccard(a: &str, b: &str) -> f64 {
    let a_tokens = tokenize(a);
    let b_tokens = tokenize(b);
    if a_tokens.is_empty() && b_tokens.is_empty() {
        return 1.0;
    }
    let intersection = a_tokens.intersection(&b_tokens).count();
    let union = a_tokens.union(&b_tokens).count();
    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}

/// Similarity between two fact values in [0.0, 1.0].
///
/// Numbers compare by relative closeness; text and lists by token overlap
/// of their rendered forms.
pub fn value_similarity(a: &FactValue, b: &FactValue) -> f64 {
    match (a.as_number(), b.as_number()) {
        (Some(x), Some(y)) => {
            let delta = (x - y).abs();
            if delta < f64::EPSILON {
                return 1.0;
            }
            let scale = x.abs().max(y.abs()).max(1.0);
            (1.0 - delta / scale).clamp(0.0, 1.0)
        }
        _ => token_jaccard(&a.to_string(), &b.to_string()),
    }
}

/// Subject-name similarity: case-insensitive, punctuation-stripped token
/// overlap, with abbreviation-aware matching so "Maya R." lines up with
/// "Maya Rivera".
///
/// Each token may match at most one token on the other side; a pair matches
/// when the tokens are equal or one is a prefix of the other (an initial).
/// The score is matched pairs over the larger token count.
pub fn subject_similarity(a: &str, b: &str) -> f64 {
    let a_tokens: Vec<String> = tokenize(a).into_iter().collect();
    let b_tokens: Vec<String> = tokenize(b).into_iter().collect();
    if a_tokens.is_empty() && b_tokens.is_empty() {
        return 1.0;
    }
    if a_tokens.is_empty() || b_tokens.is_empty() {
        return 0.0;
    }

    let mut claimed = vec![false; b_tokens.len()];
    let mut matched = 0usize;
    for token in &a_tokens {
        let hit = b_tokens.iter().enumerate().find(|(i, other)| {
            !claimed[*i]
                && (token == *other || token.starts_with(*other) || other.starts_with(token))
        });
        if let Some((i, _)) = hit {
            claimed[i] = true;
            matched += 1;
        }
    }

    matched as f64 / a_tokens.len().max(b_tokens.len()) as f64
}
