//! Search-engine metadata derived from generated article text.
//!
//! Everything here is a pure function of `(title, body)`: identical inputs
//! always yield identical metadata.

use serde::Serialize;

use crate::text;

const SEO_TITLE_MAX: usize = 60;
const DESCRIPTION_MAX: usize = 160;
const KEYWORD_MIN_LEN: usize = 4;
const KEYWORD_LIMIT: usize = 8;

/// SEO metadata computed from an article title and body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeoMetadata {
    /// Title capped at 60 characters, ellipsized when cut
    pub title: String,
    /// Single-line description capped at 160 characters, ellipsized when cut
    pub description: String,
    /// URL-safe lowercase hyphenated identifier derived from the title
    pub slug: String,
    /// Up to 8 distinct tokens, most frequent first
    pub keywords: Vec<String>,
}

/// Derive SEO metadata from a title and body.
pub fn derive(title: &str, body: &str) -> SeoMetadata {
    let flat_body = text::collapse_newlines(body);
    SeoMetadata {
        title: ellipsize(title, SEO_TITLE_MAX),
        description: ellipsize(&flat_body, DESCRIPTION_MAX),
        slug: slugify(title),
        keywords: rank_keywords(&flat_body),
    }
}

/// Cap `input` at `max` characters, replacing the tail with "..." when cut.
fn ellipsize(input: &str, max: usize) -> String {
    if input.chars().count() <= max {
        input.to_string()
    } else {
        format!("{}...", text::truncate(input, max - 3))
    }
}

/// Build a URL slug: lowercase, strip everything outside `[a-z0-9 -]`,
/// then join the remaining words with single hyphens.
fn slugify(title: &str) -> String {
    let cleaned: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ' || *c == '-')
        .collect();

    let mut slug = String::with_capacity(cleaned.len());
    for word in cleaned.split_whitespace() {
        if !slug.is_empty() {
            slug.push('-');
        }
        slug.push_str(word);
    }

    // Retained hyphens from the title can still produce runs or edge hyphens
    let mut out = String::with_capacity(slug.len());
    for c in slug.chars() {
        if c == '-' && out.ends_with('-') {
            continue;
        }
        out.push(c);
    }
    out.trim_matches('-').to_string()
}

/// Rank body tokens by frequency.
///
/// Tokenization is ASCII/Latin-oriented: everything outside `[a-z0-9]`
/// separates tokens, and tokens shorter than 4 characters are discarded.
/// Ties keep first-encountered order (stable sort over insertion order).
fn rank_keywords(flat_body: &str) -> Vec<String> {
    let normalized: String = flat_body
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                ' '
            }
        })
        .collect();

    let mut counts: Vec<(String, usize)> = Vec::new();
    for token in normalized.split_whitespace() {
        if token.chars().count() < KEYWORD_MIN_LEN {
            continue;
        }
        match counts.iter_mut().find(|(t, _)| t == token) {
            Some((_, n)) => *n += 1,
            None => counts.push((token.to_string(), 1)),
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(KEYWORD_LIMIT)
        .map(|(token, _)| token)
        .collect()
}
