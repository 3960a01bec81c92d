use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static NON_SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid regex"));

pub const TAG_NAME_MAX_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub id: i32,
    pub name: String,
    pub slug: String,
}

/// Split a comma separated blob into tag names.
///
/// Names are trimmed, inner whitespace is collapsed, names longer than the
/// column allows are truncated, and case-insensitive duplicates are dropped
/// keeping the first spelling. Text that yields nothing gives an empty list.
pub fn extract_tags(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for raw in text.split(',') {
        let name = WHITESPACE.replace_all(raw.trim(), " ");
        let name: String = name.chars().take(TAG_NAME_MAX_LEN).collect();
        let name = name.trim_end().to_string();

        if name.is_empty() || slugify(&name).is_empty() {
            continue;
        }
        if seen.insert(name.to_lowercase()) {
            names.push(name);
        }
    }

    names
}

pub fn slugify(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    NON_SLUG
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}
