//! Quick-open file finder: flattens the tree and ranks files against a query.
//!
//! The index is rebuilt from scratch for every query; trees here hold at most a few
//! hundred files.

use std::cmp::Ordering;

use crate::models::file_tree::flatten_files;
use crate::models::FileTreeNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    /// The name contains the query as a contiguous run.
    Substring,
    /// Every query character appears in the name, in order.
    Subsequence,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickOpenMatch<'a> {
    pub path: &'a str,
    pub name: &'a str,
    pub tier: MatchTier,
    /// Position in the recent list, most recent first.
    pub recent_rank: Option<usize>,
}

pub fn match_tier(name: &str, query: &str) -> Option<MatchTier> {
    let name_lc = name.to_lowercase();
    let query_lc = query.to_lowercase();
    tier_lowercased(&name_lc, &query_lc)
}

fn tier_lowercased(name_lc: &str, query_lc: &str) -> Option<MatchTier> {
    if name_lc.contains(query_lc) {
        return Some(MatchTier::Substring);
    }
    if is_subsequence(query_lc, name_lc) {
        return Some(MatchTier::Subsequence);
    }
    None
}

pub fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut hay = haystack.chars();
    needle.chars().all(|c| hay.any(|h| h == c))
}

/// Files matching `query`, recent files first (by recency), then substring matches before
/// subsequence matches, then by name. An empty query matches every file.
pub fn search<'a>(
    tree: &'a [FileTreeNode],
    recent_paths: &[String],
    query: &str,
) -> Vec<QuickOpenMatch<'a>> {
    let query_lc = query.trim().to_lowercase();

    let mut matches: Vec<QuickOpenMatch<'a>> = flatten_files(tree)
        .into_iter()
        .filter_map(|entry| {
            let tier = if query_lc.is_empty() {
                MatchTier::Substring
            } else {
                tier_lowercased(&entry.name.to_lowercase(), &query_lc)?
            };
            Some(QuickOpenMatch {
                path: entry.path,
                name: entry.name,
                tier,
                recent_rank: recent_paths.iter().position(|p| p == entry.path),
            })
        })
        .collect();

    matches.sort_by(compare_matches);
    matches
}

pub fn match_count(tree: &[FileTreeNode], recent_paths: &[String], query: &str) -> usize {
    search(tree, recent_paths, query).len()
}

fn compare_matches(a: &QuickOpenMatch<'_>, b: &QuickOpenMatch<'_>) -> Ordering {
    match (a.recent_rank, b.recent_rank) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a
            .tier
            .cmp(&b.tier)
            .then_with(|| cmp_ignore_case(a.name, b.name))
            .then_with(|| a.path.cmp(b.path)),
    }
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/quick_open.rs"]
mod tests;
