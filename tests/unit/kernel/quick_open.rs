use super::*;
use crate::models::FileTreeNode;

fn flat(names: &[&str]) -> Vec<FileTreeNode> {
    names.iter().map(|name| FileTreeNode::file(*name)).collect()
}

fn paths<'a>(matches: &[QuickOpenMatch<'a>]) -> Vec<&'a str> {
    matches.iter().map(|m| m.path).collect()
}

#[test]
fn subsequence_matches_are_case_insensitive() {
    let tree = flat(&["Button.tsx", "about.ts", "README.md"]);
    let matches = search(&tree, &[], "but");

    assert_eq!(paths(&matches), vec!["Button.tsx", "about.ts"]);
    assert_eq!(matches[0].tier, MatchTier::Substring);
    assert_eq!(matches[1].tier, MatchTier::Subsequence);
}

#[test]
fn substring_matches_rank_before_subsequence() {
    let tree = flat(&["main.ts", "my-animation.ts", "domain.ts"]);
    let matches = search(&tree, &[], "main");

    assert_eq!(paths(&matches), vec!["domain.ts", "main.ts", "my-animation.ts"]);
    assert_eq!(matches[2].tier, MatchTier::Subsequence);
}

#[test]
fn recent_files_come_first_in_recency_order() {
    let tree = flat(&["a.ts", "b.ts", "c.ts", "d.ts"]);
    let recent = vec!["c.ts".to_string(), "a.ts".to_string()];
    let matches = search(&tree, &recent, "");

    assert_eq!(paths(&matches), vec!["c.ts", "a.ts", "b.ts", "d.ts"]);
    assert_eq!(matches[0].recent_rank, Some(0));
    assert_eq!(matches[2].recent_rank, None);
}

#[test]
fn recent_rank_beats_match_tier() {
    let tree = flat(&["index.ts", "inline-docs-ex.ts"]);
    let recent = vec!["inline-docs-ex.ts".to_string()];
    let matches = search(&tree, &recent, "index");

    // "inline-docs-ex" only matches as a subsequence but was opened recently.
    assert_eq!(paths(&matches), vec!["inline-docs-ex.ts", "index.ts"]);
}

#[test]
fn matches_by_file_name_only() {
    let tree = vec![FileTreeNode::directory(
        "components",
        vec![FileTreeNode::file("components/list.ts")],
    )];
    assert!(search(&tree, &[], "comp").is_empty());
    assert_eq!(paths(&search(&tree, &[], "list")), vec!["components/list.ts"]);
}

#[test]
fn directories_are_never_listed() {
    let tree = vec![
        FileTreeNode::directory("src", vec![FileTreeNode::file("src/index.ts")]),
        FileTreeNode::directory("srcgen", Vec::new()),
    ];
    assert_eq!(paths(&search(&tree, &[], "")), vec!["src/index.ts"]);
}

#[test]
fn equal_names_break_ties_by_path() {
    let tree = vec![
        FileTreeNode::directory("b", vec![FileTreeNode::file("b/index.ts")]),
        FileTreeNode::directory("a", vec![FileTreeNode::file("a/index.ts")]),
    ];
    assert_eq!(
        paths(&search(&tree, &[], "index")),
        vec!["a/index.ts", "b/index.ts"]
    );
}

#[test]
fn query_is_trimmed_and_no_match_is_empty() {
    let tree = flat(&["app.ts"]);
    assert_eq!(match_count(&tree, &[], "  app "), 1);
    assert_eq!(match_count(&tree, &[], "zzz"), 0);
}

#[test]
fn tier_helpers() {
    assert_eq!(match_tier("Button.tsx", "BUT"), Some(MatchTier::Substring));
    assert_eq!(match_tier("Button.tsx", "btx"), Some(MatchTier::Subsequence));
    assert_eq!(match_tier("Button.tsx", "xb"), None);
    assert!(is_subsequence("", "anything"));
    assert!(!is_subsequence("abc", "ab"));
}
