//! Comma-separated skill list handling.
//!
//! Manual entry keeps duplicates; merging a suggestion leaves none. Both paths
//! share the same splitting rule.

use std::collections::HashSet;

/// Splits on commas, trims each piece and drops empty pieces. Order is kept.
pub fn split_skill_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Set union of `existing` then `incoming` by exact string equality. The
/// first occurrence of each skill keeps its place, so duplicates already in
/// `existing` collapse too. Returns how many skills came from `incoming`.
pub fn merge_unique(existing: &mut Vec<String>, incoming: Vec<String>) -> usize {
    let mut seen: HashSet<String> = HashSet::new();
    let mut merged = Vec::with_capacity(existing.len() + incoming.len());
    for skill in existing.drain(..) {
        if seen.insert(skill.clone()) {
            merged.push(skill);
        }
    }
    let mut added = 0;
    for skill in incoming {
        if seen.insert(skill.clone()) {
            merged.push(skill);
            added += 1;
        }
    }
    *existing = merged;
    added
}

/// Text shown in the editor's skills textarea.
pub fn join_skill_list(skills: &[String]) -> String {
    skills.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_trims_and_drops_empty() {
        assert_eq!(
            split_skill_list(" Rust ,, Go ,  ,SQL,"),
            vec!["Rust", "Go", "SQL"]
        );
    }

    #[test]
    fn test_split_keeps_duplicates() {
        assert_eq!(
            split_skill_list("React, React, Go"),
            vec!["React", "React", "Go"]
        );
    }

    #[test]
    fn test_split_empty_input() {
        assert!(split_skill_list("").is_empty());
        assert!(split_skill_list(" , ,").is_empty());
    }

    #[test]
    fn test_merge_unique_against_existing() {
        let mut skills = vec!["React".to_string()];
        let added = merge_unique(&mut skills, split_skill_list("React, React, Go"));
        assert_eq!(skills, vec!["React", "Go"]);
        assert_eq!(added, 1);
    }

    #[test]
    fn test_merge_is_case_sensitive() {
        let mut skills = vec!["rust".to_string()];
        merge_unique(&mut skills, vec!["Rust".to_string()]);
        assert_eq!(skills, vec!["rust", "Rust"]);
    }

    #[test]
    fn test_merge_collapses_existing_duplicates() {
        let mut skills = vec!["Go".to_string(), "Go".to_string()];
        let added = merge_unique(&mut skills, vec!["Go".to_string(), "C".to_string()]);
        assert_eq!(skills, vec!["Go", "C"]);
        assert_eq!(added, 1);
    }

    #[test]
    fn test_join_round_trips_display() {
        let skills = vec!["Rust".to_string(), "Go".to_string()];
        assert_eq!(join_skill_list(&skills), "Rust, Go");
    }
}
