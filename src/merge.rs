//! Keyword Merge Engine: folds a freshly generated batch into a project's
//! existing collection.
//!
//! De-duplication compares `keyword` strings exactly — no case or
//! whitespace normalization. Existing entries always win over incoming
//! duplicates and keep their original order.

use crate::models::{KeywordProject, KeywordResult};

/// Returns a new project whose keyword list contains every existing entry
/// (in order) followed by each incoming entry (in order) whose `keyword`
/// string is not already present — including duplicates introduced earlier
/// in the same batch. All other project fields are unchanged.
///
/// An empty batch yields the project unchanged; re-merging the same batch
/// is idempotent.
pub fn merge_keywords(project: &KeywordProject, incoming: &[KeywordResult]) -> KeywordProject {
    let mut merged = project.clone();
    for candidate in incoming {
        let exists = merged
            .keywords
            .iter()
            .any(|existing| existing.keyword == candidate.keyword);
        if !exists {
            merged.keywords.push(candidate.clone());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Competition, SearchIntent};

    fn kw(keyword: &str, difficulty: u8) -> KeywordResult {
        KeywordResult {
            keyword: keyword.to_string(),
            volume: "1k-10k".to_string(),
            difficulty,
            intent: SearchIntent::Informational,
            competition: Competition::Low,
        }
    }

    fn project_with(keywords: Vec<KeywordResult>) -> KeywordProject {
        let mut project = KeywordProject::new("Blog", "example.com");
        project.keywords = keywords;
        project
    }

    #[test]
    fn existing_entries_are_preserved_in_order() {
        let project = project_with(vec![kw("alpha", 10), kw("beta", 20)]);
        let merged = merge_keywords(&project, &[kw("gamma", 30)]);

        let names: Vec<&str> = merged.keywords.iter().map(|k| k.keyword.as_str()).collect();
        assert_eq!(names, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn incoming_duplicate_does_not_overwrite_existing() {
        let project = project_with(vec![kw("seo tips", 35)]);
        let incoming = vec![kw("seo tips", 90), kw("best seo tools", 70)];

        let merged = merge_keywords(&project, &incoming);
        assert_eq!(merged.keywords.len(), 2);
        // The original entry is retained unchanged, not replaced.
        assert_eq!(merged.keywords[0].difficulty, 35);
        assert_eq!(merged.keywords[1].keyword, "best seo tools");
    }

    #[test]
    fn duplicates_within_one_batch_collapse() {
        let project = project_with(vec![]);
        let incoming = vec![kw("alpha", 10), kw("alpha", 99), kw("beta", 20)];

        let merged = merge_keywords(&project, &incoming);
        assert_eq!(merged.keywords.len(), 2);
        assert_eq!(merged.keywords[0].difficulty, 10);
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let project = project_with(vec![kw("SEO Tips", 35)]);
        let merged = merge_keywords(&project, &[kw("seo tips", 35)]);
        assert_eq!(merged.keywords.len(), 2);
    }

    #[test]
    fn empty_batch_is_identity() {
        let project = project_with(vec![kw("alpha", 10)]);
        let merged = merge_keywords(&project, &[]);
        assert_eq!(merged, project);
    }

    #[test]
    fn remerging_the_same_batch_is_idempotent() {
        let project = project_with(vec![kw("alpha", 10)]);
        let batch = vec![kw("beta", 20), kw("gamma", 30)];

        let once = merge_keywords(&project, &batch);
        let twice = merge_keywords(&once, &batch);
        assert_eq!(once, twice);
    }

    #[test]
    fn other_project_fields_are_untouched() {
        let project = project_with(vec![]);
        let merged = merge_keywords(&project, &[kw("alpha", 10)]);
        assert_eq!(merged.id, project.id);
        assert_eq!(merged.name, project.name);
        assert_eq!(merged.domain, project.domain);
        assert_eq!(merged.created_at, project.created_at);
    }
}
