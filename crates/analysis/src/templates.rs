use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::model::{
    AnalysisScores, MaturityClassification, OwnerProfile, Repository, Visibility,
};

/// Precomputed identity, scores and summary for a well-known repository.
///
/// A template pins the fields a reader would fact-check (stars, owner,
/// maturity, headline score); the per-request fields (charts, sections,
/// improvement plan) are still generated on every call.
#[derive(Debug, Clone)]
pub struct AnalysisTemplate {
    pub repository: Repository,
    pub owner: OwnerProfile,
    pub maturity_classification: MaturityClassification,
    pub scores: AnalysisScores,
    pub executive_summary: &'static str,
}

/// Lookup table from `owner/repo` full name to its curated template.
///
/// Keys are exact full names; matching is case-sensitive and performs no
/// normalization. The table is plain data: adding an entry never requires a
/// generator change.
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    entries: HashMap<String, AnalysisTemplate>,
}

impl TemplateCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Catalog preloaded with the built-in curated repositories.
    pub fn builtin() -> Self {
        let mut catalog = Self::default();
        catalog.insert(react_template());
        catalog.insert(nextjs_template());
        catalog
    }

    /// Register a template under its repository's full name.
    pub fn insert(&mut self, template: AnalysisTemplate) {
        let key = format!(
            "{}/{}",
            template.repository.owner, template.repository.name
        );
        self.entries.insert(key, template);
    }

    pub fn get(&self, full_name: &str) -> Option<&AnalysisTemplate> {
        self.entries.get(full_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn fixed_timestamp(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .expect("valid template timestamp")
        .with_timezone(&Utc)
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn react_template() -> AnalysisTemplate {
    AnalysisTemplate {
        repository: Repository {
            id: "1".to_string(),
            name: "react".to_string(),
            owner: "facebook".to_string(),
            description: "The library for web and native user interfaces. React lets you build \
                          user interfaces out of individual pieces called components."
                .to_string(),
            visibility: Visibility::Public,
            stars: 225_000,
            forks: 46_000,
            open_issues: 890,
            total_commits: 17_500,
            last_updated: fixed_timestamp("2024-12-14T10:30:00Z"),
            primary_language: "JavaScript".to_string(),
            topics: to_strings(&["react", "javascript", "frontend", "ui", "declarative"]),
        },
        owner: OwnerProfile {
            username: "facebook".to_string(),
            avatar_url: "https://avatars.githubusercontent.com/u/69631?v=4".to_string(),
            followers: 250_000,
            public_repos: 120,
            github_url: "https://github.com/facebook".to_string(),
        },
        maturity_classification: MaturityClassification::ScalableFoundation,
        scores: AnalysisScores {
            architecture: 9.5,
            code_quality: 9.2,
            maintainability: 9.0,
            documentation: 9.4,
            professional_practices: 9.6,
            production_readiness: 9.8,
            overall_score: 94,
        },
        executive_summary: "React represents the gold standard in frontend library development. \
                            With exceptional architecture patterns, comprehensive documentation, \
                            and battle-tested production reliability powering millions of \
                            applications worldwide, this repository exemplifies what mature \
                            open-source engineering looks like at scale.",
    }
}

fn nextjs_template() -> AnalysisTemplate {
    AnalysisTemplate {
        repository: Repository {
            id: "2".to_string(),
            name: "next.js".to_string(),
            owner: "vercel".to_string(),
            description: "The React Framework for the Web. Used by some of the world's largest \
                          companies, Next.js enables you to create high-quality web applications \
                          with the power of React components."
                .to_string(),
            visibility: Visibility::Public,
            stars: 125_000,
            forks: 26_800,
            open_issues: 2_450,
            total_commits: 21_000,
            last_updated: fixed_timestamp("2024-12-14T15:45:00Z"),
            primary_language: "TypeScript".to_string(),
            topics: to_strings(&["nextjs", "react", "typescript", "ssr", "framework"]),
        },
        owner: OwnerProfile {
            username: "vercel".to_string(),
            avatar_url: "https://avatars.githubusercontent.com/u/14985020?v=4".to_string(),
            followers: 45_000,
            public_repos: 180,
            github_url: "https://github.com/vercel".to_string(),
        },
        maturity_classification: MaturityClassification::ScalableFoundation,
        scores: AnalysisScores {
            architecture: 9.3,
            code_quality: 9.0,
            maintainability: 8.8,
            documentation: 9.5,
            professional_practices: 9.4,
            production_readiness: 9.6,
            overall_score: 92,
        },
        executive_summary: "Next.js demonstrates exceptional framework engineering with its \
                            innovative approach to React server components, hybrid rendering \
                            strategies, and developer experience. The codebase shows strong \
                            architectural decisions that scale across enterprise deployments.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_the_curated_entries() {
        let catalog = TemplateCatalog::builtin();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get("facebook/react").is_some());
        assert!(catalog.get("vercel/next.js").is_some());
    }

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        let catalog = TemplateCatalog::builtin();
        assert!(catalog.get("facebook/React").is_none());
        assert!(catalog.get("facebook/react/").is_none());
        assert!(catalog.get("react").is_none());
    }

    #[test]
    fn react_template_is_scalable_foundation() {
        let catalog = TemplateCatalog::builtin();
        let react = catalog.get("facebook/react").unwrap();
        assert_eq!(
            react.maturity_classification,
            MaturityClassification::ScalableFoundation
        );
        assert_eq!(react.scores.overall_score, 94);
        assert_eq!(react.repository.stars, 225_000);
        assert_eq!(react.owner.username, "facebook");
    }

    #[test]
    fn inserted_entries_resolve_by_full_name() {
        let mut catalog = TemplateCatalog::empty();
        assert!(catalog.is_empty());
        let mut template = react_template();
        template.repository.owner = "acme".to_string();
        template.repository.name = "widget".to_string();
        catalog.insert(template);
        assert!(catalog.get("acme/widget").is_some());
        assert!(catalog.get("facebook/react").is_none());
    }
}
