use chrono::{DateTime, Duration, Utc};
use common::RepoPath;
use rand::Rng;
use tracing::debug;

use crate::model::{
    AnalysisScores, CommitActivity, IssueResolution, MaturityClassification, OwnerProfile,
    Repository, RepositoryAnalysis, Visibility,
};
use crate::narrative::{
    self, GENERIC_DESCRIPTION, GENERIC_EXECUTIVE_SUMMARY,
};
use crate::templates::TemplateCatalog;

/// Months covered by the activity charts, oldest first.
const MONTHS: [&str; 6] = ["Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// Per-month minimum commit counts; each month adds a draw from `[0, 100)`.
const COMMIT_FLOORS: [i64; 6] = [50, 60, 70, 80, 75, 90];

/// Per-month minimums for opened issues; each adds a draw from `[0, 30)`.
const ISSUES_OPENED_FLOORS: [i64; 6] = [10, 15, 12, 18, 14, 16];

/// Per-month minimums for closed issues; each adds a draw from `[0, 35)`.
const ISSUES_CLOSED_FLOORS: [i64; 6] = [15, 20, 18, 22, 19, 21];

const SECONDS_PER_30_DAYS: i64 = 30 * 24 * 60 * 60;

/// Builds a complete [`RepositoryAnalysis`] for any validated path.
///
/// Repositories present in the catalog keep their curated identity and
/// scores; everything else gets synthesized values drawn from the supplied
/// generator. Charts and the improvement plan are regenerated on every call
/// either way, so two requests for the same repository never match exactly.
#[derive(Debug, Clone)]
pub struct AnalysisGenerator {
    catalog: TemplateCatalog,
}

impl Default for AnalysisGenerator {
    fn default() -> Self {
        Self::new(TemplateCatalog::builtin())
    }
}

impl AnalysisGenerator {
    pub fn new(catalog: TemplateCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    pub fn generate<R: Rng>(&self, repo: &RepoPath, rng: &mut R) -> RepositoryAnalysis {
        let now = Utc::now();
        let template = self.catalog.get(&repo.full_name());
        let curated = template.is_some();
        debug!(repo = %repo, curated, "assembling analysis");

        let (repository, owner, maturity_classification, scores, executive_summary) =
            match template {
                Some(template) => (
                    template.repository.clone(),
                    template.owner.clone(),
                    template.maturity_classification,
                    template.scores.clone().clamped(),
                    template.executive_summary.to_string(),
                ),
                None => (
                    synthesize_repository(repo, now, rng),
                    synthesize_owner(&repo.owner, rng),
                    MaturityClassification::ProductionReady,
                    synthesize_scores(rng),
                    GENERIC_EXECUTIVE_SUMMARY.to_string(),
                ),
            };

        RepositoryAnalysis {
            id: format!("analysis-{}", now.timestamp_millis()),
            repository,
            owner,
            executive_summary,
            maturity_classification,
            scores,
            sections: narrative::evaluation_sections(curated),
            insights: narrative::headline_insights(curated),
            languages: narrative::language_breakdown(),
            commit_activity: commit_activity(rng),
            issue_resolution: issue_resolution(rng),
            improvements: narrative::improvement_plan(),
            hiring_perspective: narrative::hiring_perspective(curated),
            analyzed_at: now,
        }
    }
}

fn synthesize_repository<R: Rng>(
    repo: &RepoPath,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Repository {
    let last_updated = now - Duration::seconds(rng.gen_range(0..SECONDS_PER_30_DAYS));
    Repository {
        id: format!("repo-{}", now.timestamp_millis()),
        name: repo.name.clone(),
        owner: repo.owner.clone(),
        description: GENERIC_DESCRIPTION.to_string(),
        visibility: Visibility::Public,
        stars: rng.gen_range(500..5_500),
        forks: rng.gen_range(100..1_100),
        open_issues: rng.gen_range(10..110),
        total_commits: rng.gen_range(500..3_500),
        last_updated,
        primary_language: "TypeScript".to_string(),
        topics: vec![
            "opensource".to_string(),
            "typescript".to_string(),
            "modern".to_string(),
        ],
    }
}

fn synthesize_owner<R: Rng>(owner: &str, rng: &mut R) -> OwnerProfile {
    OwnerProfile {
        username: owner.to_string(),
        avatar_url: format!(
            "https://avatars.githubusercontent.com/u/{}?v=4",
            rng.gen_range(0u32..10_000_000)
        ),
        followers: rng.gen_range(100..10_100),
        public_repos: rng.gen_range(10..110),
        github_url: format!("https://github.com/{owner}"),
    }
}

fn synthesize_scores<R: Rng>(rng: &mut R) -> AnalysisScores {
    AnalysisScores {
        architecture: 7.5 + rng.gen::<f32>() * 1.5,
        code_quality: 7.0 + rng.gen::<f32>() * 2.0,
        maintainability: 7.2 + rng.gen::<f32>() * 1.8,
        documentation: 6.5 + rng.gen::<f32>() * 2.5,
        professional_practices: 7.0 + rng.gen::<f32>() * 2.0,
        production_readiness: 7.5 + rng.gen::<f32>() * 1.5,
        // Drawn on its own; not a function of the six sub-scores.
        overall_score: rng.gen_range(70..90),
    }
    .clamped()
}

fn commit_activity<R: Rng>(rng: &mut R) -> Vec<CommitActivity> {
    MONTHS
        .iter()
        .zip(COMMIT_FLOORS)
        .map(|(month, floor)| CommitActivity {
            month: (*month).to_string(),
            commits: floor + rng.gen_range(0..100),
        })
        .collect()
}

fn issue_resolution<R: Rng>(rng: &mut R) -> Vec<IssueResolution> {
    MONTHS
        .iter()
        .zip(ISSUES_OPENED_FLOORS)
        .zip(ISSUES_CLOSED_FLOORS)
        .map(|((month, opened_floor), closed_floor)| IssueResolution {
            month: (*month).to_string(),
            opened: opened_floor + rng.gen_range(0..30),
            closed: closed_floor + rng.gen_range(0..35),
        })
        .collect()
}
