use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coarse lifecycle label assigned to the analyzed repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaturityClassification {
    Prototype,
    ProductionReady,
    ScalableFoundation,
    Experimental,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
}

/// Qualitative rating attached to an evaluation section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    Excellent,
    Good,
    NeedsImprovement,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Success,
    Warning,
    Danger,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    ShortTerm,
    LongTerm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub description: String,
    pub visibility: Visibility,
    pub stars: i64,
    pub forks: i64,
    pub open_issues: i64,
    pub total_commits: i64,
    pub last_updated: DateTime<Utc>,
    pub primary_language: String,
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerProfile {
    pub username: String,
    pub avatar_url: String,
    pub followers: i64,
    pub public_repos: i64,
    pub github_url: String,
}

/// Six bounded sub-scores plus the headline score.
///
/// Sub-scores live in `[0, 10]`, `overall_score` in `[0, 100]`. For
/// generated records `overall_score` is its own draw, not a function of the
/// six sub-scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisScores {
    pub architecture: f32,
    pub code_quality: f32,
    pub maintainability: f32,
    pub documentation: f32,
    pub professional_practices: f32,
    pub production_readiness: f32,
    pub overall_score: i64,
}

impl AnalysisScores {
    /// Clamp every field to its declared range.
    pub fn clamped(self) -> Self {
        Self {
            architecture: self.architecture.clamp(0.0, 10.0),
            code_quality: self.code_quality.clamp(0.0, 10.0),
            maintainability: self.maintainability.clamp(0.0, 10.0),
            documentation: self.documentation.clamp(0.0, 10.0),
            professional_practices: self.professional_practices.clamp(0.0, 10.0),
            production_readiness: self.production_readiness.clamp(0.0, 10.0),
            overall_score: self.overall_score.clamp(0, 100),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSection {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub verdict: Verdict,
    pub summary: String,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub icon: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageShare {
    pub name: String,
    pub percentage: f32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitActivity {
    pub month: String,
    pub commits: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueResolution {
    pub month: String,
    pub opened: i64,
    pub closed: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImprovementItem {
    pub id: String,
    pub priority: Priority,
    pub task: String,
    pub impact: Impact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiringPerspective {
    pub verdict: String,
    pub suitable_roles: Vec<String>,
    pub developer_level: String,
    pub holding_back: Vec<String>,
    pub strengths: Vec<String>,
}

/// The complete, self-contained analysis snapshot returned to the client.
///
/// Produced fresh per request and never persisted; list fields keep their
/// insertion order, which is the display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryAnalysis {
    pub id: String,
    pub repository: Repository,
    pub owner: OwnerProfile,
    pub executive_summary: String,
    pub maturity_classification: MaturityClassification,
    pub scores: AnalysisScores,
    pub sections: Vec<AnalysisSection>,
    pub insights: Vec<Insight>,
    pub languages: Vec<LanguageShare>,
    pub commit_activity: Vec<CommitActivity>,
    pub issue_resolution: Vec<IssueResolution>,
    pub improvements: Vec<ImprovementItem>,
    pub hiring_perspective: HiringPerspective,
    pub analyzed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_use_wire_spellings() {
        assert_eq!(
            serde_json::to_string(&MaturityClassification::ScalableFoundation).unwrap(),
            "\"scalable-foundation\""
        );
        assert_eq!(
            serde_json::to_string(&MaturityClassification::ProductionReady).unwrap(),
            "\"production-ready\""
        );
        assert_eq!(
            serde_json::to_string(&Verdict::NeedsImprovement).unwrap(),
            "\"needs-improvement\""
        );
        assert_eq!(
            serde_json::to_string(&Priority::ShortTerm).unwrap(),
            "\"short-term\""
        );
        assert_eq!(
            serde_json::to_string(&InsightKind::Danger).unwrap(),
            "\"danger\""
        );
        assert_eq!(serde_json::to_string(&Impact::Medium).unwrap(), "\"medium\"");
        assert_eq!(
            serde_json::to_string(&Visibility::Public).unwrap(),
            "\"public\""
        );
    }

    #[test]
    fn insight_kind_serializes_as_type() {
        let insight = Insight {
            id: "insight-1".to_string(),
            kind: InsightKind::Warning,
            icon: "alert-triangle".to_string(),
            message: "Some open issues aging beyond 30 days without response".to_string(),
        };
        let value = serde_json::to_value(&insight).unwrap();
        assert_eq!(value["type"], "warning");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn clamp_pins_out_of_range_scores() {
        let scores = AnalysisScores {
            architecture: 11.0,
            code_quality: -1.0,
            maintainability: 5.0,
            documentation: 10.5,
            professional_practices: 0.0,
            production_readiness: 10.0,
            overall_score: 140,
        }
        .clamped();
        assert_eq!(scores.architecture, 10.0);
        assert_eq!(scores.code_quality, 0.0);
        assert_eq!(scores.maintainability, 5.0);
        assert_eq!(scores.documentation, 10.0);
        assert_eq!(scores.overall_score, 100);
    }
}
