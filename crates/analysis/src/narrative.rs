//! Pre-written evaluation copy.
//!
//! Verdict-bearing pieces come in two variants: one for curated catalog
//! entries, one for everything else. The variant tracks the catalog hit,
//! never the drawn scores.

use crate::model::{
    AnalysisSection, HiringPerspective, Impact, ImprovementItem, Insight, InsightKind,
    LanguageShare, Priority, Verdict,
};

pub const GENERIC_DESCRIPTION: &str = "A well-maintained repository demonstrating modern \
                                       software engineering practices and clean architecture \
                                       principles.";

pub const GENERIC_EXECUTIVE_SUMMARY: &str =
    "This repository demonstrates solid engineering fundamentals with room for growth. The \
     codebase shows thoughtful organization and follows many industry best practices. With some \
     targeted improvements to documentation and testing coverage, this could evolve into a \
     highly maintainable production-grade project.";

/// The fixed, ordered list of evaluation categories.
pub fn evaluation_sections(curated: bool) -> Vec<AnalysisSection> {
    let shared = if curated {
        Verdict::Excellent
    } else {
        Verdict::Good
    };
    let gap = if curated {
        Verdict::Excellent
    } else {
        Verdict::NeedsImprovement
    };

    vec![
        section(
            "architecture",
            "Architecture & System Design",
            "layers",
            shared,
            "The repository demonstrates strong architectural patterns with clear separation of \
             concerns and modular design principles.",
            &[
                "Well-organized folder structure following domain-driven principles",
                "Clear module boundaries with minimal coupling between components",
                "Scalable patterns that can accommodate 10x growth",
                "Consistent use of dependency injection for testability",
            ],
        ),
        section(
            "code-quality",
            "Code Quality & Maintainability",
            "code",
            shared,
            "Code quality metrics indicate a mature codebase with consistent patterns and \
             readable implementations.",
            &[
                "Consistent coding style enforced through linting configurations",
                "Low cyclomatic complexity in most modules",
                "Appropriate use of abstractions without over-engineering",
                "Type safety leveraged effectively throughout the codebase",
            ],
        ),
        section(
            "git-discipline",
            "Git & Engineering Discipline",
            "git-branch",
            shared,
            "Commit history shows disciplined engineering practices with meaningful messages and \
             atomic changes.",
            &[
                "Conventional commit messages with clear context",
                "Feature branches merged through pull request workflow",
                "Regular, consistent contribution patterns",
                "Clean git history without excessive merge commits",
            ],
        ),
        if curated {
            section(
                "documentation",
                "Documentation & Developer Experience",
                "file-text",
                gap,
                "Comprehensive documentation that enables rapid onboarding and clear \
                 understanding of the system.",
                &[
                    "Thorough README with quick start guide",
                    "API documentation with examples",
                    "Contributing guidelines for new developers",
                    "Architecture decision records for major choices",
                ],
            )
        } else {
            section(
                "documentation",
                "Documentation & Developer Experience",
                "file-text",
                gap,
                "Documentation exists but could benefit from more detailed examples and \
                 architectural overviews.",
                &[
                    "Basic README with setup instructions",
                    "Some inline code documentation",
                    "Missing API reference documentation",
                    "No architecture decision records",
                ],
            )
        },
        if curated {
            section(
                "testing",
                "Testing & Reliability",
                "test-tube",
                gap,
                "Comprehensive test coverage with unit, integration, and end-to-end testing \
                 strategies.",
                &[
                    "High unit test coverage (>85%)",
                    "Integration tests for key workflows",
                    "End-to-end tests for critical user journeys",
                    "CI pipeline enforces test passing before merge",
                ],
            )
        } else {
            section(
                "testing",
                "Testing & Reliability",
                "test-tube",
                gap,
                "Test coverage exists but could be expanded for critical paths.",
                &[
                    "Unit tests for core business logic",
                    "Integration tests for API endpoints",
                    "Missing end-to-end test coverage",
                    "CI pipeline runs tests on pull requests",
                ],
            )
        },
        section(
            "security",
            "Performance, Security & Best Practices",
            "shield",
            shared,
            "Security practices and performance considerations are well-implemented with room \
             for advanced optimizations.",
            &[
                "No exposed secrets or credentials in codebase",
                "Dependencies are regularly updated",
                "Input validation implemented for external data",
                "Performance-conscious patterns in hot paths",
            ],
        ),
        section(
            "mindset",
            "Engineering Mindset & Intent",
            "brain",
            shared,
            "The repository shows clear product thinking with features that solve real problems \
             rather than technical showcases.",
            &[
                "Clear problem statement in documentation",
                "Features aligned with user needs",
                "Pragmatic technical choices over trend-following",
                "Evidence of iterative improvement over time",
            ],
        ),
        if curated {
            section(
                "production",
                "Production Readiness",
                "rocket",
                shared,
                "Battle-tested in production environments with proven reliability and \
                 operational maturity.",
                &[
                    "Proven at scale with millions of users",
                    "Comprehensive monitoring and observability",
                    "Clear deployment and rollback procedures",
                    "Incident response documentation available",
                ],
            )
        } else {
            section(
                "production",
                "Production Readiness",
                "rocket",
                shared,
                "Ready for production deployment with standard operational considerations.",
                &[
                    "Basic error handling and logging",
                    "Environment configuration management",
                    "Deployment scripts or CI/CD pipeline",
                    "Would benefit from monitoring setup",
                ],
            )
        },
    ]
}

/// Six tagged headline messages.
pub fn headline_insights(curated: bool) -> Vec<Insight> {
    let rows: &[(&str, InsightKind, &str, &str)] = if curated {
        &[
            (
                "insight-1",
                InsightKind::Success,
                "flame",
                "Actively maintained with regular commits and responsive issue handling",
            ),
            (
                "insight-2",
                InsightKind::Success,
                "check-circle",
                "Excellent issue resolution rate with community engagement",
            ),
            (
                "insight-3",
                InsightKind::Success,
                "rocket",
                "Strong foundation ready for enterprise-scale adoption",
            ),
            (
                "insight-4",
                InsightKind::Success,
                "shield",
                "No security vulnerabilities detected in dependency scan",
            ),
            (
                "insight-5",
                InsightKind::Success,
                "zap",
                "Performance optimizations implemented throughout critical paths",
            ),
            (
                "insight-6",
                InsightKind::Success,
                "check-circle",
                "Comprehensive test suite with CI enforcement",
            ),
        ]
    } else {
        &[
            (
                "insight-1",
                InsightKind::Success,
                "flame",
                "Actively maintained with regular commits and responsive issue handling",
            ),
            (
                "insight-2",
                InsightKind::Warning,
                "alert-triangle",
                "Some open issues aging beyond 30 days without response",
            ),
            (
                "insight-3",
                InsightKind::Info,
                "book-open",
                "README provides good overview but lacks advanced usage examples",
            ),
            (
                "insight-4",
                InsightKind::Success,
                "shield",
                "No security vulnerabilities detected in dependency scan",
            ),
            (
                "insight-5",
                InsightKind::Info,
                "zap",
                "TypeScript adoption provides strong type safety benefits",
            ),
            (
                "insight-6",
                InsightKind::Warning,
                "alert-triangle",
                "Test coverage could be expanded for edge cases",
            ),
        ]
    };

    rows.iter()
        .map(|(id, kind, icon, message)| Insight {
            id: (*id).to_string(),
            kind: *kind,
            icon: (*icon).to_string(),
            message: (*message).to_string(),
        })
        .collect()
}

/// Language split shown in the breakdown chart. Shares are display values
/// and are not required to sum to 100.
pub fn language_breakdown() -> Vec<LanguageShare> {
    let rows: &[(&str, f32, &str)] = &[
        ("TypeScript", 65.0, "hsl(200, 90%, 50%)"),
        ("JavaScript", 20.0, "hsl(45, 95%, 55%)"),
        ("CSS", 10.0, "hsl(280, 70%, 55%)"),
        ("HTML", 5.0, "hsl(0, 72%, 51%)"),
    ];
    rows.iter()
        .map(|(name, percentage, color)| LanguageShare {
            name: (*name).to_string(),
            percentage: *percentage,
            color: (*color).to_string(),
        })
        .collect()
}

/// Suggested roadmap: four short-term and four long-term tasks.
pub fn improvement_plan() -> Vec<ImprovementItem> {
    let rows: &[(&str, Priority, &str, Impact)] = &[
        (
            "imp-1",
            Priority::ShortTerm,
            "Add comprehensive API documentation with examples",
            Impact::High,
        ),
        (
            "imp-2",
            Priority::ShortTerm,
            "Increase unit test coverage for utility functions",
            Impact::Medium,
        ),
        (
            "imp-3",
            Priority::ShortTerm,
            "Add contributing guidelines for new developers",
            Impact::Medium,
        ),
        (
            "imp-4",
            Priority::ShortTerm,
            "Implement conventional commit message enforcement",
            Impact::Low,
        ),
        (
            "imp-5",
            Priority::LongTerm,
            "Set up end-to-end testing with Playwright or Cypress",
            Impact::High,
        ),
        (
            "imp-6",
            Priority::LongTerm,
            "Implement comprehensive monitoring and alerting",
            Impact::High,
        ),
        (
            "imp-7",
            Priority::LongTerm,
            "Create architecture decision records for major choices",
            Impact::Medium,
        ),
        (
            "imp-8",
            Priority::LongTerm,
            "Establish performance benchmarking pipeline",
            Impact::Medium,
        ),
    ];
    rows.iter()
        .map(|(id, priority, task, impact)| ImprovementItem {
            id: (*id).to_string(),
            priority: *priority,
            task: (*task).to_string(),
            impact: *impact,
        })
        .collect()
}

pub fn hiring_perspective(curated: bool) -> HiringPerspective {
    let strengths = to_strings(&[
        "Clean code organization and consistent patterns",
        "Evidence of iterative improvement and refactoring",
        "Thoughtful architectural decisions",
        "Professional git workflow practices",
    ]);

    if curated {
        HiringPerspective {
            verdict: "This repository would strongly impress a hiring panel. It demonstrates \
                      mastery of software engineering principles at scale and shows the kind of \
                      work expected from senior to staff-level engineers."
                .to_string(),
            suitable_roles: to_strings(&[
                "Staff Engineer",
                "Principal Engineer",
                "Engineering Manager",
                "Tech Lead",
            ]),
            developer_level: "Staff / Principal Level".to_string(),
            holding_back: to_strings(&[
                "High issue volume could indicate scaling challenges",
                "Some legacy patterns present in older modules",
            ]),
            strengths,
        }
    } else {
        HiringPerspective {
            verdict: "This repository demonstrates solid engineering fundamentals that would \
                      positively impress most hiring panels. It shows professional development \
                      practices and attention to quality."
                .to_string(),
            suitable_roles: to_strings(&[
                "Senior Developer",
                "Full Stack Engineer",
                "Frontend Lead",
                "Backend Developer",
            ]),
            developer_level: "Mid-Senior Level".to_string(),
            holding_back: to_strings(&[
                "Documentation could be more comprehensive",
                "Test coverage below industry best practices",
                "Missing architecture decision documentation",
                "No visible monitoring or observability setup",
            ]),
            strengths,
        }
    }
}

fn section(
    id: &str,
    title: &str,
    icon: &str,
    verdict: Verdict,
    summary: &str,
    details: &[&str],
) -> AnalysisSection {
    AnalysisSection {
        id: id.to_string(),
        title: title.to_string(),
        icon: icon.to_string(),
        verdict,
        summary: summary.to_string(),
        details: to_strings(details),
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}
