pub mod generator;
pub mod model;
pub mod narrative;
pub mod templates;

pub use generator::AnalysisGenerator;
pub use model::RepositoryAnalysis;
pub use templates::{AnalysisTemplate, TemplateCatalog};
