//! BDD scenario extraction
//!
//! Pipeline per file: test declarations from the visitor are classified into
//! actions and expectations, each call gets a synthesized sentence, and the
//! assembler buckets them into one Given/When/Then [`Scenario`] per test.

pub mod assembler;
pub mod classifier;
pub mod comments;
pub mod contextual;
pub mod extractor;
pub mod model;
pub mod synthesis;

pub use assembler::{assemble, feature_name};
pub use classifier::{classify_call, classify_name, classify_test_case, EXPECTATION_MARKERS};
pub use extractor::{extract_scenarios, CodeAnalysisExtractor, HybridExtractor};
pub use model::{Scenario, ScenarioMetadata, ScenarioSummary, TestType};
pub use synthesis::{synthesize_action, synthesize_expectation};
