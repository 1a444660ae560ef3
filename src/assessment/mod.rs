pub mod azure;
pub mod factory;
pub mod interface;
pub mod region;
pub mod settings;

pub use azure::AzureAssessor;
pub use factory::AssessorFactory;
pub use interface::{AssessmentOutcome, AssessorError, PronunciationAssessor, RecognitionReason};
pub use region::AzureRegion;
pub use settings::{AssessmentSettings, Granularity, GradingSystem};
