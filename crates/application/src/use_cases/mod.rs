pub mod inspection;

// Re-export use cases
pub use inspection::{
    FindNameserversUseCase, InspectUseCase, InspectionOutcome, QueryNameserversUseCase,
};
