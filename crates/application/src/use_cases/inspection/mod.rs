mod find_nameservers;
mod inspect;
mod query_nameservers;

pub use find_nameservers::FindNameserversUseCase;
pub use inspect::{InspectUseCase, InspectionOutcome};
pub use query_nameservers::QueryNameserversUseCase;
