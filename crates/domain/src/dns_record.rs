mod record;
mod record_type;

pub use record::Record;
pub use record_type::RecordType;
