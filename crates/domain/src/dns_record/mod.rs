pub mod record_type;

pub use record_type::{is_known_type, numeric_to_str, RecordType};
