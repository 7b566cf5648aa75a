pub mod confidence;
pub mod record;
pub mod value;

pub use confidence::Confidence;
pub use record::{EvidenceRecord, FactKey};
pub use value::{FactValue, Scalar};
