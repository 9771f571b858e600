mod record;
mod session;

pub use record::{WeldingRecord, DEFAULT_OPERATOR, SAMPLE_DURATION};
pub use session::Session;
