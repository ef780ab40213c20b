pub mod encoder;
pub mod error;
pub mod logger;
pub mod report;
pub mod service_account;

pub use encoder::encode_service_account;
pub use error::{EncodeError, SchemaError};
