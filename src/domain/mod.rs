//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{ApiRequest, Method};
pub use response::ApiErrorCause;
pub use validation::ValidationError;
pub use value::{ApiKeyId, ApiSecretKey, Credentials};
