//! Operation bindings for the Lex Model Building Service.
//!
//! Builds on the shapes in `lexmodel_types`: constraint checks before a
//! request leaves the process, REST-JSON binding into a [`PreparedRequest`],
//! and classification of the service's error responses. No HTTP client is
//! included; callers send the prepared request with whatever transport and
//! signing they already use.

pub mod error;
pub mod operation;
pub mod validate;

pub use error::{BindingError, PrepareError, ResponseError, ServiceError};
pub use operation::{
    AnyRequest, HttpMethod, LexOperation, OPERATIONS, PreparedRequest, decode_response, prepare,
};
pub use url::Url;
pub use validate::{Validate, ValidationReport, Validator, Violation, ViolationKind, validate};
