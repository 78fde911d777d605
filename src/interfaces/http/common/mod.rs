//! Shared HTTP building blocks: response envelope, error mapping and
//! the extractors that reject into it.

pub mod api_error;
pub mod api_response;
pub mod id_path;
pub mod validated_json;

pub use api_error::{ApiError, ApiResult};
pub use api_response::ApiResponse;
pub use id_path::IdPath;
pub use validated_json::{ValidatedJson, ValidatedJsonRejection};
