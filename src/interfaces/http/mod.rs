//! HTTP REST API interfaces
//!
//! - `common`: response envelope, error mapping, validating extractor
//! - `modules`: request handlers grouped by resource, plus middleware
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::{create_api_router, ApiDoc, FEES_PREFIX};
