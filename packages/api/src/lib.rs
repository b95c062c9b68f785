//! HTTP client layer for the application portal backend.
//!
//! One call per backend operation, split across two surfaces:
//! - the public submission endpoint (multipart form posts)
//! - the bearer-authenticated admin endpoints (list, stats, mutations,
//!   export)
//!
//! This layer does not retry, does not cache, and does not parse structured
//! error bodies; any transport failure or non-2xx status comes back as a
//! single [`ApiError`].

mod admin;
mod error;
mod public;
mod session;

pub use admin::{AdminApi, ApplicationsPage, Credentials, LoginResponse};
pub use error::ApiError;
pub use public::{PhotoUpload, PublicApi, SubmissionDraft};
pub use session::Session;

// Re-export core types for convenience
pub use interview_core::{
    Application, ApplicationId, ApplicationStatus, ExamType, ExportFormat, QueryState, Stats,
};

/// Base URLs for the two backend surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub public_base: String,
    pub admin_base: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            public_base: "http://localhost:5000/api".to_string(),
            admin_base: "http://localhost:5000/api/admin".to_string(),
        }
    }
}
