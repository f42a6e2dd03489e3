//! # API crate — models and HTTP client for the CampusHub backend
//!
//! Everything the views need to talk to the backend lives here:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`] — one configured HTTP client bound to a base URL, attaching the session's bearer token, plus a typed wrapper per backend endpoint |
//! | [`config`] | [`ApiConfig`] — where the backend lives |
//! | [`error`] | [`ApiError`] — transport / backend / decode failure taxonomy |
//! | [`models`] | Courses, enrollments, request payloads, and the pure helpers views derive their state from |
//!
//! The client carries no policy: no retries, no timeouts, no caching. Each
//! call is a single best-effort request whose failure is surfaced verbatim to
//! the calling view.

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{
    AuthResponse, Course, CoursePayload, EnrollAction, EnrollRequest, Enrollment,
    EnrollmentStats, LoginRequest, ProfileUpdate, SignupRequest,
};
pub use session::{Role, User};
