//! This crate contains all shared UI for the workspace.

pub mod forms;

mod platform;
pub use platform::{api_client, confirm_dialog, session_store};

mod auth;
pub use auth::{use_session, SessionContext, SessionProvider, SessionState};

mod flash;
pub use flash::{use_flash, ErrorBanner, Flash, FlashBanner};

mod course_card;
pub use course_card::CourseCard;

mod badge;
pub use badge::{RoleBadge, StatusBadge};
