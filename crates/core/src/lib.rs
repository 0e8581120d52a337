//! Sora Report Core Library
//!
//! Turns video generation API responses into human-readable text reports.

pub mod config;
pub mod display;
pub mod error;
pub mod format;
pub mod kind;
pub mod record;

pub use config::FormatConfig;
pub use error::{ReportError, Result};
pub use format::{Formatter, format_batch_task_result, format_task_result, format_video_result};
pub use kind::{ResponseKind, format_response_str};
