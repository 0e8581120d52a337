use std::{fmt, str::FromStr};

use serde_json::Value;

use crate::{
    error::{ReportError, Result},
    format::Formatter,
};

/// The upstream response shapes a report can be built from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseKind {
    /// Result of submitting a generation request
    VideoResult,
    /// Lookup of one previously submitted task
    TaskResult,
    /// Lookup of several tasks at once
    BatchTaskResult,
}

impl ResponseKind {
    pub const ALL: [ResponseKind; 3] = [
        ResponseKind::VideoResult,
        ResponseKind::TaskResult,
        ResponseKind::BatchTaskResult,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ResponseKind::VideoResult => "video_result",
            ResponseKind::TaskResult => "task_result",
            ResponseKind::BatchTaskResult => "batch_task_result",
        }
    }
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResponseKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "video" | "video_result" => Ok(ResponseKind::VideoResult),
            "task" | "task_result" => Ok(ResponseKind::TaskResult),
            "batch" | "batch_task" | "batch_task_result" => Ok(ResponseKind::BatchTaskResult),
            _ => Err(ReportError::UnknownKind {
                name: s.to_string(),
            }),
        }
    }
}

impl Formatter {
    /// Format `record` as the given kind of response
    pub fn format(&self, kind: ResponseKind, record: &Value) -> String {
        match kind {
            ResponseKind::VideoResult => self.video_result(record),
            ResponseKind::TaskResult => self.task_result(record),
            ResponseKind::BatchTaskResult => self.batch_task_result(record),
        }
    }

    /// Parse raw JSON and format it; only malformed JSON is an error
    pub fn format_str(&self, kind: ResponseKind, json: &str) -> Result<String> {
        let record: Value = serde_json::from_str(json)?;
        Ok(self.format(kind, &record))
    }
}

/// Parse and format a raw JSON response with the default layout
pub fn format_response_str(kind: ResponseKind, json: &str) -> Result<String> {
    Formatter::default().format_str(kind, json)
}
