use serde_json::Value;
use tracing::{debug, trace};

use crate::{
    config::FormatConfig,
    display::{display, repr, truncate_chars},
    record::{field, has_key, list, nested, text_or, truthy},
};

/// Renders video generation API responses as plain-text reports.
///
/// Formatting never fails: absent or oddly-typed fields fall back to the
/// placeholders in [`FormatConfig`].
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    config: FormatConfig,
}

impl Formatter {
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    fn text(&self, record: &Value, key: &str) -> String {
        text_or(record, key, &self.config.missing)
    }

    /// The `Error: {code} - {message}` line for an upstream failure
    pub fn error_line(&self, record: &Value) -> String {
        let error = nested(record, "error");
        let code = text_or(error, "code", &self.config.unknown_error_code);
        let message = text_or(error, "message", &self.config.unknown_error_message);
        debug!(%code, %message, "upstream reported failure");
        format!("Error: {} - {}", code, message)
    }

    fn push_video_blocks(&self, lines: &mut Vec<String>, videos: &[Value]) {
        for (i, video) in videos.iter().enumerate() {
            lines.push(format!("--- Video {} ---", i + 1));
            lines.push(format!("ID: {}", self.text(video, "id")));
            lines.push(format!("State: {}", self.text(video, "state")));
            lines.push(format!("Video URL: {}", self.text(video, "video_url")));
            lines.push(String::new());
        }
    }

    /// Format the result of a video generation submission
    pub fn video_result(&self, record: &Value) -> String {
        if !truthy(record, "success") {
            return self.error_line(record);
        }

        let videos = list(record, "data");
        trace!(videos = videos.len(), "formatting video result");

        let mut lines = vec![
            format!("Task ID: {}", self.text(record, "task_id")),
            format!("Trace ID: {}", self.text(record, "trace_id")),
            String::new(),
        ];
        self.push_video_blocks(&mut lines, videos);

        lines.join("\n")
    }

    /// Format a single task lookup, with its request and response
    pub fn task_result(&self, record: &Value) -> String {
        if has_key(record, "error") {
            return self.error_line(record);
        }

        let request = nested(record, "request");
        let response = nested(record, "response");
        trace!(success = truthy(response, "success"), "formatting task result");

        let mut lines = vec![
            format!("Task ID: {}", self.text(record, "id")),
            format!("Created At: {}", self.text(record, "created_at")),
            String::new(),
            "Request:".to_string(),
            format!("  Model: {}", self.text(request, "model")),
            format!("  Size: {}", self.text(request, "size")),
            format!("  Duration: {}s", self.text(request, "duration")),
            format!("  Orientation: {}", self.text(request, "orientation")),
            format!("  Prompt: {}", self.text(request, "prompt")),
            String::new(),
        ];

        if truthy(response, "success") {
            lines.push("Response: Success".to_string());
            lines.push(String::new());
            self.push_video_blocks(&mut lines, list(response, "data"));
        } else {
            // A missing response renders as an empty mapping
            let raw = field(record, "response")
                .map(repr)
                .unwrap_or_else(|| "{}".to_string());
            lines.push(format!("Response: {}", raw));
        }

        lines.join("\n")
    }

    /// Format a batch task lookup, one short block per task
    pub fn batch_task_result(&self, record: &Value) -> String {
        if has_key(record, "error") {
            return self.error_line(record);
        }

        let items = list(record, "items");
        trace!(items = items.len(), "formatting batch task result");

        let mut lines = vec![
            format!("Total Tasks: {}", text_or(record, "count", "0")),
            String::new(),
        ];

        for item in items {
            let request = nested(item, "request");
            let response = nested(item, "response");

            let prompt = self.text(request, "prompt");
            let success = field(response, "success")
                .map(display)
                .unwrap_or_else(|| "False".to_string());

            lines.push(format!("=== Task: {} ===", self.text(item, "id")));
            lines.push(format!("Created At: {}", self.text(item, "created_at")));
            lines.push(format!(
                "Prompt: {}{}",
                truncate_chars(&prompt, self.config.prompt_preview_chars),
                self.config.ellipsis
            ));
            lines.push(format!("Success: {}", success));

            for video in list(response, "data") {
                lines.push(format!(
                    "  - Video: {}: {}",
                    self.text(video, "id"),
                    self.text(video, "video_url")
                ));
            }

            lines.push(String::new());
        }

        lines.join("\n")
    }
}

/// Format a video submission result with the default layout
pub fn format_video_result(record: &Value) -> String {
    Formatter::default().video_result(record)
}

/// Format a single task lookup with the default layout
pub fn format_task_result(record: &Value) -> String {
    Formatter::default().task_result(record)
}

/// Format a batch task lookup with the default layout
pub fn format_batch_task_result(record: &Value) -> String {
    Formatter::default().batch_task_result(record)
}
