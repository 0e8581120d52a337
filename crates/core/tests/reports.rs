use serde_json::json;
use sora_report_core::{
    FormatConfig, Formatter, ResponseKind, format_batch_task_result, format_response_str,
    format_task_result, format_video_result,
};

#[test]
fn every_formatter_renders_upstream_errors_the_same_way() {
    let record = json!({"error": {"code": "invalid_prompt", "message": "Prompt rejected"}});

    assert_eq!(format_video_result(&record), "Error: invalid_prompt - Prompt rejected");
    assert_eq!(format_task_result(&record), "Error: invalid_prompt - Prompt rejected");
    assert_eq!(format_batch_task_result(&record), "Error: invalid_prompt - Prompt rejected");

    let record = json!({"error": {"message": "Prompt rejected"}});
    for kind in ResponseKind::ALL {
        assert_eq!(
            Formatter::default().format(kind, &record),
            "Error: unknown - Prompt rejected",
            "{kind}"
        );
    }
}

#[test]
fn empty_records_only_show_placeholders() {
    for kind in ResponseKind::ALL {
        let output = format_response_str(kind, "{}").unwrap();
        assert!(!output.is_empty(), "{kind}");
    }

    let task = format_task_result(&json!({}));
    assert_eq!(
        task,
        "Task ID: N/A\nCreated At: N/A\n\nRequest:\n  Model: N/A\n  Size: N/A\n  Duration: N/As\n  Orientation: N/A\n  Prompt: N/A\n\nResponse: {}"
    );
}

#[test]
fn batch_report_covers_every_item() {
    let raw = r#"{
        "count": 2,
        "items": [
            {
                "id": "B1",
                "created_at": "2024-06-01T10:00:00Z",
                "request": {"prompt": "A slow pan across a misty mountain lake at sunrise, cinematic"},
                "response": {
                    "success": true,
                    "data": [
                        {"id": "v1", "video_url": "https://cdn.example/v1.mp4"},
                        {"id": "v2"}
                    ]
                }
            },
            {
                "id": "B2",
                "created_at": "2024-06-01T10:05:00Z",
                "request": {"prompt": "A cat"},
                "response": {"success": false}
            }
        ]
    }"#;

    let output = format_response_str(ResponseKind::BatchTaskResult, raw).unwrap();
    let expected = [
        "Total Tasks: 2",
        "",
        "=== Task: B1 ===",
        "Created At: 2024-06-01T10:00:00Z",
        "Prompt: A slow pan across a misty mountain lake at sunrise...",
        "Success: True",
        "  - Video: v1: https://cdn.example/v1.mp4",
        "  - Video: v2: N/A",
        "",
        "=== Task: B2 ===",
        "Created At: 2024-06-01T10:05:00Z",
        "Prompt: A cat...",
        "Success: False",
        "",
    ]
    .join("\n");

    assert_eq!(output, expected);
}

#[test]
fn task_report_shows_raw_failed_response() {
    let record = json!({
        "id": "T9",
        "request": {"model": "sora-2", "duration": 10},
        "response": {"success": false, "state": "failed", "detail": "it's blocked"}
    });

    let output = format_task_result(&record);
    assert!(output.contains("  Model: sora-2\n"));
    assert!(output.contains("  Duration: 10s\n"));
    assert!(output.ends_with(
        "Response: {'success': False, 'state': 'failed', 'detail': \"it's blocked\"}"
    ));
}

#[test]
fn configured_formatter_is_used_by_dispatch() {
    let config = FormatConfig::from_json_str(r#"{"missing": "?", "unknown_error_code": "E"}"#).unwrap();
    let formatter = Formatter::new(config);

    let output = formatter
        .format_str(ResponseKind::VideoResult, r#"{"success": true, "data": [{}]}"#)
        .unwrap();
    assert_eq!(
        output,
        "Task ID: ?\nTrace ID: ?\n\n--- Video 1 ---\nID: ?\nState: ?\nVideo URL: ?\n"
    );

    assert_eq!(
        formatter.format(ResponseKind::TaskResult, &json!({"error": {}})),
        "Error: E - Unknown error"
    );
}
