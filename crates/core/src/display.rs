use std::fmt::Write;

use serde_json::{Map, Value};

/// Plain text of a value as it appears inside a report line
pub fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => repr(other),
    }
}

/// Literal rendering of a value, e.g. `{'success': False}`
pub fn repr(value: &Value) -> String {
    let mut output = String::new();
    write_repr(&mut output, value);
    output
}

fn write_repr(output: &mut String, value: &Value) {
    match value {
        Value::Null => output.push_str("None"),
        Value::Bool(true) => output.push_str("True"),
        Value::Bool(false) => output.push_str("False"),
        Value::Number(n) => {
            let _ = write!(output, "{}", n);
        }
        Value::String(s) => write_quoted(output, s),
        Value::Array(items) => {
            output.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    output.push_str(", ");
                }
                write_repr(output, item);
            }
            output.push(']');
        }
        Value::Object(map) => write_map(output, map),
    }
}

fn write_map(output: &mut String, map: &Map<String, Value>) {
    output.push('{');
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            output.push_str(", ");
        }
        write_quoted(output, key);
        output.push_str(": ");
        write_repr(output, value);
    }
    output.push('}');
}

fn write_quoted(output: &mut String, s: &str) {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    output.push(quote);
    for c in s.chars() {
        match c {
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c == quote => {
                output.push('\\');
                output.push(c);
            }
            c if c.is_ascii_control() => {
                let _ = write!(output, "\\x{:02x}", c as u32);
            }
            c => output.push(c),
        }
    }
    output.push(quote);
}

/// First `max_chars` characters of `text`, never splitting a code point
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
