use super::*;
use tempfile::TempDir;

#[test]
fn test_console_line_format() {
    let entry = LogEntry::new("Page B", "BadData: Not enough data points");
    assert_eq!(console_line(&entry), "<Page B>: BadData: Not enough data points");
}

#[test]
fn test_jsonl_sink_writes_one_line_per_entry() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("logs").join("events.jsonl");

    let mut sink = JsonlSink::new(&path).expect("Failed to create sink");
    assert_eq!(sink.path(), path.as_path());
    sink.emit(&LogEntry::new("Page A", "ok"))
        .expect("Failed to emit");
    sink.emit(&LogEntry::new("Page B", "BadData: Not enough data points"))
        .expect("Failed to emit");
    sink.flush().expect("Failed to flush");

    let content = std::fs::read_to_string(&path).expect("Failed to read event log");
    let lines: Vec<EventLine> = content
        .lines()
        .map(|l| serde_json::from_str(l).expect("Failed to parse event line"))
        .collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].seq, 1);
    assert_eq!(lines[1].seq, 2);
    assert_eq!(lines[0].name, "Page A");
    assert_eq!(lines[1].message, "BadData: Not enough data points");
    assert!(lines[0].ts.ends_with('Z'));
    assert!(lines[0].ts.contains('T'));
}

#[test]
fn test_jsonl_sink_appends_to_existing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("events.jsonl");

    for _ in 0..2 {
        let mut sink = JsonlSink::new(&path).expect("Failed to create sink");
        sink.emit(&LogEntry::new("Page A", "ok"))
            .expect("Failed to emit");
    }

    let content = std::fs::read_to_string(&path).expect("Failed to read event log");
    assert_eq!(content.lines().count(), 2);
}

#[test]
fn test_tracing_sink_never_fails() {
    let mut sink = TracingSink;
    assert!(sink.emit(&LogEntry::new("", "")).is_ok());
    assert!(sink.flush().is_ok());
}
