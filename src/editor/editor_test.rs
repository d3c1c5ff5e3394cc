use super::*;
use std::io::Cursor;
use tempfile::tempdir;

#[test]
fn test_saved_document_file_name() {
    let doc = SourceDocument::saved("/work/src/Foo.Bar.ts", "export {}");
    assert!(!doc.is_untitled());
    assert_eq!(doc.file_name(), "Foo.Bar.ts");
}

#[test]
fn test_untitled_document_uses_placeholder() {
    let doc = SourceDocument::untitled("print(1)");
    assert!(doc.is_untitled());
    assert_eq!(doc.file_name(), UNTITLED_FILE_NAME);
}

#[test]
fn test_load_document_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("math.ts");
    fs::write(&path, "export const add = (a, b) => a + b;").unwrap();

    let doc = load_document(Some(&path), Cursor::new(""), true)
        .unwrap()
        .unwrap();
    assert_eq!(doc.path.as_deref(), Some(path.as_path()));
    assert_eq!(doc.text, "export const add = (a, b) => a + b;");
}

#[test]
fn test_load_document_missing_file_is_config_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.ts");
    let result = load_document(Some(&path), Cursor::new(""), true);
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[test]
fn test_load_document_from_piped_stdin() {
    let doc = load_document(None, Cursor::new("def f(): pass\n"), false)
        .unwrap()
        .unwrap();
    assert!(doc.is_untitled());
    assert_eq!(doc.text, "def f(): pass\n");
}

#[test]
fn test_load_document_interactive_stdin_means_no_document() {
    let doc = load_document(None, Cursor::new("ignored"), true).unwrap();
    assert!(doc.is_none());
}

#[test]
fn test_viewer_from_env_prefers_visual() {
    let viewer = TerminalEditor::viewer_from_env(|key| match key {
        "VISUAL" => Some("code --wait".to_string()),
        "EDITOR" => Some("nano".to_string()),
        _ => None,
    });
    assert_eq!(viewer, "code --wait");
}

#[test]
fn test_viewer_from_env_skips_blank_values() {
    let viewer = TerminalEditor::viewer_from_env(|key| match key {
        "VISUAL" => Some("  ".to_string()),
        "EDITOR" => Some("nano".to_string()),
        _ => None,
    });
    assert_eq!(viewer, "nano");

    let fallback = TerminalEditor::viewer_from_env(|_| None);
    assert_eq!(fallback, "vi");
}

#[test]
fn test_write_file_creates_parents_and_overwrites() {
    let dir = tempdir().unwrap();
    let editor = TerminalEditor::new(None, vec![], None);
    let path = dir.path().join("nested").join("a.test.js");

    editor.write_file(&path, b"first").unwrap();
    editor.write_file(&path, b"second").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "second");
}

#[test]
fn test_write_file_failure_is_output_error() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "a file, not a directory").unwrap();

    let editor = TerminalEditor::new(None, vec![], None);
    let result = editor.write_file(&blocker.join("x.test.js"), b"code");
    assert!(matches!(result, Err(AppError::OutputWrite(_))));
}

#[test]
fn test_open_path_without_viewer_only_reports() {
    let editor = TerminalEditor::new(None, vec![], None);
    assert!(editor.open_path(Path::new("does-not-matter.test.js")).is_ok());
}

#[cfg(unix)]
#[test]
fn test_open_path_runs_viewer() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a.test.js");
    fs::write(&path, "x").unwrap();

    let ok_editor = TerminalEditor::new(None, vec![], Some("true".to_string()));
    assert!(ok_editor.open_path(&path).is_ok());

    let failing_editor = TerminalEditor::new(None, vec![], Some("false".to_string()));
    let result = failing_editor.open_path(&path);
    assert!(matches!(result, Err(AppError::OutputWrite(_))));
}

#[test]
fn test_open_path_missing_viewer_binary() {
    let editor = TerminalEditor::new(
        None,
        vec![],
        Some("definitely-not-an-installed-editor-binary".to_string()),
    );
    let result = editor.open_path(Path::new("x.test.js"));
    assert!(matches!(result, Err(AppError::OutputWrite(_))));
}
