use crate::app_error::AppError;
use crate::editor::{EditorBridge, SourceDocument};
use crate::response_parser::ExtractedArtifact;
use path_clean::PathClean;
use std::path::{Path, PathBuf};

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct OutputTarget {
    pub directory: PathBuf,
    pub file_name: String,
    pub extension: &'static str,
}

impl OutputTarget {
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name).clean()
    }
}

pub fn language_extension(language_tag: &str) -> &'static str {
    match language_tag {
        "typescript" => ".ts",
        "python" => ".py",
        _ => ".js",
    }
}

/// Drops the last dot-delimited segment of `original`. A name without a dot
/// is a single segment, so its base is empty.
pub fn base_name(original: &str) -> &str {
    original.rsplit_once('.').map_or("", |(base, _)| base)
}

pub fn test_file_name(original: &str, language_tag: &str) -> String {
    format!(
        "{}.test{}",
        base_name(original),
        language_extension(language_tag)
    )
}

/// The containing directory of a saved document, otherwise the first
/// workspace root.
pub fn resolve_output_dir(
    document: &SourceDocument,
    workspace_roots: &[PathBuf],
) -> Result<PathBuf, AppError> {
    if let Some(path) = &document.path {
        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        return Ok(parent.to_path_buf());
    }

    workspace_roots
        .first()
        .cloned()
        .ok_or(AppError::WorkspaceUnresolved)
}

pub fn plan_output(
    document: &SourceDocument,
    workspace_roots: &[PathBuf],
    artifact: &ExtractedArtifact,
) -> Result<OutputTarget, AppError> {
    let directory = resolve_output_dir(document, workspace_roots)?;
    Ok(OutputTarget {
        directory,
        file_name: test_file_name(&document.file_name(), &artifact.language_tag),
        extension: language_extension(&artifact.language_tag),
    })
}

/// Writes `code` as the whole content of the target, replacing any existing
/// file, then asks the host to display it.
pub fn materialize(
    editor: &dyn EditorBridge,
    target: &OutputTarget,
    code: &str,
) -> Result<PathBuf, AppError> {
    let path = target.path();
    editor.write_file(&path, code.as_bytes())?;
    editor.open_path(&path)?;
    Ok(path)
}
