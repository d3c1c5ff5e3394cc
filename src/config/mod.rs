use crate::app_error::AppError;
use crate::cli::CliArgs;
use crate::logger::DEFAULT_LOG_ROOT;
use std::fs;
use std::path::{Path, PathBuf};


pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";
pub const WORKSPACE_KEY_FILE: &str = "agent-config/gemini-key.txt";

#[derive(Debug)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub api_base_url: String,
    /// `None` when the connectivity check is disabled.
    pub probe_url: Option<String>,
    pub open_output: bool,
    pub log_root: PathBuf,
}

impl Config {
    /// Resolves settings from the parsed arguments. `env` stands in for the
    /// process environment.
    pub fn load(
        args: &CliArgs,
        workspace_roots: &[PathBuf],
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AppError> {
        let api_key = resolve_api_key(args, workspace_roots, env)?;

        Ok(Self {
            api_key,
            model: args.model.clone(),
            api_base_url: args.api_base_url.clone(),
            probe_url: (!args.skip_probe).then(|| args.probe_url.clone()),
            open_output: !args.no_open,
            log_root: args
                .log_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_ROOT)),
        })
    }
}

fn resolve_api_key(
    args: &CliArgs,
    workspace_roots: &[PathBuf],
    env: impl Fn(&str) -> Option<String>,
) -> Result<String, AppError> {
    let raw = if let Some(key_file) = &args.api_key_file {
        read_file_to_string(key_file)?
    } else if let Some(value) = env(API_KEY_ENV_VAR) {
        value
    } else if let Some(root) = workspace_roots.first() {
        let key_path = root.join(WORKSPACE_KEY_FILE);
        if !key_path.exists() {
            return Err(AppError::Config(format!(
                "No API key found. Set {API_KEY_ENV_VAR}, pass --api-key-file, or create '{WORKSPACE_KEY_FILE}'."
            )));
        }
        check_gitignore_in_dir(root)?;
        read_file_to_string(&key_path)?
    } else {
        return Err(AppError::Config(format!(
            "No API key found. Set {API_KEY_ENV_VAR} or pass --api-key-file."
        )));
    };

    let api_key = raw.trim().to_string();
    if api_key.is_empty() {
        return Err(AppError::Config("The API key is empty.".to_string()));
    }
    Ok(api_key)
}

fn read_file_to_string(path: &Path) -> Result<String, AppError> {
    fs::read_to_string(path).map_err(|e| {
        AppError::Config(format!("Failed to read file '{}': {}", path.display(), e))
    })
}

/// A key file kept inside the workspace must be ignored by git.
fn check_gitignore_in_dir(base_dir: &Path) -> Result<(), AppError> {
    let gitignore_path = base_dir.join(".gitignore");
    let gitignore_content = match fs::read_to_string(&gitignore_path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::Config(
                "'.gitignore' file not found. It must exist and contain '/agent-config' to protect the API key.".to_string()
            ));
        }
        Err(e) => {
            return Err(AppError::Config(format!(
                "Failed to read file '{}': {}",
                gitignore_path.display(),
                e
            )));
        }
    };

    if !gitignore_content.lines().any(|line| {
        let trimmed = line.trim();
        trimmed == "/agent-config" || trimmed == "agent-config/"
    }) {
        return Err(AppError::Config(
            "Security check failed: Your .gitignore file must contain the line '/agent-config' to prevent accidental exposure of your API key and logs.".to_string()
        ));
    }

    Ok(())
}
