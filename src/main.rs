use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use unit_test_gen::app_error::AppError;
use unit_test_gen::cli::CliArgs;
use unit_test_gen::config::Config;
use unit_test_gen::connectivity::{ConnectivityProbe, HttpProbe};
use unit_test_gen::editor::{load_document_from_process, TerminalEditor};
use unit_test_gen::extension::{self, CommandRegistry};
use unit_test_gen::llm::api::GeminiClient;
use unit_test_gen::logger::Logger;
use unit_test_gen::unit_test_command::{GenerateUnitTests, COMMAND_ID};

#[tokio::main]
async fn main() -> ExitCode {
    let cli_args = CliArgs::parse();
    init_tracing(cli_args.verbose);

    match run(cli_args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("An error occurred: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn workspace_roots(cli_args: &CliArgs) -> Result<Vec<PathBuf>, AppError> {
    if !cli_args.workspaces.is_empty() {
        return Ok(cli_args.workspaces.clone());
    }
    Ok(vec![std::env::current_dir()?])
}

/// Setup failures are returned; failures inside the command have already been
/// shown to the user and only decide the exit code.
async fn run(cli_args: CliArgs) -> Result<ExitCode, AppError> {
    let workspace_roots = workspace_roots(&cli_args)?;
    let document = load_document_from_process(cli_args.file.as_deref())?;
    let config = Config::load(&cli_args, &workspace_roots, |name| std::env::var(name).ok())?;
    let logger = Logger::new_in(&config.log_root, "unit-test-gen")?;
    tracing::debug!(log_dir = %logger.log_dir().display(), "logging run artifacts");

    let viewer = config
        .open_output
        .then(|| TerminalEditor::viewer_from_env(|name| std::env::var(name).ok()));
    let editor = TerminalEditor::new(document, workspace_roots, viewer);
    let llm = GeminiClient::new(config.api_key.clone(), &config.model, &config.api_base_url);
    let probe = config.probe_url.as_deref().map(HttpProbe::new);
    let probe_ref = probe.as_ref().map(|p| p as &dyn ConnectivityProbe);

    let mut registry = CommandRegistry::new();
    let handle = extension::activate(
        &mut registry,
        GenerateUnitTests::new(&editor, &llm, probe_ref, &logger),
    )?;
    let result = registry.execute(COMMAND_ID).await;
    handle.deactivate(&mut registry);

    Ok(match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => ExitCode::from(e.exit_code()),
    })
}
