//! The `single-click-create-unit-test` command: read the active document, ask
//! Gemini for tests, and write them beside the source.


use crate::app_error::AppError;
use crate::connectivity::ConnectivityProbe;
use crate::editor::EditorBridge;
use crate::extension::Command;
use crate::file_updater::{materialize, plan_output};
use crate::llm::api::LlmApi;
use crate::llm::{self, InferenceReply, NO_VALID_RESPONSE};
use crate::logger::Logger;
use crate::prompt_builder::build_unit_test_prompt;
use crate::response_parser::extract_artifact;
use serde_json::json;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

pub const COMMAND_ID: &str = "single-click-create-unit-test";

const STAGE_LOG: &str = "stages.txt";
const INFERENCE_LOG_PREFIX: &str = "1-generate";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    ReadingSource,
    ProbingConnectivity,
    BuildingPrompt,
    CallingInference,
    ExtractingArtifact,
    WritingOutput,
    Done,
    Failed,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Idle => "Idle",
            Stage::ReadingSource => "ReadingSource",
            Stage::ProbingConnectivity => "ProbingConnectivity",
            Stage::BuildingPrompt => "BuildingPrompt",
            Stage::CallingInference => "CallingInference",
            Stage::ExtractingArtifact => "ExtractingArtifact",
            Stage::WritingOutput => "WritingOutput",
            Stage::Done => "Done",
            Stage::Failed => "Failed",
        }
    }
}

pub struct GenerateUnitTests<'a> {
    editor: &'a dyn EditorBridge,
    llm: &'a dyn LlmApi,
    probe: Option<&'a dyn ConnectivityProbe>,
    logger: &'a Logger,
}

impl<'a> GenerateUnitTests<'a> {
    pub fn new(
        editor: &'a dyn EditorBridge,
        llm: &'a dyn LlmApi,
        probe: Option<&'a dyn ConnectivityProbe>,
        logger: &'a Logger,
    ) -> Self {
        Self {
            editor,
            llm,
            probe,
            logger,
        }
    }

    /// Runs every stage in order. Any failure is shown to the user, logged,
    /// and returned; nothing is retried or rolled back.
    pub async fn run(&self) -> Result<PathBuf, AppError> {
        let result = self.run_stages().await;

        match &result {
            Ok(path) => {
                self.transition(Stage::Done)?;
                tracing::info!(path = %path.display(), "unit test file created");
            }
            Err(e) => {
                let _ = self.transition(Stage::Failed);
                self.editor.show_error(&e.to_string());
                tracing::error!(error = %e, "unit test generation failed");
                let _ = self.logger.log_text("final_error.txt", &e.to_string());
            }
        }

        result
    }

    fn transition(&self, stage: Stage) -> Result<(), AppError> {
        tracing::debug!(stage = stage.as_str(), "entering stage");
        self.logger.append_line(STAGE_LOG, stage.as_str())
    }

    async fn run_stages(&self) -> Result<PathBuf, AppError> {
        self.transition(Stage::Idle)?;
        self.editor.show_info("Starting unit test generation...");

        self.transition(Stage::ReadingSource)?;
        let document = self
            .editor
            .active_document()
            .ok_or(AppError::EditorUnavailable)?;
        let file_name = document.file_name();
        self.editor
            .show_info(&format!("Reading content from: {file_name}"));

        if let Some(probe) = self.probe {
            self.transition(Stage::ProbingConnectivity)?;
            let probe_response = probe.check().await?;
            self.logger.log_json(
                "0-probe.json",
                &json!({ "url": probe.target(), "response": probe_response }),
            )?;
            self.editor
                .show_info("Connectivity check successful! Proceeding to Gemini...");
        }

        self.transition(Stage::BuildingPrompt)?;
        let prompt = build_unit_test_prompt(&file_name, &document.text);

        self.transition(Stage::CallingInference)?;
        let reply = llm::query(self.llm, &prompt, self.logger, INFERENCE_LOG_PREFIX).await?;
        let raw_text = match reply {
            InferenceReply::Text(text) => text,
            InferenceReply::NoValidResponse => {
                return Err(AppError::InferenceShape(NO_VALID_RESPONSE.to_string()));
            }
        };
        self.editor
            .show_info("Gemini response received. Extracting code...");

        self.transition(Stage::ExtractingArtifact)?;
        let artifact = extract_artifact(&raw_text);
        if artifact.from_fences {
            self.editor
                .show_info("Code block(s) extracted from Gemini response.");
        } else {
            self.editor.show_warning(
                "No specific code block found in Gemini response. Using full response content.",
            );
        }

        self.transition(Stage::WritingOutput)?;
        let target = plan_output(&document, &self.editor.workspace_roots(), &artifact)?;
        let path = materialize(self.editor, &target, &artifact.code)?;
        self.editor
            .show_info(&format!("Created unit test file: {}", target.file_name));

        Ok(path)
    }
}

impl Command for GenerateUnitTests<'_> {
    fn execute<'s>(&'s self) -> Pin<Box<dyn Future<Output = Result<PathBuf, AppError>> + 's>> {
        Box::pin(self.run())
    }
}
