//! unit-test-gen: generate a sibling unit test file for a source file with Gemini.

pub mod app_error;
pub mod cli;
pub mod config;
pub mod connectivity;
pub mod editor;
pub mod extension;
pub mod file_updater;
pub mod llm;
pub mod logger;
pub mod prompt_builder;
pub mod response_parser;
pub mod unit_test_command;

mod system_prompts;

#[cfg(test)]
mod response_parser_test;
