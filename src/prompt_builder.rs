use crate::system_prompts::UNIT_TEST_INSTRUCTIONS;

/// Builds the request for a test suite covering `file_text`. The file text is
/// embedded verbatim, with no size limit.
pub fn build_unit_test_prompt(file_name: &str, file_text: &str) -> String {
    format!(
        "Generate unit tests for the following file named '{}':\n\n```\n{}\n```\n\n{}",
        file_name,
        file_text,
        UNIT_TEST_INSTRUCTIONS.trim_end()
    )
}
