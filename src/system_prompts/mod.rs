pub const UNIT_TEST_INSTRUCTIONS: &str = include_str!("unit_test_instructions.txt");
