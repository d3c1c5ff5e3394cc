use crate::response_parser::{
    extract_artifact, normalize_language, scan_fenced_regions, DEFAULT_LANGUAGE,
};

#[test]
fn test_single_python_block_with_prose() {
    let raw = "Here:\n```python\ndef f(): pass\n```\nDone.";
    let artifact = extract_artifact(raw);
    assert_eq!(artifact.code, "def f(): pass");
    assert_eq!(artifact.language_tag, "python");
    assert!(artifact.from_fences);
}

#[test]
fn test_multiple_blocks_joined_by_blank_line() {
    let raw = "\
Intro
```ts
import { add } from './math';
```
Some words in between.
```
test('adds', () => {
  expect(add(1, 2)).toBe(3);
});
```
Outro";
    let artifact = extract_artifact(raw);
    assert_eq!(
        artifact.code,
        "import { add } from './math';\n\ntest('adds', () => {\n  expect(add(1, 2)).toBe(3);\n});"
    );
    assert_eq!(artifact.language_tag, "typescript");
}

#[test]
fn test_no_fences_falls_back_to_verbatim_text() {
    let raw = "  I could not produce tests for this file.\n";
    let artifact = extract_artifact(raw);
    assert_eq!(artifact.code, raw);
    assert_eq!(artifact.language_tag, DEFAULT_LANGUAGE);
    assert!(!artifact.from_fences);
}

#[test]
fn test_hint_on_later_fence_is_ignored() {
    let raw = "```\nfirst\n```\n```python\nsecond\n```";
    let artifact = extract_artifact(raw);
    assert_eq!(artifact.code, "first\n\nsecond");
    assert_eq!(artifact.language_tag, "javascript");
}

#[test]
fn test_unterminated_fence_is_not_a_region() {
    let raw = "```js\nconst a = 1;\n```\ntrailing ```py\nnever closed";
    let artifact = extract_artifact(raw);
    assert_eq!(artifact.code, "const a = 1;");
    assert_eq!(artifact.language_tag, "javascript");
}

#[test]
fn test_only_unterminated_fence_falls_back() {
    let raw = "```python\nprint('hi')";
    let artifact = extract_artifact(raw);
    assert!(!artifact.from_fences);
    assert_eq!(artifact.code, raw);
}

#[test]
fn test_inner_text_is_trimmed() {
    let raw = "```rust\n\n\n   fn main() {}   \n\n```";
    let artifact = extract_artifact(raw);
    assert_eq!(artifact.code, "fn main() {}");
}

#[test]
fn test_hint_is_case_insensitive() {
    let artifact = extract_artifact("```TSX\nrender(<App />);\n```");
    assert_eq!(artifact.language_tag, "typescript");
}

#[test]
fn test_inline_fence_splits_hint_from_body() {
    let regions = scan_fenced_regions("```js const x = 1;```");
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].hint, Some("js"));
    assert_eq!(regions[0].body, "const x = 1;");
}

#[test]
fn test_empty_region_with_hint() {
    let regions = scan_fenced_regions("```js```");
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].hint, Some("js"));
    assert_eq!(regions[0].body, "");
}

#[test]
fn test_crlf_line_endings() {
    let artifact = extract_artifact("```py\r\nassert f() == 1\r\n```\r\n");
    assert_eq!(artifact.code, "assert f() == 1");
    assert_eq!(artifact.language_tag, "python");
}

#[test]
fn test_non_ascii_body_is_preserved() {
    let artifact = extract_artifact("```\nexpect(greet()).toBe('héllo → wörld');\n```");
    assert_eq!(artifact.code, "expect(greet()).toBe('héllo → wörld');");
}

#[test]
fn test_many_unclosed_backticks_scan_terminates() {
    let raw = "`".repeat(10_001);
    let regions = scan_fenced_regions(&raw);
    assert!(regions.len() <= raw.len() / 6 + 1);
}

#[test]
fn test_alias_table() {
    assert_eq!(normalize_language(Some("js")), "javascript");
    assert_eq!(normalize_language(Some("jsx")), "javascript");
    assert_eq!(normalize_language(Some("ts")), "typescript");
    assert_eq!(normalize_language(Some("tsx")), "typescript");
    assert_eq!(normalize_language(Some("py")), "python");
    assert_eq!(normalize_language(Some("cs")), "csharp");
}

#[test]
fn test_canonical_names_pass_through() {
    assert_eq!(normalize_language(Some("python")), "python");
    assert_eq!(normalize_language(Some("typescript")), "typescript");
    assert_eq!(normalize_language(Some("csharp")), "csharp");
}

#[test]
fn test_unknown_or_missing_hint_defaults() {
    assert_eq!(normalize_language(None), "javascript");
    assert_eq!(normalize_language(Some("rust")), "javascript");
    assert_eq!(normalize_language(Some("")), "javascript");
}
