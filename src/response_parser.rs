//! Pulls fenced code regions out of free-text model output.

const FENCE: &str = "```";

pub const DEFAULT_LANGUAGE: &str = "javascript";

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ExtractedArtifact {
    pub code: String,
    pub language_tag: String,
    /// `false` when no fenced region was found and `code` is the whole response.
    pub from_fences: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct FencedRegion<'a> {
    pub hint: Option<&'a str>,
    pub body: &'a str,
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Walks `text` once, left to right, collecting non-overlapping fenced regions.
///
/// An opening fence may be followed directly by a word-character hint and then
/// any whitespace; the body runs to the next fence. A trailing opening fence
/// without a closing one is not a region.
pub(crate) fn scan_fenced_regions(text: &str) -> Vec<FencedRegion<'_>> {
    let mut regions = Vec::new();
    let mut cursor = 0;

    while let Some(open_rel) = text[cursor..].find(FENCE) {
        let after_open = cursor + open_rel + FENCE.len();
        let rest = &text[after_open..];

        let hint_len = rest.find(|c: char| !is_word_char(c)).unwrap_or(rest.len());
        let hint = (hint_len > 0).then(|| &rest[..hint_len]);

        let after_hint = &rest[hint_len..];
        let ws_len = after_hint
            .char_indices()
            .find(|&(_, c)| !c.is_whitespace())
            .map(|(i, _)| i)
            .unwrap_or(after_hint.len());
        let body_start = after_open + hint_len + ws_len;

        let Some(close_rel) = text[body_start..].find(FENCE) else {
            break;
        };
        let body_end = body_start + close_rel;

        regions.push(FencedRegion {
            hint,
            body: &text[body_start..body_end],
        });
        cursor = body_end + FENCE.len();
    }

    regions
}

/// Maps a fence hint onto a canonical language id. Unknown or missing hints
/// resolve to [`DEFAULT_LANGUAGE`].
pub fn normalize_language(hint: Option<&str>) -> &'static str {
    let Some(hint) = hint else {
        return DEFAULT_LANGUAGE;
    };
    match hint.to_ascii_lowercase().as_str() {
        "js" | "jsx" | "javascript" => "javascript",
        "ts" | "tsx" | "typescript" => "typescript",
        "py" | "python" => "python",
        "cs" | "csharp" => "csharp",
        _ => DEFAULT_LANGUAGE,
    }
}

pub fn extract_artifact(raw_text: &str) -> ExtractedArtifact {
    let regions = scan_fenced_regions(raw_text);

    let Some(first) = regions.first() else {
        return ExtractedArtifact {
            code: raw_text.to_string(),
            language_tag: DEFAULT_LANGUAGE.to_string(),
            from_fences: false,
        };
    };

    let language_tag = normalize_language(first.hint).to_string();
    let code = regions
        .iter()
        .map(|region| region.body.trim())
        .collect::<Vec<_>>()
        .join("\n\n");

    ExtractedArtifact {
        code,
        language_tag,
        from_fences: true,
    }
}
