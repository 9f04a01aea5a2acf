use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

const ENTRY_MARKER: &str = "\\cventry";
const SECTION_MARKER: &str = "\\section";

static ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\cvitem\{([^}]*)\}\{([^}]*)\}").unwrap());
static ITEM_WITH_COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\cvitemwithcomment\{([^}]*)\}\{([^}]*)\}\{[^}]*\}").unwrap());
static BULLET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\item\s+([^\n\\]+)").unwrap());

/// One `\cventry` record: the fixed scalar fields, then the trailing
/// free-text block.
#[derive(Debug, Clone)]
pub struct MultiFieldEntry {
    pub fields: Vec<String>,
    pub body: String,
}

/// Tokenize every `\cventry` in a section span into `field_count` scalar
/// fields plus a trailing block.
///
/// Scalar fields are read by brace counting, so a field may contain nested
/// braces. The trailing block is not brace-balanced: it runs from its opening
/// brace to the next `\cventry`, the next `\section`, or the end of the span,
/// whichever comes first. An entry whose own text happens to contain one of
/// those markers is truncated there; callers accept that in exchange for
/// never scanning past a real boundary on malformed input.
///
/// An entry with fewer scalar fields than `field_count` is skipped; entries
/// before and after it are unaffected.
pub fn tokenize_entries(span: &str, field_count: usize) -> Vec<MultiFieldEntry> {
    let mut entries = Vec::new();
    let mut search = 0;

    while let Some(off) = span[search..].find(ENTRY_MARKER) {
        let start = search + off;
        let mut pos = start + ENTRY_MARKER.len();

        let mut fields = Vec::with_capacity(field_count);
        for _ in 0..field_count {
            match read_group(span, pos) {
                Some((field, next)) => {
                    fields.push(field.trim().to_string());
                    pos = next;
                }
                None => break,
            }
        }
        if fields.len() < field_count {
            debug!(
                offset = start,
                got = fields.len(),
                want = field_count,
                "skipping entry with missing fields"
            );
            search = start + ENTRY_MARKER.len();
            continue;
        }

        // Trailing block: consume the opening brace, then capture up to the
        // next entry or heading marker.
        pos = skip_whitespace(span, pos);
        if !span[pos..].starts_with('{') {
            debug!(offset = start, "skipping entry without trailing block");
            search = start + ENTRY_MARKER.len();
            continue;
        }
        pos += 1;
        let rest = &span[pos..];
        let end = [ENTRY_MARKER, SECTION_MARKER]
            .iter()
            .filter_map(|m| rest.find(m))
            .min()
            .unwrap_or(rest.len());

        entries.push(MultiFieldEntry {
            fields,
            body: rest[..end].to_string(),
        });
        search = pos + end;
    }

    entries
}

/// Every `\cvitem{key}{value}` in the span, in source order, both fields
/// trimmed.
pub fn tokenize_items(span: &str) -> Vec<(String, String)> {
    ITEM_RE
        .captures_iter(span)
        .map(|c| (c[1].trim().to_string(), c[2].trim().to_string()))
        .collect()
}

/// Every `\cvitemwithcomment{key}{value}{comment}`; the comment field is
/// accepted but not modeled.
pub fn tokenize_items_with_comment(span: &str) -> Vec<(String, String)> {
    ITEM_WITH_COMMENT_RE
        .captures_iter(span)
        .map(|c| (c[1].trim().to_string(), c[2].trim().to_string()))
        .collect()
}

/// Bullet texts from a trailing block: each `\item` up to the end of its
/// line or the next command, trimmed.
pub fn bullets(body: &str) -> Vec<String> {
    BULLET_RE
        .captures_iter(body)
        .map(|c| c[1].trim().to_string())
        .collect()
}

/// Read one brace-delimited group starting at or after `pos` (leading
/// whitespace allowed). Returns the group's inner text and the index just
/// past the closing brace, or None when no balanced group is present.
fn read_group(span: &str, pos: usize) -> Option<(String, usize)> {
    let open = skip_whitespace(span, pos);
    if !span[open..].starts_with('{') {
        return None;
    }
    let mut depth = 1usize;
    for (i, b) in span[open + 1..].bytes().enumerate() {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    let inner = &span[open + 1..open + 1 + i];
                    return Some((inner.to_string(), open + i + 2));
                }
            }
            _ => {}
        }
    }
    None
}

fn skip_whitespace(span: &str, mut pos: usize) -> usize {
    while pos < span.len() && span.as_bytes()[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

// ── Tests ──
