use std::sync::LazyLock;

use regex::Regex;

static LIST_MARKUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\begin\{itemize\}|\\end\{itemize\}|\\item").unwrap());

/// Collapse a trailing free-text block into one paragraph: list markup and
/// bullet markers removed, whitespace trimmed. A block captured to the end
/// of its span still carries the entry's own closing brace; that is dropped
/// here too. Empty in, empty out — never an error.
pub fn paragraph(block: &str) -> String {
    let stripped = LIST_MARKUP_RE.replace_all(block.trim(), "");
    let stripped = stripped.trim();
    stripped.strip_suffix('}').unwrap_or(stripped).trim().to_string()
}

/// Drop the literal `"GPA: "` label when present; the value itself is kept
/// as-is (no numeric validation).
pub fn gpa(field: &str) -> String {
    let trimmed = field.trim();
    trimmed.strip_prefix("GPA: ").unwrap_or(trimmed).to_string()
}

/// Split a comma-separated skill list into trimmed tokens, unescaping the
/// one symbol the source escapes (`\#`, as in `C\#`).
pub fn skill_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().replace("\\#", "#"))
        .collect()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraph_strips_list_markup() {
        let block = "\\begin{itemize}\\item Dean's list\\item Thesis on parsers\\end{itemize}";
        assert_eq!(paragraph(block), "Dean's list Thesis on parsers");
    }

    #[test]
    fn paragraph_drops_trailing_entry_brace() {
        assert_eq!(paragraph("Focus on distributed systems.}\n"), "Focus on distributed systems.");
    }

    #[test]
    fn paragraph_of_empty_block_is_empty() {
        assert_eq!(paragraph("  \n "), "");
    }

    #[test]
    fn gpa_prefix_stripped_only_when_present() {
        assert_eq!(gpa("GPA: 3.8/4.0"), "3.8/4.0");
        assert_eq!(gpa(" 3.8 "), "3.8");
        assert_eq!(gpa(""), "");
    }

    #[test]
    fn skills_split_and_unescaped() {
        assert_eq!(
            skill_list("C\\#, .NET , TypeScript"),
            vec!["C#", ".NET", "TypeScript"]
        );
    }

    #[test]
    fn empty_skill_tokens_are_kept() {
        // Present-but-empty values are distinct from absent ones.
        assert_eq!(skill_list(""), vec![""]);
    }
}
