use std::sync::LazyLock;

use regex::Regex;

static BOUNDARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\section\{|\\end\{document\}").unwrap());

/// Span of the named `\section{...}` block: everything strictly between the
/// heading and the next heading, `\end{document}`, or end of input.
///
/// The name is matched case-insensitively and always as a literal string —
/// it is escaped before being compiled into the heading pattern, so a name
/// containing regex metacharacters cannot alter boundary detection. Only the
/// first occurrence of a heading is honored.
pub fn extract<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    let heading = Regex::new(&format!(r"(?i)\\section\{{{}\}}", regex::escape(name)))
        .expect("escaped section name always compiles");
    let m = heading.find(text)?;
    let rest = &text[m.end()..];
    let end = BOUNDARY_RE.find(rest).map(|b| b.start()).unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Try each literal name in order; the first heading that resolves wins.
pub fn extract_any<'a>(text: &'a str, names: &[&str]) -> Option<&'a str> {
    names.iter().find_map(|name| extract(text, name))
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_runs_to_next_heading() {
        let text = "\\section{Experience}\nentry text\n\\section{Education}\nother";
        let span = extract(text, "Experience").unwrap();
        assert_eq!(span.trim(), "entry text");
    }

    #[test]
    fn span_runs_to_end_of_document_marker() {
        let text = "\\section{Languages}\nitems\n\\end{document}\ntrailing";
        let span = extract(text, "Languages").unwrap();
        assert_eq!(span.trim(), "items");
    }

    #[test]
    fn span_runs_to_end_of_input() {
        let text = "preamble\n\\section{Skills}\nlast section";
        assert_eq!(extract(text, "Skills").unwrap().trim(), "last section");
    }

    #[test]
    fn heading_match_is_case_insensitive() {
        let text = "\\section{EXPERIENCE}\nbody";
        assert_eq!(extract(text, "experience").unwrap().trim(), "body");
    }

    #[test]
    fn missing_heading_is_none() {
        assert!(extract("\\section{Skills}\nbody", "Projects").is_none());
    }

    #[test]
    fn name_is_literal_not_a_pattern() {
        // A metacharacter-laden name must not match everything.
        let text = "\\section{Skills}\nbody";
        assert!(extract(text, ".*").is_none());
        let text2 = "\\section{C++ (advanced)}\nbody";
        assert_eq!(extract(text2, "C++ (advanced)").unwrap().trim(), "body");
    }

    #[test]
    fn first_duplicate_heading_wins() {
        let text = "\\section{Projects}\nfirst\n\\section{Projects}\nsecond";
        assert_eq!(extract(text, "Projects").unwrap().trim(), "first");
    }

    #[test]
    fn alias_fallback_order() {
        let text = "\\section{Technical Skills}\nalias body";
        let span = extract_any(text, &["Skills", "Technical Skills"]).unwrap();
        assert_eq!(span.trim(), "alias body");
        // Primary name wins when both are present.
        let both = "\\section{Current Projects}\na\n\\section{Projects}\nb";
        let span = extract_any(both, &["Current Projects", "Projects"]).unwrap();
        assert_eq!(span.trim(), "a");
    }
}
