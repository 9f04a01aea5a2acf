/// Closed keyword vocabulary, in output order. Matching is substring-based,
/// so an abbreviation that is contained in a longer term (REST/API, SQL)
/// matches alongside it.
const VOCABULARY: &[&str] = &[
    "React", "React.js", "React Native", "JavaScript", "TypeScript", "Node.js",
    "FastAPI", "Python", "PostgreSQL", "MongoDB", "C#", ".NET", "DevExpress",
    "HTML", "HTML5", "CSS", "CSS3", "Git", "GitHub", "Azure", "Docker",
    "REST", "API", "GraphQL", "SQL", "GCP", "AWS", "CI/CD",
];

/// Vocabulary terms occurring in `text` (case-insensitive containment),
/// deduplicated, always in vocabulary order regardless of where the terms
/// appear in the text.
pub fn tag(text: &str) -> Vec<String> {
    let haystack = text.to_lowercase();
    VOCABULARY
        .iter()
        .filter(|term| haystack.contains(&term.to_lowercase()))
        .map(|term| term.to_string())
        .collect()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_follows_vocabulary_not_text() {
        let tags = tag("Wrote Docker tooling in Python after a React rewrite");
        assert_eq!(tags, vec!["React", "Python", "Docker"]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(tag("deployed on AZURE"), vec!["Azure"]);
    }

    #[test]
    fn substring_terms_match_inside_longer_ones() {
        // "FastAPI" contains "API", "PostgreSQL" contains "SQL"; both the
        // long term and the contained abbreviation are reported.
        assert_eq!(tag("Built services with FastAPI"), vec!["FastAPI", "API"]);
        assert_eq!(tag("stored in postgresql"), vec!["PostgreSQL", "SQL"]);
    }

    #[test]
    fn full_vocabulary_round_trip() {
        let text = VOCABULARY.iter().rev().cloned().collect::<Vec<_>>().join(" then ");
        let tags = tag(&text);
        assert_eq!(tags, VOCABULARY.iter().map(|t| t.to_string()).collect::<Vec<_>>());
    }

    #[test]
    fn no_terms_no_tags() {
        assert!(tag("Organized the annual bake sale").is_empty());
    }
}
