use std::sync::LazyLock;

use regex::Regex;

use crate::model::PersonalInfo;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\name\{([^}]*)\}\{([^}]*)\}").unwrap());
static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\title\{([^}]*)\}").unwrap());
static ADDRESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\address\{([^}]*)\}\{([^}]*)\}").unwrap());
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\phone\[mobile\]\{([^}]*)\}").unwrap());
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\email\{([^}]*)\}").unwrap());
static LINKEDIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\social\[linkedin\]\{([^}]*)\}").unwrap());
static GITHUB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\social\[github\]\{([^}]*)\}").unwrap());

/// Personal commands live in the preamble, not under a heading, so they are
/// matched against the whole document. Every field is independently
/// optional: a missing command leaves its field absent, never defaulted.
pub fn extract(text: &str) -> PersonalInfo {
    let mut info = PersonalInfo::default();

    if let Some(caps) = NAME_RE.captures(text) {
        let first = caps[1].trim().to_string();
        let last = caps[2].trim().to_string();
        info.full_name = Some(format!("{} {}", first, last));
        info.first_name = Some(first);
        info.last_name = Some(last);
    }

    info.title = capture(&TITLE_RE, text);
    // Only the first address argument is the location; the rest is postal
    // detail the model does not carry.
    info.location = capture(&ADDRESS_RE, text);
    info.phone = capture(&PHONE_RE, text);
    info.email = capture(&EMAIL_RE, text);
    info.linkedin = capture(&LINKEDIN_RE, text);
    info.github = capture(&GITHUB_RE, text);

    info
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text).map(|c| c[1].trim().to_string())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_fields_present() {
        let text = "\\name{Jane}{Doe}\n\\title{Software Engineer}\n\\address{Berlin, Germany}{10115}\n\\phone[mobile]{+49 151 0000000}\n\\email{jane@example.com}\n\\social[linkedin]{janedoe}\n\\social[github]{janedoe-dev}";
        let p = extract(text);
        assert_eq!(p.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(p.first_name.as_deref(), Some("Jane"));
        assert_eq!(p.last_name.as_deref(), Some("Doe"));
        assert_eq!(p.title.as_deref(), Some("Software Engineer"));
        assert_eq!(p.location.as_deref(), Some("Berlin, Germany"));
        assert_eq!(p.phone.as_deref(), Some("+49 151 0000000"));
        assert_eq!(p.email.as_deref(), Some("jane@example.com"));
        assert_eq!(p.linkedin.as_deref(), Some("janedoe"));
        assert_eq!(p.github.as_deref(), Some("janedoe-dev"));
    }

    #[test]
    fn missing_commands_leave_fields_absent() {
        let p = extract("\\title{Consultant}");
        assert_eq!(p.title.as_deref(), Some("Consultant"));
        assert!(p.full_name.is_none());
        assert!(p.email.is_none());
        assert!(p.github.is_none());
    }

    #[test]
    fn name_parts_are_trimmed_before_joining() {
        let p = extract("\\name{ Jane }{ Doe }");
        assert_eq!(p.full_name.as_deref(), Some("Jane Doe"));
    }
}
