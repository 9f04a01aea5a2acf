pub mod education;
pub mod experience;
pub mod items;
pub mod personal;

use crate::model::{ProfileDocument, Variant};

/// Compose every extracted section into one immutable document and attach
/// the derived fields. `origin` is an optional file-name hint used only for
/// the freelance/fulltime heuristic; no reference to the raw source text is
/// retained.
pub fn assemble(text: &str, origin: Option<&str>) -> ProfileDocument {
    let personal = personal::extract(text);
    let experience = experience::extract(text);
    let education = education::extract(text);
    let skills = items::skills(text);
    let projects = items::projects(text);
    let certifications = items::certifications(text);
    let languages = items::languages(text);
    let services = items::services(text);
    let offer_summary = items::offer_summary(text);

    let variant = classify(services.is_empty(), offer_summary.as_deref(), origin);
    let github_url = personal
        .github
        .as_ref()
        .map(|handle| format!("https://github.com/{}", handle));
    let linkedin_url = personal
        .linkedin
        .as_ref()
        .map(|handle| format!("https://linkedin.com/in/{}", handle));

    ProfileDocument {
        personal,
        experience,
        education,
        skills,
        projects,
        certifications,
        languages,
        services,
        offer_summary,
        variant,
        github_url,
        linkedin_url,
        source: origin.map(str::to_string),
    }
}

/// Freelance when any service was listed, a non-empty offer summary exists,
/// or the origin name contains "freelance" (case-insensitive). Otherwise
/// fulltime.
fn classify(services_empty: bool, offer_summary: Option<&str>, origin: Option<&str>) -> Variant {
    let offered = offer_summary.is_some_and(|s| !s.is_empty());
    let named = origin.is_some_and(|n| n.to_lowercase().contains("freelance"));
    if !services_empty || offered || named {
        Variant::Freelance
    } else {
        Variant::Fulltime
    }
}

// ── Tests ──
