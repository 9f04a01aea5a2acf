use crate::model::{Certification, LanguageProficiency, Project, Service, SkillCategory};
use crate::parser::{entries, normalize, sections, tech};

/// Skill categories in source order. A repeated category title replaces the
/// earlier list in place: last write wins, lists are never merged.
pub fn skills(text: &str) -> Vec<SkillCategory> {
    let Some(span) = sections::extract_any(text, &["Skills", "Technical Skills"]) else {
        return Vec::new();
    };

    let mut categories: Vec<SkillCategory> = Vec::new();
    for (title, value) in entries::tokenize_items(span) {
        let skills = normalize::skill_list(&value);
        match categories.iter_mut().find(|c| c.title == title) {
            Some(existing) => existing.skills = skills,
            None => categories.push(SkillCategory { title, skills }),
        }
    }
    categories
}

pub fn projects(text: &str) -> Vec<Project> {
    let Some(span) =
        sections::extract_any(text, &["Current Projects", "Projects", "Selected Projects"])
    else {
        return Vec::new();
    };

    entries::tokenize_items(span)
        .into_iter()
        .map(|(title, description)| {
            let technologies = tech::tag(&description);
            Project {
                title,
                description,
                technologies,
            }
        })
        .collect()
}

pub fn certifications(text: &str) -> Vec<Certification> {
    let Some(span) = sections::extract_any(text, &["Certifications", "Google Cloud Skill Badges"])
    else {
        return Vec::new();
    };

    entries::tokenize_items(span)
        .into_iter()
        .map(|(provider, name)| Certification { provider, name })
        .collect()
}

pub fn languages(text: &str) -> Vec<LanguageProficiency> {
    let Some(span) = sections::extract(text, "Languages") else {
        return Vec::new();
    };

    entries::tokenize_items_with_comment(span)
        .into_iter()
        .map(|(language, level)| LanguageProficiency { language, level })
        .collect()
}

pub fn services(text: &str) -> Vec<Service> {
    let Some(span) = sections::extract(text, "Services") else {
        return Vec::new();
    };

    entries::tokenize_items(span)
        .into_iter()
        .map(|(title, description)| Service { title, description })
        .collect()
}

/// Value of the first item under "What I Offer". Present-but-empty is kept
/// distinct from an absent section; classification only treats non-empty
/// values as a freelance signal.
pub fn offer_summary(text: &str) -> Option<String> {
    let span = sections::extract(text, "What I Offer")?;
    entries::tokenize_items(span)
        .into_iter()
        .next()
        .map(|(_, value)| value)
}

// ── Tests ──
