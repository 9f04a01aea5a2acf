use crate::model::ExperienceEntry;
use crate::parser::{entries, sections, tech};

const FIELDS: usize = 5; // period, position, company, location, unused style arg

pub fn extract(text: &str) -> Vec<ExperienceEntry> {
    let Some(span) = sections::extract(text, "Experience") else {
        return Vec::new();
    };

    entries::tokenize_entries(span, FIELDS)
        .into_iter()
        .filter_map(|entry| {
            let [period, position, company, location, _style]: [String; FIELDS] =
                entry.fields.try_into().ok()?;
            let description = entries::bullets(&entry.body);
            let technologies = tech::tag(&description.join(" "));
            Some(ExperienceEntry {
                period,
                position,
                company,
                location,
                description,
                technologies,
            })
        })
        .collect()
}

// ── Tests ──
