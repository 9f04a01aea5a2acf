use crate::model::EducationEntry;
use crate::parser::{entries, normalize, sections};

const FIELDS: usize = 5; // period, degree, institution, location, gpa

pub fn extract(text: &str) -> Vec<EducationEntry> {
    let Some(span) = sections::extract(text, "Education") else {
        return Vec::new();
    };

    entries::tokenize_entries(span, FIELDS)
        .into_iter()
        .filter_map(|entry| {
            let [period, degree, institution, location, gpa_field]: [String; FIELDS] =
                entry.fields.try_into().ok()?;
            Some(EducationEntry {
                period,
                degree,
                institution,
                location,
                gpa: normalize::gpa(&gpa_field),
                description: normalize::paragraph(&entry.body),
            })
        })
        .collect()
}

// ── Tests ──
