use serde::Serialize;

/// Fully assembled result of parsing one CV source. Built once per parse,
/// never mutated afterward; re-parsing always produces a fresh document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDocument {
    pub personal: PersonalInfo,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub languages: Vec<LanguageProficiency>,
    pub services: Vec<Service>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_summary: Option<String>,
    pub variant: Variant,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl ProfileDocument {
    /// The education record surfaced to consumers: first entry only.
    /// Remaining entries stay in `education` but are not "the" record.
    pub fn primary_education(&self) -> Option<&EducationEntry> {
        self.education.first()
    }

    pub fn skills_for(&self, title: &str) -> Option<&[String]> {
        self.skills
            .iter()
            .find(|c| c.title == title)
            .map(|c| c.skills.as_slice())
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub period: String,
    pub position: String,
    pub company: String,
    pub location: String,
    pub description: Vec<String>,
    /// Derived: vocabulary terms found in this entry's own description.
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub period: String,
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub gpa: String,
    pub description: String,
}

/// One named skill group. Categories keep source order; a repeated title
/// replaces the earlier list in place (last-write-wins, never merged).
#[derive(Debug, Clone, Serialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub provider: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageProficiency {
    pub language: String,
    pub level: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Freelance,
    Fulltime,
}
