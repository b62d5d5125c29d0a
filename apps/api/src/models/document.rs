use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a work or education entry.
/// Assigned once at creation and never reused, so it survives index shifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub website: String,
    pub linkedin: String,
    pub job_title: String,
    pub summary: String,
}

impl PersonalInfo {
    /// "First Last", skipping whichever half is empty.
    pub fn full_name(&self) -> String {
        [self.first_name.trim(), self.last_name.trim()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A position in the work history.
///
/// When `current` is set the end date is kept as typed but ignored by rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntry {
    pub id: EntryId,
    pub title: String,
    pub company: String,
    pub city: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

impl WorkEntry {
    pub fn empty() -> Self {
        Self {
            id: EntryId::new(),
            title: String::new(),
            company: String::new(),
            city: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            current: false,
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: EntryId,
    pub degree: String,
    pub institution: String,
    pub city: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

impl EducationEntry {
    pub fn empty() -> Self {
        Self {
            id: EntryId::new(),
            degree: String::new(),
            institution: String::new(),
            city: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
        }
    }
}

/// The complete CV. Insertion order of `work` and `education` is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub personal: PersonalInfo,
    pub work: Vec<WorkEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub languages: Vec<String>,
}

impl Document {
    pub fn len_of(&self, section: Section) -> usize {
        match section {
            Section::Work => self.work.len(),
            Section::Education => self.education.len(),
        }
    }

    pub fn work_index_of(&self, id: EntryId) -> Option<usize> {
        self.work.iter().position(|w| w.id == id)
    }
}

/// The two list sections of a Document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Work,
    Education,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Work => "work",
            Section::Education => "education",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "work" => Ok(Section::Work),
            "education" => Ok(Section::Education),
            other => Err(format!("unknown section '{other}'")),
        }
    }
}

/// Render-time layout variant. Never affects field values or ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateId {
    /// Europass-style two-column layout.
    #[default]
    #[serde(alias = "europass")]
    Classic,
    Modern,
    Minimal,
}

impl TemplateId {
    pub const ALL: [TemplateId; 3] = [TemplateId::Classic, TemplateId::Modern, TemplateId::Minimal];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Classic => "classic",
            TemplateId::Modern => "modern",
            TemplateId::Minimal => "minimal",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TemplateId::Classic => "Europass Classic",
            TemplateId::Modern => "Modern Professional",
            TemplateId::Minimal => "Elegant Minimalist",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" | "europass" => Ok(TemplateId::Classic),
            "modern" => Ok(TemplateId::Modern),
            "minimal" => Ok(TemplateId::Minimal),
            other => Err(format!("unknown template '{other}'")),
        }
    }
}
