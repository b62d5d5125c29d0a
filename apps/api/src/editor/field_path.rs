//! Closed addressing for every editable scalar in a Document.
//!
//! A `FieldPath` can only name fields that exist, so the only runtime checks
//! left are list bounds and the text/flag kind of the value.

use serde::{Deserialize, Serialize};

use crate::models::document::{EducationEntry, PersonalInfo, Section, WorkEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonalField {
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    City,
    PostalCode,
    Country,
    Website,
    Linkedin,
    JobTitle,
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WorkField {
    Title,
    Company,
    City,
    StartDate,
    EndDate,
    Current,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EducationField {
    Degree,
    Institution,
    City,
    StartDate,
    EndDate,
    Description,
}

/// Where an update lands.
///
/// JSON shape: `{"personal": "jobTitle"}`,
/// `{"work": {"index": 0, "field": "current"}}` or
/// `{"education": {"index": 1, "field": "degree"}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldPath {
    Personal(PersonalField),
    Work { index: usize, field: WorkField },
    Education { index: usize, field: EducationField },
}

impl FieldPath {
    /// The list section and index this path points into, if any.
    pub fn entry(&self) -> Option<(Section, usize)> {
        match *self {
            FieldPath::Personal(_) => None,
            FieldPath::Work { index, .. } => Some((Section::Work, index)),
            FieldPath::Education { index, .. } => Some((Section::Education, index)),
        }
    }

    pub fn expects_flag(&self) -> bool {
        matches!(
            self,
            FieldPath::Work {
                field: WorkField::Current,
                ..
            }
        )
    }
}

/// A scalar value for `update_field`. Deserializes from a bare JSON string or bool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Flag(_) => "flag",
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

pub(crate) fn personal_slot(info: &mut PersonalInfo, field: PersonalField) -> &mut String {
    match field {
        PersonalField::FirstName => &mut info.first_name,
        PersonalField::LastName => &mut info.last_name,
        PersonalField::Email => &mut info.email,
        PersonalField::Phone => &mut info.phone,
        PersonalField::Address => &mut info.address,
        PersonalField::City => &mut info.city,
        PersonalField::PostalCode => &mut info.postal_code,
        PersonalField::Country => &mut info.country,
        PersonalField::Website => &mut info.website,
        PersonalField::Linkedin => &mut info.linkedin,
        PersonalField::JobTitle => &mut info.job_title,
        PersonalField::Summary => &mut info.summary,
    }
}

/// Text slot of a work field. `Current` is the flag field and has no text slot.
pub(crate) fn work_text_slot(entry: &mut WorkEntry, field: WorkField) -> Option<&mut String> {
    match field {
        WorkField::Title => Some(&mut entry.title),
        WorkField::Company => Some(&mut entry.company),
        WorkField::City => Some(&mut entry.city),
        WorkField::StartDate => Some(&mut entry.start_date),
        WorkField::EndDate => Some(&mut entry.end_date),
        WorkField::Description => Some(&mut entry.description),
        WorkField::Current => None,
    }
}

pub(crate) fn education_slot(entry: &mut EducationEntry, field: EducationField) -> &mut String {
    match field {
        EducationField::Degree => &mut entry.degree,
        EducationField::Institution => &mut entry.institution,
        EducationField::City => &mut entry.city,
        EducationField::StartDate => &mut entry.start_date,
        EducationField::EndDate => &mut entry.end_date,
        EducationField::Description => &mut entry.description,
    }
}
