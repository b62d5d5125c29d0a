//! EditController: the only writer of the Document.
//!
//! Every successful mutation publishes a fresh snapshot on a watch channel;
//! render consumers subscribe to it. Failed operations leave both the
//! Document and the channel untouched.

use thiserror::Error;
use tokio::sync::watch;
use tracing::debug;

use crate::editor::field_path::{
    education_slot, personal_slot, work_text_slot, FieldPath, FieldValue,
};
use crate::editor::skills::{join_skill_list, merge_unique, split_skill_list};
use crate::models::document::{Document, EducationEntry, EntryId, Section, WorkEntry};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("{section} entry {index} does not exist (section has {len} entries)")]
    InvalidIndex {
        section: Section,
        index: usize,
        len: usize,
    },

    #[error("field expects a {expected} value, got {got}")]
    FieldTypeMismatch {
        expected: &'static str,
        got: &'static str,
    },
}

pub struct EditController {
    document: Document,
    snapshots: watch::Sender<Document>,
}

impl EditController {
    pub fn new(document: Document) -> Self {
        let (snapshots, _) = watch::channel(document.clone());
        Self {
            document,
            snapshots,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Receiver that observes every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Document> {
        self.snapshots.subscribe()
    }

    pub fn update_field(&mut self, path: FieldPath, value: FieldValue) -> Result<(), EditError> {
        if let Some((section, index)) = path.entry() {
            self.check_index(section, index)?;
        }

        match (path, value) {
            (FieldPath::Personal(field), FieldValue::Text(text)) => {
                *personal_slot(&mut self.document.personal, field) = text;
            }
            (FieldPath::Work { index, field }, FieldValue::Text(text)) => {
                let slot = work_text_slot(&mut self.document.work[index], field)
                    .ok_or(EditError::FieldTypeMismatch {
                        expected: "flag",
                        got: "text",
                    })?;
                *slot = text;
            }
            (FieldPath::Work { index, .. }, FieldValue::Flag(flag)) if path.expects_flag() => {
                self.document.work[index].current = flag;
            }
            (FieldPath::Education { index, field }, FieldValue::Text(text)) => {
                *education_slot(&mut self.document.education[index], field) = text;
            }
            (_, value) => {
                return Err(EditError::FieldTypeMismatch {
                    expected: "text",
                    got: value.kind(),
                });
            }
        }

        debug!(?path, "field updated");
        self.publish();
        Ok(())
    }

    /// Appends an empty entry with a fresh id and returns its index.
    pub fn add_entry(&mut self, section: Section) -> usize {
        let index = match section {
            Section::Work => {
                self.document.work.push(WorkEntry::empty());
                self.document.work.len() - 1
            }
            Section::Education => {
                self.document.education.push(EducationEntry::empty());
                self.document.education.len() - 1
            }
        };
        debug!(%section, index, "entry added");
        self.publish();
        index
    }

    /// Removes the entry at `index`; later entries shift down by one.
    pub fn remove_entry(&mut self, section: Section, index: usize) -> Result<EntryId, EditError> {
        self.check_index(section, index)?;
        let id = match section {
            Section::Work => self.document.work.remove(index).id,
            Section::Education => self.document.education.remove(index).id,
        };
        debug!(%section, index, %id, "entry removed");
        self.publish();
        Ok(id)
    }

    /// Replaces the skills verbatim from comma-separated text. Duplicates are kept.
    pub fn set_skills(&mut self, raw: &str) -> &[String] {
        self.document.skills = split_skill_list(raw);
        self.publish();
        &self.document.skills
    }

    /// Set union of the current skills and comma-separated `raw`, first
    /// occurrence wins. Duplicates typed through `set_skills` collapse here.
    pub fn merge_skills(&mut self, raw: &str) -> usize {
        let added = merge_unique(&mut self.document.skills, split_skill_list(raw));
        debug!(added, "skills merged");
        self.publish();
        added
    }

    pub fn skills_text(&self) -> String {
        join_skill_list(&self.document.skills)
    }

    pub fn entry_id(&self, section: Section, index: usize) -> Result<EntryId, EditError> {
        self.check_index(section, index)?;
        Ok(match section {
            Section::Work => self.document.work[index].id,
            Section::Education => self.document.education[index].id,
        })
    }

    pub fn work_index_of(&self, id: EntryId) -> Option<usize> {
        self.document.work_index_of(id)
    }

    fn check_index(&self, section: Section, index: usize) -> Result<(), EditError> {
        let len = self.document.len_of(section);
        if index >= len {
            return Err(EditError::InvalidIndex {
                section,
                index,
                len,
            });
        }
        Ok(())
    }

    fn publish(&self) {
        // send_replace stores the value even when nobody is subscribed.
        self.snapshots.send_replace(self.document.clone());
    }
}

impl Default for EditController {
    fn default() -> Self {
        Self::new(Document::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::field_path::{EducationField, PersonalField, WorkField};

    fn work(index: usize, field: WorkField) -> FieldPath {
        FieldPath::Work { index, field }
    }

    #[test]
    fn test_update_personal_field() {
        let mut editor = EditController::default();
        editor
            .update_field(FieldPath::Personal(PersonalField::JobTitle), "Engineer".into())
            .unwrap();
        assert_eq!(editor.document().personal.job_title, "Engineer");
    }

    #[test]
    fn test_update_work_fields_and_flag() {
        let mut editor = EditController::default();
        let i = editor.add_entry(Section::Work);
        editor.update_field(work(i, WorkField::Title), "Lead".into()).unwrap();
        editor.update_field(work(i, WorkField::Current), true.into()).unwrap();
        editor
            .update_field(work(i, WorkField::EndDate), "2021-01-01".into())
            .unwrap();

        let entry = &editor.document().work[i];
        assert_eq!(entry.title, "Lead");
        assert!(entry.current);
        assert_eq!(entry.end_date, "2021-01-01", "end date stays editable while current");
    }

    #[test]
    fn test_update_out_of_bounds_is_invalid_index() {
        let mut editor = EditController::default();
        let before = editor.document().clone();
        let err = editor
            .update_field(work(0, WorkField::Title), "x".into())
            .unwrap_err();
        assert_eq!(
            err,
            EditError::InvalidIndex {
                section: Section::Work,
                index: 0,
                len: 0
            }
        );
        assert_eq!(editor.document(), &before);
    }

    #[test]
    fn test_update_with_wrong_value_kind_is_rejected() {
        let mut editor = EditController::default();
        editor.add_entry(Section::Work);
        editor.add_entry(Section::Education);

        assert!(matches!(
            editor.update_field(work(0, WorkField::Current), "yes".into()),
            Err(EditError::FieldTypeMismatch { .. })
        ));
        assert!(matches!(
            editor.update_field(work(0, WorkField::Title), true.into()),
            Err(EditError::FieldTypeMismatch { .. })
        ));
        assert!(matches!(
            editor.update_field(
                FieldPath::Education {
                    index: 0,
                    field: EducationField::Degree
                },
                false.into()
            ),
            Err(EditError::FieldTypeMismatch { .. })
        ));
        assert!(!editor.document().work[0].current);
        assert_eq!(editor.document().work[0].title, "");
    }

    #[test]
    fn test_add_and_remove_keep_survivor_identity() {
        let mut editor = EditController::default();
        for n in 0..4 {
            let i = editor.add_entry(Section::Education);
            editor
                .update_field(
                    FieldPath::Education {
                        index: i,
                        field: EducationField::Degree,
                    },
                    format!("degree {n}").into(),
                )
                .unwrap();
        }
        let ids: Vec<EntryId> = editor.document().education.iter().map(|e| e.id).collect();

        editor.remove_entry(Section::Education, 1).unwrap();
        assert!(editor.remove_entry(Section::Education, 7).is_err());
        editor.remove_entry(Section::Education, 0).unwrap();

        let remaining = &editor.document().education;
        assert_eq!(remaining.len(), 4 - 2);
        assert_eq!(remaining[0].id, ids[2]);
        assert_eq!(remaining[0].degree, "degree 2");
        assert_eq!(remaining[1].id, ids[3]);
        assert_eq!(remaining[1].degree, "degree 3");
    }

    #[test]
    fn test_scripted_add_remove_sequences() {
        enum Step {
            Add,
            Remove(usize),
        }
        use Step::{Add, Remove};

        let scripts: Vec<Vec<Step>> = vec![
            vec![Add, Add, Add, Remove(1), Remove(5), Remove(0)],
            vec![Remove(0), Add, Remove(0), Remove(0), Add],
            vec![Add, Add, Add, Add, Remove(3), Remove(3), Remove(2), Add],
            vec![Add, Remove(0), Add, Add, Remove(1), Remove(1), Remove(0)],
            vec![],
        ];

        for (n, script) in scripts.into_iter().enumerate() {
            let mut editor = EditController::default();
            // Mirror of the expected list: (id, title written right after add).
            let mut expected: Vec<(EntryId, String)> = Vec::new();
            let mut adds = 0;
            let mut valid_removes = 0;

            for step in script {
                match step {
                    Add => {
                        let i = editor.add_entry(Section::Work);
                        let title = format!("script {n} entry {adds}");
                        editor
                            .update_field(work(i, WorkField::Title), title.as_str().into())
                            .unwrap();
                        expected.push((editor.entry_id(Section::Work, i).unwrap(), title));
                        adds += 1;
                    }
                    Remove(i) => match editor.remove_entry(Section::Work, i) {
                        Ok(id) => {
                            assert_eq!(id, expected.remove(i).0);
                            valid_removes += 1;
                        }
                        Err(EditError::InvalidIndex { len, .. }) => {
                            assert!(i >= expected.len());
                            assert_eq!(len, expected.len());
                        }
                        Err(other) => panic!("unexpected error {other:?}"),
                    },
                }

                let work = &editor.document().work;
                assert_eq!(work.len(), adds - valid_removes);
                let actual: Vec<(EntryId, String)> =
                    work.iter().map(|w| (w.id, w.title.clone())).collect();
                assert_eq!(actual, expected, "script {n}");
            }
        }
    }

    #[test]
    fn test_double_remove_of_single_entry() {
        let mut editor = EditController::default();
        editor.add_entry(Section::Work);
        assert!(editor.remove_entry(Section::Work, 0).is_ok());
        let err = editor.remove_entry(Section::Work, 0).unwrap_err();
        assert!(matches!(err, EditError::InvalidIndex { len: 0, .. }));
        assert!(editor.document().work.is_empty());
    }

    #[test]
    fn test_add_returns_index_and_empty_fields() {
        let mut editor = EditController::default();
        assert_eq!(editor.add_entry(Section::Work), 0);
        assert_eq!(editor.add_entry(Section::Work), 1);
        let w = &editor.document().work[1];
        assert!(w.title.is_empty() && w.description.is_empty() && !w.current);
    }

    #[test]
    fn test_set_skills_keeps_duplicates_merge_does_not() {
        let mut editor = EditController::default();
        assert_eq!(
            editor.set_skills("React, React, Go"),
            &["React", "React", "Go"]
        );

        editor.set_skills("React");
        let added = editor.merge_skills("React, React, Go");
        assert_eq!(added, 1);
        assert_eq!(editor.document().skills, vec!["React", "Go"]);
        assert_eq!(editor.skills_text(), "React, Go");
    }

    #[test]
    fn test_merge_collapses_duplicates_typed_by_hand() {
        let mut editor = EditController::default();
        editor.set_skills("Go, Go, Rust");
        assert_eq!(editor.merge_skills("Go, C"), 1);
        assert_eq!(editor.document().skills, vec!["Go", "Rust", "C"]);
    }

    #[test]
    fn test_successful_edits_publish_snapshots() {
        let mut editor = EditController::default();
        let mut rx = editor.subscribe();
        assert!(!rx.has_changed().unwrap());

        editor.add_entry(Section::Work);
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().work.len(), 1);
    }

    #[test]
    fn test_failed_edits_publish_nothing() {
        let mut editor = EditController::default();
        let rx = editor.subscribe();

        let _ = editor.remove_entry(Section::Work, 0);
        let _ = editor.update_field(work(3, WorkField::City), "Paris".into());
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_entry_id_resolution() {
        let mut editor = EditController::default();
        editor.add_entry(Section::Work);
        editor.add_entry(Section::Work);
        let second = editor.entry_id(Section::Work, 1).unwrap();
        editor.remove_entry(Section::Work, 0).unwrap();
        assert_eq!(editor.work_index_of(second), Some(0));
        assert!(editor.entry_id(Section::Work, 1).is_err());
    }
}
