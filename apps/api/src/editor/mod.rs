// CV editing: field updates, list entry management, skill lists.
// All Document mutation goes through EditController, including suggestion merges.

pub mod controller;
pub mod field_path;
pub mod handlers;
pub mod skills;

pub use controller::{EditController, EditError};
pub use field_path::{FieldPath, FieldValue, PersonalField, WorkField};
