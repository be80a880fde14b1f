//! Worksheet form options and validation

use thiserror::Error;
use worksheet_core::WorksheetRequest;

/// Language levels offered by the level select
pub const LEVELS: [&str; 4] = ["A1", "A2", "B1", "B2"];

/// Age groups offered by the age group select
pub const AGE_GROUPS: [&str; 4] = ["8-10", "11-13", "14-16", "adult"];

/// Durations in minutes; the service accepts 10 to 45
pub const DURATIONS: [u32; 8] = [10, 15, 20, 25, 30, 35, 40, 45];

pub const DEFAULT_DURATION: u32 = 20;

/// Activity type checkboxes as `(value, label)`
pub const ACTIVITY_TYPES: [(&str, &str); 5] = [
    ("fill_in_the_blanks", "Fill in the blanks"),
    ("vocabulary", "Vocabulary"),
    ("sentence_order", "Sentence order"),
    ("true_false", "True or false"),
    ("short_writing", "Short writing"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please select at least one activity type.")]
    NoActivityTypes,
}

/// Raw values read from the worksheet form on submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateForm {
    pub level: String,
    pub topic: String,
    pub age_group: String,
    pub duration: u32,
    pub activity_types: Vec<String>,
    /// Comma-separated, exactly as typed
    pub theme_words: String,
}

impl GenerateForm {
    /// Build the request body, rejecting a form with no activity type
    pub fn to_request(&self) -> Result<WorksheetRequest, FormError> {
        if self.activity_types.is_empty() {
            return Err(FormError::NoActivityTypes);
        }

        Ok(WorksheetRequest {
            level: self.level.clone(),
            topic: self.topic.clone(),
            age_group: self.age_group.clone(),
            duration: self.duration,
            activity_types: self.activity_types.clone(),
            theme_words: parse_theme_words(&self.theme_words),
        })
    }
}

/// Split on commas, trim, drop empties. `None` when nothing is left.
pub fn parse_theme_words(raw: &str) -> Option<Vec<String>> {
    let words: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(String::from)
        .collect();

    (!words.is_empty()).then_some(words)
}
