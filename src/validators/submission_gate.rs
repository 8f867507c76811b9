//! Checklist submission gate
//!
//! All four free-text fields (latitude, longitude, observation date,
//! duration) must be non-blank before a submission request is issued;
//! whitespace-only counts as blank. The duration field additionally must
//! be numeric with an optional decimal point, enforced incrementally: a
//! keystroke that would violate the pattern is stripped from the end of
//! the field rather than blocking entry.

use crate::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Digits with at most one decimal point; also matches the empty string,
/// so blankness is checked separately
static DURATION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d*\.?\d*$").expect("duration pattern must compile"));

/// Apply the incremental duration filter to a raw field value: strip
/// trailing characters until the remainder satisfies the numeric pattern.
/// Under per-keystroke invocation at most one character is stripped.
pub fn filter_duration_input(raw: &str) -> String {
    let mut value = raw.to_string();
    while !value.is_empty() && !DURATION_PATTERN.is_match(&value) {
        value.pop();
    }
    value
}

/// Free-text fields of the checklist entry form
#[derive(Debug, Clone, Default)]
pub struct ChecklistForm {
    pub lat: String,
    pub lng: String,
    pub date: String,
    duration: String,
}

impl ChecklistForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duration(&self) -> &str {
        &self.duration
    }

    /// Update the duration field through the incremental filter
    pub fn set_duration(&mut self, raw: &str) {
        self.duration = filter_duration_input(raw);
    }

    /// Validate the form for submission. Returns `Error::Validation`
    /// without touching any state; the caller must not issue a network
    /// call on failure.
    pub fn validate(&self) -> Result<()> {
        if self.lat.trim().is_empty()
            || self.lng.trim().is_empty()
            || self.date.trim().is_empty()
            || self.duration.trim().is_empty()
        {
            return Err(Error::Validation(
                "Please fill out all fields before submitting the checklist".to_string(),
            ));
        }
        if !DURATION_PATTERN.is_match(&self.duration) {
            return Err(Error::Validation(
                "Duration must be a number with an optional decimal point".to_string(),
            ));
        }
        Ok(())
    }

    /// Reset after a confirmed successful submit. Date and duration are
    /// cleared; latitude and longitude are retained so repeated entries
    /// at the same spot need no re-typing (page-specific choice of the
    /// checklist entry page).
    pub fn reset_after_submit(&mut self) {
        self.date.clear();
        self.duration.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_strips_offending_trailing_character() {
        assert_eq!(filter_duration_input("1.5x"), "1.5");
        assert_eq!(filter_duration_input("12a"), "12");
        assert_eq!(filter_duration_input("1.2.3"), "1.2");
        assert_eq!(filter_duration_input(".5"), ".5");
        assert_eq!(filter_duration_input("abc"), "");
    }

    #[test]
    fn filter_accepts_valid_input_unchanged() {
        assert_eq!(filter_duration_input("1.5"), "1.5");
        assert_eq!(filter_duration_input("42"), "42");
        assert_eq!(filter_duration_input(""), "");
    }

    fn filled_form() -> ChecklistForm {
        let mut form = ChecklistForm::new();
        form.lat = "37.87".to_string();
        form.lng = "-122.25".to_string();
        form.date = "2024-01-01".to_string();
        form.set_duration("1.5");
        form
    }

    #[test]
    fn complete_form_validates() {
        assert!(filled_form().validate().is_ok());
    }

    #[test]
    fn blank_latitude_blocks_submission() {
        let mut form = filled_form();
        form.lat = "".to_string();
        assert!(matches!(form.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        let mut form = filled_form();
        form.date = "   ".to_string();
        assert!(matches!(form.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn reset_clears_date_and_duration_but_keeps_position() {
        let mut form = filled_form();
        form.reset_after_submit();
        assert_eq!(form.lat, "37.87");
        assert_eq!(form.lng, "-122.25");
        assert!(form.date.is_empty());
        assert!(form.duration().is_empty());
    }
}
