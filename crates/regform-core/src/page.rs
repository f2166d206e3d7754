//! In-memory page document
//!
//! Stand-in for the visible page: the form's input controls, one error slot
//! per validated field, and the results table body. The document is plain
//! mutable state; only the submit pipeline writes to it.

use crate::validator::ValidationReport;
use crate::{Field, FormSnapshot, Registration};

/// The page document: form controls, error slots, results table.
#[derive(Debug, Clone, Default)]
pub struct FormDocument {
    full_name: String,
    email: String,
    phone: String,
    birth_date: String,
    terms_accepted: bool,
    timestamp: String,
    slots: [Option<String>; 5],
    rows: Vec<Registration>,
    submission_count: u64,
}

impl FormDocument {
    /// Create an empty document with default control values.
    pub fn new() -> Self {
        Self::default()
    }

    // --- input controls ---

    /// Set the full name control.
    pub fn set_full_name(&mut self, value: impl Into<String>) {
        self.full_name = value.into();
    }

    /// Set the email control.
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    /// Set the phone control.
    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.phone = value.into();
    }

    /// Set the birth date control (ISO `YYYY-MM-DD`, empty to unset).
    pub fn set_birth_date(&mut self, value: impl Into<String>) {
        self.birth_date = value.into();
    }

    /// Set the terms checkbox.
    pub fn set_terms_accepted(&mut self, accepted: bool) {
        self.terms_accepted = accepted;
    }

    /// Stamp the hidden timestamp control.
    pub fn set_timestamp(&mut self, value: impl Into<String>) {
        self.timestamp = value.into();
    }

    /// Current value of the hidden timestamp control.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Owned copy of the current control values.
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            birth_date: self.birth_date.clone(),
            terms_accepted: self.terms_accepted,
        }
    }

    /// Reset every control, including the hidden timestamp, to its default.
    /// Error slots and table rows are left untouched.
    pub fn reset(&mut self) {
        self.full_name.clear();
        self.email.clear();
        self.phone.clear();
        self.birth_date.clear();
        self.terms_accepted = false;
        self.timestamp.clear();
    }

    // --- error slots ---

    /// Set one slot's message, overwriting any prior content.
    pub fn show_error(&mut self, field: Field, message: impl Into<String>) {
        self.slots[field.index()] = Some(message.into());
    }

    /// Empty every error slot unconditionally.
    pub fn clear_errors(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }

    /// Copy each populated message of a report into its slot. Does not
    /// clear; the pipeline clears before validating.
    pub fn apply_report(&mut self, report: &ValidationReport) {
        for (field, message) in report.iter() {
            self.show_error(field, message);
        }
    }

    /// Current message of one slot, if any.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.slots[field.index()].as_deref()
    }

    /// Whether any slot currently shows a message.
    pub fn has_errors(&self) -> bool {
        self.slots.iter().any(|s| s.is_some())
    }

    // --- results table ---

    /// Append a row as the last row of the results table.
    pub fn append_row(&mut self, row: Registration) {
        self.rows.push(row);
        self.submission_count += 1;
    }

    /// The table rows, oldest first.
    pub fn rows(&self) -> &[Registration] {
        &self.rows
    }

    /// Number of accepted submissions since the document was created.
    pub fn submission_count(&self) -> u64 {
        self.submission_count
    }

    /// Plain-text rendering of the results table, one row per line.
    pub fn render_table(&self) -> String {
        let mut out = String::from("Timestamp | Full name | Email | Phone | Birth date | Terms\n");
        for row in &self.rows {
            out.push_str(&row.cells().join(" | "));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str) -> Registration {
        Registration {
            timestamp: "1.1.2025 12.00.00".into(),
            full_name: name.into(),
            email: "a@b.com".into(),
            phone: "0401234567".into(),
            birth_date: "1990-05-01".into(),
            terms_accepted: true,
        }
    }

    #[test]
    fn test_snapshot_copies_controls() {
        let mut doc = FormDocument::new();
        doc.set_full_name("John Smith");
        doc.set_email("a@b.com");
        doc.set_terms_accepted(true);
        let snapshot = doc.snapshot();
        assert_eq!(snapshot.full_name, "John Smith");
        assert_eq!(snapshot.email, "a@b.com");
        assert!(snapshot.terms_accepted);
        assert!(snapshot.birth_date.is_empty());
    }

    #[test]
    fn test_reset_clears_controls_only() {
        let mut doc = FormDocument::new();
        doc.set_full_name("John Smith");
        doc.set_terms_accepted(true);
        doc.set_timestamp("1.1.2025 12.00.00");
        doc.append_row(row("John Smith"));
        doc.show_error(Field::Email, "stale");
        doc.reset();
        assert!(doc.snapshot().full_name.is_empty());
        assert!(!doc.snapshot().terms_accepted);
        assert!(doc.timestamp().is_empty());
        // Rows and slots survive a reset
        assert_eq!(doc.rows().len(), 1);
        assert_eq!(doc.error(Field::Email), Some("stale"));
    }

    #[test]
    fn test_show_error_overwrites() {
        let mut doc = FormDocument::new();
        doc.show_error(Field::Phone, "first");
        doc.show_error(Field::Phone, "second");
        assert_eq!(doc.error(Field::Phone), Some("second"));
    }

    #[test]
    fn test_clear_errors_empties_every_slot() {
        let mut doc = FormDocument::new();
        for field in Field::ALL {
            doc.show_error(field, "msg");
        }
        assert!(doc.has_errors());
        doc.clear_errors();
        assert!(!doc.has_errors());
        for field in Field::ALL {
            assert_eq!(doc.error(field), None);
        }
    }

    #[test]
    fn test_rows_keep_insertion_order() {
        let mut doc = FormDocument::new();
        doc.append_row(row("First Person"));
        doc.append_row(row("Second Person"));
        assert_eq!(doc.rows()[0].full_name, "First Person");
        assert_eq!(doc.rows()[1].full_name, "Second Person");
        assert_eq!(doc.submission_count(), 2);
    }

    #[test]
    fn test_render_table() {
        let mut doc = FormDocument::new();
        doc.append_row(row("John Smith"));
        let rendered = doc.render_table();
        let mut lines = rendered.lines();
        assert!(lines.next().unwrap().starts_with("Timestamp |"));
        assert_eq!(
            lines.next().unwrap(),
            "1.1.2025 12.00.00 | John Smith | a@b.com | 0401234567 | 1990-05-01 | Yes"
        );
    }
}
