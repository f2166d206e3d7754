//! Submit pipeline
//!
//! [`FormController`] wires submission to validation and display: stamp the
//! timestamp, clear the slots, validate a snapshot, then either surface the
//! errors or append a results row and reset the form. The whole pipeline is
//! synchronous and runs to completion per call.

use crate::page::FormDocument;
use crate::validator::Validator;
use crate::{Registration, Result, SubmitOutcome};
use chrono::{DateTime, Local};
use tracing::{debug, info};

/// Finnish short date-time form, e.g. `3.11.2025 14.30.05`.
const TIMESTAMP_FORMAT: &str = "%-d.%-m.%Y %H.%M.%S";

/// Form controller: owns the page document and the validator.
pub struct FormController {
    document: FormDocument,
    validator: Validator,
}

impl FormController {
    /// Create a controller over an empty document.
    pub fn new() -> Result<Self> {
        Ok(Self {
            document: FormDocument::new(),
            validator: Validator::new()?,
        })
    }

    /// Read access to the page document.
    pub fn document(&self) -> &FormDocument {
        &self.document
    }

    /// Mutable access to the page document (the host's input surface).
    pub fn document_mut(&mut self) -> &mut FormDocument {
        &mut self.document
    }

    /// Handle a user-initiated submission at the current local time.
    pub fn submit_now(&mut self) -> SubmitOutcome {
        self.submit(Local::now())
    }

    /// Handle a user-initiated submission at an explicit instant.
    ///
    /// Side effects, in order: stamp the hidden timestamp control, clear
    /// every error slot, validate a snapshot of the controls. On failure the
    /// report's messages are shown and the entered values are left
    /// untouched; on success a six-cell row is appended to the results
    /// table and every control is reset.
    pub fn submit(&mut self, now: DateTime<Local>) -> SubmitOutcome {
        debug!("form submitted");

        self.document
            .set_timestamp(now.format(TIMESTAMP_FORMAT).to_string());
        self.document.clear_errors();

        let snapshot = self.document.snapshot();
        let report = self.validator.validate(&snapshot, now);

        if !report.is_valid() {
            for (field, message) in report.iter() {
                debug!(slot = field.slot_id(), error = message, "field rejected");
            }
            self.document.apply_report(&report);
            return SubmitOutcome::Rejected;
        }

        let registration = Registration {
            timestamp: self.document.timestamp().to_string(),
            full_name: snapshot.full_name.trim().to_string(),
            email: snapshot.email.trim().to_string(),
            phone: snapshot.phone.trim().to_string(),
            birth_date: snapshot.birth_date,
            terms_accepted: snapshot.terms_accepted,
        };
        info!(email = %registration.email, "registration accepted");

        self.document.append_row(registration);
        self.document.reset();
        SubmitOutcome::Accepted
    }
}
