//! Registration Form Controller
//!
//! In-memory registration form handling: a synchronous submit pipeline that
//! validates five fields against fixed rules and appends accepted
//! submissions to a results table.
//!
//! ## Features
//! - Pure field validation (snapshot in, report out)
//! - Per-field error slots with fixed user-facing messages
//! - Results table with insertion-order rows
//! - Form reset after accepted submissions
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    Submit Pipeline                       │
//! │                                                          │
//! │  stamp ──► clear ──► validate ──┬── pass ──► append+reset│
//! │  timestamp  slots    (pure)     │                        │
//! │                                 └── fail ──► show errors │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation is a pure function over a [`FormSnapshot`]; the
//! [`FormDocument`] is the only mutable surface and is touched exclusively
//! by the pipeline, in direct response to a submit call. No async, no
//! locking, no persistence.

#![warn(missing_docs)]

pub mod controller;
pub mod page;
pub mod rules;
pub mod validator;

pub use controller::FormController;
pub use page::FormDocument;
pub use rules::RuleSet;
pub use validator::{ValidationReport, Validator};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the five validated form fields.
///
/// Doubles as the key for the per-field error slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    /// Full name text input
    FullName,
    /// Email text input
    Email,
    /// Phone text input
    Phone,
    /// Birth date picker
    BirthDate,
    /// Terms acceptance checkbox
    Terms,
}

impl Field {
    /// All validated fields, in display order.
    pub const ALL: [Field; 5] = [
        Field::FullName,
        Field::Email,
        Field::Phone,
        Field::BirthDate,
        Field::Terms,
    ];

    /// Stable identifier of the field's error slot.
    pub fn slot_id(&self) -> &'static str {
        match self {
            Field::FullName => "nameError",
            Field::Email => "emailError",
            Field::Phone => "phoneError",
            Field::BirthDate => "birthError",
            Field::Terms => "termsError",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Field::FullName => 0,
            Field::Email => 1,
            Field::Phone => 2,
            Field::BirthDate => 3,
            Field::Terms => 4,
        }
    }
}

/// Owned copy of the form's control values, taken at submit time.
///
/// Values are raw and untrimmed; trimming is the validator's job.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FormSnapshot {
    /// Full name control value
    pub full_name: String,
    /// Email control value
    pub email: String,
    /// Phone control value
    pub phone: String,
    /// Birth date control value, ISO `YYYY-MM-DD` or empty when unset
    pub birth_date: String,
    /// Terms checkbox state
    pub terms_accepted: bool,
}

/// One accepted submission, rendered as a row of the results table.
///
/// Transient: rows live only as long as the owning [`FormDocument`].
/// Insertion order is the only ordering guarantee and no field is unique.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Registration {
    /// Capture time, formatted at submit
    pub timestamp: String,
    /// Trimmed full name
    pub full_name: String,
    /// Trimmed email
    pub email: String,
    /// Trimmed phone
    pub phone: String,
    /// Raw birth date control value
    pub birth_date: String,
    /// Terms checkbox state at submit
    pub terms_accepted: bool,
}

impl Registration {
    /// Display label for the terms cell.
    pub fn terms_label(&self) -> &'static str {
        if self.terms_accepted {
            "Yes"
        } else {
            "No"
        }
    }

    /// The six ordered table cells for this row.
    pub fn cells(&self) -> [String; 6] {
        [
            self.timestamp.clone(),
            self.full_name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.birth_date.clone(),
            self.terms_label().to_string(),
        ]
    }
}

/// Outcome of one submit pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    /// All five checks passed; a row was appended and the form was reset.
    Accepted,
    /// At least one check failed; error slots hold the messages and the
    /// entered values were left untouched.
    Rejected,
}

impl SubmitOutcome {
    /// Whether the submission was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }
}

/// Form controller error type
#[derive(Error, Debug)]
pub enum FormError {
    /// A validation rule pattern failed to compile
    #[error("invalid rule pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type for form controller operations
pub type Result<T> = std::result::Result<T, FormError>;
