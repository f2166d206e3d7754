//! Full-field validation
//!
//! [`Validator::validate`] is a pure function from a [`FormSnapshot`] and an
//! explicit clock instant to a [`ValidationReport`]. It never touches display
//! state; clearing and repopulating the error slots is the pipeline's job.
//!
//! All five rules run independently, so one pass can surface several errors
//! at once.

use crate::rules::{
    RuleSet, DAYS_PER_YEAR, MIN_AGE_YEARS, MSG_BIRTH_AGE, MSG_BIRTH_FUTURE, MSG_BIRTH_REQUIRED,
    MSG_EMAIL, MSG_NAME, MSG_PHONE, MSG_TERMS,
};
use crate::{Field, FormSnapshot, Result};
use chrono::{DateTime, Local, NaiveDate, NaiveTime};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Per-field outcome of one validation pass.
///
/// Holds at most one message per field; a field with no message passed.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    errors: [Option<&'static str>; 5],
}

impl ValidationReport {
    /// Whether every field passed.
    pub fn is_valid(&self) -> bool {
        self.errors.iter().all(|e| e.is_none())
    }

    /// The message for one field, if it failed.
    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors[field.index()]
    }

    /// Iterate over the failing fields and their messages, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        Field::ALL
            .iter()
            .filter_map(|f| self.errors[f.index()].map(|m| (*f, m)))
    }

    /// Number of failing fields.
    pub fn error_count(&self) -> usize {
        self.errors.iter().filter(|e| e.is_some()).count()
    }

    fn fail(&mut self, field: Field, message: &'static str) {
        self.errors[field.index()] = Some(message);
    }
}

/// Field validator holding the pre-compiled rule set.
pub struct Validator {
    rules: RuleSet,
}

impl Validator {
    /// Build a validator with the fixed rule set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            rules: RuleSet::compile()?,
        })
    }

    /// Validate a snapshot of the form controls against all five rules.
    ///
    /// `now` is the instant the submission was made; the production caller
    /// passes `Local::now()`.
    pub fn validate(&self, snapshot: &FormSnapshot, now: DateTime<Local>) -> ValidationReport {
        let mut report = ValidationReport::default();

        if !self.rules.matches_name(snapshot.full_name.trim()) {
            report.fail(Field::FullName, MSG_NAME);
        }

        if !self.rules.matches_email(snapshot.email.trim()) {
            report.fail(Field::Email, MSG_EMAIL);
        }

        if !self.rules.matches_phone(snapshot.phone.trim()) {
            report.fail(Field::Phone, MSG_PHONE);
        }

        self.check_birth_date(&snapshot.birth_date, now, &mut report);

        if !snapshot.terms_accepted {
            report.fail(Field::Terms, MSG_TERMS);
        }

        report
    }

    /// Birth date rule: required, not in the future, age at least 13 years.
    ///
    /// Age is elapsed seconds over a flat 365.25-day year; near the 13-year
    /// boundary this can differ from calendar age by up to a day.
    fn check_birth_date(&self, value: &str, now: DateTime<Local>, report: &mut ValidationReport) {
        // The date picker only ever yields ISO dates or the empty string, so
        // an unparseable value counts as "not selected".
        let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") else {
            report.fail(Field::BirthDate, MSG_BIRTH_REQUIRED);
            return;
        };

        let birth = date.and_time(NaiveTime::MIN);
        let now = now.naive_local();

        if birth > now {
            report.fail(Field::BirthDate, MSG_BIRTH_FUTURE);
            return;
        }

        let age_years = (now - birth).num_seconds() as f64 / (DAYS_PER_YEAR * SECONDS_PER_DAY);
        if age_years < MIN_AGE_YEARS {
            report.fail(Field::BirthDate, MSG_BIRTH_AGE);
        }
    }
}
