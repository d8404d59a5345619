//! Form state container for an in-progress work entry.
//!
//! Holds the draft plus the submission-in-flight flag. Editing one of the
//! four derivation inputs (start, end, break, rate) re-derives the totals
//! synchronously before the edit returns; the totals themselves have no
//! patch variant and can never be set from outside.

use crate::core::calculator::compute_totals;
use crate::core::validate::validate_draft;
use crate::errors::AppResult;
use crate::models::work_entry::{WorkEntry, WorkEntryDraft};
use chrono::{NaiveDate, NaiveDateTime};

/// Persistence collaborator consumed by the form. The form knows nothing
/// about transport or storage beyond this contract.
pub trait EntryStore {
    fn create_entry(&mut self, owner_id: i64, draft: &WorkEntryDraft) -> AppResult<WorkEntry>;
}

/// Single-field update. One variant per user-editable field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldPatch {
    Date(NaiveDate),
    EventName(String),
    EventLocation(String),
    Description(String),
    StartTime(NaiveDateTime),
    EndTime(NaiveDateTime),
    BreakMinutes(i64),
    HourlyRate(f64),
    Signature(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Saved(WorkEntry),
    /// A submission is already in flight; this call did nothing.
    AlreadyPending,
}

#[derive(Debug, Default)]
pub struct EntryForm {
    draft: WorkEntryDraft,
    in_flight: bool,
}

impl EntryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &WorkEntryDraft {
        &self.draft
    }

    pub fn submission_pending(&self) -> bool {
        self.in_flight
    }

    /// Apply one field update. Updates to the four derivation inputs
    /// recompute the totals before returning; while either timestamp is
    /// still missing the prior derived values are retained.
    pub fn set_field(&mut self, patch: FieldPatch) {
        let rederive = matches!(
            patch,
            FieldPatch::StartTime(_)
                | FieldPatch::EndTime(_)
                | FieldPatch::BreakMinutes(_)
                | FieldPatch::HourlyRate(_)
        );

        match patch {
            FieldPatch::Date(d) => self.draft.date = d,
            FieldPatch::EventName(v) => self.draft.event_name = v,
            FieldPatch::EventLocation(v) => self.draft.event_location = v,
            FieldPatch::Description(v) => self.draft.description = v,
            FieldPatch::StartTime(t) => self.draft.start_time = Some(t),
            FieldPatch::EndTime(t) => self.draft.end_time = Some(t),
            FieldPatch::BreakMinutes(m) => self.draft.break_minutes = m,
            FieldPatch::HourlyRate(r) => self.draft.hourly_rate = r,
            FieldPatch::Signature(s) => self.draft.signature = s,
        }

        if rederive
            && let Some(totals) = compute_totals(
                self.draft.start_time,
                self.draft.end_time,
                self.draft.break_minutes,
                self.draft.hourly_rate,
            )
        {
            self.draft.total_hours = totals.hours;
            self.draft.total_amount = totals.amount;
        }
    }

    /// Restore defaults, or re-seed from a prior draft. Seeding carries
    /// the raw values over unchanged; only their presentation differs
    /// when the caller switches the display language.
    pub fn reset(&mut self, seed: Option<WorkEntryDraft>) {
        self.draft = seed.unwrap_or_default();
    }

    /// Validate the draft and take a snapshot to hand to the store.
    ///
    /// Returns `Ok(None)` when a submission is already in flight (the
    /// call is a no-op, not an error, so repeated interaction cannot
    /// produce duplicate entries). On a validation error the flag stays
    /// clear and the draft untouched.
    pub fn take_submission(&mut self) -> AppResult<Option<WorkEntryDraft>> {
        if self.in_flight {
            return Ok(None);
        }
        validate_draft(&self.draft)?;
        self.in_flight = true;
        Ok(Some(self.draft.clone()))
    }

    /// Complete the submission started by `take_submission`. On success
    /// the form resets to defaults; on failure the draft is kept so the
    /// user can retry without re-entering data.
    pub fn complete_submission<T>(&mut self, result: AppResult<T>) -> AppResult<T> {
        self.in_flight = false;
        if result.is_ok() {
            self.reset(None);
        }
        result
    }

    /// Validate and hand the entry to the store in one step.
    pub fn submit(&mut self, store: &mut dyn EntryStore, owner_id: i64) -> AppResult<SubmitOutcome> {
        let snapshot = match self.take_submission()? {
            Some(d) => d,
            None => return Ok(SubmitOutcome::AlreadyPending),
        };
        let result = store.create_entry(owner_id, &snapshot);
        self.complete_submission(result).map(SubmitOutcome::Saved)
    }
}
