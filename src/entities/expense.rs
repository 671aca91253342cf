// 💸 Expense Entity - identity, label, amount, timestamps
//
// "The id is IDENTITY (never changes), title and amount are VALUES (can change)"
//
// - id and created_at are fixed at construction
// - title and amount change through `update`
// - updated_at moves forward on every update, even an empty one

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

use crate::clock::{Clock, IdGenerator, SystemClock, UuidGenerator};
use crate::error::{ExpenseError, Result};

/// Handle shared between the store and any caller that kept the record
///
/// Drop any `borrow_mut()` guard before calling store lookups: they read
/// every record and panic on one that is mutably borrowed.
pub type SharedExpense = Rc<RefCell<ExpenseRecord>>;

// ============================================================================
// AMOUNT COERCION
// ============================================================================

/// Anything that can be turned into a floating-point amount
///
/// Numbers convert directly. Strings are trimmed and parsed, and fail with
/// [`ExpenseError::InvalidAmount`] when they are not numeric.
pub trait IntoAmount: Sized {
    fn into_amount(self) -> Result<f64>;

    /// Amount to apply in an update, `None` when the raw input counts as
    /// "not provided"
    ///
    /// Numbers are not provided when zero. Override for inputs whose
    /// emptiness is decided before coercion.
    fn into_update_amount(self) -> Result<Option<f64>> {
        let amount = self.into_amount()?;
        Ok(non_zero(amount))
    }
}

fn non_zero(amount: f64) -> Option<f64> {
    (amount != 0.0).then_some(amount)
}

impl IntoAmount for f64 {
    fn into_amount(self) -> Result<f64> {
        Ok(self)
    }
}

impl IntoAmount for f32 {
    fn into_amount(self) -> Result<f64> {
        Ok(f64::from(self))
    }
}

impl IntoAmount for i32 {
    fn into_amount(self) -> Result<f64> {
        Ok(f64::from(self))
    }
}

impl IntoAmount for u32 {
    fn into_amount(self) -> Result<f64> {
        Ok(f64::from(self))
    }
}

impl IntoAmount for i64 {
    fn into_amount(self) -> Result<f64> {
        Ok(self as f64)
    }
}

impl IntoAmount for u64 {
    fn into_amount(self) -> Result<f64> {
        Ok(self as f64)
    }
}

impl IntoAmount for &str {
    fn into_amount(self) -> Result<f64> {
        self.trim()
            .parse::<f64>()
            .map_err(|_| ExpenseError::InvalidAmount {
                input: self.to_string(),
            })
    }

    /// Only the empty string is "not provided"; "0" applies a zero amount
    /// and whitespace still has to parse.
    fn into_update_amount(self) -> Result<Option<f64>> {
        if self.is_empty() {
            return Ok(None);
        }
        self.into_amount().map(Some)
    }
}

impl IntoAmount for String {
    fn into_amount(self) -> Result<f64> {
        self.as_str().into_amount()
    }

    fn into_update_amount(self) -> Result<Option<f64>> {
        self.as_str().into_update_amount()
    }
}

// ============================================================================
// UPDATE REQUEST
// ============================================================================

/// Fields to change on an existing record
///
/// Whether a value counts as provided is decided from the raw input: an
/// empty title, a numeric zero or an empty amount string leave the stored
/// value alone, while the string "0" sets the amount to zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseUpdate {
    title: Option<String>,
    amount: Option<f64>,
}

impl ExpenseUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.title = (!title.is_empty()).then_some(title);
        self
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = non_zero(amount);
        self
    }

    /// Set the amount from any coercible value
    pub fn try_amount(mut self, amount: impl IntoAmount) -> Result<Self> {
        self.amount = amount.into_update_amount()?;
        Ok(self)
    }

    /// True when applying this update would only refresh `updated_at`
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.amount.is_none()
    }
}

// ============================================================================
// EXPENSE RECORD
// ============================================================================

/// A single expense entry
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRecord {
    id: String,
    title: String,
    amount: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ExpenseRecord {
    /// Create a new expense with a random UUID and the current UTC time
    pub fn new(title: impl Into<String>, amount: impl IntoAmount) -> Result<Self> {
        Self::with_capabilities(title, amount, &SystemClock, &UuidGenerator)
    }

    /// Create a new expense using the given time and id sources
    pub fn with_capabilities(
        title: impl Into<String>,
        amount: impl IntoAmount,
        clock: &dyn Clock,
        ids: &dyn IdGenerator,
    ) -> Result<Self> {
        let amount = amount.into_amount()?;
        let now = clock.now();

        Ok(ExpenseRecord {
            id: ids.generate_unique_id(),
            title: title.into(),
            amount,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Apply changes and refresh `updated_at` from the system clock
    pub fn update(&mut self, changes: ExpenseUpdate) {
        self.update_with_clock(changes, &SystemClock);
    }

    /// Apply changes and refresh `updated_at` from the given clock
    ///
    /// `updated_at` never moves before `created_at`, whatever the clock says.
    pub fn update_with_clock(&mut self, changes: ExpenseUpdate, clock: &dyn Clock) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(amount) = changes.amount {
            self.amount = amount;
        }
        self.updated_at = clock.now().max(self.created_at);

        debug!(id = %self.id, title = %self.title, amount = self.amount, "expense updated");
    }

    /// Detached, serializable copy of the current values
    pub fn snapshot(&self) -> ExpenseSnapshot {
        ExpenseSnapshot {
            id: self.id.clone(),
            title: self.title.clone(),
            amount: self.amount,
            created_at: iso_timestamp(self.created_at),
            updated_at: iso_timestamp(self.updated_at),
        }
    }

    /// Wrap in a handle that can be added to a store and kept by the caller
    pub fn into_shared(self) -> SharedExpense {
        Rc::new(RefCell::new(self))
    }
}

// ============================================================================
// SNAPSHOT
// ============================================================================

/// Serialized view of an expense
///
/// Timestamps are ISO-8601 strings with a `+00:00` offset and microseconds,
/// the fraction omitted when it is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSnapshot {
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub created_at: String,
    pub updated_at: String,
}

impl ExpenseSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Microsecond precision, fraction left out on whole seconds
fn iso_timestamp(time: DateTime<Utc>) -> String {
    let format = if time.timestamp_subsec_micros() == 0 {
        SecondsFormat::Secs
    } else {
        SecondsFormat::Micros
    };
    time.to_rfc3339_opts(format, false)
}
