//! Birthday value type and upcoming-birthday arithmetic.
//!
//! # Invariants
//! - A specified birthday is a real calendar date that is not after the day it
//!   was validated on.
//! - Blank input means "unspecified" and is valid.
//! - `Display` renders `ddMonyyyy` (e.g. `29Feb2024`) and re-parses to the same date.

use super::field::{FieldError, FieldKind};
use chrono::{Datelike, Local, Month, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Display, Formatter};

pub const BIRTHDAY_CONSTRAINTS: &str = "Birthdays should look like 29Feb2024: a day, a month \
name and a 4-digit year. The date must exist and must not be in the future";

pub const BIRTH_MONTH_CONSTRAINTS: &str =
    "Birth months should be a month name such as Jan or January (case-insensitive)";

const DISPLAY_FORMAT: &str = "%d%b%Y";

static BIRTHDAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,2})([A-Za-z]+)([0-9]{4})$").expect("valid birthday regex")
});

/// Optional date of birth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Birthday(Option<NaiveDate>);

impl Birthday {
    /// Parses `raw`, rejecting dates after the current local date.
    pub fn new(raw: &str) -> Result<Self, FieldError> {
        Self::parse_on(raw, today())
    }

    /// Parses `raw`, rejecting dates after `today`.
    pub fn parse_on(raw: &str, today: NaiveDate) -> Result<Self, FieldError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self(None));
        }
        parse_date(trimmed)
            .filter(|date| *date <= today)
            .map(|date| Self(Some(date)))
            .ok_or_else(|| FieldError::new(FieldKind::Birthday, raw))
    }

    pub fn unspecified() -> Self {
        Self(None)
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.0
    }

    pub fn is_specified(&self) -> bool {
        self.0.is_some()
    }

    pub fn birth_month(&self) -> Option<Month> {
        let month = u8::try_from(self.0?.month()).ok()?;
        Month::try_from(month).ok()
    }

    /// Whole days from `today` to the next occurrence of this birthday.
    ///
    /// Returns `0` on the birthday itself. A 29 Feb birthday falls on 1 Mar in
    /// non-leap years. `None` when the birthday is unspecified.
    pub fn days_until_birthday(&self, today: NaiveDate) -> Option<i64> {
        let date = self.0?;
        let already_passed = (date.month(), date.day()) < (today.month(), today.day());
        let year = if already_passed {
            today.year() + 1
        } else {
            today.year()
        };
        let next = NaiveDate::from_ymd_opt(year, date.month(), date.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))?;
        Some(next.signed_duration_since(today).num_days())
    }

    pub fn describe(&self) -> String {
        match self.0 {
            Some(date) => format!("Birthday is {}", date.format(DISPLAY_FORMAT)),
            None => "No specified Birthday.".to_string(),
        }
    }

    pub fn describe_days_until(&self, today: NaiveDate) -> String {
        match self.days_until_birthday(today) {
            Some(days) => format!("{days} More Days Till Their Birthday!"),
            None => "No days till an unspecified birthday!".to_string(),
        }
    }
}

/// Returns whether `raw` is blank or a real, non-future birthday.
pub fn is_valid_birthday(raw: &str) -> bool {
    Birthday::new(raw).is_ok()
}

/// Parses a month keyphrase such as `jan` or `January`.
pub fn parse_birth_month(raw: &str) -> Result<Month, FieldError> {
    raw.trim()
        .parse::<Month>()
        .map_err(|_| FieldError::new(FieldKind::BirthMonth, raw))
}

/// Current local calendar date; time of day is dropped.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let caps = BIRTHDAY_RE.captures(raw)?;
    let day = caps.get(1)?.as_str().parse::<u32>().ok()?;
    let month = caps.get(2)?.as_str().parse::<Month>().ok()?;
    let year = caps.get(3)?.as_str().parse::<i32>().ok()?;
    NaiveDate::from_ymd_opt(year, month.number_from_month(), day)
}

impl Display for Birthday {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{}", date.format(DISPLAY_FORMAT)),
            None => Ok(()),
        }
    }
}
