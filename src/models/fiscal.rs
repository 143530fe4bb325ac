//! Fiscal calendar
//!
//! A fiscal year starts in April and ends in March of the following calendar
//! year, and is identified by the calendar year it starts in. Months inside a
//! fiscal year are ordered by a zero-based index: 0 = April, 8 = December,
//! 9 = January, 11 = March.

use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

/// Calendar month (1-indexed) in which the fiscal year begins
pub const FISCAL_YEAR_START_MONTH: u32 = 4;

/// Display labels for the 12 months of a fiscal year, April first
pub const MONTH_LABELS: [&str; 12] = [
    "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月", "1月", "2月", "3月",
];

/// Fiscal year a calendar date belongs to
pub fn fiscal_year_of(date: NaiveDate) -> i32 {
    if date.month() >= FISCAL_YEAR_START_MONTH {
        date.year()
    } else {
        date.year() - 1
    }
}

/// Fiscal-order index (0..=11) of a calendar month (1..=12)
pub fn month_index(month: u32) -> Option<usize> {
    match month {
        4..=12 => Some((month - 4) as usize),
        1..=3 => Some((month + 8) as usize),
        _ => None,
    }
}

/// Calendar month (1..=12) of a fiscal-order index (0..=11)
pub fn month_from_index(index: usize) -> Option<u32> {
    match index {
        0..=8 => Some(index as u32 + 4),
        9..=11 => Some(index as u32 - 8),
        _ => None,
    }
}

/// Calendar year of the month at `index` within `fiscal_year`
///
/// April to December fall in the fiscal year itself; January to March in the
/// next calendar year.
pub fn calendar_year_for(fiscal_year: i32, index: usize) -> i32 {
    if index < 9 {
        fiscal_year
    } else {
        fiscal_year + 1
    }
}

/// A calendar month addressed within a fiscal year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FiscalMonth {
    fiscal_year: i32,
    month: u32,
}

impl FiscalMonth {
    /// Create a fiscal month; `month` is the calendar month (1..=12)
    pub fn new(fiscal_year: i32, month: u32) -> Option<Self> {
        month_index(month).map(|_| Self { fiscal_year, month })
    }

    /// The fiscal month containing a calendar date
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            fiscal_year: fiscal_year_of(date),
            month: date.month(),
        }
    }

    /// The fiscal month containing today's local date
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn fiscal_year(&self) -> i32 {
        self.fiscal_year
    }

    /// Calendar month (1..=12)
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn index(&self) -> usize {
        // month is validated on construction
        month_index(self.month).unwrap_or_default()
    }

    pub fn calendar_year(&self) -> i32 {
        calendar_year_for(self.fiscal_year, self.index())
    }

    pub fn label(&self) -> &'static str {
        MONTH_LABELS[self.index()]
    }

    /// First day of this month in its calendar year
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.calendar_year(), self.month, 1).unwrap_or_default()
    }

    /// Next month, wrapping from March back to April of the same fiscal year
    pub fn next(&self) -> Self {
        self.with_index((self.index() + 1) % 12)
    }

    /// Previous month, wrapping from April to March of the same fiscal year
    pub fn prev(&self) -> Self {
        self.with_index((self.index() + 11) % 12)
    }

    fn with_index(&self, index: usize) -> Self {
        Self {
            fiscal_year: self.fiscal_year,
            month: month_from_index(index).unwrap_or(FISCAL_YEAR_START_MONTH),
        }
    }

    /// Parse a calendar `YYYY-MM` string into its fiscal month
    ///
    /// `2025-02` is February 2025, which belongs to fiscal year 2024.
    pub fn parse(s: &str) -> Result<Self, FiscalParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| FiscalParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year
            .parse()
            .map_err(|_| FiscalParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| FiscalParseError::InvalidFormat(s.to_string()))?;

        if month_index(month).is_none() {
            return Err(FiscalParseError::InvalidMonth(month));
        }

        let fiscal_year = if month >= FISCAL_YEAR_START_MONTH {
            year
        } else {
            year - 1
        };

        Ok(Self { fiscal_year, month })
    }
}

impl fmt::Display for FiscalMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FY{} {} ({:04}-{:02})",
            self.fiscal_year,
            self.label(),
            self.calendar_year(),
            self.month
        )
    }
}

/// Error type for fiscal month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FiscalParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for FiscalParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FiscalParseError::InvalidFormat(s) => write!(f, "Invalid month format: {}", s),
            FiscalParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for FiscalParseError {}
