//! Expiry urgency classification
//!
//! Days are whole calendar days between two dates; time of day never enters
//! the calculation.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Calendar days from `today` until `expiry` (negative once expired)
pub fn days_remaining(expiry: NaiveDate, today: NaiveDate) -> i64 {
    (expiry - today).num_days()
}

/// Urgency band of a single expiry date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyBand {
    /// Already past the expiry date
    Expired,
    /// 0 to 7 days left
    Critical,
    /// 8 to 30 days left
    Medium,
    /// More than 30 days left
    Valid,
}

impl UrgencyBand {
    /// Upper bound (inclusive) of the critical band, in days
    pub const CRITICAL_DAYS: i64 = 7;
    /// Upper bound (inclusive) of the medium band, in days
    pub const MEDIUM_DAYS: i64 = 30;

    /// Classify a day count
    pub fn classify(days: i64) -> Self {
        if days < 0 {
            UrgencyBand::Expired
        } else if days <= Self::CRITICAL_DAYS {
            UrgencyBand::Critical
        } else if days <= Self::MEDIUM_DAYS {
            UrgencyBand::Medium
        } else {
            UrgencyBand::Valid
        }
    }

    /// Classify an expiry date as seen on `today`
    pub fn for_dates(expiry: NaiveDate, today: NaiveDate) -> Self {
        Self::classify(days_remaining(expiry, today))
    }
}

impl fmt::Display for UrgencyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrgencyBand::Expired => write!(f, "expired"),
            UrgencyBand::Critical => write!(f, "critical"),
            UrgencyBand::Medium => write!(f, "medium"),
            UrgencyBand::Valid => write!(f, "valid"),
        }
    }
}

/// Coarse three-way category used for dashboard statistics.
///
/// Anything within 30 days counts as expired here, which is stricter than
/// [`UrgencyBand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    Expired,
    ExpiringSoon,
    Valid,
}

impl StatusCategory {
    pub fn classify(days: i64) -> Self {
        if days <= 30 {
            StatusCategory::Expired
        } else if days <= 60 {
            StatusCategory::ExpiringSoon
        } else {
            StatusCategory::Valid
        }
    }
}

/// Aggregate counts over a set of expiry dates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExpiryStats {
    /// Every input, including those without a date
    pub total: usize,
    pub expired: usize,
    pub expiring_soon: usize,
    pub valid: usize,
    pub percentage_valid: u32,
    pub percentage_expired: u32,
    pub percentage_expiring_soon: u32,
}

impl ExpiryStats {
    /// Count categories for `dates` as seen on `today`.
    ///
    /// Missing dates add to `total` only. Percentages are rounded against
    /// `total`, so they need not sum to 100.
    pub fn from_dates<I>(dates: I, today: NaiveDate) -> Self
    where
        I: IntoIterator<Item = Option<NaiveDate>>,
    {
        let mut stats = ExpiryStats::default();

        for date in dates {
            stats.total += 1;
            let Some(expiry) = date else {
                continue;
            };
            match StatusCategory::classify(days_remaining(expiry, today)) {
                StatusCategory::Expired => stats.expired += 1,
                StatusCategory::ExpiringSoon => stats.expiring_soon += 1,
                StatusCategory::Valid => stats.valid += 1,
            }
        }

        if stats.total > 0 {
            stats.percentage_valid = percentage(stats.valid, stats.total);
            stats.percentage_expired = percentage(stats.expired, stats.total);
            stats.percentage_expiring_soon = percentage(stats.expiring_soon, stats.total);
        }

        stats
    }
}

fn percentage(part: usize, total: usize) -> u32 {
    ((part as f64 / total as f64) * 100.0).round() as u32
}

#[cfg(test)]
#[path = "urgency_test.rs"]
mod tests;
