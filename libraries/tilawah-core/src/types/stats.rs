//! Reading statistics

use serde::{Deserialize, Serialize};

/// Aggregate reading numbers for the statistics page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingStats {
    pub total_pages: u32,
    pub pages_this_month: u32,
    pub pages_last_month: u32,
    pub average_daily_pages: f64,
    pub current_streak: u32,
    pub longest_streak: u32,
}

impl ReadingStats {
    /// Current streak as a share of the longest one, capped at 100
    pub fn streak_percent(&self) -> u32 {
        if self.longest_streak == 0 {
            return 0;
        }
        let percent =
            (f64::from(self.current_streak) / f64::from(self.longest_streak) * 100.0).round();
        (percent as u32).min(100)
    }

    /// Month-over-month change in pages read, rounded; 0 without a baseline
    pub fn monthly_change_percent(&self) -> i64 {
        if self.pages_last_month == 0 {
            return 0;
        }
        let change = i64::from(self.pages_this_month) - i64::from(self.pages_last_month);
        (change as f64 / f64::from(self.pages_last_month) * 100.0).round() as i64
    }
}

/// Pages read in one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPages {
    pub month: String,
    pub pages: u32,
}

impl MonthlyPages {
    pub fn new(month: impl Into<String>, pages: u32) -> Self {
        Self {
            month: month.into(),
            pages,
        }
    }
}

pub fn yearly_total(months: &[MonthlyPages]) -> u32 {
    months.iter().map(|m| m.pages).sum()
}

/// Average over the months that have any reading at all
pub fn average_active_month(months: &[MonthlyPages]) -> u32 {
    let active = months.iter().filter(|m| m.pages > 0).count().max(1);
    (f64::from(yearly_total(months)) / active as f64).round() as u32
}
