//! Reading goals

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

const DAILY_PAGES: RangeInclusive<u32> = 1..=30;
const WEEKLY_PAGES: RangeInclusive<u32> = 1..=100;
const MEMORIZATION_TARGET: RangeInclusive<u32> = 1..=30;

/// Personal targets shown on the profile page.
///
/// Every setter clamps into the editable range of its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingGoals {
    /// Pages per day
    pub daily_pages: u32,
    /// Pages per week
    pub weekly_pages: u32,
    /// Juz to memorize
    pub memorization_target: u32,
}

impl Default for ReadingGoals {
    fn default() -> Self {
        Self {
            daily_pages: 5,
            weekly_pages: 35,
            memorization_target: 10,
        }
    }
}

impl ReadingGoals {
    pub fn new(daily_pages: u32, weekly_pages: u32, memorization_target: u32) -> Self {
        let mut goals = Self::default();
        goals.set_daily_pages(daily_pages);
        goals.set_weekly_pages(weekly_pages);
        goals.set_memorization_target(memorization_target);
        goals
    }

    pub fn set_daily_pages(&mut self, pages: u32) {
        self.daily_pages = clamp_into(pages, &DAILY_PAGES);
    }

    pub fn set_weekly_pages(&mut self, pages: u32) {
        self.weekly_pages = clamp_into(pages, &WEEKLY_PAGES);
    }

    pub fn set_memorization_target(&mut self, juz: u32) {
        self.memorization_target = clamp_into(juz, &MEMORIZATION_TARGET);
    }

    /// Same goals with every field pulled into its range
    pub fn clamped(self) -> Self {
        Self::new(self.daily_pages, self.weekly_pages, self.memorization_target)
    }
}

/// Parse a typed goal value; anything unparsable counts as 0
pub fn parse_goal_input(input: &str) -> u32 {
    input.trim().parse().unwrap_or(0)
}

fn clamp_into(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}
