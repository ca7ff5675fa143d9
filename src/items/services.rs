use std::cmp::Reverse;

use time::{Date, Month};

use crate::items::repo::ReturnItem;

/// One 7-day window of a month: days 1-7 are week 1, 8-14 week 2, and so
/// on up to week 5 in a 31-day month.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekBucket {
    pub week: u8,
    pub items: Vec<ReturnItem>,
}

impl WeekBucket {
    pub fn label(&self) -> String {
        format!("Week {}", self.week)
    }
}

/// A calendar month of the dashboard timeline.
///
/// Ordering is done on the `(year, month)` pair, never on the display
/// label; reparsing a formatted label is locale-fragile.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGroup {
    pub year: i32,
    pub month: Month,
    pub weeks: Vec<WeekBucket>,
}

impl MonthGroup {
    /// Display label such as "March 2024".
    pub fn label(&self) -> String {
        format!("{} {}", self.month, self.year)
    }
}

pub fn week_of_month(date: Date) -> u8 {
    (date.day() - 1) / 7 + 1
}

/// Case-insensitive substring match on title or description. An empty
/// term matches everything.
pub fn matches_search(item: &ReturnItem, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    item.title.to_lowercase().contains(&term) || item.description.to_lowercase().contains(&term)
}

/// Partition items into the dashboard timeline: months most-recent-first,
/// week windows ascending within a month, insertion order within a week.
/// Callers pass active items; this function does not filter the trash.
pub fn group_by_month(items: impl IntoIterator<Item = ReturnItem>) -> Vec<MonthGroup> {
    let mut groups: Vec<MonthGroup> = Vec::new();

    for item in items {
        let (year, month) = (item.date.year(), item.date.month());
        let week = week_of_month(item.date);

        let group_idx = match groups
            .iter()
            .position(|g| g.year == year && g.month == month)
        {
            Some(idx) => idx,
            None => {
                groups.push(MonthGroup {
                    year,
                    month,
                    weeks: Vec::new(),
                });
                groups.len() - 1
            }
        };
        let group = &mut groups[group_idx];

        let week_idx = match group.weeks.iter().position(|w| w.week == week) {
            Some(idx) => idx,
            None => {
                group.weeks.push(WeekBucket {
                    week,
                    items: Vec::new(),
                });
                group.weeks.len() - 1
            }
        };
        group.weeks[week_idx].items.push(item);
    }

    groups.sort_by_key(|g| Reverse((g.year, u8::from(g.month))));
    for group in &mut groups {
        group.weeks.sort_by_key(|w| w.week);
    }
    groups
}
