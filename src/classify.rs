use crate::models::{Category, CategorySummary, MemberRecord};
use chrono::{DateTime, Datelike, Local, NaiveDate};

/// Whole-day offset between the reference date and a member's date field.
/// Missing and unparsable inputs stay distinguishable here; both collapse
/// to "not in any date bucket" at the predicate boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayOffset {
    Days(i64),
    Missing,
    Unparsable,
}

impl DayOffset {
    pub fn days(self) -> Option<i64> {
        match self {
            DayOffset::Days(offset) => Some(offset),
            DayOffset::Missing | DayOffset::Unparsable => None,
        }
    }
}

pub fn classify<'a>(roster: &'a [MemberRecord], category: Category) -> Vec<&'a MemberRecord> {
    classify_at(Local::now().date_naive(), roster, category)
}

/// Filters the roster down to the members matching `category`, anchored
/// at `today`. The result borrows from the roster in roster order.
pub fn classify_at<'a>(
    today: NaiveDate,
    roster: &'a [MemberRecord],
    category: Category,
) -> Vec<&'a MemberRecord> {
    roster
        .iter()
        .filter(|member| matches_category(today, member, category))
        .collect()
}

pub fn summary(roster: &[MemberRecord]) -> CategorySummary {
    summary_at(Local::now().date_naive(), roster)
}

pub fn summary_at(today: NaiveDate, roster: &[MemberRecord]) -> CategorySummary {
    CategorySummary {
        monthly_joined: classify_at(today, roster, Category::MonthlyJoined).len(),
        expiring_in_3_days: classify_at(today, roster, Category::ExpiringIn3Days).len(),
        expiring_in_4_to_7_days: classify_at(today, roster, Category::ExpiringIn4To7Days).len(),
        expired: classify_at(today, roster, Category::Expired).len(),
        inactive: classify_at(today, roster, Category::Inactive).len(),
    }
}

fn matches_category(today: NaiveDate, member: &MemberRecord, category: Category) -> bool {
    match category {
        Category::MonthlyJoined => member
            .created_at
            .as_deref()
            .and_then(parse_date)
            .is_some_and(|joined| joined.year() == today.year() && joined.month() == today.month()),
        Category::ExpiringIn3Days => bill_offset_within(today, member, 0, 3),
        Category::ExpiringIn4To7Days => bill_offset_within(today, member, 4, 7),
        Category::Expired => days_until(member.next_bill_date.as_deref(), today)
            .days()
            .is_some_and(|offset| offset < 0),
        Category::Inactive => !member.is_active(),
    }
}

fn bill_offset_within(today: NaiveDate, member: &MemberRecord, from: i64, to: i64) -> bool {
    days_until(member.next_bill_date.as_deref(), today)
        .days()
        .is_some_and(|offset| (from..=to).contains(&offset))
}

/// Signed count of whole calendar days from `today` to `value`, both
/// truncated to midnight. Negative means the date is already past.
pub fn days_until(value: Option<&str>, today: NaiveDate) -> DayOffset {
    let Some(raw) = value else {
        return DayOffset::Missing;
    };
    if raw.trim().is_empty() {
        return DayOffset::Missing;
    }
    match parse_date(raw) {
        Some(target) => DayOffset::Days(target.signed_duration_since(today).num_days()),
        None => DayOffset::Unparsable,
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
