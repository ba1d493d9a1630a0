use chrono::{Datelike, Duration, Months, NaiveDateTime};
use std::fmt;

/// Elapsed-time breakdown between two instants: whole years, then the
/// remainder expressed in months, weeks, days, hours and minutes, each
/// relative to the coarser units already accounted for.
///
/// Computed once per (start, end) pair; the fields are plain values and stay
/// mutually consistent. Behaviour when `end < start` is unspecified: the
/// arithmetic never panics but fields may come out negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeBreakdown {
    pub years: i64,
    pub months: i64,
    pub weeks: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

impl AgeBreakdown {
    pub fn between(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        let years = whole_years(start, end);
        let months = whole_months(start, end);

        // Truncating modulo, so a negative month count stays negative.
        let remainder_months = months % 12;

        // Year shift first, then month shift, so day-of-month clamping
        // happens in two steps (a Feb 29 start clamps at the year boundary
        // before the months are applied).
        let anchor = shift_months(shift_months(start, years * 12), months);
        let weeks = (end - anchor).num_days() / 7;
        let days = (end - (anchor + Duration::days(weeks * 7))).num_days();

        // Hours and minutes come off the unadjusted full span.
        let span = end - start;
        let hours = (end - (start + Duration::days(span.num_days()))).num_hours();
        let minutes = (end - (start + Duration::hours(span.num_hours()))).num_minutes();

        Self {
            years,
            months: remainder_months,
            weeks,
            days,
            hours,
            minutes,
        }
    }

    /// True when every field is within the range the next coarser unit
    /// implies. Used by tests; spans with a negative month correction fall
    /// outside it.
    pub fn is_normalized(&self) -> bool {
        self.years >= 0
            && (0..=11).contains(&self.months)
            && (0..=5).contains(&self.weeks)
            && (0..=6).contains(&self.days)
            && (0..=23).contains(&self.hours)
            && (0..=59).contains(&self.minutes)
    }
}

impl fmt::Display for AgeBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} years, {} months, {} weeks, {} days, {} hours, {} minutes.",
            self.years, self.months, self.weeks, self.days, self.hours, self.minutes
        )
    }
}

/// Calendar years fully elapsed: the year difference, minus one when `end`
/// has not yet reached the (month, day) anniversary. A matching month and day
/// counts as reached.
fn whole_years(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let mut years = i64::from(end.year() - start.year());
    if (end.month(), end.day()) < (start.month(), start.day()) {
        years -= 1;
    }
    years
}

/// Month-of-year difference corrected for day and time of day. Deliberately
/// not year-adjusted, so it can go negative; the remainder step normalises
/// with `% 12`.
fn whole_months(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let mut months = i64::from(end.month()) - i64::from(start.month());
    if end.day() < start.day() || (end.day() == start.day() && end.time() < start.time()) {
        months -= 1;
    }
    months
}

/// Calendar-aware month shift, clamping the day to the end of the target
/// month (Jan 31 + 1 month = Feb 28/29).
fn shift_months(dt: NaiveDateTime, months: i64) -> NaiveDateTime {
    let shifted = if months >= 0 {
        dt.checked_add_months(Months::new(months as u32))
    } else {
        dt.checked_sub_months(Months::new(months.unsigned_abs() as u32))
    };
    shifted.expect("month shift stays within chrono's representable range")
}
