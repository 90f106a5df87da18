use crate::shared::dates::parse_date;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use time::Date;

/// Upper bound on experience entries per employee.
pub const MAX_EXPERIENCES: usize = 5;

/// A whole number of calendar months, displayed as `"{years}y {months}m"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExperienceSpan {
    months: u32,
}

impl ExperienceSpan {
    pub fn from_months(months: u32) -> Self {
        Self { months }
    }

    /// Calendar months elapsed from `from` to `to`.
    ///
    /// A month is counted once the day-of-month of `from` is reached again,
    /// clamped to the length of the end month (Jan 31 to Feb 29 is one
    /// month). Returns `None` when `to` precedes `from`.
    pub fn between(from: Date, to: Date) -> Option<Self> {
        if to < from {
            return None;
        }
        let mut months = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
        let anchor_day = from
            .day()
            .min(to.month().length(to.year()));
        if to.day() < anchor_day {
            months -= 1;
        }
        u32::try_from(months).ok().map(Self::from_months)
    }

    /// Span for a pair of raw form values; `None` if either is blank or not a
    /// valid date, or if the range is reversed.
    pub fn from_raw(from: &str, to: &str) -> Option<Self> {
        let from = parse_date(from)?;
        let to = parse_date(to)?;
        Self::between(from, to)
    }

    pub fn months(&self) -> u32 {
        self.months
    }

    pub fn years(&self) -> u32 {
        self.months / 12
    }

    pub fn remaining_months(&self) -> u32 {
        self.months % 12
    }
}

impl fmt::Display for ExperienceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}y {}m", self.years(), self.remaining_months())
    }
}

impl Add for ExperienceSpan {
    type Output = ExperienceSpan;

    fn add(self, rhs: Self) -> Self::Output {
        ExperienceSpan::from_months(self.months + rhs.months)
    }
}

impl Sum for ExperienceSpan {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(ExperienceSpan::default(), Add::add)
    }
}

/// Per-entry label: the formatted span, or empty when it cannot be computed.
pub fn entry_label(span: Option<ExperienceSpan>) -> String {
    span.map(|s| s.to_string()).unwrap_or_default()
}

/// Sum over every entry. Incomplete entries count as zero months; an empty
/// list has no total at all.
pub fn total_span<I>(spans: I) -> Option<ExperienceSpan>
where
    I: IntoIterator<Item = Option<ExperienceSpan>>,
{
    let mut spans = spans.into_iter().peekable();
    spans.peek()?;
    Some(spans.flatten().sum())
}

/// Label for [`total_span`]: empty for an empty list.
pub fn total_label<I>(spans: I) -> String
where
    I: IntoIterator<Item = Option<ExperienceSpan>>,
{
    entry_label(total_span(spans))
}
