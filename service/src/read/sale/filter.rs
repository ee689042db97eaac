//! [`Filter`] of [`Sale`]s.

use std::time::Duration;

use common::{define_kind, unit, DateTimeOf};

use crate::domain::{sale, Sale};

/// [`DateTime`] a computation is evaluated at.
///
/// [`DateTime`]: common::DateTime
pub type EvaluationDateTime = DateTimeOf<unit::Evaluation>;

define_kind! {
    #[doc = "Time period the [`Sale`]s are filtered by."]
    enum Period {
        #[doc = "All [`Sale`]s, regardless of their date."]
        All = 1,

        #[doc = "[`Sale`]s made since the start of the current day."]
        Today = 2,

        #[doc = "[`Sale`]s made during the last 7 days."]
        Week = 3,

        #[doc = "[`Sale`]s made during the last calendar month."]
        Month = 4,

        #[doc = "[`Sale`]s made during the last 3 calendar months."]
        Quarter = 5,
    }
}

impl Default for Period {
    fn default() -> Self {
        Self::All
    }
}

impl Period {
    /// Length of a [`Period::Week`].
    const WEEK: Duration = Duration::from_secs(7 * 24 * 60 * 60);

    /// Returns the earliest [`sale::DateTime`] included into this [`Period`]
    /// when evaluated at `now`.
    ///
    /// [`None`] means that the [`Period`] has no lower bound.
    #[must_use]
    pub fn lower_bound(
        self,
        now: EvaluationDateTime,
    ) -> Option<sale::DateTime> {
        match self {
            Self::All => None,
            Self::Today => Some(now.start_of_day()),
            Self::Week => Some(now - Self::WEEK),
            Self::Month => now.checked_sub_months(1),
            Self::Quarter => now.checked_sub_months(3),
        }
        .map(DateTimeOf::coerce)
    }
}

/// Filter of [`Sale`]s.
///
/// Empty [`Filter`] matches every [`Sale`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Filter {
    /// Text to search in [`Sale::client`], case-insensitively.
    ///
    /// Empty text matches every [`Sale`].
    pub query: String,

    /// [`sale::Status`] to match exactly, if any.
    pub status: Option<sale::Status>,

    /// [`Period`] the [`Sale::date`] should fall into.
    pub period: Period,
}

impl Filter {
    /// Indicates whether this [`Filter`] excludes anything at all.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
            || self.status.is_some()
            || self.period != Period::All
    }

    /// Resolves this [`Filter`] into a [`Predicate`] evaluated at `now`.
    #[must_use]
    pub fn at(&self, now: EvaluationDateTime) -> Predicate {
        Predicate {
            needle: self.query.to_lowercase(),
            status: self.status,
            since: self.period.lower_bound(now),
        }
    }

    /// Keeps only the [`Sale`]s matching this [`Filter`] at `now`,
    /// preserving their order.
    #[must_use]
    pub fn apply(
        &self,
        sales: Vec<Sale>,
        now: EvaluationDateTime,
    ) -> Vec<Sale> {
        let predicate = self.at(now);
        sales.into_iter().filter(|s| predicate.matches(s)).collect()
    }
}

/// [`Filter`] resolved at a specific moment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Predicate {
    /// Lowercased [`Filter::query`].
    needle: String,

    /// [`sale::Status`] to match exactly, if any.
    status: Option<sale::Status>,

    /// Inclusive lower bound of [`Sale::date`], if any.
    since: Option<sale::DateTime>,
}

impl Predicate {
    /// Checks whether the provided [`Sale`] matches this [`Predicate`].
    #[must_use]
    pub fn matches(&self, sale: &Sale) -> bool {
        self.status.map_or(true, |status| sale.status == status)
            && self.since.map_or(true, |since| sale.date >= since)
            && (self.needle.is_empty()
                || sale
                    .client
                    .as_str()
                    .to_lowercase()
                    .contains(self.needle.as_str()))
    }
}
