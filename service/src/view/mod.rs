//! View state of the sales dashboard.
//!
//! [`Parameters`] are immutable: every transition returns new [`Parameters`],
//! and the caller is expected to recompute the dashboard afterwards.

pub mod raw;
pub mod url;

use std::num::NonZeroUsize;

use common::pagination;

use crate::{
    domain::sale,
    read::sale::{
        Criteria, Direction, EvaluationDateTime, Field, Filter, Period, Sort,
    },
};

pub use self::{
    raw::{RawParameters, ValidationError},
    url::UrlState,
};

/// Parameters controlling what the sales dashboard shows.
///
/// Changing filters or [`Sort`] never resets the [`Parameters::page`]: a page
/// beyond the last one is rendered empty.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Parameters {
    /// [`Filter`] of the shown [`Sale`]s.
    ///
    /// [`Sale`]: crate::domain::Sale
    filter: Filter,

    /// [`Sort`] of the shown [`Sale`]s.
    ///
    /// [`Sale`]: crate::domain::Sale
    sort: Sort,

    /// Number of the shown page.
    page: pagination::Number,
}

/// Transition of [`Parameters`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    /// Replace the searched text.
    SetQuery(String),

    /// Replace the [`sale::Status`] filter.
    SetStatus(Option<sale::Status>),

    /// Replace the [`Period`] filter.
    SetPeriod(Period),

    /// Sort by the [`Field`], flipping the [`Direction`] if already sorted by
    /// it.
    ToggleSort(Field),

    /// Clear all the filters and show the most recent [`Sale`]s first.
    ///
    /// [`Sale`]: crate::domain::Sale
    ResetFilters,

    /// Go to the page with the provided [`pagination::Number`].
    GoToPage(pagination::Number),
}

impl Parameters {
    /// Returns the [`Filter`] of these [`Parameters`].
    #[must_use]
    pub const fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Returns the [`Sort`] of these [`Parameters`].
    #[must_use]
    pub const fn sort(&self) -> Sort {
        self.sort
    }

    /// Returns the page [`pagination::Number`] of these [`Parameters`].
    #[must_use]
    pub const fn page(&self) -> pagination::Number {
        self.page
    }

    /// Applies the provided [`Action`] to these [`Parameters`].
    #[must_use]
    pub fn apply(self, action: Action) -> Self {
        match action {
            Action::SetQuery(query) => self.with_query(query),
            Action::SetStatus(status) => self.with_status(status),
            Action::SetPeriod(period) => self.with_period(period),
            Action::ToggleSort(field) => self.toggle_sort(field),
            Action::ResetFilters => self.reset_filters(),
            Action::GoToPage(page) => self.with_page(page),
        }
    }

    /// Replaces the searched text.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.filter.query = query.into();
        self
    }

    /// Replaces the [`sale::Status`] filter.
    #[must_use]
    pub fn with_status(mut self, status: Option<sale::Status>) -> Self {
        self.filter.status = status;
        self
    }

    /// Replaces the [`Period`] filter.
    #[must_use]
    pub fn with_period(mut self, period: Period) -> Self {
        self.filter.period = period;
        self
    }

    /// Sorts by the provided [`Field`].
    ///
    /// If already sorted by this [`Field`], flips the [`Direction`],
    /// otherwise sorts in [`Direction::Asc`].
    #[must_use]
    pub fn toggle_sort(mut self, field: Field) -> Self {
        self.sort = if self.sort.field == field {
            Sort {
                field,
                direction: self.sort.direction.flipped(),
            }
        } else {
            Sort {
                field,
                direction: Direction::Asc,
            }
        };
        self
    }

    /// Clears all the filters and sorts by [`Sort::MOST_RECENT`].
    ///
    /// The page stays unchanged.
    #[must_use]
    pub fn reset_filters(self) -> Self {
        Self {
            filter: Filter::default(),
            sort: Sort::MOST_RECENT,
            page: self.page,
        }
    }

    /// Goes to the page with the provided [`pagination::Number`].
    #[must_use]
    pub fn with_page(mut self, page: pagination::Number) -> Self {
        self.page = page;
        self
    }

    /// Indicates whether any filter is applied.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        self.filter.is_active()
    }

    /// Returns the [`Direction`] the dashboard is sorted in, if it's sorted
    /// by the provided [`Field`].
    #[must_use]
    pub fn sort_direction_of(&self, field: Field) -> Option<Direction> {
        (self.sort.field == field).then_some(self.sort.direction)
    }

    /// Returns [`Criteria`] selecting the [`Sale`]s to show at `now`.
    ///
    /// [`Sale`]: crate::domain::Sale
    #[must_use]
    pub fn criteria(&self, now: EvaluationDateTime) -> Criteria {
        Criteria {
            filter: self.filter.clone(),
            sort: self.sort,
            now,
        }
    }

    /// Returns [`pagination::Arguments`] for the pages of the provided `size`.
    #[must_use]
    pub const fn pagination(
        &self,
        size: NonZeroUsize,
    ) -> pagination::Arguments {
        pagination::Arguments {
            page: self.page,
            size,
        }
    }
}
