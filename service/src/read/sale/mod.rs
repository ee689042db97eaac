//! [`Sale`]-related read definitions.

pub mod filter;
pub mod series;
pub mod sort;
pub mod stats;

use common::pagination;

use crate::domain::Sale;

pub use self::{
    filter::{EvaluationDateTime, Filter, Period},
    series::Series,
    sort::{Direction, Field, InvalidSortField, Sort},
    stats::{StatusCounts, Summary},
};

/// Criteria selecting an ordered set of [`Sale`]s.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Criteria {
    /// [`Filter`] the [`Sale`]s should match.
    pub filter: Filter,

    /// [`Sort`] to order the matching [`Sale`]s by.
    pub sort: Sort,

    /// [`EvaluationDateTime`] the [`Filter::period`] is evaluated at.
    pub now: EvaluationDateTime,
}

impl Criteria {
    /// Selects the [`Sale`]s matching these [`Criteria`], in order.
    #[must_use]
    pub fn apply(&self, sales: Vec<Sale>) -> Vec<Sale> {
        self.sort.apply(self.filter.apply(sales, self.now))
    }
}

/// [`pagination::Page`] of [`Sale`]s.
pub type Page = pagination::Page<Sale>;
