//! Month-bucketed [`Series`] of [`Sale`] amounts.

use std::collections::BTreeMap;

use common::{datetime::YearMonth, Money};
use rust_decimal::Decimal;

use crate::domain::Sale;

/// Total amount of [`Sale`]s made during a single month.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Point {
    /// [`YearMonth`] of this [`Point`].
    pub month: YearMonth,

    /// Sum of the [`Sale::amount`]s made during the [`Point::month`].
    pub amount: Money,
}

impl Point {
    /// Returns the chart label of this [`Point`], like `Jan 2024`.
    #[must_use]
    pub fn label(&self) -> String {
        self.month.label()
    }
}

/// [`Point`]s ordered ascending by their [`YearMonth`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Series(Vec<Point>);

impl Series {
    /// Groups the provided [`Sale`]s by their month, summing the amounts.
    ///
    /// Months without any [`Sale`]s are omitted.
    #[must_use]
    pub fn monthly<'s>(sales: impl IntoIterator<Item = &'s Sale>) -> Self {
        let mut buckets = BTreeMap::<YearMonth, Money>::new();
        for s in sales {
            *buckets.entry(s.date.year_month()).or_default() += s.amount;
        }
        Self(
            buckets
                .into_iter()
                .map(|(month, amount)| Point { month, amount })
                .collect(),
        )
    }

    /// Returns the [`Point`]s of this [`Series`].
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Indicates whether this [`Series`] has no [`Point`]s.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the chart labels of this [`Series`].
    pub fn labels(&self) -> impl Iterator<Item = String> + '_ {
        self.0.iter().map(Point::label)
    }

    /// Returns the chart values of this [`Series`], rounded to whole cents.
    pub fn values(&self) -> impl Iterator<Item = Decimal> + '_ {
        self.0.iter().map(|p| p.amount.round().amount())
    }

    /// Returns the sum of all the [`Point`]s.
    #[must_use]
    pub fn total(&self) -> Money {
        self.0.iter().map(|p| p.amount).sum()
    }
}
