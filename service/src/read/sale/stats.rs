//! Aggregate statistics of [`Sale`]s.

use std::collections::HashMap;

use common::Money;

use crate::domain::{sale, Sale};

/// Summary statistics of a set of [`Sale`]s.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    /// Number of [`Sale`]s.
    pub total: usize,

    /// Sum of all the [`Sale::amount`]s.
    pub total_amount: Money,

    /// Average [`Sale::amount`].
    ///
    /// [`Money::ZERO`] if there are no [`Sale`]s.
    pub average_amount: Money,
}

impl Summary {
    /// Summarizes the provided [`Sale`]s in a single pass.
    #[must_use]
    pub fn of<'s>(sales: impl IntoIterator<Item = &'s Sale>) -> Self {
        let (total, total_amount) = sales
            .into_iter()
            .fold((0, Money::ZERO), |(count, sum), s| {
                (count + 1, sum + s.amount)
            });

        Self {
            total,
            total_amount,
            average_amount: total_amount.average(total),
        }
    }
}

/// Number of [`Sale`]s in each [`sale::Status`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StatusCounts(HashMap<sale::Status, usize>);

impl StatusCounts {
    /// Counts the provided [`Sale`]s by their [`sale::Status`].
    #[must_use]
    pub fn of<'s>(sales: impl IntoIterator<Item = &'s Sale>) -> Self {
        let mut counts = HashMap::new();
        for s in sales {
            *counts.entry(s.status).or_insert(0) += 1;
        }
        Self(counts)
    }

    /// Returns the number of [`Sale`]s in the provided [`sale::Status`].
    #[must_use]
    pub fn get(&self, status: sale::Status) -> usize {
        self.0.get(&status).copied().unwrap_or_default()
    }

    /// Iterates over the counts of every [`sale::Status`], including the ones
    /// with no [`Sale`]s, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (sale::Status, usize)> + '_ {
        sale::Status::ALL.iter().map(|&status| (status, self.get(status)))
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use common::{DateTime, Money};

    use crate::domain::{
        sale::{self, Status},
        Sale,
    };

    use super::{StatusCounts, Summary};

    fn sale(id: u64, amount: &str, status: Status) -> Sale {
        Sale {
            id: id.into(),
            client: sale::Client::new("Acme").unwrap(),
            amount: Money::from_str(amount).unwrap(),
            status,
            date: DateTime::from_rfc3339("2024-01-10T00:00:00Z")
                .unwrap()
                .coerce(),
        }
    }

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    #[test]
    fn summarizes_nothing_as_zeroes() {
        let summary = Summary::of(Vec::<&Sale>::new());

        assert_eq!(summary.total, 0);
        assert_eq!(summary.total_amount, Money::ZERO);
        assert_eq!(summary.average_amount, Money::ZERO);
        assert_eq!(summary, Summary::default());
    }

    #[test]
    fn summarizes_sales() {
        let sales = [
            sale(1, "100", Status::Paid),
            sale(2, "200", Status::Pending),
        ];

        assert_eq!(
            Summary::of(&sales),
            Summary {
                total: 2,
                total_amount: money("300"),
                average_amount: money("150"),
            },
        );
    }

    #[test]
    fn keeps_average_exact() {
        let sales = [
            sale(1, "100", Status::Paid),
            sale(2, "0", Status::Paid),
            sale(3, "0", Status::Paid),
        ];

        let summary = Summary::of(&sales);

        assert_eq!(summary.total_amount, money("100"));
        assert_eq!(summary.average_amount.round(), money("33.33"));
    }

    #[test]
    fn summarizes_largest_amounts() {
        let sales = [
            sale(1, "1000000000000000", Status::Paid),
            sale(2, "1000000000000000", Status::Paid),
        ];

        let summary = Summary::of(&sales);

        assert_eq!(summary.total_amount, money("2000000000000000"));
        assert_eq!(summary.average_amount, Money::MAX);
    }

    #[test]
    fn counts_statuses() {
        let sales = [
            sale(1, "1", Status::Paid),
            sale(2, "1", Status::Cancelled),
            sale(3, "1", Status::Paid),
        ];

        let counts = StatusCounts::of(&sales);

        assert_eq!(counts.get(Status::Paid), 2);
        assert_eq!(counts.get(Status::Pending), 0);
        assert_eq!(counts.get(Status::Cancelled), 1);
        assert_eq!(
            counts.iter().collect::<Vec<_>>(),
            [
                (Status::Paid, 2),
                (Status::Pending, 0),
                (Status::Cancelled, 1),
            ],
        );
    }
}
