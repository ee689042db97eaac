//! [`Sort`] of [`Sale`]s.

use std::{cmp::Ordering, str::FromStr as _};

use common::define_kind;
use derive_more::{Display, Error};

use crate::domain::Sale;

define_kind! {
    #[doc = "Field of a [`Sale`] to sort by."]
    enum Field {
        #[doc = "[`Sale::id`], compared numerically."]
        Id = 1,

        #[doc = "[`Sale::client`], compared lexicographically."]
        Client = 2,

        #[doc = "[`Sale::amount`], compared numerically."]
        Amount = 3,

        #[doc = "[`Sale::status`], compared lexicographically by name."]
        Status = 4,

        #[doc = "[`Sale::date`], compared chronologically."]
        Date = 5,
    }
}

impl Field {
    /// Parses a [`Field`] out of its `name`.
    ///
    /// # Errors
    ///
    /// With [`InvalidSortField`] if there is no such [`Field`].
    pub fn parse(name: &str) -> Result<Self, InvalidSortField> {
        Self::from_str(name).map_err(|_| InvalidSortField(name.to_owned()))
    }

    /// Compares the provided [`Sale`]s by this [`Field`] in ascending order.
    #[must_use]
    pub fn compare(self, a: &Sale, b: &Sale) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Client => a.client.cmp(&b.client),
            Self::Amount => a.amount.cmp(&b.amount),
            Self::Status => a.status.as_str().cmp(b.status.as_str()),
            Self::Date => a.date.cmp(&b.date),
        }
    }
}

define_kind! {
    #[doc = "Direction to sort [`Sale`]s in."]
    enum Direction {
        #[doc = "From the smallest to the largest."]
        Asc = 1,

        #[doc = "From the largest to the smallest."]
        Desc = 2,
    }
}

impl Direction {
    /// Returns the opposite [`Direction`].
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Error of sorting by an unsupported [`Field`].
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
#[display("unsupported sort field `{_0}`")]
pub struct InvalidSortField(#[error(not(source))] pub String);

/// Order of [`Sale`]s.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Sort {
    /// [`Field`] to sort by.
    pub field: Field,

    /// [`Direction`] to sort in.
    pub direction: Direction,
}

impl Default for Sort {
    fn default() -> Self {
        Self {
            field: Field::Id,
            direction: Direction::Asc,
        }
    }
}

impl Sort {
    /// The most recent [`Sale`]s first.
    pub const MOST_RECENT: Self = Self {
        field: Field::Date,
        direction: Direction::Desc,
    };

    /// Creates a new [`Sort`] by the [`Field`] with the given `name`.
    ///
    /// # Errors
    ///
    /// With [`InvalidSortField`] if there is no such [`Field`].
    pub fn by_name(
        name: &str,
        direction: Direction,
    ) -> Result<Self, InvalidSortField> {
        Ok(Self {
            field: Field::parse(name)?,
            direction,
        })
    }

    /// Compares the provided [`Sale`]s according to this [`Sort`].
    #[must_use]
    pub fn compare(&self, a: &Sale, b: &Sale) -> Ordering {
        let ordering = self.field.compare(a, b);
        match self.direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }

    /// Orders the provided [`Sale`]s according to this [`Sort`].
    ///
    /// The order is stable: [`Sale`]s with equal keys keep their relative
    /// order.
    #[must_use]
    pub fn apply(&self, mut sales: Vec<Sale>) -> Vec<Sale> {
        sales.sort_by(|a, b| self.compare(a, b));
        sales
    }
}
