//! Abstractions for page-number pagination.

use std::{num::NonZeroUsize, str::FromStr};

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Number of a [`Page`], starting from `1`.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct Number(NonZeroUsize);

impl Number {
    /// The first [`Page`].
    pub const FIRST: Self = Self(NonZeroUsize::MIN);

    /// Creates a new [`Number`] if the provided `number` is positive.
    #[must_use]
    pub const fn new(number: usize) -> Option<Self> {
        match NonZeroUsize::new(number) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Returns this [`Number`] as a [`usize`].
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::FIRST
    }
}

impl FromStr for Number {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<NonZeroUsize>()
            .map(Self)
            .map_err(|_| "page number must be a positive integer")
    }
}

/// Pagination arguments.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Arguments {
    /// [`Number`] of the requested [`Page`].
    pub page: Number,

    /// Maximum number of items on a [`Page`].
    pub size: NonZeroUsize,
}

impl Arguments {
    /// Returns the index of the first item of the requested [`Page`].
    #[must_use]
    pub const fn offset(&self) -> usize {
        (self.page.get() - 1).saturating_mul(self.size.get())
    }
}

/// Returns the number of [`Page`]s of the given `size` required to hold
/// `count` items.
///
/// There is always at least one [`Page`], even if there are no items.
#[must_use]
pub const fn total_pages(count: usize, size: NonZeroUsize) -> usize {
    let pages = count.div_ceil(size.get());
    if pages == 0 {
        1
    } else {
        pages
    }
}

/// A page of ordered `T`s.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Page<T> {
    /// Items on this [`Page`].
    pub items: Vec<T>,

    /// [`Number`] of this [`Page`].
    pub number: Number,

    /// Total number of [`Page`]s.
    pub total_pages: usize,

    /// Total number of items on all the [`Page`]s.
    pub total_count: usize,
}

impl<T> Page<T> {
    /// Slices the requested [`Page`] out of the `ordered` items.
    ///
    /// Requesting a [`Page`] beyond the last one gives an empty [`Page`].
    #[must_use]
    pub fn new(ordered: Vec<T>, arguments: Arguments) -> Self {
        let total_count = ordered.len();
        let items = ordered
            .into_iter()
            .skip(arguments.offset())
            .take(arguments.size.get())
            .collect();

        Self {
            items,
            number: arguments.page,
            total_pages: total_pages(total_count, arguments.size),
            total_count,
        }
    }

    /// Indicates whether there is a [`Page`] after this one.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.number.get() < self.total_pages
    }

    /// Indicates whether there is a [`Page`] before this one.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.number > Number::FIRST
    }
}
