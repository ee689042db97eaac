//! [`Sale`] definitions.

use common::{define_kind, unit, DateTimeOf, Money};
use derive_more::{Display, From, FromStr, Into};

/// Record of a single sale made to a client.
///
/// [`Sale`]s are created by a record source and never mutated afterwards.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Sale {
    /// ID of this [`Sale`].
    pub id: Id,

    /// [`Client`] this [`Sale`] was made to.
    pub client: Client,

    /// Amount of this [`Sale`].
    pub amount: Money,

    /// [`Status`] of this [`Sale`].
    pub status: Status,

    /// [`DateTime`] when this [`Sale`] was made.
    pub date: DateTime,
}

/// ID of a [`Sale`], assigned by a record source.
#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
pub struct Id(u64);

/// Name of a client a [`Sale`] was made to.
#[derive(Clone, Debug, Display, Eq, Ord, PartialEq, PartialOrd)]
pub struct Client(String);

impl Client {
    /// Creates a new [`Client`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Returns the name of this [`Client`].
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks whether the given `name` is a valid [`Client`].
    fn check(name: impl AsRef<str>) -> bool {
        !name.as_ref().trim().is_empty()
    }
}

impl FromStr for Client {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Client`")
    }
}

define_kind! {
    #[doc = "Payment status of a [`Sale`]."]
    enum Status {
        #[doc = "The [`Sale`] is paid."]
        Paid = 1,

        #[doc = "The [`Sale`] awaits payment."]
        Pending = 2,

        #[doc = "The [`Sale`] is cancelled."]
        Cancelled = 3,
    }
}

/// [`DateTime`] when a [`Sale`] was made.
///
/// [`DateTime`]: common::DateTime
pub type DateTime = DateTimeOf<(Sale, unit::Occurrence)>;

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use super::{Client, Status};

    #[test]
    fn rejects_blank_client() {
        assert!(Client::new("Acme").is_some());
        assert!(Client::new(" Acme Corp ").is_some());
        assert!(Client::new("").is_none());
        assert!(Client::new("   ").is_none());
    }

    #[test]
    fn keeps_client_name_as_is() {
        let client = Client::new(" Acme Corp ").unwrap();

        assert_eq!(client.as_str(), " Acme Corp ");
        assert_eq!(client.to_string(), " Acme Corp ");
    }

    #[test]
    fn parses_status() {
        assert_eq!(Status::from_str("paid").unwrap(), Status::Paid);
        assert_eq!(Status::from_str("pending").unwrap(), Status::Pending);
        assert_eq!(Status::from_str("cancelled").unwrap(), Status::Cancelled);
        assert!(Status::from_str("Paid").is_err());
        assert!(Status::from_str("refunded").is_err());
    }
}
