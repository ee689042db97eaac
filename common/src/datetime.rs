//! Date and time utilities.

use std::{
    cmp::Ordering, fmt, marker::PhantomData, ops, str::FromStr,
    time::Duration,
};

use derive_more::{Debug, Display, Error};
use time::{format_description::well_known::Rfc3339, Month, Time, UtcOffset};

/// Untyped date and time.
pub type DateTime = DateTimeOf;

/// UTC date and time.
#[derive(Debug)]
pub struct DateTimeOf<Of: ?Sized = ()> {
    /// Inner representation of the date and time.
    inner: time::OffsetDateTime,

    /// Type parameter describing the kind of date and time.
    #[debug(skip)]
    _of: PhantomData<Of>,
}

impl<Of: ?Sized> DateTimeOf<Of> {
    /// Creates a new [`DateTime`] representing the current date and time.
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn now() -> Self {
        let inner = time::OffsetDateTime::now_utc();
        Self {
            _of: PhantomData,
            inner: inner
                .replace_microsecond(inner.microsecond())
                .expect("infallible"),
        }
    }

    /// Creates a new [`DateTime`] from the provided Unix timestamp.
    ///
    /// [`None`] is returned if the timestamp is invalid.
    #[must_use]
    pub fn from_unix_timestamp(timestamp: i64) -> Option<Self> {
        Some(Self {
            inner: time::OffsetDateTime::from_unix_timestamp(timestamp).ok()?,
            _of: PhantomData,
        })
    }

    /// Creates a new [`DateTime`] from the provided [RFC 3339] string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid [RFC 3339] date and time.
    ///
    /// [RFC 3339]: https://tools.ietf.org/html/rfc3339
    pub fn from_rfc3339(input: &str) -> Result<Self, ParseError> {
        use ParseError as E;

        time::OffsetDateTime::parse(input, &Rfc3339)
            .map_err(E::Parse)?
            .try_into()
            .map_err(E::ComponentRange)
    }

    /// Returns the [`DateTime`] as an [RFC 3339] string.
    ///
    /// [RFC 3339]: https://tools.ietf.org/html/rfc3339
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn to_rfc3339(&self) -> String {
        self.inner.format(&Rfc3339).unwrap_or_else(|e| {
            panic!("cannot format `DateTime` as RFC 3339: {e}")
        })
    }

    /// Coerces one kind of [`DateTime`] into another.
    #[must_use]
    pub fn coerce<NewOf: ?Sized>(self) -> DateTimeOf<NewOf> {
        DateTimeOf {
            inner: self.inner,
            _of: PhantomData,
        }
    }

    /// Returns the midnight starting the calendar day of this [`DateTime`].
    #[must_use]
    pub fn start_of_day(self) -> Self {
        Self {
            inner: self.inner.replace_time(Time::MIDNIGHT),
            _of: PhantomData,
        }
    }

    /// Moves this [`DateTime`] the given number of calendar `months` back.
    ///
    /// The day of month is clamped to the last day of the target month, so
    /// `31 March` minus one month gives the last day of February.
    ///
    /// [`None`] is returned if the result is out of the supported range.
    #[must_use]
    pub fn checked_sub_months(self, months: u32) -> Option<Self> {
        let date = self.inner.date();

        let index = (date.year() * 12 + i32::from(u8::from(date.month()) - 1))
            .checked_sub(i32::try_from(months).ok()?)?;
        let year = index.div_euclid(12);
        let month =
            Month::try_from(u8::try_from(index.rem_euclid(12) + 1).ok()?)
                .ok()?;
        let day = date.day().min(last_day_of(year, month)?);

        let date = time::Date::from_calendar_date(year, month, day).ok()?;
        Some(Self {
            inner: self.inner.replace_date(date),
            _of: PhantomData,
        })
    }

    /// Returns the [`YearMonth`] this [`DateTime`] falls in.
    #[must_use]
    pub fn year_month(&self) -> YearMonth {
        YearMonth::of(self.inner.date())
    }
}

/// Returns the last day of the given `month` in the given `year`.
fn last_day_of(year: i32, month: Month) -> Option<u8> {
    let next_year = if month == Month::December { year + 1 } else { year };
    time::Date::from_calendar_date(next_year, month.next(), 1)
        .ok()
        .and_then(time::Date::previous_day)
        .map(time::Date::day)
        .or_else(|| {
            // The next month is out of range, which only happens for the
            // very last supported December.
            (month == Month::December).then_some(31)
        })
}

/// Error of parsing [`DateTime`] from a string.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ParseError {
    /// Failed to parse the string into an [`DateTime`].
    Parse(time::error::Parse),

    /// Parsed [`DateTime`] has an out of range component.
    ComponentRange(time::error::ComponentRange),
}

impl<Of: ?Sized> Copy for DateTimeOf<Of> {}
impl<Of: ?Sized> Clone for DateTimeOf<Of> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Of: ?Sized> Eq for DateTimeOf<Of> {}
impl<Of: ?Sized> PartialEq for DateTimeOf<Of> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<Of: ?Sized> Ord for DateTimeOf<Of> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<Of: ?Sized> PartialOrd for DateTimeOf<Of> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Of: ?Sized> TryFrom<time::OffsetDateTime> for DateTimeOf<Of> {
    type Error = time::error::ComponentRange;

    fn try_from(dt: time::OffsetDateTime) -> Result<Self, Self::Error> {
        dt.to_offset(UtcOffset::UTC)
            .replace_microsecond(dt.microsecond())
            .map(|inner| Self {
                inner,
                _of: PhantomData,
            })
    }
}

impl<Of: ?Sized> From<DateTimeOf<Of>> for time::OffsetDateTime {
    fn from(dt: DateTimeOf<Of>) -> Self {
        dt.inner
    }
}

impl<Of: ?Sized> ops::Sub<Duration> for DateTimeOf<Of> {
    type Output = Self;

    fn sub(self, rhs: Duration) -> Self::Output {
        Self {
            inner: self.inner - rhs,
            _of: PhantomData,
        }
    }
}

/// Calendar month of a specific year.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct YearMonth(
    /// First day of the month.
    time::Date,
);

impl YearMonth {
    /// Returns the [`YearMonth`] the provided `date` falls in.
    fn of(date: time::Date) -> Self {
        Self(
            time::Date::from_calendar_date(date.year(), date.month(), 1)
                .expect("first day of month always exists"),
        )
    }

    /// Returns the year of this [`YearMonth`].
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month of this [`YearMonth`].
    #[must_use]
    pub fn month(&self) -> Month {
        self.0.month()
    }

    /// Returns a human-readable label of this [`YearMonth`], like `Jan 2024`.
    #[must_use]
    pub fn label(&self) -> String {
        let month = self.month().to_string();
        format!("{} {}", &month[..3], self.year())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), u8::from(self.month()))
    }
}

impl FromStr for YearMonth {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s.split_once('-').ok_or("missing `-`")?;
        if month.len() != 2 {
            return Err("invalid month");
        }

        let year = year.parse::<i32>().map_err(|_| "invalid year")?;
        let month = month
            .parse::<u8>()
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .ok_or("invalid month")?;

        time::Date::from_calendar_date(year, month, 1)
            .map(Self)
            .map_err(|_| "out of range")
    }
}

pub mod serde {
    //! Module providing integration with [`serde`] crate.
    //!
    //! [`serde`]: ::serde

    pub mod rfc3339 {
        //! Module providing serialization and deserialization of
        //! [`DateTimeOf`] as an [RFC 3339] string.
        //!
        //! [RFC 3339]: https://tools.ietf.org/html/rfc3339

        use ::serde::{de::Error, Deserialize as _, Deserializer, Serializer};

        use crate::DateTimeOf;

        /// Serializes the [`DateTimeOf`] as an [RFC 3339] string.
        ///
        /// # Errors
        ///
        /// Returns an error if the `serializer` fails.
        ///
        /// [RFC 3339]: https://tools.ietf.org/html/rfc3339
        pub fn serialize<Of, S>(
            dt: &DateTimeOf<Of>,
            serializer: S,
        ) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
            Of: ?Sized,
        {
            serializer.serialize_str(&dt.to_rfc3339())
        }

        /// Deserializes an [RFC 3339] string into a [`DateTimeOf`].
        ///
        /// # Errors
        ///
        /// Returns an error if the string is not a valid [RFC 3339] date and
        /// time.
        ///
        /// [RFC 3339]: https://tools.ietf.org/html/rfc3339
        pub fn deserialize<'de, D, Of>(
            deserializer: D,
        ) -> Result<DateTimeOf<Of>, D::Error>
        where
            D: Deserializer<'de>,
            Of: ?Sized,
        {
            let s = String::deserialize(deserializer)?;
            DateTimeOf::from_rfc3339(&s).map_err(|e| {
                Error::custom(format!("invalid RFC 3339 date and time: {e}"))
            })
        }
    }
}
