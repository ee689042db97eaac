//! [`RawParameters`] definitions.

use std::str::FromStr as _;

use common::pagination;
use derive_more::{Display, Error, From};
use serde::Deserialize;

use crate::{
    domain::sale,
    read::sale::{Direction, Filter, InvalidSortField, Period, Sort},
};

use super::Parameters;

/// Untrusted [`Parameters`], as provided by a client (in URL query, for
/// example).
///
/// Missing and empty values mean defaults.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RawParameters {
    /// Searched text.
    pub query: Option<String>,

    /// Name of a [`sale::Status`] to filter by.
    pub status: Option<String>,

    /// Name of a [`Period`] to filter by.
    pub period: Option<String>,

    /// Name of a [`Field`] to sort by.
    ///
    /// [`Field`]: crate::read::sale::Field
    pub sort_by: Option<String>,

    /// Name of a [`Direction`] to sort in.
    pub sort_dir: Option<String>,

    /// Number of the page to show.
    pub page: Option<String>,
}

/// Error of validating [`RawParameters`].
#[derive(Clone, Debug, Display, Eq, Error, From, PartialEq)]
pub enum ValidationError {
    /// Unknown [`sale::Status`].
    #[display("invalid `status` parameter: `{_0}`")]
    #[from(ignore)]
    Status(#[error(not(source))] String),

    /// Unknown [`Period`].
    #[display("invalid `period` parameter: `{_0}`")]
    #[from(ignore)]
    Period(#[error(not(source))] String),

    /// Unsupported sort field.
    #[display("invalid `sortBy` parameter: {_0}")]
    SortField(InvalidSortField),

    /// Unknown [`Direction`].
    #[display("invalid `sortDir` parameter: `{_0}`")]
    #[from(ignore)]
    SortDirection(#[error(not(source))] String),

    /// Not a positive page number.
    #[display("invalid `page` parameter: `{_0}`")]
    #[from(ignore)]
    Page(#[error(not(source))] String),
}

/// Returns the provided `value` unless it's missing or empty.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl TryFrom<RawParameters> for Parameters {
    type Error = ValidationError;

    fn try_from(raw: RawParameters) -> Result<Self, Self::Error> {
        let status = non_empty(raw.status)
            .map(|s| {
                sale::Status::from_str(&s)
                    .map_err(|_| ValidationError::Status(s))
            })
            .transpose()?;
        let period = non_empty(raw.period)
            .map(|p| {
                Period::from_str(&p).map_err(|_| ValidationError::Period(p))
            })
            .transpose()?
            .unwrap_or_default();
        let direction = non_empty(raw.sort_dir)
            .map(|d| {
                Direction::from_str(&d)
                    .map_err(|_| ValidationError::SortDirection(d))
            })
            .transpose()?
            .unwrap_or(Direction::Asc);
        let sort = match non_empty(raw.sort_by) {
            Some(field) => Sort::by_name(&field, direction)?,
            None => Sort {
                direction,
                ..Sort::default()
            },
        };
        let page = non_empty(raw.page)
            .map(|p| {
                pagination::Number::from_str(&p)
                    .map_err(|_| ValidationError::Page(p))
            })
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            filter: Filter {
                query: raw.query.unwrap_or_default(),
                status,
                period,
            },
            sort,
            page,
        })
    }
}
