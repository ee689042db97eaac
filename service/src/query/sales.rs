//! [`Query`] collection related to the multiple [`Sale`]s.

use common::operations::By;

use crate::{domain::Sale, read::sale::Criteria};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries the [`Sale`]s matching the [`Criteria`], in order.
pub type Matching = DatabaseQuery<By<Vec<Sale>, Criteria>>;
