//! [`UrlState`] definitions.

use common::pagination;
use serde::{Deserialize, Serialize};

use crate::{domain::sale, read::sale::Period};

use super::Parameters;

/// Part of [`Parameters`] persisted in the dashboard URL.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct UrlState {
    /// Number of the shown page.
    pub page: pagination::Number,

    /// [`sale::Status`] filter, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<sale::Status>,

    /// [`Period`] filter.
    pub period: Period,
}

impl Parameters {
    /// Returns the [`UrlState`] of these [`Parameters`].
    #[must_use]
    pub const fn url_state(&self) -> UrlState {
        UrlState {
            page: self.page,
            status: self.filter.status,
            period: self.filter.period,
        }
    }

    /// Restores the provided [`UrlState`] into these [`Parameters`].
    #[must_use]
    pub fn with_url_state(self, state: UrlState) -> Self {
        self.with_page(state.page)
            .with_status(state.status)
            .with_period(state.period)
    }
}
