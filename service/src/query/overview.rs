//! [`Overview`] definition.

use common::{
    operations::{By, Select},
    pagination,
};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::Sale,
    infra::{database, Database},
    read::sale::{Page, Sort, Summary},
    Query, Service,
};

/// [`Query`] computing the landing overview: [`Summary`] of all the
/// [`Sale`]s and the most recent of them.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Overview {
    /// [`pagination::Number`] of the most recent [`Sale`]s [`Page`].
    pub page: pagination::Number,
}

/// Output of the [`Overview`] [`Query`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Output {
    /// [`Page`] of the most recent [`Sale`]s.
    pub recent: Page,

    /// [`Summary`] of all the [`Sale`]s.
    pub summary: Summary,
}

impl<Db> Query<Overview> for Service<Db>
where
    Db: Database<
        Select<By<Vec<Sale>, ()>>,
        Ok = Vec<Sale>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Output;
    type Err = Traced<database::Error>;

    #[tracing::instrument(skip_all, name = "query::Overview")]
    async fn execute(
        &self,
        Overview { page }: Overview,
    ) -> Result<Self::Ok, Self::Err> {
        let all = self
            .database()
            .execute(Select(By::<Vec<Sale>, _>::new(())))
            .await
            .map_err(tracerr::wrap!())?;

        let summary = Summary::of(&all);
        let recent = Page::new(
            Sort::MOST_RECENT.apply(all),
            pagination::Arguments {
                page,
                size: self.config().page_size,
            },
        );

        log::debug!(total = summary.total, "overview computed");

        Ok(Output { recent, summary })
    }
}
