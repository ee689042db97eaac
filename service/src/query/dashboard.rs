//! [`Dashboard`] definition.

use common::operations::{By, Select};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::Sale,
    infra::{database, Database},
    read::sale::{
        Criteria, EvaluationDateTime, Page, Series, StatusCounts, Summary,
    },
    view, Query, Service,
};

/// [`Query`] computing the sales dashboard for the provided
/// [`view::Parameters`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Dashboard {
    /// [`view::Parameters`] to compute the dashboard with.
    pub parameters: view::Parameters,

    /// [`EvaluationDateTime`] to evaluate the [`Period`] filter at.
    ///
    /// [`Period`]: crate::read::sale::Period
    pub now: EvaluationDateTime,
}

/// Output of the [`Dashboard`] [`Query`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Output {
    /// Requested [`Page`] of the matching [`Sale`]s.
    pub page: Page,

    /// [`Summary`] of all the matching [`Sale`]s.
    pub summary: Summary,

    /// [`StatusCounts`] of all the matching [`Sale`]s.
    pub status_counts: StatusCounts,

    /// Monthly [`Series`] of all the matching [`Sale`]s.
    pub series: Series,
}

impl<Db> Query<Dashboard> for Service<Db>
where
    Db: Database<
        Select<By<Vec<Sale>, Criteria>>,
        Ok = Vec<Sale>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Output;
    type Err = Traced<database::Error>;

    #[tracing::instrument(skip_all, name = "query::Dashboard")]
    async fn execute(
        &self,
        Dashboard { parameters, now }: Dashboard,
    ) -> Result<Self::Ok, Self::Err> {
        // Selected once and shared by everything computed below.
        let matching = self
            .database()
            .execute(Select(By::<Vec<Sale>, _>::new(
                parameters.criteria(now),
            )))
            .await
            .map_err(tracerr::wrap!())?;

        let summary = Summary::of(&matching);
        let status_counts = StatusCounts::of(&matching);
        let series = Series::monthly(&matching);
        let page = Page::new(
            matching,
            parameters.pagination(self.config().page_size),
        );

        log::debug!(
            matching = page.total_count,
            page = %page.number,
            total_pages = page.total_pages,
            "dashboard computed",
        );

        Ok(Output {
            page,
            summary,
            status_counts,
            series,
        })
    }
}

#[cfg(test)]
mod spec {
    use std::{num::NonZeroUsize, str::FromStr as _};

    use common::{datetime::YearMonth, operations::Insert, DateTime, Money};

    use crate::{
        domain::{
            sale::{self, Status},
            Sale,
        },
        infra::{Database as _, InProcess, Memory},
        read::sale::{Field, Period},
        view, Config, Service,
    };

    use super::{Dashboard, Output};

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    async fn service(page_size: usize) -> Service<Memory> {
        let memory = Memory::default();
        for (id, client, amount, status, date) in [
            (1, "Acme", "100", Status::Paid, "2024-01-10T09:00:00Z"),
            (2, "Beta", "200", Status::Pending, "2024-02-05T09:00:00Z"),
        ] {
            memory
                .execute(Insert(Sale {
                    id: sale::Id::from(id),
                    client: sale::Client::new(client).unwrap(),
                    amount: money(amount),
                    status,
                    date: DateTime::from_rfc3339(date).unwrap().coerce(),
                }))
                .await
                .unwrap();
        }
        Service::new(
            Config {
                page_size: NonZeroUsize::new(page_size).unwrap(),
            },
            memory,
        )
    }

    fn by_date_asc() -> view::Parameters {
        view::Parameters::default().toggle_sort(Field::Date)
    }

    fn dashboard(parameters: view::Parameters) -> Dashboard {
        Dashboard {
            parameters,
            now: DateTime::from_rfc3339("2024-03-01T00:00:00Z")
                .unwrap()
                .coerce(),
        }
    }

    fn ids(output: &Output) -> Vec<u64> {
        output.page.items.iter().map(|s| s.id.into()).collect()
    }

    #[tokio::test]
    async fn computes_everything_over_filtered_set() {
        let svc = service(15).await;

        let output = svc.execute(dashboard(by_date_asc())).await.unwrap();

        assert_eq!(ids(&output), [1, 2]);
        assert_eq!(output.page.total_pages, 1);
        assert_eq!(output.summary.total, 2);
        assert_eq!(output.summary.total_amount, money("300"));
        assert_eq!(output.summary.average_amount, money("150"));
        assert_eq!(
            output
                .series
                .points()
                .iter()
                .map(|p| (p.month, p.amount))
                .collect::<Vec<_>>(),
            [
                (YearMonth::from_str("2024-01").unwrap(), money("100")),
                (YearMonth::from_str("2024-02").unwrap(), money("200")),
            ],
        );
        assert_eq!(output.status_counts.get(Status::Paid), 1);
        assert_eq!(output.status_counts.get(Status::Pending), 1);
    }

    #[tokio::test]
    async fn filters_by_status() {
        let svc = service(15).await;

        let output = svc
            .execute(dashboard(by_date_asc().with_status(Some(Status::Paid))))
            .await
            .unwrap();

        assert_eq!(ids(&output), [1]);
        assert_eq!(output.summary.total, 1);
        assert_eq!(output.summary.total_amount, money("100"));
        assert_eq!(output.summary.average_amount, money("100"));
        assert_eq!(output.status_counts.get(Status::Pending), 0);
    }

    #[tokio::test]
    async fn paginates_ordered_set() {
        let svc = service(1).await;
        let page = common::pagination::Number::new(2).unwrap();

        let output = svc
            .execute(dashboard(by_date_asc().with_page(page)))
            .await
            .unwrap();

        assert_eq!(ids(&output), [2]);
        assert_eq!(output.page.total_pages, 2);
        assert_eq!(output.summary.total, 2);
    }

    #[tokio::test]
    async fn degrades_to_empty_page_after_filtering() {
        let svc = service(1).await;
        let page = common::pagination::Number::new(2).unwrap();

        let output = svc
            .execute(dashboard(
                by_date_asc().with_page(page).with_period(Period::Week),
            ))
            .await
            .unwrap();

        assert!(output.page.items.is_empty());
        assert_eq!(output.page.total_pages, 1);
        assert_eq!(output.summary.total, 0);
        assert_eq!(output.summary.average_amount, Money::ZERO);
        assert!(output.series.is_empty());
    }

    #[tokio::test]
    async fn computes_same_in_process() {
        let svc = service(15).await;
        let in_process = Service::new(
            *svc.config(),
            InProcess(svc.database().clone()),
        );
        let parameters = view::Parameters::default()
            .with_query("a")
            .toggle_sort(Field::Amount)
            .toggle_sort(Field::Amount);

        assert_eq!(
            svc.execute(dashboard(parameters.clone())).await.unwrap(),
            in_process.execute(dashboard(parameters)).await.unwrap(),
        );
    }
}
