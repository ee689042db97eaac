//! [`InProcess`] [`Database`] adapter.

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::Sale,
    infra::{database, Database},
    read::sale::Criteria,
};

/// [`Database`] adapter selecting [`Sale`]s by [`Criteria`] in-process.
///
/// Wraps a [`Database`] able to return all the [`Sale`]s only, and applies
/// [`Criteria`] to them after they're fetched.
#[derive(Clone, Copy, Debug, Default)]
pub struct InProcess<Db>(pub Db);

impl<Db> Database<Select<By<Vec<Sale>, ()>>> for InProcess<Db>
where
    Db: Database<
        Select<By<Vec<Sale>, ()>>,
        Ok = Vec<Sale>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Vec<Sale>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        select: Select<By<Vec<Sale>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.0.execute(select).await.map_err(tracerr::wrap!())
    }
}

impl<Db> Database<Select<By<Vec<Sale>, Criteria>>> for InProcess<Db>
where
    Db: Database<
        Select<By<Vec<Sale>, ()>>,
        Ok = Vec<Sale>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Vec<Sale>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Sale>, Criteria>>,
    ) -> Result<Self::Ok, Self::Err> {
        let all = self
            .0
            .execute(Select(By::<Vec<Sale>, _>::new(())))
            .await
            .map_err(tracerr::wrap!())?;
        Ok(by.into_inner().apply(all))
    }
}
