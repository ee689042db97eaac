//! In-memory [`Database`] implementation.

use std::{
    collections::HashSet,
    sync::{Arc, RwLock, RwLockReadGuard},
};

use common::operations::{By, Insert, Select};
use tracerr::Traced;

use crate::{
    domain::{sale, Sale},
    infra::{database, Database},
    read::sale::Criteria,
};

/// In-memory [`Database`] of [`Sale`]s.
///
/// Clones share the same records. Every read works on a consistent snapshot.
#[derive(Clone, Debug, Default)]
pub struct Memory(Arc<RwLock<Records>>);

/// [`Sale`]s stored in a [`Memory`].
#[derive(Debug, Default)]
struct Records {
    /// [`Sale`]s in their insertion order.
    sales: Vec<Sale>,

    /// [`sale::Id`]s of all the [`Records::sales`].
    ids: HashSet<sale::Id>,
}

impl Memory {
    /// Acquires the records for reading.
    fn read(
        &self,
    ) -> Result<RwLockReadGuard<'_, Records>, Traced<database::Error>> {
        self.0
            .read()
            .map_err(|_| tracerr::new!(database::Error::Poisoned))
    }
}

impl Database<Select<By<Vec<Sale>, ()>>> for Memory {
    type Ok = Vec<Sale>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Sale>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.read().map_err(tracerr::wrap!())?.sales.clone())
    }
}

impl Database<Select<By<Vec<Sale>, Criteria>>> for Memory {
    type Ok = Vec<Sale>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Sale>, Criteria>>,
    ) -> Result<Self::Ok, Self::Err> {
        let criteria = by.into_inner();
        let predicate = criteria.filter.at(criteria.now);

        // Only matching records leave the lock.
        let matching = self
            .read()
            .map_err(tracerr::wrap!())?
            .sales
            .iter()
            .filter(|s| predicate.matches(s))
            .cloned()
            .collect();

        Ok(criteria.sort.apply(matching))
    }
}

impl Database<Insert<Sale>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(sale): Insert<Sale>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut records = self
            .0
            .write()
            .map_err(|_| tracerr::new!(database::Error::Poisoned))?;
        if !records.ids.insert(sale.id) {
            return Err(tracerr::new!(database::Error::DuplicateSale(sale.id)));
        }
        records.sales.push(sale);
        Ok(())
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use common::{
        operations::{By, Insert, Select},
        DateTime, Money,
    };

    use crate::{
        domain::{
            sale::{self, Status},
            Sale,
        },
        infra::{database, Database},
        read::sale::{Criteria, Direction, Field, Filter, Sort},
    };

    use super::Memory;

    fn sale(id: u64, client: &str, status: Status) -> Sale {
        Sale {
            id: id.into(),
            client: sale::Client::new(client).unwrap(),
            amount: Money::from_str("10").unwrap(),
            status,
            date: DateTime::from_rfc3339("2024-01-10T00:00:00Z")
                .unwrap()
                .coerce(),
        }
    }

    async fn memory(sales: impl IntoIterator<Item = Sale>) -> Memory {
        let db = Memory::default();
        for s in sales {
            db.execute(Insert(s)).await.unwrap();
        }
        db
    }

    #[tokio::test]
    async fn returns_all_in_insertion_order() {
        let db = memory([
            sale(2, "Beta", Status::Paid),
            sale(1, "Acme", Status::Pending),
        ])
        .await;

        let all = db
            .execute(Select(By::<Vec<Sale>, _>::new(())))
            .await
            .unwrap();

        assert_eq!(
            all.iter().map(|s| s.id.into()).collect::<Vec<u64>>(),
            [2, 1],
        );
    }

    #[tokio::test]
    async fn rejects_duplicate_ids() {
        let db = memory([sale(1, "Acme", Status::Paid)]).await;

        let err = db
            .execute(Insert(sale(1, "Beta", Status::Paid)))
            .await
            .unwrap_err();

        assert_eq!(err.as_ref(), &database::Error::DuplicateSale(1.into()));

        let all = db
            .execute(Select(By::<Vec<Sale>, _>::new(())))
            .await
            .unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].client.as_str(), "Acme");
    }

    #[tokio::test]
    async fn inserts_many_distinct_ids() {
        let db = memory((1..=5_000).map(|id| sale(id, "Acme", Status::Paid)))
            .await;

        let err = db
            .execute(Insert(sale(2_500, "Beta", Status::Paid)))
            .await
            .unwrap_err();
        assert_eq!(
            err.as_ref(),
            &database::Error::DuplicateSale(2_500.into()),
        );

        db.execute(Insert(sale(5_001, "Beta", Status::Paid)))
            .await
            .unwrap();
        let all = db
            .execute(Select(By::<Vec<Sale>, _>::new(())))
            .await
            .unwrap();
        assert_eq!(all.len(), 5_001);
    }

    #[tokio::test]
    async fn selects_by_criteria() {
        let db = memory([
            sale(1, "Acme", Status::Paid),
            sale(2, "Beta", Status::Pending),
            sale(3, "Gamma", Status::Paid),
        ])
        .await;
        let criteria = Criteria {
            filter: Filter {
                status: Some(Status::Paid),
                ..Filter::default()
            },
            sort: Sort {
                field: Field::Client,
                direction: Direction::Desc,
            },
            now: DateTime::from_rfc3339("2024-06-01T00:00:00Z")
                .unwrap()
                .coerce(),
        };

        let selected = db
            .execute(Select(By::<Vec<Sale>, _>::new(criteria)))
            .await
            .unwrap();

        assert_eq!(
            selected.iter().map(|s| s.id.into()).collect::<Vec<u64>>(),
            [3, 1],
        );
    }

    #[tokio::test]
    async fn shares_records_between_clones() {
        let db = Memory::default();
        let clone = db.clone();

        clone
            .execute(Insert(sale(1, "Acme", Status::Paid)))
            .await
            .unwrap();

        let all = db
            .execute(Select(By::<Vec<Sale>, _>::new(())))
            .await
            .unwrap();
        assert_eq!(all.len(), 1);
    }
}
