//! Loading of [`Sale`] records.

use std::{fs, io, path::Path};

use common::{datetime, operations::Insert, Money};
use derive_more::{Display, Error, From};
use rust_decimal::Decimal;
use serde::Deserialize;
use service::{
    domain::{sale, Sale},
    infra::{database, Database as _, Memory},
};
use tracerr::Traced;

/// [`Sale`] as stored in a JSON records file.
#[derive(Debug, Deserialize)]
struct Record {
    /// ID of the [`Sale`].
    id: u64,

    /// Client name of the [`Sale`].
    client: String,

    /// Amount of the [`Sale`], as a decimal string or number.
    amount: Decimal,

    /// [`sale::Status`] of the [`Sale`].
    status: sale::Status,

    /// [RFC 3339] date and time of the [`Sale`].
    ///
    /// [RFC 3339]: https://tools.ietf.org/html/rfc3339
    #[serde(with = "datetime::serde::rfc3339")]
    date: sale::DateTime,
}

impl TryFrom<Record> for Sale {
    type Error = LoadError;

    fn try_from(record: Record) -> Result<Self, Self::Error> {
        let Record {
            id,
            client,
            amount,
            status,
            date,
        } = record;
        let id = sale::Id::from(id);

        Ok(Self {
            id,
            client: sale::Client::new(client)
                .ok_or(LoadError::BlankClient(id))?,
            amount: Money::new(amount).ok_or_else(|| {
                if amount.is_sign_negative() {
                    LoadError::NegativeAmount(id)
                } else {
                    LoadError::AmountTooLarge(id)
                }
            })?,
            status,
            date,
        })
    }
}

/// Error of loading [`Sale`] records.
#[derive(Debug, Display, Error, From)]
pub enum LoadError {
    /// Failed to read the records file.
    #[display("failed to read records: {_0}")]
    Io(io::Error),

    /// Records file is not a valid JSON array of records.
    #[display("malformed records: {_0}")]
    Json(serde_json::Error),

    /// Record has a blank client name.
    #[display("`Sale(id: {_0})` has blank client")]
    #[from(ignore)]
    BlankClient(#[error(not(source))] sale::Id),

    /// Record has a negative amount.
    #[display("`Sale(id: {_0})` has negative amount")]
    #[from(ignore)]
    NegativeAmount(#[error(not(source))] sale::Id),

    /// Record has an amount exceeding [`Money::MAX`].
    #[display("`Sale(id: {_0})` has amount exceeding the maximum")]
    #[from(ignore)]
    AmountTooLarge(#[error(not(source))] sale::Id),

    /// Failed to store a record.
    #[display("failed to store records: {_0}")]
    Database(Traced<database::Error>),
}

/// Parses [`Sale`]s out of the provided JSON array of records.
///
/// # Errors
///
/// If the JSON is malformed, or any of the records is invalid.
pub fn parse(json: &str) -> Result<Vec<Sale>, LoadError> {
    serde_json::from_str::<Vec<Record>>(json)?
        .into_iter()
        .map(Sale::try_from)
        .collect()
}

/// Loads [`Sale`]s from the JSON file at the provided `path` into a new
/// [`Memory`] database.
///
/// # Errors
///
/// If the file cannot be read, or contains invalid or duplicate records.
pub async fn load(path: impl AsRef<Path>) -> Result<Memory, LoadError> {
    let sales = parse(&fs::read_to_string(path)?)?;

    let memory = Memory::default();
    for sale in sales {
        memory.execute(Insert(sale)).await?;
    }
    Ok(memory)
}
