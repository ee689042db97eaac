//! [`Database`]-related implementations.

pub mod in_process;
pub mod memory;

use derive_more::{Display, Error as StdError};

use crate::domain::sale;

pub use self::{in_process::InProcess, memory::Memory};

/// Database operation.
pub use common::Handler as Database;

/// [`Database`] error.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, StdError)]
pub enum Error {
    /// Lock guarding the records is poisoned by a panicked writer.
    #[display("records lock is poisoned")]
    Poisoned,

    /// [`Sale`] with the same [`sale::Id`] is stored already.
    ///
    /// [`Sale`]: crate::domain::Sale
    #[display("`Sale(id: {_0})` already exists")]
    DuplicateSale(#[error(not(source))] sale::Id),
}
