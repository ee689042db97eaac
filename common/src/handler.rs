//! [`Handler`] abstractions.

use std::future::Future;

/// Executable handler of some `Args`.
///
/// Queries of the service and operations of record sources are both
/// expressed as [`Handler`]s, so each capability is a separate trait bound.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>>;
}
