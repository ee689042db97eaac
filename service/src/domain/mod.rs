//! Domain definitions.

pub mod sale;

pub use self::sale::Sale;
