//! Infrastructure definitions.

pub mod catalog;

pub use self::catalog::Catalog;
