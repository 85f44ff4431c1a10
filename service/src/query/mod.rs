//! [`Query`]s of the [`Service`].
//!
//! [`Service`]: crate::Service

pub mod demand;

pub use common::Handler as Query;
