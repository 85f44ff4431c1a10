//! Service contains the business logic of the travel demand backend.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod pricing;
pub mod query;
pub mod read;

use common::money::Currency;
use derive_more::{Display, Error};

use crate::infra::Catalog;

pub use self::{command::Command, query::Query};

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// [`Currency`] all catalog and demand prices are expressed in.
    pub currency: Currency,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Catalog`] of reference data this [`Service`] resolves against.
    catalog: Catalog,
}

impl Service {
    /// Creates a new [`Service`] with the provided parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`StartupError`] if the provided [`Catalog`] doesn't match
    /// the provided [`Config`].
    pub fn new(
        config: Config,
        catalog: Catalog,
    ) -> Result<Self, StartupError> {
        if catalog.currency() != config.currency {
            return Err(StartupError::CatalogCurrencyMismatch {
                expected: config.currency,
                found: catalog.currency(),
            });
        }

        Ok(Self { config, catalog })
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Catalog`] of this [`Service`].
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

/// Error of starting a [`Service`].
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum StartupError {
    /// [`Catalog`] prices use a different [`Currency`] than the configured
    /// one.
    #[display(
        "`Catalog` currency `{found}` differs from the configured `{expected}`"
    )]
    CatalogCurrencyMismatch {
        /// [`Currency`] the [`Service`] is configured with.
        expected: Currency,

        /// [`Currency`] the [`Catalog`] was built with.
        found: Currency,
    },
}
