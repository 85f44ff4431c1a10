//! [`Command`] for creating a [`Package`].

use common::{DateTime, Money, Percent};
use derive_more::{Display, Error};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        activity, city, hotel, offering, package, transport, Package,
    },
    Service,
};

use super::Command;

/// [`Command`] for creating a new admin-assembled [`Package`].
///
/// Every referenced catalog entry must resolve, and the base price must be
/// non-negative and in the catalog's [`Currency`].
///
/// [`Currency`]: common::money::Currency
#[derive(Clone, Debug)]
pub struct CreatePackage {
    /// [`Name`] of the created [`Package`].
    ///
    /// [`Name`]: package::Name
    pub name: package::Name,

    /// IDs of the [`City`]s the created [`Package`] visits.
    ///
    /// [`City`]: crate::domain::City
    pub city_ids: Vec<city::Id>,

    /// IDs of the [`Hotel`]s the created [`Package`] includes.
    ///
    /// [`Hotel`]: crate::domain::Hotel
    pub hotel_ids: Vec<hotel::Id>,

    /// IDs of the [`Activity`]s the created [`Package`] includes.
    ///
    /// [`Activity`]: crate::domain::Activity
    pub activity_ids: Vec<activity::Id>,

    /// IDs of the [`ServiceOffering`]s the created [`Package`] includes.
    ///
    /// [`ServiceOffering`]: crate::domain::ServiceOffering
    pub offering_ids: Vec<offering::Id>,

    /// IDs of the [`Transport`]s the created [`Package`] includes.
    ///
    /// [`Transport`]: crate::domain::Transport
    pub transport_ids: Vec<transport::Id>,

    /// Base price of the created [`Package`], before the discount.
    pub base_price: Money,

    /// Discount applied to the `base_price`.
    pub discount: Percent,
}

impl Command<CreatePackage> for Service {
    type Ok = Package;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreatePackage,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreatePackage {
            name,
            city_ids,
            hotel_ids,
            activity_ids,
            offering_ids,
            transport_ids,
            base_price,
            discount,
        } = cmd;

        if base_price.is_negative() {
            return Err(tracerr::new!(E::NegativeBasePrice(base_price)));
        }
        let currency = self.catalog().currency();
        if base_price.currency != currency {
            return Err(tracerr::new!(E::ForeignCurrency {
                expected: currency,
                found: base_price.currency,
            }));
        }

        for id in &city_ids {
            if self.catalog().city(*id).is_none() {
                return Err(tracerr::new!(E::UnknownCity(*id)));
            }
        }
        for id in &hotel_ids {
            if self.catalog().hotel(*id).is_none() {
                return Err(tracerr::new!(E::UnknownHotel(*id)));
            }
        }
        for id in &activity_ids {
            if self.catalog().activity(*id).is_none() {
                return Err(tracerr::new!(E::UnknownActivity(*id)));
            }
        }
        for id in &offering_ids {
            if self.catalog().offering(*id).is_none() {
                return Err(tracerr::new!(E::UnknownOffering(*id)));
            }
        }
        for id in &transport_ids {
            if self.catalog().transport(*id).is_none() {
                return Err(tracerr::new!(E::UnknownTransport(*id)));
            }
        }

        let package = Package {
            id: package::Id::new(),
            name,
            city_ids,
            hotel_ids,
            activity_ids,
            offering_ids,
            transport_ids,
            base_price,
            discount,
            created_at: DateTime::now().coerce(),
        };

        log::info!(
            "`Package(id: {}, name: {})` created",
            package.id,
            package.name,
        );

        Ok(package)
    }
}

/// Error of [`CreatePackage`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ExecutionError {
    /// Base price of the [`Package`] is negative.
    #[display("negative base price: {_0}")]
    NegativeBasePrice(#[error(not(source))] Money),

    /// Base price of the [`Package`] is not in the catalog's [`Currency`].
    ///
    /// [`Currency`]: common::money::Currency
    #[display("expected `{expected}` base price, got `{found}`")]
    ForeignCurrency {
        /// [`Currency`] of the catalog.
        ///
        /// [`Currency`]: common::money::Currency
        expected: common::money::Currency,

        /// [`Currency`] of the provided base price.
        ///
        /// [`Currency`]: common::money::Currency
        found: common::money::Currency,
    },

    /// [`City`] with the provided ID is not present in the catalog.
    ///
    /// [`City`]: crate::domain::City
    #[display("`City(id: {_0})` is not present in the catalog")]
    UnknownCity(#[error(not(source))] city::Id),

    /// [`Hotel`] with the provided ID is not present in the catalog.
    ///
    /// [`Hotel`]: crate::domain::Hotel
    #[display("`Hotel(id: {_0})` is not present in the catalog")]
    UnknownHotel(#[error(not(source))] hotel::Id),

    /// [`Activity`] with the provided ID is not present in the catalog.
    ///
    /// [`Activity`]: crate::domain::Activity
    #[display("`Activity(id: {_0})` is not present in the catalog")]
    UnknownActivity(#[error(not(source))] activity::Id),

    /// [`ServiceOffering`] with the provided ID is not present in the
    /// catalog.
    ///
    /// [`ServiceOffering`]: crate::domain::ServiceOffering
    #[display("`ServiceOffering(id: {_0})` is not present in the catalog")]
    UnknownOffering(#[error(not(source))] offering::Id),

    /// [`Transport`] with the provided ID is not present in the catalog.
    ///
    /// [`Transport`]: crate::domain::Transport
    #[display("`Transport(id: {_0})` is not present in the catalog")]
    UnknownTransport(#[error(not(source))] transport::Id),
}

#[cfg(test)]
mod spec {
    use futures::executor::block_on;

    use crate::{
        domain::{hotel, package},
        infra::catalog::sample::{sample, Sample},
        Command as _,
    };

    use super::{CreatePackage, ExecutionError as E};

    fn cmd(s: &Sample) -> CreatePackage {
        CreatePackage {
            name: package::Name::new("Marrakech Escape").unwrap(),
            city_ids: vec![s.marrakech],
            hotel_ids: vec![s.riad],
            activity_ids: vec![s.cooking_class],
            offering_ids: vec![s.guide],
            transport_ids: vec![s.van],
            base_price: "2000USD".parse().unwrap(),
            discount: "15".parse().unwrap(),
        }
    }

    #[test]
    fn creates_package_with_derived_final_price() {
        let s = sample();

        let created = block_on(s.service.execute(cmd(&s))).unwrap();

        assert_eq!(created.city_ids, vec![s.marrakech]);
        assert_eq!(created.final_price(), "1700.00USD".parse().unwrap());
    }

    #[test]
    fn rejects_negative_base_price() {
        let s = sample();
        let mut c = cmd(&s);
        c.base_price = "-1USD".parse().unwrap();

        let e = block_on(s.service.execute(c)).unwrap_err();
        assert!(matches!(e.as_ref(), E::NegativeBasePrice(_)));
    }

    #[test]
    fn rejects_foreign_currency_base_price() {
        let s = sample();
        let mut c = cmd(&s);
        c.base_price = "2000EUR".parse().unwrap();

        let e = block_on(s.service.execute(c)).unwrap_err();
        assert!(matches!(e.as_ref(), E::ForeignCurrency { .. }));
    }

    #[test]
    fn rejects_dangling_hotel_reference() {
        let s = sample();
        let stranger = hotel::Id::new();
        let mut c = cmd(&s);
        c.hotel_ids.push(stranger);

        let e = block_on(s.service.execute(c)).unwrap_err();
        assert!(matches!(e.as_ref(), E::UnknownHotel(id) if *id == stranger));
    }
}
