//! [`Command`] for submitting a new [`Demand`].

use common::DateTime;
use derive_more::{Display, Error};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        activity, city,
        demand::{self, client::CitySelection, DemandCity, Status},
        ClientDemand, Demand,
    },
    Service,
};

use super::Command;

/// [`Command`] for submitting a new [`Demand`].
///
/// Turns a [`ClientDemand`] into a [`Status::Pending`] [`Demand`], checking
/// its structure and resolving every referenced city and activity against
/// the catalog.
#[derive(Clone, Debug)]
pub struct SubmitDemand {
    /// [`ClientDemand`] to submit.
    pub demand: ClientDemand,
}

impl Command<SubmitDemand> for Service {
    type Ok = Demand;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: SubmitDemand) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SubmitDemand { demand } = cmd;
        let ClientDemand {
            client,
            cities,
            comment,
        } = demand;

        if client.duration_days != client.period.nights() {
            return Err(tracerr::new!(E::TripDurationMismatch {
                expected: client.period.nights(),
                provided: client.duration_days,
            }));
        }

        if cities.is_empty() {
            return Err(tracerr::new!(E::EmptyItinerary));
        }

        let mut legs = Vec::with_capacity(cities.len());
        for (index, selection) in cities.into_iter().enumerate() {
            let CitySelection {
                city_id,
                period,
                duration_days,
                activity_ids,
            } = selection;

            if duration_days != period.nights() {
                return Err(tracerr::new!(E::LegDurationMismatch {
                    index,
                    expected: period.nights(),
                    provided: duration_days,
                }));
            }

            let city = self
                .catalog()
                .city(city_id)
                .ok_or(E::UnknownCity(city_id))
                .map_err(tracerr::wrap!())?;
            if !city.is_enabled {
                return Err(tracerr::new!(E::CityDisabled(city_id)));
            }

            for id in &activity_ids {
                let activity = self
                    .catalog()
                    .activity(*id)
                    .ok_or(E::UnknownActivity(*id))
                    .map_err(tracerr::wrap!())?;
                if !activity.is_active {
                    return Err(tracerr::new!(E::ActivityInactive(*id)));
                }
                if activity.city_id != city_id {
                    return Err(tracerr::new!(E::ActivityOutsideCity {
                        activity: *id,
                        city: city_id,
                    }));
                }
            }

            legs.push(DemandCity {
                city_id,
                period,
                duration_days,
                activity_ids,
                hotel_id: None,
                rooms: Vec::new(),
                calculated_price: None,
            });
        }

        let now = DateTime::now();
        let demand = Demand {
            id: demand::Id::new(),
            client,
            status: Status::Pending,
            total_price: None,
            cities: legs,
            comment,
            services: Vec::new(),
            transport_id: None,
            benefit: None,
            tax: None,
            agent_id: None,
            created_at: now.coerce(),
            updated_at: now.coerce(),
        };

        log::debug!("`Demand(id: {})` submitted", demand.id);

        Ok(demand)
    }
}

/// Error of [`SubmitDemand`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ExecutionError {
    /// [`ClientDemand`] has no itinerary legs.
    #[display("`ClientDemand` has no itinerary legs")]
    EmptyItinerary,

    /// Declared trip duration doesn't match the trip period.
    #[display(
        "trip duration of {provided} days doesn't match the {expected} \
         nights of the trip period"
    )]
    TripDurationMismatch {
        /// Night count of the trip period.
        expected: u16,

        /// Declared trip duration in days.
        provided: u16,
    },

    /// Declared leg duration doesn't match the leg period.
    #[display(
        "duration of {provided} days at leg {index} doesn't match the \
         {expected} nights of its period"
    )]
    LegDurationMismatch {
        /// Index of the offending leg.
        index: usize,

        /// Night count of the leg period.
        expected: u16,

        /// Declared leg duration in days.
        provided: u16,
    },

    /// [`City`] with the provided ID is not present in the catalog.
    ///
    /// [`City`]: crate::domain::City
    #[display("`City(id: {_0})` is not present in the catalog")]
    UnknownCity(#[error(not(source))] city::Id),

    /// [`City`] with the provided ID is not offered to clients.
    ///
    /// [`City`]: crate::domain::City
    #[display("`City(id: {_0})` is not offered to clients")]
    CityDisabled(#[error(not(source))] city::Id),

    /// [`Activity`] with the provided ID is not present in the catalog.
    ///
    /// [`Activity`]: crate::domain::Activity
    #[display("`Activity(id: {_0})` is not present in the catalog")]
    UnknownActivity(#[error(not(source))] activity::Id),

    /// [`Activity`] with the provided ID is not offered to clients.
    ///
    /// [`Activity`]: crate::domain::Activity
    #[display("`Activity(id: {_0})` is not offered to clients")]
    ActivityInactive(#[error(not(source))] activity::Id),

    /// [`Activity`] doesn't take place in the [`City`] of its leg.
    ///
    /// [`Activity`]: crate::domain::Activity
    /// [`City`]: crate::domain::City
    #[display(
        "`Activity(id: {activity})` doesn't take place in `City(id: {city})`"
    )]
    ActivityOutsideCity {
        /// ID of the offending [`Activity`].
        ///
        /// [`Activity`]: crate::domain::Activity
        activity: activity::Id,

        /// ID of the [`City`] of the leg.
        ///
        /// [`City`]: crate::domain::City
        city: city::Id,
    },
}

#[cfg(test)]
mod spec {
    use futures::executor::block_on;

    use crate::{
        domain::{city, demand::Status},
        infra::catalog::sample::{client_demand as demand, leg, sample},
        Command as _,
    };

    use super::{ExecutionError as E, SubmitDemand};

    #[test]
    fn creates_pending_demand() {
        let s = sample();

        let created = block_on(s.service.execute(SubmitDemand {
            demand: demand(&s),
        }))
        .unwrap();

        assert_eq!(created.status, Status::Pending);
        assert_eq!(created.total_price, None);
        assert_eq!(created.cities.len(), 1);
        assert_eq!(created.cities[0].city_id, s.marrakech);
        assert_eq!(created.cities[0].hotel_id, None);
        assert!(created.cities[0].calculated_price.is_none());
    }

    #[test]
    fn rejects_empty_itinerary() {
        let s = sample();
        let mut d = demand(&s);
        d.cities.clear();

        let e = block_on(s.service.execute(SubmitDemand { demand: d }))
            .unwrap_err();
        assert!(matches!(e.as_ref(), E::EmptyItinerary));
    }

    #[test]
    fn rejects_trip_duration_mismatch() {
        let s = sample();
        let mut d = demand(&s);
        d.client.duration_days = 5;

        let e = block_on(s.service.execute(SubmitDemand { demand: d }))
            .unwrap_err();
        assert!(matches!(
            e.as_ref(),
            E::TripDurationMismatch {
                expected: 3,
                provided: 5,
            },
        ));
    }

    #[test]
    fn rejects_leg_duration_mismatch() {
        let s = sample();
        let mut d = demand(&s);
        d.cities[0].duration_days = 4;

        let e = block_on(s.service.execute(SubmitDemand { demand: d }))
            .unwrap_err();
        assert!(matches!(
            e.as_ref(),
            E::LegDurationMismatch {
                index: 0,
                expected: 3,
                provided: 4,
            },
        ));
    }

    #[test]
    fn rejects_unknown_city() {
        let s = sample();
        let stranger = city::Id::new();
        let mut d = demand(&s);
        d.cities[0].city_id = stranger;

        let e = block_on(s.service.execute(SubmitDemand { demand: d }))
            .unwrap_err();
        assert!(matches!(e.as_ref(), E::UnknownCity(id) if *id == stranger));
    }

    #[test]
    fn rejects_disabled_city() {
        let s = sample();
        let mut d = demand(&s);
        d.cities[0].city_id = s.essaouira;
        d.cities[0].activity_ids.clear();

        let e = block_on(s.service.execute(SubmitDemand { demand: d }))
            .unwrap_err();
        assert!(matches!(e.as_ref(), E::CityDisabled(_)));
    }

    #[test]
    fn rejects_activity_outside_its_city() {
        let s = sample();
        let mut d = demand(&s);
        d.cities = vec![leg(s.fes, vec![s.cooking_class])];

        let e = block_on(s.service.execute(SubmitDemand { demand: d }))
            .unwrap_err();
        assert!(matches!(e.as_ref(), E::ActivityOutsideCity { .. }));
    }

    #[test]
    fn rejects_inactive_activity() {
        let s = sample();
        let mut d = demand(&s);
        d.cities[0].activity_ids = vec![s.retired_tour];

        let e = block_on(s.service.execute(SubmitDemand { demand: d }))
            .unwrap_err();
        assert!(matches!(e.as_ref(), E::ActivityInactive(_)));
    }
}
