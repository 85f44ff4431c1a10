//! [`Query`]s for [`Demand`]s.

use derive_more::{Display, Error};
use tracerr::Traced;

use crate::{
    domain::{
        activity, city,
        demand::{self, Status},
        hotel, offering, transport, Demand,
    },
    read, Service,
};

use super::Query;

/// [`Query`] resolving a [`Demand`]'s assignments against the catalog.
///
/// Available once the [`Demand`] has been validated: every referenced
/// catalog entry is looked up and returned in full, ready for presentation.
#[derive(Clone, Debug)]
pub struct Assignments {
    /// [`Demand`] to resolve.
    pub demand: Demand,
}

impl Query<Assignments> for Service {
    type Ok = read::demand::WithAssignments;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, query: Assignments) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let Assignments { demand } = query;

        if demand.status == Status::Pending {
            return Err(tracerr::new!(E::NotValidated(demand.id)));
        }

        let mut cities = Vec::with_capacity(demand.cities.len());
        for (index, leg) in demand.cities.into_iter().enumerate() {
            let city = self
                .catalog()
                .city(leg.city_id)
                .ok_or(E::UnknownCity(leg.city_id))
                .map_err(tracerr::wrap!())?;

            let (Some(hotel_id), Some(total)) =
                (leg.hotel_id, leg.calculated_price)
            else {
                return Err(tracerr::new!(E::UnassignedLeg { index }));
            };
            let hotel = self
                .catalog()
                .hotel(hotel_id)
                .ok_or(E::UnknownHotel(hotel_id))
                .map_err(tracerr::wrap!())?;

            let mut activities = Vec::with_capacity(leg.activity_ids.len());
            for id in &leg.activity_ids {
                let activity = self
                    .catalog()
                    .activity(*id)
                    .ok_or(E::UnknownActivity(*id))
                    .map_err(tracerr::wrap!())?;
                activities.push(activity.clone());
            }

            cities.push(read::demand::CityAssignment {
                city: city.clone(),
                period: leg.period,
                duration_days: leg.duration_days,
                hotel: hotel.clone(),
                rooms: leg.rooms,
                activities,
                total,
            });
        }

        let mut services = Vec::with_capacity(demand.services.len());
        for selection in &demand.services {
            let offering = self
                .catalog()
                .offering(selection.offering_id)
                .ok_or(E::UnknownOffering(selection.offering_id))
                .map_err(tracerr::wrap!())?;
            services.push(read::demand::ServiceAssignment {
                offering: offering.clone(),
                quantity: selection.quantity,
            });
        }

        let transport = demand
            .transport_id
            .map(|id| {
                self.catalog()
                    .transport(id)
                    .cloned()
                    .ok_or_else(|| tracerr::new!(E::UnknownTransport(id)))
            })
            .transpose()?;

        let final_total_price = demand
            .total_price
            .ok_or(E::Unpriced(demand.id))
            .map_err(tracerr::wrap!())?;

        Ok(read::demand::WithAssignments {
            cities,
            services,
            transport,
            final_total_price,
        })
    }
}

/// Error of [`Assignments`] [`Query`] execution.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ExecutionError {
    /// [`Demand`] hasn't been validated yet, so it has no assignments.
    #[display("`Demand(id: {_0})` hasn't been validated yet")]
    NotValidated(#[error(not(source))] demand::Id),

    /// Itinerary leg has no [`Hotel`] assignment or price.
    ///
    /// [`Hotel`]: crate::domain::Hotel
    #[display("leg {index} has no hotel assignment")]
    UnassignedLeg {
        /// Index of the offending leg.
        index: usize,
    },

    /// [`Demand`] has no total price.
    #[display("`Demand(id: {_0})` has no total price")]
    Unpriced(#[error(not(source))] demand::Id),

    /// [`City`] referenced by the [`Demand`] is gone from the catalog.
    ///
    /// [`City`]: crate::domain::City
    #[display("`City(id: {_0})` is not present in the catalog")]
    UnknownCity(#[error(not(source))] city::Id),

    /// [`Hotel`] referenced by the [`Demand`] is gone from the catalog.
    ///
    /// [`Hotel`]: crate::domain::Hotel
    #[display("`Hotel(id: {_0})` is not present in the catalog")]
    UnknownHotel(#[error(not(source))] hotel::Id),

    /// [`Activity`] referenced by the [`Demand`] is gone from the catalog.
    ///
    /// [`Activity`]: crate::domain::Activity
    #[display("`Activity(id: {_0})` is not present in the catalog")]
    UnknownActivity(#[error(not(source))] activity::Id),

    /// [`ServiceOffering`] referenced by the [`Demand`] is gone from the
    /// catalog.
    ///
    /// [`ServiceOffering`]: crate::domain::ServiceOffering
    #[display("`ServiceOffering(id: {_0})` is not present in the catalog")]
    UnknownOffering(#[error(not(source))] offering::Id),

    /// [`Transport`] referenced by the [`Demand`] is gone from the catalog.
    ///
    /// [`Transport`]: crate::domain::Transport
    #[display("`Transport(id: {_0})` is not present in the catalog")]
    UnknownTransport(#[error(not(source))] transport::Id),
}

#[cfg(test)]
mod spec {
    use futures::executor::block_on;

    use crate::{
        command::{
            LegAssignment, RoomChoice, SubmitDemand, ValidateDemand,
        },
        domain::{
            demand::{AgentId, ServiceSelection},
            Demand,
        },
        infra::catalog::sample::{client_demand, sample, Sample},
        Query as _,
    };

    use super::{Assignments, ExecutionError as E};

    fn validated(s: &Sample) -> Demand {
        let pending = block_on(s.service.execute(SubmitDemand {
            demand: client_demand(s),
        }))
        .unwrap();
        block_on(s.service.execute(ValidateDemand {
            demand: pending,
            assignments: vec![LegAssignment {
                hotel_id: s.riad,
                rooms: vec![RoomChoice {
                    room_type_id: s.riad_double,
                    count: 2,
                }],
            }],
            transport_id: Some(s.van),
            services: vec![ServiceSelection {
                offering_id: s.guide,
                quantity: 2,
            }],
            benefit: None,
            tax: None,
            agent_id: AgentId::new(),
        }))
        .unwrap()
    }

    #[test]
    fn resolves_every_reference() {
        let s = sample();
        let demand = validated(&s);

        let resolved = block_on(s.service.execute(Assignments { demand }))
            .unwrap();

        assert_eq!(resolved.cities.len(), 1);
        assert_eq!(resolved.cities[0].city.id, s.marrakech);
        assert_eq!(resolved.cities[0].hotel.id, s.riad);
        assert_eq!(resolved.cities[0].activities.len(), 1);
        assert_eq!(resolved.cities[0].activities[0].id, s.cooking_class);
        assert_eq!(
            resolved.cities[0].total,
            "510.00USD".parse().unwrap(),
        );
        assert_eq!(resolved.services.len(), 1);
        assert_eq!(resolved.services[0].offering.id, s.guide);
        assert_eq!(resolved.services[0].quantity, 2);
        assert_eq!(
            resolved.transport.as_ref().map(|t| t.id),
            Some(s.van),
        );
        // 510 + 200 + 150
        assert_eq!(
            resolved.final_total_price,
            "860.00USD".parse().unwrap(),
        );
    }

    #[test]
    fn rejects_pending_demand() {
        let s = sample();
        let pending = block_on(s.service.execute(SubmitDemand {
            demand: client_demand(&s),
        }))
        .unwrap();

        let e = block_on(s.service.execute(Assignments { demand: pending }))
            .unwrap_err();
        assert!(matches!(e.as_ref(), E::NotValidated(_)));
    }

    #[test]
    fn reports_dangling_city_reference() {
        let s = sample();
        let mut demand = validated(&s);
        demand.cities[0].city_id = crate::domain::city::Id::new();

        let e = block_on(s.service.execute(Assignments { demand }))
            .unwrap_err();
        assert!(matches!(e.as_ref(), E::UnknownCity(_)));
    }
}
