//! [`Command`] for validating a [`Demand`].

use common::{DateTime, Percent};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        activity, city,
        demand::{
            AgentId, InvalidTransition, RoomSelection, ServiceSelection,
            Status,
        },
        hotel, offering, transport, Demand,
    },
    pricing, Service,
};

use super::Command;

/// [`Command`] for validating a [`Status::Pending`] [`Demand`].
///
/// An agent assigns a [`Hotel`] and rooms to every itinerary leg, optionally
/// selects trip-wide services and a [`Transport`], and sets the benefit
/// margin and the tax. The [`Demand`] is priced and moved to
/// [`Status::Validated`].
///
/// [`Hotel`]: crate::domain::Hotel
/// [`Transport`]: crate::domain::Transport
#[derive(Clone, Debug)]
pub struct ValidateDemand {
    /// [`Demand`] to validate.
    pub demand: Demand,

    /// Per-leg [`Hotel`] and room assignments, in itinerary order.
    ///
    /// [`Hotel`]: crate::domain::Hotel
    pub assignments: Vec<LegAssignment>,

    /// Selected [`Transport`], if any.
    ///
    /// [`Transport`]: crate::domain::Transport
    pub transport_id: Option<transport::Id>,

    /// Selected trip-wide [`ServiceOffering`]s.
    ///
    /// [`ServiceOffering`]: crate::domain::ServiceOffering
    pub services: Vec<ServiceSelection>,

    /// Benefit margin to apply on the subtotal.
    pub benefit: Option<Percent>,

    /// Tax to apply after the benefit margin.
    pub tax: Option<Percent>,

    /// ID of the agent performing the validation.
    pub agent_id: AgentId,
}

/// [`Hotel`] and room assignment for a single itinerary leg.
///
/// [`Hotel`]: crate::domain::Hotel
#[derive(Clone, Debug)]
pub struct LegAssignment {
    /// ID of the assigned [`Hotel`].
    ///
    /// [`Hotel`]: crate::domain::Hotel
    pub hotel_id: hotel::Id,

    /// Rooms booked in the assigned [`Hotel`].
    ///
    /// [`Hotel`]: crate::domain::Hotel
    pub rooms: Vec<RoomChoice>,
}

/// Choice of a [`RoomType`] and the number of its rooms to book.
///
/// [`RoomType`]: hotel::RoomType
#[derive(Clone, Copy, Debug)]
pub struct RoomChoice {
    /// ID of the chosen [`RoomType`].
    ///
    /// [`RoomType`]: hotel::RoomType
    pub room_type_id: hotel::room_type::Id,

    /// Number of rooms to book.
    pub count: u16,
}

impl Command<ValidateDemand> for Service {
    type Ok = Demand;
    type Err = Traced<ExecutionError>;

    #[expect(clippy::too_many_lines, reason = "still readable")]
    async fn execute(
        &self,
        cmd: ValidateDemand,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let ValidateDemand {
            mut demand,
            assignments,
            transport_id,
            services,
            benefit,
            tax,
            agent_id,
        } = cmd;

        demand
            .status
            .ensure_transition(Status::Validated)
            .map_err(tracerr::from_and_wrap!(=> E))?;

        if assignments.len() != demand.cities.len() {
            return Err(tracerr::new!(E::AssignmentCountMismatch {
                expected: demand.cities.len(),
                provided: assignments.len(),
            }));
        }

        let currency = self.catalog().currency();

        let mut leg_prices = Vec::with_capacity(demand.cities.len());
        for (index, (leg, assignment)) in
            demand.cities.iter_mut().zip(assignments).enumerate()
        {
            let LegAssignment { hotel_id, rooms } = assignment;

            let hotel = self
                .catalog()
                .hotel(hotel_id)
                .ok_or(E::UnknownHotel(hotel_id))
                .map_err(tracerr::wrap!())?;
            if !hotel.is_active {
                return Err(tracerr::new!(E::HotelInactive(hotel_id)));
            }
            if hotel.city_id != leg.city_id {
                return Err(tracerr::new!(E::HotelOutsideCity {
                    hotel: hotel_id,
                    city: leg.city_id,
                }));
            }

            if rooms.is_empty() {
                return Err(tracerr::new!(E::EmptyRoomSelection { index }));
            }
            let mut selections = Vec::with_capacity(rooms.len());
            for choice in rooms {
                let RoomChoice {
                    room_type_id,
                    count,
                } = choice;

                if count == 0 {
                    return Err(tracerr::new!(E::ZeroRoomCount {
                        index,
                        room_type: room_type_id,
                    }));
                }
                let room = hotel
                    .room_type(room_type_id)
                    .ok_or(E::UnknownRoomType {
                        hotel: hotel_id,
                        room_type: room_type_id,
                    })
                    .map_err(tracerr::wrap!())?;
                selections.push(RoomSelection {
                    room_type_id,
                    category: room.category,
                    unit_price: room.price,
                    capacity: room.capacity,
                    count,
                });
            }

            let mut activity_prices =
                Vec::with_capacity(leg.activity_ids.len());
            for id in &leg.activity_ids {
                let activity = self
                    .catalog()
                    .activity(*id)
                    .ok_or(E::UnknownActivity(*id))
                    .map_err(tracerr::wrap!())?;
                activity_prices.push(activity.price);
            }

            let price = pricing::leg_total(
                currency,
                leg.duration_days,
                &selections,
                &activity_prices,
            )
            .map_err(tracerr::from_and_wrap!(=> E))?;

            leg.hotel_id = Some(hotel_id);
            leg.rooms = selections;
            leg.calculated_price = Some(price);
            leg_prices.push(price);
        }

        let mut service_prices = Vec::with_capacity(services.len());
        for selection in &services {
            if selection.quantity == 0 {
                return Err(tracerr::new!(E::ZeroServiceQuantity(
                    selection.offering_id,
                )));
            }
            let offering = self
                .catalog()
                .offering(selection.offering_id)
                .ok_or(E::UnknownOffering(selection.offering_id))
                .map_err(tracerr::wrap!())?;
            if !offering.is_active {
                return Err(tracerr::new!(E::OfferingInactive(
                    selection.offering_id,
                )));
            }
            service_prices.push((offering.price, selection.quantity));
        }

        let transport_price = transport_id
            .map(|id| {
                let transport = self
                    .catalog()
                    .transport(id)
                    .ok_or(E::UnknownTransport(id))
                    .map_err(tracerr::wrap!())?;
                if !transport.is_active {
                    return Err(tracerr::new!(E::TransportInactive(id)));
                }
                Ok(transport.price)
            })
            .transpose()?;

        let total = pricing::demand_total(
            currency,
            &leg_prices,
            &service_prices,
            transport_price,
            benefit,
            tax,
        )
        .map_err(tracerr::from_and_wrap!(=> E))?;

        demand.services = services;
        demand.transport_id = transport_id;
        demand.benefit = benefit;
        demand.tax = tax;
        demand.agent_id = Some(agent_id);
        demand.total_price = Some(total);
        demand.status = Status::Validated;
        demand.updated_at = DateTime::now().coerce();

        log::info!(
            "`Demand(id: {})` validated at a total of {total}",
            demand.id,
        );

        Ok(demand)
    }
}

/// Error of [`ValidateDemand`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Demand`] cannot move to [`Status::Validated`] from its current
    /// [`Status`].
    #[display("{_0}")]
    Transition(InvalidTransition),

    /// Number of [`LegAssignment`]s doesn't match the itinerary.
    #[display(
        "{provided} leg assignments provided for an itinerary of {expected} \
         legs"
    )]
    #[from(ignore)]
    AssignmentCountMismatch {
        /// Number of itinerary legs.
        expected: usize,

        /// Number of provided [`LegAssignment`]s.
        provided: usize,
    },

    /// [`Hotel`] with the provided ID is not present in the catalog.
    ///
    /// [`Hotel`]: crate::domain::Hotel
    #[display("`Hotel(id: {_0})` is not present in the catalog")]
    #[from(ignore)]
    UnknownHotel(#[error(not(source))] hotel::Id),

    /// [`Hotel`] with the provided ID is not accepting bookings.
    ///
    /// [`Hotel`]: crate::domain::Hotel
    #[display("`Hotel(id: {_0})` is not accepting bookings")]
    #[from(ignore)]
    HotelInactive(#[error(not(source))] hotel::Id),

    /// Assigned [`Hotel`] is not located in the [`City`] of its leg.
    ///
    /// [`City`]: crate::domain::City
    /// [`Hotel`]: crate::domain::Hotel
    #[display("`Hotel(id: {hotel})` is not located in `City(id: {city})`")]
    #[from(ignore)]
    HotelOutsideCity {
        /// ID of the offending [`Hotel`].
        ///
        /// [`Hotel`]: crate::domain::Hotel
        hotel: hotel::Id,

        /// ID of the [`City`] of the leg.
        ///
        /// [`City`]: crate::domain::City
        city: city::Id,
    },

    /// [`LegAssignment`] books no rooms.
    #[display("leg assignment {index} books no rooms")]
    #[from(ignore)]
    EmptyRoomSelection {
        /// Index of the offending [`LegAssignment`].
        index: usize,
    },

    /// [`RoomChoice`] books zero rooms of a [`RoomType`].
    ///
    /// [`RoomType`]: hotel::RoomType
    #[display(
        "leg assignment {index} books zero rooms of \
         `RoomType(id: {room_type})`"
    )]
    #[from(ignore)]
    ZeroRoomCount {
        /// Index of the offending [`LegAssignment`].
        index: usize,

        /// ID of the [`RoomType`] booked zero times.
        ///
        /// [`RoomType`]: hotel::RoomType
        room_type: hotel::room_type::Id,
    },

    /// [`RoomType`] is not offered by the assigned [`Hotel`].
    ///
    /// [`Hotel`]: crate::domain::Hotel
    /// [`RoomType`]: hotel::RoomType
    #[display(
        "`RoomType(id: {room_type})` is not offered by `Hotel(id: {hotel})`"
    )]
    #[from(ignore)]
    UnknownRoomType {
        /// ID of the assigned [`Hotel`].
        ///
        /// [`Hotel`]: crate::domain::Hotel
        hotel: hotel::Id,

        /// ID of the missing [`RoomType`].
        ///
        /// [`RoomType`]: hotel::RoomType
        room_type: hotel::room_type::Id,
    },

    /// [`Activity`] referenced by a leg is not present in the catalog.
    ///
    /// [`Activity`]: crate::domain::Activity
    #[display("`Activity(id: {_0})` is not present in the catalog")]
    #[from(ignore)]
    UnknownActivity(#[error(not(source))] activity::Id),

    /// [`ServiceSelection`] requests a zero quantity.
    #[display("`ServiceOffering(id: {_0})` is selected with a zero quantity")]
    #[from(ignore)]
    ZeroServiceQuantity(#[error(not(source))] offering::Id),

    /// [`ServiceOffering`] with the provided ID is not present in the
    /// catalog.
    ///
    /// [`ServiceOffering`]: crate::domain::ServiceOffering
    #[display("`ServiceOffering(id: {_0})` is not present in the catalog")]
    #[from(ignore)]
    UnknownOffering(#[error(not(source))] offering::Id),

    /// [`ServiceOffering`] with the provided ID is not provided anymore.
    ///
    /// [`ServiceOffering`]: crate::domain::ServiceOffering
    #[display("`ServiceOffering(id: {_0})` is not provided anymore")]
    #[from(ignore)]
    OfferingInactive(#[error(not(source))] offering::Id),

    /// [`Transport`] with the provided ID is not present in the catalog.
    ///
    /// [`Transport`]: crate::domain::Transport
    #[display("`Transport(id: {_0})` is not present in the catalog")]
    #[from(ignore)]
    UnknownTransport(#[error(not(source))] transport::Id),

    /// [`Transport`] with the provided ID is not operating.
    ///
    /// [`Transport`]: crate::domain::Transport
    #[display("`Transport(id: {_0})` is not operating")]
    #[from(ignore)]
    TransportInactive(#[error(not(source))] transport::Id),

    /// Some price is not in the [`Currency`] of the catalog.
    ///
    /// [`Currency`]: common::money::Currency
    #[display("{_0}")]
    Currency(pricing::CurrencyMismatch),
}
