//! Read models of a [`Demand`] with its assignments resolved.
//!
//! [`Demand`]: crate::domain::Demand

use common::{Money, Period};

use crate::domain::{
    demand::RoomSelection, Activity, City, Hotel, ServiceOffering, Transport,
};
#[cfg(doc)]
use crate::domain::Demand;

/// [`Demand`] with every catalog reference resolved into its full entity.
#[derive(Clone, Debug)]
pub struct WithAssignments {
    /// Resolved itinerary legs, in order.
    pub cities: Vec<CityAssignment>,

    /// Resolved trip-wide services.
    pub services: Vec<ServiceAssignment>,

    /// Resolved [`Transport`], if one was selected.
    pub transport: Option<Transport>,

    /// Total price of the [`Demand`], benefit and tax included.
    pub final_total_price: Money,
}

/// Single itinerary leg with its [`City`], [`Hotel`] and [`Activity`]s
/// resolved.
#[derive(Clone, Debug)]
pub struct CityAssignment {
    /// Visited [`City`].
    pub city: City,

    /// [`Period`] of the stay.
    pub period: Period,

    /// Duration of the stay, in days.
    pub duration_days: u16,

    /// Assigned [`Hotel`].
    pub hotel: Hotel,

    /// Booked rooms of the assigned [`Hotel`].
    pub rooms: Vec<RoomSelection>,

    /// Planned [`Activity`]s.
    pub activities: Vec<Activity>,

    /// Price of this leg, pre-benefit and pre-tax.
    pub total: Money,
}

/// Trip-wide [`ServiceOffering`] with its selected quantity.
#[derive(Clone, Debug)]
pub struct ServiceAssignment {
    /// Selected [`ServiceOffering`].
    pub offering: ServiceOffering,

    /// Selected quantity.
    pub quantity: u32,
}
