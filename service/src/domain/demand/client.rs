//! [`ClientDemand`] definitions.

use common::date::Period;

use crate::domain::{activity, city, ClientInfo};
#[cfg(doc)]
use crate::domain::{Activity, City, Demand};

use super::Comment;

/// Client-submitted booking request, before any agent assignment.
///
/// The lighter-weight predecessor of a [`Demand`]: its legs reference
/// [`Activity`]s by ID only and carry no hotel, rooms or prices.
#[derive(Clone, Debug)]
pub struct ClientDemand {
    /// [`ClientInfo`] of this [`ClientDemand`].
    pub client: ClientInfo,

    /// Ordered [`CitySelection`] legs of the requested itinerary.
    pub cities: Vec<CitySelection>,

    /// [`Comment`] left by the client, if any.
    pub comment: Option<Comment>,
}

/// One requested leg of a [`ClientDemand`]'s itinerary.
#[derive(Clone, Debug)]
pub struct CitySelection {
    /// ID of the [`City`] to visit.
    pub city_id: city::Id,

    /// [`Period`] of the stay.
    pub period: Period,

    /// Declared length of the stay in days.
    ///
    /// Must equal the night count of the `period`.
    pub duration_days: u16,

    /// IDs of the [`Activity`]s requested for this leg.
    pub activity_ids: Vec<activity::Id>,
}
