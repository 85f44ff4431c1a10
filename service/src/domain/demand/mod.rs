//! [`Demand`] definitions.

pub mod client;

use common::{
    date::Period, define_kind, unit, DateTimeOf, Money, Percent,
};
use derive_more::{AsRef, Display, Error, From, FromStr, Into};
use uuid::Uuid;

use crate::domain::{activity, city, hotel, transport};
#[cfg(doc)]
use crate::domain::{
    Activity, City, Hotel, ServiceOffering, Transport,
};
#[cfg(doc)]
use common::DateTime;

use super::{offering, ClientInfo};

pub use self::client::ClientDemand;

/// Booking request moving through the [`Status`] lifecycle.
#[derive(Clone, Debug)]
pub struct Demand {
    /// ID of this [`Demand`].
    pub id: Id,

    /// [`ClientInfo`] this [`Demand`] was submitted with.
    pub client: ClientInfo,

    /// [`Status`] of this [`Demand`].
    pub status: Status,

    /// Total price of this [`Demand`].
    ///
    /// Computed once the [`Demand`] is validated.
    pub total_price: Option<Money>,

    /// Ordered [`DemandCity`] legs of this [`Demand`]'s itinerary.
    ///
    /// Never empty.
    pub cities: Vec<DemandCity>,

    /// [`Comment`] left by the client, if any.
    pub comment: Option<Comment>,

    /// Trip-wide [`ServiceSelection`]s of this [`Demand`].
    pub services: Vec<ServiceSelection>,

    /// ID of the [`Transport`] selected for the whole trip, if any.
    pub transport_id: Option<transport::Id>,

    /// Benefit margin applied on top of the subtotal, if any.
    pub benefit: Option<Percent>,

    /// Tax applied after the benefit margin, if any.
    pub tax: Option<Percent>,

    /// ID of the agent owning this [`Demand`], if assigned.
    pub agent_id: Option<AgentId>,

    /// [`DateTime`] when this [`Demand`] was created.
    pub created_at: CreationDateTime,

    /// [`DateTime`] when this [`Demand`] was last revised.
    pub updated_at: RevisionDateTime,
}

/// ID of a [`Demand`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// ID of the agent owning a [`Demand`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct AgentId(Uuid);

impl AgentId {
    /// Creates a new random [`AgentId`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

define_kind! {
    #[doc = "Lifecycle status of a [`Demand`]."]
    enum Status {
        #[doc = "Submitted by a client, not processed yet."]
        Pending = 1,

        #[doc = "Resolved and priced by an agent."]
        Validated = 2,

        #[doc = "Delivered to the client."]
        Sent = 3,
    }
}

impl Status {
    /// Checks that moving from this [`Status`] to the provided one is
    /// allowed.
    ///
    /// The lifecycle is monotonic: [`Pending`] -> [`Validated`] -> [`Sent`],
    /// nothing else.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidTransition`] error otherwise.
    ///
    /// [`Pending`]: Status::Pending
    /// [`Sent`]: Status::Sent
    /// [`Validated`]: Status::Validated
    pub fn ensure_transition(
        self,
        to: Status,
    ) -> Result<(), InvalidTransition> {
        match (self, to) {
            (Self::Pending, Self::Validated)
            | (Self::Validated, Self::Sent) => Ok(()),
            (Self::Pending, Self::Pending | Self::Sent)
            | (Self::Validated, Self::Pending | Self::Validated)
            | (Self::Sent, Self::Pending | Self::Validated | Self::Sent) => {
                Err(InvalidTransition { from: self, to })
            }
        }
    }
}

/// Error of an illegal [`Status`] change of a [`Demand`].
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
#[display("illegal `Demand` status transition: {from} -> {to}")]
pub struct InvalidTransition {
    /// [`Status`] the [`Demand`] is in.
    pub from: Status,

    /// [`Status`] the [`Demand`] was moved to.
    pub to: Status,
}

/// One leg of a [`Demand`]'s multi-city itinerary.
#[derive(Clone, Debug)]
pub struct DemandCity {
    /// ID of the [`City`] this leg visits.
    pub city_id: city::Id,

    /// [`Period`] of the stay.
    pub period: Period,

    /// Declared length of the stay in days.
    ///
    /// Must equal the night count of the `period`.
    pub duration_days: u16,

    /// IDs of the [`Activity`]s selected for this leg.
    pub activity_ids: Vec<activity::Id>,

    /// ID of the [`Hotel`] assigned to this leg, if any.
    pub hotel_id: Option<hotel::Id>,

    /// [`RoomSelection`]s assigned to this leg.
    pub rooms: Vec<RoomSelection>,

    /// Price of this leg, before any benefit margin or tax.
    ///
    /// Computed when the [`Demand`] is validated.
    pub calculated_price: Option<Money>,
}

/// Selection of rooms of a single [`hotel::RoomType`] within a
/// [`DemandCity`] leg.
///
/// Snapshots the room parameters at assignment time.
#[derive(Clone, Debug)]
pub struct RoomSelection {
    /// ID of the selected [`hotel::RoomType`].
    pub room_type_id: hotel::room_type::Id,

    /// [`Category`] of the selected [`hotel::RoomType`].
    ///
    /// [`Category`]: hotel::room_type::Category
    pub category: hotel::room_type::Category,

    /// Nightly price of a single room at assignment time.
    pub unit_price: Money,

    /// [`Capacity`] of a single room.
    ///
    /// [`Capacity`]: hotel::room_type::Capacity
    pub capacity: hotel::room_type::Capacity,

    /// Number of rooms selected.
    pub count: u16,
}

/// Selection of a trip-wide [`ServiceOffering`] with a quantity.
#[derive(Clone, Copy, Debug)]
pub struct ServiceSelection {
    /// ID of the selected [`ServiceOffering`].
    pub offering_id: offering::Id,

    /// Number of units selected.
    pub quantity: u32,
}

/// Comment left by a client on a [`Demand`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Comment(String);

impl Comment {
    /// Creates a new [`Comment`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `comment` is not empty.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(comment: impl Into<String>) -> Self {
        Self(comment.into())
    }

    /// Creates a new [`Comment`] if the given `comment` is valid.
    #[must_use]
    pub fn new(comment: impl Into<String>) -> Option<Self> {
        let comment = comment.into();
        Self::check(&comment).then_some(Self(comment))
    }

    /// Checks whether the given `comment` is a valid [`Comment`].
    fn check(comment: impl AsRef<str>) -> bool {
        let comment = comment.as_ref();
        comment.trim() == comment
            && !comment.is_empty()
            && comment.len() <= 2048
    }
}

impl FromStr for Comment {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Comment`")
    }
}

/// [`DateTime`] when a [`Demand`] was created.
pub type CreationDateTime = DateTimeOf<(Demand, unit::Creation)>;

/// [`DateTime`] when a [`Demand`] was last revised.
pub type RevisionDateTime = DateTimeOf<(Demand, unit::Revision)>;
