//! [`Transport`] definitions.

use common::{define_kind, Money};
use derive_more::{AsRef, Display, From, FromStr, Into};
use uuid::Uuid;

/// Transport bookable for a whole trip.
///
/// A [`Transport`] is not tied to any city: a single vehicle serves the full
/// multi-city itinerary.
#[derive(Clone, Debug)]
pub struct Transport {
    /// ID of this [`Transport`].
    pub id: Id,

    /// [`Kind`] of this [`Transport`].
    pub kind: Kind,

    /// [`CompanyName`] operating this [`Transport`], if known.
    pub company: Option<CompanyName>,

    /// Price of this [`Transport`] for a whole trip.
    pub price: Money,

    /// Whether this [`Transport`] is offered to clients.
    pub is_active: bool,
}

/// ID of a [`Transport`].
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

define_kind! {
    #[doc = "Kind of a [`Transport`]."]
    enum Kind {
        #[doc = "Van carrying around 5-6 passengers."]
        Van = 1,

        #[doc = "Minibus carrying around 20 passengers."]
        Minibus = 2,

        #[doc = "Autocar carrying around 50 passengers."]
        Autocar = 3,
    }
}

/// Name of the company operating a [`Transport`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct CompanyName(String);

impl CompanyName {
    /// Creates a new [`CompanyName`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`CompanyName`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`CompanyName`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl FromStr for CompanyName {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `CompanyName`")
    }
}
