//! [`ServiceOffering`] definitions.

use common::{define_kind, Money};
use derive_more::{AsRef, Display, From, FromStr, Into};
use uuid::Uuid;

/// Trip-wide service bookable for a demand.
#[derive(Clone, Debug)]
pub struct ServiceOffering {
    /// ID of this [`ServiceOffering`].
    pub id: Id,

    /// [`Kind`] of this [`ServiceOffering`].
    pub kind: Kind,

    /// [`Provider`] delivering this [`ServiceOffering`].
    pub provider: Provider,

    /// Price of a single unit of this [`ServiceOffering`].
    pub price: Money,

    /// Whether this [`ServiceOffering`] is offered to clients.
    pub is_active: bool,
}

/// ID of a [`ServiceOffering`].
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
    #[doc = "Kind of a [`ServiceOffering`]."]
    enum Kind {
        #[doc = "Local guide."]
        Guide = 1,

        #[doc = "Photography."]
        Photography = 2,

        #[doc = "Personal driver."]
        Driver = 3,

        #[doc = "Translation."]
        Translation = 4,

        #[doc = "Security."]
        Security = 5,

        #[doc = "Transport-related service."]
        TransportService = 6,

        #[doc = "Catering."]
        Catering = 7,

        #[doc = "Equipment rental."]
        Equipment = 8,

        #[doc = "Insurance."]
        Insurance = 9,

        #[doc = "Any other service."]
        Other = 10,
    }
}

/// Name of the provider delivering a [`ServiceOffering`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Provider(String);

impl Provider {
    /// Creates a new [`Provider`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`Provider`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Provider`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl FromStr for Provider {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Provider`")
    }
}

#[cfg(test)]
mod spec {
    use super::Kind;

    #[test]
    fn wire_vocabulary() {
        assert_eq!(Kind::Guide.to_string(), "GUIDE");
        assert_eq!(Kind::TransportService.to_string(), "TRANSPORT_SERVICE");
        assert_eq!("CATERING".parse::<Kind>().unwrap(), Kind::Catering);
    }
}
