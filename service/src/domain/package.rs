//! [`Package`] definitions.

use common::{unit, DateTimeOf, Money, Percent};
use derive_more::{AsRef, Display, From, FromStr, Into};
use uuid::Uuid;

use crate::domain::{activity, city, hotel, offering, transport};
#[cfg(doc)]
use crate::domain::{Activity, City, Hotel, ServiceOffering, Transport};
#[cfg(doc)]
use common::DateTime;

/// Pre-assembled, fixed-itinerary product sold as a unit.
#[derive(Clone, Debug)]
pub struct Package {
    /// ID of this [`Package`].
    pub id: Id,

    /// [`Name`] of this [`Package`].
    pub name: Name,

    /// IDs of the [`City`]s this [`Package`] visits.
    pub city_ids: Vec<city::Id>,

    /// IDs of the [`Hotel`]s this [`Package`] includes.
    pub hotel_ids: Vec<hotel::Id>,

    /// IDs of the [`Activity`]s this [`Package`] includes.
    pub activity_ids: Vec<activity::Id>,

    /// IDs of the [`ServiceOffering`]s this [`Package`] includes.
    pub offering_ids: Vec<offering::Id>,

    /// IDs of the [`Transport`]s this [`Package`] includes.
    pub transport_ids: Vec<transport::Id>,

    /// Base price of this [`Package`], before any discount.
    pub base_price: Money,

    /// Discount applied to the `base_price`.
    pub discount: Percent,

    /// [`DateTime`] when this [`Package`] was created.
    pub created_at: CreationDateTime,
}

impl Package {
    /// Returns the final price of this [`Package`]: the base price reduced
    /// by the discount, rounded to 2 decimal places.
    ///
    /// Always derived, never stored, so it cannot drift from the base price
    /// and discount.
    #[must_use]
    pub fn final_price(&self) -> Money {
        self.base_price.minus_percent(self.discount).round()
    }
}

/// ID of a [`Package`].
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

/// Name of a [`Package`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// [`DateTime`] when a [`Package`] was created.
pub type CreationDateTime = DateTimeOf<(Package, unit::Creation)>;

#[cfg(test)]
mod spec {
    use common::{DateTime, Money, Percent};

    use super::{Id, Name, Package};

    fn package(base_price: Money, discount: Percent) -> Package {
        Package {
            id: Id::new(),
            name: Name::new("Imperial Cities").unwrap(),
            city_ids: vec![],
            hotel_ids: vec![],
            activity_ids: vec![],
            offering_ids: vec![],
            transport_ids: vec![],
            base_price,
            discount,
            created_at: DateTime::now().coerce(),
        }
    }

    #[test]
    fn final_price_is_discounted_base() {
        let p = package(
            "2000USD".parse().unwrap(),
            "15".parse().unwrap(),
        );
        assert_eq!(p.final_price(), "1700.00USD".parse().unwrap());
    }

    #[test]
    fn final_price_edge_discounts() {
        let p = package("999.99USD".parse().unwrap(), "0".parse().unwrap());
        assert_eq!(p.final_price(), "999.99USD".parse().unwrap());

        let p = package("999.99USD".parse().unwrap(), "100".parse().unwrap());
        assert_eq!(p.final_price(), "0USD".parse().unwrap());
    }

    #[test]
    fn final_price_rounds_to_cents() {
        let p = package("333.33USD".parse().unwrap(), "10".parse().unwrap());
        // 333.33 * 0.9 = 299.997
        assert_eq!(p.final_price(), "300.00USD".parse().unwrap());
    }
}
