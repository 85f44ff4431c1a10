//! [`Hotel`] definitions.

use common::Money;
use derive_more::{AsRef, Display, From, FromStr, Into};
use uuid::Uuid;

use crate::domain::city;
#[cfg(doc)]
use crate::domain::City;

/// Hotel offered in some [`City`].
#[derive(Clone, Debug)]
pub struct Hotel {
    /// ID of this [`Hotel`].
    pub id: Id,

    /// [`Name`] of this [`Hotel`].
    pub name: Name,

    /// ID of the [`City`] this [`Hotel`] is located in.
    pub city_id: city::Id,

    /// [`RoomType`]s this [`Hotel`] offers.
    pub room_types: Vec<RoomType>,

    /// [`Stars`] rating of this [`Hotel`].
    pub stars: Stars,

    /// Whether this [`Hotel`] is offered to clients.
    pub is_active: bool,
}

impl Hotel {
    /// Looks up a [`RoomType`] of this [`Hotel`] by its ID.
    #[must_use]
    pub fn room_type(&self, id: room_type::Id) -> Option<&RoomType> {
        self.room_types.iter().find(|r| r.id == id)
    }
}

/// ID of a [`Hotel`].
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

/// Name of a [`Hotel`].
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

/// Star rating of a [`Hotel`].
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub struct Stars(u8);

impl Stars {
    /// Creates a new [`Stars`] rating if the given `stars` is within the
    /// 1 to 5 range.
    #[must_use]
    pub fn new(stars: u8) -> Option<Self> {
        (1..=5).contains(&stars).then_some(Self(stars))
    }

    /// Creates a new [`Stars`] rating without performing any validation.
    ///
    /// # Safety
    ///
    /// The provided value must be within the 1 to 5 range.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(stars: u8) -> Self {
        Self(stars)
    }

    /// Converts this [`Stars`] rating into its [`u8`] representation.
    #[must_use]
    pub const fn u8(self) -> u8 {
        self.0
    }
}

/// Type of room a [`Hotel`] offers, with its nightly price.
#[derive(Clone, Debug)]
pub struct RoomType {
    /// ID of this [`RoomType`].
    pub id: room_type::Id,

    /// [`Category`] of this [`RoomType`].
    ///
    /// [`Category`]: room_type::Category
    pub category: room_type::Category,

    /// Nightly price of a single room of this [`RoomType`].
    pub price: Money,

    /// [`Capacity`] of a single room of this [`RoomType`].
    ///
    /// [`Capacity`]: room_type::Capacity
    pub capacity: room_type::Capacity,
}

impl RoomType {
    /// Creates a new [`RoomType`] if the given `price` is not negative.
    #[must_use]
    pub fn new(
        id: room_type::Id,
        category: room_type::Category,
        price: Money,
        capacity: room_type::Capacity,
    ) -> Option<Self> {
        (!price.is_negative()).then_some(Self {
            id,
            category,
            price,
            capacity,
        })
    }
}

pub mod room_type {
    //! [`RoomType`]-related definitions.

    use common::define_kind;
    use derive_more::{Display, From, FromStr, Into};
    use uuid::Uuid;

    #[cfg(doc)]
    use super::RoomType;

    /// ID of a [`RoomType`].
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
        #[doc = "Category of a [`RoomType`]."]
        enum Category {
            #[doc = "Room for one person."]
            Single = 1,

            #[doc = "Room for two persons."]
            Double = 2,

            #[doc = "Room for three persons."]
            Triple = 3,

            #[doc = "Family room."]
            Family = 4,

            #[doc = "Suite."]
            Suite = 5,
        }
    }

    /// Number of persons a single room of a [`RoomType`] accommodates.
    #[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
    pub struct Capacity(u16);

    impl Capacity {
        /// Creates a new [`Capacity`] if the given `persons` is positive.
        #[must_use]
        pub fn new(persons: u16) -> Option<Self> {
            (persons > 0).then_some(Self(persons))
        }

        /// Creates a new [`Capacity`] without performing any validation.
        ///
        /// # Safety
        ///
        /// The provided value must be positive.
        #[expect(unsafe_code, reason = "bypass")]
        #[must_use]
        pub unsafe fn new_unchecked(persons: u16) -> Self {
            Self(persons)
        }

        /// Converts this [`Capacity`] into its [`u16`] representation.
        #[must_use]
        pub const fn u16(self) -> u16 {
            self.0
        }
    }
}

#[cfg(test)]
mod spec {
    use super::{room_type, RoomType, Stars};

    #[test]
    fn stars_range() {
        assert!(Stars::new(0).is_none());
        assert!(Stars::new(6).is_none());
        assert_eq!(Stars::new(5).map(Stars::u8), Some(5));
    }

    #[test]
    fn capacity_is_positive() {
        assert!(room_type::Capacity::new(0).is_none());
        assert_eq!(room_type::Capacity::new(2).map(|c| c.u16()), Some(2));
    }

    #[test]
    fn room_type_rejects_negative_price() {
        let capacity = room_type::Capacity::new(2).unwrap();

        assert!(RoomType::new(
            room_type::Id::new(),
            room_type::Category::Double,
            "-1USD".parse().unwrap(),
            capacity,
        )
        .is_none());

        assert!(RoomType::new(
            room_type::Id::new(),
            room_type::Category::Double,
            "80USD".parse().unwrap(),
            capacity,
        )
        .is_some());
    }
}
