//! [`Traveler`]-related definitions.

use std::{str::FromStr, sync::LazyLock};

use common::{date::Period, define_kind};
use derive_more::{AsRef, Display};
use regex::Regex;

/// Person going on a trip.
#[derive(Clone, Debug)]
pub struct Traveler {
    /// [`FullName`] of this [`Traveler`].
    pub full_name: FullName,

    /// [`Age`] of this [`Traveler`] in years.
    pub age: Age,

    /// [`Gender`] of this [`Traveler`].
    pub gender: Gender,

    /// [`Category`] of this [`Traveler`].
    pub category: Category,
}

/// Age of a [`Traveler`] in years.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub struct Age(u8);

impl Age {
    /// Creates a new [`Age`] if the given `years` is within the 0 to 130
    /// range.
    #[must_use]
    pub fn new(years: u8) -> Option<Self> {
        (years <= 130).then_some(Self(years))
    }

    /// Creates a new [`Age`] without performing any validation.
    ///
    /// # Safety
    ///
    /// The provided value must be within the 0 to 130 range.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(years: u8) -> Self {
        Self(years)
    }

    /// Converts this [`Age`] into its [`u8`] representation.
    #[must_use]
    pub const fn u8(self) -> u8 {
        self.0
    }
}

define_kind! {
    #[doc = "Gender of a [`Traveler`]."]
    enum Gender {
        #[doc = "Male."]
        Male = 1,

        #[doc = "Female."]
        Female = 2,
    }
}

define_kind! {
    #[doc = "Pricing category of a [`Traveler`]."]
    enum Category {
        #[doc = "Adult."]
        Adult = 1,

        #[doc = "Child."]
        Child = 2,

        #[doc = "Infant."]
        Infant = 3,
    }
}

/// Booking contact of a demand.
///
/// Exactly one per booking, distinct from the [`Traveler`]s on the trip.
#[derive(Clone, Debug)]
pub struct MainTraveler {
    /// [`FullName`] of this [`MainTraveler`].
    pub full_name: FullName,

    /// [`Email`] of this [`MainTraveler`].
    pub email: Email,

    /// [`Phone`] of this [`MainTraveler`].
    pub phone: Phone,
}

/// Client side of a demand: who travels and when.
#[derive(Clone, Debug)]
pub struct ClientInfo {
    /// [`MainTraveler`] acting as the booking contact.
    pub main_traveler: MainTraveler,

    /// [`Traveler`]s going on the trip.
    pub travelers: Vec<Traveler>,

    /// [`Period`] of the whole trip.
    pub period: Period,

    /// Declared length of the trip in days.
    ///
    /// Must equal the night count of the `period`.
    pub duration_days: u16,
}

/// Full name of a [`Traveler`] or [`MainTraveler`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct FullName(String);

impl FullName {
    /// Creates a new [`FullName`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`FullName`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`FullName`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl FromStr for FullName {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `FullName`")
    }
}

/// Email address of a [`MainTraveler`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Email(String);

impl Email {
    /// Creates a new [`Email`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `address` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Creates a new [`Email`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        Self::check(&address).then_some(Self(address))
    }

    /// Checks whether the given `address` is a valid [`Email`].
    fn check(address: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Email`] format.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(
                "^([^\\x00-\\x20\\x22\\x28\\x29\\x2c\\x2e\\x3a-\
                     \\x3c\\x3e\\x40\\x5b-\\x5d\\x7f-\\xff]+\
                  |\\x22([^\\x0d\\x22\\x5c\\x80-\\xff]\
                  |\\x5c[\\x00-\\x7f])*\\x22)\
                  (\\x2e([^\\x00-\\x20\\x22\\x28\\x29\\x2c\\x2e\\x3a-\
                           \\x3c\\x3e\\x40\\x5b-\\x5d\\x7f-\\xff]+\
                        |\\x22([^\\x0d\\x22\\x5c\\x80-\\xff]\
                        |\\x5c[\\x00-\\x7f])*\\x22))*\\x40\
                  ([^\\x00-\\x20\\x22\\x28\\x29\\x2c\\x2e\\x3a-\
                     \\x3c\\x3e\\x40\\x5b-\\x5d\\x7f-\\xff]+\
                  |\\x5b([^\\x0d\\x5b-\\x5d\\x80-\\xff]\
                        |\\x5c[\\x00-\\x7f])*\\x5d)\
                  (\\x2e([^\\x00-\\x20\\x22\\x28\\x29\\x2c\\x2e\\x3a-\
                           \\x3c\\x3e\\x40\\x5b-\\x5d\\x7f-\\xff]+\
                        |\\x5b([^\\x0d\\x5b-\\x5d\\x80-\\xff]\
                        |\\x5c[\\x00-\\x7f])*\\x5d))*$",
            )
            .expect("valid regex")
        });

        REGEX.is_match(address.as_ref())
    }
}

impl FromStr for Email {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Email`")
    }
}

/// Phone number of a [`MainTraveler`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Phone(String);

impl Phone {
    /// Creates a new [`Phone`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `number` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    /// Creates a new [`Phone`] if the given `number` is valid.
    #[must_use]
    pub fn new(number: impl Into<String>) -> Option<Self> {
        let number = number.into();
        Self::check(&number).then_some(Self(number))
    }

    /// Checks whether the given `number` is a valid [`Phone`].
    fn check(number: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Phone`] format.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^([+]?\d{1,2}[-\s]?|)\d{3}[-\s]?\d{3}[-\s]?\d{4}$")
                .expect("valid regex")
        });

        REGEX.is_match(number.as_ref())
    }
}

impl FromStr for Phone {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Phone`")
    }
}
