//! In-memory reference-data [`Catalog`].

use std::collections::HashMap;

use common::{money::Currency, Money};
use derive_more::{Display, Error};

use crate::domain::{
    activity, city, hotel, offering, transport, Activity, City, Hotel,
    ServiceOffering, Transport,
};

/// Lookup set of the reference data all demand operations resolve against.
///
/// Populated by the surrounding application (the eventual backend supplies
/// the catalogs); every id a demand or package references must resolve here.
/// All prices share a single [`Currency`], checked on build.
#[derive(Clone, Debug)]
pub struct Catalog {
    /// [`Currency`] all prices of this [`Catalog`] are expressed in.
    currency: Currency,

    /// [`City`]s of this [`Catalog`].
    cities: HashMap<city::Id, City>,

    /// [`Hotel`]s of this [`Catalog`].
    hotels: HashMap<hotel::Id, Hotel>,

    /// [`Activity`]s of this [`Catalog`].
    activities: HashMap<activity::Id, Activity>,

    /// [`Transport`]s of this [`Catalog`].
    transports: HashMap<transport::Id, Transport>,

    /// [`ServiceOffering`]s of this [`Catalog`].
    offerings: HashMap<offering::Id, ServiceOffering>,
}

impl Catalog {
    /// Starts building a new [`Catalog`] with all prices in the provided
    /// [`Currency`].
    #[must_use]
    pub fn builder(currency: Currency) -> Builder {
        Builder {
            catalog: Self {
                currency,
                cities: HashMap::new(),
                hotels: HashMap::new(),
                activities: HashMap::new(),
                transports: HashMap::new(),
                offerings: HashMap::new(),
            },
        }
    }

    /// Returns the [`Currency`] all prices of this [`Catalog`] are
    /// expressed in.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Looks up a [`City`] by its ID.
    #[must_use]
    pub fn city(&self, id: city::Id) -> Option<&City> {
        self.cities.get(&id)
    }

    /// Looks up a [`Hotel`] by its ID.
    #[must_use]
    pub fn hotel(&self, id: hotel::Id) -> Option<&Hotel> {
        self.hotels.get(&id)
    }

    /// Looks up an [`Activity`] by its ID.
    #[must_use]
    pub fn activity(&self, id: activity::Id) -> Option<&Activity> {
        self.activities.get(&id)
    }

    /// Looks up a [`Transport`] by its ID.
    #[must_use]
    pub fn transport(&self, id: transport::Id) -> Option<&Transport> {
        self.transports.get(&id)
    }

    /// Looks up a [`ServiceOffering`] by its ID.
    #[must_use]
    pub fn offering(&self, id: offering::Id) -> Option<&ServiceOffering> {
        self.offerings.get(&id)
    }
}

/// Builder of a [`Catalog`].
#[derive(Clone, Debug)]
pub struct Builder {
    /// [`Catalog`] being built.
    catalog: Catalog,
}

impl Builder {
    /// Adds the provided [`City`] to the built [`Catalog`].
    #[must_use]
    pub fn city(mut self, city: City) -> Self {
        _ = self.catalog.cities.insert(city.id, city);
        self
    }

    /// Adds the provided [`Hotel`] to the built [`Catalog`].
    #[must_use]
    pub fn hotel(mut self, hotel: Hotel) -> Self {
        _ = self.catalog.hotels.insert(hotel.id, hotel);
        self
    }

    /// Adds the provided [`Activity`] to the built [`Catalog`].
    #[must_use]
    pub fn activity(mut self, activity: Activity) -> Self {
        _ = self.catalog.activities.insert(activity.id, activity);
        self
    }

    /// Adds the provided [`Transport`] to the built [`Catalog`].
    #[must_use]
    pub fn transport(mut self, transport: Transport) -> Self {
        _ = self.catalog.transports.insert(transport.id, transport);
        self
    }

    /// Adds the provided [`ServiceOffering`] to the built [`Catalog`].
    #[must_use]
    pub fn offering(mut self, offering: ServiceOffering) -> Self {
        _ = self.catalog.offerings.insert(offering.id, offering);
        self
    }

    /// Finishes building the [`Catalog`], checking its integrity.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildError`] if some entity carries a negative price, a
    /// price in a foreign [`Currency`], or references a [`City`] absent from
    /// the built [`Catalog`].
    pub fn build(self) -> Result<Catalog, BuildError> {
        use BuildError as E;

        let catalog = self.catalog;

        for hotel in catalog.hotels.values() {
            if !catalog.cities.contains_key(&hotel.city_id) {
                return Err(E::UnknownHotelCity {
                    hotel: hotel.id,
                    city: hotel.city_id,
                });
            }
            for room in &hotel.room_types {
                if !Self::price_fits(room.price, catalog.currency) {
                    return Err(E::InvalidRoomPrice {
                        hotel: hotel.id,
                        room_type: room.id,
                    });
                }
            }
        }

        for activity in catalog.activities.values() {
            if !catalog.cities.contains_key(&activity.city_id) {
                return Err(E::UnknownActivityCity {
                    activity: activity.id,
                    city: activity.city_id,
                });
            }
            if !Self::price_fits(activity.price, catalog.currency) {
                return Err(E::InvalidActivityPrice(activity.id));
            }
        }

        for transport in catalog.transports.values() {
            if !Self::price_fits(transport.price, catalog.currency) {
                return Err(E::InvalidTransportPrice(transport.id));
            }
        }

        for offering in catalog.offerings.values() {
            if !Self::price_fits(offering.price, catalog.currency) {
                return Err(E::InvalidOfferingPrice(offering.id));
            }
        }

        Ok(catalog)
    }

    /// Checks whether the provided price is non-negative and expressed in
    /// the provided [`Currency`].
    fn price_fits(price: Money, currency: Currency) -> bool {
        price.currency == currency && !price.is_negative()
    }
}

/// Error of building a [`Catalog`].
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum BuildError {
    /// [`Hotel`] references a [`City`] absent from the [`Catalog`].
    #[display("`Hotel(id: {hotel})` references unknown `City(id: {city})`")]
    UnknownHotelCity {
        /// ID of the offending [`Hotel`].
        hotel: hotel::Id,

        /// ID of the missing [`City`].
        city: city::Id,
    },

    /// [`Activity`] references a [`City`] absent from the [`Catalog`].
    #[display(
        "`Activity(id: {activity})` references unknown `City(id: {city})`"
    )]
    UnknownActivityCity {
        /// ID of the offending [`Activity`].
        activity: activity::Id,

        /// ID of the missing [`City`].
        city: city::Id,
    },

    /// [`hotel::RoomType`] carries a negative or foreign-currency price.
    #[display(
        "`RoomType(id: {room_type})` of `Hotel(id: {hotel})` carries an \
         invalid price"
    )]
    InvalidRoomPrice {
        /// ID of the offending [`Hotel`].
        hotel: hotel::Id,

        /// ID of the offending [`hotel::RoomType`].
        room_type: hotel::room_type::Id,
    },

    /// [`Activity`] carries a negative or foreign-currency price.
    #[display("`Activity(id: {_0})` carries an invalid price")]
    InvalidActivityPrice(#[error(not(source))] activity::Id),

    /// [`Transport`] carries a negative or foreign-currency price.
    #[display("`Transport(id: {_0})` carries an invalid price")]
    InvalidTransportPrice(#[error(not(source))] transport::Id),

    /// [`ServiceOffering`] carries a negative or foreign-currency price.
    #[display("`ServiceOffering(id: {_0})` carries an invalid price")]
    InvalidOfferingPrice(#[error(not(source))] offering::Id),
}

#[cfg(test)]
pub(crate) mod sample {
    //! Sample [`Catalog`] shared by command and query tests.

    use common::{money::Currency, Period};

    use crate::{
        domain::{
            activity, city,
            demand::client::CitySelection,
            hotel, offering,
            transport,
            traveler::{Email, FullName, Phone},
            Activity, City, ClientDemand, ClientInfo, Hotel, MainTraveler,
            ServiceOffering, Transport,
        },
        Config, Service,
    };

    use super::Catalog;

    /// Sample [`Service`] with the ids of its catalog entries.
    pub(crate) struct Sample {
        pub(crate) service: Service,
        pub(crate) marrakech: city::Id,
        pub(crate) essaouira: city::Id,
        pub(crate) fes: city::Id,
        pub(crate) riad: hotel::Id,
        pub(crate) riad_double: hotel::room_type::Id,
        pub(crate) riad_suite: hotel::room_type::Id,
        pub(crate) closed_hotel: hotel::Id,
        pub(crate) fes_hotel: hotel::Id,
        pub(crate) cooking_class: activity::Id,
        pub(crate) retired_tour: activity::Id,
        pub(crate) van: transport::Id,
        pub(crate) broken_bus: transport::Id,
        pub(crate) guide: offering::Id,
    }

    fn city(id: city::Id, name: &str, is_enabled: bool) -> City {
        City {
            id,
            name: city::Name::new(name).unwrap(),
            region: None,
            country: city::Country::new("Morocco"),
            is_enabled,
        }
    }

    fn room(
        id: hotel::room_type::Id,
        category: hotel::room_type::Category,
        price: &str,
        capacity: u16,
    ) -> hotel::RoomType {
        hotel::RoomType::new(
            id,
            category,
            price.parse().unwrap(),
            hotel::room_type::Capacity::new(capacity).unwrap(),
        )
        .unwrap()
    }

    /// Builds the sample [`Service`].
    pub(crate) fn sample() -> Sample {
        use hotel::room_type::Category;

        let marrakech = city::Id::new();
        let essaouira = city::Id::new();
        let fes = city::Id::new();
        let riad = hotel::Id::new();
        let riad_double = hotel::room_type::Id::new();
        let riad_suite = hotel::room_type::Id::new();
        let closed_hotel = hotel::Id::new();
        let fes_hotel = hotel::Id::new();
        let cooking_class = activity::Id::new();
        let retired_tour = activity::Id::new();
        let van = transport::Id::new();
        let broken_bus = transport::Id::new();
        let guide = offering::Id::new();

        let catalog = Catalog::builder(Currency::Usd)
            .city(city(marrakech, "Marrakech", true))
            .city(city(essaouira, "Essaouira", false))
            .city(city(fes, "Fes", true))
            .hotel(Hotel {
                id: riad,
                name: hotel::Name::new("Riad Yasmine").unwrap(),
                city_id: marrakech,
                room_types: vec![
                    room(riad_double, Category::Double, "80USD", 2),
                    room(riad_suite, Category::Suite, "200USD", 4),
                ],
                stars: hotel::Stars::new(4).unwrap(),
                is_active: true,
            })
            .hotel(Hotel {
                id: closed_hotel,
                name: hotel::Name::new("Hotel Atlas").unwrap(),
                city_id: marrakech,
                room_types: vec![room(
                    hotel::room_type::Id::new(),
                    Category::Single,
                    "40USD",
                    1,
                )],
                stars: hotel::Stars::new(2).unwrap(),
                is_active: false,
            })
            .hotel(Hotel {
                id: fes_hotel,
                name: hotel::Name::new("Dar Fes").unwrap(),
                city_id: fes,
                room_types: vec![room(
                    hotel::room_type::Id::new(),
                    Category::Double,
                    "60USD",
                    2,
                )],
                stars: hotel::Stars::new(3).unwrap(),
                is_active: true,
            })
            .activity(Activity {
                id: cooking_class,
                name: activity::Name::new("Cooking class").unwrap(),
                description: activity::Description::new(
                    "Tagine cooking class in the medina",
                )
                .unwrap(),
                city_id: marrakech,
                price: "30USD".parse().unwrap(),
                is_active: true,
            })
            .activity(Activity {
                id: retired_tour,
                name: activity::Name::new("Palm grove tour").unwrap(),
                description: activity::Description::new(
                    "Discontinued palm grove tour",
                )
                .unwrap(),
                city_id: marrakech,
                price: "25USD".parse().unwrap(),
                is_active: false,
            })
            .transport(Transport {
                id: van,
                kind: transport::Kind::Van,
                company: transport::CompanyName::new("Sahara Lines"),
                price: "150USD".parse().unwrap(),
                is_active: true,
            })
            .transport(Transport {
                id: broken_bus,
                kind: transport::Kind::Autocar,
                company: None,
                price: "300USD".parse().unwrap(),
                is_active: false,
            })
            .offering(ServiceOffering {
                id: guide,
                kind: offering::Kind::Guide,
                provider: offering::Provider::new("Atlas Guides").unwrap(),
                price: "100USD".parse().unwrap(),
                is_active: true,
            })
            .build()
            .unwrap();

        let service = Service::new(
            Config {
                currency: Currency::Usd,
            },
            catalog,
        )
        .unwrap();

        Sample {
            service,
            marrakech,
            essaouira,
            fes,
            riad,
            riad_double,
            riad_suite,
            closed_hotel,
            fes_hotel,
            cooking_class,
            retired_tour,
            van,
            broken_bus,
            guide,
        }
    }

    /// Builds a sample trip [`Period`].
    pub(crate) fn period(start: &str, end: &str) -> Period {
        Period::new(start.parse().unwrap(), end.parse().unwrap()).unwrap()
    }

    /// Builds a sample [`ClientInfo`].
    pub(crate) fn client_info() -> ClientInfo {
        ClientInfo {
            main_traveler: MainTraveler {
                full_name: FullName::new("Amina Berrada").unwrap(),
                email: Email::new("amina@example.com").unwrap(),
                phone: Phone::new("555-123-4567").unwrap(),
            },
            travelers: vec![],
            period: period("2024-06-01", "2024-06-04"),
            duration_days: 3,
        }
    }

    /// Builds a sample [`CitySelection`] leg.
    pub(crate) fn leg(
        city_id: city::Id,
        activity_ids: Vec<activity::Id>,
    ) -> CitySelection {
        CitySelection {
            city_id,
            period: period("2024-06-01", "2024-06-04"),
            duration_days: 3,
            activity_ids,
        }
    }

    /// Builds a sample single-leg [`ClientDemand`] visiting Marrakech.
    pub(crate) fn client_demand(s: &Sample) -> ClientDemand {
        ClientDemand {
            client: client_info(),
            cities: vec![leg(s.marrakech, vec![s.cooking_class])],
            comment: None,
        }
    }
}
