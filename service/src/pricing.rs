//! Pricing rules for demand aggregation.
//!
//! Policy: room prices are nightly per room, a leg costs its rooms subtotal
//! times the night count plus its activities, and the demand total is the
//! sum of leg prices, trip-wide services and transport, with the benefit
//! margin applied before the tax. Totals are rounded to 2 decimal places.

use common::{money::Currency, Money, Percent};
use derive_more::{Display, Error};

use crate::domain::demand::RoomSelection;
#[cfg(doc)]
use crate::domain::{Demand, ServiceOffering, Transport};

/// Error of mixing [`Currency`]ies within a single computation.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
#[display("expected `{expected}` price, got `{found}`")]
pub struct CurrencyMismatch {
    /// [`Currency`] the computation is performed in.
    pub expected: Currency,

    /// [`Currency`] of the offending price.
    pub found: Currency,
}

/// Sums the `price` into the `total`, checking the [`Currency`] matches.
fn add(total: Money, price: Money) -> Result<Money, CurrencyMismatch> {
    total.try_add(price).ok_or(CurrencyMismatch {
        expected: total.currency,
        found: price.currency,
    })
}

/// Computes the price of a single itinerary leg.
///
/// The leg costs its nightly rooms subtotal times the `nights` count, plus
/// the flat prices of its activities. The result is pre-benefit and pre-tax.
///
/// # Errors
///
/// Returns a [`CurrencyMismatch`] error if any price is not in the provided
/// [`Currency`].
pub fn leg_total(
    currency: Currency,
    nights: u16,
    rooms: &[RoomSelection],
    activity_prices: &[Money],
) -> Result<Money, CurrencyMismatch> {
    let mut rooms_subtotal = Money::zero(currency);
    for room in rooms {
        rooms_subtotal =
            add(rooms_subtotal, room.unit_price.times(room.count.into()))?;
    }

    let mut total = rooms_subtotal.times(nights.into());
    for price in activity_prices {
        total = add(total, *price)?;
    }

    Ok(total.round())
}

/// Computes the total price of a [`Demand`].
///
/// The subtotal is the sum of the leg prices, the trip-wide services
/// (unit price times quantity) and the selected [`Transport`] price. The
/// benefit margin is applied on the subtotal first, the tax second.
///
/// # Errors
///
/// Returns a [`CurrencyMismatch`] error if any price is not in the provided
/// [`Currency`].
pub fn demand_total(
    currency: Currency,
    leg_prices: &[Money],
    service_prices: &[(Money, u32)],
    transport_price: Option<Money>,
    benefit: Option<Percent>,
    tax: Option<Percent>,
) -> Result<Money, CurrencyMismatch> {
    let mut total = Money::zero(currency);
    for price in leg_prices {
        total = add(total, *price)?;
    }
    for (price, quantity) in service_prices {
        total = add(total, price.times(*quantity))?;
    }
    if let Some(price) = transport_price {
        total = add(total, price)?;
    }

    if let Some(benefit) = benefit {
        total = total.plus_percent(benefit);
    }
    if let Some(tax) = tax {
        total = total.plus_percent(tax);
    }

    Ok(total.round())
}
