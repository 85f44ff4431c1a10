//! [`Command`] definition.

pub mod create_package;
pub mod send_demand;
pub mod submit_demand;
pub mod validate_demand;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    create_package::CreatePackage,
    send_demand::SendDemand,
    submit_demand::SubmitDemand,
    validate_demand::{LegAssignment, RoomChoice, ValidateDemand},
};
