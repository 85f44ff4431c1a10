//! Domain definitions.

pub mod activity;
pub mod city;
pub mod demand;
pub mod hotel;
pub mod offering;
pub mod package;
pub mod transport;
pub mod traveler;

pub use self::{
    activity::Activity,
    city::City,
    demand::{client::ClientDemand, Demand},
    hotel::Hotel,
    offering::ServiceOffering,
    package::Package,
    transport::Transport,
    traveler::{ClientInfo, MainTraveler, Traveler},
};
