//! Read models projected from the domain for presentation.

pub mod demand;
