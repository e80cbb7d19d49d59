//! Metro route-planning server.
//!
//! A web service that answers: "what is the best route between these two
//! stations?", where "best" depends on the rider's transfer aversion,
//! mobility constraints, and the time of day.

pub mod domain;
pub mod network;
pub mod planner;
pub mod web;
