//! Domain types for the interconnection planner.
//!
//! This module contains the value types that flow through a query: airport
//! codes, routes, monthly timetables, flight slots and the resulting
//! connections. All types enforce their invariants at construction time.

mod airport;
mod connection;
mod route;
mod schedule;
mod time;

pub use airport::{AirportCode, InvalidAirportCode};
pub use connection::{Connection, Leg};
pub use route::Route;
pub use schedule::{FlightSlot, MonthlySchedule, ScheduleDay, ScheduledFlight};
pub use time::{TimeError, YearMonth, flight_instants, parse_hhmm};
