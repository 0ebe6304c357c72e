//! Connection types.
//!
//! A `Connection` is one answer to an interconnection query: either a direct
//! flight or two flights chained through an intermediate airport.

use chrono::NaiveDateTime;

use super::{AirportCode, FlightSlot};

/// A single flight between two airports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leg {
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
}

impl Leg {
    /// A leg flying `slot` from `origin` to `destination`.
    pub fn new(origin: AirportCode, destination: AirportCode, slot: &FlightSlot) -> Self {
        Self {
            origin,
            destination,
            departure: slot.departure(),
            arrival: slot.arrival(),
        }
    }
}

/// A complete trip: one leg (direct) or two chained legs (one stop).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    legs: Vec<Leg>,
}

impl Connection {
    /// A direct flight.
    pub fn direct(from: AirportCode, to: AirportCode, slot: &FlightSlot) -> Self {
        Self {
            legs: vec![Leg::new(from, to, slot)],
        }
    }

    /// Two flights changing at `via`.
    pub fn one_stop(
        from: AirportCode,
        via: AirportCode,
        to: AirportCode,
        first: &FlightSlot,
        second: &FlightSlot,
    ) -> Self {
        Self {
            legs: vec![Leg::new(from, via, first), Leg::new(via, to, second)],
        }
    }

    /// Number of intermediate stops: 0 or 1.
    pub fn stops(&self) -> usize {
        self.legs.len() - 1
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    pub fn departure(&self) -> NaiveDateTime {
        self.legs[0].departure
    }

    pub fn arrival(&self) -> NaiveDateTime {
        self.legs[self.legs.len() - 1].arrival
    }
}
