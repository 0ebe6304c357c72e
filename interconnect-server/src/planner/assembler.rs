//! Interconnection search.
//!
//! Answers "which flights get me from A to B inside this window, with at
//! most one change?". Direct flights and one-stop itineraries are resolved
//! concurrently; within the one-stop branch every intermediate airport is
//! resolved concurrently too, and for each airport both legs are fetched at
//! the same time.
//!
//! The result lists every direct connection first, in timetable order. The
//! one-stop connections follow, grouped by intermediate airport in whichever
//! order the airports finished resolving.

use chrono::NaiveDateTime;
use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, info};

use crate::domain::{AirportCode, Connection, FlightSlot};
use crate::validation::{ConnectionValidatorChain, RouteValidatorChain};

use super::config::SearchConfig;
use super::error::PlannerError;
use super::provider::{RouteProvider, ScheduleProvider};
use super::route_index::RouteGraphIndex;
use super::slot_resolver::ScheduleSlotResolver;

/// Finds direct and one-stop connections between two airports.
pub struct ConnectionAssembler<R, S> {
    index: RouteGraphIndex<R>,
    resolver: ScheduleSlotResolver<S>,
    connection_rules: ConnectionValidatorChain,
    fan_out: usize,
}

impl<R: RouteProvider, S: ScheduleProvider> ConnectionAssembler<R, S> {
    /// Create an assembler with the standard rule chains for `config`.
    pub fn new(routes: R, schedules: S, config: &SearchConfig) -> Self {
        Self::with_rules(
            routes,
            schedules,
            RouteValidatorChain::standard(&config.operator),
            ConnectionValidatorChain::standard(config.min_layover()),
            config.fan_out(),
        )
    }

    /// Create an assembler with custom rule chains.
    pub fn with_rules(
        routes: R,
        schedules: S,
        route_rules: RouteValidatorChain,
        connection_rules: ConnectionValidatorChain,
        fan_out: usize,
    ) -> Self {
        let fan_out = fan_out.max(1);
        Self {
            index: RouteGraphIndex::new(routes, route_rules),
            resolver: ScheduleSlotResolver::new(schedules, fan_out),
            connection_rules,
            fan_out,
        }
    }

    /// Every connection from `departure` to `arrival` inside `(start, end)`.
    ///
    /// Fails as a whole if any upstream fetch fails.
    pub async fn find_interconnections(
        &self,
        departure: AirportCode,
        arrival: AirportCode,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Connection>, PlannerError> {
        if start >= end {
            return Err(PlannerError::InvalidWindow { start, end });
        }

        let (direct, one_stop) = tokio::try_join!(
            self.direct_connections(departure, arrival, start, end),
            self.one_stop_connections(departure, arrival, start, end),
        )?;

        info!(
            %departure,
            %arrival,
            direct = direct.len(),
            one_stop = one_stop.len(),
            "Interconnection search complete"
        );

        let mut connections = direct;
        connections.extend(one_stop);
        Ok(connections)
    }

    async fn direct_connections(
        &self,
        departure: AirportCode,
        arrival: AirportCode,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Connection>, PlannerError> {
        if !self.index.exists_direct_route(&departure, &arrival).await? {
            return Ok(Vec::new());
        }

        let slots = self
            .resolver
            .find_flight_slots(departure, arrival, start, end)
            .await?;

        Ok(slots
            .iter()
            .map(|slot| Connection::direct(departure, arrival, slot))
            .collect())
    }

    async fn one_stop_connections(
        &self,
        departure: AirportCode,
        arrival: AirportCode,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Connection>, PlannerError> {
        let intermediates = self.index.intermediate_airports(&departure, &arrival).await?;
        debug!(
            %departure,
            %arrival,
            intermediates = intermediates.len(),
            "Resolving one-stop connections"
        );

        let per_airport: Vec<Vec<Connection>> = stream::iter(intermediates)
            .map(move |via| self.connections_via(departure, via, arrival, start, end))
            .buffer_unordered(self.fan_out)
            .try_collect()
            .await?;

        Ok(per_airport.concat())
    }

    async fn connections_via(
        &self,
        departure: AirportCode,
        via: AirportCode,
        arrival: AirportCode,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Connection>, PlannerError> {
        let (first_legs, second_legs) = tokio::try_join!(
            self.resolver.find_flight_slots(departure, via, start, end),
            self.resolver.find_flight_slots(via, arrival, start, end),
        )?;

        let connections = self.pair_legs(departure, via, arrival, &first_legs, &second_legs);
        debug!(
            %via,
            first_legs = first_legs.len(),
            second_legs = second_legs.len(),
            connections = connections.len(),
            "Paired legs"
        );
        Ok(connections)
    }

    /// Every (first, second) pair the connection rules accept, first-leg major.
    fn pair_legs(
        &self,
        departure: AirportCode,
        via: AirportCode,
        arrival: AirportCode,
        first_legs: &[FlightSlot],
        second_legs: &[FlightSlot],
    ) -> Vec<Connection> {
        first_legs
            .iter()
            .flat_map(|first| {
                second_legs
                    .iter()
                    .filter(|second| self.connection_rules.is_valid_connection(first, second))
                    .map(move |second| Connection::one_stop(departure, via, arrival, first, second))
            })
            .collect()
    }

    /// The route graph this assembler searches.
    pub fn index(&self) -> &RouteGraphIndex<R> {
        &self.index
    }

    /// The slot resolver this assembler reads timetables through.
    pub fn resolver(&self) -> &ScheduleSlotResolver<S> {
        &self.resolver
    }
}
