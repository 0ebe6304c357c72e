//! Flight interconnection server.
//!
//! A web service that answers: "which flights get me from this airport to
//! that one inside my travel window, directly or with one change?"

pub mod cache;
pub mod config;
pub mod domain;
pub mod planner;
pub mod routes;
pub mod schedules;
pub mod validation;
pub mod web;
