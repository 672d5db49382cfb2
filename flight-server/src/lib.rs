//! Flight route planner server.
//!
//! A web application that answers: "what is the shortest multi-leg
//! flight itinerary between these two airports, and what will it
//! roughly cost, emit, and risk in delays?"

pub mod advice;
pub mod cache;
pub mod dataset;
pub mod domain;
pub mod emissions;
pub mod estimator;
pub mod geo;
pub mod network;
pub mod planner;
pub mod query;
pub mod web;
