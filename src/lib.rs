//! Ameen Pay waitlist client
//!
//! Terminal front end for the Ameen Pay commission-advance waitlist: static
//! product screens plus a lead-capture form that submits to the Airtable
//! collector.

pub mod cli;
pub mod collector;
pub mod config;
pub mod errors;
pub mod flow;
pub mod models;
pub mod tui;
