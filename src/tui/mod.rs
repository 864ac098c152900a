//! Terminal user interface for the Ameen Pay waitlist
//!
//! Static marketing screens plus the interactive waitlist form driving the
//! submission flow.

pub mod app;
pub mod screens;
pub mod ui;

pub use app::{App, Screen};
