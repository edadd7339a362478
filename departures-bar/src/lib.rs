//! Rail departures for the menu bar.
//!
//! Fetches the live departure board for one origin/destination pair from
//! Huxley and prints the next few services, with delays and cancellations,
//! as a BitBar/xbar status line.

pub mod app;
pub mod config;
pub mod display;
pub mod domain;
pub mod huxley;
