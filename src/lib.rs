//! Unit conversion across length, mass, volume, temperature, time, speed,
//! area, energy and fuel efficiency, with a terminal front end.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod convert;
pub mod logging;
pub mod shutdown;
pub mod ui;
