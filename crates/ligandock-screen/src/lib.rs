//! ligandock-screen
//!
//! - batch docking driver around a smina/Vina-style executable, with resume
//!   and a summary table.
//! - CLI wiring the driver and the contact comparator.
//!
pub mod batch;
pub mod cli;
mod commands;
