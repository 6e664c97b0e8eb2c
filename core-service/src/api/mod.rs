//! API Module
//!
//! Surface mà view layer gọi vào: navigation, polling và các command
//! theo từng screen.
//!
//! Structure:
//! - commands.rs: `Dashboard` navigator and per-screen commands
//!
//! Usage:
//! - `Dashboard::new(config, clock, sink)` mounts the home screen
//! - `dashboard.navigate(Route::Threats)` tears down home, mounts threats
//! - `dashboard.poll()` dispatches whatever came due

pub mod commands;


pub use commands::*;
