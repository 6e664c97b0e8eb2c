//! Logic Module - Simulation core
//!
//! Chứa toàn bộ state và engines của dashboard giả lập. Không có I/O:
//! thời gian đến từ `Clock`, ngẫu nhiên từ seeded `StdRng`.
//!
//! ## Building blocks
//! - `clock` / `scheduler` - Injectable time and named per-screen timers
//! - `feed` - Bounded newest-first history
//! - `threat` - Synthetic threat generator
//! - `mitigation` - Strategy catalog and deployment lifecycle
//! - `analytics` - Aggregate metric snapshots
//! - `settings` - Agent and system configuration store
//!
//! ## Screens
//! - `screens/` - One state object per screen, driven by `poll()`

// Infrastructure
pub mod clock;
pub mod config;
pub mod error;
pub mod events;
pub mod scheduler;

// Domain
pub mod analytics;
pub mod feed;
pub mod mitigation;
pub mod settings;
pub mod threat;

// Screens
pub mod screens;
