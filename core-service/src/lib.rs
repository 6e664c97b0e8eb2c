//! AutoSecAgent - Live Simulation Core
//!
//! Dashboard bảo mật giả lập: threat feed, deploy strategy, analytics và
//! agent config đều là dữ liệu sinh ngẫu nhiên theo timer.

pub mod api;
pub mod constants;
pub mod logic;
