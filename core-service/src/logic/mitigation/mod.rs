//! Mitigation Module
//!
//! Static strategy catalog và deployment lifecycle giả lập.
//! Deploy không làm gì thật - chỉ là state machine có hẹn giờ.
//!
//! ## Structure
//! - `types`: Strategy, status and color-class types
//! - `catalog`: The five built-in strategies
//! - `lifecycle`: Timed Idle -> Deploying -> Deployed -> Idle tracker

pub mod types;
pub mod catalog;
pub mod lifecycle;

#[cfg(test)]
mod tests;

pub use types::{
    AutomationLevel,
    ColorClass,
    DeploymentStatus,
    MitigationStrategy,
    Transition,
};

pub use catalog::{find, RlAgentStatus, CATALOG, RL_AGENT};

pub use lifecycle::DeploymentTracker;
