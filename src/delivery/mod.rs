//! Resolution, probing and strategy selection for document delivery.
//!
//! Everything here is free of UI concerns. Side effects are limited to the
//! network checks in [`probe`]; logging goes through an injected
//! [`DeliveryLog`].

pub mod location;
pub mod observe;
pub mod probe;
pub mod resolver;
pub mod strategy;

pub use location::{locate, Reachability, ResolvedLocation};
pub use observe::{DeliveryEvent, DeliveryLog, MemoryLog, NullLog, TracingLog};
pub use probe::{HttpProber, ProbeOutcome, Prober};
pub use resolver::{absolute_url, candidate_paths, resolve};
pub use strategy::{DeliveryStrategy, Environment, FailureSignal, StrategySelector};
