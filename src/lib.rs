//! TubeBridge - declarative control of an embedded, sandboxed video player.

pub mod bridge;
pub mod components;
