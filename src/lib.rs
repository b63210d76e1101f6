//! Kinematic movement controller for a 2D platforming character.
//!
//! Turns directional/jump input and ground/wall contact probes into jump,
//! wall-jump, slide and fall states, a phase-dependent gravity scale, and
//! run acceleration, with coyote time, jump buffering and jump-cut.

pub mod config;
pub mod movement;
