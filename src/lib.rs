//! Space Catcher game logic.
//!
//! Everything in this crate is terminal-agnostic: the binary owns all I/O and
//! drives a [`controller::GameController`] once per 50 ms tick.

pub mod compute;
pub mod constants;
pub mod controller;
pub mod entities;
pub mod input;
pub mod theme;
