//! Core types and definitions for the DUCKHUNT game.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, sprite layout and constants.
//! It has no dependency on the browser or any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod sprite;
pub mod state;
pub mod types;
