//! Terminal UI for the Weltenwanderer world-building engine.
//!
//! Provides a unified ratatui-based interface with tabs for world exploration,
//! relationship graphs, timelines, interactive fiction, solo TTRPG, character
//! sheets, and dice rolling.

pub mod app;
pub mod shared;
pub mod tabs;
pub mod terminal;
