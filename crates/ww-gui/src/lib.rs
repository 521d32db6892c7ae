//! Pixel art GUI for Weltenwanderer.
//!
//! A macroquad-based graphical application for exploring worlds,
//! playing interactive fiction, running solo TTRPG sessions, and
//! viewing character sheets â€” all in retro pixel art style.

pub mod app;
pub mod input;
pub mod screen;
pub mod theme;
pub mod widget;
