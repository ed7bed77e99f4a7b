//! `dispatchdeck` — a terminal dashboard for dispatch mail items.
//!
//! This crate provides the item model, the mail-service boundary, and the
//! controller state that the terminal UI renders.

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod service;
pub mod tui;
