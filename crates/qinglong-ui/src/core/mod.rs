//! Core, DOM-free primitives and helpers for the Web UI.
pub mod nav;
pub mod route;
