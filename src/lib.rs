//! GridPost Library
//!
//! This library provides the core of the GridPost card-grid post editor:
//! the style schema and its presets, emphasis markup, derivation of a
//! concrete visual tree from style and content, style persistence, and the
//! editor state that ties them together.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod editor;
pub mod error;
pub mod markup;
pub mod models;
pub mod presets;
pub mod render;
pub mod services;
