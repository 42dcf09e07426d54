//! Data models for styles, post content and grid layout.
//!
//! This module contains the plain data structures used throughout the application.
//! Models are independent of rendering, persistence and the command line.

pub mod content;
pub mod fraction;
pub mod grid;
pub mod rgb;
pub mod style;

// Re-export all model types
pub use content::{ContentModel, ItemField, ListItem};
pub use fraction::Fraction;
pub use grid::GridLayout;
pub use rgb::RgbColor;
pub use style::{
    BackgroundFill, BackgroundKind, BackgroundStyle, CardStyle, FooterStyle, FrameStyle,
    GradientDirection, GradientKind, ItemNumberStyle, Spacing, SpacingStyle, StyleSchema,
    TextColors, Typography,
};
