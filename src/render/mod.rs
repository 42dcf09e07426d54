//! Style derivation and presentation.
//!
//! [`derive`] maps a style, content and grid to a [`VisualTree`] of concrete
//! primitives; [`html`] writes that tree as a standalone document.

pub mod derive;
pub mod html;
pub mod tree;

pub use derive::{derive, derive_background, derive_badge, frame_box, TITLE_PLACEHOLDER};
pub use html::to_html;
pub use tree::{
    Avatar, BackgroundPaint, BadgeNode, BadgeSize, Border, BoxStyle, Canvas, CardNode,
    FooterNode, GridCell, GridNode, Offset, TextBlock, VisualTree, CANVAS_HEIGHT, CANVAS_WIDTH,
};
