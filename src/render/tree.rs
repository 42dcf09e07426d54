//! Rendering primitives produced by derivation.
//!
//! A [`VisualTree`] holds concrete values only (pixel sizes, composed
//! colors, laid-out cells); no style lookups remain for the presentation
//! layer to perform.

use serde::Serialize;

use crate::markup::TextSpan;
use crate::models::{Fraction, GradientDirection, RgbColor, Spacing};

/// Canvas width in CSS pixels.
pub const CANVAS_WIDTH: u32 = 600;
/// Canvas height in CSS pixels (4:5 aspect ratio).
pub const CANVAS_HEIGHT: u32 = CANVAS_WIDTH / 4 * 5;
/// Gap under the post title.
pub const TITLE_MARGIN: u32 = 48;
/// Footer avatar diameter.
pub const AVATAR_SIZE: u32 = 48;

/// The whole post, ready to be drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualTree {
    /// Page size and font.
    pub canvas: Canvas,
    /// Canvas fill.
    pub background: BackgroundPaint,
    /// Padding around title and grid.
    pub content_padding: Spacing,
    /// Post title.
    pub title: TextBlock,
    /// Item cards.
    pub grid: GridNode,
    /// Author bar along the bottom edge.
    pub footer: FooterNode,
}

/// Page dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// CSS font-family value.
    pub font_family: String,
}

/// Canvas fill. Exactly one variant per tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BackgroundPaint {
    /// Flat color.
    #[serde(rename_all = "camelCase")]
    Solid {
        /// Fill color.
        fill_color: RgbColor,
    },
    /// Linear blend along a compass axis.
    #[serde(rename_all = "camelCase")]
    LinearGradient {
        /// Direction of the blend.
        axis: GradientDirection,
        /// Start and end colors.
        stops: [RgbColor; 2],
    },
    /// Circular blend from the center outwards.
    #[serde(rename_all = "camelCase")]
    RadialGradient {
        /// Start (center) and end (edge) colors.
        stops: [RgbColor; 2],
    },
    /// Picture covering the canvas under a black overlay.
    #[serde(rename_all = "camelCase")]
    Image {
        /// Data URI or URL.
        image_ref: String,
        /// Opacity of the black overlay.
        overlay_alpha: Fraction,
    },
}

/// One or more lines of emphasis-aware text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    /// Lines in order; a break goes between consecutive lines.
    pub lines: Vec<Vec<TextSpan>>,
    /// Font size in pixels.
    pub size: u32,
    /// Color of plain spans.
    pub color: RgbColor,
    /// Color of emphasized spans.
    pub accent_color: RgbColor,
}

/// A drawn border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Border {
    /// Width in pixels.
    pub width: u32,
    /// Border color.
    pub color: RgbColor,
}

/// Box decoration shared by cards, badges and the footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxStyle {
    /// Fill as `#rrggbbaa`.
    pub background: String,
    /// Border on every side; `None` means no border at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    /// Corner radius in pixels.
    pub radius: u32,
    /// Interior padding.
    pub padding: Spacing,
}

/// The item grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridNode {
    /// Equal-height row tracks.
    pub rows: u8,
    /// Equal-width column tracks.
    pub columns: u8,
    /// Gap between tracks on both axes.
    pub gap: u32,
    /// Cells in row-major order.
    pub cells: Vec<GridCell>,
    /// Items that did not fit into the grid.
    pub hidden_items: usize,
}

/// One grid cell, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCell {
    /// Zero-based row.
    pub row: u8,
    /// Zero-based column.
    pub column: u8,
    /// The card placed here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardNode>,
}

/// One item card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardNode {
    /// Zero-based item index.
    pub index: usize,
    /// Card box.
    pub frame: BoxStyle,
    /// Number badge overlapping the top-left corner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<BadgeNode>,
    /// Card heading.
    pub title: TextBlock,
    /// Gap under the heading.
    pub title_margin: u32,
    /// Card body, only for non-empty descriptions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<TextBlock>,
}

/// How a badge box is sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum BadgeSize {
    /// Explicit dimensions.
    Fixed {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },
    /// Shrinks to the label plus padding.
    Fit,
}

/// Offset of a badge from its card's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Offset {
    /// Horizontal offset in pixels.
    pub x: i64,
    /// Vertical offset in pixels.
    pub y: i64,
}

/// Numbered badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeNode {
    /// 1-based item number.
    pub label: String,
    /// Box decoration; padding is zero for fixed badges.
    pub frame: BoxStyle,
    /// Sizing mode.
    pub size: BadgeSize,
    /// Position relative to the card.
    pub offset: Offset,
    /// Label font size.
    pub font_size: u32,
    /// Label color.
    pub color: RgbColor,
}

/// Footer avatar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Avatar {
    /// User photo.
    Photo {
        /// Data URI or URL.
        src: String,
        /// Alternate text.
        alt: String,
    },
    /// Generic person icon.
    Placeholder {
        /// Icon tint.
        tint: RgbColor,
    },
}

/// Author bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterNode {
    /// Bar fill and padding; radius is always zero.
    pub frame: BoxStyle,
    /// Top edge line; never a full border.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_top: Option<Border>,
    /// Photo or placeholder.
    pub avatar: Avatar,
    /// Author name.
    pub name: TextBlock,
    /// Line under the name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<TextBlock>,
    /// Right-aligned text.
    pub right_text: TextBlock,
}

impl GridNode {
    /// Cells holding a card.
    pub fn filled_cells(&self) -> impl Iterator<Item = &GridCell> {
        self.cells.iter().filter(|cell| cell.card.is_some())
    }
}
