//! Style derivation: schema + content + grid to concrete primitives.
//!
//! [`derive`] is pure and total: every schema that passes validation, any
//! content (including zero items) and any grid produce a tree.

use crate::markup::{parse_emphasis, parse_multiline};
use crate::models::{
    BackgroundFill, ContentModel, FrameStyle, GradientKind, GridLayout, ItemNumberStyle,
    ListItem, RgbColor, Spacing, StyleSchema,
};

use super::tree::{
    Avatar, BackgroundPaint, BadgeNode, BadgeSize, Border, BoxStyle, Canvas, CardNode,
    FooterNode, GridCell, GridNode, Offset, TextBlock, VisualTree, CANVAS_HEIGHT, CANVAS_WIDTH,
};

/// Title shown while the post title is empty.
pub const TITLE_PLACEHOLDER: &str = "Post *title*";

/// Derives the visual tree for a post.
///
/// # Examples
///
/// ```
/// use gridpost::models::{ContentModel, GridLayout};
/// use gridpost::presets;
/// use gridpost::render::derive;
///
/// let tree = derive(&presets::default_style(), &ContentModel::new(), GridLayout::default());
/// assert_eq!(tree.grid.cells.len(), 4);
/// ```
#[must_use]
pub fn derive(style: &StyleSchema, content: &ContentModel, grid: GridLayout) -> VisualTree {
    let title_text = if content.title.is_empty() {
        TITLE_PLACEHOLDER
    } else {
        content.title.as_str()
    };

    VisualTree {
        canvas: Canvas {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            font_family: style.typography.font.clone(),
        },
        background: derive_background(&style.background.fill),
        content_padding: style.spacing.content_padding,
        title: text_block(
            style,
            vec![parse_emphasis(title_text)],
            style.typography.title_size,
            style.colors.title,
        ),
        grid: derive_grid(style, &content.items, grid),
        footer: derive_footer(style),
    }
}

/// Maps the active background variant to a paint.
///
/// An image background without an image falls back to its base color.
#[must_use]
pub fn derive_background(fill: &BackgroundFill) -> BackgroundPaint {
    match fill {
        BackgroundFill::Solid { color } => BackgroundPaint::Solid { fill_color: *color },
        BackgroundFill::Gradient {
            color,
            gradient_color,
            gradient_type: GradientKind::Linear,
            gradient_direction,
        } => BackgroundPaint::LinearGradient {
            axis: *gradient_direction,
            stops: [*color, *gradient_color],
        },
        BackgroundFill::Gradient {
            color,
            gradient_color,
            gradient_type: GradientKind::Radial,
            ..
        } => BackgroundPaint::RadialGradient {
            stops: [*color, *gradient_color],
        },
        BackgroundFill::Image {
            image_url: Some(url),
            image_darkness,
            ..
        } if !url.is_empty() => BackgroundPaint::Image {
            image_ref: url.clone(),
            overlay_alpha: *image_darkness,
        },
        BackgroundFill::Image { color, .. } => BackgroundPaint::Solid { fill_color: *color },
    }
}

/// Box decoration for a frame with the given interior padding.
///
/// The border is present only when the frame shows one.
#[must_use]
pub fn frame_box(frame: &FrameStyle, padding: Spacing) -> BoxStyle {
    BoxStyle {
        background: frame.background_color.with_alpha(frame.opacity),
        border: frame_border(frame),
        radius: frame.border_radius,
        padding,
    }
}

fn frame_border(frame: &FrameStyle) -> Option<Border> {
    frame.show_border.then_some(Border {
        width: frame.border_width,
        color: frame.border_color,
    })
}

/// Badge geometry and decoration for item `index` (zero-based).
///
/// Fixed badges use their explicit size with no interior padding; fitted
/// badges keep the configured padding. Both sit at `(-padding, -padding)`
/// from the card corner.
#[must_use]
pub fn derive_badge(
    badge: &ItemNumberStyle,
    index: usize,
    font_size: u32,
    color: RgbColor,
) -> BadgeNode {
    let (size, padding) = if badge.fixed_size {
        (
            BadgeSize::Fixed {
                width: badge.width,
                height: badge.height,
            },
            0,
        )
    } else {
        (BadgeSize::Fit, badge.padding)
    };
    let offset = -i64::from(badge.padding);

    BadgeNode {
        label: (index + 1).to_string(),
        frame: frame_box(&badge.frame, Spacing::uniform(padding)),
        size,
        offset: Offset {
            x: offset,
            y: offset,
        },
        font_size,
        color,
    }
}

fn derive_grid(style: &StyleSchema, items: &[ListItem], grid: GridLayout) -> GridNode {
    let cell_count = grid.cell_count();
    let cells = if items.is_empty() {
        Vec::new()
    } else {
        (0..cell_count)
            .filter_map(|index| {
                let (row, column) = grid.position(index)?;
                Some(GridCell {
                    row,
                    column,
                    card: items.get(index).map(|item| derive_card(style, item, index)),
                })
            })
            .collect()
    };

    GridNode {
        rows: grid.rows(),
        columns: grid.columns(),
        gap: style.spacing.item_spacing,
        cells,
        hidden_items: items.len().saturating_sub(cell_count),
    }
}

fn derive_card(style: &StyleSchema, item: &ListItem, index: usize) -> CardNode {
    let placeholder;
    let title_text = if item.title.is_empty() {
        placeholder = format!("Item {}", index + 1);
        placeholder.as_str()
    } else {
        item.title.as_str()
    };

    let description = item
        .description
        .as_deref()
        .filter(|text| !text.is_empty())
        .map(|text| {
            text_block(
                style,
                parse_multiline(text),
                style.typography.description_size,
                style.colors.description,
            )
        });

    CardNode {
        index,
        frame: frame_box(&style.card.frame, style.spacing.item_padding),
        badge: style.show_item_numbers.then(|| {
            derive_badge(
                &style.item_number_style,
                index,
                style.typography.item_number_size,
                style.colors.item_number,
            )
        }),
        title: text_block(
            style,
            vec![parse_emphasis(title_text)],
            style.typography.item_title_size,
            style.colors.item_title,
        ),
        title_margin: style.spacing.title_description_spacing,
        description,
    }
}

fn derive_footer(style: &StyleSchema) -> FooterNode {
    let footer = &style.footer;
    let card = &style.card.frame;

    let avatar = match footer.photo_url.as_deref() {
        Some(src) if !src.is_empty() => Avatar::Photo {
            src: src.to_string(),
            alt: footer.name.clone(),
        },
        _ => Avatar::Placeholder {
            tint: style.colors.footer_name,
        },
    };

    let subtitle = footer
        .subtitle
        .as_deref()
        .filter(|text| !text.is_empty())
        .map(|text| {
            text_block(
                style,
                vec![parse_emphasis(text)],
                style.typography.footer_subtitle_size,
                style.colors.footer_subtitle,
            )
        });

    FooterNode {
        frame: BoxStyle {
            background: card.background_color.with_alpha(card.opacity),
            border: None,
            radius: 0,
            padding: style.spacing.footer_padding,
        },
        border_top: frame_border(card),
        avatar,
        name: text_block(
            style,
            vec![parse_emphasis(&footer.name)],
            style.typography.footer_size,
            style.colors.footer_name,
        ),
        subtitle,
        right_text: text_block(
            style,
            vec![parse_emphasis(&footer.right_text)],
            style.typography.footer_size,
            style.colors.footer_right,
        ),
    }
}

fn text_block(
    style: &StyleSchema,
    lines: Vec<Vec<crate::markup::TextSpan>>,
    size: u32,
    color: RgbColor,
) -> TextBlock {
    TextBlock {
        lines,
        size,
        color,
        accent_color: style.background.accent_color,
    }
}
