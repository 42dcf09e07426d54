//! HTML preview writer.
//!
//! Turns a [`VisualTree`] into a standalone HTML document with inline CSS.
//! The document has no external dependencies besides the fonts and images
//! the tree references, so a headless browser can rasterize it as is.

use std::fmt::Write as _;

use crate::markup::TextSpan;
use crate::models::Spacing;

use super::tree::{
    Avatar, BackgroundPaint, BadgeNode, BadgeSize, Border, BoxStyle, CardNode, FooterNode,
    GridNode, TextBlock, VisualTree, AVATAR_SIZE, TITLE_MARGIN,
};

/// Renders a complete HTML document.
#[must_use]
pub fn to_html(tree: &VisualTree) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>");
    out.push_str(&escape(&plain_lines(&tree.title)));
    out.push_str("</title>\n</head>\n<body style=\"margin:0\">\n");

    let _ = writeln!(
        out,
        "<div id=\"post\" style=\"position:relative;overflow:hidden;display:flex;flex-direction:column;width:{}px;height:{}px;font-family:{};{}\">",
        tree.canvas.width,
        tree.canvas.height,
        escape(&tree.canvas.font_family),
        background_css(&tree.background),
    );

    let _ = writeln!(
        out,
        "<div style=\"flex:1;display:flex;flex-direction:column;min-height:0;padding:{}\">",
        spacing_css(tree.content_padding),
    );
    let _ = writeln!(
        out,
        "<h1 style=\"margin:0 0 {TITLE_MARGIN}px 0;line-height:1.25;font-weight:700;{}\">{}</h1>",
        text_css(&tree.title),
        text_html(&tree.title),
    );
    write_grid(&mut out, &tree.grid);
    out.push_str("</div>\n");

    write_footer(&mut out, &tree.footer);
    out.push_str("</div>\n</body>\n</html>\n");
    out
}

/// CSS declarations for a background paint.
#[must_use]
pub fn background_css(paint: &BackgroundPaint) -> String {
    match paint {
        BackgroundPaint::Solid { fill_color } => format!("background-color:{fill_color}"),
        BackgroundPaint::LinearGradient { axis, stops } => format!(
            "background:linear-gradient({}, {}, {})",
            axis.as_css(),
            stops[0],
            stops[1]
        ),
        BackgroundPaint::RadialGradient { stops } => format!(
            "background:radial-gradient(circle at center, {}, {})",
            stops[0], stops[1]
        ),
        BackgroundPaint::Image {
            image_ref,
            overlay_alpha,
        } => {
            let overlay = format!("rgba(0, 0, 0, {overlay_alpha})");
            format!(
                "background-image:linear-gradient({overlay}, {overlay}), url('{}');background-size:cover;background-position:center",
                escape(&css_string(image_ref))
            )
        }
    }
}

fn write_grid(out: &mut String, grid: &GridNode) {
    let _ = writeln!(
        out,
        "<div style=\"flex:1;display:grid;min-height:0;grid-template-columns:repeat({}, minmax(0, 1fr));grid-template-rows:repeat({}, minmax(0, 1fr));gap:{}px\">",
        grid.columns, grid.rows, grid.gap,
    );
    for cell in &grid.cells {
        match &cell.card {
            Some(card) => write_card(out, card, cell.row, cell.column),
            None => {
                let _ = writeln!(
                    out,
                    "<div style=\"grid-row:{};grid-column:{}\"></div>",
                    cell.row + 1,
                    cell.column + 1
                );
            }
        }
    }
    out.push_str("</div>\n");
}

fn write_card(out: &mut String, card: &CardNode, row: u8, column: u8) {
    let _ = writeln!(
        out,
        "<div style=\"position:relative;grid-row:{};grid-column:{};{}\">",
        row + 1,
        column + 1,
        box_css(&card.frame),
    );
    if let Some(badge) = &card.badge {
        write_badge(out, badge);
    }
    let _ = writeln!(
        out,
        "<div style=\"position:relative;font-weight:700;margin-bottom:{}px;{}\">{}</div>",
        card.title_margin,
        text_css(&card.title),
        text_html(&card.title),
    );
    if let Some(description) = &card.description {
        let _ = writeln!(
            out,
            "<div style=\"position:relative;line-height:1.625;{}\">{}</div>",
            text_css(description),
            text_html(description),
        );
    }
    out.push_str("</div>\n");
}

fn write_badge(out: &mut String, badge: &BadgeNode) {
    let size = match badge.size {
        BadgeSize::Fixed { width, height } => format!("width:{width}px;height:{height}px"),
        BadgeSize::Fit => "width:fit-content;height:fit-content".to_string(),
    };
    let _ = writeln!(
        out,
        "<div style=\"position:absolute;top:{}px;left:{}px;display:flex;align-items:center;justify-content:center;line-height:1;{size};{};font-size:{}px;color:{}\">{}</div>",
        badge.offset.y,
        badge.offset.x,
        box_css(&badge.frame),
        badge.font_size,
        badge.color,
        escape(&badge.label),
    );
}

fn write_footer(out: &mut String, footer: &FooterNode) {
    let border_top = footer
        .border_top
        .map(|border| format!(";border-top:{}", border_css(border)))
        .unwrap_or_default();
    let _ = writeln!(
        out,
        "<div style=\"display:flex;align-items:center;justify-content:space-between;{}{border_top}\">",
        box_css(&footer.frame),
    );
    out.push_str("<div style=\"display:flex;align-items:center;gap:16px\">\n");
    match &footer.avatar {
        Avatar::Photo { src, alt } => {
            let _ = writeln!(
                out,
                "<img src=\"{}\" alt=\"{}\" style=\"width:{AVATAR_SIZE}px;height:{AVATAR_SIZE}px;border-radius:50%;object-fit:cover\">",
                escape(src),
                escape(alt),
            );
        }
        Avatar::Placeholder { tint } => {
            let _ = writeln!(
                out,
                "<div style=\"width:{AVATAR_SIZE}px;height:{AVATAR_SIZE}px;border-radius:50%;background-color:rgba(255, 255, 255, 0.2);color:{tint}\"></div>",
            );
        }
    }
    out.push_str("<div>\n");
    let _ = writeln!(
        out,
        "<div style=\"font-weight:600;{}\">{}</div>",
        text_css(&footer.name),
        text_html(&footer.name),
    );
    if let Some(subtitle) = &footer.subtitle {
        let _ = writeln!(
            out,
            "<div style=\"{}\">{}</div>",
            text_css(subtitle),
            text_html(subtitle),
        );
    }
    out.push_str("</div>\n</div>\n");
    let _ = writeln!(
        out,
        "<div style=\"{}\">{}</div>",
        text_css(&footer.right_text),
        text_html(&footer.right_text),
    );
    out.push_str("</div>\n");
}

fn box_css(frame: &BoxStyle) -> String {
    let mut css = format!(
        "background-color:{};border-radius:{}px;padding:{}",
        frame.background,
        frame.radius,
        spacing_css(frame.padding)
    );
    if let Some(border) = frame.border {
        let _ = write!(css, ";border:{}", border_css(border));
    }
    css
}

fn border_css(border: Border) -> String {
    format!("{}px solid {}", border.width, border.color)
}

fn spacing_css(spacing: Spacing) -> String {
    format!(
        "{}px {}px {}px {}px",
        spacing.top, spacing.right, spacing.bottom, spacing.left
    )
}

fn text_css(block: &TextBlock) -> String {
    format!("font-size:{}px;color:{}", block.size, block.color)
}

/// Inline HTML for a text block: emphasized spans tinted with the accent
/// color, `<br>` between lines.
fn text_html(block: &TextBlock) -> String {
    block
        .lines
        .iter()
        .map(|line| spans_html(line, block))
        .collect::<Vec<_>>()
        .join("<br>")
}

fn spans_html(spans: &[TextSpan], block: &TextBlock) -> String {
    spans
        .iter()
        .map(|span| {
            if span.emphasized {
                format!(
                    "<span style=\"color:{}\">{}</span>",
                    block.accent_color,
                    escape(&span.content)
                )
            } else {
                escape(&span.content)
            }
        })
        .collect()
}

fn plain_lines(block: &TextBlock) -> String {
    block
        .lines
        .iter()
        .map(|line| crate::markup::plain_text(line))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Escapes `text` for use inside a quoted CSS string.
///
/// Quotes, backslashes, parentheses and control characters become CSS hex
/// escapes, so entity decoding of the surrounding attribute cannot close
/// the string.
fn css_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '\'' | '"' | '(' | ')') || c.is_control() {
            let _ = write!(out, "\\{:x} ", u32::from(c));
        } else {
            out.push(c);
        }
    }
    out
}

/// Escapes text for use in element content and quoted attributes.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContentModel, Fraction, GradientDirection, GridLayout, ListItem, RgbColor};
    use crate::presets;
    use crate::render::derive;

    fn render(content: &ContentModel) -> String {
        to_html(&derive(&presets::default_style(), content, GridLayout::default()))
    }

    #[test]
    fn test_document_shape() {
        let html = render(&ContentModel::new());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("width:600px;height:750px"));
        assert!(html.contains("<title>Post title</title>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let content = ContentModel::with_items(
            "<script>",
            vec![ListItem::new("a & b").with_description("\"q\"")],
        );
        let html = render(&content);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(html.contains("&quot;q&quot;"));
    }

    #[test]
    fn test_line_breaks_only_between_lines() {
        let content = ContentModel::with_items(
            "T",
            vec![ListItem::new("A").with_description("one\ntwo")],
        );
        let html = render(&content);
        assert!(html.contains("one<br>two</div>"));
        assert_eq!(html.matches("<br>").count(), 1);
    }

    #[test]
    fn test_emphasis_uses_accent() {
        let style = presets::default_style();
        let accent = style.background.accent_color;
        let content = ContentModel::with_items("Top *5*", vec![ListItem::new("x")]);
        let html = to_html(&derive(&style, &content, GridLayout::default()));
        assert!(html.contains(&format!("<span style=\"color:{accent}\">5</span>")));
    }

    #[test]
    fn test_background_css() {
        let red = RgbColor::new(255, 0, 0);
        let blue = RgbColor::new(0, 0, 255);
        assert_eq!(
            background_css(&BackgroundPaint::LinearGradient {
                axis: GradientDirection::ToBottomRight,
                stops: [red, blue]
            }),
            "background:linear-gradient(to bottom right, #ff0000, #0000ff)"
        );
        assert_eq!(
            background_css(&BackgroundPaint::RadialGradient { stops: [red, blue] }),
            "background:radial-gradient(circle at center, #ff0000, #0000ff)"
        );
        let image = background_css(&BackgroundPaint::Image {
            image_ref: "bg.png".to_string(),
            overlay_alpha: Fraction::clamped(0.5),
        });
        assert!(image.contains("rgba(0, 0, 0, 0.5)"));
        assert!(image.contains("url('bg.png')"));
        assert!(image.contains("background-size:cover"));
    }

    #[test]
    fn test_image_ref_cannot_leave_css_string() {
        let image = background_css(&BackgroundPaint::Image {
            image_ref: "x');background:red;('".to_string(),
            overlay_alpha: Fraction::ZERO,
        });
        assert!(image.contains(r"url('x\27 \29 ;background:red;\28 \27 ')"));
        assert_eq!(image.matches('\'').count(), 2);
        assert!(!image.contains("&#39;"));
    }

    #[test]
    fn test_css_string() {
        assert_eq!(css_string("data:image/png;base64,iVBO+/="), "data:image/png;base64,iVBO+/=");
        assert_eq!(css_string("a\\b\"c\n"), r"a\5c b\22 c\a ");
    }

    #[test]
    fn test_empty_cells_are_written() {
        let content = ContentModel::with_items("T", vec![ListItem::new("only")]);
        let html = render(&content);
        assert_eq!(html.matches("grid-row:2;grid-column:2\"></div>").count(), 1);
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("<a href='x'>&</a>"), "&lt;a href=&#39;x&#39;&gt;&amp;&lt;/a&gt;");
    }
}
