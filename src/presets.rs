//! Built-in style presets.
//!
//! The catalog is fixed and ordered; the first entry is the style a new
//! editor session starts with. Lookup is exact and case-sensitive, and a
//! miss is reported as `None` rather than silently falling back.

use crate::models::{
    BackgroundFill, BackgroundStyle, CardStyle, FooterStyle, Fraction, FrameStyle,
    GradientDirection, GradientKind, ItemNumberStyle, RgbColor, Spacing, SpacingStyle,
    StyleSchema, TextColors, Typography,
};

/// Name of the preset used when nothing else is configured.
pub const DEFAULT_PRESET: &str = "Default";

/// Font stacks offered by the editor.
pub const FONTS: [&str; 3] = [
    "'Inter', sans-serif",
    "'Roboto', sans-serif",
    "'Poppins', sans-serif",
];

/// All presets, in display order.
#[must_use]
pub fn all() -> Vec<StyleSchema> {
    vec![default_style(), midnight(), sunset(), minimal(), photo()]
}

/// Names of all presets, in display order.
#[must_use]
pub fn names() -> Vec<String> {
    all().into_iter().map(|style| style.name).collect()
}

/// Finds a preset by exact, case-sensitive name.
///
/// # Examples
///
/// ```
/// use gridpost::presets;
///
/// assert!(presets::find("Default").is_some());
/// assert!(presets::find("default").is_none());
/// ```
#[must_use]
pub fn find(name: &str) -> Option<StyleSchema> {
    all().into_iter().find(|style| style.name == name)
}

/// The first preset of the catalog.
#[must_use]
pub fn default_style() -> StyleSchema {
    StyleSchema {
        name: DEFAULT_PRESET.to_string(),
        background: BackgroundStyle {
            fill: BackgroundFill::Solid {
                color: rgb(0x1e, 0x29, 0x3b),
            },
            accent_color: rgb(0xfa, 0xcc, 0x15),
        },
        typography: typography(FONTS[0], 48, 20, 14),
        spacing: SpacingStyle {
            item_spacing: 16,
            item_padding: Spacing::uniform(20),
            content_padding: Spacing::symmetric(48, 40),
            footer_padding: Spacing::symmetric(16, 40),
            title_description_spacing: 8,
        },
        show_item_numbers: true,
        item_number_style: ItemNumberStyle {
            frame: FrameStyle {
                background_color: rgb(0xfa, 0xcc, 0x15),
                opacity: Fraction::ONE,
                show_border: false,
                border_width: 0,
                border_color: RgbColor::WHITE,
                border_radius: 16,
            },
            padding: 10,
            fixed_size: true,
            width: 32,
            height: 32,
        },
        footer: footer(),
        colors: TextColors {
            title: RgbColor::WHITE,
            item_title: RgbColor::WHITE,
            description: rgb(0xcb, 0xd5, 0xe1),
            item_number: rgb(0x1e, 0x29, 0x3b),
            footer_name: RgbColor::WHITE,
            footer_subtitle: rgb(0x94, 0xa3, 0xb8),
            footer_right: rgb(0xfa, 0xcc, 0x15),
        },
        card: CardStyle {
            frame: FrameStyle {
                background_color: RgbColor::WHITE,
                opacity: Fraction::clamped(0.1),
                show_border: true,
                border_width: 1,
                border_color: rgb(0x33, 0x41, 0x55),
                border_radius: 12,
            },
        },
    }
}

fn midnight() -> StyleSchema {
    StyleSchema {
        name: "Midnight".to_string(),
        background: BackgroundStyle {
            fill: BackgroundFill::Gradient {
                color: rgb(0x0f, 0x17, 0x2a),
                gradient_color: rgb(0x31, 0x2e, 0x81),
                gradient_type: GradientKind::Linear,
                gradient_direction: GradientDirection::ToBottomRight,
            },
            accent_color: rgb(0x81, 0x8c, 0xf8),
        },
        typography: typography(FONTS[2], 44, 18, 14),
        spacing: SpacingStyle {
            item_spacing: 20,
            item_padding: Spacing::symmetric(24, 20),
            content_padding: Spacing::uniform(40),
            footer_padding: Spacing::symmetric(20, 40),
            title_description_spacing: 10,
        },
        show_item_numbers: true,
        item_number_style: ItemNumberStyle {
            frame: FrameStyle {
                background_color: rgb(0x63, 0x66, 0xf1),
                opacity: Fraction::ONE,
                show_border: true,
                border_width: 2,
                border_color: rgb(0xc7, 0xd2, 0xfe),
                border_radius: 8,
            },
            padding: 8,
            fixed_size: false,
            width: 28,
            height: 28,
        },
        footer: footer(),
        colors: TextColors {
            title: RgbColor::WHITE,
            item_title: rgb(0xe0, 0xe7, 0xff),
            description: rgb(0xa5, 0xb4, 0xfc),
            item_number: RgbColor::WHITE,
            footer_name: RgbColor::WHITE,
            footer_subtitle: rgb(0xa5, 0xb4, 0xfc),
            footer_right: rgb(0x81, 0x8c, 0xf8),
        },
        card: CardStyle {
            frame: FrameStyle {
                background_color: rgb(0x1e, 0x1b, 0x4b),
                opacity: Fraction::clamped(0.6),
                show_border: true,
                border_width: 1,
                border_color: rgb(0x43, 0x38, 0xca),
                border_radius: 16,
            },
        },
    }
}

fn sunset() -> StyleSchema {
    StyleSchema {
        name: "Sunset".to_string(),
        background: BackgroundStyle {
            fill: BackgroundFill::Gradient {
                color: rgb(0xf9, 0x73, 0x16),
                gradient_color: rgb(0xdb, 0x27, 0x77),
                gradient_type: GradientKind::Radial,
                gradient_direction: GradientDirection::ToBottom,
            },
            accent_color: rgb(0xfe, 0xf0, 0x8a),
        },
        typography: typography(FONTS[2], 46, 20, 15),
        spacing: SpacingStyle {
            item_spacing: 14,
            item_padding: Spacing::uniform(18),
            content_padding: Spacing::symmetric(44, 36),
            footer_padding: Spacing::symmetric(16, 36),
            title_description_spacing: 6,
        },
        show_item_numbers: false,
        item_number_style: ItemNumberStyle {
            frame: FrameStyle {
                background_color: RgbColor::WHITE,
                opacity: Fraction::clamped(0.9),
                show_border: false,
                border_width: 0,
                border_color: RgbColor::WHITE,
                border_radius: 6,
            },
            padding: 6,
            fixed_size: false,
            width: 24,
            height: 24,
        },
        footer: footer(),
        colors: TextColors {
            title: RgbColor::WHITE,
            item_title: RgbColor::WHITE,
            description: rgb(0xff, 0xed, 0xd5),
            item_number: rgb(0xdb, 0x27, 0x77),
            footer_name: RgbColor::WHITE,
            footer_subtitle: rgb(0xff, 0xed, 0xd5),
            footer_right: rgb(0xfe, 0xf0, 0x8a),
        },
        card: CardStyle {
            frame: FrameStyle {
                background_color: RgbColor::BLACK,
                opacity: Fraction::clamped(0.15),
                show_border: false,
                border_width: 0,
                border_color: RgbColor::WHITE,
                border_radius: 20,
            },
        },
    }
}

fn minimal() -> StyleSchema {
    StyleSchema {
        name: "Minimal".to_string(),
        background: BackgroundStyle {
            fill: BackgroundFill::Solid {
                color: rgb(0xfa, 0xfa, 0xf9),
            },
            accent_color: rgb(0x25, 0x63, 0xeb),
        },
        typography: typography(FONTS[0], 40, 18, 14),
        spacing: SpacingStyle {
            item_spacing: 12,
            item_padding: Spacing::uniform(16),
            content_padding: Spacing::uniform(40),
            footer_padding: Spacing::symmetric(16, 40),
            title_description_spacing: 6,
        },
        show_item_numbers: true,
        item_number_style: ItemNumberStyle {
            frame: FrameStyle {
                background_color: RgbColor::WHITE,
                opacity: Fraction::ONE,
                show_border: true,
                border_width: 1,
                border_color: rgb(0xd6, 0xd3, 0xd1),
                border_radius: 4,
            },
            padding: 6,
            fixed_size: false,
            width: 24,
            height: 24,
        },
        footer: footer(),
        colors: TextColors {
            title: rgb(0x1c, 0x19, 0x17),
            item_title: rgb(0x1c, 0x19, 0x17),
            description: rgb(0x57, 0x53, 0x4e),
            item_number: rgb(0x25, 0x63, 0xeb),
            footer_name: rgb(0x1c, 0x19, 0x17),
            footer_subtitle: rgb(0x78, 0x71, 0x6c),
            footer_right: rgb(0x25, 0x63, 0xeb),
        },
        card: CardStyle {
            frame: FrameStyle {
                background_color: RgbColor::WHITE,
                opacity: Fraction::ONE,
                show_border: true,
                border_width: 1,
                border_color: rgb(0xe7, 0xe5, 0xe4),
                border_radius: 8,
            },
        },
    }
}

fn photo() -> StyleSchema {
    StyleSchema {
        name: "Photo".to_string(),
        background: BackgroundStyle {
            fill: BackgroundFill::Image {
                color: rgb(0x17, 0x17, 0x17),
                image_url: None,
                image_darkness: Fraction::clamped(0.5),
            },
            accent_color: rgb(0x34, 0xd3, 0x99),
        },
        typography: typography(FONTS[1], 46, 20, 14),
        spacing: SpacingStyle {
            item_spacing: 16,
            item_padding: Spacing::uniform(20),
            content_padding: Spacing::symmetric(48, 40),
            footer_padding: Spacing::symmetric(16, 40),
            title_description_spacing: 8,
        },
        show_item_numbers: true,
        item_number_style: ItemNumberStyle {
            frame: FrameStyle {
                background_color: rgb(0x34, 0xd3, 0x99),
                opacity: Fraction::ONE,
                show_border: false,
                border_width: 0,
                border_color: RgbColor::WHITE,
                border_radius: 16,
            },
            padding: 10,
            fixed_size: true,
            width: 28,
            height: 28,
        },
        footer: footer(),
        colors: TextColors {
            title: RgbColor::WHITE,
            item_title: RgbColor::WHITE,
            description: rgb(0xe5, 0xe5, 0xe5),
            item_number: rgb(0x06, 0x4e, 0x3b),
            footer_name: RgbColor::WHITE,
            footer_subtitle: rgb(0xd4, 0xd4, 0xd4),
            footer_right: rgb(0x34, 0xd3, 0x99),
        },
        card: CardStyle {
            frame: FrameStyle {
                background_color: RgbColor::BLACK,
                opacity: Fraction::clamped(0.45),
                show_border: false,
                border_width: 0,
                border_color: RgbColor::WHITE,
                border_radius: 12,
            },
        },
    }
}

const fn rgb(r: u8, g: u8, b: u8) -> RgbColor {
    RgbColor::new(r, g, b)
}

fn typography(font: &str, title: u32, item_title: u32, description: u32) -> Typography {
    Typography {
        font: font.to_string(),
        title_size: title,
        item_title_size: item_title,
        description_size: description,
        footer_size: 16,
        footer_subtitle_size: 13,
        item_number_size: 16,
    }
}

fn footer() -> FooterStyle {
    FooterStyle {
        name: "Your Name".to_string(),
        subtitle: Some("Your title".to_string()),
        photo_url: None,
        right_text: "Follow for more".to_string(),
    }
}
