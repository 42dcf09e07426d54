//! Style schema: the complete, named configuration describing how a post is rendered.
//!
//! The serde layout mirrors the JSON style files produced by the editor
//! (camelCase keys, typography and spacing fields at the top level,
//! `background.type` as the variant tag) so exported files stay portable.

use serde::{Deserialize, Serialize};

use super::{Fraction, RgbColor};
use crate::error::ValidationError;

/// Largest accepted font size in pixels.
pub const MAX_FONT_SIZE: u32 = 200;
/// Largest accepted border width or corner radius in pixels.
pub const MAX_BORDER: u32 = 100;
/// Largest accepted spacing value in pixels.
pub const MAX_SPACING: u32 = 500;
/// Largest accepted style name length.
pub const MAX_NAME_LEN: usize = 100;

/// A complete visual style for a post.
///
/// Values are replaced wholesale by the editor; consumers never observe a
/// half-edited schema.
///
/// # Validation
///
/// - `name` must be non-empty and at most 100 characters
/// - every font size must be in `1..=200`
/// - border widths and radii must be at most 100
/// - spacing values must be at most 500
/// - colors are always valid (enforced by `RgbColor`)
/// - opacity and darkness are always in `[0, 1]` (enforced by `Fraction`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSchema {
    /// Display name, unique within a saved collection.
    pub name: String,
    /// Canvas background.
    pub background: BackgroundStyle,
    /// Font family and sizes.
    #[serde(flatten)]
    pub typography: Typography,
    /// Paddings and gaps.
    #[serde(flatten)]
    pub spacing: SpacingStyle,
    /// Whether each card carries a numbered badge.
    pub show_item_numbers: bool,
    /// Badge appearance.
    pub item_number_style: ItemNumberStyle,
    /// Footer content.
    pub footer: FooterStyle,
    /// One color per text role.
    pub colors: TextColors,
    /// Item card appearance (also used for the footer bar).
    pub card: CardStyle,
}

/// Canvas background: a fill variant plus the accent color used for emphasis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundStyle {
    /// The active fill, tagged by `type` in the style file.
    #[serde(flatten)]
    pub fill: BackgroundFill,
    /// Color applied to emphasized text spans.
    pub accent_color: RgbColor,
}

/// Background fill variants. Exactly one is active at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BackgroundFill {
    /// Flat color.
    Solid {
        /// Fill color.
        color: RgbColor,
    },
    /// Two-stop gradient.
    #[serde(rename_all = "camelCase")]
    Gradient {
        /// First stop.
        color: RgbColor,
        /// Second stop; black when the file leaves it out.
        #[serde(default = "default_gradient_color")]
        gradient_color: RgbColor,
        /// Linear or radial.
        #[serde(default)]
        gradient_type: GradientKind,
        /// Axis for linear gradients.
        #[serde(default)]
        gradient_direction: GradientDirection,
    },
    /// Picture darkened by a black overlay.
    #[serde(rename_all = "camelCase")]
    Image {
        /// Fallback fill while no image is set.
        color: RgbColor,
        /// Data URI or URL; absent until an image is chosen.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image_url: Option<String>,
        /// Overlay opacity.
        #[serde(default)]
        image_darkness: Fraction,
    },
}

const fn default_gradient_color() -> RgbColor {
    RgbColor::BLACK
}

/// Selector for [`BackgroundFill`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackgroundKind {
    /// [`BackgroundFill::Solid`]
    Solid,
    /// [`BackgroundFill::Gradient`]
    Gradient,
    /// [`BackgroundFill::Image`]
    Image,
}

impl BackgroundKind {
    /// Parses `solid`, `gradient` or `image` (case-insensitive).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "solid" => Some(Self::Solid),
            "gradient" => Some(Self::Gradient),
            "image" => Some(Self::Image),
            _ => None,
        }
    }
}

/// Gradient shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    /// Along a compass direction.
    #[default]
    Linear,
    /// Circle from the center outwards.
    Radial,
}

/// The eight compass directions of a linear gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GradientDirection {
    /// `to top`
    #[serde(rename = "to top")]
    ToTop,
    /// `to top right`
    #[serde(rename = "to top right")]
    ToTopRight,
    /// `to right`
    #[serde(rename = "to right")]
    ToRight,
    /// `to bottom right`
    #[default]
    #[serde(rename = "to bottom right")]
    ToBottomRight,
    /// `to bottom`
    #[serde(rename = "to bottom")]
    ToBottom,
    /// `to bottom left`
    #[serde(rename = "to bottom left")]
    ToBottomLeft,
    /// `to left`
    #[serde(rename = "to left")]
    ToLeft,
    /// `to top left`
    #[serde(rename = "to top left")]
    ToTopLeft,
}

impl GradientDirection {
    /// All directions, clockwise from the top.
    pub const ALL: [Self; 8] = [
        Self::ToTop,
        Self::ToTopRight,
        Self::ToRight,
        Self::ToBottomRight,
        Self::ToBottom,
        Self::ToBottomLeft,
        Self::ToLeft,
        Self::ToTopLeft,
    ];

    /// CSS keyword form, e.g. `to bottom right`.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::ToTop => "to top",
            Self::ToTopRight => "to top right",
            Self::ToRight => "to right",
            Self::ToBottomRight => "to bottom right",
            Self::ToBottom => "to bottom",
            Self::ToBottomLeft => "to bottom left",
            Self::ToLeft => "to left",
            Self::ToTopLeft => "to top left",
        }
    }
}

impl BackgroundFill {
    /// Which variant is active.
    #[must_use]
    pub const fn kind(&self) -> BackgroundKind {
        match self {
            Self::Solid { .. } => BackgroundKind::Solid,
            Self::Gradient { .. } => BackgroundKind::Gradient,
            Self::Image { .. } => BackgroundKind::Image,
        }
    }

    /// The base color, present in every variant.
    #[must_use]
    pub const fn base_color(&self) -> RgbColor {
        match self {
            Self::Solid { color } | Self::Gradient { color, .. } | Self::Image { color, .. } => {
                *color
            }
        }
    }

    /// Switches to another variant, keeping the base color.
    ///
    /// Returns `self` unchanged when the kind already matches. A new gradient
    /// starts as a linear `to bottom right` blend from the base color to
    /// `secondary`; a new image background starts without an image.
    #[must_use]
    pub fn with_kind(self, kind: BackgroundKind, secondary: RgbColor) -> Self {
        if self.kind() == kind {
            return self;
        }
        let color = self.base_color();
        match kind {
            BackgroundKind::Solid => Self::Solid { color },
            BackgroundKind::Gradient => Self::Gradient {
                color,
                gradient_color: secondary,
                gradient_type: GradientKind::default(),
                gradient_direction: GradientDirection::default(),
            },
            BackgroundKind::Image => Self::Image {
                color,
                image_url: None,
                image_darkness: Fraction::ZERO,
            },
        }
    }
}

/// Font family and per-role sizes in pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    /// CSS font-family value, e.g. `'Inter', sans-serif`.
    pub font: String,
    /// Post title.
    pub title_size: u32,
    /// Card titles.
    pub item_title_size: u32,
    /// Card descriptions.
    pub description_size: u32,
    /// Footer name and right-hand text.
    pub footer_size: u32,
    /// Footer subtitle.
    pub footer_subtitle_size: u32,
    /// Badge numbers.
    pub item_number_size: u32,
}

/// Padding on the four sides of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Spacing {
    /// Top padding.
    pub top: u32,
    /// Right padding.
    pub right: u32,
    /// Bottom padding.
    pub bottom: u32,
    /// Left padding.
    pub left: u32,
}

impl Spacing {
    /// Same value on every side.
    #[must_use]
    pub const fn uniform(value: u32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Vertical and horizontal values.
    #[must_use]
    pub const fn symmetric(vertical: u32, horizontal: u32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    fn max_side(&self) -> u32 {
        self.top.max(self.right).max(self.bottom).max(self.left)
    }
}

/// Paddings and gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingStyle {
    /// Gap between grid tracks, both axes.
    pub item_spacing: u32,
    /// Interior padding of each card.
    pub item_padding: Spacing,
    /// Padding around title and grid.
    pub content_padding: Spacing,
    /// Interior padding of the footer bar.
    pub footer_padding: Spacing,
    /// Gap between a card title and its description.
    pub title_description_spacing: u32,
}

/// Fill, optional border and corner radius shared by cards and badges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameStyle {
    /// Fill color before opacity is applied.
    pub background_color: RgbColor,
    /// Fill opacity.
    pub opacity: Fraction,
    /// Whether a border is drawn at all.
    pub show_border: bool,
    /// Border width in pixels (ignored unless `show_border`).
    pub border_width: u32,
    /// Border color (ignored unless `show_border`).
    pub border_color: RgbColor,
    /// Corner radius in pixels.
    pub border_radius: u32,
}

/// Item card appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardStyle {
    /// Fill, border and radius.
    #[serde(flatten)]
    pub frame: FrameStyle,
}

/// Numbered badge appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemNumberStyle {
    /// Fill, border and radius.
    #[serde(flatten)]
    pub frame: FrameStyle,
    /// Interior padding when content-sized; also the corner offset.
    pub padding: u32,
    /// Explicit width/height instead of fitting the number.
    pub fixed_size: bool,
    /// Box width when `fixed_size`.
    pub width: u32,
    /// Box height when `fixed_size`.
    pub height: u32,
}

/// Footer content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterStyle {
    /// Author display name.
    pub name: String,
    /// Line under the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Avatar as data URI or URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// Right-aligned text.
    pub right_text: String,
}

/// Text color per semantic role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextColors {
    /// Post title.
    pub title: RgbColor,
    /// Card titles.
    pub item_title: RgbColor,
    /// Card descriptions.
    pub description: RgbColor,
    /// Badge numbers.
    pub item_number: RgbColor,
    /// Footer name.
    pub footer_name: RgbColor,
    /// Footer subtitle.
    pub footer_subtitle: RgbColor,
    /// Footer right-hand text.
    pub footer_right: RgbColor,
}

impl StyleSchema {
    /// Checks every range constraint.
    ///
    /// Colors and fractions are valid by construction; this covers names,
    /// sizes and spacing.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)?;

        let t = &self.typography;
        for (field, value) in [
            ("titleSize", t.title_size),
            ("itemTitleSize", t.item_title_size),
            ("descriptionSize", t.description_size),
            ("footerSize", t.footer_size),
            ("footerSubtitleSize", t.footer_subtitle_size),
            ("itemNumberSize", t.item_number_size),
        ] {
            if value == 0 || value > MAX_FONT_SIZE {
                return Err(ValidationError::field(
                    field,
                    format!("font size {value} must be between 1 and {MAX_FONT_SIZE}"),
                ));
            }
        }
        if t.font.trim().is_empty() {
            return Err(ValidationError::field("font", "font family cannot be empty"));
        }

        let s = &self.spacing;
        for (field, value) in [
            ("itemSpacing", s.item_spacing),
            ("titleDescriptionSpacing", s.title_description_spacing),
            ("itemPadding", s.item_padding.max_side()),
            ("contentPadding", s.content_padding.max_side()),
            ("footerPadding", s.footer_padding.max_side()),
        ] {
            if value > MAX_SPACING {
                return Err(ValidationError::field(
                    field,
                    format!("spacing {value} exceeds {MAX_SPACING}"),
                ));
            }
        }

        validate_frame("card", &self.card.frame)?;
        validate_frame("itemNumberStyle", &self.item_number_style.frame)?;

        let badge = &self.item_number_style;
        if badge.padding > MAX_BORDER {
            return Err(ValidationError::field(
                "itemNumberStyle.padding",
                format!("padding {} exceeds {MAX_BORDER}", badge.padding),
            ));
        }
        if badge.fixed_size && (badge.width == 0 || badge.height == 0) {
            return Err(ValidationError::field(
                "itemNumberStyle.width",
                "fixed-size badges need a non-zero width and height",
            ));
        }
        if badge.width > MAX_SPACING || badge.height > MAX_SPACING {
            return Err(ValidationError::field(
                "itemNumberStyle.width",
                format!("badge size exceeds {MAX_SPACING}"),
            ));
        }

        if let BackgroundFill::Image {
            image_url: Some(url),
            ..
        } = &self.background.fill
        {
            if url.trim().is_empty() {
                return Err(ValidationError::field(
                    "background.imageUrl",
                    "image URL cannot be empty",
                ));
            }
        }

        Ok(())
    }

    /// Returns a copy carrying a different name.
    #[must_use]
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }
}

/// Validates a style name.
///
/// # Errors
///
/// Returns an error when the name is blank, longer than 100 characters or
/// contains a path separator.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::field("name", "style name cannot be empty"));
    }
    if name.contains(['/', '\\']) {
        return Err(ValidationError::field(
            "name",
            "style name cannot contain '/' or '\\'",
        ));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::field(
            "name",
            format!("style name exceeds {MAX_NAME_LEN} characters"),
        ));
    }
    Ok(())
}

fn validate_frame(prefix: &str, frame: &FrameStyle) -> Result<(), ValidationError> {
    if frame.border_width > MAX_BORDER {
        return Err(ValidationError::field(
            format!("{prefix}.borderWidth"),
            format!("border width {} exceeds {MAX_BORDER}", frame.border_width),
        ));
    }
    if frame.border_radius > MAX_BORDER {
        return Err(ValidationError::field(
            format!("{prefix}.borderRadius"),
            format!("border radius {} exceeds {MAX_BORDER}", frame.border_radius),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;

    fn sample() -> StyleSchema {
        presets::default_style()
    }

    #[test]
    fn test_default_preset_is_valid() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let style = sample().renamed("   ");
        let err = style.validate().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidField { ref field, .. } if field == "name"));
    }

    #[test]
    fn test_validate_rejects_path_separators_in_name() {
        for name in ["../escaped", "a/b", "a\\b"] {
            let err = sample().renamed(name).validate().unwrap_err();
            assert!(matches!(err, ValidationError::InvalidField { ref field, .. } if field == "name"));
        }
        assert!(sample().renamed("Wait... what").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_font_size() {
        let mut style = sample();
        style.typography.description_size = 0;
        assert!(style.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_huge_border() {
        let mut style = sample();
        style.card.frame.border_width = 101;
        let err = style.validate().unwrap_err();
        assert!(err.to_string().contains("card.borderWidth"));
    }

    #[test]
    fn test_validate_fixed_badge_needs_size() {
        let mut style = sample();
        style.item_number_style.fixed_size = true;
        style.item_number_style.width = 0;
        assert!(style.validate().is_err());
    }

    #[test]
    fn test_background_json_layout() {
        let bg = BackgroundStyle {
            fill: BackgroundFill::Gradient {
                color: RgbColor::new(0, 0, 0),
                gradient_color: RgbColor::new(255, 255, 255),
                gradient_type: GradientKind::Radial,
                gradient_direction: GradientDirection::ToLeft,
            },
            accent_color: RgbColor::new(255, 0, 0),
        };
        let value = serde_json::to_value(&bg).unwrap();
        assert_eq!(value["type"], "gradient");
        assert_eq!(value["color"], "#000000");
        assert_eq!(value["gradientColor"], "#ffffff");
        assert_eq!(value["gradientType"], "radial");
        assert_eq!(value["gradientDirection"], "to left");
        assert_eq!(value["accentColor"], "#ff0000");
    }

    #[test]
    fn test_solid_background_ignores_stale_gradient_keys() {
        let json = r##"{"type":"solid","color":"#112233","gradientColor":"#445566","accentColor":"#ffcc00"}"##;
        let bg: BackgroundStyle = serde_json::from_str(json).unwrap();
        assert_eq!(
            bg.fill,
            BackgroundFill::Solid {
                color: RgbColor::new(0x11, 0x22, 0x33)
            }
        );
    }

    #[test]
    fn test_image_background_defaults() {
        let json = r##"{"type":"image","color":"#000000","accentColor":"#ffffff"}"##;
        let bg: BackgroundStyle = serde_json::from_str(json).unwrap();
        assert_eq!(
            bg.fill,
            BackgroundFill::Image {
                color: RgbColor::BLACK,
                image_url: None,
                image_darkness: Fraction::ZERO,
            }
        );
    }

    #[test]
    fn test_gradient_without_second_color_defaults_to_black() {
        let json = r##"{"type":"gradient","color":"#112233","accentColor":"#ffcc00"}"##;
        let bg: BackgroundStyle = serde_json::from_str(json).unwrap();
        assert_eq!(
            bg.fill,
            BackgroundFill::Gradient {
                color: RgbColor::new(0x11, 0x22, 0x33),
                gradient_color: RgbColor::BLACK,
                gradient_type: GradientKind::Linear,
                gradient_direction: GradientDirection::ToBottomRight,
            }
        );
    }

    #[test]
    fn test_unknown_background_type_fails() {
        let json = r##"{"type":"video","color":"#000000","accentColor":"#ffffff"}"##;
        assert!(serde_json::from_str::<BackgroundStyle>(json).is_err());
    }

    #[test]
    fn test_with_kind_keeps_base_color() {
        let solid = BackgroundFill::Solid {
            color: RgbColor::new(1, 2, 3),
        };
        let gradient = solid.clone().with_kind(BackgroundKind::Gradient, RgbColor::WHITE);
        assert_eq!(gradient.kind(), BackgroundKind::Gradient);
        assert_eq!(gradient.base_color(), RgbColor::new(1, 2, 3));

        let image = gradient.with_kind(BackgroundKind::Image, RgbColor::WHITE);
        assert!(matches!(image, BackgroundFill::Image { image_url: None, .. }));

        let same = solid.clone().with_kind(BackgroundKind::Solid, RgbColor::WHITE);
        assert_eq!(same, solid);
    }

    #[test]
    fn test_background_kind_parse() {
        assert_eq!(BackgroundKind::parse("Gradient"), Some(BackgroundKind::Gradient));
        assert_eq!(BackgroundKind::parse("video"), None);
    }

    #[test]
    fn test_direction_css_matches_serde() {
        for direction in GradientDirection::ALL {
            let json = serde_json::to_string(&direction).unwrap();
            assert_eq!(json, format!("\"{}\"", direction.as_css()));
        }
    }
}
