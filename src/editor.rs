//! Editor state and user actions.
//!
//! [`EditorState`] owns the current style, content and grid. Every style
//! edit works on a copy that is validated and then swapped in whole, so a
//! failed action leaves the previous value in place and no caller ever sees
//! a half-applied edit.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::config::Config;
use crate::error::{PostError, PostResult, ValidationError};
use crate::models::{
    BackgroundFill, BackgroundKind, ContentModel, Fraction, GridLayout, ItemField, ListItem,
    StyleSchema,
};
use crate::presets;
use crate::render::{self, VisualTree};
use crate::services::generation::DEFAULT_ITEM_COUNT;
use crate::services::styles::export_file_name;
use crate::services::{
    assets, export, ContentGenerator, ExportOptions, GeneratedPost, GenerationRequest, RasterImage,
    RenderSurface, RequestTracker, Session, StyleLibrary, StyleService, Ticket,
};

/// The editing session.
#[derive(Debug, Clone)]
pub struct EditorState {
    style: StyleSchema,
    content: ContentModel,
    grid: GridLayout,
    session: Option<Session>,
    exporting: bool,
    generation: RequestTracker,
    generation_item_count: usize,
    export_options: ExportOptions,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    /// Starts with the first preset, one blank item and a 2x2 grid.
    #[must_use]
    pub fn new() -> Self {
        Self {
            style: presets::default_style(),
            content: ContentModel::new(),
            grid: GridLayout::default(),
            session: None,
            exporting: false,
            generation: RequestTracker::default(),
            generation_item_count: DEFAULT_ITEM_COUNT,
            export_options: ExportOptions::default(),
        }
    }

    /// Starts from the configured preset, grid and export settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        config.validate()?;
        let style = presets::find(&config.editor.default_preset).ok_or_else(|| {
            anyhow::anyhow!("Unknown preset '{}'", config.editor.default_preset)
        })?;

        Ok(Self {
            style,
            grid: config.editor.grid()?,
            generation_item_count: config.editor.generation_item_count,
            export_options: config.export.clone(),
            ..Self::new()
        })
    }

    /// Current style.
    #[must_use]
    pub const fn style(&self) -> &StyleSchema {
        &self.style
    }

    /// Current content.
    #[must_use]
    pub const fn content(&self) -> &ContentModel {
        &self.content
    }

    /// Current grid.
    #[must_use]
    pub const fn grid(&self) -> GridLayout {
        self.grid
    }

    /// Current session.
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Whether an image export is running.
    #[must_use]
    pub const fn is_exporting(&self) -> bool {
        self.exporting
    }

    /// Whether a generation request is in flight.
    #[must_use]
    pub const fn is_generating(&self) -> bool {
        self.generation.is_pending()
    }

    /// Derives the visual tree for the current state.
    #[must_use]
    pub fn visual_tree(&self) -> VisualTree {
        render::derive(&self.style, &self.content, self.grid)
    }

    // ---- style ----

    /// Switches to a preset. Returns false and keeps the current style when
    /// no preset has that exact name.
    pub fn select_preset(&mut self, name: &str) -> bool {
        match presets::find(name) {
            Some(style) => {
                tracing::debug!(preset = name, "selected preset");
                self.style = style;
                true
            }
            None => {
                tracing::warn!(preset = name, "unknown preset, keeping current style");
                false
            }
        }
    }

    /// Applies `edit` to a copy of the style and swaps it in if it validates.
    ///
    /// # Errors
    ///
    /// Returns the validation error; the current style is unchanged.
    pub fn update_style<F>(&mut self, edit: F) -> PostResult<()>
    where
        F: FnOnce(&mut StyleSchema),
    {
        let mut next = self.style.clone();
        edit(&mut next);
        self.replace_style(next)
    }

    /// Replaces the style wholesale.
    ///
    /// # Errors
    ///
    /// Returns the validation error; the current style is unchanged.
    pub fn replace_style(&mut self, style: StyleSchema) -> PostResult<()> {
        style.validate()?;
        self.style = style;
        Ok(())
    }

    /// Replaces the style with one decoded from a style file's text.
    ///
    /// # Errors
    ///
    /// Returns [`PostError::Deserialization`]; the current style is unchanged.
    pub fn import_style(&mut self, text: &str) -> PostResult<()> {
        match StyleService::deserialize(text) {
            Ok(style) => {
                tracing::info!(name = %style.name, "imported style");
                self.style = style;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "style import failed");
                Err(e)
            }
        }
    }

    /// Reads a style file and imports it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not hold a valid
    /// style; the current style is unchanged.
    pub fn import_style_file(&mut self, path: &Path) -> PostResult<()> {
        let text = fs::read_to_string(path)
            .inspect_err(|e| tracing::warn!(error = %e, path = %path.display(), "style import failed"))
            .with_context(|| format!("Failed to read style file {}", path.display()))?;
        self.import_style(&text)
    }

    /// File name and content for exporting the current style.
    ///
    /// # Errors
    ///
    /// Returns an error if the style cannot be encoded.
    pub fn export_style(&self) -> anyhow::Result<(String, String)> {
        Ok((
            export_file_name(&self.style.name)?,
            StyleService::serialize(&self.style)?,
        ))
    }

    /// Saves a copy of the current style under `name`.
    ///
    /// The current style keeps its own name.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank name or
    /// [`ValidationError::DuplicateName`] when the name is taken.
    pub fn save_style_as(&self, library: &mut StyleLibrary, name: &str) -> PostResult<()> {
        crate::models::style::validate_name(name)?;
        library.save(self.style.renamed(name))
    }

    /// Switches to a saved style. Returns false when the name is unknown.
    pub fn load_saved_style(&mut self, library: &StyleLibrary, name: &str) -> bool {
        match library.get(name) {
            Some(style) => {
                self.style = style.clone();
                true
            }
            None => false,
        }
    }

    /// Switches the background variant, keeping the base color.
    ///
    /// A new gradient blends into the accent color.
    pub fn set_background_kind(&mut self, kind: BackgroundKind) {
        let accent = self.style.background.accent_color;
        let fill = self.style.background.fill.clone().with_kind(kind, accent);
        self.style.background.fill = fill;
    }

    /// Sets card opacity, clamping into `[0, 1]`.
    pub fn set_card_opacity(&mut self, value: f64) {
        self.style.card.frame.opacity = Fraction::clamped(value);
    }

    /// Sets badge opacity, clamping into `[0, 1]`.
    pub fn set_badge_opacity(&mut self, value: f64) {
        self.style.item_number_style.frame.opacity = Fraction::clamped(value);
    }

    /// Sets the image overlay darkness, clamping into `[0, 1]`.
    ///
    /// Has no effect unless the background is an image.
    pub fn set_image_darkness(&mut self, value: f64) {
        if let BackgroundFill::Image { image_darkness, .. } = &mut self.style.background.fill {
            *image_darkness = Fraction::clamped(value);
        }
    }

    /// Loads an image file as the background and switches to an image
    /// background.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is not an image or cannot be read; the
    /// style is unchanged.
    pub fn load_background_image(&mut self, path: &Path) -> PostResult<()> {
        let uri = assets::image_data_uri(path)?;
        let (color, image_darkness) = match &self.style.background.fill {
            BackgroundFill::Image { image_darkness, .. } => {
                (self.style.background.fill.base_color(), *image_darkness)
            }
            fill => (fill.base_color(), Fraction::ZERO),
        };
        self.style.background.fill = BackgroundFill::Image {
            color,
            image_url: Some(uri),
            image_darkness,
        };
        Ok(())
    }

    /// Loads an image file as the footer photo.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is not an image or cannot be read; the
    /// style is unchanged.
    pub fn load_footer_photo(&mut self, path: &Path) -> PostResult<()> {
        let uri = assets::image_data_uri(path)?;
        self.style.footer.photo_url = Some(uri);
        Ok(())
    }

    /// Removes the footer photo.
    pub fn clear_footer_photo(&mut self) {
        self.style.footer.photo_url = None;
    }

    // ---- grid and content ----

    /// Changes the grid.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidGrid`]; the grid is unchanged.
    pub fn set_grid(&mut self, rows: u8, columns: u8) -> Result<(), ValidationError> {
        self.grid = GridLayout::new(rows, columns)?;
        Ok(())
    }

    /// Sets the post title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.content.title = title.into();
    }

    /// Appends a blank item.
    pub fn add_item(&mut self) {
        self.content.add_item();
    }

    /// Replaces one field of one item.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::IndexOutOfRange`].
    pub fn update_item(
        &mut self,
        index: usize,
        field: ItemField,
        value: impl Into<String>,
    ) -> Result<(), ValidationError> {
        self.content.update_item(index, field, value)
    }

    /// Removes one item.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::IndexOutOfRange`].
    pub fn remove_item(&mut self, index: usize) -> Result<ListItem, ValidationError> {
        self.content.remove_item(index)
    }

    // ---- session-gated actions ----

    /// Records a session change. Signing out abandons any pending generation.
    pub fn set_session(&mut self, session: Option<Session>) {
        if session.is_none() {
            self.generation.cancel();
        }
        self.session = session;
    }

    fn require_session(&self, action: &str) -> PostResult<&Session> {
        self.session
            .as_ref()
            .ok_or_else(|| PostError::auth_required(action))
    }

    /// Starts a generation request for `topic`.
    ///
    /// Any earlier pending request becomes stale.
    ///
    /// # Errors
    ///
    /// Returns [`PostError::AuthRequired`] without a session and a
    /// validation error for a blank topic.
    pub fn begin_generation(&mut self, topic: &str) -> PostResult<(Ticket, GenerationRequest)> {
        self.require_session("generate content")?;
        let request = GenerationRequest::new(topic, self.generation_item_count)?;
        Ok((self.generation.begin(), request))
    }

    /// Applies a generation result if `ticket` is still current.
    ///
    /// Returns `Ok(false)` for a stale response, which is dropped without
    /// touching the content.
    ///
    /// # Errors
    ///
    /// Returns the generator's error for a current request.
    pub fn finish_generation(
        &mut self,
        ticket: Ticket,
        result: PostResult<GeneratedPost>,
    ) -> PostResult<bool> {
        if !self.generation.finish(ticket) {
            tracing::debug!("discarding stale generation response");
            return Ok(false);
        }
        let post = result?;
        self.content.replace(post.title, post.items);
        Ok(true)
    }

    /// Abandons the pending generation request.
    pub fn cancel_generation(&mut self) {
        self.generation.cancel();
    }

    /// Generates title and items for `topic` and replaces the content.
    ///
    /// # Errors
    ///
    /// Returns [`PostError::AuthRequired`] without a session, a validation
    /// error for a blank topic, or the generator's
    /// [`PostError::Network`] error. The content is unchanged on error.
    pub fn generate_content(
        &mut self,
        generator: &mut dyn ContentGenerator,
        topic: &str,
    ) -> PostResult<()> {
        let (ticket, request) = self.begin_generation(topic)?;
        let token = self.require_session("generate content")?.access_token.clone();
        tracing::info!(topic = %request.topic, items = request.item_count, "generating content");
        let result = generator.generate(&request, &token);
        self.finish_generation(ticket, result).map(|_| ())
    }

    /// Rasterizes the current post.
    ///
    /// The busy flag is set for the duration of the call.
    ///
    /// # Errors
    ///
    /// Returns [`PostError::AuthRequired`] without a session and
    /// [`PostError::Render`] when the surface fails.
    pub fn export_image(&mut self, surface: &mut dyn RenderSurface) -> PostResult<RasterImage> {
        self.require_session("export images")?;
        if self.exporting {
            return Err(PostError::render("an export is already running"));
        }

        let tree = self.visual_tree();
        tracing::info!(scale = self.export_options.scale, "exporting image");
        self.exporting = true;
        let result = surface.render(&tree, self.export_options.scale);
        self.exporting = false;

        if let Err(e) = &result {
            tracing::warn!(error = %e, "image export failed");
        }
        result
    }

    /// Rasterizes the current post and writes it into `dir` under the
    /// configured file name.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::export_image`], a
    /// [`PostError::Render`] when the surface ignored the export scale, or
    /// [`PostError::Other`] when the file cannot be written.
    pub fn export_image_to(
        &mut self,
        surface: &mut dyn RenderSurface,
        dir: &Path,
    ) -> PostResult<PathBuf> {
        let image = self.export_image(surface)?;
        let expected = self.export_options.pixel_size(&self.visual_tree());
        if (image.width, image.height) != expected {
            return Err(PostError::render(format!(
                "surface returned {}x{} pixels, expected {}x{}",
                image.width, image.height, expected.0, expected.1
            )));
        }
        Ok(export::write_raster(&image, dir, &self.export_options)?)
    }

    /// Export settings in use.
    #[must_use]
    pub const fn export_options(&self) -> &ExportOptions {
        &self.export_options
    }
}
