//! Post content: the title and the ordered list of items.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One card of the post.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListItem {
    /// Card heading.
    pub title: String,
    /// Card body; may span several lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ListItem {
    /// Creates an item with a title and no description.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    /// Adds a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// An item with empty title and empty description, as added by the editor.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            title: String::new(),
            description: Some(String::new()),
        }
    }
}

/// Editable field of a [`ListItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    /// [`ListItem::title`]
    Title,
    /// [`ListItem::description`]
    Description,
}

/// Title plus items in display order (row-major grid reading order).
///
/// Lives only for the current session; it is never written to disk by the
/// editor, only read from files by the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentModel {
    /// Post title; `*` marks emphasis.
    #[serde(default)]
    pub title: String,
    /// Items in display order.
    #[serde(default)]
    pub items: Vec<ListItem>,
}

impl Default for ContentModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentModel {
    /// Creates content with an empty title and one blank item.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: String::new(),
            items: vec![ListItem::blank()],
        }
    }

    /// Creates content from a title and items.
    pub fn with_items(title: impl Into<String>, items: Vec<ListItem>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }

    /// Appends a blank item. Never fails.
    pub fn add_item(&mut self) {
        self.items.push(ListItem::blank());
    }

    /// Replaces one field of one item.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::IndexOutOfRange`] when `index` is not a
    /// current item; nothing is modified in that case.
    pub fn update_item(
        &mut self,
        index: usize,
        field: ItemField,
        value: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(ValidationError::IndexOutOfRange { index, len })?;

        match field {
            ItemField::Title => item.title = value.into(),
            ItemField::Description => item.description = Some(value.into()),
        }
        Ok(())
    }

    /// Removes exactly one item, keeping the order of the rest.
    ///
    /// The list may become empty.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::IndexOutOfRange`] when `index` is not a
    /// current item.
    pub fn remove_item(&mut self, index: usize) -> Result<ListItem, ValidationError> {
        let len = self.items.len();
        if index >= len {
            return Err(ValidationError::IndexOutOfRange { index, len });
        }
        Ok(self.items.remove(index))
    }

    /// Replaces title and items at once (AI generation result).
    pub fn replace(&mut self, title: impl Into<String>, items: Vec<ListItem>) {
        self.title = title.into();
        self.items = items;
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
