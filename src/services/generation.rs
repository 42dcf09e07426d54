//! AI content-generation collaborator.
//!
//! A request carries a topic and an item count and is authorized with the
//! current session's bearer token. Responses are only applied while the
//! request that produced them is still current; see [`RequestTracker`].

use serde::{Deserialize, Serialize};

use crate::error::{PostResult, ValidationError};
use crate::models::ListItem;

/// Item count used when none is configured.
pub const DEFAULT_ITEM_COUNT: usize = 4;

/// Body of a generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// What the post is about.
    pub topic: String,
    /// How many items to produce.
    pub item_count: usize,
}

impl GenerationRequest {
    /// Creates a request.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidField`] for a blank topic or a zero
    /// item count.
    pub fn new(topic: &str, item_count: usize) -> Result<Self, ValidationError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(ValidationError::field("topic", "topic cannot be empty"));
        }
        if item_count == 0 {
            return Err(ValidationError::field(
                "itemCount",
                "at least one item must be requested",
            ));
        }
        Ok(Self {
            topic: topic.to_string(),
            item_count,
        })
    }
}

/// A generated title and item list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneratedPost {
    /// Post title, possibly with `*` emphasis.
    pub title: String,
    /// Generated items.
    pub items: Vec<ListItem>,
}

impl GeneratedPost {
    /// Parses a response body.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::PostError::Network`] when the body is not a
    /// generated post; callers cannot tell that apart from a failed call.
    pub fn from_json(body: &str) -> PostResult<Self> {
        serde_json::from_str(body)
            .map_err(|e| crate::error::PostError::network(format!("unexpected response: {e}")))
    }
}

/// A content-generation service.
pub trait ContentGenerator {
    /// Performs one request authorized by `bearer_token`.
    ///
    /// # Errors
    ///
    /// Any failure, including a non-success status, is reported as
    /// [`crate::error::PostError::Network`].
    fn generate(&mut self, request: &GenerationRequest, bearer_token: &str)
        -> PostResult<GeneratedPost>;
}

/// Identifies one in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Hands out tickets; only the most recent one is current.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    latest: u64,
    pending: bool,
}

impl RequestTracker {
    /// Starts a request, superseding any earlier one.
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        self.pending = true;
        Ticket(self.latest)
    }

    /// Whether `ticket` belongs to the current request.
    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.pending && ticket.0 == self.latest
    }

    /// Marks `ticket` as finished. Returns whether it was still current;
    /// a stale ticket leaves the tracker untouched.
    pub fn finish(&mut self, ticket: Ticket) -> bool {
        if self.is_current(ticket) {
            self.pending = false;
            true
        } else {
            false
        }
    }

    /// Abandons the current request, e.g. when the user navigates away.
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    /// Whether a request is in flight.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }
}
