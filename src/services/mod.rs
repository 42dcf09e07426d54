//! Service layer for persistence and external collaborators.
//!
//! Style files, the saved-style library, asset loading, and the
//! interfaces to authentication, content generation and rasterization.

pub mod assets;
pub mod export;
pub mod generation;
pub mod library;
pub mod session;
pub mod styles;

// Re-export commonly used types and functions
pub use export::{ExportOptions, RasterImage, RenderSurface};
pub use generation::{ContentGenerator, GeneratedPost, GenerationRequest, RequestTracker, Ticket};
pub use library::StyleLibrary;
pub use session::{AuthProvider, Session};
pub use styles::StyleService;
