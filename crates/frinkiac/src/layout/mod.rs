// Caption and gallery layout helpers.
// Pure functions over plain numbers and strings — no UI-framework types,
// no shared state between calls.

pub mod grid;
pub mod wrap;

// Re-export the public API consumed by other modules (meme, main).
pub use grid::{
    allowable_width, item_size, AspectRatio, GridConstraint, GridError, Insets, ItemSize,
    RatioMode,
};
pub use wrap::{wrap, wrap_joined, DEFAULT_MAX_LINE_LENGTH};
