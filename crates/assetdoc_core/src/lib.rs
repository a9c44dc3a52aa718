//! Public library API for decoding serialized game-engine asset files.

/// Versioned object decoding, reference resolution, hierarchy traversal, and export.
pub mod asset;
