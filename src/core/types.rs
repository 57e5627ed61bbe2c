//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A storage object key (e.g., `carousel/beach.jpg`).
///
/// Path-like, `/`-separated. A trailing `/` marks a folder placeholder.
pub type ObjectKey = String;

/// A key prefix naming a logical folder (e.g., `carousel`).
pub type Folder = String;

/// A lowercase hex digest string.
pub type HexDigest = String;

/// A page continuation token returned by the storage backend.
pub type ContinuationToken = String;
