use thiserror::Error;

/// Errors surfaced by gallery construction and navigation.
///
/// Every other operation (drag, resize, directional navigation) is total
/// over its valid inputs and cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GalleryError {
    /// The container had no slides; a gallery needs at least one.
    #[error("gallery requires at least one slide")]
    InvalidConfiguration,

    /// A requested slide index was outside `0..count`. The gallery state is
    /// left untouched.
    #[error("slide index {index} out of range (gallery has {count} slides)")]
    IndexOutOfRange { index: usize, count: usize },
}
