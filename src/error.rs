use thiserror::Error;

/// Errors raised by the carousel controller.
///
/// Only `go_to` can fail; every other operation is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("slide index {index} is out of range for a carousel of {len} slides")]
    OutOfRange { index: usize, len: usize },
}
