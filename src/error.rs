//! Error types for buffer operations.

/// Buffer operation error.
///
/// Every failing operation reports why it failed and leaves the buffer
/// exactly as it was before the call. The variants fall into three groups:
/// construction ([`ZeroCapacity`](BufferError::ZeroCapacity)), occupancy
/// ([`Empty`](BufferError::Empty), [`Full`](BufferError::Full),
/// [`NotEnoughBytes`](BufferError::NotEnoughBytes),
/// [`NotEnoughSpace`](BufferError::NotEnoughSpace)) and caller-supplied
/// ranges ([`OutOfRange`](BufferError::OutOfRange)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    /// Construction was attempted with a capacity of zero.
    #[error("buffer: capacity must be greater than 0")]
    ZeroCapacity,
    /// A single-byte read found the buffer empty.
    #[error("buffer: no bytes available")]
    Empty,
    /// A single-byte add found the buffer full.
    #[error("buffer: no space available")]
    Full,
    /// A bulk read asked for more bytes than the buffer currently holds.
    #[error("buffer: {requested} bytes requested, only {available} available")]
    NotEnoughBytes {
        /// Number of bytes the caller asked for.
        requested: usize,
        /// Number of bytes held at the time of the call.
        available: usize,
    },
    /// A bulk add offered more bytes than the buffer has space for.
    #[error("buffer: {requested} bytes offered, space for only {available}")]
    NotEnoughSpace {
        /// Number of bytes the caller offered.
        requested: usize,
        /// Free space at the time of the call.
        available: usize,
    },
    /// An offset/length pair referenced bytes outside a caller-supplied slice.
    #[error("buffer: offset {offset} plus length {length} exceeds slice length {size}")]
    OutOfRange {
        /// Start of the requested range.
        offset: usize,
        /// Length of the requested range.
        length: usize,
        /// Length of the slice the range was applied to.
        size: usize,
    },
}
