//! Convenience constructors for common buffer capacities.

use crate::error::BufferError;
use crate::ring_buffer::RingBuffer;

fn ring_bytes_sized(capacity: usize) -> RingBuffer {
    // All callers pass a non-zero constant.
    RingBuffer::new(capacity).expect("capacity is non-zero")
}

/// Creates a 1KB ring buffer.
pub fn ring_bytes_1kb() -> RingBuffer {
    ring_bytes_sized(1024)
}

/// Creates a 4KB ring buffer.
pub fn ring_bytes_4kb() -> RingBuffer {
    ring_bytes_sized(4096)
}

/// Creates a 16KB ring buffer.
pub fn ring_bytes_16kb() -> RingBuffer {
    ring_bytes_sized(16384)
}

/// Creates a 64KB ring buffer.
pub fn ring_bytes_64kb() -> RingBuffer {
    ring_bytes_sized(65536)
}

/// Creates a ring buffer with the specified capacity.
pub fn ring_bytes(capacity: usize) -> Result<RingBuffer, BufferError> {
    RingBuffer::new(capacity)
}
