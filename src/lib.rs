//! Fixed-capacity circular byte buffer.
//!
//! This crate provides [`RingBuffer`], a circular buffer of raw bytes with a
//! capacity fixed at construction. Bytes are held in FIFO order in a single
//! contiguous block of storage; as data is added and consumed, the occupied
//! region wraps around the physical end of the block without moving or
//! reallocating anything.
//!
//! # Semantics
//!
//! Unlike a sliding-window ring that overwrites its oldest data, or a
//! blocking queue that waits for space, `RingBuffer` fails fast: adding to a
//! full buffer and reading from an empty one return an error and leave the
//! buffer untouched. Bulk operations validate the caller's range and the
//! buffer's occupancy before moving a single byte, so a failed call never
//! commits a partial write or read.
//!
//! # Example
//!
//! ```
//! use bytering::RingBuffer;
//!
//! let mut buf = RingBuffer::new(4).unwrap();
//! buf.add(1).unwrap();
//! buf.add_bytes(&[2, 3], 0, 2).unwrap();
//! assert_eq!(buf.len(), 3);
//!
//! assert_eq!(buf.read().unwrap(), 1);
//! let mut out = [0u8; 2];
//! buf.read_bytes(&mut out, 0, 2).unwrap();
//! assert_eq!(out, [2, 3]);
//! assert!(buf.is_empty());
//! ```
//!
//! # Peeking
//!
//! [`RingBuffer::peek`] compares the buffer's entire held contents against a
//! caller-supplied range without consuming anything, so a known pattern can
//! be tested in one call with no risk of a destructive read on mismatch.
//!
//! # Convenience Constructors
//!
//! The [`ring_bytes`] helpers create buffers at common capacities:
//!
//! ```
//! use bytering::{ring_bytes, ring_bytes_4kb};
//!
//! let buf = ring_bytes_4kb();
//! assert_eq!(buf.capacity(), 4096);
//!
//! let small = ring_bytes(64).unwrap();
//! assert_eq!(small.capacity(), 64);
//! ```

mod bytes;
mod error;
mod ring_buffer;

pub use bytes::{ring_bytes, ring_bytes_1kb, ring_bytes_4kb, ring_bytes_16kb, ring_bytes_64kb};
pub use error::BufferError;
pub use ring_buffer::{DEFAULT_CAPACITY, RingBuffer};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RingBuffer>();
        assert_send_sync::<BufferError>();
    }

    #[test]
    fn test_ring_buffer_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<RingBuffer>();
        assert_clone::<BufferError>();
    }

    #[test]
    fn test_clone_is_independent() {
        let mut a = RingBuffer::new(4).unwrap();
        a.add_bytes(&[1, 2], 0, 2).unwrap();

        let mut b = a.clone();
        b.read().unwrap();

        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 1);
    }
}
