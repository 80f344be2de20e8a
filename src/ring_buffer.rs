//! Fixed-capacity circular byte buffer implementation.

use crate::error::BufferError;

/// Default capacity, in bytes, used by [`RingBuffer::default`].
pub const DEFAULT_CAPACITY: usize = 8192;

/// A fixed-capacity circular buffer of bytes.
///
/// `RingBuffer` holds bytes in FIFO order in a fixed block of storage,
/// wrapping around the physical end of the storage as data is added and
/// consumed. Capacity is fixed at construction and never changes; when the
/// buffer is full, adds fail instead of overwriting or blocking, and when it
/// is empty, reads fail instead of blocking.
///
/// # Semantics
///
/// - **Add**: Fails when the data does not fit; never overwrites
/// - **Read**: Fails when too little data is held; never blocks
/// - **Peek**: Non-consuming, matches the full held contents exactly
///
/// Bulk operations are all-or-nothing: space, occupancy and range bounds are
/// validated before any byte moves, so a failed call leaves both the buffer
/// and the caller's slice untouched.
///
/// The buffer is a plain value type with no internal synchronization. Wrap
/// it in a `Mutex` (or keep it owned by a single task) to share it across
/// threads.
///
/// # Example
///
/// ```
/// use bytering::RingBuffer;
///
/// let mut buf = RingBuffer::new(3).unwrap();
/// buf.add(1).unwrap();
/// buf.add(2).unwrap();
/// assert_eq!(buf.read().unwrap(), 1);
///
/// // Freed space is reused; the write position wraps around.
/// buf.add(3).unwrap();
/// buf.add(4).unwrap();
/// assert_eq!(buf.to_vec(), vec![2, 3, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct RingBuffer {
    buf: Vec<u8>,
    start: usize, // index of the oldest held byte
    len: usize,   // number of held bytes, <= buf.len()
}

impl Default for RingBuffer {
    fn default() -> Self {
        RingBuffer {
            buf: vec![0; DEFAULT_CAPACITY],
            start: 0,
            len: 0,
        }
    }
}

impl RingBuffer {
    /// Creates a new RingBuffer with the specified capacity.
    ///
    /// Returns [`BufferError::ZeroCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, BufferError> {
        if capacity == 0 {
            return Err(BufferError::ZeroCapacity);
        }
        Ok(RingBuffer {
            buf: vec![0; capacity],
            start: 0,
            len: 0,
        })
    }

    /// Returns the buffer capacity.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the number of bytes currently held.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of bytes that can still be added.
    pub fn space(&self) -> usize {
        self.buf.len() - self.len
    }

    /// Returns true if the buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the buffer is at capacity.
    pub fn is_full(&self) -> bool {
        self.len == self.buf.len()
    }

    /// Returns true if at least one byte can be read.
    pub fn has_bytes(&self) -> bool {
        self.len > 0
    }

    /// Returns true if at least one byte can be added.
    pub fn has_space(&self) -> bool {
        self.len < self.buf.len()
    }

    /// Returns true if `count` more bytes can be added.
    pub fn has_space_for(&self, count: usize) -> bool {
        self.space() >= count
    }

    /// Adds a single byte to the buffer.
    ///
    /// Returns [`BufferError::Full`] when the buffer is at capacity.
    pub fn add(&mut self, byte: u8) -> Result<(), BufferError> {
        if self.is_full() {
            return Err(BufferError::Full);
        }
        let end = self.end();
        self.buf[end] = byte;
        self.len += 1;
        Ok(())
    }

    /// Adds `length` bytes from `source[offset..offset + length]` to the
    /// buffer, preserving their order.
    ///
    /// The write is all-or-nothing: it happens only after the source range
    /// and the free space have both been validated.
    ///
    /// # Errors
    ///
    /// - [`BufferError::OutOfRange`] when the range does not fit in `source`
    /// - [`BufferError::NotEnoughSpace`] when fewer than `length` bytes are free
    pub fn add_bytes(
        &mut self,
        source: &[u8],
        offset: usize,
        length: usize,
    ) -> Result<(), BufferError> {
        check_range(source.len(), offset, length)?;
        if self.space() < length {
            return Err(BufferError::NotEnoughSpace {
                requested: length,
                available: self.space(),
            });
        }

        let data = &source[offset..offset + length];
        let capacity = self.buf.len();
        let end = self.end();
        if end + length <= capacity {
            self.buf[end..end + length].copy_from_slice(data);
        } else {
            // The write straddles the physical end: copy the tail span,
            // then wrap to the front of the storage.
            let first = capacity - end;
            self.buf[end..].copy_from_slice(&data[..first]);
            self.buf[..length - first].copy_from_slice(&data[first..]);
        }
        self.len += length;
        Ok(())
    }

    /// Removes and returns the oldest byte.
    ///
    /// Returns [`BufferError::Empty`] when the buffer holds no bytes.
    pub fn read(&mut self) -> Result<u8, BufferError> {
        if self.len == 0 {
            return Err(BufferError::Empty);
        }
        let byte = self.buf[self.start];
        self.start = (self.start + 1) % self.buf.len();
        self.len -= 1;
        Ok(byte)
    }

    /// Reads `length` bytes from the front of the buffer into
    /// `target[offset..offset + length]`, consuming them.
    ///
    /// The read is all-or-nothing: it happens only after the target range
    /// and the held byte count have both been validated.
    ///
    /// # Errors
    ///
    /// - [`BufferError::OutOfRange`] when the range does not fit in `target`
    /// - [`BufferError::NotEnoughBytes`] when fewer than `length` bytes are held
    pub fn read_bytes(
        &mut self,
        target: &mut [u8],
        offset: usize,
        length: usize,
    ) -> Result<(), BufferError> {
        check_range(target.len(), offset, length)?;
        if self.len < length {
            return Err(BufferError::NotEnoughBytes {
                requested: length,
                available: self.len,
            });
        }

        let capacity = self.buf.len();
        let out = &mut target[offset..offset + length];
        if self.start + length <= capacity {
            out.copy_from_slice(&self.buf[self.start..self.start + length]);
        } else {
            let first = capacity - self.start;
            out[..first].copy_from_slice(&self.buf[self.start..]);
            out[first..].copy_from_slice(&self.buf[..length - first]);
        }
        self.start = (self.start + length) % capacity;
        self.len -= length;
        Ok(())
    }

    /// Compares the held bytes against `source[offset..offset + length]`
    /// without consuming anything.
    ///
    /// Returns `Ok(true)` only when `length` equals the number of bytes
    /// currently held and every held byte matches the range byte-for-byte.
    /// A matching prefix is not enough: peeking one byte of a two-byte
    /// buffer returns `Ok(false)` even when that byte matches. The
    /// comparison follows the data across the wrap point. The buffer is
    /// never modified, whatever the outcome.
    ///
    /// Returns [`BufferError::OutOfRange`] when the range does not fit in
    /// `source`.
    ///
    /// # Example
    ///
    /// ```
    /// use bytering::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(3).unwrap();
    /// buf.add_bytes(&[7, 8], 0, 2).unwrap();
    ///
    /// assert!(buf.peek(&[7, 8], 0, 2).unwrap());
    /// assert!(!buf.peek(&[7], 0, 1).unwrap());
    /// assert_eq!(buf.len(), 2);
    /// ```
    pub fn peek(&self, source: &[u8], offset: usize, length: usize) -> Result<bool, BufferError> {
        check_range(source.len(), offset, length)?;
        if self.len != length {
            return Ok(false);
        }
        let capacity = self.buf.len();
        for (i, &expected) in source[offset..offset + length].iter().enumerate() {
            if self.buf[(self.start + i) % capacity] != expected {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Removes all held bytes.
    ///
    /// Capacity is unchanged; the buffer behaves as freshly constructed.
    pub fn clear(&mut self) {
        self.start = 0;
        self.len = 0;
    }

    /// Returns a copy of the held bytes in FIFO order, without consuming them.
    pub fn to_vec(&self) -> Vec<u8> {
        let capacity = self.buf.len();
        let mut out = Vec::with_capacity(self.len);
        if self.start + self.len <= capacity {
            out.extend_from_slice(&self.buf[self.start..self.start + self.len]);
        } else {
            out.extend_from_slice(&self.buf[self.start..]);
            out.extend_from_slice(&self.buf[..(self.start + self.len) % capacity]);
        }
        out
    }

    /// Index of the next write position.
    fn end(&self) -> usize {
        (self.start + self.len) % self.buf.len()
    }
}

/// Validates that `offset..offset + length` lies within a slice of `size`
/// bytes, without overflowing.
fn check_range(size: usize, offset: usize, length: usize) -> Result<(), BufferError> {
    match offset.checked_add(length) {
        Some(end) if end <= size => Ok(()),
        _ => Err(BufferError::OutOfRange {
            offset,
            length,
            size,
        }),
    }
}
