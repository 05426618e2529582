//! Bump arena backing every DER byte buffer produced by the crate.
//!
//! All encoded output is allocated here and released in one bulk operation
//! when the owning context is torn down. Callers receive [`ArenaBuf`] handles
//! rather than pointers; a handle is only meaningful against the arena that
//! produced it and is invalidated, all at once, by [`Arena::release`].

use zeroize::Zeroize;

use crate::infra::error::{CmsError, CmsResult};

/// Default chunk size for arena-backed allocations.
pub const DEFAULT_CHUNK_SIZE: usize = 2048;

/// Default total-capacity cap; encoding work past this fails rather than grow.
pub const DEFAULT_CAPACITY: usize = 1 << 20;

/// Handle to a byte range inside an [`Arena`].
///
/// Cheap to copy; resolves through [`Arena::bytes`]. Must only be used with
/// the arena that returned it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaBuf {
    chunk: usize,
    start: usize,
    len: usize,
}

impl ArenaBuf {
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Bump allocator over fixed-capacity chunks. Requests larger than the chunk
/// size get a dedicated chunk. Not safe for concurrent use.
#[derive(Debug)]
pub struct Arena {
    chunks: Vec<Vec<u8>>,
    chunk_size: usize,
    capacity: usize,
    high_water: usize,
}

impl Arena {
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_CHUNK_SIZE, DEFAULT_CAPACITY)
    }

    #[must_use]
    pub fn with_limits(chunk_size: usize, capacity: usize) -> Self {
        Self {
            chunks: Vec::new(),
            chunk_size,
            capacity,
            high_water: 0,
        }
    }

    /// Allocate a zero-filled range of `len` bytes.
    pub fn alloc(&mut self, len: usize) -> CmsResult<ArenaBuf> {
        if self.high_water + len > self.capacity {
            return Err(CmsError::Encoding(format!(
                "arena capacity exhausted ({} bytes in use, {} requested, cap {})",
                self.high_water, len, self.capacity
            )));
        }

        let chunk = self.chunk_with_room(len);
        let start = self.chunks[chunk].len();
        self.chunks[chunk].resize(start + len, 0);
        self.high_water += len;
        Ok(ArenaBuf { chunk, start, len })
    }

    /// Allocate and copy `data` in.
    pub fn alloc_bytes(&mut self, data: &[u8]) -> CmsResult<ArenaBuf> {
        let buf = self.alloc(data.len())?;
        self.bytes_mut(buf).copy_from_slice(data);
        Ok(buf)
    }

    /// Resolve a handle to its bytes.
    ///
    /// # Panics
    /// Panics if `buf` did not come from this arena.
    #[must_use]
    pub fn bytes(&self, buf: ArenaBuf) -> &[u8] {
        &self.chunks[buf.chunk][buf.start..buf.start + buf.len]
    }

    /// Resolve a handle to its bytes, mutably.
    ///
    /// # Panics
    /// Panics if `buf` did not come from this arena.
    pub fn bytes_mut(&mut self, buf: ArenaBuf) -> &mut [u8] {
        &mut self.chunks[buf.chunk][buf.start..buf.start + buf.len]
    }

    /// Total bytes ever handed out. Never decreases until [`Arena::release`].
    #[must_use]
    pub fn high_water_mark(&self) -> usize {
        self.high_water
    }

    /// Overwrite every allocated byte with zeros, keeping the chunks alive.
    pub fn wipe(&mut self) {
        for chunk in &mut self.chunks {
            chunk.as_mut_slice().zeroize();
        }
    }

    /// Wipe and free all chunks in one bulk operation. Every handle this
    /// arena ever produced is invalid afterwards.
    pub fn release(&mut self) {
        self.wipe();
        self.chunks.clear();
        self.high_water = 0;
    }

    fn chunk_with_room(&mut self, len: usize) -> usize {
        if len > self.chunk_size {
            // oversized request: dedicated chunk
            self.chunks.push(Vec::with_capacity(len));
            return self.chunks.len() - 1;
        }
        match self.chunks.last() {
            Some(last) if last.capacity() - last.len() >= len => self.chunks.len() - 1,
            _ => {
                self.chunks.push(Vec::with_capacity(self.chunk_size));
                self.chunks.len() - 1
            }
        }
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Arena {
    fn drop(&mut self) {
        self.wipe();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_bytes_round_trip() {
        let mut arena = Arena::new();
        let buf = arena.alloc_bytes(b"abc").unwrap();
        assert_eq!(arena.bytes(buf), b"abc");
        assert_eq!(buf.len(), 3);
        assert_eq!(arena.high_water_mark(), 3);
    }

    #[test]
    fn allocations_span_chunks() {
        let mut arena = Arena::with_limits(8, 1024);
        let a = arena.alloc_bytes(&[1u8; 6]).unwrap();
        let b = arena.alloc_bytes(&[2u8; 6]).unwrap();
        // second allocation cannot fit the first chunk's remaining 2 bytes
        assert_eq!(arena.bytes(a), &[1u8; 6]);
        assert_eq!(arena.bytes(b), &[2u8; 6]);
        assert_eq!(arena.high_water_mark(), 12);
    }

    #[test]
    fn oversized_allocation_gets_dedicated_chunk() {
        let mut arena = Arena::with_limits(8, 1024);
        let big = arena.alloc_bytes(&[7u8; 100]).unwrap();
        assert_eq!(arena.bytes(big), &[7u8; 100]);
        let small = arena.alloc_bytes(&[9u8; 2]).unwrap();
        assert_eq!(arena.bytes(small), &[9u8; 2]);
    }

    #[test]
    fn capacity_cap_is_enforced() {
        let mut arena = Arena::with_limits(16, 16);
        arena.alloc(10).unwrap();
        let err = arena.alloc(10).unwrap_err();
        assert!(matches!(err, CmsError::Encoding(_)));
        // high-water mark unchanged by the failed request
        assert_eq!(arena.high_water_mark(), 10);
    }

    #[test]
    fn wipe_overwrites_allocated_bytes() {
        let mut arena = Arena::new();
        let secret = arena.alloc_bytes(b"sensitive key material").unwrap();
        arena.wipe();
        assert!(arena.bytes(secret).iter().all(|&b| b == 0));
    }

    #[test]
    fn release_resets_the_arena() {
        let mut arena = Arena::new();
        arena.alloc_bytes(b"data").unwrap();
        arena.release();
        assert_eq!(arena.high_water_mark(), 0);
        // the arena is reusable after a bulk release
        let buf = arena.alloc_bytes(b"again").unwrap();
        assert_eq!(arena.bytes(buf), b"again");
    }
}
