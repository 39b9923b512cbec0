//! The opaque engine state region.
//!
//! One fixed-size heap allocation made before the loop starts and kept for
//! the lifetime of the process. The engine owns the layout of the bytes;
//! this side only guarantees size, alignment and exclusive ownership.

use anyhow::{Context, Result};

/// Owned, fixed-size, untyped memory region holding the engine's state.
///
/// Backed by `u32` words so the region is 4-byte aligned, which the
/// engine's state view requires. Allocated exactly once; never resized,
/// never handed out by value. It is deliberately never released early: its
/// lifetime is coincident with the process.
pub struct EngineHandle {
    words: Box<[u32]>,
}

impl EngineHandle {
    /// Reserve a zeroed region of at least `bytes` bytes.
    ///
    /// Allocation is fallible by design: startup must be able to report a
    /// refused allocation instead of aborting, because the frame loop may
    /// only start once the handle exists.
    pub fn allocate(bytes: usize) -> Result<Self> {
        let len = bytes.div_ceil(4);
        let mut words: Vec<u32> = Vec::new();
        words
            .try_reserve_exact(len)
            .with_context(|| format!("failed to allocate {bytes} byte engine state region"))?;
        words.resize(len, 0);
        Ok(Self {
            words: words.into_boxed_slice(),
        })
    }

    /// Region size in bytes.
    pub fn size_bytes(&self) -> usize {
        self.words.len() * 4
    }

    /// The untyped region the engine operates on.
    pub fn region_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(&mut self.words[..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocates_and_rounds_up_to_whole_words() {
        let mut handle = EngineHandle::allocate(10).unwrap();
        assert_eq!(handle.size_bytes(), 12);
        assert!(handle.region_mut().iter().all(|&b| b == 0));
    }

    #[test]
    fn region_is_word_aligned() {
        let mut handle = EngineHandle::allocate(320).unwrap();
        let ptr = handle.region_mut().as_ptr() as usize;
        assert_eq!(ptr % 4, 0);
    }

    #[test]
    fn absurd_request_fails_instead_of_aborting() {
        assert!(EngineHandle::allocate(usize::MAX).is_err());
    }
}
