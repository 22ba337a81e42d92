use alloc::vec::Vec;

use crate::types::RevealState;

/// Default visibility fraction a block must reach before it is revealed.
pub const DEFAULT_REVEAL_THRESHOLD: f32 = 0.2;

#[derive(Clone, Debug)]
struct Block<K> {
    key: K,
    /// Start offset in the scroll axis.
    start: u64,
    /// Size in the scroll axis.
    size: u32,
    state: RevealState,
}

/// A one-shot visibility watcher over content blocks.
///
/// Blocks are registered with scroll-axis geometry and revealed the first
/// time their visible fraction inside the viewport window reaches the
/// threshold. A revealed block is reported exactly once and never
/// re-examined; blocks that never cross the threshold stay unrevealed for
/// the lifetime of the watcher.
#[derive(Clone, Debug)]
pub struct RevealObserver<K> {
    threshold: f32,
    blocks: Vec<Block<K>>,
}

impl<K: PartialEq> RevealObserver<K> {
    /// Creates a watcher with `threshold` clamped to `0.0..=1.0`.
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            blocks: Vec::new(),
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Starts observing a block.
    ///
    /// Re-observing an existing key updates its geometry and keeps its
    /// state.
    pub fn observe(&mut self, key: K, start: u64, size: u32) {
        if let Some(block) = self.blocks.iter_mut().find(|b| b.key == key) {
            block.start = start;
            block.size = size;
            return;
        }
        self.blocks.push(Block {
            key,
            start,
            size,
            state: RevealState::Unrevealed,
        });
    }

    /// Stops observing a block without revealing it.
    pub fn unobserve(&mut self, key: &K) {
        self.blocks.retain(|b| b.key != *key);
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.blocks
            .iter()
            .any(|b| b.key == *key && b.state == RevealState::Revealed)
    }

    pub fn revealed_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| b.state == RevealState::Revealed)
            .count()
    }

    /// Runs one observation pass over the window
    /// `[scroll_offset, scroll_offset + viewport_size)`.
    ///
    /// Every unrevealed block whose visible fraction reaches the threshold
    /// transitions to revealed and is emitted. The transition is
    /// irreversible, so each key is emitted at most once over the
    /// watcher's lifetime.
    pub fn update(&mut self, scroll_offset: u64, viewport_size: u32, mut emit: impl FnMut(&K)) {
        for block in &mut self.blocks {
            if block.state == RevealState::Revealed {
                continue;
            }
            let ratio = intersection_ratio(block.start, block.size, scroll_offset, viewport_size);
            let intersecting = ratio > 0.0;
            if intersecting && ratio >= self.threshold {
                block.state = RevealState::Revealed;
                etrace!(ratio = ratio as f64, "block revealed");
                emit(&block.key);
            }
        }
    }
}

/// Fraction of a block visible inside `[offset, offset + viewport)`.
fn intersection_ratio(start: u64, size: u32, offset: u64, viewport: u32) -> f32 {
    let window_end = offset.saturating_add(viewport as u64);
    if size == 0 {
        // Zero-area blocks count as fully visible while touching the
        // window, so a nonzero threshold still fires for them.
        return if start >= offset && start <= window_end {
            1.0
        } else {
            0.0
        };
    }
    let end = start.saturating_add(size as u64);
    let lo = start.max(offset);
    let hi = end.min(window_end);
    if hi <= lo {
        return 0.0;
    }
    (hi - lo) as f32 / size as f32
}
