//! Trailing time-windowed buffer of motion samples.
//!
//! Maintained continuously, independent of touch state. At gesture end its
//! contents characterize the ambient motion immediately preceding and
//! surrounding the touch ("before" features).

use std::collections::VecDeque;

use crate::models::MotionSample;

/// Retention window relative to the newest sample's timestamp.
pub const HISTORY_WINDOW_NS: i64 = 200_000_000; // 200ms

#[derive(Debug, Default)]
pub struct HistoryBuffer {
    samples: VecDeque<MotionSample>,
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::new(),
        }
    }

    /// Appends `sample` and evicts from the front while the retained span
    /// reaches the window width. With monotonic timestamps this is a single
    /// amortized-O(1) forward scan; an out-of-order timestamp may under- or
    /// over-retain but cannot loop past the buffer length.
    pub fn push(&mut self, sample: MotionSample) {
        self.samples.push_back(sample);
        while let Some(front) = self.samples.front() {
            if sample.timestamp_ns - front.timestamp_ns >= HISTORY_WINDOW_NS {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    /// Current window contents, oldest first. May be empty.
    pub fn snapshot(&self) -> Vec<MotionSample> {
        self.samples.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
