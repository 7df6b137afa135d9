//! Frame scheduling for the run loop.
//!
//! The controller never waits on a clock. It asks a [`FrameScheduler`] for
//! "one more callback before the next refresh" and gets back a handle it can
//! cancel. The host decides when frames actually arrive.

/// Opaque token for one pending frame callback
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

/// Capability to request and cancel a single future frame callback
pub trait FrameScheduler {
    /// Request one callback on a future frame
    fn schedule_next(&mut self) -> FrameHandle;

    /// Withdraw a pending request. Unknown or already fired handles are ignored.
    fn cancel(&mut self, handle: FrameHandle);
}

pub const MIN_RATE: f32 = 1.0;
pub const MAX_RATE: f32 = 60.0;

/// Frame queue driven by the host's refresh loop.
/// Unthrottled it releases every pending request on the next frame; with a
/// rate it waits until enough frame time has accumulated.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    pending: Vec<FrameHandle>,
    rate: Option<f32>,
    timer: f32,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue limited to `rate` releases per second (`None` = every frame)
    pub fn throttled(rate: Option<f32>) -> Self {
        Self {
            rate: rate.map(|r| r.clamp(MIN_RATE, MAX_RATE)),
            ..Self::default()
        }
    }

    pub fn rate(&self) -> Option<f32> {
        self.rate
    }

    /// Change speed by `delta` generations per second.
    /// An unthrottled queue starts from the maximum rate.
    pub fn adjust_rate(&mut self, delta: f32) {
        let current = self.rate.unwrap_or(MAX_RATE);
        self.rate = Some((current + delta).clamp(MIN_RATE, MAX_RATE));
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Called once per display refresh with the frame duration in seconds.
    /// Returns the handles whose callbacks are due now.
    pub fn advance(&mut self, delta: f32) -> Vec<FrameHandle> {
        if let Some(rate) = self.rate {
            self.timer += delta;
            if self.timer < 1.0 / rate {
                return Vec::new();
            }
            self.timer = 0.0;
        }
        std::mem::take(&mut self.pending)
    }
}

impl FrameScheduler for FrameQueue {
    fn schedule_next(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.push(handle);
        handle
    }

    fn cancel(&mut self, handle: FrameHandle) {
        self.pending.retain(|&h| h != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_are_unique() {
        let mut queue = FrameQueue::new();
        let a = queue.schedule_next();
        let b = queue.schedule_next();
        assert_ne!(a, b);
        assert_eq!(queue.pending_count(), 2);
    }

    #[test]
    fn test_unthrottled_releases_on_next_frame() {
        let mut queue = FrameQueue::new();
        let handle = queue.schedule_next();
        assert_eq!(queue.advance(0.016), vec![handle]);
        assert!(queue.advance(0.016).is_empty());
    }

    #[test]
    fn test_cancel_removes_only_that_handle() {
        let mut queue = FrameQueue::new();
        let a = queue.schedule_next();
        let b = queue.schedule_next();
        queue.cancel(a);
        queue.cancel(a);
        assert_eq!(queue.advance(0.0), vec![b]);
    }

    #[test]
    fn test_throttled_waits_for_interval() {
        let mut queue = FrameQueue::throttled(Some(10.0));
        let handle = queue.schedule_next();
        assert!(queue.advance(0.05).is_empty());
        assert_eq!(queue.advance(0.06), vec![handle]);
    }

    #[test]
    fn test_adjust_rate_clamps() {
        let mut queue = FrameQueue::new();
        queue.adjust_rate(1.0);
        assert_eq!(queue.rate(), Some(MAX_RATE));
        queue.adjust_rate(-100.0);
        assert_eq!(queue.rate(), Some(MIN_RATE));
        assert_eq!(FrameQueue::throttled(Some(500.0)).rate(), Some(MAX_RATE));
    }
}
