/// Collapses bursts of scroll events into a single animation-frame update.
///
/// A request only asks for a new frame when none is pending. The pending
/// flag is cleared when the frame starts, before any work, so events that
/// arrive while the frame is running schedule a fresh one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameCoalescer {
    pending: bool,
    frames_run: u64,
}

impl FrameCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the caller must schedule a frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Marks the start of a scheduled frame and returns its sequence number.
    pub fn begin_frame(&mut self) -> u64 {
        self.pending = false;
        self.frames_run += 1;
        self.frames_run
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn frames_run(&self) -> u64 {
        self.frames_run
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_first_request_in_a_burst_schedules() {
        let mut frames = FrameCoalescer::new();
        assert!(frames.request());
        assert!(!frames.request());
        assert!(!frames.request());
        assert!(frames.is_pending());

        assert_eq!(frames.begin_frame(), 1);
        assert!(!frames.is_pending());
        assert!(frames.request());
    }
}
