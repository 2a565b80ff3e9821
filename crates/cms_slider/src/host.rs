//! Integration seam with the host carousel widget.

/// The widget runtime that animates slides.
///
/// After every structural rebuild the engine asks the host to refresh its
/// slide bookkeeping. Hosts that are absent use [`NoopHost`].
pub trait SliderHost {
    fn name(&self) -> &'static str;
    /// Best-effort refresh; must not fail.
    fn redraw(&mut self);
}

/// No widget runtime on the page.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHost;

impl SliderHost for NoopHost {
    fn name(&self) -> &'static str {
        "noop"
    }

    fn redraw(&mut self) {}
}

/// Counts redraw requests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecordingHost {
    pub redraws: usize,
}

impl SliderHost for RecordingHost {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn redraw(&mut self) {
        self.redraws += 1;
    }
}
