//! Progress gauge: an external collaborator reports an integer percentage,
//! the surface clamps it to [0, 100] and shows the indicator only while the
//! value is strictly between 0 and 100.

use parking_lot::Mutex;

#[derive(Debug, Default)]
struct GaugeState {
    position: u8,
    visible: bool,
}

#[derive(Debug, Default)]
pub struct ProgressGauge {
    state: Mutex<GaugeState>,
}

impl ProgressGauge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reported percentage. Out-of-range values are clamped; the
    /// indicator hides again once 100 is reached.
    pub fn set(&self, percentage: i64) {
        let clamped = percentage.clamp(0, 100) as u8;
        let mut state = self.state.lock();
        state.position = clamped;
        state.visible = clamped > 0 && clamped < 100;
    }

    pub fn position(&self) -> u8 {
        self.state.lock().position
    }

    pub fn is_visible(&self) -> bool {
        self.state.lock().visible
    }
}
