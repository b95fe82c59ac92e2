use glam::Vec2;

/// Pointer travel below which a press/release pair counts as a click.
pub const CLICK_SLOP_PX: f32 = 4.0;

/// Left-button state used to tell clicks from orbit drags.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    pub position: Vec2,
    pub down: bool,
    travel: f32,
}

impl PointerState {
    pub fn press(&mut self) {
        self.down = true;
        self.travel = 0.0;
    }

    /// Record a cursor move; returns the drag delta while the button is held.
    pub fn moved(&mut self, position: Vec2) -> Option<Vec2> {
        let delta = position - self.position;
        self.position = position;
        if !self.down {
            return None;
        }
        self.travel += delta.length();
        Some(delta)
    }

    /// Returns true when the press ends as a click rather than a drag.
    pub fn release(&mut self) -> bool {
        let was_down = std::mem::take(&mut self.down);
        was_down && self.travel < CLICK_SLOP_PX
    }
}
