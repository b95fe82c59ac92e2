use instant::Instant;

/// Frame timing handed to the morph engine.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    pub delta: f32,
    pub elapsed: f32,
}

/// Wall-clock source of per-frame delta and session-elapsed seconds.
pub struct FrameClock {
    start: Instant,
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
        }
    }

    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now - self.last;
        self.last = now;
        FrameTime {
            delta: dt.as_secs_f32(),
            elapsed: (now - self.start).as_secs_f32(),
        }
    }
}
