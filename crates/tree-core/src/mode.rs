/// Target formation of the particle field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Tree,
    Explode,
    Text,
}

impl Mode {
    /// Next mode in the click cycle: tree, explode, text, tree.
    pub fn next(self) -> Self {
        match self {
            Mode::Tree => Mode::Explode,
            Mode::Explode => Mode::Text,
            Mode::Text => Mode::Tree,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Tree => "tree",
            Mode::Explode => "explode",
            Mode::Text => "text",
        }
    }

    /// The camera only drifts around the scene while the tree is standing.
    pub fn auto_rotate(self) -> bool {
        self == Mode::Tree
    }
}

/// Owns the session's current mode; the only writer is [`ModeController::trigger`].
#[derive(Clone, Debug, Default)]
pub struct ModeController {
    mode: Mode,
}

impl ModeController {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    pub fn current(&self) -> Mode {
        self.mode
    }

    /// Advance on a click and return the new mode.
    pub fn trigger(&mut self) -> Mode {
        self.mode = self.mode.next();
        log::info!("[mode] -> {}", self.mode.label());
        self.mode
    }
}
