use crate::types::Mode;

/// Read-only view of engine state, for rendering and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub mode: Mode,
    pub level: u32,
    pub replay_budget: u8,
    pub sequence_len: usize,
    pub input_len: usize,
    pub generation: u32,
    pub overlay_visible: bool,
    pub started: bool,
}

impl GameSnapshot {
    pub fn accepts_input(&self) -> bool {
        self.mode.accepts_input()
    }
}
