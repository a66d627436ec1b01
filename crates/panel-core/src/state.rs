use core::fmt;

/// Largest value the panel can fetch
pub const MAX_VALUE: u8 = 20;

/// Recorded LED state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LedState {
    On,
    #[default]
    Off,
}

impl LedState {
    pub const fn as_str(self) -> &'static str {
        match self {
            LedState::On => "ON",
            LedState::Off => "OFF",
        }
    }

    pub const fn is_on(self) -> bool {
        matches!(self, LedState::On)
    }
}

impl fmt::Display for LedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State shown on the panel page.
///
/// Owned by a single server task. Serving clients from several tasks would
/// require wrapping the owner in a mutex, as both fields change per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelState {
    pub led: LedState,
    /// Last fetched value, always in `0..=MAX_VALUE`
    pub last_value: u8,
}
