/// Coarse lifecycle of a store, derived from its flags.
///
/// `Refreshing` takes precedence over `Loading` so a pull-to-refresh
/// keeps the current content visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Refreshing,
    Ready,
    Failed,
}

impl LoadPhase {
    /// Fold the common store flags into a phase
    pub fn from_flags(
        loading: bool,
        refreshing: bool,
        has_error: bool,
        has_data: bool,
    ) -> Self {
        if refreshing {
            LoadPhase::Refreshing
        } else if loading {
            LoadPhase::Loading
        } else if has_error {
            LoadPhase::Failed
        } else if has_data {
            LoadPhase::Ready
        } else {
            LoadPhase::Idle
        }
    }

    pub fn is_busy(self) -> bool {
        matches!(self, LoadPhase::Loading | LoadPhase::Refreshing)
    }
}
