/// Commands a control widget can trigger.
/// Widgets carry one of these instead of a callback; `SimulationState::apply` runs it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    ToggleRun,
    Step,
    Slower,
    Faster,
    Load,
    Save,
    Reset,
    Randomize,
}

impl Action {
    /// Get all available actions, in control panel order
    pub fn all() -> [Action; 8] {
        [
            Action::ToggleRun,
            Action::Step,
            Action::Slower,
            Action::Faster,
            Action::Load,
            Action::Save,
            Action::Reset,
            Action::Randomize,
        ]
    }

    /// Button label; the run toggle reflects the current state
    pub fn label(self, running: bool) -> &'static str {
        match self {
            Action::ToggleRun if running => "stop",
            Action::ToggleRun => "start",
            Action::Step => "step",
            Action::Slower => "slower",
            Action::Faster => "faster",
            Action::Load => "load",
            Action::Save => "save",
            Action::Reset => "reset",
            Action::Randomize => "random",
        }
    }
}
