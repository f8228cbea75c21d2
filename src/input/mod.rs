use macroquad::prelude::*;

use crate::application::{Action, SimulationState};
use crate::domain::Topology;
use crate::error::Result;
use crate::ui::{Button, FieldLayout};

/// Toggle the cell under the pointer on left click
pub fn handle_cell_edit(
    state: &mut SimulationState,
    layout: &FieldLayout,
    mouse_pos: (f32, f32),
) -> Result<()> {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return Ok(());
    }
    if let Some((x, y)) = layout.cell_at(mouse_pos, state.grid().size()) {
        state.edit_cell(x, y)?;
    }
    Ok(())
}

/// Run the action of every button clicked this frame
pub fn process_button_clicks(
    state: &mut SimulationState,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) -> Result<()> {
    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .try_for_each(|btn| state.apply(btn.action()))
}

/// Keyboard shortcuts for the panel actions, rule presets and topology
pub fn process_keyboard_input(state: &mut SimulationState) -> Result<()> {
    let actions: [(KeyCode, Action); 6] = [
        (KeyCode::Space, Action::ToggleRun),
        (KeyCode::S, Action::Step),
        (KeyCode::Up, Action::Faster),
        (KeyCode::Down, Action::Slower),
        (KeyCode::C, Action::Reset),
        (KeyCode::R, Action::Randomize),
    ];
    actions
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .try_for_each(|(_, action)| state.apply(*action))?;

    let presets = [KeyCode::Key1, KeyCode::Key2, KeyCode::Key3, KeyCode::Key4];
    if let Some(index) = presets.iter().position(|key| is_key_pressed(*key)) {
        state.apply_preset(index)?;
    }

    if is_key_pressed(KeyCode::T) {
        let topology = match state.rules().topology() {
            Topology::Toroidal => Topology::Bounded,
            Topology::Bounded => Topology::Toroidal,
        };
        state.set_topology(topology);
    }
    Ok(())
}
