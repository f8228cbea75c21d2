use macroquad::prelude::*;

use crate::application::SimulationState;
use crate::domain::Grid;
use crate::ui::{panel_x, Button, FieldLayout, PANEL_WIDTH};

/// Draw every cell of the grid into the field area
pub fn draw_grid(grid: &Grid, layout: &FieldLayout) {
    let cell_size = layout.cell_size(grid.size());
    let border_color = Color::from_rgba(160, 160, 160, 255);
    let draw_borders = cell_size >= 4.0;

    for (x, y, cell) in grid.iter_cells() {
        let screen_x = layout.x + x as f32 * cell_size;
        let screen_y = layout.y + y as f32 * cell_size;
        let color = if cell.is_alive() { BLACK } else { WHITE };
        draw_rectangle(screen_x, screen_y, cell_size, cell_size, color);
        if draw_borders {
            draw_rectangle_lines(screen_x, screen_y, cell_size, cell_size, 1.0, border_color);
        }
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(240, 240, 240, 255),
    );
}

/// Draw the control panel with buttons, simulation info and the last error
pub fn draw_controls(
    state: &SimulationState,
    buttons: &[Button],
    mouse_pos: (f32, f32),
    status: Option<&str>,
) {
    draw_panel_background();

    buttons.iter().for_each(|btn| btn.draw(mouse_pos, state.is_running()));

    let px = panel_x() + 10.0;
    let top = 20.0 + buttons.len() as f32 * 50.0;
    let dark = Color::from_rgba(60, 60, 60, 255);
    let grid = state.grid();

    let labels = [
        format!("Rule: {}", state.rules()),
        format!("Edges: {:?}", state.rules().topology()),
        format!("Grid: {0}x{0}", grid.size()),
        format!("Alive: {}", grid.live_count()),
        format!("Generation: {}", state.generation()),
        format!("Period: {:.2}s", state.period()),
        format!("Step: {:.2}ms", state.last_step_ms()),
        format!("FPS: {:.0}", get_fps()),
    ];
    labels.iter().enumerate().for_each(|(i, text)| {
        draw_text(text, px, top + 20.0 + i as f32 * 18.0, 16.0, dark);
    });

    let (status_text, color) = match status {
        Some(message) => (message, RED),
        None if state.is_running() => ("Running", DARKGREEN),
        None => ("Paused", ORANGE),
    };
    draw_text(status_text, px, screen_height() - 20.0, 16.0, color);
}
