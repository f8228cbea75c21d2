use log::{error, info};
use macroquad::prelude::*;
use torus_life::{Settings, SimulationState, input, rendering, ui};

fn window_conf() -> Conf {
    Conf {
        window_title: "Cellular Automata".to_owned(),
        window_width: 950,
        window_height: 760,
        window_resizable: true,
        ..Default::default()
    }
}

/// Settings file from the first argument, defaults otherwise
fn initial_state() -> SimulationState {
    let Some(path) = std::env::args().nth(1) else {
        return SimulationState::new();
    };
    match Settings::load(&path).and_then(|settings| SimulationState::from_settings(&settings)) {
        Ok(state) => {
            info!("Using settings from {path}");
            state
        }
        Err(err) => {
            error!("Ignoring settings file {path}: {err}");
            SimulationState::new()
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut state = initial_state();
    let mut status: Option<String> = None;

    loop {
        let mouse_pos = mouse_position();
        let layout = ui::field_layout();
        let buttons = ui::create_buttons();

        let outcome = input::process_button_clicks(&mut state, &buttons, mouse_pos)
            .and_then(|()| input::handle_cell_edit(&mut state, &layout, mouse_pos))
            .and_then(|()| input::process_keyboard_input(&mut state));
        match outcome {
            Ok(()) if is_mouse_button_pressed(MouseButton::Left) => status = None,
            Ok(()) => {}
            Err(err) => {
                error!("{err}");
                status = Some(err.to_string());
            }
        }

        state.tick(get_frame_time());

        clear_background(WHITE);
        rendering::draw_grid(state.grid(), &layout);
        rendering::draw_controls(&state, &buttons, mouse_pos, status.as_deref());

        next_frame().await;
    }
}
