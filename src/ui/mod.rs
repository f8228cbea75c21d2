mod button;

pub use button::Button;

use macroquad::prelude::{screen_height, screen_width};

use crate::application::Action;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const BUTTON_SPACING: f32 = 10.0;
pub const PANEL_MARGIN: f32 = 20.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Square screen region the field is drawn into
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldLayout {
    pub x: f32,
    pub y: f32,
    pub side: f32,
}

impl FieldLayout {
    /// Largest square that fits left of the panel, centred in that area
    pub fn fit(area_width: f32, area_height: f32) -> Self {
        let side = area_width.min(area_height).max(0.0);
        Self {
            x: (area_width - side) / 2.0,
            y: (area_height - side) / 2.0,
            side,
        }
    }

    pub fn cell_size(&self, grid_size: usize) -> f32 {
        self.side / grid_size.max(1) as f32
    }

    /// Map a pointer position to (column, row), if it lies on the field
    pub fn cell_at(&self, pos: (f32, f32), grid_size: usize) -> Option<(usize, usize)> {
        let (px, py) = (pos.0 - self.x, pos.1 - self.y);
        if grid_size == 0 || px < 0.0 || py < 0.0 || px >= self.side || py >= self.side {
            return None;
        }
        let cell = self.cell_size(grid_size);
        let col = ((px / cell) as usize).min(grid_size - 1);
        let row = ((py / cell) as usize).min(grid_size - 1);
        Some((col, row))
    }
}

/// Field layout for the current window size
pub fn field_layout() -> FieldLayout {
    FieldLayout::fit(screen_width() - PANEL_WIDTH, screen_height())
}

/// Create one button per action, stacked down the panel
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    Action::all()
        .into_iter()
        .enumerate()
        .map(|(i, action)| {
            let y = PANEL_MARGIN + i as f32 * (BUTTON_HEIGHT + BUTTON_SPACING);
            Button::new(px + 10.0, y, PANEL_WIDTH - 20.0, BUTTON_HEIGHT, action)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_is_square_and_centred() {
        let layout = FieldLayout::fit(800.0, 600.0);
        assert_eq!(layout.side, 600.0);
        assert_eq!(layout.x, 100.0);
        assert_eq!(layout.y, 0.0);
    }

    #[test]
    fn test_cell_at_maps_pointer() {
        let layout = FieldLayout { x: 100.0, y: 0.0, side: 300.0 };
        assert_eq!(layout.cell_at((100.0, 0.0), 30), Some((0, 0)));
        assert_eq!(layout.cell_at((125.0, 15.0), 30), Some((2, 1)));
        assert_eq!(layout.cell_at((399.9, 299.9), 30), Some((29, 29)));
    }

    #[test]
    fn test_cell_at_outside_field() {
        let layout = FieldLayout { x: 100.0, y: 0.0, side: 300.0 };
        assert_eq!(layout.cell_at((99.0, 10.0), 30), None);
        assert_eq!(layout.cell_at((150.0, 300.0), 30), None);
        assert_eq!(layout.cell_at((150.0, 10.0), 0), None);
    }
}
