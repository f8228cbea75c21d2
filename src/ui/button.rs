use macroquad::prelude::*;

use crate::application::Action;

/// Button UI component bound to the command it triggers
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    action: Action,
    color: Color,
    hover_color: Color,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, action: Action) -> Self {
        Self {
            x,
            y,
            width,
            height,
            action,
            color: Color::from_rgba(160, 160, 160, 255),
            hover_color: Color::from_rgba(190, 190, 190, 255),
        }
    }

    pub fn action(&self) -> Action {
        self.action
    }

    /// Check if mouse is hovering over button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    /// Draw button with hover effect; the label depends on the run state
    pub fn draw(&self, mouse_pos: (f32, f32), running: bool) {
        let color = if self.is_hovered(mouse_pos) {
            self.hover_color
        } else {
            self.color
        };

        draw_rectangle(self.x, self.y, self.width, self.height, color);

        let text = self.action.label(running);
        let text_size = measure_text(text, None, 24, 1.0);
        draw_text(
            text,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            24.0,
            BLACK,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_bounds() {
        let button = Button::new(10.0, 20.0, 100.0, 40.0, Action::Step);
        assert!(button.is_hovered((10.0, 20.0)));
        assert!(button.is_hovered((110.0, 60.0)));
        assert!(!button.is_hovered((9.0, 30.0)));
        assert!(!button.is_hovered((50.0, 61.0)));
        assert_eq!(button.action(), Action::Step);
    }
}
