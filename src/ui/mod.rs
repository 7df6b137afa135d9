mod button;

pub use button::Button;

use crate::input::Command;

pub const PANEL_WIDTH: f32 = 180.0;
pub const PANEL_PADDING: f32 = 10.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const BUTTON_GAP: f32 = 10.0;

/// Shortest window that fits the panel below the buttons
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

const BUTTONS: [(&str, Command); 5] = [
    ("Start", Command::Start),
    ("Stop", Command::Stop),
    ("Step", Command::Step),
    ("Randomize", Command::Randomize),
    ("Clear", Command::Clear),
];

/// Panel starts right after the grid surface
pub fn panel_x(surface_width: f32) -> f32 {
    surface_width + PANEL_PADDING
}

/// Create UI buttons stacked at the top of the side panel
pub fn create_buttons(surface_width: f32) -> Vec<Button> {
    let px = panel_x(surface_width);
    let width = PANEL_WIDTH - 2.0 * PANEL_PADDING;
    BUTTONS
        .iter()
        .enumerate()
        .map(|(i, &(label, command))| {
            let y = PANEL_PADDING + i as f32 * (BUTTON_HEIGHT + BUTTON_GAP);
            Button::new(px, y, width, BUTTON_HEIGHT, label, command)
        })
        .collect()
}

/// Y coordinate just below the last button
pub fn buttons_bottom() -> f32 {
    PANEL_PADDING + BUTTONS.len() as f32 * (BUTTON_HEIGHT + BUTTON_GAP)
}
