use macroquad::prelude::*;

use crate::application::{FrameQueue, GridStore, Presenter, Simulation};
use crate::ui::Button;

/// Map a pointer position to the cell under it.
/// `None` when the pointer lies outside the `rows x cols` surface.
pub fn pointer_to_cell(
    pointer: (f32, f32),
    origin: (f32, f32),
    cell_size: f32,
    rows: usize,
    cols: usize,
) -> Option<(usize, usize)> {
    let gx = ((pointer.0 - origin.0) / cell_size).floor();
    let gy = ((pointer.1 - origin.1) / cell_size).floor();
    if !(gx >= 0.0 && gy >= 0.0) {
        return None;
    }
    let (x, y) = (gx as usize, gy as usize);
    (x < cols && y < rows).then_some((x, y))
}

/// Discrete user commands forwarded to the simulation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    Randomize,
    Clear,
    Step,
    ToggleRunning,
    Faster,
    Slower,
}

impl Command {
    pub fn apply<G: GridStore, P: Presenter>(self, sim: &mut Simulation<FrameQueue, G, P>) {
        match self {
            Command::Start => sim.start(),
            Command::Stop => sim.stop(),
            Command::Randomize => sim.randomize(),
            Command::Clear => sim.clear(),
            Command::Step => sim.step(),
            Command::ToggleRunning => sim.toggle_running(),
            Command::Faster => sim.scheduler_mut().adjust_rate(1.0),
            Command::Slower => sim.scheduler_mut().adjust_rate(-1.0),
        }
    }
}

const KEY_BINDINGS: [(KeyCode, Command); 6] = [
    (KeyCode::Space, Command::ToggleRunning),
    (KeyCode::N, Command::Step),
    (KeyCode::R, Command::Randomize),
    (KeyCode::C, Command::Clear),
    (KeyCode::Up, Command::Faster),
    (KeyCode::Down, Command::Slower),
];

/// Commands for keys pressed this frame
pub fn keyboard_commands() -> Vec<Command> {
    KEY_BINDINGS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|&(_, command)| command)
        .collect()
}

/// Command of the button clicked this frame, if any
pub fn clicked_command(buttons: &[Button], mouse_pos: (f32, f32)) -> Option<Command> {
    buttons
        .iter()
        .find(|btn| btn.is_clicked(mouse_pos))
        .map(Button::command)
}
