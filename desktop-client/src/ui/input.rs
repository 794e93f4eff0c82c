use common::games::puzzle2048::{Direction, GameInput};
use eframe::egui;

/// Arrow keys and WASD move; Enter and R restart. Everything else is ignored.
pub fn input_for_key(key: egui::Key) -> Option<GameInput> {
    let direction = match key {
        egui::Key::ArrowUp | egui::Key::W => Direction::Up,
        egui::Key::ArrowDown | egui::Key::S => Direction::Down,
        egui::Key::ArrowLeft | egui::Key::A => Direction::Left,
        egui::Key::ArrowRight | egui::Key::D => Direction::Right,
        egui::Key::Enter | egui::Key::R => return Some(GameInput::Restart),
        _ => return None,
    };
    Some(GameInput::Move(direction))
}

/// Every recognised key press of this frame in arrival order, key repeats
/// included. Bursts are collapsed by the game task, not here.
pub fn collect_inputs(ctx: &egui::Context) -> Vec<GameInput> {
    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } if modifiers.is_none() => input_for_key(*key),
                _ => None,
            })
            .collect()
    })
}
