use common::games::puzzle2048::{BOARD_SIZE, GameOutcome, GameSnapshot};
use eframe::egui;

const CELL_GAP: f32 = 4.0;

pub fn render_board(ui: &mut egui::Ui, snapshot: &GameSnapshot) {
    let available = ui.available_size();
    let max_board_size = available.x.min(available.y - 80.0).min(500.0);
    let cell_size = (max_board_size / BOARD_SIZE as f32 - CELL_GAP).max(30.0);
    let board_width = (cell_size + CELL_GAP) * BOARD_SIZE as f32;

    for row in snapshot.board.rows() {
        ui.horizontal(|ui| {
            ui.add_space(((available.x - board_width) / 2.0).max(0.0));
            for &value in row {
                render_tile(ui, value, cell_size);
            }
        });
    }
}

fn render_tile(ui: &mut egui::Ui, value: u32, cell_size: f32) {
    let (bg, text_color) = tile_colors(value);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(cell_size, cell_size), egui::Sense::hover());

    ui.painter().rect_filled(rect.shrink(CELL_GAP / 2.0), 6.0, bg);

    if value > 0 {
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            value.to_string(),
            egui::FontId::proportional(cell_size * font_scale(value)),
            text_color,
        );
    }
}

pub fn render_outcome(ui: &mut egui::Ui, outcome: Option<GameOutcome>, snapshot: &GameSnapshot) {
    match outcome {
        Some(GameOutcome::Won) => {
            ui.label(
                egui::RichText::new("You Win!")
                    .color(egui::Color32::GREEN)
                    .size(28.0),
            );
        }
        Some(GameOutcome::Lost) => {
            ui.label(
                egui::RichText::new("Game Over")
                    .color(egui::Color32::RED)
                    .size(28.0),
            );
        }
        None => {
            ui.label("Use Arrow Keys or WASD to move tiles");
            return;
        }
    }

    ui.label(format!("Highest Tile: {}", snapshot.highest_tile));
    ui.label(format!("Moves Made: {}", snapshot.moves_made));
    ui.label("Press Restart (Enter) to play again");
}

fn font_scale(value: u32) -> f32 {
    if value >= 1000 {
        0.25
    } else if value >= 100 {
        0.3
    } else {
        0.4
    }
}

/// Background per tile exponent: index 0 is the empty cell, index 1 holds 2,
/// index 11 holds 2048. Larger tiles share the last entry.
const TILE_BACKGROUNDS: [(u8, u8, u8); 13] = [
    (205, 193, 180),
    (238, 228, 218),
    (237, 224, 200),
    (242, 177, 121),
    (245, 149, 99),
    (246, 124, 95),
    (246, 94, 59),
    (237, 207, 114),
    (237, 204, 97),
    (237, 200, 80),
    (237, 197, 63),
    (237, 194, 46),
    (60, 58, 50),
];

fn tile_colors(value: u32) -> (egui::Color32, egui::Color32) {
    let exponent = if value == 0 { 0 } else { value.ilog2() as usize };
    let (r, g, b) = TILE_BACKGROUNDS[exponent.min(TILE_BACKGROUNDS.len() - 1)];

    let text = match value {
        0 => egui::Color32::TRANSPARENT,
        2 | 4 => egui::Color32::from_rgb(119, 110, 101),
        _ => egui::Color32::WHITE,
    };
    (egui::Color32::from_rgb(r, g, b), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_shrinks_for_wide_values() {
        assert!(font_scale(2) > font_scale(128));
        assert!(font_scale(128) > font_scale(2048));
    }

    #[test]
    fn test_small_tiles_use_dark_text() {
        let (_, two_text) = tile_colors(2);
        let (_, big_text) = tile_colors(8192);
        assert_ne!(two_text, big_text);
        assert_eq!(big_text, egui::Color32::WHITE);
    }

    #[test]
    fn test_backgrounds_follow_exponent() {
        assert_eq!(tile_colors(0).0, egui::Color32::from_rgb(205, 193, 180));
        assert_eq!(tile_colors(2048).0, egui::Color32::from_rgb(237, 194, 46));
        assert_eq!(tile_colors(4096).0, tile_colors(1 << 20).0);
        assert_eq!(tile_colors(0).1, egui::Color32::TRANSPARENT);
    }
}
