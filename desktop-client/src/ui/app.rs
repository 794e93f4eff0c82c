use common::games::puzzle2048::GameInput;
use common::version::VERSION;
use eframe::egui;

use super::board_view::{render_board, render_outcome};
use super::input::collect_inputs;
use crate::command_sender::CommandSender;
use crate::state::{AppState, ClientCommand, SharedState};

pub struct Puzzle2048App {
    shared_state: SharedState,
    command_sender: CommandSender,
    shutdown_sent: bool,
}

impl Puzzle2048App {
    pub fn new(shared_state: SharedState, command_sender: CommandSender) -> Self {
        Self {
            shared_state,
            command_sender,
            shutdown_sent: false,
        }
    }

    fn send_input(&self, input: GameInput) {
        self.command_sender.send(ClientCommand::Input(input));
    }

    fn render_header(&self, ui: &mut egui::Ui, state: &AppState) {
        ui.horizontal(|ui| {
            ui.heading("2048");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let button_label = match state {
                    AppState::Idle => "Start",
                    AppState::InGame { .. } => "Restart",
                };
                if ui.button(button_label).clicked() {
                    self.send_input(GameInput::Restart);
                }
                if let AppState::InGame { snapshot, .. } = state {
                    ui.label(format!("Score: {}", snapshot.score));
                }
            });
        });
    }
}

impl eframe::App for Puzzle2048App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        if ctx.input(|i| i.viewport().close_requested()) && !self.shutdown_sent {
            self.command_sender.send(ClientCommand::Shutdown);
            self.shutdown_sent = true;
        }

        if let Some(error) = self.shared_state.get_error() {
            egui::Window::new("Error")
                .collapsible(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.shared_state.clear_error();
                    }
                });
        }

        for input in collect_inputs(ctx) {
            self.send_input(input);
        }

        let current_state = self.shared_state.get_state();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            self.render_header(ui, &current_state);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.label(
                egui::RichText::new(format!("v{}", VERSION))
                    .small()
                    .color(egui::Color32::GRAY),
            );
        });

        egui::CentralPanel::default().show(ctx, |ui| match current_state {
            AppState::Idle => {
                ui.centered_and_justified(|ui| {
                    ui.label("Press Start (Enter) to begin");
                });
            }
            AppState::InGame { snapshot, outcome } => {
                ui.vertical_centered(|ui| {
                    ui.label(format!("Target: {}", snapshot.target_value));
                    ui.add_space(10.0);
                    render_board(ui, &snapshot);
                    ui.add_space(10.0);
                    render_outcome(ui, outcome, &snapshot);
                });
            }
        });
    }
}
