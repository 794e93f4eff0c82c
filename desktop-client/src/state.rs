use common::games::puzzle2048::{GameInput, GameOutcome, GameSnapshot};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    Input(GameInput),
    Shutdown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    /// Before the first Start.
    Idle,
    InGame {
        snapshot: GameSnapshot,
        outcome: Option<GameOutcome>,
    },
}

/// State published by the game task and read by the UI every frame.
#[derive(Clone)]
pub struct SharedState {
    state: Arc<Mutex<AppState>>,
    error: Arc<Mutex<Option<String>>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(AppState::Idle)),
            error: Arc::new(Mutex::new(None)),
            context: Arc::new(Mutex::new(None)),
        }
    }

    pub fn has_context(&self) -> bool {
        lock(&self.context).is_some()
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *lock(&self.context) = Some(ctx);
    }

    fn request_repaint(&self) {
        if let Some(ctx) = lock(&self.context).as_ref() {
            ctx.request_repaint();
        }
    }

    pub fn get_state(&self) -> AppState {
        lock(&self.state).clone()
    }

    /// Replaces the drawn board, keeping any outcome message already shown.
    pub fn update_snapshot(&self, snapshot: GameSnapshot) {
        {
            let mut state = lock(&self.state);
            let outcome = match &*state {
                AppState::InGame { outcome, .. } => *outcome,
                AppState::Idle => None,
            };
            *state = AppState::InGame { snapshot, outcome };
        }
        self.request_repaint();
    }

    pub fn set_outcome(&self, outcome: GameOutcome, snapshot: GameSnapshot) {
        *lock(&self.state) = AppState::InGame {
            snapshot,
            outcome: Some(outcome),
        };
        self.request_repaint();
    }

    pub fn clear_outcome(&self) {
        if let AppState::InGame { outcome, .. } = &mut *lock(&self.state) {
            *outcome = None;
        }
        self.request_repaint();
    }

    pub fn set_error(&self, error: String) {
        *lock(&self.error) = Some(error);
        self.request_repaint();
    }

    pub fn get_error(&self) -> Option<String> {
        lock(&self.error).clone()
    }

    pub fn clear_error(&self) {
        *lock(&self.error) = None;
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}
