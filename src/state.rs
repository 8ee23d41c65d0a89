use std::path::PathBuf;

/// Shared router state. The roster itself is never held here; every
/// request fetches its own snapshot from the provider.
#[derive(Clone)]
pub struct AppState {
    pub roster_dir: PathBuf,
}

impl AppState {
    pub fn new(roster_dir: PathBuf) -> Self {
        Self { roster_dir }
    }
}
