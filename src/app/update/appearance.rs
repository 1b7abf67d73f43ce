use super::super::state::App;
use crate::config::ThemeMode;
use tracing::info;

impl App {
    pub(super) fn handle_toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        info!(
            night_mode = matches!(self.theme, ThemeMode::Night),
            "Toggled theme"
        );
    }
}
