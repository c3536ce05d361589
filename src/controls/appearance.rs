//! Light/dark appearance facade.
//!
//! One boolean is pushed to three unrelated places: the OS appearance
//! preference, Terminal's colors and the editor's theme. The steps run in
//! that order and do not depend on each other.

use std::sync::Arc;

use log::{debug, warn};

use super::editor::EditorSettings;
use super::script::{
    parse_dark_mode, system_appearance_script, terminal_colors_script, ScriptRunner,
    TerminalStyle, QUERY_DARK_MODE_SCRIPT,
};
use crate::error::ControlError;
use crate::model::AppearanceMode;

/// Outcome of each appearance step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub system: Result<(), ControlError>,
    pub terminal: Result<(), ControlError>,
    pub editor: Result<(), ControlError>,
}

impl SyncReport {
    /// True when every step succeeded.
    pub fn is_complete(&self) -> bool {
        self.system.is_ok() && self.terminal.is_ok() && self.editor.is_ok()
    }
}

/// Appearance control. Cheap to clone; clones share the script runner so a
/// copy can move into a worker thread.
#[derive(Clone)]
pub struct AppearanceController {
    runner: Arc<dyn ScriptRunner>,
    editor: EditorSettings,
    terminal: TerminalStyle,
}

impl AppearanceController {
    pub fn new(
        runner: Arc<dyn ScriptRunner>,
        editor: EditorSettings,
        terminal: TerminalStyle,
    ) -> Self {
        Self {
            runner,
            editor,
            terminal,
        }
    }

    /// Ask the OS whether dark mode is on.
    pub fn current_mode(&self) -> Option<AppearanceMode> {
        match self.runner.run(QUERY_DARK_MODE_SCRIPT) {
            Ok(output) => {
                let mode = parse_dark_mode(&output);
                if mode.is_none() {
                    debug!("Unexpected dark mode query output: {:?}", output);
                }
                mode
            }
            Err(err) => {
                warn!("Dark mode query failed: {}", err);
                None
            }
        }
    }

    /// Apply `mode` to the OS, Terminal and the editor, in that order.
    ///
    /// Blocks until every external process exits; call it off the main
    /// thread.
    pub fn set_mode(&self, mode: AppearanceMode) -> SyncReport {
        let system = self
            .runner
            .run(&system_appearance_script(mode))
            .map(|_| ());
        log_step("system appearance", &system);

        let terminal = self
            .runner
            .run(&terminal_colors_script(mode, &self.terminal))
            .map(|_| ());
        log_step("Terminal colors", &terminal);

        let editor = self.editor.apply(mode);
        log_step("editor theme", &editor);

        SyncReport {
            system,
            terminal,
            editor,
        }
    }
}

fn log_step(step: &str, outcome: &Result<(), ControlError>) {
    match outcome {
        Ok(()) => debug!("Applied {}", step),
        Err(err) => warn!("Failed to apply {}: {}", step, err),
    }
}
