//! Recording fakes for the control interfaces.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use desktop_control::controls::{BrightnessInterface, OutputDevice, ScriptRunner};
use desktop_control::handlers::PanelSurface;
use desktop_control::{ControlError, PanelState};

/// Shared, ordered record of calls made across several fakes.
pub type CallLog = Rc<RefCell<Vec<String>>>;

pub fn call_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

// === Brightness ===

pub struct FakeDisplay {
    pub name: &'static str,
    pub reading: Option<f32>,
    pub accepts_writes: bool,
    pub log: CallLog,
}

impl FakeDisplay {
    pub fn new(
        name: &'static str,
        reading: Option<f32>,
        accepts_writes: bool,
        log: &CallLog,
    ) -> Self {
        Self {
            name,
            reading,
            accepts_writes,
            log: Rc::clone(log),
        }
    }
}

impl BrightnessInterface for FakeDisplay {
    fn name(&self) -> &'static str {
        self.name
    }

    fn read(&self) -> Result<f32, ControlError> {
        self.log.borrow_mut().push(format!("{}.read", self.name));
        self.reading.ok_or(ControlError::Unavailable {
            interface: self.name,
        })
    }

    fn write(&self, value: f32) -> Result<(), ControlError> {
        self.log
            .borrow_mut()
            .push(format!("{}.write({:.2})", self.name, value));
        if self.accepts_writes {
            Ok(())
        } else {
            Err(ControlError::Status {
                interface: self.name,
                code: -1,
            })
        }
    }
}

// === Audio ===

/// Output device with observable state.
pub struct FakeOutput {
    pub volume: Rc<Cell<Option<f32>>>,
    pub muted: Rc<Cell<Option<bool>>>,
    pub log: CallLog,
}

impl FakeOutput {
    pub fn new(volume: Option<f32>, muted: Option<bool>, log: &CallLog) -> Self {
        Self {
            volume: Rc::new(Cell::new(volume)),
            muted: Rc::new(Cell::new(muted)),
            log: Rc::clone(log),
        }
    }
}

impl OutputDevice for FakeOutput {
    fn volume(&self) -> Result<f32, ControlError> {
        self.volume.get().ok_or(ControlError::Status {
            interface: "fake",
            code: -1,
        })
    }

    fn set_volume(&self, value: f32) -> Result<(), ControlError> {
        self.log.borrow_mut().push(format!("set_volume({:.2})", value));
        self.volume.set(Some(value));
        Ok(())
    }

    fn is_muted(&self) -> Result<bool, ControlError> {
        self.muted.get().ok_or(ControlError::Status {
            interface: "fake",
            code: -1,
        })
    }

    fn set_muted(&self, muted: bool) -> Result<(), ControlError> {
        self.log.borrow_mut().push(format!("set_muted({})", muted));
        self.muted.set(Some(muted));
        Ok(())
    }
}

// === Scripts ===

/// Script runner returning canned answers in order, recording every script.
#[derive(Default)]
pub struct FakeScripts {
    pub scripts: Mutex<Vec<String>>,
    pub answers: Mutex<VecDeque<Result<String, ControlError>>>,
}

impl FakeScripts {
    /// Every script succeeds with empty output.
    pub fn silent() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn answering<I>(answers: I) -> Arc<Self>
    where
        I: IntoIterator<Item = Result<String, ControlError>>,
    {
        Arc::new(Self {
            scripts: Mutex::new(Vec::new()),
            answers: Mutex::new(answers.into_iter().collect()),
        })
    }

    pub fn scripts(&self) -> Vec<String> {
        self.scripts.lock().unwrap().clone()
    }
}

impl ScriptRunner for FakeScripts {
    fn run(&self, script: &str) -> Result<String, ControlError> {
        self.scripts.lock().unwrap().push(script.to_string());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(String::new()))
    }
}

// === Panel ===

/// Panel surface recording what the dispatcher asked of it.
#[derive(Default)]
pub struct FakePanel {
    pub visible: bool,
    pub shown: usize,
    pub hidden: usize,
    pub terminated: bool,
    pub last_rendered: Option<PanelState>,
}

impl PanelSurface for FakePanel {
    fn is_visible(&self) -> bool {
        self.visible
    }

    fn show(&mut self, state: &PanelState) {
        self.visible = true;
        self.shown += 1;
        self.last_rendered = Some(state.clone());
    }

    fn hide(&mut self) {
        self.visible = false;
        self.hidden += 1;
    }

    fn render(&mut self, state: &PanelState) {
        self.last_rendered = Some(state.clone());
    }

    fn terminate(&mut self) {
        self.terminated = true;
    }
}
