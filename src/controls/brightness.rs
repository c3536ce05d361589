//! Display brightness facade.
//!
//! Two OS interfaces can reach the main display: the IOKit display
//! parameters (older Intel machines, external panels) and the private
//! DisplayServices framework (Apple Silicon). Reads prefer IOKit, writes
//! prefer DisplayServices; the first interface that succeeds wins.

use log::debug;

use crate::error::ControlError;
use crate::model::BrightnessLevel;

/// One way of reaching the main display's brightness.
pub trait BrightnessInterface {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Current brightness as reported by the interface.
    fn read(&self) -> Result<f32, ControlError>;

    /// Send a brightness value in [0.0, 1.0].
    fn write(&self, value: f32) -> Result<(), ControlError>;
}

/// Brightness read/write with a fixed fallback order.
pub struct BrightnessController {
    iokit: Box<dyn BrightnessInterface>,
    display_services: Box<dyn BrightnessInterface>,
}

impl BrightnessController {
    pub fn new(
        iokit: Box<dyn BrightnessInterface>,
        display_services: Box<dyn BrightnessInterface>,
    ) -> Self {
        Self {
            iokit,
            display_services,
        }
    }

    /// Read the current brightness: IOKit, then DisplayServices.
    ///
    /// Returns `None` when neither interface answers.
    pub fn read(&self) -> Option<BrightnessLevel> {
        [&self.iokit, &self.display_services]
            .into_iter()
            .find_map(|interface| match interface.read() {
                Ok(value) => Some(BrightnessLevel::new(value)),
                Err(err) => {
                    debug!("Brightness read via {} failed: {}", interface.name(), err);
                    None
                }
            })
    }

    /// Write a brightness level: DisplayServices, then IOKit.
    ///
    /// Returns the name of the interface that accepted the value, or `None`
    /// if both failed.
    pub fn write(&self, level: BrightnessLevel) -> Option<&'static str> {
        let value = level.value();
        [&self.display_services, &self.iokit]
            .into_iter()
            .find_map(|interface| match interface.write(value) {
                Ok(()) => Some(interface.name()),
                Err(err) => {
                    debug!("Brightness write via {} failed: {}", interface.name(), err);
                    None
                }
            })
    }
}
