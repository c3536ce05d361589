#![allow(unexpected_cfgs)] // Silence cfg warnings inside objc2 macros

#[cfg(target_os = "macos")]
mod macos_main;

use log::info;

use desktop_control::config::Settings;
use desktop_control::events::init_event_bus;
use desktop_control::logging;

fn main() {
    let settings = Settings::from_env();

    // Keep the handle alive for the whole process; dropping it flushes.
    let _logger = match logging::init(&settings.log_spec) {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Failed to initialise logging: {err}");
            None
        }
    };

    info!("Starting desktop-control {}", env!("CARGO_PKG_VERSION"));

    // Initialize the event bus before any platform code runs
    init_event_bus();

    #[cfg(target_os = "macos")]
    macos_main::run(settings);

    #[cfg(not(target_os = "macos"))]
    {
        let _ = settings;
        log::error!("desktop-control only runs on macOS");
        std::process::exit(1);
    }
}
