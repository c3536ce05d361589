//! Main-thread dispatch glue.

pub mod dispatcher;

pub use dispatcher::{dispatch_events, install_dispatcher};
