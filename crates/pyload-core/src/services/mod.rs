//! Core services.
//!
//! Services orchestrate between ports and domain logic. They never know
//! which concrete client sits behind a port.

mod config_editor;

pub use config_editor::{ApplyReport, ChangeKey, ConfigEditor};
