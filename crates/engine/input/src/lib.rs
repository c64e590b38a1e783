//! Gameplay input reader
//!
//! This crate turns raw device input into the semantic events gameplay
//! systems consume: move, sprint-move, jump, scan start/stop and pause
//! enter/exit. It also owns the input mode, which decides whether the
//! gameplay or the UI action map is live.
//!
//! # Architecture
//!
//! ```text
//! DeviceBackend -> DeviceState -> InputControls (InputBindings) -> InputReader -> EventBus
//! ```
//!
//! - [`InputBindings`] is the binding object contract: action maps, sampled
//!   values and queued edges. [`InputControls`] implements it over
//!   [`devices::DeviceState`].
//! - [`InputReader`] samples continuous actions on [`tick`](InputReader::tick),
//!   handles discrete edges on [`pump`](InputReader::pump) and publishes
//!   [`InputEvent`]s.
//! - Consumers depend on narrow capabilities ([`MoveSource`],
//!   [`JumpSource`], [`ScanSource`], [`PauseSource`], [`ModeSwitch`]).
//!
//! Everything runs on the simulation thread; the reader is not `Send`.
//!
//! # Example
//!
//! ```rust,ignore
//! use input::{InputConfig, InputControls, InputReader, ModeSwitch, MoveSource};
//!
//! let config = InputConfig::load("input.toml")?;
//! let mut reader = InputReader::new(InputControls::from_config(&config));
//! reader.change_mode(config.initial_mode);
//! reader.on_move(|direction| player.walk(direction));
//!
//! // Each fixed step:
//! backend.poll(&mut devices);
//! reader.update(&devices);
//! reader.pump();
//! reader.tick();
//! ```

pub mod action;
pub mod bindings;
pub mod capabilities;
pub mod config;
pub mod controls;
pub mod events;
pub mod mode;
pub mod reader;

pub use action::{Action, ActionEdge, ActionMap, ActionPhase};
pub use bindings::InputBindings;
pub use capabilities::{EventSource, JumpSource, ModeSwitch, MoveSource, PauseSource, ScanSource};
pub use config::{BindingsConfig, ButtonBindings, InputConfig, MoveBindings};
pub use controls::InputControls;
pub use events::{EventBus, InputEvent, InputEventKind, SubscriptionId};
pub use mode::{InputControlMode, ModeWatch};
pub use reader::InputReader;

use std::path::PathBuf;

/// Error types for the input crate
///
/// Only configuration handling can fail; the reader itself never errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read input config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse input config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid input config: {0}")]
    InvalidConfig(String),

    #[error("Unknown input mode: {0}")]
    UnknownMode(String),
}

/// Result type for input operations
pub type Result<T> = std::result::Result<T, Error>;
