//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of presentation:
//! - Time only enters through `dt`
//! - Seeded RNG only
//! - Side effects leave as declarative requests
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod events;
pub mod input;
pub mod process;
pub mod session;
pub mod shark;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use events::{EventQueue, GameEvent};
pub use input::{Action, InputState};
pub use process::{
    AudioChannel, AudioTrack, Control, Effect, LoadProgress, Request, Screen, process_events,
};
pub use session::{Asset, Session};
pub use shark::{pursuit_step, update_shark};
pub use state::{GamePhase, Shark, SharkMode, Snapshot, WorldState};
pub use tick::{TickInput, tick};
