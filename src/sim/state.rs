//! World state and core simulation types
//!
//! The whole round lives in [`WorldState`]. It is created fresh at startup and
//! replaced wholesale on restart, never patched field by field.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::Tuning;
use crate::ring_point;

/// Current game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for assets
    Loading,
    /// Assets loaded, start screen shown
    Ready,
    /// Intro screen, waiting for start
    Intro,
    /// Active gameplay
    Playing,
    /// Player drowned or was eaten
    Dead,
    /// Player survived until pickup
    Victory,
}

/// Shark behaviour, derived from dormancy and flee flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SharkMode {
    /// Waiting out its swim delay; ignored for collisions
    Dormant,
    /// Swimming at the player
    Pursuing,
    /// Spooked, swimming back out to the ring
    Fleeing,
}

/// The shark
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shark {
    pub position: Vec3,
    /// Where the shark is heading (player offset while pursuing, ring point while fleeing)
    pub target: Vec3,
    /// Closing speed multiplier
    pub speed: f32,
    /// Seconds until the shark starts swimming
    pub swim_delay: f32,
    /// Fleeing after being spooked
    pub resetting: bool,
}

impl Shark {
    /// Spawn a dormant shark at a random point on the ring
    pub fn spawn<R: Rng + ?Sized>(tuning: &Tuning, rng: &mut R) -> Self {
        let position = spawn_point(tuning, rng);
        Self {
            position,
            target: position,
            speed: tuning.shark_speed,
            swim_delay: random_swim_delay(tuning, rng),
            resetting: false,
        }
    }

    /// Put the shark back on the ring and make it wait again
    pub fn respawn<R: Rng + ?Sized>(&mut self, tuning: &Tuning, rng: &mut R) {
        self.position = spawn_point(tuning, rng);
        self.target = self.position;
        self.swim_delay = random_swim_delay(tuning, rng);
        self.resetting = false;
    }

    pub fn mode(&self) -> SharkMode {
        if self.swim_delay > 0.0 {
            SharkMode::Dormant
        } else if self.resetting {
            SharkMode::Fleeing
        } else {
            SharkMode::Pursuing
        }
    }

    #[inline]
    pub fn is_dormant(&self) -> bool {
        self.swim_delay > 0.0
    }
}

/// Random point on the spawn ring
pub fn spawn_point<R: Rng + ?Sized>(tuning: &Tuning, rng: &mut R) -> Vec3 {
    let azimuth = rng.random::<f32>() * std::f32::consts::TAU;
    ring_point(tuning.spawn_radius, azimuth, tuning.spawn_depth)
}

/// Random dormancy in [0.5, 1.5] x the average delay
pub fn random_swim_delay<R: Rng + ?Sized>(tuning: &Tuning, rng: &mut R) -> f32 {
    tuning.avg_swim_delay * (0.5 + rng.random::<f32>())
}

/// Complete world state for one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldState {
    /// Current phase
    pub phase: GamePhase,
    /// Camera height; negative is underwater
    pub player_depth: f32,
    /// Accumulated horizontal look angle (radians)
    pub look_yaw: f32,
    /// Point the player (and flashlight) is looking at
    pub look_target: Vec3,
    pub shark: Shark,
    /// Breath, 0-100
    pub air: f32,
    /// Flashlight battery, 0-100
    pub charge: f32,
    /// Seconds until pickup
    pub time_left: f32,
    pub flashlight_on: bool,
    /// Underwater as of the end of the last tick (for edge detection)
    pub underwater: bool,
    /// Cranking the flashlight this tick
    pub crank: bool,
    /// Swimming up this tick
    pub swim_up: bool,
    /// Pointer movement since the last tick
    pub pan_accumulator: f32,
}

impl WorldState {
    /// Create a fresh round
    pub fn new<R: Rng + ?Sized>(tuning: &Tuning, rng: &mut R) -> Self {
        let player_depth = tuning.start_depth;
        Self {
            phase: GamePhase::Loading,
            player_depth,
            look_yaw: 0.0,
            look_target: Vec3::new(0.0, player_depth - tuning.look_drop, tuning.look_distance),
            shark: Shark::spawn(tuning, rng),
            air: 100.0,
            charge: 100.0,
            time_left: tuning.pickup_time,
            flashlight_on: false,
            underwater: player_depth < 0.0,
            crank: false,
            swim_up: false,
            pan_accumulator: 0.0,
        }
    }

    /// Player eye position (the player only moves vertically)
    #[inline]
    pub fn player_position(&self) -> Vec3 {
        Vec3::new(0.0, self.player_depth, 0.0)
    }

    /// Direction the flashlight points
    #[inline]
    pub fn look_direction(&self) -> Vec3 {
        self.look_target - self.player_position()
    }

    /// Read-only view for the render layer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            player_depth: self.player_depth,
            player_position: self.player_position(),
            look_target: self.look_target,
            shark_position: self.shark.position,
            shark_look_target: self.shark.target,
            shark_mode: self.shark.mode(),
            air: self.air,
            charge: self.charge,
            time_left: self.time_left,
            flashlight_on: self.flashlight_on,
            underwater: self.underwater,
        }
    }
}

/// What the presentation layer reads once per tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub player_depth: f32,
    pub player_position: Vec3,
    pub look_target: Vec3,
    pub shark_position: Vec3,
    pub shark_look_target: Vec3,
    pub shark_mode: SharkMode,
    pub air: f32,
    pub charge: f32,
    pub time_left: f32,
    pub flashlight_on: bool,
    pub underwater: bool,
}
