//! Idle/demo mode - the simulation plays itself
//!
//! Used behind attract screens and by the headless binary. Works purely
//! through [`InputState`], so it exercises the same debouncing as a player.

use super::events::EventQueue;
use super::input::{Action, InputState};
use super::state::{GamePhase, SharkMode, WorldState};
use crate::{Tuning, normalize_angle};

/// Head up when air drops below this
const SURFACE_BELOW_AIR: f32 = 35.0;
/// Dive again once air is back above this
const DIVE_ABOVE_AIR: f32 = 95.0;
/// Crank when charge drops below this
const CRANK_BELOW_CHARGE: f32 = 60.0;
/// Cranking underwater burns air, so only do it with this much in reserve
const CRANK_MIN_AIR: f32 = 50.0;
/// Light up once a pursuing shark is within this multiple of the spook radius
const ALERT_FACTOR: f32 = 1.2;

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    surfacing: bool,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose this tick's input
    pub fn drive(
        &mut self,
        world: &WorldState,
        tuning: &Tuning,
        input: &mut InputState,
        events: &mut EventQueue,
    ) {
        if world.phase != GamePhase::Playing {
            return;
        }

        if world.air < SURFACE_BELOW_AIR {
            self.surfacing = true;
        } else if world.air >= DIVE_ABOVE_AIR {
            self.surfacing = false;
        }
        input.set(Action::SwimUp, self.surfacing, events);

        // Face the shark whenever it is awake
        let mode = world.shark.mode();
        if mode != SharkMode::Dormant && tuning.pan_scale.abs() > f32::EPSILON {
            let shark = world.shark.position;
            let desired_yaw = shark.x.atan2(shark.z);
            let delta = normalize_angle(desired_yaw - world.look_yaw);
            input.pan(delta / tuning.pan_scale);
        }

        let threatened = mode == SharkMode::Pursuing
            && world.shark.position.length() < tuning.spook_radius * ALERT_FACTOR;
        let light = threatened && world.charge > 0.0;
        input.set(Action::Flashlight, light, events);

        let crank = !light
            && world.charge < CRANK_BELOW_CHARGE
            && (!world.underwater || world.air > CRANK_MIN_AIR);
        input.set(Action::Crank, crank, events);
    }
}
