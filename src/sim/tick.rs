//! Per-frame simulation tick
//!
//! Advances the world by `dt` seconds and queues the events the round
//! produced. Presentation never happens here; the event processor turns the
//! queued events into requests.

use glam::Vec3;
use rand::Rng;

use super::events::{EventQueue, GameEvent};
use super::shark::update_shark;
use super::state::{GamePhase, WorldState};
use crate::consts::SIM_DT;
use crate::{Tuning, normalize_angle, rotate_about_y};

/// Remaining time below this counts as expired. Summing a 1/60 s step in
/// f32 drifts a fraction of a millisecond over a round.
const TIMER_SNAP: f32 = SIM_DT * 0.5;

/// Decoded input intents for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Swim toward the surface (otherwise sink)
    pub swim_up: bool,
    /// Crank the flashlight dynamo
    pub crank: bool,
    /// Pointer movement since the last tick
    pub pan: f32,
}

/// Advance the world by one tick
pub fn tick<R: Rng + ?Sized>(
    world: &mut WorldState,
    input: &TickInput,
    dt: f32,
    tuning: &Tuning,
    rng: &mut R,
    events: &mut EventQueue,
) {
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    let pan = if input.pan.is_finite() { input.pan } else { 0.0 };

    world.swim_up = input.swim_up;
    world.crank = input.crank;
    world.pan_accumulator += pan;

    if world.phase != GamePhase::Playing {
        world.pan_accumulator = 0.0;
        return;
    }

    let mut death_queued = false;

    // Timer. The pickup can only come while the shark is waiting.
    world.time_left = (world.time_left - dt).clamp(0.0, tuning.pickup_time);
    if world.time_left < TIMER_SNAP {
        world.time_left = 0.0;
    }
    if world.time_left <= 0.0 && world.shark.is_dormant() {
        events.push(GameEvent::Victory);
    }

    // Vertical motion
    let direction = if world.swim_up { 1.0 } else { -1.0 };
    world.player_depth = (world.player_depth + direction * tuning.swim_speed * dt)
        .clamp(tuning.swim_min, tuning.swim_max);

    // Shark (reads the look target from the end of the previous tick)
    if update_shark(world, tuning, rng, events, dt) {
        events.push(GameEvent::Death);
        death_queued = true;
    }

    // Look direction
    world.look_yaw = normalize_angle(world.look_yaw + world.pan_accumulator * tuning.pan_scale);
    let ahead = Vec3::new(0.0, world.player_depth - tuning.look_drop, tuning.look_distance);
    world.look_target = rotate_about_y(ahead, world.look_yaw);
    world.pan_accumulator = 0.0;

    // Charge
    if world.flashlight_on {
        let had_charge = world.charge > 0.0;
        world.charge = (world.charge - tuning.charge_drain_rate() * dt).clamp(0.0, 100.0);
        if had_charge && world.charge <= 0.0 {
            events.push(GameEvent::FlashLightOff);
        }
    } else if world.crank {
        world.charge = (world.charge + tuning.charge_refill_rate() * dt).clamp(0.0, 100.0);
    }

    // Air
    let underwater = world.player_depth < 0.0;
    if underwater {
        let had_air = world.air > 0.0;
        world.air = (world.air - tuning.air_drain_rate(world.crank) * dt).clamp(0.0, 100.0);
        if had_air && world.air <= 0.0 && !death_queued {
            events.push(GameEvent::Death);
        }
    } else {
        world.air = (world.air + tuning.air_refill_rate() * dt).clamp(0.0, 100.0);
    }

    if underwater != world.underwater {
        world.underwater = underwater;
        events.push(if underwater {
            GameEvent::Submerged
        } else {
            GameEvent::Surfaced
        });
    }
}
