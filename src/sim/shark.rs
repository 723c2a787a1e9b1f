//! Shark AI
//!
//! Three states, derived from [`Shark`] fields:
//! - Dormant: `swim_delay > 0`, counting down. Waking emits `SharkNear`.
//! - Pursuing: closes on a point just below the player. Catching the player
//!   emits `Death`; a flashlight in the face within range makes it flee.
//! - Fleeing: swims to a ring point, then respawns dormant somewhere else.

use glam::Vec3;
use rand::Rng;

use super::events::{EventQueue, GameEvent};
use super::state::{SharkMode, WorldState};
use crate::{Tuning, angle_between};

/// Distances below this count as arrived in the pursuit step
pub const MIN_STEP_DISTANCE: f32 = 1e-3;

/// Move `position` toward `target`.
///
/// The lerp fraction is `ramp / distance * speed * dt`, which moves the shark
/// a fixed `ramp * speed` units per second regardless of distance. The
/// fraction is capped at 1 so the shark lands on the target instead of
/// overshooting, and a vanishing distance snaps straight to the target.
pub fn pursuit_step(position: Vec3, target: Vec3, speed: f32, ramp: f32, dt: f32) -> Vec3 {
    let distance = position.distance(target);
    if distance < MIN_STEP_DISTANCE {
        return target;
    }
    let fraction = (ramp / distance * speed * dt).clamp(0.0, 1.0);
    position.lerp(target, fraction)
}

/// Whether a lit flashlight is on the shark
pub fn in_flashlight(world: &WorldState, tuning: &Tuning) -> bool {
    if !world.flashlight_on || world.shark.position.length() >= tuning.spook_radius {
        return false;
    }
    let to_shark = world.shark.position - world.player_position();
    angle_between(world.look_direction(), to_shark) < tuning.flashlight_cone
}

/// Advance the shark by one tick. Returns true if it reached the player.
pub fn update_shark<R: Rng + ?Sized>(
    world: &mut WorldState,
    tuning: &Tuning,
    rng: &mut R,
    events: &mut EventQueue,
    dt: f32,
) -> bool {
    let mut caught = false;

    match world.shark.mode() {
        SharkMode::Dormant => {
            world.shark.swim_delay = (world.shark.swim_delay - dt).max(0.0);
            if !world.shark.is_dormant() {
                log::debug!("shark awake at {:?}", world.shark.position);
                events.push(GameEvent::SharkNear);
            }
        }

        SharkMode::Pursuing => {
            let mut target = world.player_position();
            target.y -= tuning.pursuit_offset;
            move_toward(world, tuning, target, dt);

            if world.shark.position.distance(target) < tuning.death_radius {
                caught = true;
            } else if in_flashlight(world, tuning) {
                let flee_target = super::state::spawn_point(tuning, rng);
                log::debug!("shark spooked, fleeing to {:?}", flee_target);
                world.shark.resetting = true;
                world.shark.target = flee_target;
            }
        }

        SharkMode::Fleeing => {
            let target = world.shark.target;
            move_toward(world, tuning, target, dt);

            if world.shark.position.distance(target) < tuning.flee_arrival_epsilon {
                world.shark.respawn(tuning, rng);
                log::debug!(
                    "shark respawned at {:?}, waiting {:.2}s",
                    world.shark.position,
                    world.shark.swim_delay
                );
            }
        }
    }

    caught
}

fn move_toward(world: &mut WorldState, tuning: &Tuning, target: Vec3, dt: f32) {
    let shark = &mut world.shark;
    shark.target = target;
    shark.position = pursuit_step(shark.position, target, shark.speed, tuning.shark_speed_ramp, dt);
    shark.position.y = shark.position.y.min(tuning.shark_ceiling);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::state::GamePhase;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn setup() -> (WorldState, Tuning, Pcg32) {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(2024);
        let mut world = WorldState::new(&tuning, &mut rng);
        world.phase = GamePhase::Playing;
        (world, tuning, rng)
    }

    #[test]
    fn test_pursuit_step_moves_constant_distance() {
        let from = Vec3::new(200.0, -13.0, 0.0);
        let to = Vec3::ZERO;
        let next = pursuit_step(from, to, 1.0, 30.0, 0.5);
        assert!((from.distance(next) - 15.0).abs() < 1e-3);
    }

    #[test]
    fn test_pursuit_step_never_overshoots() {
        let from = Vec3::new(0.5, 0.0, 0.0);
        let next = pursuit_step(from, Vec3::ZERO, 1.0, 30.0, 1.0);
        assert_eq!(next, Vec3::ZERO);

        // Zero distance is already arrived, not a division by zero
        let next = pursuit_step(Vec3::ONE, Vec3::ONE, 1.0, 30.0, 1.0);
        assert!(next.is_finite());
        assert_eq!(next, Vec3::ONE);
    }

    #[test]
    fn test_dormant_counts_down_then_wakes_once() {
        let (mut world, tuning, mut rng) = setup();
        let mut events = EventQueue::new();
        world.shark.swim_delay = 1.0;

        update_shark(&mut world, &tuning, &mut rng, &mut events, 0.5);
        assert!(events.is_empty());
        update_shark(&mut world, &tuning, &mut rng, &mut events, 0.5);
        assert_eq!(events.count(&GameEvent::SharkNear), 1);
        assert_eq!(world.shark.mode(), SharkMode::Pursuing);

        events.clear();
        update_shark(&mut world, &tuning, &mut rng, &mut events, 0.5);
        assert!(events.is_empty());
    }

    #[test]
    fn test_shark_stays_below_ceiling() {
        let (mut world, tuning, mut rng) = setup();
        let mut events = EventQueue::new();
        world.shark.swim_delay = 0.0;
        world.shark.position = Vec3::new(0.0, -9.5, 60.0);
        world.player_depth = 2.0;

        for _ in 0..100 {
            update_shark(&mut world, &tuning, &mut rng, &mut events, 0.1);
            assert!(world.shark.position.y <= tuning.shark_ceiling);
        }
    }

    #[test]
    fn test_catches_player_inside_death_radius() {
        let (mut world, tuning, mut rng) = setup();
        let mut events = EventQueue::new();
        world.shark.swim_delay = 0.0;
        world.player_depth = -5.0;
        world.shark.position = Vec3::new(0.0, -9.0, 10.0);

        assert!(update_shark(&mut world, &tuning, &mut rng, &mut events, 0.0));
        assert!(!world.shark.resetting);
    }

    #[test]
    fn test_fleeing_shark_never_catches() {
        let (mut world, tuning, mut rng) = setup();
        let mut events = EventQueue::new();
        world.shark.swim_delay = 0.0;
        world.shark.resetting = true;
        world.shark.target = Vec3::new(0.0, -13.0, 300.0);
        world.player_depth = -5.0;
        // Right under the player, well inside the death radius
        world.shark.position = Vec3::new(0.0, -9.0, 1.0);
        assert_eq!(world.shark.mode(), SharkMode::Fleeing);

        for _ in 0..5 {
            assert!(!update_shark(&mut world, &tuning, &mut rng, &mut events, SIM_DT));
        }
        assert!(events.is_empty());
        assert_eq!(world.shark.mode(), SharkMode::Fleeing);
    }

    #[test]
    fn test_flee_then_respawn_dormant() {
        let (mut world, tuning, mut rng) = setup();
        let mut events = EventQueue::new();
        world.shark.swim_delay = 0.0;
        world.shark.resetting = true;
        world.shark.position = Vec3::new(0.0, -13.0, 100.0);
        world.shark.target = Vec3::new(0.0, -13.0, 100.5);

        update_shark(&mut world, &tuning, &mut rng, &mut events, 0.1);
        assert_eq!(world.shark.mode(), SharkMode::Dormant);
        assert!(!world.shark.resetting);
        assert!(world.shark.swim_delay >= tuning.avg_swim_delay * 0.5);
    }

    #[test]
    fn test_dormant_shark_never_catches() {
        let (mut world, tuning, mut rng) = setup();
        let mut events = EventQueue::new();
        world.shark.swim_delay = 2.0;
        world.player_depth = -5.0;
        world.shark.position = Vec3::new(0.0, -9.0, 1.0);

        assert!(!update_shark(&mut world, &tuning, &mut rng, &mut events, 0.1));
    }
}
