//! Simulation session
//!
//! A [`Session`] owns everything one game needs: the world, the event queue,
//! debounced input, tuning, the seeded RNG and asset-load progress. Each step
//! runs the tick and then the event processor, so the processor always sees a
//! consistent post-tick world. Sessions are independent; tests can run as
//! many side by side as they like.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::autopilot::Autopilot;
use super::events::{EventQueue, GameEvent};
use super::input::{Action, InputState};
use super::process::{LoadProgress, Request, process_events};
use super::state::{GamePhase, Snapshot, WorldState};
use super::tick::{TickInput, tick};
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::{LoadError, Tuning};

/// Assets the loader reports on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Asset {
    Shark,
    Fish,
}

pub struct Session {
    world: WorldState,
    events: EventQueue,
    input: InputState,
    tuning: Tuning,
    rng: Pcg32,
    assets: LoadProgress,
    accumulator: f32,
    tick_count: u64,
}

impl Session {
    /// Start a session in the loading phase
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let world = WorldState::new(&tuning, &mut rng);
        log::info!("session started with seed {}", seed);
        Self {
            world,
            events: EventQueue::new(),
            input: InputState::new(),
            tuning,
            rng,
            assets: LoadProgress::default(),
            accumulator: 0.0,
            tick_count: 0,
        }
    }

    pub fn world(&self) -> &WorldState {
        &self.world
    }

    pub fn snapshot(&self) -> Snapshot {
        self.world.snapshot()
    }

    pub fn phase(&self) -> GamePhase {
        self.world.phase
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Queue an event (menu buttons, host callbacks)
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Queue an event by tag; unknown tags are ignored
    pub fn push_tag(&mut self, tag: &str) -> bool {
        self.events.push_tag(tag)
    }

    /// Loader finished an asset
    pub fn asset_loaded(&mut self, asset: Asset) {
        self.events.push(match asset {
            Asset::Shark => GameEvent::SharkLoaded,
            Asset::Fish => GameEvent::FishLoaded,
        });
    }

    /// Loader gave up on an asset
    pub fn asset_failed(&mut self, error: &LoadError) {
        log::warn!("{}", error);
        self.events.push(GameEvent::LoadFailed {
            asset: error.asset().to_string(),
        });
    }

    pub fn press(&mut self, action: Action) {
        self.input.press(action, &mut self.events);
    }

    pub fn release(&mut self, action: Action) {
        self.input.release(action, &mut self.events);
    }

    /// Pointer movement since the last call
    pub fn pan(&mut self, dx: f32) {
        self.input.pan(dx);
    }

    /// Let the autopilot set this tick's input
    pub fn drive(&mut self, pilot: &mut Autopilot) {
        pilot.drive(&self.world, &self.tuning, &mut self.input, &mut self.events);
    }

    /// One tick with the debounced input, then event processing
    pub fn step(&mut self, dt: f32) -> Vec<Request> {
        let input = self.input.take_tick_input();
        self.step_with(&input, dt)
    }

    /// One tick with explicit intents, then event processing
    pub fn step_with(&mut self, input: &TickInput, dt: f32) -> Vec<Request> {
        tick(
            &mut self.world,
            input,
            dt,
            &self.tuning,
            &mut self.rng,
            &mut self.events,
        );
        self.tick_count += 1;
        process_events(
            &mut self.world,
            &mut self.events,
            &self.tuning,
            &mut self.rng,
            &mut self.assets,
        )
    }

    /// Feed a frame's wall-clock delta and run as many fixed steps as fit
    pub fn advance(&mut self, frame_dt: f32) -> Vec<Request> {
        let frame_dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += frame_dt;

        let mut requests = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            requests.extend(self.step(SIM_DT));
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            // Drop the backlog rather than spiral
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        requests
    }
}
