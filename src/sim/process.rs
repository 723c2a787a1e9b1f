//! Event processor
//!
//! Drains the event queue once per tick, moves the game between phases and
//! describes what the presentation layer should do about it. Nothing here
//! touches screens or audio directly; it only returns [`Request`]s.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::events::{EventQueue, GameEvent};
use super::state::{GamePhase, WorldState};
use crate::Tuning;

/// Screens the presentation layer can show (one at a time)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Start,
    Intro,
    Game,
    Death,
    Victory,
    LoadError,
}

/// Audio outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioChannel {
    /// Looping ambience
    Background,
    /// One-shot cues
    Effect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioTrack {
    Waves,
    Underwater,
    Intro,
    Attack,
}

/// Controls the presentation layer can enable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Control {
    StartButton,
}

/// A presentation side effect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    ShowScreen(Screen),
    PlayAudio { channel: AudioChannel, track: AudioTrack },
    /// Show or hide the flashlight beam
    Flashlight(bool),
    /// Capture the pointer for look control
    AcquireInputLock,
    ReleaseInputLock,
    EnableControl(Control),
}

/// A side effect for the presentation layer, optionally delayed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub effect: Effect,
    /// Seconds to wait before applying (0 = now)
    pub delay: f32,
}

impl Request {
    pub fn now(effect: Effect) -> Self {
        Self { effect, delay: 0.0 }
    }

    pub fn after(delay: f32, effect: Effect) -> Self {
        Self { effect, delay }
    }
}

/// Which assets have reported in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadProgress {
    pub shark: bool,
    pub fish: bool,
}

impl LoadProgress {
    pub fn complete(&self) -> bool {
        self.shark && self.fish
    }
}

/// Apply every queued event in order and return the resulting requests
pub fn process_events<R: Rng + ?Sized>(
    world: &mut WorldState,
    events: &mut EventQueue,
    tuning: &Tuning,
    rng: &mut R,
    assets: &mut LoadProgress,
) -> Vec<Request> {
    let mut requests = Vec::new();
    for event in events.drain() {
        apply_event(world, &event, tuning, rng, assets, &mut requests);
    }
    requests
}

fn apply_event<R: Rng + ?Sized>(
    world: &mut WorldState,
    event: &GameEvent,
    tuning: &Tuning,
    rng: &mut R,
    assets: &mut LoadProgress,
    requests: &mut Vec<Request>,
) {
    log::debug!("event {} in {:?}", event.tag(), world.phase);

    match event {
        GameEvent::SharkLoaded | GameEvent::FishLoaded => {
            if matches!(event, GameEvent::SharkLoaded) {
                assets.shark = true;
            } else {
                assets.fish = true;
            }
            if assets.complete() && world.phase == GamePhase::Loading {
                set_phase(world, GamePhase::Ready);
                requests.push(Request::now(Effect::ShowScreen(Screen::Start)));
            }
        }

        GameEvent::LoadFailed { asset } => {
            log::error!("failed to load {}", asset);
            requests.push(Request::now(Effect::ShowScreen(Screen::LoadError)));
        }

        GameEvent::ShowIntro => {
            if expect_phase(world, event, &[GamePhase::Ready]) {
                set_phase(world, GamePhase::Intro);
                requests.push(Request::now(Effect::ShowScreen(Screen::Intro)));
                requests.push(Request::after(
                    tuning.intro_delay,
                    Effect::EnableControl(Control::StartButton),
                ));
                requests.push(Request::now(Effect::PlayAudio {
                    channel: AudioChannel::Effect,
                    track: AudioTrack::Intro,
                }));
            }
        }

        GameEvent::GameStart => {
            if expect_phase(world, event, &[GamePhase::Intro]) {
                set_phase(world, GamePhase::Playing);
                requests.push(Request::now(Effect::ShowScreen(Screen::Game)));
                requests.push(Request::now(Effect::AcquireInputLock));
            }
        }

        GameEvent::Death => {
            if expect_phase(world, event, &[GamePhase::Playing]) {
                set_phase(world, GamePhase::Dead);
                requests.push(Request::now(Effect::ShowScreen(Screen::Death)));
                requests.push(Request::now(Effect::ReleaseInputLock));
            }
        }

        GameEvent::Victory => {
            if expect_phase(world, event, &[GamePhase::Playing]) {
                set_phase(world, GamePhase::Victory);
                requests.push(Request::now(Effect::ShowScreen(Screen::Victory)));
                requests.push(Request::now(Effect::ReleaseInputLock));
            }
        }

        GameEvent::Restart => {
            if expect_phase(world, event, &[GamePhase::Dead, GamePhase::Victory]) {
                *world = WorldState {
                    phase: GamePhase::Intro,
                    ..WorldState::new(tuning, rng)
                };
                log::info!("round reset, phase -> Intro");
                requests.push(Request::now(Effect::ShowScreen(Screen::Intro)));
                requests.push(Request::now(Effect::PlayAudio {
                    channel: AudioChannel::Background,
                    track: AudioTrack::Waves,
                }));
            }
        }

        GameEvent::FlashLightOn => {
            if world.charge > 0.0 {
                world.flashlight_on = true;
                requests.push(Request::now(Effect::Flashlight(true)));
            }
        }

        GameEvent::FlashLightOff => {
            world.flashlight_on = false;
            requests.push(Request::now(Effect::Flashlight(false)));
        }

        GameEvent::Submerged | GameEvent::Surfaced => {
            let track = if matches!(event, GameEvent::Submerged) {
                AudioTrack::Underwater
            } else {
                AudioTrack::Waves
            };
            requests.push(Request::now(Effect::PlayAudio {
                channel: AudioChannel::Background,
                track,
            }));
        }

        GameEvent::SharkNear => {
            requests.push(Request::after(
                tuning.attack_cue_delay,
                Effect::PlayAudio {
                    channel: AudioChannel::Effect,
                    track: AudioTrack::Attack,
                },
            ));
        }

        GameEvent::ResetShark => {
            world.shark.respawn(tuning, rng);
        }
    }
}

fn expect_phase(world: &WorldState, event: &GameEvent, allowed: &[GamePhase]) -> bool {
    let ok = allowed.contains(&world.phase);
    if !ok {
        log::debug!("ignoring {} in {:?}", event.tag(), world.phase);
    }
    ok
}

fn set_phase(world: &mut WorldState, phase: GamePhase) {
    log::info!("phase {:?} -> {:?}", world.phase, phase);
    world.phase = phase;
}
