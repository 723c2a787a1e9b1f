//! Input intents
//!
//! The host decodes devices into [`Action`] presses/releases and pointer
//! movement. Held actions become [`TickInput`] flags; one-shot actions become
//! queued events, pushed only on a press or release transition so key repeat
//! never floods the queue.

use super::events::{EventQueue, GameEvent};
use super::tick::TickInput;

/// Player actions, independent of the device that produced them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SwimUp,
    Crank,
    /// Held to keep the light on
    Flashlight,
    /// Debug: send the shark away
    ResetShark,
}

/// Debounced input state between ticks
#[derive(Debug, Clone, Default)]
pub struct InputState {
    swim_up: bool,
    crank: bool,
    flashlight: bool,
    reset_shark: bool,
    pan: f32,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press. Repeats of an already-held action are ignored.
    pub fn press(&mut self, action: Action, events: &mut EventQueue) {
        match action {
            Action::SwimUp => self.swim_up = true,
            Action::Crank => self.crank = true,
            Action::Flashlight => {
                if !self.flashlight {
                    self.flashlight = true;
                    events.push(GameEvent::FlashLightOn);
                }
            }
            Action::ResetShark => {
                if !self.reset_shark {
                    self.reset_shark = true;
                    events.push(GameEvent::ResetShark);
                }
            }
        }
    }

    /// Record a release. Releasing something not held is ignored.
    pub fn release(&mut self, action: Action, events: &mut EventQueue) {
        match action {
            Action::SwimUp => self.swim_up = false,
            Action::Crank => self.crank = false,
            Action::Flashlight => {
                if self.flashlight {
                    self.flashlight = false;
                    events.push(GameEvent::FlashLightOff);
                }
            }
            Action::ResetShark => self.reset_shark = false,
        }
    }

    /// Set an action to an absolute held state (for polled devices)
    pub fn set(&mut self, action: Action, held: bool, events: &mut EventQueue) {
        if held {
            self.press(action, events);
        } else {
            self.release(action, events);
        }
    }

    /// Accumulate pointer movement
    pub fn pan(&mut self, dx: f32) {
        self.pan += dx;
    }

    pub fn is_held(&self, action: Action) -> bool {
        match action {
            Action::SwimUp => self.swim_up,
            Action::Crank => self.crank,
            Action::Flashlight => self.flashlight,
            Action::ResetShark => self.reset_shark,
        }
    }

    /// Intents for the next tick; consumes the accumulated pan
    pub fn take_tick_input(&mut self) -> TickInput {
        TickInput {
            swim_up: self.swim_up,
            crank: self.crank,
            pan: std::mem::take(&mut self.pan),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flashlight_debounced() {
        let mut input = InputState::new();
        let mut events = EventQueue::new();

        input.press(Action::Flashlight, &mut events);
        input.press(Action::Flashlight, &mut events);
        input.press(Action::Flashlight, &mut events);
        assert_eq!(events.count(&GameEvent::FlashLightOn), 1);

        input.release(Action::Flashlight, &mut events);
        input.release(Action::Flashlight, &mut events);
        assert_eq!(events.count(&GameEvent::FlashLightOff), 1);
    }

    #[test]
    fn test_polled_state_only_pushes_edges() {
        let mut input = InputState::new();
        let mut events = EventQueue::new();
        for held in [false, true, true, true, false, false, true] {
            input.set(Action::Flashlight, held, &mut events);
        }
        let tags: Vec<_> = events.iter().map(GameEvent::tag).collect();
        assert_eq!(tags, vec!["flashLightOn", "flashLightOff", "flashLightOn"]);
    }

    #[test]
    fn test_held_flags_and_pan() {
        let mut input = InputState::new();
        let mut events = EventQueue::new();
        input.press(Action::SwimUp, &mut events);
        input.press(Action::Crank, &mut events);
        input.pan(3.0);
        input.pan(-1.0);

        let tick = input.take_tick_input();
        assert!(tick.swim_up);
        assert!(tick.crank);
        assert_eq!(tick.pan, 2.0);
        assert!(events.is_empty());

        input.release(Action::Crank, &mut events);
        let tick = input.take_tick_input();
        assert!(!tick.crank);
        assert_eq!(tick.pan, 0.0);
    }

    #[test]
    fn test_reset_shark_fires_per_press() {
        let mut input = InputState::new();
        let mut events = EventQueue::new();
        input.press(Action::ResetShark, &mut events);
        input.press(Action::ResetShark, &mut events);
        input.release(Action::ResetShark, &mut events);
        input.press(Action::ResetShark, &mut events);
        assert_eq!(events.count(&GameEvent::ResetShark), 2);
    }
}
