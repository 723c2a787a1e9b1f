//! Semantic game events and the per-tick event queue
//!
//! Events are produced by the tick and by input handlers, then drained once
//! per tick by the event processor. Order is preserved and nothing is
//! deduplicated, so each producer pushes an event at most once per tick.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// A semantic game event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameEvent {
    /// Shark model finished loading
    SharkLoaded,
    /// Ambient fish finished loading
    FishLoaded,
    /// An asset could not be loaded
    LoadFailed { asset: String },
    /// Player asked for the intro screen
    ShowIntro,
    /// Player pressed start on the intro screen
    GameStart,
    /// Player drowned or was caught
    Death,
    /// Survived until pickup
    Victory,
    /// Player asked for another round
    Restart,
    FlashLightOn,
    FlashLightOff,
    /// Player went below the surface
    Submerged,
    /// Player came back up
    Surfaced,
    /// Shark woke up and is coming
    SharkNear,
    /// Send the shark back to a spawn point (debug key)
    ResetShark,
}

impl GameEvent {
    /// Stable tag used by hosts that speak in strings
    pub fn tag(&self) -> &'static str {
        match self {
            GameEvent::SharkLoaded => "sharkLoaded",
            GameEvent::FishLoaded => "fishLoaded",
            GameEvent::LoadFailed { .. } => "loadFailed",
            GameEvent::ShowIntro => "showIntro",
            GameEvent::GameStart => "gameStart",
            GameEvent::Death => "death",
            GameEvent::Victory => "victory",
            GameEvent::Restart => "restart",
            GameEvent::FlashLightOn => "flashLightOn",
            GameEvent::FlashLightOff => "flashLightOff",
            GameEvent::Submerged => "submerged",
            GameEvent::Surfaced => "surfaced",
            GameEvent::SharkNear => "sharkNear",
            GameEvent::ResetShark => "resetShark",
        }
    }

    /// Parse a payload-free event from its tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        let event = match tag {
            "sharkLoaded" => GameEvent::SharkLoaded,
            "fishLoaded" => GameEvent::FishLoaded,
            "showIntro" => GameEvent::ShowIntro,
            "gameStart" => GameEvent::GameStart,
            "death" => GameEvent::Death,
            "victory" => GameEvent::Victory,
            "restart" => GameEvent::Restart,
            "flashLightOn" => GameEvent::FlashLightOn,
            "flashLightOff" => GameEvent::FlashLightOff,
            "submerged" => GameEvent::Submerged,
            "surfaced" => GameEvent::Surfaced,
            "sharkNear" => GameEvent::SharkNear,
            "resetShark" => GameEvent::ResetShark,
            _ => return None,
        };
        Some(event)
    }
}

/// FIFO of events accumulated during a tick
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: VecDeque<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        log::trace!("queued {}", event.tag());
        self.events.push_back(event);
    }

    /// Push an event by tag. Unknown tags are dropped.
    ///
    /// Returns whether the tag was recognized.
    pub fn push_tag(&mut self, tag: &str) -> bool {
        match GameEvent::from_tag(tag) {
            Some(event) => {
                self.push(event);
                true
            }
            None => {
                log::debug!("ignoring unknown event tag {:?}", tag);
                false
            }
        }
    }

    /// Take every queued event in push order, leaving the queue empty
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of queued events equal to `event`
    pub fn count(&self, event: &GameEvent) -> usize {
        self.events.iter().filter(|e| *e == event).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip() {
        let events = [
            GameEvent::SharkLoaded,
            GameEvent::FishLoaded,
            GameEvent::ShowIntro,
            GameEvent::GameStart,
            GameEvent::Death,
            GameEvent::Victory,
            GameEvent::Restart,
            GameEvent::FlashLightOn,
            GameEvent::FlashLightOff,
            GameEvent::Submerged,
            GameEvent::Surfaced,
            GameEvent::SharkNear,
            GameEvent::ResetShark,
        ];
        for event in events {
            assert_eq!(GameEvent::from_tag(event.tag()), Some(event));
        }
        // Carries a payload, so it can't come from a bare tag
        assert_eq!(GameEvent::from_tag("loadFailed"), None);
    }

    #[test]
    fn test_queue_keeps_order_and_duplicates() {
        let mut queue = EventQueue::new();
        queue.push(GameEvent::FlashLightOn);
        queue.push(GameEvent::Death);
        queue.push(GameEvent::Death);
        queue.push(GameEvent::FlashLightOff);
        assert_eq!(queue.count(&GameEvent::Death), 2);

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(
            drained,
            vec![
                GameEvent::FlashLightOn,
                GameEvent::Death,
                GameEvent::Death,
                GameEvent::FlashLightOff
            ]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_unknown_tag_is_dropped() {
        let mut queue = EventQueue::new();
        assert!(!queue.push_tag("summonKraken"));
        assert!(queue.push_tag("gameStart"));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_serde_uses_camel_case_tags() {
        let json = serde_json::to_string(&GameEvent::FlashLightOn).unwrap();
        assert_eq!(json, r#"{"type":"flashLightOn"}"#);
        let back: GameEvent =
            serde_json::from_str(r#"{"type":"loadFailed","asset":"shark"}"#).unwrap();
        assert_eq!(back, GameEvent::LoadFailed { asset: "shark".into() });
    }
}
