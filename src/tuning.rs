//! Game balance tuning
//!
//! Loaded once at startup from a JSON file. Missing fields fall back to the
//! defaults below, so a tuning file only needs the values it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TuningError;

/// Named tuning constants for one simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Round ===
    /// Seconds the player must survive before the pickup arrives
    pub pickup_time: f32,

    // === Shark ===
    /// Average dormancy before the shark swims (actual delay is 0.5x - 1.5x)
    pub avg_swim_delay: f32,
    /// Radius of the ring the shark spawns and flees to
    pub spawn_radius: f32,
    /// Depth of the spawn ring
    pub spawn_depth: f32,
    /// Highest the shark may rise (it never breaches)
    pub shark_ceiling: f32,
    /// Distance from the player inside which the flashlight spooks the shark
    pub spook_radius: f32,
    /// Distance to its pursuit target at which the shark catches the player
    pub death_radius: f32,
    /// Distance to the flee target that counts as arrived
    pub flee_arrival_epsilon: f32,
    /// Flashlight cone half-angle (radians)
    pub flashlight_cone: f32,
    /// Shark speed multiplier
    pub shark_speed: f32,
    /// Shark closing speed in units per second at `shark_speed == 1`
    pub shark_speed_ramp: f32,
    /// How far below the player the shark aims
    pub pursuit_offset: f32,

    // === Resources ===
    /// Seconds of continuous flashlight use on a full charge
    pub charge_seconds: f32,
    /// Seconds of cranking to recharge from empty
    pub recharge_seconds: f32,
    /// Seconds of air while submerged and resting
    pub air_seconds: f32,
    /// Seconds at the surface to refill air from empty
    pub breath_seconds: f32,
    /// Air duration multiplier while cranking underwater (< 1 burns faster)
    pub exercise_factor: f32,

    // === Player ===
    /// Vertical swim speed (units per second)
    pub swim_speed: f32,
    /// Deepest the player can dive
    pub swim_min: f32,
    /// Highest the player can float
    pub swim_max: f32,
    /// Depth at round start
    pub start_depth: f32,
    /// Radians of yaw per unit of pointer movement
    pub pan_scale: f32,
    /// Horizontal distance of the look target
    pub look_distance: f32,
    /// How far below the eye the look target sits
    pub look_drop: f32,

    // === Presentation timing ===
    /// Seconds before the start control is enabled on the intro screen
    pub intro_delay: f32,
    /// Seconds between the shark waking and the attack cue
    pub attack_cue_delay: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            pickup_time: 20.0,

            avg_swim_delay: 3.0,
            spawn_radius: 300.0,
            spawn_depth: -13.0,
            shark_ceiling: -9.0,
            spook_radius: 50.0,
            death_radius: 20.0,
            flee_arrival_epsilon: 1.0,
            flashlight_cone: std::f32::consts::PI / 6.0,
            shark_speed: 1.0,
            shark_speed_ramp: 30.0,
            pursuit_offset: 2.5,

            charge_seconds: 5.0,
            recharge_seconds: 20.0,
            air_seconds: 30.0,
            breath_seconds: 5.0,
            exercise_factor: 0.5,

            swim_speed: 4.2,
            swim_min: -10.0,
            swim_max: 2.0,
            start_depth: 1.0,
            pan_scale: -std::f32::consts::PI / 180.0 / 5.0,
            look_distance: 100.0,
            look_drop: 10.0,

            intro_delay: 0.0,
            attack_cue_delay: 1.0,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON string
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {:?}", path);
        Ok(tuning)
    }

    /// Load tuning from a file, falling back to defaults when it is missing or invalid
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("{}, using default tuning", e);
                Self::default()
            }
        }
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("pickup_time", self.pickup_time),
            ("spawn_radius", self.spawn_radius),
            ("flee_arrival_epsilon", self.flee_arrival_epsilon),
            ("flashlight_cone", self.flashlight_cone),
            ("shark_speed_ramp", self.shark_speed_ramp),
            ("charge_seconds", self.charge_seconds),
            ("recharge_seconds", self.recharge_seconds),
            ("air_seconds", self.air_seconds),
            ("breath_seconds", self.breath_seconds),
            ("exercise_factor", self.exercise_factor),
            ("swim_speed", self.swim_speed),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::Invalid {
                    field,
                    reason: format!("must be positive, got {value}"),
                });
            }
        }

        let non_negative = [
            ("avg_swim_delay", self.avg_swim_delay),
            ("spook_radius", self.spook_radius),
            ("death_radius", self.death_radius),
            ("shark_speed", self.shark_speed),
            ("intro_delay", self.intro_delay),
            ("attack_cue_delay", self.attack_cue_delay),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(TuningError::Invalid {
                    field,
                    reason: format!("must be zero or positive, got {value}"),
                });
            }
        }

        if self.swim_min >= self.swim_max {
            return Err(TuningError::Invalid {
                field: "swim_min",
                reason: format!("must be below swim_max ({})", self.swim_max),
            });
        }
        if !(self.swim_min..=self.swim_max).contains(&self.start_depth) {
            return Err(TuningError::Invalid {
                field: "start_depth",
                reason: format!("must lie in [{}, {}]", self.swim_min, self.swim_max),
            });
        }
        if self.spawn_depth > self.shark_ceiling {
            return Err(TuningError::Invalid {
                field: "spawn_depth",
                reason: format!("must not be above shark_ceiling ({})", self.shark_ceiling),
            });
        }
        Ok(())
    }

    /// Air drained per second while submerged
    pub fn air_drain_rate(&self, cranking: bool) -> f32 {
        let rate = 100.0 / self.air_seconds;
        if cranking { rate / self.exercise_factor } else { rate }
    }

    /// Air regained per second at the surface
    pub fn air_refill_rate(&self) -> f32 {
        100.0 / self.breath_seconds
    }

    /// Charge drained per second with the flashlight on
    pub fn charge_drain_rate(&self) -> f32 {
        100.0 / self.charge_seconds
    }

    /// Charge regained per second while cranking
    pub fn charge_refill_rate(&self) -> f32 {
        100.0 / self.recharge_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning =
            Tuning::from_json(r#"{ "pickup_time": 60.0, "spook_radius": 40.0 }"#).unwrap();
        assert_eq!(tuning.pickup_time, 60.0);
        assert_eq!(tuning.spook_radius, 40.0);
        assert_eq!(tuning.air_seconds, Tuning::default().air_seconds);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Tuning::from_json(r#"{ "air_seconds": 0.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "air_seconds", .. }));

        let err = Tuning::from_json(r#"{ "swim_min": 5.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "swim_min", .. }));

        assert!(matches!(
            Tuning::from_json("{ not json").unwrap_err(),
            TuningError::Parse(_)
        ));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let tuning = Tuning::load_or_default("/definitely/not/here/tuning.json");
        assert_eq!(tuning, Tuning::default());
    }

    #[test]
    fn test_cranking_burns_air_faster() {
        let tuning = Tuning::default();
        assert!(tuning.air_drain_rate(true) > tuning.air_drain_rate(false));
        assert!((tuning.air_drain_rate(false) - 100.0 / 30.0).abs() < 1e-5);
    }
}
