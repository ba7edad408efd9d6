//! Simulated environment readings

use serde::{Deserialize, Serialize};

use super::Jitter;

const BASE_TEMPERATURE_C: f64 = 22.0;
const TEMPERATURE_SPREAD: (f64, f64) = (-2.0, 3.0);
const BASE_HUMIDITY_PCT: f64 = 65.0;
const HUMIDITY_SPREAD: (f64, f64) = (-5.0, 10.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentReading {
    pub temperature_c: i32,
    pub humidity_pct: i32,
}

/// Temperature and humidity wandering around fixed baselines
pub struct EnvironmentSensor {
    jitter: Box<dyn Jitter>,
}

impl EnvironmentSensor {
    pub fn new(jitter: Box<dyn Jitter>) -> Self {
        Self { jitter }
    }

    /// Take a fresh reading
    pub fn read(&mut self) -> EnvironmentReading {
        let temperature = BASE_TEMPERATURE_C + self.jitter.range(TEMPERATURE_SPREAD.0, TEMPERATURE_SPREAD.1);
        let humidity = BASE_HUMIDITY_PCT + self.jitter.range(HUMIDITY_SPREAD.0, HUMIDITY_SPREAD.1);
        EnvironmentReading {
            temperature_c: temperature.round() as i32,
            humidity_pct: humidity.round() as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensors::{OsJitter, ScriptedJitter};

    #[test]
    fn readings_follow_jitter() {
        let mut sensor = EnvironmentSensor::new(Box::new(ScriptedJitter::new([0.0, 0.0, 0.99, 0.99])));
        assert_eq!(
            sensor.read(),
            EnvironmentReading {
                temperature_c: 20,
                humidity_pct: 60,
            }
        );
        assert_eq!(
            sensor.read(),
            EnvironmentReading {
                temperature_c: 25,
                humidity_pct: 75,
            }
        );
    }

    #[test]
    fn live_readings_stay_in_band() {
        let mut sensor = EnvironmentSensor::new(Box::new(OsJitter));
        for _ in 0..200 {
            let reading = sensor.read();
            assert!((20..=25).contains(&reading.temperature_c));
            assert!((60..=75).contains(&reading.humidity_pct));
        }
    }
}
