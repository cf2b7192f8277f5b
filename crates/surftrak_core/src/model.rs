//! Surf session records
//!
//! Plain value objects produced by a data source and read by the UI.
//! They carry no behavior beyond shape checks and a few aggregates.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Mean Earth radius in miles, for path distances
const EARTH_RADIUS_MILES: f64 = 3958.8;

/// A position on the Earth's surface
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance in miles (haversine)
    pub fn distance_miles(&self, other: &GeoPoint) -> f64 {
        let (lat1, lat2) = (self.latitude.to_radians(), other.latitude.to_radians());
        let d_lat = lat2 - lat1;
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_MILES * a.sqrt().asin()
    }
}

/// One timestamped sample along a ridden wave
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathSample {
    pub point: GeoPoint,
    pub timestamp: DateTime<Utc>,
}

/// An account holder
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub display_name: String,
    pub email: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One recorded surf outing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    pub user_id: String,
    pub location: GeoPoint,
    /// Human-readable break name ("Trestles")
    pub location_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub wave_count: u32,
    /// Miles per hour
    pub average_speed: f32,
    /// Miles per hour
    pub max_speed: f32,
    /// Seconds spent in the water
    pub total_duration: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Build a session, rejecting an inverted time range or bad speeds
    ///
    /// `total_duration` and the audit timestamps are taken from the range.
    pub fn new(
        session_id: impl Into<String>,
        user_id: impl Into<String>,
        location: GeoPoint,
        location_name: impl Into<String>,
        (start_time, end_time): (DateTime<Utc>, DateTime<Utc>),
        wave_count: u32,
        (average_speed, max_speed): (f32, f32),
    ) -> Result<Self> {
        let session = Self {
            session_id: session_id.into(),
            user_id: user_id.into(),
            location,
            location_name: location_name.into(),
            start_time,
            end_time,
            wave_count,
            average_speed,
            max_speed,
            total_duration: (end_time - start_time).num_seconds().max(0) as u32,
            created_at: end_time,
            updated_at: end_time,
        };
        session.validate()?;
        Ok(session)
    }

    /// Check `end >= start` and `max >= average >= 0`
    pub fn validate(&self) -> Result<()> {
        check_range("session", &self.session_id, self.start_time, self.end_time)?;
        check_speeds(
            "session",
            &self.session_id,
            self.average_speed,
            self.max_speed,
        )
    }

    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }
}

/// One ride within a session
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Wave {
    pub wave_id: String,
    pub session_id: String,
    pub wave_number: u32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Seconds
    pub duration: f32,
    /// Miles per hour
    pub top_speed: f32,
    /// Miles per hour
    pub average_speed: f32,
    #[serde(default)]
    pub path: Vec<PathSample>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Wave {
    /// Build a wave, rejecting an inverted time range or bad speeds
    ///
    /// `duration` is the length of the range in seconds.
    pub fn new(
        wave_id: impl Into<String>,
        session_id: impl Into<String>,
        wave_number: u32,
        (start_time, end_time): (DateTime<Utc>, DateTime<Utc>),
        (average_speed, top_speed): (f32, f32),
        path: Vec<PathSample>,
    ) -> Result<Self> {
        let wave = Self {
            wave_id: wave_id.into(),
            session_id: session_id.into(),
            wave_number,
            start_time,
            end_time,
            duration: (end_time - start_time).num_milliseconds() as f32 / 1000.0,
            top_speed,
            average_speed,
            path,
            created_at: end_time,
            updated_at: end_time,
        };
        wave.validate()?;
        Ok(wave)
    }

    /// Check `end >= start` and `top >= average >= 0`
    pub fn validate(&self) -> Result<()> {
        check_range("wave", &self.wave_id, self.start_time, self.end_time)?;
        check_speeds("wave", &self.wave_id, self.average_speed, self.top_speed)
    }

    /// Length of the recorded path in miles
    pub fn distance_miles(&self) -> f64 {
        self.path
            .windows(2)
            .map(|pair| pair[0].point.distance_miles(&pair[1].point))
            .sum()
    }
}

fn check_range(
    record: &'static str,
    id: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<()> {
    if end < start {
        return Err(CoreError::InvertedTimeRange {
            record,
            id: id.to_string(),
        });
    }
    Ok(())
}

fn check_speeds(record: &'static str, id: &str, average: f32, max: f32) -> Result<()> {
    // NaN fails both comparisons
    if !(average >= 0.0 && max >= average) {
        return Err(CoreError::InvalidSpeed {
            record,
            id: id.to_string(),
            average,
            max,
        });
    }
    Ok(())
}

/// Aggregates shown on the dashboard and profile
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LifetimeStats {
    pub session_count: usize,
    pub wave_count: u32,
    /// Mean of per-session average speeds (mph)
    pub average_speed: f32,
    /// Highest session max speed (mph)
    pub best_speed: f32,
    /// Longest single ride in seconds, when any wave was recorded
    pub longest_wave_secs: Option<f32>,
    /// Summed path length of all recorded waves, in miles
    pub total_distance_miles: Option<f64>,
}

impl LifetimeStats {
    pub fn from_records(sessions: &[Session], waves: &[Wave]) -> Self {
        let session_count = sessions.len();
        let wave_count = sessions.iter().map(|s| s.wave_count).sum();
        let average_speed = if session_count == 0 {
            0.0
        } else {
            sessions.iter().map(|s| s.average_speed).sum::<f32>() / session_count as f32
        };
        let best_speed = sessions.iter().map(|s| s.max_speed).fold(0.0, f32::max);

        let longest_wave_secs = waves.iter().map(|w| w.duration).reduce(f32::max);
        let total_distance_miles = if waves.is_empty() {
            None
        } else {
            Some(waves.iter().map(Wave::distance_miles).sum())
        };

        Self {
            session_count,
            wave_count,
            average_speed,
            best_speed,
            longest_wave_secs,
            total_distance_miles,
        }
    }
}
