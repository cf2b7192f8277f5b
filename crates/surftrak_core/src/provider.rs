//! Data providers
//!
//! Screens never fetch; they read records through the [`DataProvider`]
//! capability. [`StaticDataProvider`] serves literal sample records and is the
//! only implementation today. A backend-backed provider slots in by
//! implementing the same trait.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::error::{CoreError, Result};
use crate::model::{GeoPoint, LifetimeStats, PathSample, Session, User, Wave};

/// Read-only source of surf records
pub trait DataProvider: Send + Sync {
    /// The signed-in user's record, if known
    fn user(&self) -> Option<User>;

    /// All sessions, newest first
    fn sessions(&self) -> Vec<Session>;

    /// Waves ridden during one session, in ride order
    fn waves(&self, session_id: &str) -> Vec<Wave>;

    /// Aggregates across every session and wave
    fn lifetime_stats(&self) -> LifetimeStats {
        let sessions = self.sessions();
        let waves: Vec<Wave> = sessions
            .iter()
            .flat_map(|s| self.waves(&s.session_id))
            .collect();
        LifetimeStats::from_records(&sessions, &waves)
    }
}

/// A provider backed by in-memory records
#[derive(Clone, Debug, Default)]
pub struct StaticDataProvider {
    user: Option<User>,
    sessions: Vec<Session>,
    waves: Vec<Wave>,
}

impl StaticDataProvider {
    /// Build a provider from records, validating each one
    pub fn new(user: Option<User>, sessions: Vec<Session>, waves: Vec<Wave>) -> Result<Self> {
        for session in &sessions {
            session.validate()?;
        }
        for wave in &waves {
            wave.validate()?;
        }

        let mut sessions = sessions;
        sessions.sort_by(|a, b| b.start_time.cmp(&a.start_time));

        tracing::debug!(
            sessions = sessions.len(),
            waves = waves.len(),
            "static data provider ready"
        );

        Ok(Self {
            user,
            sessions,
            waves,
        })
    }

    /// The demo data set: four Southern California sessions
    pub fn sample() -> Result<Self> {
        let created = utc(2023, 3, 1, 0, 0)?;
        let user = User {
            user_id: "user-1".into(),
            display_name: "John Doe".into(),
            email: "johndoe@surftrak.com".into(),
            photo_url: None,
            created_at: created,
            updated_at: created,
        };

        let sessions = vec![
            Session::new(
                "1",
                "user-1",
                GeoPoint::new(33.6553, -118.0036),
                "Huntington Beach",
                (utc(2023, 4, 10, 10, 30)?, utc(2023, 4, 10, 12, 45)?),
                12,
                (11.0, 18.0),
            )?,
            Session::new(
                "2",
                "user-1",
                GeoPoint::new(33.6003, -117.9003),
                "Newport Beach",
                (utc(2023, 4, 5, 8, 15)?, utc(2023, 4, 5, 11, 0)?),
                9,
                (9.5, 15.0),
            )?,
            Session::new(
                "3",
                "user-1",
                GeoPoint::new(34.0357, -118.6776),
                "Malibu Point",
                (utc(2023, 3, 28, 9, 0)?, utc(2023, 3, 28, 11, 30)?),
                15,
                (13.0, 22.0),
            )?,
            Session::new(
                "4",
                "user-1",
                GeoPoint::new(33.3825, -117.5889),
                "Trestles",
                (utc(2023, 3, 15, 7, 45)?, utc(2023, 3, 15, 10, 30)?),
                8,
                (12.0, 20.0),
            )?,
        ];

        let first_wave = utc(2023, 4, 10, 10, 41)?;
        let waves = vec![
            sample_wave("1", 1, first_wave, 28.0, (9.0, 14.0))?,
            sample_wave("1", 2, first_wave + Duration::minutes(17), 45.0, (12.0, 18.0))?,
            sample_wave("1", 3, first_wave + Duration::minutes(52), 19.0, (8.5, 12.0))?,
        ];

        Self::new(Some(user), sessions, waves)
    }
}

impl DataProvider for StaticDataProvider {
    fn user(&self) -> Option<User> {
        self.user.clone()
    }

    fn sessions(&self) -> Vec<Session> {
        self.sessions.clone()
    }

    fn waves(&self, session_id: &str) -> Vec<Wave> {
        let mut waves: Vec<Wave> = self
            .waves
            .iter()
            .filter(|w| w.session_id == session_id)
            .cloned()
            .collect();
        waves.sort_by_key(|w| w.wave_number);
        waves
    }
}

fn utc(year: i32, month: u32, day: u32, hour: u32, min: u32) -> Result<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .ok_or_else(|| {
            CoreError::InvalidTimestamp(format!(
                "{year:04}-{month:02}-{day:02} {hour:02}:{min:02}"
            ))
        })
}

/// A straight shoreward ride sampled every five seconds
fn sample_wave(
    session_id: &str,
    number: u32,
    start_time: DateTime<Utc>,
    duration: f32,
    (average_speed, top_speed): (f32, f32),
) -> Result<Wave> {
    let end_time = start_time + Duration::milliseconds((duration * 1000.0) as i64);
    let origin = GeoPoint::new(33.6540, -118.0050);
    // Degrees of latitude covered per second at the average speed
    let step = average_speed as f64 / 3600.0 / 69.09;

    let path = (0..=(duration as i64 / 5))
        .map(|i| PathSample {
            point: GeoPoint::new(origin.latitude - step * (i * 5) as f64, origin.longitude),
            timestamp: start_time + Duration::seconds(i * 5),
        })
        .collect();

    Wave::new(
        format!("{session_id}-{number}"),
        session_id,
        number,
        (start_time, end_time),
        (average_speed, top_speed),
        path,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_sessions_sorted_newest_first() {
        let provider = StaticDataProvider::sample().unwrap();
        let names: Vec<_> = provider
            .sessions()
            .into_iter()
            .map(|s| s.location_name)
            .collect();
        assert_eq!(
            names,
            ["Huntington Beach", "Newport Beach", "Malibu Point", "Trestles"]
        );
    }

    #[test]
    fn test_waves_filtered_by_session() {
        let provider = StaticDataProvider::sample().unwrap();
        let waves = provider.waves("1");
        assert_eq!(waves.len(), 3);
        assert!(waves.windows(2).all(|w| w[0].wave_number < w[1].wave_number));
        assert!(provider.waves("4").is_empty());
        assert!(provider.waves("missing").is_empty());
    }

    #[test]
    fn test_sample_lifetime_stats() {
        let provider = StaticDataProvider::sample().unwrap();
        let stats = provider.lifetime_stats();

        assert_eq!(stats.session_count, 4);
        assert_eq!(stats.wave_count, 44);
        assert_eq!(stats.best_speed, 22.0);
        assert_eq!(stats.longest_wave_secs, Some(45.0));
        let distance = stats.total_distance_miles.unwrap();
        assert!(distance > 0.0 && distance < 1.0);
    }

    #[test]
    fn test_invalid_record_rejected() {
        let mut session = StaticDataProvider::sample().unwrap().sessions().remove(0);
        session.max_speed = 1.0;
        assert!(StaticDataProvider::new(None, vec![session], Vec::new()).is_err());
    }

    #[test]
    fn test_records_serialize() {
        let provider = StaticDataProvider::sample().unwrap();
        let json = serde_json::to_string(&provider.sessions()[0]).unwrap();
        assert!(json.contains("\"location_name\":\"Huntington Beach\""));

        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, provider.sessions()[0]);
    }
}
