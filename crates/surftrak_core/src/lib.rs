//! SurfTrak Core
//!
//! Foundational types shared by the animation engine and the application shell:
//!
//! - **Color**: RGBA color with hex parsing and linear interpolation
//! - **Records**: `User`, `Session` and `Wave` value objects with shape invariants
//! - **Data Providers**: the `DataProvider` capability and its static sample implementation
//!
//! # Example
//!
//! ```rust
//! use surftrak_core::{DataProvider, StaticDataProvider};
//!
//! let provider = StaticDataProvider::sample().unwrap();
//! let sessions = provider.sessions();
//! assert_eq!(sessions.len(), 4);
//! assert!(sessions.iter().all(|s| s.validate().is_ok()));
//! ```

pub mod color;
pub mod error;
pub mod model;
pub mod provider;

pub use color::Color;
pub use error::{CoreError, Result};
pub use model::{GeoPoint, LifetimeStats, PathSample, Session, User, Wave};
pub use provider::{DataProvider, StaticDataProvider};
