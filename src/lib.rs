pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::adapters::approx::ApproxPositionSource;
pub use crate::adapters::local_storage::LocalStorage;
pub use crate::adapters::remote::RemotePositionSource;
pub use crate::core::cache::{BoundedChartCache, NoopCache};
pub use crate::core::engine::ChartEngine;
pub use crate::domain::model::{BirthData, CelestialPosition, DesignChart};
pub use crate::domain::ports::{ChartCache, ConfigProvider, PositionSource, Storage};
pub use crate::utils::error::{EngineError, Result};
