pub mod assemble;
pub mod cache;
pub mod catalog;
pub mod classify;
pub mod encoder;
pub mod engine;
pub mod resolver;

pub use crate::domain::model::{BirthData, CelestialPosition, DesignChart};
pub use crate::domain::ports::{ChartCache, ConfigProvider, PositionSource, Storage};
pub use crate::utils::error::Result;
