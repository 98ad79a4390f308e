use crate::domain::model::{BirthData, CelestialPosition, DesignChart};
use crate::utils::error::Result;
use async_trait::async_trait;

/// One strategy for obtaining body positions. The engine holds an ordered
/// list of these and takes the first success; any failure must be a typed
/// `Err`, never a partial list.
#[async_trait]
pub trait PositionSource: Send + Sync {
    fn name(&self) -> &'static str;

    /// True when this source synthesizes positions instead of querying a
    /// real ephemeris service.
    fn is_approximation(&self) -> bool;

    async fn positions(&self, birth: &BirthData) -> Result<Vec<CelestialPosition>>;
}

/// Injected result cache. Implementations own their interior locking;
/// neither call may block on anything beyond that lock.
pub trait ChartCache: Send + Sync {
    fn get(&self, key: u64) -> Option<DesignChart>;
    fn put(&self, key: u64, chart: DesignChart);
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// Remote position service endpoint; `None` runs fully offline.
    fn api_endpoint(&self) -> Option<&str>;
    fn request_timeout_secs(&self) -> u64;
    fn cache_capacity(&self) -> usize;
    fn output_path(&self) -> &str;
}
