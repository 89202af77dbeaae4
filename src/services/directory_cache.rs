use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use moka::future::Cache;

use crate::database::models::TeamInfo;
use crate::database::repositories::TeamRepository;
use crate::error::AppError;

const DIRECTORY_KEY: &str = "all";

/// Caches the public team directory between registrations and status changes.
#[derive(Clone)]
pub struct DirectoryCache {
    cache: Cache<&'static str, Arc<Vec<TeamInfo>>>,
    // bumped on every write so a load that straddles one is never cached
    generation: Arc<AtomicU64>,
}

impl DirectoryCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            cache: Cache::builder().max_capacity(1).time_to_live(ttl).build(),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn get_or_load(
        &self,
        team_repository: &TeamRepository,
    ) -> Result<Arc<Vec<TeamInfo>>, AppError> {
        self.get_or_load_with(|| async {
            let teams = team_repository.get_all_teams().await?;
            Ok::<_, AppError>(teams.into_iter().map(TeamInfo::from).collect())
        })
        .await
    }

    pub async fn get_or_load_with<F, Fut>(&self, load: F) -> Result<Arc<Vec<TeamInfo>>, AppError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<TeamInfo>, AppError>>,
    {
        if let Some(teams) = self.cache.get(DIRECTORY_KEY).await {
            log::debug!("Directory cache hit ({} teams)", teams.len());
            return Ok(teams);
        }

        let generation = self.generation.load(Ordering::Acquire);
        let teams = Arc::new(load().await?);

        self.cache.insert(DIRECTORY_KEY, teams.clone()).await;

        // A write landed while loading; drop what may already be stale
        if self.generation.load(Ordering::Acquire) != generation {
            log::debug!("Directory changed during load, not caching");
            self.cache.invalidate(DIRECTORY_KEY).await;
        }

        Ok(teams)
    }

    pub async fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
        self.cache.invalidate(DIRECTORY_KEY).await;
    }
}
