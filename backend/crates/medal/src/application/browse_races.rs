//! Browse Races Use Case
//!
//! Public race catalogue and per-race results.

use std::sync::Arc;

use crate::domain::entities::{RaceResult, RaceSummary};
use crate::domain::repository::RaceRepository;
use crate::domain::value_objects::RaceId;
use crate::error::{MedalError, MedalResult};

pub struct BrowseRacesUseCase<R>
where
    R: RaceRepository,
{
    repo: Arc<R>,
}

impl<R> BrowseRacesUseCase<R>
where
    R: RaceRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> MedalResult<Vec<RaceSummary>> {
        self.repo.list_races().await
    }

    pub async fn get(&self, race_id: RaceId) -> MedalResult<RaceSummary> {
        self.repo
            .find_race(race_id)
            .await?
            .ok_or(MedalError::RaceNotFound)
    }

    /// Results for a race; an unknown race simply has none
    pub async fn results(&self, race_id: RaceId) -> MedalResult<Vec<RaceResult>> {
        self.repo.list_results(race_id).await
    }
}
