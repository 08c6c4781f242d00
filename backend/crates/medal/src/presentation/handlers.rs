//! HTTP Handlers

use auth::{AuthenticatedAccount, MaybeAccount};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::{
    BrowseRacesUseCase, ClaimMedalInput, ClaimMedalUseCase, DeleteMedalUseCase,
    ListMedalsUseCase, UpdateMedalUseCase,
};
use crate::domain::repository::{MedalClaimRepository, RaceRepository};
use crate::domain::value_objects::{ClaimId, RaceId};
use crate::error::MedalResult;
use crate::presentation::dto::{
    ClaimMedalRequest, MedalClaimResponse, MedalWithDetailsResponse, MessageResponse,
    RaceResponse, RaceResultResponse, UpdateMedalRequest,
};

/// Shared state for medal and race handlers
pub struct MedalAppState<R>
where
    R: RaceRepository + MedalClaimRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

impl<R> Clone for MedalAppState<R>
where
    R: RaceRepository + MedalClaimRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

// ============================================================================
// Medals (requires authentication)
// ============================================================================

/// GET /api/medals
pub async fn list_medals<R>(
    State(state): State<MedalAppState<R>>,
    AuthenticatedAccount(identity): AuthenticatedAccount,
) -> MedalResult<Json<Vec<MedalWithDetailsResponse>>>
where
    R: RaceRepository + MedalClaimRepository + Send + Sync + 'static,
{
    let medals = ListMedalsUseCase::new(state.repo.clone())
        .execute(&identity.account_id)
        .await?;

    Ok(Json(medals.into_iter().map(Into::into).collect()))
}

/// POST /api/medals/claim
pub async fn claim_medal<R>(
    State(state): State<MedalAppState<R>>,
    AuthenticatedAccount(identity): AuthenticatedAccount,
    Json(req): Json<ClaimMedalRequest>,
) -> MedalResult<(StatusCode, Json<MedalClaimResponse>)>
where
    R: RaceRepository + MedalClaimRepository + Send + Sync + 'static,
{
    let input = ClaimMedalInput {
        race_id: req.race_id,
        bib_number: req.bib_number,
        full_name: req.full_name,
        notes: req.notes,
    };

    let claim = ClaimMedalUseCase::new(state.repo.clone())
        .execute(&identity.account_id, input)
        .await?;

    Ok((StatusCode::CREATED, Json(claim.into())))
}

/// PATCH /api/medals/{id}
pub async fn update_medal<R>(
    State(state): State<MedalAppState<R>>,
    AuthenticatedAccount(identity): AuthenticatedAccount,
    Path(claim_id): Path<i64>,
    Json(req): Json<UpdateMedalRequest>,
) -> MedalResult<Json<MedalClaimResponse>>
where
    R: RaceRepository + MedalClaimRepository + Send + Sync + 'static,
{
    let claim = UpdateMedalUseCase::new(state.repo.clone())
        .execute(&identity.account_id, ClaimId::new(claim_id), req.into())
        .await?;

    Ok(Json(claim.into()))
}

/// DELETE /api/medals/{id}
pub async fn delete_medal<R>(
    State(state): State<MedalAppState<R>>,
    AuthenticatedAccount(identity): AuthenticatedAccount,
    Path(claim_id): Path<i64>,
) -> MedalResult<Json<MessageResponse>>
where
    R: RaceRepository + MedalClaimRepository + Send + Sync + 'static,
{
    DeleteMedalUseCase::new(state.repo.clone())
        .execute(&identity.account_id, ClaimId::new(claim_id))
        .await?;

    Ok(Json(MessageResponse {
        message: "Medal claim deleted successfully".to_string(),
    }))
}

// ============================================================================
// Races (optional authentication)
// ============================================================================

/// GET /api/races
pub async fn list_races<R>(
    State(state): State<MedalAppState<R>>,
    MaybeAccount(viewer): MaybeAccount,
) -> MedalResult<Json<Vec<RaceResponse>>>
where
    R: RaceRepository + MedalClaimRepository + Send + Sync + 'static,
{
    let races = BrowseRacesUseCase::new(state.repo.clone()).list().await?;

    tracing::debug!(
        count = races.len(),
        authenticated = viewer.is_some(),
        "Listed races"
    );

    Ok(Json(races.into_iter().map(Into::into).collect()))
}

/// GET /api/races/{id}
pub async fn get_race<R>(
    State(state): State<MedalAppState<R>>,
    Path(race_id): Path<i64>,
) -> MedalResult<Json<RaceResponse>>
where
    R: RaceRepository + MedalClaimRepository + Send + Sync + 'static,
{
    let race = BrowseRacesUseCase::new(state.repo.clone())
        .get(RaceId::new(race_id))
        .await?;

    Ok(Json(race.into()))
}

/// GET /api/races/{id}/stats
pub async fn race_results<R>(
    State(state): State<MedalAppState<R>>,
    Path(race_id): Path<i64>,
) -> MedalResult<Json<Vec<RaceResultResponse>>>
where
    R: RaceRepository + MedalClaimRepository + Send + Sync + 'static,
{
    let results = BrowseRacesUseCase::new(state.repo.clone())
        .results(RaceId::new(race_id))
        .await?;

    Ok(Json(results.into_iter().map(Into::into).collect()))
}
