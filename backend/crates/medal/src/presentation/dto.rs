//! API DTOs (Data Transfer Objects)
//!
//! Field names follow the snake_case JSON the web client already speaks.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{ClaimPatch, MedalClaim, MedalClaimDetails, RaceResult, RaceSummary};

// ============================================================================
// Requests
// ============================================================================

/// Claim request
///
/// Missing fields fall through to the use case's validation so the client
/// gets a 400 with a readable message.
#[derive(Debug, Clone, Deserialize)]
pub struct ClaimMedalRequest {
    #[serde(default)]
    pub race_id: Option<i64>,
    #[serde(default)]
    pub bib_number: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Update request; omitted fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMedalRequest {
    pub notes: Option<String>,
    pub medal_image_url: Option<String>,
}

impl From<UpdateMedalRequest> for ClaimPatch {
    fn from(req: UpdateMedalRequest) -> Self {
        Self {
            notes: req.notes,
            medal_image_url: req.medal_image_url,
        }
    }
}

// ============================================================================
// Medal claims
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedalClaimResponse {
    pub id: i64,
    pub user_id: Uuid,
    pub race_id: i64,
    pub race_result_id: Option<i64>,
    pub medal_image_url: Option<String>,
    pub notes: Option<String>,
    pub full_name: String,
    pub is_verified: bool,
    pub claimed_at: DateTime<Utc>,
}

impl From<MedalClaim> for MedalClaimResponse {
    fn from(claim: MedalClaim) -> Self {
        Self {
            id: claim.claim_id.value(),
            user_id: claim.account_id.into_uuid(),
            race_id: claim.race_id.value(),
            race_result_id: claim.race_result_id.map(|id| id.value()),
            medal_image_url: claim.medal_image_url,
            notes: claim.notes,
            full_name: claim.full_name,
            is_verified: claim.is_verified,
            claimed_at: claim.claimed_at,
        }
    }
}

/// One row of `GET /api/medals`: the claim plus race and result columns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedalWithDetailsResponse {
    #[serde(flatten)]
    pub claim: MedalClaimResponse,
    pub race_name: String,
    pub race_description: Option<String>,
    pub race_date: NaiveDate,
    pub race_location: Option<String>,
    pub race_distance: Option<String>,
    pub race_type: Option<String>,
    pub participant_name: Option<String>,
    pub bib_number: Option<String>,
    pub finish_time: Option<String>,
    pub overall_place: Option<i32>,
    pub age_group_place: Option<i32>,
    pub age_group: Option<String>,
}

impl From<MedalClaimDetails> for MedalWithDetailsResponse {
    fn from(details: MedalClaimDetails) -> Self {
        let MedalClaimDetails {
            claim,
            race,
            result,
        } = details;

        let (participant_name, bib_number, finish_time, overall_place, age_group_place, age_group) =
            match result {
                Some(r) => (
                    Some(r.participant_name),
                    Some(r.bib_number),
                    r.finish_time,
                    r.overall_place,
                    r.age_group_place,
                    r.age_group,
                ),
                None => (None, None, None, None, None, None),
            };

        Self {
            claim: claim.into(),
            race_name: race.name,
            race_description: race.description,
            race_date: race.race_date,
            race_location: race.location,
            race_distance: race.distance,
            race_type: race.race_type,
            participant_name,
            bib_number,
            finish_time,
            overall_place,
            age_group_place,
            age_group,
        }
    }
}

/// Delete confirmation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================================
// Races
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub location: Option<String>,
    pub distance: Option<String>,
    pub race_type: Option<String>,
    pub medal_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub total_medals_claimed: i64,
}

impl From<RaceSummary> for RaceResponse {
    fn from(summary: RaceSummary) -> Self {
        let race = summary.race;
        Self {
            id: race.race_id.value(),
            name: race.name,
            description: race.description,
            date: race.race_date,
            location: race.location,
            distance: race.distance,
            race_type: race.race_type,
            medal_image_url: race.medal_image_url,
            created_at: race.created_at,
            updated_at: race.updated_at,
            total_medals_claimed: summary.total_medals_claimed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceResultResponse {
    pub id: i64,
    pub race_id: i64,
    pub participant_name: String,
    pub bib_number: String,
    pub finish_time: Option<String>,
    pub overall_place: Option<i32>,
    pub age_group_place: Option<i32>,
    pub age_group: Option<String>,
    pub gender: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<RaceResult> for RaceResultResponse {
    fn from(result: RaceResult) -> Self {
        Self {
            id: result.race_result_id.value(),
            race_id: result.race_id.value(),
            participant_name: result.participant_name,
            bib_number: result.bib_number,
            finish_time: result.finish_time,
            overall_place: result.overall_place,
            age_group_place: result.age_group_place,
            age_group: result.age_group,
            gender: result.gender,
            city: result.city,
            state: result.state,
            country: result.country,
            created_at: result.created_at,
        }
    }
}
