//! Domain Entities
//!
//! Core business entities for the medal domain.

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::AccountId;

use crate::domain::value_objects::{ClaimId, FullName, RaceId, RaceResultId};

/// A race medals can be claimed for
#[derive(Debug, Clone, PartialEq)]
pub struct Race {
    pub race_id: RaceId,
    pub name: String,
    pub description: Option<String>,
    pub race_date: NaiveDate,
    pub location: Option<String>,
    pub distance: Option<String>,
    pub race_type: Option<String>,
    pub medal_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Race with its claim count
#[derive(Debug, Clone, PartialEq)]
pub struct RaceSummary {
    pub race: Race,
    pub total_medals_claimed: i64,
}

/// Imported, authoritative finisher row
#[derive(Debug, Clone, PartialEq)]
pub struct RaceResult {
    pub race_result_id: RaceResultId,
    pub race_id: RaceId,
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

/// An account's claim on a race
#[derive(Debug, Clone, PartialEq)]
pub struct MedalClaim {
    pub claim_id: ClaimId,
    pub account_id: AccountId,
    pub race_id: RaceId,
    pub race_result_id: Option<RaceResultId>,
    pub medal_image_url: Option<String>,
    pub notes: Option<String>,
    pub full_name: String,
    pub is_verified: bool,
    pub claimed_at: DateTime<Utc>,
}

/// Claim about to be inserted; new claims always start unverified
#[derive(Debug, Clone)]
pub struct NewMedalClaim {
    pub account_id: AccountId,
    pub race_id: RaceId,
    pub race_result_id: RaceResultId,
    pub full_name: FullName,
    pub notes: Option<String>,
}

/// Fields an owner may change; `None` leaves the stored value untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimPatch {
    pub notes: Option<String>,
    pub medal_image_url: Option<String>,
}

impl ClaimPatch {
    pub fn is_empty(&self) -> bool {
        self.notes.is_none() && self.medal_image_url.is_none()
    }
}

/// Claim joined with its race and (if still present) its race result
#[derive(Debug, Clone, PartialEq)]
pub struct MedalClaimDetails {
    pub claim: MedalClaim,
    pub race: Race,
    pub result: Option<RaceResult>,
}
