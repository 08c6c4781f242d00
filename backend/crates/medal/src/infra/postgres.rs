//! PostgreSQL Repository Implementations

use chrono::{DateTime, NaiveDate, Utc};
use kernel::error::conversions::is_unique_violation;
use kernel::id::AccountId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{
    ClaimPatch, MedalClaim, MedalClaimDetails, NewMedalClaim, Race, RaceResult, RaceSummary,
};
use crate::domain::repository::{MedalClaimRepository, RaceRepository};
use crate::domain::value_objects::{BibNumber, ClaimId, RaceId, RaceResultId};
use crate::error::{MedalError, MedalResult};

/// Unique constraint on `medal_claims (account_id, race_id)`
const CLAIM_UNIQUE_CONSTRAINT: &str = "medal_claims_account_race_key";

const RACE_SUMMARY_SELECT: &str = r#"
    SELECT
        r.race_id,
        r.name,
        r.description,
        r.race_date,
        r.location,
        r.distance,
        r.race_type,
        r.medal_image_url,
        r.created_at,
        r.updated_at,
        COUNT(mc.claim_id) AS total_medals_claimed
    FROM races r
    LEFT JOIN medal_claims mc ON mc.race_id = r.race_id
"#;

const CLAIM_COLUMNS: &str = r#"
    claim_id,
    account_id,
    race_id,
    race_result_id,
    medal_image_url,
    notes,
    full_name,
    is_verified,
    claimed_at
"#;

/// PostgreSQL-backed race catalogue and claim store
#[derive(Clone)]
pub struct PgMedalRepository {
    pool: PgPool,
}

impl PgMedalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Race Repository Implementation
// ============================================================================

impl RaceRepository for PgMedalRepository {
    async fn list_races(&self) -> MedalResult<Vec<RaceSummary>> {
        let sql = format!(
            "{RACE_SUMMARY_SELECT} GROUP BY r.race_id ORDER BY r.race_date DESC, r.race_id DESC"
        );
        let rows = sqlx::query_as::<_, RaceSummaryRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(RaceSummaryRow::into_summary).collect())
    }

    async fn find_race(&self, race_id: RaceId) -> MedalResult<Option<RaceSummary>> {
        let sql = format!("{RACE_SUMMARY_SELECT} WHERE r.race_id = $1 GROUP BY r.race_id");
        let row = sqlx::query_as::<_, RaceSummaryRow>(&sql)
            .bind(race_id.value())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(RaceSummaryRow::into_summary))
    }

    async fn list_results(&self, race_id: RaceId) -> MedalResult<Vec<RaceResult>> {
        let rows = sqlx::query_as::<_, RaceResultRow>(
            r#"
            SELECT
                race_result_id,
                race_id,
                participant_name,
                bib_number,
                finish_time,
                overall_place,
                age_group_place,
                age_group,
                gender,
                city,
                state,
                country,
                created_at
            FROM race_results
            WHERE race_id = $1
            ORDER BY overall_place ASC NULLS LAST, race_result_id ASC
            "#,
        )
        .bind(race_id.value())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(RaceResultRow::into_result).collect())
    }

    async fn find_result_by_bib(
        &self,
        race_id: RaceId,
        bib_number: &BibNumber,
    ) -> MedalResult<Option<RaceResult>> {
        let row = sqlx::query_as::<_, RaceResultRow>(
            r#"
            SELECT
                race_result_id,
                race_id,
                participant_name,
                bib_number,
                finish_time,
                overall_place,
                age_group_place,
                age_group,
                gender,
                city,
                state,
                country,
                created_at
            FROM race_results
            WHERE race_id = $1 AND bib_number = $2
            "#,
        )
        .bind(race_id.value())
        .bind(bib_number.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(RaceResultRow::into_result))
    }
}

// ============================================================================
// Medal Claim Repository Implementation
// ============================================================================

impl MedalClaimRepository for PgMedalRepository {
    async fn exists_for_race(&self, account_id: &AccountId, race_id: RaceId) -> MedalResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM medal_claims WHERE account_id = $1 AND race_id = $2)",
        )
        .bind(account_id.as_uuid())
        .bind(race_id.value())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn create(&self, claim: &NewMedalClaim) -> MedalResult<MedalClaim> {
        let sql = format!(
            r#"
            INSERT INTO medal_claims (
                account_id,
                race_id,
                race_result_id,
                full_name,
                notes,
                is_verified
            ) VALUES ($1, $2, $3, $4, $5, FALSE)
            RETURNING {CLAIM_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, MedalClaimRow>(&sql)
            .bind(claim.account_id.as_uuid())
            .bind(claim.race_id.value())
            .bind(claim.race_result_id.value())
            .bind(claim.full_name.as_str())
            .bind(claim.notes.as_deref())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e, Some(CLAIM_UNIQUE_CONSTRAINT)) {
                    MedalError::AlreadyClaimed
                } else {
                    MedalError::Database(e)
                }
            })?;

        Ok(row.into_claim())
    }

    async fn update(
        &self,
        account_id: &AccountId,
        claim_id: ClaimId,
        patch: &ClaimPatch,
    ) -> MedalResult<Option<MedalClaim>> {
        let sql = format!(
            r#"
            UPDATE medal_claims SET
                notes = COALESCE($1, notes),
                medal_image_url = COALESCE($2, medal_image_url)
            WHERE claim_id = $3 AND account_id = $4
            RETURNING {CLAIM_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, MedalClaimRow>(&sql)
            .bind(patch.notes.as_deref())
            .bind(patch.medal_image_url.as_deref())
            .bind(claim_id.value())
            .bind(account_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(MedalClaimRow::into_claim))
    }

    async fn delete(&self, account_id: &AccountId, claim_id: ClaimId) -> MedalResult<bool> {
        let result = sqlx::query("DELETE FROM medal_claims WHERE claim_id = $1 AND account_id = $2")
            .bind(claim_id.value())
            .bind(account_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_for_account(
        &self,
        account_id: &AccountId,
    ) -> MedalResult<Vec<MedalClaimDetails>> {
        let rows = sqlx::query_as::<_, ClaimDetailsRow>(
            r#"
            SELECT
                mc.claim_id,
                mc.account_id,
                mc.race_id,
                mc.race_result_id,
                mc.medal_image_url,
                mc.notes,
                mc.full_name,
                mc.is_verified,
                mc.claimed_at,
                r.name AS race_name,
                r.description AS race_description,
                r.race_date,
                r.location AS race_location,
                r.distance AS race_distance,
                r.race_type,
                r.medal_image_url AS race_medal_image_url,
                r.created_at AS race_created_at,
                r.updated_at AS race_updated_at,
                rr.participant_name,
                rr.bib_number,
                rr.finish_time,
                rr.overall_place,
                rr.age_group_place,
                rr.age_group,
                rr.gender,
                rr.city,
                rr.state,
                rr.country,
                rr.created_at AS result_created_at
            FROM medal_claims mc
            JOIN races r ON r.race_id = mc.race_id
            LEFT JOIN race_results rr ON rr.race_result_id = mc.race_result_id
            WHERE mc.account_id = $1
            ORDER BY mc.claimed_at DESC, mc.claim_id DESC
            "#,
        )
        .bind(account_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ClaimDetailsRow::into_details).collect())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct RaceSummaryRow {
    race_id: i64,
    name: String,
    description: Option<String>,
    race_date: NaiveDate,
    location: Option<String>,
    distance: Option<String>,
    race_type: Option<String>,
    medal_image_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    total_medals_claimed: i64,
}

impl RaceSummaryRow {
    fn into_summary(self) -> RaceSummary {
        RaceSummary {
            race: Race {
                race_id: RaceId::new(self.race_id),
                name: self.name,
                description: self.description,
                race_date: self.race_date,
                location: self.location,
                distance: self.distance,
                race_type: self.race_type,
                medal_image_url: self.medal_image_url,
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            total_medals_claimed: self.total_medals_claimed,
        }
    }
}

#[derive(sqlx::FromRow)]
struct RaceResultRow {
    race_result_id: i64,
    race_id: i64,
    participant_name: String,
    bib_number: String,
    finish_time: Option<String>,
    overall_place: Option<i32>,
    age_group_place: Option<i32>,
    age_group: Option<String>,
    gender: Option<String>,
    city: Option<String>,
    state: Option<String>,
    country: Option<String>,
    created_at: DateTime<Utc>,
}

impl RaceResultRow {
    fn into_result(self) -> RaceResult {
        RaceResult {
            race_result_id: RaceResultId::new(self.race_result_id),
            race_id: RaceId::new(self.race_id),
            participant_name: self.participant_name,
            bib_number: self.bib_number,
            finish_time: self.finish_time,
            overall_place: self.overall_place,
            age_group_place: self.age_group_place,
            age_group: self.age_group,
            gender: self.gender,
            city: self.city,
            state: self.state,
            country: self.country,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct MedalClaimRow {
    claim_id: i64,
    account_id: Uuid,
    race_id: i64,
    race_result_id: Option<i64>,
    medal_image_url: Option<String>,
    notes: Option<String>,
    full_name: String,
    is_verified: bool,
    claimed_at: DateTime<Utc>,
}

impl MedalClaimRow {
    fn into_claim(self) -> MedalClaim {
        MedalClaim {
            claim_id: ClaimId::new(self.claim_id),
            account_id: AccountId::from_uuid(self.account_id),
            race_id: RaceId::new(self.race_id),
            race_result_id: self.race_result_id.map(RaceResultId::new),
            medal_image_url: self.medal_image_url,
            notes: self.notes,
            full_name: self.full_name,
            is_verified: self.is_verified,
            claimed_at: self.claimed_at,
        }
    }
}

/// Claim joined with its race and, through a LEFT JOIN, its result
#[derive(sqlx::FromRow)]
struct ClaimDetailsRow {
    #[sqlx(flatten)]
    claim: MedalClaimRow,
    race_name: String,
    race_description: Option<String>,
    race_date: NaiveDate,
    race_location: Option<String>,
    race_distance: Option<String>,
    race_type: Option<String>,
    race_medal_image_url: Option<String>,
    race_created_at: DateTime<Utc>,
    race_updated_at: DateTime<Utc>,
    participant_name: Option<String>,
    bib_number: Option<String>,
    finish_time: Option<String>,
    overall_place: Option<i32>,
    age_group_place: Option<i32>,
    age_group: Option<String>,
    gender: Option<String>,
    city: Option<String>,
    state: Option<String>,
    country: Option<String>,
    result_created_at: Option<DateTime<Utc>>,
}

impl ClaimDetailsRow {
    fn into_details(self) -> MedalClaimDetails {
        let claim = self.claim.into_claim();

        let race = Race {
            race_id: claim.race_id,
            name: self.race_name,
            description: self.race_description,
            race_date: self.race_date,
            location: self.race_location,
            distance: self.race_distance,
            race_type: self.race_type,
            medal_image_url: self.race_medal_image_url,
            created_at: self.race_created_at,
            updated_at: self.race_updated_at,
        };

        // All result columns are NULL when the result row is gone
        let result = match (
            claim.race_result_id,
            self.participant_name,
            self.bib_number,
            self.result_created_at,
        ) {
            (Some(race_result_id), Some(participant_name), Some(bib_number), Some(created_at)) => {
                Some(RaceResult {
                    race_result_id,
                    race_id: claim.race_id,
                    participant_name,
                    bib_number,
                    finish_time: self.finish_time,
                    overall_place: self.overall_place,
                    age_group_place: self.age_group_place,
                    age_group: self.age_group,
                    gender: self.gender,
                    city: self.city,
                    state: self.state,
                    country: self.country,
                    created_at,
                })
            }
            _ => None,
        };

        MedalClaimDetails {
            claim,
            race,
            result,
        }
    }
}
