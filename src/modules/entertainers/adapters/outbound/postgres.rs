// PostgreSQL implementation of the entertainer store and summary query ports.
//
// Responsibilities
// - Apply the embedded migrations that create `entertainers` and `engagements`.
// - Compute booking statistics in one grouped statement instead of a query per row.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::modules::entertainers::adapters::outbound::entertainer_store::{
    EntertainerStore, StoreError,
};
use crate::modules::entertainers::adapters::outbound::summary_queries::EntertainerSummaryQueries;
use crate::modules::entertainers::core::entertainer::{
    Entertainer, EntertainerDetails, EntertainerId, EntertainerUpdate, NewEntertainer,
};
use crate::modules::entertainers::core::summary::EntertainerSummary;

const ENTERTAINER_COLUMNS: &str = "entertainer_id, ent_stage_name, ent_ssn, ent_street_address, \
     ent_city, ent_state, ent_zip_code, ent_phone_number, ent_web_page, ent_email_address, \
     date_entered";

const LIST_SUMMARIES: &str = "\
    SELECT e.entertainer_id, e.ent_stage_name, \
           COALESCE(s.booking_count, 0) AS booking_count, s.last_booked_date \
    FROM entertainers e \
    LEFT JOIN ( \
        SELECT entertainer_id, COUNT(*) AS booking_count, MAX(start_date) AS last_booked_date \
        FROM engagements \
        GROUP BY entertainer_id \
    ) s ON s.entertainer_id = e.entertainer_id \
    ORDER BY e.entertainer_id";

#[derive(sqlx::FromRow)]
struct EntertainerRow {
    entertainer_id: i32,
    ent_stage_name: String,
    ent_ssn: Option<String>,
    ent_street_address: Option<String>,
    ent_city: Option<String>,
    ent_state: Option<String>,
    ent_zip_code: Option<String>,
    ent_phone_number: Option<String>,
    ent_web_page: Option<String>,
    ent_email_address: Option<String>,
    date_entered: NaiveDate,
}

impl From<EntertainerRow> for Entertainer {
    fn from(row: EntertainerRow) -> Self {
        Self {
            id: row.entertainer_id,
            stage_name: row.ent_stage_name,
            details: EntertainerDetails {
                ssn: row.ent_ssn,
                street_address: row.ent_street_address,
                city: row.ent_city,
                state: row.ent_state,
                zip_code: row.ent_zip_code,
                phone_number: row.ent_phone_number,
                web_page: row.ent_web_page,
                email_address: row.ent_email_address,
            },
            date_entered: row.date_entered,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SummaryRow {
    entertainer_id: i32,
    ent_stage_name: String,
    booking_count: i64,
    last_booked_date: Option<NaiveDate>,
}

impl From<SummaryRow> for EntertainerSummary {
    fn from(row: SummaryRow) -> Self {
        Self {
            entertainer_id: row.entertainer_id,
            stage_name: row.ent_stage_name,
            booking_count: row.booking_count,
            last_booked_date: row.last_booked_date,
        }
    }
}

fn backend(error: impl std::fmt::Display) -> StoreError {
    StoreError::Backend(error.to_string())
}

pub struct PostgresEntertainerStore {
    pool: PgPool,
}

impl PostgresEntertainerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(backend)?;
        Ok(Self::new(pool))
    }

    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(backend)
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl EntertainerStore for PostgresEntertainerStore {
    async fn get(&self, id: EntertainerId) -> Result<Option<Entertainer>, StoreError> {
        let row = sqlx::query_as::<_, EntertainerRow>(&format!(
            "SELECT {ENTERTAINER_COLUMNS} FROM entertainers WHERE entertainer_id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)?;
        Ok(row.map(Entertainer::from))
    }

    async fn exists(&self, id: EntertainerId) -> Result<bool, StoreError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM entertainers WHERE entertainer_id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(backend)
    }

    async fn insert(&self, entertainer: NewEntertainer) -> Result<Entertainer, StoreError> {
        let details = &entertainer.details;
        let row = sqlx::query_as::<_, EntertainerRow>(&format!(
            "INSERT INTO entertainers (ent_stage_name, ent_ssn, ent_street_address, ent_city, \
             ent_state, ent_zip_code, ent_phone_number, ent_web_page, ent_email_address, \
             date_entered) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {ENTERTAINER_COLUMNS}"
        ))
        .bind(&entertainer.stage_name)
        .bind(&details.ssn)
        .bind(&details.street_address)
        .bind(&details.city)
        .bind(&details.state)
        .bind(&details.zip_code)
        .bind(&details.phone_number)
        .bind(&details.web_page)
        .bind(&details.email_address)
        .bind(entertainer.date_entered)
        .fetch_one(&self.pool)
        .await
        .map_err(backend)?;
        Ok(row.into())
    }

    async fn update(&self, update: &EntertainerUpdate) -> Result<(), StoreError> {
        let details = &update.details;
        let result = sqlx::query(
            "UPDATE entertainers SET ent_stage_name = $2, ent_ssn = $3, ent_street_address = $4, \
             ent_city = $5, ent_state = $6, ent_zip_code = $7, ent_phone_number = $8, \
             ent_web_page = $9, ent_email_address = $10 \
             WHERE entertainer_id = $1",
        )
        .bind(update.id)
        .bind(&update.stage_name)
        .bind(&details.ssn)
        .bind(&details.street_address)
        .bind(&details.city)
        .bind(&details.state)
        .bind(&details.zip_code)
        .bind(&details.phone_number)
        .bind(&details.web_page)
        .bind(&details.email_address)
        .execute(&self.pool)
        .await
        .map_err(backend)?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NoRowsAffected { id: update.id });
        }
        Ok(())
    }

    async fn delete(&self, id: EntertainerId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM entertainers WHERE entertainer_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(backend)?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl EntertainerSummaryQueries for PostgresEntertainerStore {
    async fn list_summaries(&self) -> Result<Vec<EntertainerSummary>, StoreError> {
        let rows = sqlx::query_as::<_, SummaryRow>(LIST_SUMMARIES)
            .fetch_all(&self.pool)
            .await
            .map_err(backend)?;
        Ok(rows.into_iter().map(EntertainerSummary::from).collect())
    }
}
