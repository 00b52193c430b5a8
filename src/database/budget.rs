use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::models::budget::{Budget, BudgetRequest, BudgetService, EventType};
use crate::service::pricing;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::types::Json;
use uuid::Uuid;
use validator::Validate;

#[async_trait::async_trait]
pub trait BudgetRepository {
    /// Validates the request, recomputes the total server-side and persists
    /// a new budget with a generated id.
    async fn create_budget(&self, request: &BudgetRequest) -> Result<Budget, AppError>;
    async fn get_budget_by_id(&self, id: &Uuid) -> Result<Option<Budget>, AppError>;
    /// All budgets, newest first. Budgets created at the same instant keep
    /// their insertion order.
    async fn list_budgets(&self) -> Result<Vec<Budget>, AppError>;
    /// Idempotent; deleting an absent id is not an error.
    async fn delete_budget(&self, id: &Uuid) -> Result<(), AppError>;
}

#[derive(sqlx::FromRow)]
struct BudgetRow {
    id: Uuid,
    client_name: String,
    event_date: NaiveDate,
    event_type: String,
    location: Option<String>,
    guest_count: i32,
    services: Json<Vec<BudgetService>>,
    discount_percent: f64,
    observations: String,
    total: f64,
    created_at: DateTime<Utc>,
}

impl From<BudgetRow> for Budget {
    fn from(row: BudgetRow) -> Self {
        Self {
            id: row.id,
            client_name: row.client_name,
            event_date: row.event_date,
            event_type: EventType::from(row.event_type.as_str()),
            location: row.location,
            guest_count: row.guest_count,
            services: row.services.0,
            discount_percent: row.discount_percent,
            observations: row.observations,
            total: row.total,
            created_at: row.created_at,
        }
    }
}

const BUDGET_COLUMNS: &str =
    "id, client_name, event_date, event_type, location, guest_count, services, discount_percent, observations, total, created_at";

#[async_trait::async_trait]
impl BudgetRepository for PostgresRepository {
    async fn create_budget(&self, request: &BudgetRequest) -> Result<Budget, AppError> {
        request.validate()?;

        let guest_count = request.guest_count.unwrap_or_default();
        let discount_percent = pricing::clamp_discount(request.discount_percent);
        let total = pricing::compute_total(guest_count, &request.services, discount_percent);

        let row = sqlx::query_as::<_, BudgetRow>(&format!(
            r#"
            INSERT INTO budgets (id, client_name, event_date, event_type, location, guest_count, services, discount_percent, observations, total)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {BUDGET_COLUMNS}
            "#,
        ))
        .bind(Uuid::new_v4())
        .bind(&request.client_name)
        .bind(request.event_date)
        .bind(request.event_type.as_str())
        .bind(&request.location)
        .bind(guest_count)
        .bind(Json(&request.services))
        .bind(discount_percent)
        .bind(&request.observations)
        .bind(total)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn get_budget_by_id(&self, id: &Uuid) -> Result<Option<Budget>, AppError> {
        let row = sqlx::query_as::<_, BudgetRow>(&format!(
            r#"
            SELECT {BUDGET_COLUMNS}
            FROM budgets
            WHERE id = $1
            "#,
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Budget::from))
    }

    async fn list_budgets(&self) -> Result<Vec<Budget>, AppError> {
        let rows = sqlx::query_as::<_, BudgetRow>(&format!(
            r#"
            SELECT {BUDGET_COLUMNS}
            FROM budgets
            ORDER BY created_at DESC, position ASC
            "#,
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Budget::from).collect())
    }

    async fn delete_budget(&self, id: &Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM budgets WHERE id = $1").bind(id).execute(&self.pool).await?;

        Ok(())
    }
}
