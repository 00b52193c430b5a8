use crate::database::budget::BudgetRepository;
use crate::error::app_error::AppError;
use crate::models::budget::{Budget, BudgetRequest};
use crate::service::pricing;
use chrono::{DateTime, Utc};
use std::sync::Mutex;
use uuid::Uuid;
use validator::Validate;

/// In-memory budget store used by the repository contract tests. Satisfies
/// the same `BudgetRepository` trait as the Postgres backing.
#[derive(Default)]
pub struct MemoryRepository {
    records: Mutex<Vec<Budget>>,
}

impl MemoryRepository {
    /// Same as `create_budget` but with a caller-chosen creation instant,
    /// so ordering and tie-break behavior can be pinned down in tests.
    pub fn create_budget_at(&self, request: &BudgetRequest, created_at: DateTime<Utc>) -> Result<Budget, AppError> {
        request.validate()?;

        let guest_count = request.guest_count.unwrap_or_default();
        let discount_percent = pricing::clamp_discount(request.discount_percent);

        let budget = Budget {
            id: Uuid::new_v4(),
            client_name: request.client_name.clone().unwrap_or_default(),
            event_date: request.event_date.expect("validated above"),
            event_type: request.event_type,
            location: request.location.clone(),
            guest_count,
            services: request.services.clone(),
            discount_percent,
            observations: request.observations.clone(),
            total: pricing::compute_total(guest_count, &request.services, discount_percent),
            created_at,
        };

        self.records.lock().expect("lock poisoned").push(budget.clone());
        Ok(budget)
    }
}

#[async_trait::async_trait]
impl BudgetRepository for MemoryRepository {
    async fn create_budget(&self, request: &BudgetRequest) -> Result<Budget, AppError> {
        self.create_budget_at(request, Utc::now())
    }

    async fn get_budget_by_id(&self, id: &Uuid) -> Result<Option<Budget>, AppError> {
        let records = self.records.lock().expect("lock poisoned");
        Ok(records.iter().find(|b| &b.id == id).cloned())
    }

    async fn list_budgets(&self) -> Result<Vec<Budget>, AppError> {
        let records = self.records.lock().expect("lock poisoned");
        let mut budgets = records.clone();
        // stable sort: equal created_at keeps insertion order
        budgets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(budgets)
    }

    async fn delete_budget(&self, id: &Uuid) -> Result<(), AppError> {
        let mut records = self.records.lock().expect("lock poisoned");
        records.retain(|b| &b.id != id);
        Ok(())
    }
}
