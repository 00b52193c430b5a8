use chrono::{DateTime, NaiveDate, Utc};
use rocket::serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    #[default]
    Casamento,
    Aniversario,
    Corporativo,
    Outros,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Casamento => "casamento",
            EventType::Aniversario => "aniversario",
            EventType::Corporativo => "corporativo",
            EventType::Outros => "outros",
        }
    }
}

impl From<&str> for EventType {
    fn from(value: &str) -> Self {
        match value {
            "casamento" => EventType::Casamento,
            "aniversario" => EventType::Aniversario,
            "corporativo" => EventType::Corporativo,
            _ => EventType::Outros,
        }
    }
}

/// A selectable line item priced per guest.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BudgetService {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub unit_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Budget {
    pub id: Uuid,
    pub client_name: String,
    pub event_date: NaiveDate,
    pub event_type: EventType,
    pub location: Option<String>,
    pub guest_count: i32,
    pub services: Vec<BudgetService>,
    pub discount_percent: f64,
    pub observations: String,
    /// Derived; recomputed on every create, never taken from the client.
    pub total: f64,
    pub created_at: DateTime<Utc>,
}

/// Create payload. Required fields are optional at the deserialization layer
/// so that a missing field surfaces as a 400 validation error rather than a
/// JSON parse failure.
#[derive(Deserialize, Validate, Debug)]
pub struct BudgetRequest {
    #[validate(required, length(min = 1))]
    pub client_name: Option<String>,
    #[validate(required)]
    pub event_date: Option<NaiveDate>,
    #[serde(default)]
    pub event_type: EventType,
    #[serde(default)]
    pub location: Option<String>,
    #[validate(required, range(min = 0))]
    pub guest_count: Option<i32>,
    #[serde(default)]
    pub services: Vec<BudgetService>,
    #[serde(default)]
    pub discount_percent: f64,
    #[serde(default)]
    pub observations: String,
}

#[derive(Serialize, Debug)]
pub struct CreatedResponse {
    pub id: Uuid,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_type_round_trips_through_str() {
        for event_type in [
            EventType::Casamento,
            EventType::Aniversario,
            EventType::Corporativo,
            EventType::Outros,
        ] {
            assert_eq!(EventType::from(event_type.as_str()), event_type);
        }
    }

    #[test]
    fn unknown_event_type_falls_back_to_outros() {
        assert_eq!(EventType::from("formatura"), EventType::Outros);
    }

    #[test]
    fn request_with_all_required_fields_validates() {
        let request: BudgetRequest = serde_json::from_value(serde_json::json!({
            "client_name": "Maria",
            "event_date": "2025-06-10",
            "guest_count": 100
        }))
        .unwrap();

        assert!(validator::Validate::validate(&request).is_ok());
        assert_eq!(request.event_type, EventType::Casamento);
        assert!(request.services.is_empty());
        assert_eq!(request.discount_percent, 0.0);
        assert_eq!(request.observations, "");
    }

    #[test]
    fn request_missing_client_name_fails_validation() {
        let request: BudgetRequest = serde_json::from_value(serde_json::json!({
            "event_date": "2025-06-10",
            "guest_count": 100
        }))
        .unwrap();

        assert!(validator::Validate::validate(&request).is_err());
    }

    #[test]
    fn request_with_negative_guest_count_fails_validation() {
        let request: BudgetRequest = serde_json::from_value(serde_json::json!({
            "client_name": "Maria",
            "event_date": "2025-06-10",
            "guest_count": -1
        }))
        .unwrap();

        assert!(validator::Validate::validate(&request).is_err());
    }

    #[test]
    fn service_defaults_apply_when_fields_absent() {
        let service: BudgetService = serde_json::from_value(serde_json::json!({
            "id": "buffet",
            "name": "Buffet completo"
        }))
        .unwrap();

        assert!(!service.selected);
        assert_eq!(service.unit_value, 0.0);
    }
}
