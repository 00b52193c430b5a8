use chrono::{DateTime, Utc};
use rocket::serde::Serialize;

#[derive(Serialize, Debug)]
pub struct PingResponse {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_time: Option<DateTime<Utc>>,
}
