use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One appointment entry, shaped to match the frontend's JSON
/// (camelCase keys, ISO `YYYY-MM-DD` dates).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    pub time: String,
    pub duration: String,
    pub doctor_name: String,
    pub status: String,
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
}

/// PATCH body for the status route: `{ "status": "Completed" }`
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}
