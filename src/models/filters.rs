use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::appointment::Appointment;

/// Dropdown defaults sent by the frontend when a filter is untouched.
/// Either one means "don't filter on this field".
pub const ALL_STATUS: &str = "All Status";
pub const ALL_DOCTORS: &str = "All Doctors";

/// Optional query-string criteria for `GET /appointments`.
///
/// Every field is independently optional; criteria compose by AND,
/// each one narrowing the result set further. Dates are kept as raw
/// strings here so a malformed value never fails deserialization,
/// it just matches nothing.
#[derive(Debug, Deserialize, Default)]
pub struct AppointmentFilters {
    pub date: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<String>,
    pub doctor_name: Option<String>,
    pub search_query: Option<String>,
}

impl AppointmentFilters {
    /// Narrows `appointments` down to the records matching every present
    /// criterion, preserving insertion order.
    pub fn apply(&self, mut appointments: Vec<Appointment>) -> Vec<Appointment> {
        if let Some(raw) = given(&self.date) {
            let wanted = parse_date(raw);
            appointments.retain(|apt| wanted.is_some_and(|d| apt.date == d));
        }

        if let Some(raw) = given(&self.start_date) {
            let lo = parse_date(raw);
            appointments.retain(|apt| lo.is_some_and(|d| apt.date >= d));
        }

        if let Some(raw) = given(&self.end_date) {
            let hi = parse_date(raw);
            appointments.retain(|apt| hi.is_some_and(|d| apt.date <= d));
        }

        if let Some(status) = given(&self.status) {
            if status != ALL_STATUS {
                appointments.retain(|apt| apt.status == status);
            }
        }

        if let Some(doctor) = given(&self.doctor_name) {
            if doctor != ALL_DOCTORS {
                appointments.retain(|apt| apt.doctor_name == doctor);
            }
        }

        if let Some(query) = given(&self.search_query) {
            let query = query.to_lowercase();
            appointments.retain(|apt| {
                apt.name.to_lowercase().contains(&query)
                    || apt.doctor_name.to_lowercase().contains(&query)
            });
        }

        appointments
    }
}

/// Empty query-string values (`?status=`) count as absent, same as the
/// original frontend which only sends populated filters.
fn given(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
