use std::sync::RwLock;

use chrono::{Days, Local, NaiveDate};
use tracing::warn;

use crate::models::appointment::Appointment;
use crate::models::filters::AppointmentFilters;

/// In-memory appointment collection, seeded once at startup and shared
/// across workers via `web::Data`. The lock is only there because actix
/// serves from multiple threads; there is no transactional behavior.
pub struct AppointmentStore {
    appointments: RwLock<Vec<Appointment>>,
}

impl AppointmentStore {
    pub fn new(appointments: Vec<Appointment>) -> Self {
        AppointmentStore {
            appointments: RwLock::new(appointments),
        }
    }

    /// Store preloaded with the demo dataset, dated around the current day.
    pub fn with_sample_data() -> Self {
        Self::new(sample_appointments(Local::now().date_naive()))
    }

    /// Snapshot of the records matching `filters`, insertion order intact.
    /// The store itself is never mutated by a query.
    pub fn list(&self, filters: &AppointmentFilters) -> Vec<Appointment> {
        let appointments = self.appointments.read().unwrap_or_else(|e| e.into_inner());
        filters.apply(appointments.clone())
    }

    /// Overwrites the status of the record with `id`, returning the updated
    /// record. `None` means no such id; nothing is touched in that case.
    /// The new status is accepted verbatim, the label set is open.
    pub fn update_status(&self, id: &str, new_status: &str) -> Option<Appointment> {
        let mut appointments = self.appointments.write().unwrap_or_else(|e| e.into_inner());
        match appointments.iter_mut().find(|apt| apt.id == id) {
            Some(apt) => {
                apt.status = new_status.to_string();
                Some(apt.clone())
            }
            None => {
                warn!("status update for unknown appointment id {}", id);
                None
            }
        }
    }
}

/// The mock dataset the original service hardcodes, pinned to offsets from
/// `today` so the "today"/"upcoming"/"past" tabs always have rows to show.
fn sample_appointments(today: NaiveDate) -> Vec<Appointment> {
    let yesterday = today - Days::new(1);
    let tomorrow = today + Days::new(1);
    let in_two_days = today + Days::new(2);

    let rows: [(&str, &str, NaiveDate, &str, &str, &str, &str, &str); 10] = [
        ("1", "John Doe", today, "09:00 AM", "30 min", "Dr. Smith", "Upcoming", "In-Person"),
        ("2", "Jane Roe", today, "10:00 AM", "45 min", "Dr. Jones", "Confirmed", "Video"),
        ("3", "Alice Bob", today, "11:00 AM", "15 min", "Dr. Smith", "Completed", "In-Person"),
        ("4", "Charlie Day", tomorrow, "09:30 AM", "30 min", "Dr. Brown", "Scheduled", "Video"),
        ("5", "Aretha Franklin", tomorrow, "02:00 PM", "60 min", "Dr. Jones", "Upcoming", "In-Person"),
        ("6", "Elvis Presley", yesterday, "10:00 AM", "30 min", "Dr. Smith", "Cancelled", "In-Person"),
        ("7", "Freddie Mercury", yesterday, "11:00 AM", "30 min", "Dr. Brown", "Completed", "Video"),
        ("8", "David Bowie", today, "04:00 PM", "30 min", "Dr. Smith", "Upcoming", "In-Person"),
        ("9", "Elton John", in_two_days, "09:00 AM", "45 min", "Dr. Jones", "Confirmed", "Video"),
        ("10", "Stevie Wonder", today, "01:00 PM", "30 min", "Dr. Brown", "Scheduled", "In-Person"),
    ];

    rows.into_iter()
        .map(
            |(id, name, date, time, duration, doctor_name, status, mode)| Appointment {
                id: id.to_string(),
                name: name.to_string(),
                date,
                time: time.to_string(),
                duration: duration.to_string(),
                doctor_name: doctor_name.to_string(),
                status: status.to_string(),
                mode: mode.to_string(),
                reason: None,
                notes: None,
                contact_phone: None,
                contact_email: None,
            },
        )
        .collect()
}
