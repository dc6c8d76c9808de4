use tracing::info;

use crate::models::appointment::Appointment;
use crate::models::filters::AppointmentFilters;
use crate::store::AppointmentStore;

pub fn get_appointments(
    store: &AppointmentStore,
    filters: &AppointmentFilters,
) -> Vec<Appointment> {
    store.list(filters)
}

/// In a real deployment this write would go to the database and fan out to
/// subscribed clients; here it only touches the shared in-memory store.
pub fn update_appointment_status(
    store: &AppointmentStore,
    id: &str,
    new_status: &str,
) -> Option<Appointment> {
    let updated = store.update_status(id, new_status);
    if updated.is_some() {
        info!("appointment {} moved to status {:?}", id, new_status);
    }
    updated
}
