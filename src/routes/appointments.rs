use crate::handlers::appointments::{get_appointments, update_appointment_status};
use crate::models::appointment::StatusUpdate;
use crate::models::filters::AppointmentFilters;
use crate::store::AppointmentStore;
use actix_web::{HttpResponse, Responder, get, patch, web};
use serde_json::json;

#[get("")]
async fn list(
    store: web::Data<AppointmentStore>,
    query: web::Query<AppointmentFilters>,
) -> impl Responder {
    HttpResponse::Ok().json(get_appointments(&store, &query))
}

#[patch("/{id}/status")]
async fn update_status(
    store: web::Data<AppointmentStore>,
    path: web::Path<String>,
    body: web::Json<StatusUpdate>,
) -> impl Responder {
    let id = path.into_inner();

    match update_appointment_status(&store, &id, &body.status) {
        Some(updated) => HttpResponse::Ok().json(updated),
        None => HttpResponse::NotFound().json(json!({ "detail": "Appointment not found" })),
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(list).service(update_status);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::appointment::Appointment;
    use actix_web::{App, test};

    macro_rules! spawn_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(AppointmentStore::with_sample_data()))
                    .service(web::scope("/appointments").configure(init)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn list_without_filters_returns_the_whole_store() {
        let app = spawn_app!();

        let req = test::TestRequest::get().uri("/appointments").to_request();
        let body: Vec<Appointment> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.len(), 10);
        assert_eq!(body[0].id, "1");
        assert_eq!(body[9].id, "10");
    }

    #[actix_web::test]
    async fn list_applies_query_string_filters() {
        let app = spawn_app!();

        let req = test::TestRequest::get()
            .uri("/appointments?doctor_name=Dr.%20Jones&status=Confirmed")
            .to_request();
        let body: Vec<Appointment> = test::call_and_read_body_json(&app, req).await;

        assert!(!body.is_empty());
        for apt in &body {
            assert_eq!(apt.doctor_name, "Dr. Jones");
            assert_eq!(apt.status, "Confirmed");
        }
    }

    #[actix_web::test]
    async fn list_with_sentinel_filters_returns_everything() {
        let app = spawn_app!();

        let req = test::TestRequest::get()
            .uri("/appointments?status=All%20Status&doctor_name=All%20Doctors")
            .to_request();
        let body: Vec<Appointment> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.len(), 10);
    }

    #[actix_web::test]
    async fn search_query_matches_doctor_names_case_insensitively() {
        let app = spawn_app!();

        let req = test::TestRequest::get()
            .uri("/appointments?search_query=dr.%20smith")
            .to_request();
        let body: Vec<Appointment> = test::call_and_read_body_json(&app, req).await;

        assert!(!body.is_empty());
        for apt in &body {
            assert!(apt.doctor_name.to_lowercase().contains("smith"));
        }
    }

    #[actix_web::test]
    async fn patch_updates_the_status_and_later_reads_see_it() {
        let app = spawn_app!();

        let req = test::TestRequest::patch()
            .uri("/appointments/3/status")
            .set_json(json!({ "status": "Completed" }))
            .to_request();
        let updated: Appointment = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.id, "3");
        assert_eq!(updated.status, "Completed");

        let req = test::TestRequest::get().uri("/appointments").to_request();
        let body: Vec<Appointment> = test::call_and_read_body_json(&app, req).await;
        let third = body.iter().find(|apt| apt.id == "3").unwrap();
        assert_eq!(third.status, "Completed");
    }

    #[actix_web::test]
    async fn patch_on_unknown_id_is_a_404_with_detail() {
        let app = spawn_app!();

        let req = test::TestRequest::patch()
            .uri("/appointments/999/status")
            .set_json(json!({ "status": "X" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), actix_web::http::StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["detail"], "Appointment not found");

        let req = test::TestRequest::get().uri("/appointments").to_request();
        let body: Vec<Appointment> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.len(), 10);
    }
}
