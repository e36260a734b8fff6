//! `GET /api/settings`: client configuration derived from the server's
//! environment (extraction endpoint and accepted upload types).

use actix_web::web::{self, get, scope};
use actix_web::{HttpResponse, Scope};
use common::model::settings::ClientSettings;

const API_PATH: &str = "/api/settings";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(process))
}

async fn process(settings: web::Data<ClientSettings>) -> HttpResponse {
    HttpResponse::Ok().json(settings.get_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn serves_configured_extraction_url() {
        let settings = ClientSettings {
            extraction_url: "http://localhost:5000/process-document".to_string(),
            ..ClientSettings::default()
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(settings.clone()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/settings").to_request();
        let served: ClientSettings = test::call_and_read_body_json(&app, req).await;
        assert_eq!(served, settings);
    }
}
