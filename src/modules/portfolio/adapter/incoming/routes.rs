use actix_web::{get, web, Responder};

use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.portfolio.snapshot().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::portfolio::application::portfolio_service::MockPortfolioUseCase;
    use crate::modules::portfolio::domain::Portfolio;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn empty_snapshot_serializes_nulls() {
        let mut mock = MockPortfolioUseCase::new();
        mock.expect_snapshot()
            .times(1)
            .returning(Portfolio::default);

        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_portfolio(mock).build())
                .service(get_portfolio_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/portfolio").to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(body["data"]["hero"].is_null());
        assert!(body["data"]["blogs"].is_null());
    }
}
