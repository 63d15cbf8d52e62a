//! HTTP routes for ranking endpoints.

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::adapters::http::middleware::{voter_middleware, VoterAuthState};
use crate::ports::RankingStore;

use super::handlers::{login, next_pair, standings, submit_vote, RankingHandlers};

/// Creates the ranking router with all endpoints.
///
/// The voter middleware wraps every route; `/login` works without a token
/// because the middleware passes tokenless requests through and login does
/// its own passcode check.
pub fn ranking_routes(store: Arc<dyn RankingStore>) -> Router {
    let handlers = RankingHandlers::new(store.clone());
    let auth_state: VoterAuthState = store;

    Router::new()
        .route("/login", post(login))
        .route("/pair", get(next_pair))
        .route("/votes", post(submit_vote))
        .route("/standings", get(standings))
        .layer(middleware::from_fn_with_state(auth_state, voter_middleware))
        .with_state(handlers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::testing::MockRankingStore;
    use axum::body::Body;
    use http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn app(store: MockRankingStore) -> Router {
        ranking_routes(Arc::new(store))
    }

    #[tokio::test]
    async fn pair_endpoint_sits_behind_the_voter_middleware() {
        let app = app(MockRankingStore::with_items(3).authorize("guest"));

        let denied = app
            .clone()
            .oneshot(Request::builder().uri("/pair").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(denied.status(), StatusCode::UNAUTHORIZED);

        let allowed = app
            .oneshot(
                Request::builder()
                    .uri("/pair")
                    .header(header::AUTHORIZATION, "Bearer guest")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(allowed.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn login_route_works_without_a_token() {
        let app = app(MockRankingStore::with_items(3).authorize("guest"));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/login")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"passcode": "guest"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn unknown_bearer_passcode_is_rejected_by_the_middleware() {
        let app = app(MockRankingStore::with_items(3).authorize("guest"));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/standings")
                    .header(header::AUTHORIZATION, "Bearer stranger")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
