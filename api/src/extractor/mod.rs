use axum::{async_trait, extract::FromRequestParts, http::request::Parts, RequestPartsExt};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use kernel::model::{auth::AccessToken, id::UserId};
use registry::AppRegistry;
use shared::error::AppError;

pub struct AuthorizedUser {
    pub access_token: AccessToken,
    pub user_id: UserId,
}

impl AuthorizedUser {
    pub fn id(&self) -> UserId {
        self.user_id
    }
}

#[async_trait]
impl FromRequestParts<AppRegistry> for AuthorizedUser {
    type Rejection = AppError;

    // Bearer トークンをセッションストアで引いてユーザー ID に解決する。
    // ハンドラ以降には生のトークンを渡さない
    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| AppError::UnauthenticatedError)?;

        let access_token = AccessToken(bearer.token().to_string());
        let user_id = registry
            .auth_repository()
            .fetch_user_id_from_token(&access_token)
            .await?
            .ok_or(AppError::UnauthenticatedError)?;

        Ok(Self {
            access_token,
            user_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::route::{booking::build_booking_routers, hotel::build_hotel_routers};
    use adapter::{database::connect_database_with, redis::RedisClient};
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
        Router,
    };
    use registry::AppRegistry;
    use shared::config::{DatabaseConfig, RedisConfig};
    use std::sync::Arc;
    use tower::ServiceExt;

    // 接続は遅延初期化なので、トークン無しの経路ならストレージ不要で動く
    fn test_app() -> Router {
        let database = DatabaseConfig {
            host: "localhost".into(),
            port: 5432,
            username: "app".into(),
            password: "passwd".into(),
            database: "app".into(),
        };
        let redis = RedisConfig {
            host: "localhost".into(),
            port: 6379,
        };
        let pool = connect_database_with(&database);
        let kv = Arc::new(RedisClient::new(&redis).unwrap());
        let registry = AppRegistry::new(pool, kv);

        Router::new()
            .merge(build_booking_routers())
            .merge(build_hotel_routers())
            .with_state(registry)
    }

    #[tokio::test]
    async fn requests_without_a_bearer_token_are_unauthorized() {
        for (method, uri) in [
            (Method::POST, "/booking"),
            (Method::GET, "/booking"),
            (Method::PUT, "/booking/1"),
            (Method::GET, "/hotels"),
            (Method::GET, "/hotels/1"),
        ] {
            let req = Request::builder()
                .method(method)
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from("{}"))
                .unwrap();

            let res = test_app().oneshot(req).await.unwrap();

            assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        }
    }
}
