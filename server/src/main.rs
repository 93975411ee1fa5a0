// Forbid unwrap() in production code to prevent panics from bad state.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]

//! Demo HTTP server: serves the mock API as JSON.
//!
//! Every route delegates to a [`MockApi`] operation and returns its
//! envelope verbatim, so the HTTP surface and the in-process surface
//! stay byte-compatible.

use std::net::SocketAddr;
use std::sync::{Arc, RwLock};

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cabana_server::config::ServerConfig;
use cabana_server::types::{
    AnalyticsPeriod, ApiResponse, AuthPayload, ConversationId, ConversationView, CreatorAnalytics,
    LoginCredentials, Notification, NotificationId, PaginatedResponse, PostId, PostView,
    SendMessageData, SignupData, SubscriptionTier, SubscriptionView, TipData, Transaction, User,
    UserId,
};
use cabana_server::{MockApi, Store, fixtures};

type Api = Arc<MockApi>;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cabana_server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment variables
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!(
        "Loaded configuration: listen_port={}, seed={}",
        config.listen_port,
        config.seed
    );

    // Seed the store and stand up the API over it
    let mut store = Store::new();
    fixtures::seed_database(&mut store, config.seed);
    let api: Api = Arc::new(MockApi::new(
        Arc::new(RwLock::new(store)),
        config.api.clone(),
        config.seed,
    ));

    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/me", get(current_user))
        .route("/api/auth/logout", post(logout))
        .route("/api/users/{id}", get(user))
        .route("/api/users/{id}/subscriptions", get(my_subscriptions))
        .route("/api/users/{id}/transactions", get(transactions))
        .route("/api/users/{id}/conversations", get(conversations))
        .route("/api/users/{id}/notifications", get(notifications))
        .route(
            "/api/users/{id}/notifications/read-all",
            post(mark_all_notifications_read),
        )
        .route("/api/creators", get(creators))
        .route("/api/creators/{id}/posts", get(posts_by_creator))
        .route("/api/feed/{id}", get(feed))
        .route("/api/posts", post(create_post))
        .route("/api/posts/{id}", get(post_by_id).delete(delete_post))
        .route("/api/posts/{id}/like", post(toggle_like))
        .route("/api/posts/{id}/comments", get(comments).post(add_comment))
        .route("/api/subscribers/{id}", get(subscribers))
        .route("/api/subscriptions/{id}/cancel", post(cancel_subscription))
        .route("/api/subscribe", post(subscribe))
        .route("/api/tips", post(send_tip))
        .route("/api/messages", post(send_message))
        .route("/api/messages/{id}", get(messages))
        .route("/api/messages/{id}/read", post(mark_read))
        .route("/api/notifications/{id}/read", post(mark_notification_read))
        .route("/api/analytics/{id}", get(analytics))
        .route("/api/demo/reset", post(demo_reset))
        .with_state(api);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.listen_port));
    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to bind: {e}");
            std::process::exit(1);
        });

    axum::serve(listener, app).await.unwrap_or_else(|e| {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    });
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageQuery {
    page: Option<usize>,
    page_size: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct PeriodQuery {
    period: Option<AnalyticsPeriod>,
}

#[derive(Debug, Deserialize)]
struct SeedQuery {
    seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubscribeBody {
    fan_id: UserId,
    creator_id: UserId,
    tier: SubscriptionTier,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TipBody {
    fan_id: UserId,
    #[serde(flatten)]
    tip: TipData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendMessageBody {
    user_id: UserId,
    #[serde(flatten)]
    data: SendMessageData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeleteQuery {
    user_id: UserId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatePostBody {
    user_id: UserId,
    #[serde(flatten)]
    data: cabana_server::types::CreatePostData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddCommentBody {
    user_id: UserId,
    content: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MarkReadQuery {
    user_id: UserId,
}

/// Pull the bearer token out of the Authorization header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

async fn login(
    State(api): State<Api>,
    Json(credentials): Json<LoginCredentials>,
) -> Json<ApiResponse<AuthPayload>> {
    Json(api.login(&credentials).await)
}

async fn signup(
    State(api): State<Api>,
    Json(data): Json<SignupData>,
) -> Json<ApiResponse<AuthPayload>> {
    Json(api.signup(&data).await)
}

async fn current_user(State(api): State<Api>, headers: HeaderMap) -> Json<ApiResponse<User>> {
    match bearer_token(&headers) {
        Some(token) => Json(api.get_current_user(token).await),
        None => Json(ApiResponse::error("Invalid session")),
    }
}

async fn logout(State(api): State<Api>) -> Json<ApiResponse<()>> {
    Json(api.logout().await)
}

async fn user(State(api): State<Api>, Path(id): Path<UserId>) -> Json<ApiResponse<User>> {
    Json(api.get_user(&id).await)
}

async fn creators(State(api): State<Api>) -> Json<ApiResponse<Vec<User>>> {
    Json(api.get_creators().await)
}

async fn feed(
    State(api): State<Api>,
    Path(user_id): Path<UserId>,
    Query(query): Query<PageQuery>,
) -> Json<ApiResponse<PaginatedResponse<PostView>>> {
    let page = query.page.unwrap_or(1);
    let page_size = query.page_size.unwrap_or(20);
    Json(api.get_feed(&user_id, page, page_size).await)
}

async fn post_by_id(State(api): State<Api>, Path(id): Path<PostId>) -> Json<ApiResponse<PostView>> {
    Json(api.get_post(&id).await)
}

async fn delete_post(
    State(api): State<Api>,
    Path(id): Path<PostId>,
    Query(query): Query<DeleteQuery>,
) -> Json<ApiResponse<()>> {
    Json(api.delete_post(&id, &query.user_id).await)
}

async fn toggle_like(State(api): State<Api>, Path(id): Path<PostId>) -> Json<ApiResponse<PostView>> {
    Json(api.toggle_like(&id).await)
}

async fn comments(
    State(api): State<Api>,
    Path(id): Path<PostId>,
) -> Json<ApiResponse<Vec<cabana_server::types::CommentView>>> {
    Json(api.get_comments(&id).await)
}

async fn create_post(
    State(api): State<Api>,
    Json(body): Json<CreatePostBody>,
) -> Json<ApiResponse<PostView>> {
    Json(api.create_post(&body.user_id, body.data).await)
}

async fn add_comment(
    State(api): State<Api>,
    Path(id): Path<PostId>,
    Json(body): Json<AddCommentBody>,
) -> Json<ApiResponse<cabana_server::types::CommentView>> {
    Json(api.add_comment(&id, &body.user_id, &body.content).await)
}

async fn posts_by_creator(
    State(api): State<Api>,
    Path(id): Path<UserId>,
) -> Json<ApiResponse<Vec<PostView>>> {
    Json(api.get_posts_by_creator(&id).await)
}

async fn my_subscriptions(
    State(api): State<Api>,
    Path(fan_id): Path<UserId>,
) -> Json<ApiResponse<Vec<SubscriptionView>>> {
    Json(api.get_my_subscriptions(&fan_id).await)
}

async fn cancel_subscription(
    State(api): State<Api>,
    Path(id): Path<cabana_server::types::SubscriptionId>,
) -> Json<ApiResponse<SubscriptionView>> {
    Json(api.cancel_subscription(&id).await)
}

async fn subscribers(
    State(api): State<Api>,
    Path(creator_id): Path<UserId>,
) -> Json<ApiResponse<Vec<SubscriptionView>>> {
    Json(api.get_subscribers(&creator_id).await)
}

async fn subscribe(
    State(api): State<Api>,
    Json(body): Json<SubscribeBody>,
) -> Json<ApiResponse<SubscriptionView>> {
    Json(api.subscribe(&body.fan_id, &body.creator_id, body.tier).await)
}

async fn send_tip(
    State(api): State<Api>,
    Json(body): Json<TipBody>,
) -> Json<ApiResponse<Transaction>> {
    Json(api.send_tip(&body.fan_id, &body.tip).await)
}

async fn transactions(
    State(api): State<Api>,
    Path(user_id): Path<UserId>,
) -> Json<ApiResponse<Vec<Transaction>>> {
    Json(api.get_transactions(&user_id).await)
}

async fn conversations(
    State(api): State<Api>,
    Path(user_id): Path<UserId>,
) -> Json<ApiResponse<Vec<ConversationView>>> {
    Json(api.get_conversations(&user_id).await)
}

async fn messages(
    State(api): State<Api>,
    Path(conversation_id): Path<ConversationId>,
) -> Json<ApiResponse<Vec<cabana_server::types::MessageView>>> {
    Json(api.get_messages(&conversation_id).await)
}

async fn send_message(
    State(api): State<Api>,
    Json(body): Json<SendMessageBody>,
) -> Json<ApiResponse<cabana_server::types::MessageView>> {
    Json(api.send_message(&body.user_id, &body.data).await)
}

async fn mark_read(
    State(api): State<Api>,
    Path(conversation_id): Path<ConversationId>,
    Query(query): Query<MarkReadQuery>,
) -> Json<ApiResponse<()>> {
    Json(api.mark_as_read(&conversation_id, &query.user_id).await)
}

async fn notifications(
    State(api): State<Api>,
    Path(user_id): Path<UserId>,
) -> Json<ApiResponse<Vec<Notification>>> {
    Json(api.get_notifications(&user_id).await)
}

async fn mark_notification_read(
    State(api): State<Api>,
    Path(id): Path<NotificationId>,
) -> Json<ApiResponse<Notification>> {
    Json(api.mark_notification_read(&id).await)
}

async fn mark_all_notifications_read(
    State(api): State<Api>,
    Path(user_id): Path<UserId>,
) -> Json<ApiResponse<()>> {
    Json(api.mark_all_notifications_read(&user_id).await)
}

async fn analytics(
    State(api): State<Api>,
    Path(creator_id): Path<UserId>,
    Query(query): Query<PeriodQuery>,
) -> Json<ApiResponse<CreatorAnalytics>> {
    let period = query.period.unwrap_or(AnalyticsPeriod::Month);
    Json(api.get_analytics(&creator_id, period).await)
}

async fn demo_reset(
    State(api): State<Api>,
    Query(query): Query<SeedQuery>,
) -> Json<ApiResponse<()>> {
    Json(api.reset_demo(query.seed.unwrap_or(fixtures::DEFAULT_SEED)))
}
