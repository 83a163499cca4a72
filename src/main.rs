use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use login_tracker::{
    AppState, activity::ActivityLog, config::Config, geolocation::IpApiClient, router,
    session::SessionKeys, views::Views,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载配置
    let config =
        Config::from_env().expect("Failed to load configuration (SESSION_SECRET is required)");

    let activity = ActivityLog::open(&config.activity_log_path)
        .await
        .expect("Failed to open activity log");
    tracing::info!("Recording activity to {}", activity.path().display());

    let geolocation = IpApiClient::new(&config.geolocation_url, config.geolocation_timeout())
        .expect("Failed to build geolocation client");

    let views = Views::new().expect("Failed to load templates");

    // 设置应用状态
    let state = AppState {
        sessions: SessionKeys::new(&config.session_secret, config.session_expiration()),
        activity: Arc::new(activity),
        geolocation: Arc::new(geolocation),
        views: Arc::new(views),
    };

    let app = router::create_router(state);

    // 启动服务器
    let addr = SocketAddr::new(
        config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to dual-stack default");
            IpAddr::V6(std::net::Ipv6Addr::UNSPECIFIED)
        }),
        config.server_port,
    );
    tracing::info!("Server listening on {}", addr);
    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("Failed to start server");
}
