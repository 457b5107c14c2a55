use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::watch;
use user_service::{AppState, Config, PgUserStore, Result, create_router, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    // Загружаем конфигурацию (.env + переменные окружения)
    let config = Config::from_env();
    config.validate().inspect_err(telemetry::report_early_error)?;

    // Инициализация логирования и экспорта трейсов
    let telemetry = telemetry::init(&config).inspect_err(telemetry::report_early_error)?;

    tracing::info!("Connecting to database at {}", config.database_url_redacted());

    // Подключаемся к базе и создаём схему
    let store = PgUserStore::connect(&config.database_url)
        .await
        .map_err(|e| {
            tracing::error!("Failed to connect to database: {}", e);
            e
        })?;
    store.migrate().await.map_err(|e| {
        tracing::error!("Failed to migrate database schema: {}", e);
        e
    })?;

    // Создаём состояние приложения
    let state = Arc::new(AppState::new(Arc::new(store.clone())));

    // Канал завершения (graceful shutdown)
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    // Ожидание Ctrl+C
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            let _ = shutdown_tx.send(true);
        }
    });

    // Создание router
    let app = create_router(state);

    let addr: SocketAddr = config.server_addr.parse().map_err(|e| {
        tracing::error!("Invalid server address: {}", e);
        e
    })?;

    // Настройка адреса для прослушивания
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind address: {}", e);
        e
    })?;

    tracing::info!("User service starting on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - GET  /users - List users");
    tracing::info!("  - POST /users - Create user");

    // Запуск сервера с graceful shutdown
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.changed().await;
            tracing::info!("HTTP server shutting down");
        })
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            e
        });

    // Закрываем пул и отправляем оставшиеся спаны
    store.close().await;
    telemetry.shutdown();

    served?;
    Ok(())
}
