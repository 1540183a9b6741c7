use std::net::TcpListener;
use std::time::Duration;

use sqlx::sqlite::SqlitePoolOptions;

use laliga_tracker_backend::config::settings::get_config;
use laliga_tracker_backend::db::seed_if_empty;
use laliga_tracker_backend::run;
use laliga_tracker_backend::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Panic if we can't read the config
    let config = get_config().expect("Failed to read the config.");

    let subscriber = get_subscriber(
        "laliga-tracker-backend".into(),
        config.application.log_level.clone(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let connect_options = config
        .database
        .connect_options()
        .expect("Invalid database configuration");
    let connection_pool = SqlitePoolOptions::new()
        .max_connections(8)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(connect_options)
        .await
        .expect("Failed to open the SQLite database");

    // Schema initialization happens once here, never inside request handling.
    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to migrate the database");
    seed_if_empty(&connection_pool)
        .await
        .expect("Failed to seed the database");

    let address = format!("{}:{}", config.application.host, config.application.port);
    let listener = TcpListener::bind(&address)?;
    tracing::info!("Listening on {}", address);

    run(listener, connection_pool)?.await
}
