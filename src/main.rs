use config::{Config, Environment};
use dotenvy::dotenv;

use minegocio_clientes::models::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let settings = Config::builder()
        .set_default("address", "127.0.0.1")
        .and_then(|builder| builder.set_default("port", 8080))
        .and_then(|builder| builder.set_default("database_url", "minegocio.db"))
        .map(|builder| builder.add_source(Environment::default()))
        .and_then(|builder| builder.build())
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {e}")))?;

    let server_config: ServerConfig = settings
        .try_deserialize()
        .map_err(|e| std::io::Error::other(format!("Failed to parse configuration: {e}")))?;

    log::info!(
        "Starting server on {}:{}",
        server_config.address,
        server_config.port
    );

    minegocio_clientes::run(server_config).await
}
