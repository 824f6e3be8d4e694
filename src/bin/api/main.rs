use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use env_logger::Env;
use mentorhub::app_config::APP_CONFIG;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let database_url = std::env::var("DATABASE_URL")
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| APP_CONFIG.database.url.clone());
    anyhow::ensure!(
        !database_url.is_empty(),
        "DATABASE_URL must be set (env or config.toml)"
    );

    let db = mentorhub::db::connect(&database_url).await?;

    let bind = APP_CONFIG.server.bind.clone();
    log::info!("listening on {}", bind);

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(db.clone()))
            .wrap(Logger::new("%a %{User-Agent}i"))
            .configure(mentorhub::web::configure)
    })
    .bind(&bind)?
    .run()
    .await?;

    Ok(())
}
