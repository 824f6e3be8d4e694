//! Database connection setup
//!
//! The connection handle is created once at startup and injected into the
//! actix app data; service functions receive it explicitly rather than
//! reaching for a process-wide pool.

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Connect to the relational store.
pub async fn connect(url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(url.to_owned());
    opt.sqlx_logging(false);

    Database::connect(opt).await
}
