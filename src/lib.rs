pub mod app_config;
pub mod assignments;
pub mod authorization;
pub mod dashboard;
pub mod db;
pub mod error;
pub mod middleware;
pub mod notifications;
pub mod orm;
pub mod roster;
pub mod warnings;
pub mod web;
