pub mod mentor;
pub mod notifications;
pub mod student;
pub mod tasks;
pub mod warnings;

/// Configures the web app by adding services from each web file.
///
/// @see https://docs.rs/actix-web/4.0.1/actix_web/struct.App.html#method.configure
pub fn configure(conf: &mut actix_web::web::ServiceConfig) {
    // Route resolution stops at the first match.
    mentor::configure(conf);
    notifications::configure(conf);
    student::configure(conf);
    tasks::configure(conf);
    warnings::configure(conf);
}
