use askama::Template;
use axum::{routing::get, Router};

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    service: &'static str,
    version: &'static str,
}

/// Landing page
async fn home_page() -> HomeTemplate {
    HomeTemplate {
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    }
}

pub fn router() -> Router {
    Router::new().route("/", get(home_page))
}
