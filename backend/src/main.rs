//! Static host for the storefront.
//!
//! The frontend bundle is embedded into the binary at compile time and
//! served with an SPA fallback: any path without a matching file gets
//! `index.html`, so deep links like `/admin/dashboard` resolve after a
//! reload. There is no API here; the app talks to the hosted catalog and
//! storage service directly from the browser.

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::info;
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        // SPA fallback: unknown paths are routes the frontend handles.
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

fn port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let url = format!("http://{}:{}", HOST, port());
    {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url);
        });
    }

    info!("Storefront running at {}", url);

    HttpServer::new(|| App::new().default_service(web::route().to(serve_embedded)))
        .bind((HOST, port()))?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, test};

    async fn get(path: &str) -> HttpResponse {
        let req = test::TestRequest::get().uri(path).to_http_request();
        serve_embedded(req).await
    }

    #[actix_web::test]
    async fn root_serves_the_index_page() {
        let resp = get("/").await;
        assert_eq!(resp.status(), 200);
        let body = to_bytes(resp.into_body()).await.unwrap();
        assert!(std::str::from_utf8(&body).unwrap().contains("<html"));
    }

    #[actix_web::test]
    async fn frontend_routes_fall_back_to_the_index_page() {
        let direct = to_bytes(get("/").await.into_body()).await.unwrap();
        let fallback = to_bytes(get("/admin/dashboard").await.into_body())
            .await
            .unwrap();
        assert_eq!(direct, fallback);
    }
}
