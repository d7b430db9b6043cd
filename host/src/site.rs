//! Serves the single-page frontend.
//!
//! Every path that is not a bundle file gets `index.html`, so the page paths
//! (`/manufacturer-registration`, `/pharmacy-registration`) boot the app and
//! the frontend picks the page from the URL itself.

use std::fs;
use std::path::{Component, Path, PathBuf};

use actix_web::{web, HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use log::{debug, warn};
use mime_guess::from_path;

use crate::config::HostConfig;

static EMBEDDED: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

pub enum SiteSource {
    /// Bundle compiled into the binary by `build.rs`.
    Embedded(&'static Dir<'static>),
    /// Bundle read from disk on every request.
    Directory(PathBuf),
}

impl SiteSource {
    pub fn from_config(config: &HostConfig) -> Self {
        match &config.dist {
            Some(dir) => SiteSource::Directory(dir.clone()),
            None => SiteSource::Embedded(&EMBEDDED),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            SiteSource::Embedded(_) => "embedded frontend bundle".to_string(),
            SiteSource::Directory(root) => format!("frontend bundle at {}", root.display()),
        }
    }

    pub async fn has_index(&self) -> bool {
        self.load(INDEX).await.is_some()
    }

    async fn load(&self, path: &str) -> Option<Vec<u8>> {
        match self {
            SiteSource::Embedded(dir) => dir.get_file(path).map(|f| f.contents().to_vec()),
            SiteSource::Directory(root) => {
                if !is_plain_relative(path) {
                    warn!("Refusing to serve {path:?}");
                    return None;
                }
                let full = root.join(path);
                web::block(move || fs::read(full)).await.ok()?.ok()
            }
        }
    }
}

/// Only `a/b/c` style paths: no `..`, no root, no prefix.
fn is_plain_relative(path: &str) -> bool {
    Path::new(path)
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
}

pub async fn serve(req: HttpRequest, source: web::Data<SiteSource>) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { INDEX } else { path };

    match source.load(file_path).await {
        Some(contents) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok().content_type(mime.as_ref()).body(contents)
        }
        None => {
            debug!("{file_path} is not a bundle file, serving {INDEX}");
            match source.load(INDEX).await {
                Some(index) => HttpResponse::Ok()
                    .content_type("text/html; charset=utf-8")
                    .body(index),
                None => HttpResponse::NotFound().body("Not Found"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};
    use tempfile::TempDir;

    const INDEX_HTML: &str = "<html><body>PharmaLedger</body></html>";

    fn bundle() -> (TempDir, PathBuf) {
        let root = tempfile::tempdir().unwrap();
        let dist = root.path().join("dist");
        fs::create_dir_all(&dist).unwrap();
        fs::write(dist.join(INDEX), INDEX_HTML).unwrap();
        fs::write(dist.join("pharmaledger-web_bg.wasm"), b"\0asm").unwrap();
        fs::write(dist.join("style.css"), "body {}").unwrap();
        fs::write(root.path().join("secret.txt"), "do not serve").unwrap();
        (root, dist)
    }

    async fn get(source: SiteSource, uri: &str) -> (StatusCode, Option<String>, String) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(source))
                .default_service(web::route().to(serve)),
        )
        .await;
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = resp.status();
        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = test::read_body(resp).await;
        (status, content_type, String::from_utf8_lossy(&body).into_owned())
    }

    #[actix_web::test]
    async fn bundle_files_get_their_content_type() {
        let (_root, dist) = bundle();
        let (status, content_type, _) =
            get(SiteSource::Directory(dist.clone()), "/pharmaledger-web_bg.wasm").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/wasm"));

        let (_, content_type, body) = get(SiteSource::Directory(dist), "/style.css").await;
        assert_eq!(content_type.as_deref(), Some("text/css"));
        assert_eq!(body, "body {}");
    }

    #[actix_web::test]
    async fn page_paths_fall_back_to_index() {
        let (_root, dist) = bundle();
        for uri in ["/", "/manufacturer-registration", "/pharmacy-registration"] {
            let (status, content_type, body) = get(SiteSource::Directory(dist.clone()), uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(content_type.as_deref(), Some("text/html; charset=utf-8"), "{uri}");
            assert_eq!(body, INDEX_HTML, "{uri}");
        }
    }

    #[actix_web::test]
    async fn parent_directories_are_never_read() {
        let (_root, dist) = bundle();
        let (_, _, body) = get(SiteSource::Directory(dist), "/../secret.txt").await;
        assert_eq!(body, INDEX_HTML);
    }

    #[actix_web::test]
    async fn missing_index_is_not_found() {
        let empty = tempfile::tempdir().unwrap();
        let (status, _, _) =
            get(SiteSource::Directory(empty.path().to_path_buf()), "/anything").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn embedded_bundle_stays_inside_itself() {
        let (_, _, body) = get(SiteSource::Embedded(&EMBEDDED), "/../Cargo.toml").await;
        assert!(!body.contains("[package]"));
    }

    #[::core::prelude::v1::test]
    fn only_plain_relative_paths_are_accepted() {
        assert!(is_plain_relative("assets/app.js"));
        assert!(!is_plain_relative("../secret.txt"));
        assert!(!is_plain_relative("/etc/passwd"));
        assert!(!is_plain_relative("a/../../b"));
    }
}
