//! Serves the embedded single-page client.
//!
//! `build.rs` copies `frontend/dist` into `static/dist`, which is compiled
//! into the binary. Client routes (paths without a file extension) fall back
//! to `index.html`. Unknown `/api` routes and missing assets are `404`.

use actix_web::http::header::{CacheControl, CacheDirective};
use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir, File};
use mime_guess::from_path;
use std::path::Path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";
const API_PREFIX: &str = "api/";
/// Trunk fingerprints asset names, so a served asset never changes.
const ASSET_MAX_AGE: u32 = 365 * 24 * 60 * 60;

enum Resolved<'a> {
    Asset(&'a File<'a>),
    Index(&'a File<'a>),
    NotFound(&'static str),
}

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    respond(resolve(&STATIC_DIR, req.path()))
}

fn resolve<'a>(dir: &'a Dir<'a>, request_path: &str) -> Resolved<'a> {
    let path = request_path.trim_start_matches('/');
    if path.is_empty() || path == INDEX {
        return index(dir);
    }
    if path.starts_with(API_PREFIX) {
        return Resolved::NotFound("Unknown API route");
    }
    if let Some(file) = dir.get_file(path) {
        return Resolved::Asset(file);
    }
    if Path::new(path).extension().is_some() {
        return Resolved::NotFound("Asset not found");
    }
    index(dir)
}

fn index<'a>(dir: &'a Dir<'a>) -> Resolved<'a> {
    dir.get_file(INDEX)
        .map(Resolved::Index)
        .unwrap_or(Resolved::NotFound("Client build not embedded"))
}

fn respond(resolved: Resolved<'_>) -> HttpResponse {
    match resolved {
        Resolved::Asset(file) => HttpResponse::Ok()
            .content_type(from_path(file.path()).first_or_octet_stream().as_ref())
            .insert_header(CacheControl(vec![
                CacheDirective::Public,
                CacheDirective::MaxAge(ASSET_MAX_AGE),
            ]))
            .body(file.contents().to_vec()),
        Resolved::Index(file) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .insert_header(CacheControl(vec![CacheDirective::NoCache]))
            .body(file.contents().to_vec()),
        Resolved::NotFound(reason) => HttpResponse::NotFound().body(reason),
    }
}
