use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use super::*;

const INDEX: &str = "<!DOCTYPE html><div id=\"app\"></div>";

fn bundle_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("titanos-routes-{}-{name}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create bundle dir");
    std::fs::write(dir.join("index.html"), INDEX).expect("write index");
    std::fs::write(dir.join("client.js"), "export default 1;").expect("write asset");
    dir
}

async fn serve(dist_dir: &Path) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let router = app(dist_dir);
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    addr
}

async fn get_text(addr: SocketAddr, path: &str) -> (reqwest::StatusCode, String) {
    let res = reqwest::get(format!("http://{addr}{path}")).await.expect("request");
    let status = res.status();
    (status, res.text().await.expect("body"))
}

#[tokio::test]
async fn healthz_returns_ok() {
    let dir = bundle_dir("healthz");
    let addr = serve(&dir).await;
    let (status, body) = get_text(addr, "/healthz").await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn root_serves_index() {
    let dir = bundle_dir("root");
    let addr = serve(&dir).await;
    let (status, body) = get_text(addr, "/").await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body, INDEX);
}

#[tokio::test]
async fn existing_asset_is_served() {
    let dir = bundle_dir("asset");
    let addr = serve(&dir).await;
    let (status, body) = get_text(addr, "/client.js").await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body, "export default 1;");
}

#[tokio::test]
async fn unknown_path_falls_back_to_index() {
    let dir = bundle_dir("fallback");
    let addr = serve(&dir).await;
    let (status, body) = get_text(addr, "/missions/m-101").await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body, INDEX);
}
