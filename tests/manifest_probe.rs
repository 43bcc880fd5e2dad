// SPDX-License-Identifier: MPL-2.0
//! Resolution probing against a real HTTP endpoint.

use iced_lightbox::media::probe::{fetch_manifest_text, probe_best_resolution};
use iced_lightbox::media::QualityLevel;

const MANIFEST: &str = "#EXTM3U\n\
#EXT-X-STREAM-INF:BANDWIDTH=800000,RESOLUTION=640x360\n\
low/index.m3u8\n\
#EXT-X-STREAM-INF:BANDWIDTH=2800000,RESOLUTION=1920x1080,CODECS=\"avc1.64002a\"\n\
high/index.m3u8\n\
#EXT-X-STREAM-INF:BANDWIDTH=1400000,RESOLUTION=1280x720\n\
mid/index.m3u8\n";

/// Serves `body` with `status` for a single request and returns the URL.
fn serve_once(status: u16, body: &'static str) -> String {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind local http server");
    let addr = server.server_addr().to_ip().expect("tcp listen address");
    std::thread::spawn(move || {
        if let Ok(request) = server.recv() {
            let response = tiny_http::Response::from_string(body).with_status_code(status);
            let _ = request.respond(response);
        }
    });
    format!("http://{addr}/master.m3u8")
}

#[tokio::test]
async fn probe_picks_the_widest_advertised_level() {
    let url = serve_once(200, MANIFEST);
    let best = probe_best_resolution(&url).await;
    assert_eq!(
        best,
        Some(QualityLevel {
            width: 1920,
            height: 1080
        })
    );
}

#[tokio::test]
async fn fetch_returns_the_manifest_body() {
    let url = serve_once(200, MANIFEST);
    let text = fetch_manifest_text(&url).await.expect("manifest text");
    assert!(text.contains("#EXT-X-STREAM-INF"));
}

#[tokio::test]
async fn error_status_collapses_to_none() {
    let url = serve_once(404, "not found");
    assert_eq!(probe_best_resolution(&url).await, None);
}

#[tokio::test]
async fn non_playlist_body_collapses_to_none() {
    let url = serve_once(200, "<html>maintenance page</html>");
    assert_eq!(probe_best_resolution(&url).await, None);
}

#[tokio::test]
async fn local_handles_are_never_requested() {
    assert_eq!(probe_best_resolution("blob:abcdef").await, None);
    assert_eq!(fetch_manifest_text("file:///tmp/master.m3u8").await, None);
}
