//! End-to-end page load against an in-memory gateway, from wire JSON to
//! rendered HTML.

use async_trait::async_trait;

use groupboard_client::{ClientError, GroupApi, Result};
use groupboard_models::{Bot, Envelope, Group, User};
use groupboard_page::{Page, PageLoad, PageRenderer};

/// Gateway that decodes canned wire JSON, the same shape the HTTP client
/// receives.
struct CannedApi {
    user: &'static str,
    groups: &'static str,
    bots: &'static str,
}

fn decode<T: serde::de::DeserializeOwned>(body: &str, endpoint: &'static str) -> Result<T> {
    let envelope: Envelope<T> =
        serde_json::from_str(body).map_err(|source| ClientError::Malformed { endpoint, source })?;
    Ok(envelope.response)
}

#[async_trait]
impl GroupApi for CannedApi {
    async fn me(&self) -> Result<User> {
        decode(self.user, "users/me")
    }

    async fn groups(&self) -> Result<Vec<Group>> {
        decode(self.groups, "groups")
    }

    async fn bots(&self) -> Result<Vec<Bot>> {
        decode(self.bots, "bots")
    }
}

#[tokio::test]
async fn full_load_renders_annotated_group_list() {
    let api = CannedApi {
        user: r#"{"response": {"user_id": "u1", "name": "Pat",
                  "image_url": "http://img.example.com/pat.png"}}"#,
        groups: r#"{"response": [
            {"group_id": "g1", "name": "Alpha"},
            {"group_id": "g2", "name": "Beta"}
        ]}"#,
        bots: r#"{"response": [
            {"group_id": "g1", "callback_url": "https://x/incoming/abc"}
        ]}"#,
    };

    let mut renderer = PageRenderer::new(Page::new());
    let summary = PageLoad::new(&api).run(&mut renderer).await;

    assert_eq!(summary.groups_rendered, 2);
    assert_eq!(summary.subscribed, 1);
    assert!(summary.greeting_rendered);

    let html = renderer.into_page().to_html();

    // Greeting channel.
    assert!(html.contains("Hello, Pat."));
    assert!(html.contains("src=\"https://img.example.com/pat.png\""));

    // g1 subscribed, g2 not, in response order.
    let g1 = html.find("id=\"g1\"").expect("g1 entry");
    let g2 = html.find("id=\"g2\"").expect("g2 entry");
    assert!(g1 < g2);
    assert!(html.contains("href=\"/unsubscribe/g1\""));
    assert!(html.contains("href=\"/subscribe/g2\""));
    assert_eq!(html.matches("Subscribed \u{2713}").count(), 1);
    assert_eq!(html.matches("Not subscribed \u{2717}").count(), 1);
}

#[tokio::test]
async fn malformed_bots_body_degrades_annotations_only() {
    let api = CannedApi {
        user: r#"{"response": {"user_id": "u1", "name": "Pat"}}"#,
        groups: r#"{"response": [{"group_id": "g1", "name": "Alpha"}]}"#,
        bots: r#"{"unexpected": true}"#,
    };

    let mut renderer = PageRenderer::new(Page::new());
    let summary = PageLoad::new(&api).run(&mut renderer).await;

    assert_eq!(summary.subscribed, 0);
    let html = renderer.into_page().to_html();
    assert!(html.contains("Alpha"));
    assert!(html.contains("Not subscribed \u{2717}"));
}
