use crate::e2e::helpers;

use helpers::providers::{mount_captions, mount_synthesis_success, mount_transcript, AUDIO_URL};
use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_context::test_context;
use wiremock::ResponseTemplate;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_narrate_video_transcript(ctx: &TestContext) {
    mount_captions(&ctx.transcript_provider, "abc123", &["Hi", "there"]).await;
    mount_synthesis_success(&ctx.speech_provider).await;

    let response = ctx
        .client
        .post(
            "/api/youtube",
            &json!({
                "url": "https://www.youtube.com/watch?v=abc123&t=5s",
                "voice": "en-US-ken",
                "language": "en-US"
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.audio_url(), AUDIO_URL);

    let requests = ctx.speech_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["text"], json!("Hi there"));
    assert_eq!(requests[0]["voice_id"], json!("en-US-ken"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_accept_short_links(ctx: &TestContext) {
    mount_captions(&ctx.transcript_provider, "abc123", &["Short", "link"]).await;
    mount_synthesis_success(&ctx.speech_provider).await;

    ctx.client
        .post(
            "/api/youtube",
            &json!({ "url": "https://youtu.be/abc123?si=xyz", "voice": "en-US-ken" }),
        )
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    assert_eq!(ctx.speech_requests().await[0]["text"], json!("Short link"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_non_video_urls(ctx: &TestContext) {
    mount_synthesis_success(&ctx.speech_provider).await;

    ctx.client
        .post(
            "/api/youtube",
            &json!({ "url": "https://example.com/not-a-video", "voice": "en-US-ken" }),
        )
        .await
        .unwrap()
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY)
        .assert_error_message("Invalid YouTube URL format")
        .assert_detail_field("url");

    assert_eq!(ctx.transcript_request_count().await, 0);
    assert!(ctx.speech_requests().await.is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_require_url_and_voice(ctx: &TestContext) {
    ctx.client
        .post("/api/youtube", &json!({ "voice": "en-US-ken" }))
        .await
        .unwrap()
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY)
        .assert_detail_field("url");

    ctx.client
        .post("/api/youtube", &json!({ "url": "https://youtu.be/abc123" }))
        .await
        .unwrap()
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY)
        .assert_detail_field("voice");

    assert_eq!(ctx.transcript_request_count().await, 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_blank_voice(ctx: &TestContext) {
    mount_synthesis_success(&ctx.speech_provider).await;

    for voice in ["", "   "] {
        ctx.client
            .post(
                "/api/youtube",
                &json!({ "url": "https://youtu.be/abc123", "voice": voice }),
            )
            .await
            .unwrap()
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY)
            .assert_detail_field("voice");
    }

    assert_eq!(ctx.transcript_request_count().await, 0);
    assert!(ctx.speech_requests().await.is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_videos_without_captions(ctx: &TestContext) {
    mount_transcript(&ctx.transcript_provider, "nocaps1", ResponseTemplate::new(200)).await;
    mount_synthesis_success(&ctx.speech_provider).await;

    ctx.client
        .post(
            "/api/youtube",
            &json!({ "url": "https://www.youtube.com/watch?v=nocaps1", "voice": "en-US-ken" }),
        )
        .await
        .unwrap()
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY)
        .assert_error_message("Failed to fetch transcript")
        .assert_detail_field("url");

    assert!(ctx.speech_requests().await.is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_blank_transcripts(ctx: &TestContext) {
    mount_captions(&ctx.transcript_provider, "blank01", &["", " "]).await;
    mount_synthesis_success(&ctx.speech_provider).await;

    ctx.client
        .post(
            "/api/youtube",
            &json!({ "url": "https://youtu.be/blank01", "voice": "en-US-ken" }),
        )
        .await
        .unwrap()
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY)
        .assert_error_message("No transcript available");

    assert!(ctx.speech_requests().await.is_empty());
}
