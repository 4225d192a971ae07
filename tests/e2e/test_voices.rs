use crate::e2e::helpers;

use helpers::providers::mount_voices;
use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_context::test_context;
use wiremock::ResponseTemplate;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_pass_voice_catalog_through(ctx: &TestContext) {
    let catalog = json!([
        {
            "voiceId": "en-US-natalie",
            "displayName": "Natalie (F)",
            "locale": "en-US",
            "availableStyles": ["Promo", "Narration"]
        },
        { "voiceId": "en-UK-hazel", "displayName": "Hazel (F)", "locale": "en-UK" }
    ]);
    mount_voices(
        &ctx.speech_provider,
        ResponseTemplate::new(200).set_body_json(catalog.clone()),
    )
    .await;

    let response = ctx.client.get("/api/voices").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body, Some(catalog));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_500_when_catalog_fails(ctx: &TestContext) {
    mount_voices(
        &ctx.speech_provider,
        ResponseTemplate::new(401).set_body_string("invalid api key"),
    )
    .await;

    ctx.client
        .get("/api/voices")
        .await
        .unwrap()
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_error_message("Failed to fetch voices");
}
