use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{TEST_API_KEY, TRANSCRIPT_PATH};

pub const AUDIO_URL: &str = "https://murf-test.s3.amazonaws.com/speech.mp3";

/// Speech provider answering every synthesis call with `response`
pub async fn mount_synthesis(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/speech/generate"))
        .and(header("api-key", TEST_API_KEY))
        .respond_with(response)
        .mount(server)
        .await;
}

pub async fn mount_synthesis_success(server: &MockServer) {
    mount_synthesis(
        server,
        ResponseTemplate::new(200).set_body_json(json!({
            "audioFile": AUDIO_URL,
            "audioLengthInSeconds": 2.5,
            "consumedCharacterCount": 11,
            "remainingCharacterCount": 99989
        })),
    )
    .await;
}

pub async fn mount_voices(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/speech/voices"))
        .and(header("api-key", TEST_API_KEY))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Transcript provider serving `captions` for `video_id` in json3 format
pub async fn mount_captions(server: &MockServer, video_id: &str, captions: &[&str]) {
    let events: Vec<Value> = captions
        .iter()
        .enumerate()
        .map(|(index, text)| {
            json!({
                "tStartMs": index * 2000,
                "dDurationMs": 2000,
                "segs": [{ "utf8": text }]
            })
        })
        .collect();

    mount_transcript(
        server,
        video_id,
        ResponseTemplate::new(200).set_body_json(json!({ "wireMagic": "pb3", "events": events })),
    )
    .await;
}

pub async fn mount_transcript(server: &MockServer, video_id: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(TRANSCRIPT_PATH))
        .and(query_param("v", video_id))
        .and(query_param("fmt", "json3"))
        .respond_with(response)
        .mount(server)
        .await;
}
