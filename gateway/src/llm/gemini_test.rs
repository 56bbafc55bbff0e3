use super::*;

fn make_response(parts: serde_json::Value) -> String {
    serde_json::json!({
        "candidates": [{
            "content": { "role": "model", "parts": parts },
            "finishReason": "STOP",
            "index": 0
        }],
        "usageMetadata": { "promptTokenCount": 7, "candidatesTokenCount": 12 }
    })
    .to_string()
}

#[test]
fn parse_single_text_part() {
    let json = make_response(serde_json::json!([{ "text": "Làng gốm Mỹ Thiện có lịch sử hơn 150 năm." }]));
    let text = parse_response(&json).unwrap();
    assert_eq!(text, "Làng gốm Mỹ Thiện có lịch sử hơn 150 năm.");
}

#[test]
fn parse_joins_multiple_parts() {
    let json = make_response(serde_json::json!([{ "text": "Hello " }, { "text": "world" }]));
    assert_eq!(parse_response(&json).unwrap(), "Hello world");
}

#[test]
fn parse_skips_parts_without_text() {
    let json = make_response(serde_json::json!([
        { "inlineData": { "mimeType": "image/png", "data": "" } },
        { "text": "only text" }
    ]));
    assert_eq!(parse_response(&json).unwrap(), "only text");
}

#[test]
fn parse_candidate_without_content_is_empty() {
    let json = serde_json::json!({ "candidates": [{ "finishReason": "SAFETY" }] }).to_string();
    assert_eq!(parse_response(&json).unwrap(), "");
}

#[test]
fn parse_no_candidates_errors() {
    let json = serde_json::json!({ "promptFeedback": { "blockReason": "SAFETY" } }).to_string();
    let err = parse_response(&json).unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(msg) if msg.contains("no candidates")));
}

#[test]
fn parse_invalid_json() {
    let err = parse_response("not json").unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(_)));
}

#[test]
fn request_body_shape() {
    let body = ApiRequest {
        contents: [ApiContent { role: "user", parts: [ApiPartOut { text: "hi" }] }],
        generation_config: GenerationConfig { max_output_tokens: 64 },
    };
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value["contents"][0]["role"], "user");
    assert_eq!(value["contents"][0]["parts"][0]["text"], "hi");
    assert_eq!(value["generationConfig"]["maxOutputTokens"], 64);
}

#[test]
fn model_url_includes_model_and_method() {
    let timeouts = LlmTimeouts { request_secs: 1, connect_secs: 1 };
    let client = GeminiClient::new("k".into(), "https://example.test/v1beta".into(), timeouts).unwrap();
    assert_eq!(
        client.model_url("gemini-pro"),
        "https://example.test/v1beta/models/gemini-pro:generateContent"
    );
}
