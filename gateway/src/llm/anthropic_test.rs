use super::*;

fn make_response(content: serde_json::Value) -> String {
    serde_json::json!({
        "id": "msg_123",
        "type": "message",
        "role": "assistant",
        "content": content,
        "model": "claude-sonnet-4-5-20250929",
        "stop_reason": "end_turn",
        "usage": { "input_tokens": 100, "output_tokens": 50 }
    })
    .to_string()
}

#[test]
fn parse_text_response() {
    let json = make_response(serde_json::json!([
        { "type": "text", "text": "Hello world" }
    ]));
    assert_eq!(parse_response(&json).unwrap(), "Hello world");
}

#[test]
fn parse_multiple_text_blocks_are_joined() {
    let json = make_response(serde_json::json!([
        { "type": "text", "text": "Gốm " },
        { "type": "text", "text": "Quảng Ngãi" }
    ]));
    assert_eq!(parse_response(&json).unwrap(), "Gốm Quảng Ngãi");
}

#[test]
fn parse_unknown_content_filtered() {
    let json = make_response(serde_json::json!([
        { "type": "text", "text": "hi" },
        { "type": "some_future_type", "data": {} }
    ]));
    assert_eq!(parse_response(&json).unwrap(), "hi");
}

#[test]
fn parse_thinking_blocks_are_filtered() {
    let json = make_response(serde_json::json!([
        { "type": "thinking", "thinking": "Let me think..." },
        { "type": "text", "text": "Here is my answer" }
    ]));
    assert_eq!(parse_response(&json).unwrap(), "Here is my answer");
}

#[test]
fn parse_thinking_only_response_is_empty() {
    let json = make_response(serde_json::json!([
        { "type": "thinking", "thinking": "Let me think..." }
    ]));
    assert_eq!(parse_response(&json).unwrap(), "");
}

#[test]
fn parse_invalid_json() {
    let err = parse_response("not json").unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(_)));
}

#[test]
fn request_body_shape() {
    let messages = [ApiMessage { role: "user", content: "xin chào" }];
    let body = ApiRequest { model: "claude", max_tokens: 32, messages: &messages };
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value["model"], "claude");
    assert_eq!(value["max_tokens"], 32);
    assert_eq!(value["messages"][0]["role"], "user");
    assert_eq!(value["messages"][0]["content"], "xin chào");
}
