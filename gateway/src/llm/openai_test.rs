use super::*;

// ===== chat completions =====

#[test]
fn cc_parse_text_response() {
    let json = serde_json::json!({
        "model": "gpt-4o",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": "Hello!" },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 10, "completion_tokens": 5 }
    })
    .to_string();
    assert_eq!(parse_chat_completions_response(&json).unwrap(), "Hello!");
}

#[test]
fn cc_parse_null_content_is_empty() {
    let json = serde_json::json!({
        "model": "gpt-4o",
        "choices": [{ "index": 0, "message": { "role": "assistant", "content": null } }]
    })
    .to_string();
    assert_eq!(parse_chat_completions_response(&json).unwrap(), "");
}

#[test]
fn cc_parse_missing_choices() {
    let json = serde_json::json!({ "model": "gpt-4o", "choices": [] }).to_string();
    let err = parse_chat_completions_response(&json).unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(msg) if msg.contains("choices[0]")));
}

#[test]
fn cc_request_body_shape() {
    let messages = [CcMessage { role: "user", content: "hi" }];
    let body = CcRequest { model: "gpt-4o", max_tokens: 16, messages: &messages };
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value["messages"][0]["role"], "user");
    assert_eq!(value["messages"][0]["content"], "hi");
    assert_eq!(value["max_tokens"], 16);
}

// ===== responses API =====

#[test]
fn resp_parse_text_response() {
    let json = serde_json::json!({
        "model": "gpt-4o",
        "output": [{
            "type": "message",
            "content": [{ "type": "output_text", "text": "Done!" }]
        }],
        "usage": { "input_tokens": 15, "output_tokens": 8 }
    })
    .to_string();
    assert_eq!(parse_responses_response(&json).unwrap(), "Done!");
}

#[test]
fn resp_parse_skips_reasoning_items() {
    let json = serde_json::json!({
        "model": "gpt-4o",
        "output": [
            { "type": "reasoning", "summary": [] },
            { "type": "message", "content": [
                { "type": "output_text", "text": "A " },
                { "type": "refusal", "refusal": "no" },
                { "type": "output_text", "text": "B" }
            ] }
        ]
    })
    .to_string();
    assert_eq!(parse_responses_response(&json).unwrap(), "A B");
}

#[test]
fn resp_parse_output_text_fallback() {
    let json = serde_json::json!({
        "model": "gpt-4o",
        "output_text": "Fallback text",
        "usage": { "input_tokens": 5, "output_tokens": 3 }
    })
    .to_string();
    assert_eq!(parse_responses_response(&json).unwrap(), "Fallback text");
}

#[test]
fn resp_parse_invalid_json() {
    assert!(matches!(parse_responses_response("{"), Err(LlmError::ApiParse(_))));
}
