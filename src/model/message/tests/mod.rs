use serde_json::json;

use super::*;
use crate::ErrorClass;

fn issue(title: &str, body: &str, link_url: &str) -> IssueFields {
    IssueFields {
        title: title.into(),
        body: body.into(),
        link_url: link_url.into(),
    }
}

#[test]
fn kind_round_trips_through_tag() {
    for tag in [
        "text",
        "post",
        "image",
        "share_chat",
        "interactive",
        "github_issue",
    ] {
        let kind = MessageKind::from(tag);
        assert!(!matches!(kind, MessageKind::Other(_)), "{tag} should be known");
        assert_eq!(kind.as_str(), tag);
    }
    assert_eq!(
        MessageKind::from("bogus"),
        MessageKind::Other("bogus".to_string())
    );
}

#[test]
fn normal_kinds_wrap_content() {
    let content = "text: hello\nitems:\n  - one\n  - two\n";
    for kind in [
        MessageKind::Text,
        MessageKind::Post,
        MessageKind::Image,
        MessageKind::ShareChat,
    ] {
        let payload = compose(&kind, content, None).unwrap();
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "msg_type": kind.as_str(),
                "content": { "text": "hello", "items": ["one", "two"] }
            })
        );
    }
}

#[test]
fn post_keeps_nested_structure() {
    let content = r#"
post:
  zh_cn:
    title: 项目更新
    content:
      - - tag: text
          text: "项目有更新: "
        - tag: a
          text: 请查看
          href: http://www.example.com/
"#;
    let payload = compose(&MessageKind::Post, content, None).unwrap();
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["msg_type"], "post");
    assert_eq!(value["content"]["post"]["zh_cn"]["title"], "项目更新");
    assert_eq!(
        value["content"]["post"]["zh_cn"]["content"][0][1]["href"],
        "http://www.example.com/"
    );
}

#[test]
fn interactive_content_is_the_card() {
    let content = "header:\n  title:\n    tag: plain_text\n    content: hi\nelements: []\n";
    let payload = compose(&MessageKind::Interactive, content, None).unwrap();
    assert!(matches!(payload, WirePayload::Card { card: Card::Document(_), .. }));
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(
        value,
        json!({
            "msg_type": "interactive",
            "card": {
                "header": { "title": { "tag": "plain_text", "content": "hi" } },
                "elements": []
            }
        })
    );
    assert!(value.get("content").is_none());
}

#[test]
fn github_issue_synthesizes_card() {
    let payload = compose(
        &MessageKind::GithubIssue,
        "ignored: [",
        Some(&issue("Bug #3", "See stack trace", "https://example.com/issues/3")),
    )
    .unwrap();
    assert_eq!(payload.msg_type(), &MessageKind::Interactive);
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({
            "msg_type": "interactive",
            "card": {
                "header": {
                    "title": { "content": "Bug #3", "tag": "plain_text" },
                    "template": "blue"
                },
                "elements": [{ "tag": "markdown", "content": "See stack trace" }]
            }
        })
    );
}

#[test]
fn github_issue_ignores_link_url() {
    let a = compose(&MessageKind::GithubIssue, "", Some(&issue("t", "b", ""))).unwrap();
    let b = compose(
        &MessageKind::GithubIssue,
        "",
        Some(&issue("t", "b", "https://example.com/1")),
    )
    .unwrap();
    assert_eq!(a, b);
}

#[test]
fn github_issue_without_fields_fails() {
    let err = compose(&MessageKind::GithubIssue, "", None).unwrap_err();
    assert_eq!(err.class(), ErrorClass::Configuration);
}

#[test]
fn unknown_kind_falls_back_to_normal() {
    let payload = compose(&MessageKind::from("bogus"), "hello: world", None).unwrap();
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({ "msg_type": "bogus", "content": { "hello": "world" } })
    );
}

#[test]
fn compose_is_idempotent() {
    let kind = MessageKind::Text;
    let first = compose(&kind, "text: hi there", None).unwrap();
    let second = compose(&kind, "text: hi there", None).unwrap();
    assert_eq!(first, second);
}

#[test]
fn malformed_document_is_parse_error() {
    let err = compose(&MessageKind::Text, "text: [unterminated", None).unwrap_err();
    assert_eq!(err.class(), ErrorClass::Parse);
    let err = compose(&MessageKind::Interactive, "{ header: ", None).unwrap_err();
    assert_eq!(err.class(), ErrorClass::Parse);
}

#[test]
fn empty_document_is_parse_error() {
    for content in ["", "   \n\t"] {
        let err = compose(&MessageKind::Text, content, None).unwrap_err();
        assert!(matches!(err.kind(), crate::ErrorKind::EmptyDocument));
    }
}

#[test]
fn issue_card_serializes_in_field_order() {
    let card = CardStructure::from_issue(&issue("Bug #3", "See stack trace", ""));
    assert_eq!(
        serde_json::to_string(&card).unwrap(),
        r#"{"header":{"title":{"content":"Bug #3","tag":"plain_text"},"template":"blue"},"elements":[{"tag":"markdown","content":"See stack trace"}]}"#
    );
}

#[test]
fn yaml_11_booleans_stay_strings() {
    let doc = parse_document("text: yes\nb: on\nc: true").unwrap();
    assert_eq!(doc, json!({ "text": "yes", "b": "on", "c": true }));
}

#[test]
fn comment_or_null_document_is_empty() {
    for content in ["# note", "~", "null"] {
        let err = compose(&MessageKind::Text, content, None).unwrap_err();
        assert!(
            matches!(err.kind(), crate::ErrorKind::EmptyDocument),
            "{content:?} should be empty"
        );
    }
}

#[test]
fn card_keeps_author_key_order() {
    let content = "header:\n  template: blue\nelements: []\nconfig:\n  wide_screen_mode: true\n";
    let payload = compose(&MessageKind::Interactive, content, None).unwrap();
    assert_eq!(
        serde_json::to_string(&payload).unwrap(),
        r#"{"msg_type":"interactive","card":{"header":{"template":"blue"},"elements":[],"config":{"wide_screen_mode":true}}}"#
    );
}
