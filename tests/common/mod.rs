//! Shared fixtures: the message documents in `xml-reader` AST shape.

use serde_json::{json, Value};
use xmlquery::dom::from_json_value;
use xmlquery::XmlNode;

fn text(value: &str) -> Value {
    json!({ "name": "", "type": "text", "value": value, "attributes": {}, "children": [] })
}

fn leaf(name: &str, value: &str) -> Value {
    json!({ "name": name, "type": "element", "value": "", "attributes": {}, "children": [text(value)] })
}

fn message_json(id: &str, to: &str, from: &str, subject: &str, body: &str, extra: Option<Value>) -> Value {
    let mut children = vec![leaf("to", to), leaf("from", from), leaf("subject", subject), leaf("body", body)];
    children.extend(extra);
    json!({
        "name": "message",
        "type": "element",
        "value": "",
        "attributes": { "id": id, "type": "letter" },
        "children": children
    })
}

fn message1_json() -> Value {
    message_json("1001", "Alice", "Bob", "Hello", "This is a demo!", None)
}

/// `<message id="1001" type="letter">` with to, from, subject, body
pub fn message1() -> XmlNode {
    from_json_value(message1_json()).unwrap()
}

/// `<collection>` holding message 1001 and message 1002, whose
/// `<attachment>` holds another copy of message 1001
pub fn messages() -> XmlNode {
    let attachment = json!({
        "name": "attachment",
        "type": "element",
        "value": "",
        "attributes": {},
        "children": [message1_json()]
    });
    let message2 = message_json("1002", "Carl", "Dave", "Bye", "This is a test!", Some(attachment));
    from_json_value(json!({
        "name": "collection",
        "type": "element",
        "value": "",
        "attributes": {},
        "children": [message1_json(), message2]
    }))
    .unwrap()
}

#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
