//! HTML markup rendering tests.
//!
//! Golden-output tests over the shared fixtures, for both the message text
//! and the caption entry points.

mod common;

use common::test_message_v2;
use spanfmt::Message;

const EXPECTED_HTML: &str = concat!(
    "<u>Test</u> for &lt;<b>bold</b>, <i>ita_lic</i>, ",
    "<code>\\`code</code>, ",
    "<a href=\"http://github.com/abc\\)def\">links</a>, ",
    "<a href=\"app://user?id=123456789\">text-mention</a> and ",
    "<pre>`\\pre</pre>. ",
    "http://google.com",
    " and <i>bold <b>nested in <s>strk&gt;trgh</s> nested in</b> italic</i>.",
    " <pre><code class=\"python\">Python pre</code></pre>.",
    " <span class=\"spoiler\">Spoiled</span>."
);

const EXPECTED_HTML_URLED: &str = concat!(
    "<u>Test</u> for &lt;<b>bold</b>, <i>ita_lic</i>, ",
    "<code>\\`code</code>, ",
    "<a href=\"http://github.com/abc\\)def\">links</a>, ",
    "<a href=\"app://user?id=123456789\">text-mention</a> and ",
    "<pre>`\\pre</pre>. ",
    "<a href=\"http://google.com\">http://google.com</a>",
    " and <i>bold <b>nested in <s>strk&gt;trgh</s> nested in</b> italic</i>.",
    " <pre><code class=\"python\">Python pre</code></pre>.",
    " <span class=\"spoiler\">Spoiled</span>."
);

#[test]
fn test_text_html_simple() {
    let text_html = test_message_v2().text_html().unwrap();
    assert_eq!(text_html.as_deref(), Some(EXPECTED_HTML));
}

#[test]
fn test_text_html_urled() {
    let text_html = test_message_v2().text_html_urled().unwrap();
    assert_eq!(text_html.as_deref(), Some(EXPECTED_HTML_URLED));
}

#[test]
fn test_caption_html_simple() {
    let caption_html = test_message_v2().caption_html().unwrap();
    assert_eq!(caption_html.as_deref(), Some(EXPECTED_HTML));
}

#[test]
fn test_caption_html_urled() {
    let caption_html = test_message_v2().caption_html_urled().unwrap();
    assert_eq!(caption_html.as_deref(), Some(EXPECTED_HTML_URLED));
}

#[test]
fn test_text_html_empty() {
    let message = Message {
        text: None,
        caption: Some("test".to_string()),
        ..Message::default()
    };
    assert_eq!(message.text_html().unwrap(), None);
}

#[test]
fn test_caption_html_empty() {
    let message = Message {
        text: Some("test".to_string()),
        caption: None,
        ..Message::default()
    };
    assert_eq!(message.caption_html().unwrap(), None);
}

#[test]
fn test_text_html_is_deterministic() {
    let first = test_message_v2().text_html().unwrap();
    let second = test_message_v2().text_html().unwrap();
    assert_eq!(first, second);
}
