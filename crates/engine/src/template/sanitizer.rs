//! Markup sanitizer for rendered description text.
//!
//! Description templates carry game-client markup:
//! - `<br>` line breaks
//! - styling tags such as `<magicDamage>` or `<tooltip>`
//! - `&nbsp;` entities
//! - inline icon tokens like `%i:scaleAD%`
//!
//! All of it is removed and whitespace is collapsed. Collapsing also folds
//! the newlines produced from `<br>` into single spaces, so a multi-line
//! fragment always comes out as one line.

use regex_lite::Regex;
use std::sync::LazyLock;

static LINE_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("valid regex"));
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));
static ICON_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"%i:[^%]*%").expect("valid regex"));

const NBSP_ENTITY: &str = "&nbsp;";

/// Strip markup from `text` and normalize its whitespace.
///
/// Icon tokens are removed before `&nbsp;` is expanded so that removing a
/// token can never assemble a fresh entity; this keeps the transform
/// idempotent.
pub fn sanitize(text: &str) -> String {
    let text = LINE_BREAK_RE.replace_all(text, "\n");
    let text = TAG_RE.replace_all(&text, "");
    let text = ICON_RE.replace_all(&text, "");
    let text = text.replace(NBSP_ENTITY, " ");

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
