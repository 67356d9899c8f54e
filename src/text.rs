//! Plain-text helpers for excerpts.
//!
//! Content providers hand over excerpts that may still carry markup, and
//! posts without an explicit excerpt need one derived from their body. These
//! helpers cover both without pulling in an HTML parser: share text only has
//! to be readable, not a faithful rendering.

/// Number of words kept when an excerpt is derived from the body.
pub const EXCERPT_WORDS: usize = 40;

/// Remove tags, `<script>`/`<style>` blocks, and decode the common entities.
/// Runs of whitespace collapse to one space.
///
/// A `<` only opens a tag when a letter, `/` or `!` follows it, so text like
/// `5 < 6` survives.
pub fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(start) = find_tag_start(rest) {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let skip_to = raw_text_block_end(tail).or_else(|| tail.find('>').map(|end| end + 1));
        match skip_to {
            Some(end) => {
                // Block tags separate words: "<p>a</p><p>b</p>" reads as "a b".
                if is_block_tag(&tail[..end]) {
                    out.push(' ');
                }
                rest = &tail[end..];
            }
            None => {
                // Unterminated tag: drop the remainder.
                rest = "";
            }
        }
    }
    out.push_str(rest);

    collapse_whitespace(&decode_entities(&out))
}

fn find_tag_start(text: &str) -> Option<usize> {
    text.match_indices('<')
        .map(|(pos, _)| pos)
        .find(|&pos| {
            text[pos + 1..]
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic() || c == '/' || c == '!')
        })
}

/// Keep at most `limit` whitespace-separated words.
pub fn trim_words(text: &str, limit: usize) -> String {
    text.split_whitespace()
        .take(limit)
        .collect::<Vec<_>>()
        .join(" ")
}

/// An explicit excerpt wins; otherwise the first [`EXCERPT_WORDS`] words of
/// the body with markup removed.
pub fn derive_excerpt(explicit: Option<&str>, body_html: &str) -> String {
    match explicit.map(str::trim).filter(|e| !e.is_empty()) {
        Some(excerpt) => excerpt.to_string(),
        None => trim_words(&strip_tags(body_html), EXCERPT_WORDS),
    }
}

/// If `tail` opens a `<script>` or `<style>` element, the byte offset just
/// past its closing tag. Without a closing tag only the opening tag goes.
fn raw_text_block_end(tail: &str) -> Option<usize> {
    let lower = tail.to_ascii_lowercase();
    let name = ["script", "style"].into_iter().find(|name| {
        lower[1..].strip_prefix(name).is_some_and(|after| {
            after
                .chars()
                .next()
                .is_some_and(|c| c == '>' || c == '/' || c.is_ascii_whitespace())
        })
    })?;
    let open_end = tail.find('>')? + 1;
    let close = format!("</{name}");
    match lower[open_end..].find(&close) {
        Some(pos) => {
            let pos = open_end + pos;
            Some(tail[pos..].find('>').map_or(tail.len(), |gt| pos + gt + 1))
        }
        None => Some(open_end),
    }
}

const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main", "nav",
    "ol", "p", "pre", "script", "section", "style", "table", "td", "th", "tr", "ul",
];

fn is_block_tag(tag: &str) -> bool {
    let name: String = tag
        .trim_start_matches(['<', '/'])
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    BLOCK_TAGS.contains(&name.as_str())
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#039;", "'")
        .replace("&amp;", "&")
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
