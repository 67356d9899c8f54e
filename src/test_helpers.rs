//! Shared test utilities: sample metadata and decoders for generated targets.

use std::collections::HashMap;
use url::Url;
use url::form_urlencoded;

use crate::channel::Channel;
use crate::compose::ShareTarget;
use crate::config::Buttons;
use crate::types::ContentMetadata;

/// A post with every metadata field set, including characters that need
/// encoding in both query strings and HTML.
pub fn sample_meta() -> ContentMetadata {
    ContentMetadata::new("https://example.test/post/1", "Rust & You")
        .with_excerpt("A short summary.")
        .with_image("https://example.test/img.jpg")
}

/// Every channel switched on.
pub fn all_buttons() -> Buttons {
    let mut buttons = Buttons::none();
    for channel in Channel::ALL {
        buttons.set(channel, true);
    }
    buttons
}

/// Unwrap a web target. Panics with the actual value otherwise.
pub fn expect_web(target: Option<ShareTarget>) -> Url {
    match target {
        Some(ShareTarget::Web(url)) => url,
        other => panic!("expected web target, got {other:?}"),
    }
}

/// Decoded query parameters of a share URL.
pub fn query_map(url: &Url) -> HashMap<String, String> {
    url.query_pairs().into_owned().collect()
}

/// Decoded `subject`/`body` of a `mailto:?...` URI.
pub fn mail_fields(uri: &str) -> HashMap<String, String> {
    let query = uri
        .strip_prefix("mailto:?")
        .unwrap_or_else(|| panic!("not a mailto URI: {uri}"));
    form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}
