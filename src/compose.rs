//! Share target generation, one rule per channel.
//!
//! Given page metadata and a normalized config, [`compose`] builds what a share
//! button points at:
//!
//! | Channel | Target |
//! |---------|--------|
//! | pinterest | `pinterest.com/pin/create/link/?url&description[&media]` |
//! | facebook | app dialog `?app_id&href&display=popup` when an App ID is set, else `sharer.php?u&title&summary[&image]` |
//! | x | `twitter.com/intent/tweet?original_referer&tw_p=tweetbutton&url[&via]` |
//! | pocket | `getpocket.com/save?url&title` |
//! | email | `mailto:?subject&body` with RFC 3986 percent-encoding |
//! | native | no URL; url/title/text handed to the platform share sheet |
//!
//! Every value is encoded for its context: query values through
//! [`url::Url::parse_with_params`], mail fields through percent-encoding, and
//! HTML attributes later by maud. Empty metadata fields drop the parameter
//! they would fill. A permalink that is not an absolute `http(s)` URL drops
//! the whole target: a share button without a destination is worse than none.

use crate::channel::Channel;
use crate::config::ShareConfig;
use crate::text;
use crate::types::ContentMetadata;
use url::Url;
use url::form_urlencoded;

const PINTEREST_ENDPOINT: &str = "https://pinterest.com/pin/create/link/";
const FACEBOOK_DIALOG_ENDPOINT: &str = "https://www.facebook.com/dialog/share";
const FACEBOOK_SHARER_ENDPOINT: &str = "https://www.facebook.com/sharer.php";
const X_INTENT_ENDPOINT: &str = "https://twitter.com/intent/tweet";
const X_SOURCE_TAG: &str = "tweetbutton";
const POCKET_ENDPOINT: &str = "https://getpocket.com/save";

/// Where one share button leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareTarget {
    /// A third-party share endpoint.
    Web(Url),
    /// A complete `mailto:` URI.
    Mail(String),
    /// Data for the platform's native share sheet. `url` doubles as the
    /// link href on clients without one.
    Native {
        url: String,
        title: String,
        text: String,
    },
}

impl ShareTarget {
    /// The href the rendered anchor carries.
    pub fn href(&self) -> &str {
        match self {
            ShareTarget::Web(url) => url.as_str(),
            ShareTarget::Mail(uri) => uri,
            ShareTarget::Native { url, .. } => url,
        }
    }
}

/// Build the target for one channel, or `None` when the content can't be
/// shared (no usable permalink).
pub fn compose(
    channel: Channel,
    config: &ShareConfig,
    meta: &ContentMetadata,
) -> Option<ShareTarget> {
    let Some(permalink) = http_url(&meta.permalink) else {
        tracing::debug!(%channel, permalink = %meta.permalink, "no shareable permalink; omitting");
        return None;
    };
    let permalink = permalink.as_str();
    let title = meta.title.trim();
    let excerpt = meta.excerpt.trim();
    let image = http_url(&meta.image_url).unwrap_or_default();
    let image = image.as_str();

    let target = match channel {
        Channel::Pinterest => ShareTarget::Web(endpoint(
            PINTEREST_ENDPOINT,
            &[("url", permalink), ("description", title), ("media", image)],
        )?),
        Channel::Facebook if !config.facebook_app_id.is_empty() => ShareTarget::Web(endpoint(
            FACEBOOK_DIALOG_ENDPOINT,
            &[
                ("app_id", config.facebook_app_id.as_str()),
                ("href", permalink),
                ("display", "popup"),
            ],
        )?),
        Channel::Facebook => ShareTarget::Web(endpoint(
            FACEBOOK_SHARER_ENDPOINT,
            &[
                ("u", permalink),
                ("title", title),
                ("summary", excerpt),
                ("image", image),
            ],
        )?),
        Channel::X => ShareTarget::Web(endpoint(
            X_INTENT_ENDPOINT,
            &[
                ("original_referer", permalink),
                ("tw_p", X_SOURCE_TAG),
                ("url", permalink),
                ("via", config.x_handle.as_str()),
            ],
        )?),
        Channel::Pocket => ShareTarget::Web(endpoint(
            POCKET_ENDPOINT,
            &[("url", permalink), ("title", title)],
        )?),
        Channel::Email => ShareTarget::Mail(mailto(title, excerpt, permalink)),
        Channel::Native => ShareTarget::Native {
            url: permalink.to_string(),
            title: title.to_string(),
            text: text::strip_tags(excerpt),
        },
    };
    Some(target)
}

/// Like [`compose`], keyed by string. Unknown keys are omitted.
pub fn compose_key(
    key: &str,
    config: &ShareConfig,
    meta: &ContentMetadata,
) -> Option<ShareTarget> {
    let channel = Channel::from_key(key)?;
    compose(channel, config, meta)
}

/// Compose every channel in `order`, keeping order and skipping omitted ones.
pub fn compose_all(
    order: &[Channel],
    config: &ShareConfig,
    meta: &ContentMetadata,
) -> Vec<(Channel, ShareTarget)> {
    order
        .iter()
        .filter_map(|&channel| compose(channel, config, meta).map(|target| (channel, target)))
        .collect()
}

/// The serialized form of `value`, if it parses as an absolute `http`/`https`
/// URL. Serializing fills in what a loose spelling leaves out (`http:host`
/// becomes `http://host/`) and percent-encodes stray spaces.
fn http_url(value: &str) -> Option<String> {
    let parsed = Url::parse(value.trim()).ok()?;
    matches!(parsed.scheme(), "http" | "https").then(|| parsed.into())
}

/// Endpoint URL with the non-empty parameters appended in order.
fn endpoint(base: &str, params: &[(&str, &str)]) -> Option<Url> {
    Url::parse_with_params(base, params.iter().filter(|(_, value)| !value.is_empty())).ok()
}

fn mailto(subject: &str, excerpt: &str, permalink: &str) -> String {
    let separator = if excerpt.is_empty() { "" } else { "\n\n" };
    let body = format!("{excerpt}{separator}{permalink}");

    let mut uri = String::from("mailto:?");
    if !subject.is_empty() {
        uri.push_str("subject=");
        uri.push_str(&percent_encode(subject));
        uri.push('&');
    }
    uri.push_str("body=");
    uri.push_str(&percent_encode(&body));
    uri
}

/// RFC 3986 style: like form encoding, but space is `%20`, never `+`.
fn percent_encode(value: &str) -> String {
    // A literal '+' is serialized as %2B, so every '+' left is an encoded space.
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
