//! Share bar markup and placement into content.
//!
//! ## Markup
//!
//! ```html
//! <div class="simple-share" style="--share-icon-size: 32px; ...">
//!   <div class="simple-share__icon simple-share__icon--facebook">
//!     <a href="https://www.facebook.com/sharer.php?..." rel="nofollow noopener external"
//!        target="_blank" title="Share on Facebook"></a>
//!   </div>
//!   <div class="simple-share__icon simple-share__icon--email">
//!     <a class="simple-share-email" href="mailto:?..." title="Share via Email"></a>
//!   </div>
//!   <div class="simple-share__icon simple-share__icon--native">
//!     <a class="simple-share-native" href="https://..." data-url="https://..."
//!        data-title="..." data-text="..." title="Native Share"></a>
//!   </div>
//! </div>
//! ```
//!
//! Anchors are empty; icons come from the stylesheet via the `--{key}`
//! modifier class. The native anchor's `data-*` attributes are read by the
//! client script that opens the platform share sheet.
//!
//! Uses [maud](https://maud.lambda.xyz/), so every attribute value is escaped.

use crate::channel::Channel;
use crate::compose::{self, ShareTarget};
use crate::config::{MAX_ICON_SIZE, MIN_ICON_SIZE, Placement, ShareConfig};
use crate::order;
use crate::types::ContentMetadata;
use maud::{Markup, PreEscaped, html};

/// Render the share bar for `order`, skipping channels without a target.
///
/// Returns empty markup when nothing is left to show.
pub fn render(order: &[Channel], targets: &[(Channel, ShareTarget)], icon_size: u32) -> Markup {
    let items: Vec<(Channel, &ShareTarget)> = order
        .iter()
        .filter_map(|&channel| {
            targets
                .iter()
                .find(|(c, _)| *c == channel)
                .map(|(_, target)| (channel, target))
        })
        .collect();

    if items.is_empty() {
        return PreEscaped(String::new());
    }

    let icon_size = icon_size.clamp(MIN_ICON_SIZE, MAX_ICON_SIZE);
    let style = format!(
        "--share-icon-size: {icon_size}px; --share-icon-padding: 0.25rem; \
         height: calc((var(--share-icon-padding) * 2) + var(--share-icon-size)); overflow: hidden;"
    );

    html! {
        div class="simple-share" style=(style) {
            @for (channel, target) in &items {
                div class={ "simple-share__icon simple-share__icon--" (channel.key()) } {
                    (share_anchor(*channel, target))
                }
            }
        }
    }
}

fn share_anchor(channel: Channel, target: &ShareTarget) -> Markup {
    match target {
        ShareTarget::Web(url) => html! {
            a href=(url.as_str()) rel="nofollow noopener external" target="_blank" title=(channel.link_title()) {}
        },
        ShareTarget::Mail(uri) => html! {
            a class="simple-share-email" href=(uri) title=(channel.link_title()) {}
        },
        ShareTarget::Native { url, title, text } => html! {
            a class="simple-share-native" href=(url) data-url=(url) data-title=(title) data-text=(text) title=(channel.link_title()) {}
        },
    }
}

/// Insert `fragment` around `content`.
///
/// `Both` writes the fragment twice, once on each side.
pub fn place(content: &str, fragment: &str, placement: Placement) -> String {
    match placement {
        Placement::Top => format!("{fragment}{content}"),
        Placement::Bottom => format!("{content}{fragment}"),
        Placement::Both => format!("{fragment}{content}{fragment}"),
    }
}

/// Resolve, compose and render the share bar for one page.
pub fn render_share_bar(config: &ShareConfig, meta: &ContentMetadata) -> Markup {
    let order = order::resolve(config);
    let targets = compose::compose_all(&order, config, meta);
    render(&order, &targets, config.icon_size)
}

/// The whole content filter: `content` with the share bar placed per config.
pub fn share_content(content: &str, config: &ShareConfig, meta: &ContentMetadata) -> String {
    let fragment = render_share_bar(config, meta).into_string();
    place(content, &fragment, config.placement)
}
