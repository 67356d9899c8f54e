//! The fixed catalog of sharing channels.
//!
//! Channels form a closed set. Their declaration order below is the canonical
//! display order used whenever a config carries no usable `order` list, and
//! also the order in which missing keys are appended to a partial one.
//!
//! Adding a channel means adding a variant here and a generation rule in
//! [`crate::compose`]; the compiler then points at every `match` that needs
//! updating.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A sharing destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Pinterest,
    Facebook,
    X,
    Pocket,
    Email,
    Native,
}

impl Channel {
    /// Every channel in canonical order.
    pub const ALL: [Channel; 6] = [
        Channel::Pinterest,
        Channel::Facebook,
        Channel::X,
        Channel::Pocket,
        Channel::Email,
        Channel::Native,
    ];

    /// Stable key used in config files, CSS modifiers and the admin order field.
    pub fn key(self) -> &'static str {
        match self {
            Channel::Pinterest => "pinterest",
            Channel::Facebook => "facebook",
            Channel::X => "x",
            Channel::Pocket => "pocket",
            Channel::Email => "email",
            Channel::Native => "native",
        }
    }

    /// Look up a channel by key. Matching is exact: `"Facebook"` is unknown.
    pub fn from_key(key: &str) -> Option<Channel> {
        Channel::ALL.into_iter().find(|c| c.key() == key)
    }

    /// Human label shown next to the channel's checkbox in settings UIs.
    pub fn label(self) -> &'static str {
        match self {
            Channel::Pinterest => "Pinterest",
            Channel::Facebook => "Facebook",
            Channel::X => "X",
            Channel::Pocket => "Pocket",
            Channel::Email => "Email",
            Channel::Native => "Native sharing",
        }
    }

    /// Tooltip (`title` attribute) of the rendered share anchor.
    pub fn link_title(self) -> &'static str {
        match self {
            Channel::Pinterest => "Save to Pinterest",
            Channel::Facebook => "Share on Facebook",
            Channel::X => "Share on X",
            Channel::Pocket => "Save to Pocket",
            Channel::Email => "Share via Email",
            Channel::Native => "Native Share",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Canonical keys, in registry order.
pub fn default_order() -> Vec<String> {
    Channel::ALL.iter().map(|c| c.key().to_string()).collect()
}
