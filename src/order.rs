//! Effective display order of enabled channels.
//!
//! A stored `order` is taken as a preference, not a permutation. Unknown keys
//! are skipped and a repeated key only counts at its first position. Channels
//! the list doesn't mention are appended in registry order, so a partial
//! order never hides an enabled button.

use crate::channel::Channel;
use crate::config::ShareConfig;

/// The full channel sequence implied by `order`, enabled or not.
pub fn effective_order(order: &[String]) -> Vec<Channel> {
    let mut seen = Vec::with_capacity(Channel::ALL.len());
    for key in order {
        match Channel::from_key(key) {
            Some(channel) if !seen.contains(&channel) => seen.push(channel),
            Some(_) => {}
            None => tracing::debug!(key = %key, "skipping unknown channel in order"),
        }
    }
    for channel in Channel::ALL {
        if !seen.contains(&channel) {
            seen.push(channel);
        }
    }
    seen
}

/// Enabled channels, in display order.
pub fn resolve(config: &ShareConfig) -> Vec<Channel> {
    effective_order(&config.order)
        .into_iter()
        .filter(|channel| config.buttons.is_enabled(*channel))
        .collect()
}
