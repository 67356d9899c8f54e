//! # Simple Share
//!
//! Share buttons for web pages. Given a page's metadata and the site's stored
//! share settings, Simple Share decides which channels to show, in what order,
//! builds each channel's share link, and places the markup in the page.
//!
//! # Architecture: One Pass Per Render
//!
//! ```text
//! stored blob ─ normalize ─▶ ShareConfig ─ resolve ─▶ [Channel]
//!                                                         │
//!                          ContentMetadata ─ compose ─────┤
//!                                                         ▼
//!          content ◀─ place ── Markup ◀─ render ── [(Channel, ShareTarget)]
//! ```
//!
//! Every step is a pure function of its inputs. Nothing is cached between
//! renders and the only process-wide state is the channel catalog, a
//! `const` array. Concurrent renders therefore need no coordination.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`channel`] | The fixed channel catalog: keys, labels, canonical order |
//! | [`config`] | `ShareConfig` schema, defaults, file storage, stock config |
//! | [`normalize`](mod@normalize) | Read-path normalization and write-path sanitizing of raw blobs |
//! | [`order`] | Effective display order of enabled channels |
//! | [`compose`](mod@compose) | Per-channel share targets (URLs, `mailto:`, native share data) |
//! | [`render`](mod@render) | Maud markup for the share bar and placement into content |
//! | [`types`] | `ContentMetadata`, the per-page input |
//! | [`text`] | Tag stripping and excerpt derivation |
//! | [`posts`] | Post files (TOML + markdown) for the CLI, rendered in parallel |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Degrade, Never Fail
//!
//! The stored settings blob is untrusted. A tampered or half-migrated value
//! must not take the page down with it, so [`normalize()`] has no error type:
//! each malformed field falls back to its default on its own. Errors exist
//! only at file boundaries ([`config::ConfigError`], [`posts::PostError`]).
//!
//! ## A Closed Channel Set
//!
//! Channels are an enum, not a plugin registry. Lookups from stored keys go
//! through [`channel::Channel::from_key`], and an unknown key is an ordinary
//! `None`. Generation rules are one exhaustive `match` in [`compose()`].
//!
//! ## Explicit Config Passing
//!
//! There is no global settings accessor. Callers load the blob once per
//! request, normalize it, and pass the resulting [`config::ShareConfig`] down
//! the call chain.

pub mod channel;
pub mod compose;
pub mod config;
pub mod normalize;
pub mod order;
pub mod output;
pub mod posts;
pub mod render;
pub mod text;
pub mod types;

pub use channel::Channel;
pub use compose::{ShareTarget, compose};
pub use config::{Placement, ShareConfig};
pub use normalize::{normalize, sanitize};
pub use order::resolve;
pub use render::{place, render, share_content};
pub use types::ContentMetadata;

#[cfg(test)]
pub(crate) mod test_helpers;
