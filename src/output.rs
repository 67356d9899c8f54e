//! CLI output formatting.
//!
//! Each command has a `format_*` function returning lines, for testability,
//! and a `print_*` wrapper that writes them to stdout.
//!
//! ```text
//! Config
//!     Icon size: 32px
//!     Placement: bottom
//!     Facebook: basic sharer
//!     X: no attribution
//!     Order: pinterest,facebook,x,pocket,email,native
//!     Native script: required
//!
//! Channels
//! 001 Facebook
//! 002 X
//! 003 Email
//! 004 Native sharing
//! ```
//!
//! With metadata, each channel line carries its target:
//!
//! ```text
//! 001 Facebook → https://www.facebook.com/sharer.php?u=...
//! ```

use crate::channel::Channel;
use crate::compose::ShareTarget;
use crate::config::ShareConfig;
use crate::posts::RenderedPost;

fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

pub fn format_config(config: &ShareConfig) -> Vec<String> {
    let facebook = if config.facebook_app_id.is_empty() {
        "basic sharer".to_string()
    } else {
        format!("share dialog (app {})", config.facebook_app_id)
    };
    let x = if config.x_handle.is_empty() {
        "no attribution".to_string()
    } else {
        format!("via @{}", config.x_handle)
    };
    vec![
        "Config".to_string(),
        format!("{}Icon size: {}px", indent(1), config.icon_size),
        format!("{}Placement: {}", indent(1), config.placement.label()),
        format!("{}Facebook: {}", indent(1), facebook),
        format!("{}X: {}", indent(1), x),
        format!("{}Order: {}", indent(1), config.order_field_value()),
        format!(
            "{}Native script: {}",
            indent(1),
            if config.needs_native_script() { "required" } else { "not needed" }
        ),
    ]
}

/// One line per resolved channel.
pub fn format_channels(order: &[Channel]) -> Vec<String> {
    let mut lines = vec!["Channels".to_string()];
    if order.is_empty() {
        lines.push(format!("{}(none enabled)", indent(1)));
    }
    for (i, channel) in order.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), channel.label()));
    }
    lines
}

/// Channels with their generated targets. Channels without a target are
/// listed as omitted.
pub fn format_targets(order: &[Channel], targets: &[(Channel, ShareTarget)]) -> Vec<String> {
    let mut lines = vec!["Targets".to_string()];
    for (i, channel) in order.iter().enumerate() {
        let target = targets.iter().find(|(c, _)| c == channel).map(|(_, t)| t);
        let detail = match target {
            Some(ShareTarget::Native { url, .. }) => format!("native share ({url})"),
            Some(target) => target.href().to_string(),
            None => "omitted".to_string(),
        };
        lines.push(format!(
            "{} {} → {}",
            format_index(i + 1),
            channel.label(),
            detail
        ));
    }
    lines
}

pub fn format_build(rendered: &[RenderedPost]) -> Vec<String> {
    let mut lines: Vec<String> = rendered
        .iter()
        .enumerate()
        .map(|(i, post)| {
            format!(
                "{} {} ({} buttons) → {}.html",
                format_index(i + 1),
                post.slug,
                post.button_count,
                post.slug
            )
        })
        .collect();
    let posts = rendered.len();
    lines.push(format!(
        "Rendered {} post{}",
        posts,
        if posts == 1 { "" } else { "s" }
    ));
    lines
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

pub fn print_check_output(config: &ShareConfig, order: &[Channel]) {
    print_lines(format_config(config));
    println!();
    print_lines(format_channels(order));
}

pub fn print_targets(order: &[Channel], targets: &[(Channel, ShareTarget)]) {
    print_lines(format_targets(order, targets));
}

pub fn print_build_output(rendered: &[RenderedPost]) {
    print_lines(format_build(rendered));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose;
    use crate::types::ContentMetadata;

    #[test]
    fn format_config_default() {
        let lines = format_config(&ShareConfig::default());
        assert_eq!(lines[0], "Config");
        assert_eq!(lines[1], "    Icon size: 32px");
        assert_eq!(lines[2], "    Placement: bottom");
        assert_eq!(lines[3], "    Facebook: basic sharer");
        assert_eq!(lines[4], "    X: no attribution");
        assert_eq!(lines[5], "    Order: pinterest,facebook,x,pocket,email,native");
        assert_eq!(lines[6], "    Native script: required");
    }

    #[test]
    fn format_config_with_credentials() {
        let config = ShareConfig {
            facebook_app_id: "555".to_string(),
            x_handle: "mysite".to_string(),
            ..ShareConfig::default()
        };
        let lines = format_config(&config);
        assert_eq!(lines[3], "    Facebook: share dialog (app 555)");
        assert_eq!(lines[4], "    X: via @mysite");
    }

    #[test]
    fn format_channels_numbers_in_order() {
        let lines = format_channels(&[Channel::Email, Channel::Native]);
        assert_eq!(lines, vec!["Channels", "001 Email", "002 Native sharing"]);
    }

    #[test]
    fn format_channels_empty() {
        assert_eq!(format_channels(&[]), vec!["Channels", "    (none enabled)"]);
    }

    #[test]
    fn format_targets_marks_omitted() {
        let meta = ContentMetadata::new("https://example.test/p", "T");
        let order = [Channel::Pocket, Channel::Native];
        let targets = compose::compose_all(&[Channel::Pocket], &ShareConfig::default(), &meta);
        let lines = format_targets(&order, &targets);
        assert!(lines[1].starts_with("001 Pocket → https://getpocket.com/save?"));
        assert_eq!(lines[2], "002 Native sharing → omitted");
    }

    #[test]
    fn format_build_summary() {
        let rendered = vec![RenderedPost {
            slug: "hello".to_string(),
            html: String::new(),
            button_count: 3,
        }];
        let lines = format_build(&rendered);
        assert_eq!(lines[0], "001 hello (3 buttons) → hello.html");
        assert_eq!(lines[1], "Rendered 1 post");
    }
}
