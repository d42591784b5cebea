use std::rc::Rc;

use crate::config::{DisplayField, DisplaySettings};

use super::model::MediaItem;

/// One line of a flattened catalog, as a list or tile view would consume it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub depth: usize,
    pub label: String,
    pub is_group: bool,
}

/// Format a duration in seconds as `M:SS`, or `H:MM:SS` from one hour up.
pub fn format_duration(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// Build a label for `item` from the configured `fields`, joined by `sep`.
///
/// Blank values are skipped, as is a zero duration. Falls back to the raw
/// title when no parts were produced.
pub fn label_from_fields(item: &MediaItem, fields: &[DisplayField], sep: &str) -> String {
    let mut parts: Vec<String> = Vec::new();

    for f in fields {
        match f {
            DisplayField::Title => push_trimmed(&mut parts, item.title()),
            DisplayField::Subtitle => push_trimmed(&mut parts, item.subtitle()),
            DisplayField::Studio => push_trimmed(&mut parts, item.studio()),
            DisplayField::Url => {
                if let Some(url) = item.url() {
                    push_trimmed(&mut parts, url);
                }
            }
            DisplayField::Duration => {
                if item.duration() > 0 {
                    parts.push(format_duration(item.duration()));
                }
            }
        }
    }

    if parts.is_empty() {
        item.title().to_string()
    } else {
        parts.join(sep)
    }
}

fn push_trimmed(parts: &mut Vec<String>, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        parts.push(value.to_string());
    }
}

/// Flatten the tree under `root` into rows in pre-order.
///
/// Depth is relative to `root`. Items deeper than `max_depth` are skipped
/// together with their subtrees.
pub fn rows(root: &Rc<MediaItem>, settings: &DisplaySettings) -> Vec<Row> {
    let mut out = Vec::new();
    let mut stack: Vec<(Rc<MediaItem>, usize)> = vec![(Rc::clone(root), 0)];

    while let Some((item, depth)) = stack.pop() {
        if settings.max_depth.is_some_and(|max| depth > max) {
            continue;
        }

        if depth > 0 || settings.include_root {
            out.push(Row {
                depth,
                label: label_from_fields(&item, &settings.fields, &settings.separator),
                is_group: item.is_group(),
            });
        }

        stack.extend(item.items().into_iter().rev().map(|child| (child, depth + 1)));
    }

    out
}
