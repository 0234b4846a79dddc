// src/fetch/urls.rs
use anyhow::{Context, Result};
use url::Url;

/// Raw-content root of the replication repository.
pub static BASE_URL: &str =
    "https://raw.githubusercontent.com/DiogoFerrari/replication-twitter-deplatforming/refs/heads/master/";

/// One dataset split into sequentially numbered `.part` files under a
/// common remote path.
#[derive(Debug, Clone, Copy)]
pub struct Group {
    pub path: &'static str,
    pub parts: usize,
    /// Zero-padding width of the part index in the remote filenames.
    pub width: usize,
}

impl Group {
    /// Width follows the part count: two digits for groups of up to 99
    /// parts, three beyond that.
    pub const fn new(path: &'static str, parts: usize) -> Self {
        let width = if parts <= 99 { 2 } else { 3 };
        Self { path, parts, width }
    }
}

pub static GROUPS: &[Group] = &[
    Group::new("data/final/decahose-daily-totals.csv", 61),
    Group::new("data/final/panel-2016-daily-totals.csv", 61),
    Group::new("data/final/panel-2020-daily-totals.csv", 122),
];

/// Enumerate the full part-file URLs for `group`, in index order.
pub fn part_urls(base: &str, group: &Group) -> Result<Vec<Url>> {
    let base = Url::parse(base).with_context(|| format!("invalid base URL {}", base))?;
    let width = group.width;
    (0..group.parts)
        .map(|idx| {
            let rel = format!("{}/{idx:0width$}.part", group.path);
            base.join(&rel).with_context(|| format!("joining {}", rel))
        })
        .collect()
}
