use alloc::vec::Vec;

use crate::document::Document;
use crate::types::{LinkUpdate, Platform, Release, ReleaseAsset};

/// Selects the first asset (in listing order) matching `platform`.
///
/// Order-sensitive on purpose: when several assets match, the first one the
/// service returned wins. Selection is independent per platform, so one
/// asset may satisfy more than one target.
pub fn select_asset(assets: &[ReleaseAsset], platform: Platform) -> Option<&ReleaseAsset> {
    assets.iter().find(|a| platform.matches(&a.name))
}

/// Plans the download-link rewrites for `assets`.
///
/// One entry per platform with a matching asset, in [`Platform::ALL`]
/// order. Platforms without a match are skipped so their links keep the
/// value already present in the page. An empty asset list plans nothing.
pub fn plan_link_updates(assets: &[ReleaseAsset]) -> Vec<LinkUpdate> {
    Platform::ALL
        .iter()
        .filter_map(|&platform| {
            select_asset(assets, platform).map(|a| LinkUpdate {
                platform,
                url: a.download_url.clone(),
            })
        })
        .collect()
}

/// Writes the planned link rewrites for `release` into `doc`.
///
/// Each link element is written at most once, and only when a matching
/// asset exists. Returns how many links were rewritten.
pub fn apply_release(release: &Release, doc: &mut impl Document) -> usize {
    let updates = plan_link_updates(&release.assets);
    for update in &updates {
        doc.set_link_href(update.element_id(), &update.url);
    }
    edebug!(
        tag = %release.tag,
        links = updates.len(),
        "download links updated"
    );
    updates.len()
}
