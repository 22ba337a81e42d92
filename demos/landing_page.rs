// Demo: a simulated landing page driving the engine frame by frame.
use std::collections::HashMap;

use page_enhancer::{
    Document, EnhancerOptions, FetchError, PageEnhancer, Release, ReleaseAsset, ReleaseSource,
};

struct Page {
    anchors: HashMap<String, u64>,
    links: HashMap<String, String>,
}

impl Document for Page {
    fn element_offset(&self, id: &str) -> Option<u64> {
        self.anchors.get(id).copied()
    }

    fn set_link_href(&mut self, id: &str, url: &str) {
        self.links.insert(id.to_string(), url.to_string());
    }
}

/// Stands in for the GitHub endpoint so the demo runs offline.
struct CannedSource;

impl ReleaseSource for CannedSource {
    fn latest_release(&self) -> Result<Release, FetchError> {
        Ok(Release {
            tag: "v1.4.0".to_string(),
            assets: vec![
                ReleaseAsset::new("app-windows-x64.exe", "https://cdn.example/app-windows-x64.exe"),
                ReleaseAsset::new("app-macos-arm64.dmg", "https://cdn.example/app-macos-arm64.dmg"),
                ReleaseAsset::new("app-macos-x64.dmg", "https://cdn.example/app-macos-x64.dmg"),
            ],
        })
    }
}

fn main() {
    let mut anchors = HashMap::new();
    anchors.insert("features".to_string(), 1400);
    anchors.insert("downloads".to_string(), 3200);
    let mut page = Page {
        anchors,
        links: HashMap::new(),
    };

    let mut enhancer = PageEnhancer::new(
        EnhancerOptions::new("buda-base/tibetan-ocr-app")
            .with_initial_viewport(900)
            .with_content_size(4200)
            .with_scroll_duration_ms(320)
            .with_on_reveal(Some(|key: &String| println!("  reveal: {key}"))),
    );

    // Page-ready: point the download links at the latest release.
    enhancer.update_download_links(&CannedSource, &mut page);
    println!("download links:");
    for (id, url) in &page.links {
        println!("  {id} -> {url}");
    }

    // Feature rows further down the page, hidden until scrolled into view.
    enhancer.observe_block("feature-row-1".to_string(), 1400, 260);
    enhancer.observe_block("feature-row-2".to_string(), 1720, 260);
    enhancer.observe_block("feature-row-3".to_string(), 2040, 260);

    println!("click on `#features`:");
    enhancer.on_anchor_click(&page, "#features", 0);

    // Simulate a 60fps host loop applying the animated offset.
    let mut now_ms = 0u64;
    while enhancer.is_animating() {
        now_ms = now_ms.saturating_add(16);
        if let Some(off) = enhancer.tick(now_ms) {
            if now_ms % 80 == 0 {
                println!("  t={now_ms}ms off={off}");
            }
        }
    }

    // Scrolling away and back does not reveal anything twice.
    enhancer.on_scroll(0);
    enhancer.on_scroll(1400);

    println!(
        "done: off={} revealed={}/3",
        enhancer.scroll_offset(),
        enhancer.revealed_count()
    );
}
