use crate::document::Document;
use crate::options::{BlockKey, EnhancerOptions};
use crate::reveal::RevealObserver;
use crate::scroll::ScrollNavigator;

#[cfg(feature = "fetch")]
use crate::github::ReleaseSource;
#[cfg(feature = "fetch")]
use crate::release;

/// The page-ready composition of the three behaviors.
///
/// One value per page load. The three sub-behaviors are independent and
/// share no state beyond the viewport geometry; the host wires its events
/// to:
/// - [`PageEnhancer::update_download_links`] once at startup
/// - [`PageEnhancer::on_anchor_click`] for clicks on `#fragment` anchors
/// - [`PageEnhancer::on_scroll`] for user scrolls
/// - [`PageEnhancer::tick`] once per frame
///
/// Blocks already inside the viewport reveal on the first pass after they
/// are observed (the next tick or scroll event).
#[derive(Clone, Debug)]
pub struct PageEnhancer<K = BlockKey> {
    options: EnhancerOptions<K>,
    navigator: ScrollNavigator,
    reveal: RevealObserver<K>,
}

impl<K: PartialEq> PageEnhancer<K> {
    pub fn new(options: EnhancerOptions<K>) -> Self {
        let mut navigator = ScrollNavigator::new(options.scroll_duration_ms, options.easing);
        navigator.set_viewport_size(options.initial_viewport);
        navigator.set_content_size(options.content_size);
        navigator.set_scroll_offset(options.initial_offset);
        let reveal = RevealObserver::new(options.reveal_threshold);
        edebug!(
            repo = %options.repo,
            reveal_threshold = options.reveal_threshold as f64,
            "PageEnhancer::new"
        );
        Self {
            options,
            navigator,
            reveal,
        }
    }

    pub fn options(&self) -> &EnhancerOptions<K> {
        &self.options
    }

    pub fn navigator(&self) -> &ScrollNavigator {
        &self.navigator
    }

    pub fn observer(&self) -> &RevealObserver<K> {
        &self.reveal
    }

    /// Queries the latest published release and rewrites the download
    /// links through `doc`.
    ///
    /// Runs once at startup. Any failure, transport or payload, is caught
    /// here, logged, and swallowed: the page keeps whatever default link
    /// values it already carries, and nothing surfaces to the user.
    #[cfg(feature = "fetch")]
    pub fn update_download_links(&self, source: &impl ReleaseSource, doc: &mut impl Document) {
        match source.latest_release() {
            Ok(latest) => {
                release::apply_release(&latest, doc);
            }
            Err(err) => {
                eerror!(error = %err, "release lookup failed; keeping default links");
            }
        }
    }

    /// Registers a content block for reveal-on-scroll.
    pub fn observe_block(&mut self, key: K, start: u64, size: u32) {
        self.reveal.observe(key, start, size);
    }

    /// Stops observing a block without revealing it.
    pub fn unobserve_block(&mut self, key: &K) {
        self.reveal.unobserve(key);
    }

    /// Handles a click on an anchor element.
    ///
    /// Returns `true` when the click was intercepted and an animation
    /// started; `false` when the reference is not a fragment or does not
    /// resolve, in which case the host should let its default navigation
    /// run.
    pub fn on_anchor_click(&mut self, doc: &impl Document, href: &str, now_ms: u64) -> bool {
        self.navigator.click_anchor(doc, href, now_ms)
    }

    /// Reports a user scroll. Cancels any in-flight animation and runs a
    /// reveal pass at the new offset.
    pub fn on_scroll(&mut self, offset: u64) {
        self.navigator.on_scroll(offset);
        self.sweep_reveals();
    }

    /// Reports a viewport resize and runs a reveal pass, since resizing
    /// can bring blocks into view.
    pub fn set_viewport_size(&mut self, size: u32) {
        self.navigator.set_viewport_size(size);
        self.sweep_reveals();
    }

    pub fn set_content_size(&mut self, size: u64) {
        self.navigator.set_content_size(size);
    }

    /// Advances the animation and runs a reveal pass.
    ///
    /// Returns the offset to apply to the real scroll container while an
    /// animation is running; `None` when idle.
    pub fn tick(&mut self, now_ms: u64) -> Option<u64> {
        let applied = self.navigator.tick(now_ms);
        self.sweep_reveals();
        applied
    }

    pub fn scroll_offset(&self) -> u64 {
        self.navigator.scroll_offset()
    }

    pub fn is_animating(&self) -> bool {
        self.navigator.is_animating()
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.reveal.is_revealed(key)
    }

    pub fn revealed_count(&self) -> usize {
        self.reveal.revealed_count()
    }

    fn sweep_reveals(&mut self) {
        let offset = self.navigator.scroll_offset();
        let viewport = self.navigator.viewport_size();
        let on_reveal = self.options.on_reveal.clone();
        self.reveal.update(offset, viewport, |key| {
            if let Some(cb) = &on_reveal {
                cb(key);
            }
        });
    }
}
