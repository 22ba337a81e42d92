use alloc::string::String;
use alloc::sync::Arc;

use crate::reveal::DEFAULT_REVEAL_THRESHOLD;
use crate::scroll::Easing;

/// Default key type for revealable blocks (element identifiers).
pub type BlockKey = String;

/// A callback fired once per block when it transitions to revealed.
pub type OnRevealCallback<K> = Arc<dyn Fn(&K) + Send + Sync>;

/// Configuration for [`crate::PageEnhancer`].
///
/// Cheap to clone: the reveal callback is stored in an `Arc`.
pub struct EnhancerOptions<K = BlockKey> {
    /// `owner/name` of the repository whose latest release feeds the
    /// download links.
    pub repo: String,
    /// `User-Agent` sent with the release lookup.
    pub user_agent: String,
    /// Visibility fraction a block must reach before it is revealed.
    ///
    /// Clamped to `0.0..=1.0` when the watcher is built.
    pub reveal_threshold: f32,
    /// Duration of the anchor scroll animation.
    pub scroll_duration_ms: u64,
    pub easing: Easing,
    /// Initial scroll offset.
    pub initial_offset: u64,
    /// Initial viewport size in the scroll axis.
    pub initial_viewport: u32,
    /// Total scrollable content size; anchor targets are clamped against
    /// it once it is nonzero.
    pub content_size: u64,
    /// Optional callback fired once per block when it becomes revealed.
    pub on_reveal: Option<OnRevealCallback<K>>,
}

impl EnhancerOptions<BlockKey> {
    /// Creates options for blocks keyed by element id strings.
    pub fn new(repo: impl Into<String>) -> Self {
        Self::new_with_key(repo)
    }
}

impl<K> EnhancerOptions<K> {
    /// Creates options with a custom block key type.
    pub fn new_with_key(repo: impl Into<String>) -> Self {
        Self {
            repo: repo.into(),
            user_agent: String::from(concat!("page-enhancer/", env!("CARGO_PKG_VERSION"))),
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            scroll_duration_ms: 400,
            easing: Easing::EaseInOutCubic,
            initial_offset: 0,
            initial_viewport: 0,
            content_size: 0,
            on_reveal: None,
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_reveal_threshold(mut self, threshold: f32) -> Self {
        self.reveal_threshold = threshold;
        self
    }

    pub fn with_scroll_duration_ms(mut self, duration_ms: u64) -> Self {
        self.scroll_duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_initial_offset(mut self, offset: u64) -> Self {
        self.initial_offset = offset;
        self
    }

    pub fn with_initial_viewport(mut self, viewport: u32) -> Self {
        self.initial_viewport = viewport;
        self
    }

    pub fn with_content_size(mut self, content_size: u64) -> Self {
        self.content_size = content_size;
        self
    }

    pub fn with_on_reveal(
        mut self,
        on_reveal: Option<impl Fn(&K) + Send + Sync + 'static>,
    ) -> Self {
        self.on_reveal = on_reveal.map(|f| Arc::new(f) as _);
        self
    }
}

impl<K> Clone for EnhancerOptions<K> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            user_agent: self.user_agent.clone(),
            reveal_threshold: self.reveal_threshold,
            scroll_duration_ms: self.scroll_duration_ms,
            easing: self.easing,
            initial_offset: self.initial_offset,
            initial_viewport: self.initial_viewport,
            content_size: self.content_size,
            on_reveal: self.on_reveal.clone(),
        }
    }
}

impl<K> core::fmt::Debug for EnhancerOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EnhancerOptions")
            .field("repo", &self.repo)
            .field("user_agent", &self.user_agent)
            .field("reveal_threshold", &self.reveal_threshold)
            .field("scroll_duration_ms", &self.scroll_duration_ms)
            .field("easing", &self.easing)
            .field("initial_offset", &self.initial_offset)
            .field("initial_viewport", &self.initial_viewport)
            .field("content_size", &self.content_size)
            .finish_non_exhaustive()
    }
}
