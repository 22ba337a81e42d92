use crate::document::Document;

/// Easing curves for the anchor scroll animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    EaseInOutCubic,
}

impl Easing {
    pub fn sample(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}

/// An in-flight animation of the scroll offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: u64,
    pub to: u64,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: u64, to: u64, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> u64 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f64 / self.duration_ms as f64).clamp(0.0, 1.0);
        let eased = self.easing.sample(t);

        let from = self.from as f64;
        let to = self.to as f64;
        let v = from + (to - from) * eased;
        v.max(0.0) as u64
    }

    /// Redirects the animation toward `new_to`, continuing from the
    /// currently sampled offset.
    pub fn retarget(&mut self, now_ms: u64, new_to: u64, duration_ms: u64) {
        let cur = self.sample(now_ms);
        *self = Self::new(cur, new_to, now_ms, duration_ms, self.easing);
    }
}

/// Smooth in-page anchor navigation.
///
/// Owns the scroll state and the in-flight animation; holds no UI objects.
/// The host reports user scrolls via [`ScrollNavigator::on_scroll`] and
/// advances the animation with [`ScrollNavigator::tick`], applying each
/// returned offset to the real scroll container.
#[derive(Clone, Debug)]
pub struct ScrollNavigator {
    scroll_offset: u64,
    viewport_size: u32,
    content_size: u64,
    duration_ms: u64,
    easing: Easing,
    tween: Option<Tween>,
}

impl ScrollNavigator {
    pub fn new(duration_ms: u64, easing: Easing) -> Self {
        Self {
            scroll_offset: 0,
            viewport_size: 0,
            content_size: 0,
            duration_ms,
            easing,
            tween: None,
        }
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn viewport_size(&self) -> u32 {
        self.viewport_size
    }

    pub fn content_size(&self) -> u64 {
        self.content_size
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    pub fn set_viewport_size(&mut self, size: u32) {
        self.viewport_size = size;
    }

    pub fn set_content_size(&mut self, size: u64) {
        self.content_size = size;
    }

    pub fn set_scroll_offset(&mut self, offset: u64) {
        self.scroll_offset = offset;
    }

    /// Call this when the host reports a user scroll (wheel/drag).
    ///
    /// This cancels any active animation: user input wins over a running
    /// smooth scroll.
    pub fn on_scroll(&mut self, offset: u64) {
        self.cancel_animation();
        self.scroll_offset = offset;
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.content_size.saturating_sub(self.viewport_size as u64)
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        if self.content_size == 0 {
            // Content size not reported yet; nothing to clamp against.
            return offset;
        }
        offset.min(self.max_scroll_offset())
    }

    /// Handles a click on an anchor element.
    ///
    /// `href` must be a fragment reference (`#section`). Returns `true`
    /// when the click was intercepted and an animation started; `false`
    /// when the reference is not a fragment or does not resolve, in which
    /// case the host should let its default navigation run.
    pub fn click_anchor(&mut self, doc: &impl Document, href: &str, now_ms: u64) -> bool {
        let Some(id) = href.strip_prefix('#') else {
            return false;
        };
        let Some(target) = doc.element_offset(id) else {
            ewarn!(fragment = id, "anchor target not found");
            return false;
        };
        self.start_tween(target, now_ms);
        true
    }

    /// Starts an animation toward `offset`, or redirects the in-flight one
    /// from its currently sampled position.
    ///
    /// Returns the clamped target.
    pub fn start_tween(&mut self, offset: u64, now_ms: u64) -> u64 {
        let to = self.clamp_scroll_offset(offset);
        match &mut self.tween {
            Some(tween) => tween.retarget(now_ms, to, self.duration_ms),
            None => {
                self.tween = Some(Tween::new(
                    self.scroll_offset,
                    to,
                    now_ms,
                    self.duration_ms,
                    self.easing,
                ));
            }
        }
        etrace!(to, now_ms, "start_tween");
        to
    }

    /// Advances the animation.
    ///
    /// Returns the new offset while animating, so the host can apply it to
    /// the real scroll container; `None` when idle.
    pub fn tick(&mut self, now_ms: u64) -> Option<u64> {
        let tween = self.tween?;
        self.scroll_offset = self.clamp_scroll_offset(tween.sample(now_ms));
        if tween.is_done(now_ms) {
            self.tween = None;
        }
        Some(self.scroll_offset)
    }
}
