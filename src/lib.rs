//! A headless page-enhancement engine.
//!
//! Three behaviors a landing page runs once per load, reworked as an
//! adapter-driven core:
//! - release-aware download links: query the latest published release of a
//!   repository and rewrite platform download targets from its asset names
//! - smooth anchor scrolling: intercept `#fragment` clicks and tween the
//!   scroll offset to the referenced element
//! - reveal-on-scroll: mark content blocks the first time enough of them
//!   enters the viewport, then stop watching them
//!
//! It is UI-agnostic. A host layer (wasm shell, TUI, test harness) is
//! expected to provide:
//! - viewport size and scroll offset
//! - click/scroll events plus a frame tick
//! - a [`Document`] handle for fragment lookup and link mutation
//!
//! The engine computes offsets and state transitions; the host applies them
//! to the real page.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod document;
mod enhancer;
mod options;
mod release;
mod reveal;
mod scroll;
mod types;

#[cfg(feature = "fetch")]
mod github;


pub use document::Document;
pub use enhancer::PageEnhancer;
pub use options::{BlockKey, EnhancerOptions, OnRevealCallback};
pub use release::{apply_release, plan_link_updates, select_asset};
pub use reveal::{DEFAULT_REVEAL_THRESHOLD, RevealObserver};
pub use scroll::{Easing, ScrollNavigator, Tween};
pub use types::{LinkUpdate, Platform, Release, ReleaseAsset, RevealState};

#[cfg(feature = "fetch")]
pub use github::{FetchError, GithubReleases, ReleaseSource};
