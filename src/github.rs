//! Latest-release lookup against the GitHub API.

use crate::types::{Release, ReleaseAsset};

/// Where release metadata comes from.
///
/// The engine only needs "the latest published release". Keeping the
/// transport behind a trait lets hosts substitute a cache or a fixture,
/// and keeps the failure path exercisable without a network.
pub trait ReleaseSource {
    fn latest_release(&self) -> Result<Release, FetchError>;
}

/// Failure of a release lookup.
///
/// Callers at the page boundary treat every variant the same way: log the
/// diagnostic and keep the default links.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("release request failed: {0}")]
    Http(#[source] Box<ureq::Error>),
    #[error("malformed release payload: {0}")]
    Payload(#[from] std::io::Error),
}

impl From<ureq::Error> for FetchError {
    fn from(err: ureq::Error) -> Self {
        Self::Http(Box::new(err))
    }
}

/// GitHub's wire shape for a release. Only the fields used here.
#[derive(serde::Deserialize)]
struct WireRelease {
    tag_name: String,
    #[serde(default)]
    assets: Vec<WireAsset>,
}

#[derive(serde::Deserialize)]
struct WireAsset {
    name: String,
    browser_download_url: String,
}

impl From<WireRelease> for Release {
    fn from(wire: WireRelease) -> Self {
        Self {
            tag: wire.tag_name,
            assets: wire
                .assets
                .into_iter()
                .map(|a| ReleaseAsset {
                    name: a.name,
                    download_url: a.browser_download_url,
                })
                .collect(),
        }
    }
}

pub(crate) fn parse_release(body: &str) -> Result<Release, FetchError> {
    let wire: WireRelease = serde_json::from_str(body).map_err(std::io::Error::from)?;
    Ok(wire.into())
}

/// Fetches the latest published release of one repository.
///
/// One GET per call, no retry, no explicit timeout (the transport's
/// defaults apply).
#[derive(Clone, Debug)]
pub struct GithubReleases {
    repo: String,
    user_agent: String,
}

impl GithubReleases {
    pub fn new(repo: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            repo: repo.into(),
            user_agent: user_agent.into(),
        }
    }

    pub(crate) fn url(&self) -> String {
        format!("https://api.github.com/repos/{}/releases/latest", self.repo)
    }
}

impl ReleaseSource for GithubReleases {
    fn latest_release(&self) -> Result<Release, FetchError> {
        let response = ureq::get(&self.url())
            .set("User-Agent", &self.user_agent)
            .call()?;
        let body = response.into_string()?;
        parse_release(&body)
    }
}
