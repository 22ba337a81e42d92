// Demo: query the latest published release and print the planned link
// rewrites. Needs network access to api.github.com.
use page_enhancer::{GithubReleases, ReleaseSource, plan_link_updates};

fn main() {
    let source = GithubReleases::new("buda-base/tibetan-ocr-app", "page-enhancer-demo");

    match source.latest_release() {
        Ok(release) => {
            println!("latest release: {}", release.tag);
            let plan = plan_link_updates(&release.assets);
            if plan.is_empty() {
                println!("no matching assets; links keep their defaults");
            }
            for update in plan {
                println!("{} -> {}", update.element_id(), update.url);
            }
        }
        Err(err) => {
            println!("release lookup failed ({err}); links keep their defaults");
        }
    }
}
