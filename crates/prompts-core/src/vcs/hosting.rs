//! Web URLs for repositories hosted on GitHub

use once_cell::sync::Lazy;
use regex::Regex;

/// scp-style (`git@github.com:user/repo.git`) and scheme-style
/// (`git://`, `https://`, `ssh://`) GitHub repository URLs
static GITHUB_REPO_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^.+(?:@|://)(github\.com)[:/](.+?)(?:\.git|/)?$").unwrap());

/// Derive the `https://github.com/<user>/<repo>` page for a repository URL,
/// optionally followed by `suffix` (e.g. `issues`).
///
/// Returns `None` for URLs that are not recognizably GitHub-hosted.
pub fn github_url(uri: &str, suffix: Option<&str>) -> Option<String> {
    let captures = GITHUB_REPO_PATTERN.captures(uri)?;
    let mut url = format!("https://{}/{}", &captures[1], &captures[2]);

    if let Some(suffix) = suffix.filter(|s| !s.is_empty()) {
        url.push('/');
        url.push_str(suffix.strip_prefix('/').unwrap_or(suffix));
    }

    Some(url)
}
