use anyhow::{Result, bail};
use regex::Regex;
use std::sync::LazyLock;

/// `user@host:owner/repo(.git)`
static SCP_LIKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.-]+@([\w.-]+):/?(.+?)(?:\.git)?/?$").unwrap());

/// Convert a remote URL into an `https://` URL a browser can open.
pub fn to_browsable(url: &str) -> Result<String> {
    let url = url.trim();

    for scheme in ["https://", "http://"] {
        if url.starts_with(scheme) {
            let trimmed = url.trim_end_matches('/');
            return Ok(trimmed.strip_suffix(".git").unwrap_or(trimmed).to_string());
        }
    }

    if let Some(rest) = url
        .strip_prefix("ssh://")
        .or_else(|| url.strip_prefix("git+ssh://"))
    {
        let rest = rest.split_once('@').map_or(rest, |(_, host_path)| host_path);
        let Some((authority, path)) = rest.split_once('/') else {
            bail!("unsupported git URL format: {url}");
        };
        // Drop an explicit port; the web UI never lives on the ssh port
        let host = authority.split_once(':').map_or(authority, |(h, _)| h);
        let path = path.trim_end_matches('/');
        let path = path.strip_suffix(".git").unwrap_or(path);
        if host.is_empty() || path.is_empty() {
            bail!("unsupported git URL format: {url}");
        }
        return Ok(format!("https://{host}/{path}"));
    }

    if let Some(caps) = SCP_LIKE.captures(url) {
        return Ok(format!("https://{}/{}", &caps[1], &caps[2]));
    }

    bail!("unsupported git URL format: {url}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_https_strips_git_suffix() {
        assert_eq!(
            to_browsable("https://github.com/me/gitf.git").unwrap(),
            "https://github.com/me/gitf"
        );
        assert_eq!(
            to_browsable("https://gitlab.com/group/sub/proj").unwrap(),
            "https://gitlab.com/group/sub/proj"
        );
    }

    #[test]
    fn test_http_kept_as_is() {
        assert_eq!(
            to_browsable("http://git.internal/team/app.git").unwrap(),
            "http://git.internal/team/app"
        );
    }

    #[test]
    fn test_scp_like_ssh() {
        assert_eq!(
            to_browsable("git@github.com:me/gitf.git").unwrap(),
            "https://github.com/me/gitf"
        );
        assert_eq!(
            to_browsable("git@gitlab.com:group/sub/proj").unwrap(),
            "https://gitlab.com/group/sub/proj"
        );
    }

    #[test]
    fn test_ssh_scheme() {
        assert_eq!(
            to_browsable("ssh://git@github.com/me/gitf.git").unwrap(),
            "https://github.com/me/gitf"
        );
        assert_eq!(
            to_browsable("ssh://git@example.com:2222/team/app.git").unwrap(),
            "https://example.com/team/app"
        );
    }

    #[test]
    fn test_unsupported_formats() {
        for url in ["/srv/git/app.git", "file:///srv/git/app", "ssh://host", ""] {
            let err = to_browsable(url).unwrap_err();
            assert!(
                err.to_string().starts_with("unsupported git URL format"),
                "{url}: {err}"
            );
        }
    }
}
