use super::{
    provider::GitProvider,
    repo::Repo,
    status::{StatusRecord, count_stashes, parse_left_right_counts, parse_porcelain_status},
};
use crate::constants::{GIT_DIR_ENTRY, IGNORED_DIRS};
use anyhow::{Context, Result, bail};
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
    process::Command,
};

pub struct CliGitProvider;

impl CliGitProvider {
    fn run_git(repo_path: &Path, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(repo_path)
            .output()
            .with_context(|| format!("failed to run git {}", args.join(" ")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("git {} failed: {}", args.join(" "), stderr.trim());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn current_branch(repo_path: &Path) -> Result<String> {
        match Self::run_git(repo_path, &["rev-parse", "--abbrev-ref", "HEAD"]) {
            Ok(out) => Ok(out.trim().to_string()),
            // Unborn branch: HEAD exists as a symbolic ref but points at nothing
            Err(e) => Self::run_git(repo_path, &["symbolic-ref", "--short", "HEAD"])
                .map(|out| out.trim().to_string())
                .map_err(|_| e)
                .context("failed to get current branch"),
        }
    }

    fn tracking_branch(repo_path: &Path) -> Option<String> {
        Self::run_git(
            repo_path,
            &["rev-parse", "--abbrev-ref", "--symbolic-full-name", "@{u}"],
        )
        .ok()
        .map(|out| out.trim().to_string())
        .filter(|name| !name.is_empty())
    }

    fn scan_dir(
        dir: &Path,
        depth: u16,
        seen: &mut HashSet<PathBuf>,
        repos: &mut Vec<Repo>,
    ) {
        if dir.join(GIT_DIR_ENTRY).exists() {
            if seen.insert(dir.to_path_buf()) {
                repos.push(Repo::from_path(dir.to_path_buf()));
            }
            return;
        }
        if depth == 0 {
            return;
        }

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("skipping {}: {e}", dir.display());
                return;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let ignored = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| IGNORED_DIRS.contains(&n));
            if ignored {
                continue;
            }
            Self::scan_dir(&path, depth - 1, seen, repos);
        }
    }
}

impl GitProvider for CliGitProvider {
    fn discover_repos(&self, dirs: &[(PathBuf, u16)]) -> Vec<Repo> {
        let mut seen = HashSet::new();
        let mut repos = Vec::new();

        for (dir, depth) in dirs {
            Self::scan_dir(dir, *depth, &mut seen, &mut repos);
        }

        repos.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.path.cmp(&b.path)));
        log::debug!("discovered {} repositories", repos.len());
        repos
    }

    fn status(&self, repo_path: &Path) -> Result<StatusRecord> {
        let branch = Self::current_branch(repo_path)?;
        let tracking = Self::tracking_branch(repo_path);

        let (ahead, behind) = match &tracking {
            Some(upstream) => {
                let range = format!("{upstream}...HEAD");
                match Self::run_git(repo_path, &["rev-list", "--count", "--left-right", &range]) {
                    Ok(out) => parse_left_right_counts(&out).unwrap_or_default(),
                    Err(e) => {
                        log::debug!("ahead/behind unavailable for {}: {e}", repo_path.display());
                        (0, 0)
                    }
                }
            }
            None => (0, 0),
        };

        let stashes = Self::run_git(repo_path, &["stash", "list"])
            .map(|out| count_stashes(&out))
            .unwrap_or_default();

        let porcelain = Self::run_git(repo_path, &["status", "--porcelain"])
            .context("failed to get file status")?;

        Ok(StatusRecord {
            branch,
            tracking,
            ahead,
            behind,
            stashes,
            files: parse_porcelain_status(&porcelain),
        })
    }

    fn remote_url(&self, repo_path: &Path) -> Result<String> {
        let url = Self::run_git(repo_path, &["config", "--get", "remote.origin.url"])
            .map(|out| out.trim().to_string())
            .unwrap_or_default();
        if url.is_empty() {
            bail!("no remote configured");
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::ChangeKind;

    fn git(dir: &Path, args: &[&str]) {
        let output = Command::new("git")
            .args(args)
            .current_dir(dir)
            .output()
            .unwrap();
        assert!(
            output.status.success(),
            "git {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    fn init_test_repo(dir: &Path) {
        git(dir, &["init"]);
        git(dir, &["symbolic-ref", "HEAD", "refs/heads/main"]);
        git(dir, &["config", "user.email", "test@test.com"]);
        git(dir, &["config", "user.name", "Test"]);
        git(dir, &["config", "commit.gpgsign", "false"]);
        fs::write(dir.join("README.md"), "# test").unwrap();
        git(dir, &["add", "."]);
        git(dir, &["commit", "-m", "init"]);
    }

    #[test]
    fn test_discover_repos() {
        let tmp = tempfile::tempdir().unwrap();
        let repo_dir = tmp.path().join("my-repo");
        fs::create_dir_all(&repo_dir).unwrap();
        init_test_repo(&repo_dir);

        fs::create_dir_all(tmp.path().join("not-a-repo")).unwrap();

        let repos = CliGitProvider.discover_repos(&[(tmp.path().to_path_buf(), 1)]);
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].name, "my-repo");
        assert_eq!(repos[0].path, repo_dir);
    }

    #[test]
    fn test_discover_repos_sorted_ordinal() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["zebra", "alpha", "Middle"] {
            let d = tmp.path().join(name);
            fs::create_dir_all(&d).unwrap();
            fs::create_dir_all(d.join(".git")).unwrap();
        }

        let repos = CliGitProvider.discover_repos(&[(tmp.path().to_path_buf(), 1)]);
        let names: Vec<&str> = repos.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Middle", "alpha", "zebra"]);
    }

    #[test]
    fn test_discover_repos_respects_depth_and_ignores() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("group").join("deep");
        fs::create_dir_all(nested.join(".git")).unwrap();
        let ignored = tmp.path().join("node_modules").join("pkg");
        fs::create_dir_all(ignored.join(".git")).unwrap();

        let shallow = CliGitProvider.discover_repos(&[(tmp.path().to_path_buf(), 1)]);
        assert!(shallow.is_empty());

        let deep = CliGitProvider.discover_repos(&[(tmp.path().to_path_buf(), 3)]);
        assert_eq!(deep.len(), 1);
        assert_eq!(deep[0].path, nested);
    }

    #[test]
    fn test_discover_repos_does_not_descend_into_repos() {
        let tmp = tempfile::tempdir().unwrap();
        let outer = tmp.path().join("outer");
        fs::create_dir_all(outer.join(".git")).unwrap();
        fs::create_dir_all(outer.join("vendored").join(".git")).unwrap();

        let repos = CliGitProvider.discover_repos(&[(tmp.path().to_path_buf(), 3)]);
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].name, "outer");
    }

    #[test]
    fn test_discover_repos_dedups_overlapping_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let repo = tmp.path().join("work").join("api");
        fs::create_dir_all(repo.join(".git")).unwrap();

        let repos = CliGitProvider.discover_repos(&[
            (tmp.path().to_path_buf(), 2),
            (tmp.path().join("work"), 1),
        ]);
        assert_eq!(repos.len(), 1);
    }

    #[test]
    fn test_status_clean_repo() {
        let tmp = tempfile::tempdir().unwrap();
        init_test_repo(tmp.path());

        let status = CliGitProvider.status(tmp.path()).unwrap();
        assert_eq!(status.branch, "main");
        assert!(status.tracking.is_none());
        assert_eq!((status.ahead, status.behind), (0, 0));
        assert_eq!(status.stashes, 0);
        assert!(status.is_clean());
    }

    #[test]
    fn test_status_reports_changes() {
        let tmp = tempfile::tempdir().unwrap();
        init_test_repo(tmp.path());
        fs::write(tmp.path().join("README.md"), "# changed").unwrap();
        fs::write(tmp.path().join("new.txt"), "hello").unwrap();

        let status = CliGitProvider.status(tmp.path()).unwrap();
        assert_eq!(status.files.len(), 2);
        let readme = status.files.iter().find(|f| f.path == "README.md").unwrap();
        assert_eq!(readme.kind, ChangeKind::Modified);
        assert_eq!(readme.code, " M");
        let untracked = status.files.iter().find(|f| f.path == "new.txt").unwrap();
        assert_eq!(untracked.kind, ChangeKind::Untracked);
    }

    #[test]
    fn test_status_counts_stashes() {
        let tmp = tempfile::tempdir().unwrap();
        init_test_repo(tmp.path());
        fs::write(tmp.path().join("README.md"), "# stashed").unwrap();
        git(tmp.path(), &["stash"]);

        let status = CliGitProvider.status(tmp.path()).unwrap();
        assert_eq!(status.stashes, 1);
        assert!(status.is_clean());
    }

    #[test]
    fn test_status_ahead_of_upstream() {
        let tmp = tempfile::tempdir().unwrap();
        let upstream = tmp.path().join("upstream");
        let clone = tmp.path().join("clone");
        fs::create_dir_all(&upstream).unwrap();
        init_test_repo(&upstream);
        git(
            tmp.path(),
            &["clone", "--quiet", upstream.to_str().unwrap(), "clone"],
        );
        git(&clone, &["config", "user.email", "test@test.com"]);
        git(&clone, &["config", "user.name", "Test"]);
        git(&clone, &["config", "commit.gpgsign", "false"]);
        fs::write(clone.join("a.txt"), "a").unwrap();
        git(&clone, &["add", "."]);
        git(&clone, &["commit", "-m", "ahead"]);

        let status = CliGitProvider.status(&clone).unwrap();
        assert_eq!(status.tracking.as_deref(), Some("origin/main"));
        assert_eq!(status.ahead, 1);
        assert_eq!(status.behind, 0);
    }

    #[test]
    fn test_status_unborn_branch() {
        let tmp = tempfile::tempdir().unwrap();
        git(tmp.path(), &["init"]);
        git(tmp.path(), &["symbolic-ref", "HEAD", "refs/heads/trunk"]);

        let status = CliGitProvider.status(tmp.path()).unwrap();
        assert_eq!(status.branch, "trunk");
    }

    #[test]
    fn test_status_outside_repo_errors() {
        let tmp = tempfile::tempdir().unwrap();
        let err = CliGitProvider.status(tmp.path()).unwrap_err();
        assert!(
            format!("{err:#}").contains("failed to get current branch"),
            "unexpected error: {err:#}"
        );
    }

    #[test]
    fn test_remote_url() {
        let tmp = tempfile::tempdir().unwrap();
        init_test_repo(tmp.path());

        let err = CliGitProvider.remote_url(tmp.path()).unwrap_err();
        assert_eq!(err.to_string(), "no remote configured");

        git(
            tmp.path(),
            &["remote", "add", "origin", "git@github.com:me/gitf.git"],
        );
        let url = CliGitProvider.remote_url(tmp.path()).unwrap();
        assert_eq!(url, "git@github.com:me/gitf.git");
    }
}
