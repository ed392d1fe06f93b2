use super::provider::Launcher;
use crate::{config::Config, platform};
use anyhow::{Context, Result, bail};
use std::{
    path::Path,
    process::{Command, Stdio},
    thread,
};

pub struct CliLauncher {
    file_manager: Option<String>,
    terminal: Option<String>,
    browser: Vec<String>,
}

impl CliLauncher {
    pub fn from_config(config: &Config) -> Self {
        Self {
            file_manager: config.file_manager_command(),
            terminal: config.terminal_command(),
            browser: platform::browser_opener(),
        }
    }
}

/// Split a configured command line into program and arguments
fn split_command(command: &str) -> Result<(String, Vec<String>)> {
    let Some(mut parts) = shlex::split(command) else {
        bail!("could not parse command: {command}");
    };
    if parts.is_empty() {
        bail!("empty command");
    }
    let program = parts.remove(0);
    Ok((program, parts))
}

fn spawn_detached(program: &str, args: &[String], cwd: Option<&Path>) -> Result<()> {
    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        // Keep terminal signals (Ctrl+C in gitf) away from the child
        cmd.process_group(0);
    }

    let mut child = cmd
        .spawn()
        .with_context(|| format!("failed to start {program}"))?;
    log::info!("started {program} (pid {})", child.id());

    // Reap in the background so the child never lingers as a zombie
    thread::spawn(move || {
        let _ = child.wait();
    });
    Ok(())
}

impl Launcher for CliLauncher {
    fn open_file_manager(&self, dir: &Path) -> Result<()> {
        let Some(command) = &self.file_manager else {
            bail!("no file manager found");
        };
        let (program, mut args) = split_command(command)?;
        args.push(dir.to_string_lossy().into_owned());
        spawn_detached(&program, &args, None)
    }

    fn open_terminal(&self, dir: &Path) -> Result<()> {
        let Some(command) = &self.terminal else {
            bail!("no terminal emulator found");
        };
        let (program, mut args) = split_command(command)?;
        // `open -a Terminal` ignores its working directory and takes the path instead
        if cfg!(target_os = "macos") {
            args.push(dir.to_string_lossy().into_owned());
        }
        spawn_detached(&program, &args, Some(dir))
    }

    fn open_url(&self, url: &str) -> Result<()> {
        let Some((program, rest)) = self.browser.split_first() else {
            bail!("no browser opener for this platform");
        };
        let mut args = rest.to_vec();
        args.push(url.to_string());
        spawn_detached(program, &args, None)
    }
}

/// Run the editor on `dir` in the foreground, inheriting the terminal
pub fn open_in_editor(editor: &str, dir: &Path) -> Result<()> {
    let (program, args) = split_command(editor)?;
    let status = Command::new(&program)
        .args(&args)
        .arg(dir)
        .current_dir(dir)
        .status()
        .with_context(|| format!("failed to start editor {program}"))?;
    if !status.success() {
        bail!("editor {program} exited with {status}");
    }
    Ok(())
}
