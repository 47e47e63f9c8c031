//! Hand an article URL to the platform's web browser.
//!
//! URLs come from the server, so they never pass through a shell: the
//! launcher receives the address as a single argv entry.

use std::process::{Command, Stdio};
use std::thread;

use anyhow::{bail, Context, Result};
use reqwest::Url;

/// Launcher program and leading arguments for `os` (a `std::env::consts::OS` value).
fn launcher(os: &str) -> (&'static str, &'static [&'static str]) {
    const NONE: &[&str] = &[];
    // Not `cmd /C start`: cmd.exe would interpret `&`, `|` and `^` in the URL.
    const WINDOWS_HANDLER: &[&str] = &["url.dll,FileProtocolHandler"];

    match os {
        "macos" => ("open", NONE),
        "windows" => ("rundll32", WINDOWS_HANDLER),
        _ => ("xdg-open", NONE),
    }
}

/// The command that opens `url` on `os`.
fn launch_command(os: &str, url: &str) -> Command {
    let (program, args) = launcher(os);
    let mut command = Command::new(program);
    command
        .args(args)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    command
}

/// Only absolute `http`/`https` addresses are handed to the launcher.
fn is_web_url(url: &str) -> bool {
    Url::parse(url)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Open `url` without waiting for the browser to exit.
pub fn open(url: &str) -> Result<()> {
    if !is_web_url(url) {
        bail!("refusing to open non-web address {url:?}");
    }

    let mut command = launch_command(std::env::consts::OS, url);
    let mut child = command
        .spawn()
        .with_context(|| format!("launching {:?}", command.get_program()))?;

    // Reap the launcher so it does not linger as a zombie.
    thread::spawn(move || {
        let _ = child.wait();
    });

    tracing::debug!(url, "opened in browser");
    Ok(())
}
