//! Saved flag defaults.
//!
//! Config files hold the same tokens as the command line (`--no-breaks`,
//! `--standalone`, ...), one or more per line, with `#` comments. The
//! effective flags are global ∪ local override ∪ command line.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::compiler::CompilerConfig;

const APP_DIR: &str = "mdpreview";
const LOCAL_FILE: &str = ".mdpreviewrc";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub watch: bool,
    pub no_breaks: bool,
    pub no_gfm: bool,
    pub standalone: bool,
    pub perf: bool,
    pub output: Option<PathBuf>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            watch: self.watch || other.watch,
            no_breaks: self.no_breaks || other.no_breaks,
            no_gfm: self.no_gfm || other.no_gfm,
            standalone: self.standalone || other.standalone,
            perf: self.perf || other.perf,
            output: other.output.clone().or_else(|| self.output.clone()),
        }
    }

    /// The compiler switches these flags select.
    pub const fn compiler_config(&self) -> CompilerConfig {
        CompilerConfig::new(!self.no_breaks, !self.no_gfm)
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join(APP_DIR).join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join(APP_DIR)
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join(APP_DIR).join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join(APP_DIR).join("config");
        }
    }

    PathBuf::from(LOCAL_FILE)
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(LOCAL_FILE)
}

/// Load flags from `path`; a missing file means no flags.
///
/// # Errors
/// Returns an error if the file exists but cannot be read.
pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    let flags = parse_flag_tokens(&tokens);
    tracing::debug!(path = %path.display(), ?flags, "loaded config");
    Ok(flags)
}

/// Persist `flags` to `path`, creating parent directories.
///
/// # Errors
/// Returns an error if the directory or file cannot be written.
pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = vec!["# mdpreview defaults (saved with --save)".to_string()];
    for (enabled, token) in [
        (flags.watch, "--watch"),
        (flags.no_breaks, "--no-breaks"),
        (flags.no_gfm, "--no-gfm"),
        (flags.standalone, "--standalone"),
        (flags.perf, "--perf"),
    ] {
        if enabled {
            lines.push(token.to_string());
        }
    }
    if let Some(output) = &flags.output {
        lines.push(format!("--output {}", output.display()));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

/// Remove the config file at `path` if it exists.
///
/// # Errors
/// Returns an error if the file exists but cannot be removed.
pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pick known flags out of config-file tokens. Unknown tokens are skipped.
///
/// Command-line flags come from clap instead, which also understands
/// combined (`-ws`) and attached (`-oout.html`) short options.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        match tokens[i].as_str() {
            "--watch" | "-w" => flags.watch = true,
            "--no-breaks" => flags.no_breaks = true,
            "--no-gfm" => flags.no_gfm = true,
            "--standalone" | "-s" => flags.standalone = true,
            "--perf" => flags.perf = true,
            "--output" | "-o" => {
                if let Some(next) = tokens.get(i + 1) {
                    flags.output = Some(PathBuf::from(next));
                    i += 1;
                }
            }
            token => {
                if let Some(value) = token.strip_prefix("--output=") {
                    flags.output = Some(PathBuf::from(value));
                }
            }
        }
        i += 1;
    }
    flags
}
