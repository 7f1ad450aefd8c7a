//! mdpreview - compile markdown to sanitized HTML, live.
//!
//! # Usage
//!
//! ```bash
//! mdpreview README.md
//! mdpreview --watch --standalone -o preview.html README.md
//! cat notes.md | mdpreview -
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use mdpreview::app::{App, SourceInput};
use mdpreview::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    save_config_flags,
};
use mdpreview::perf;

/// Compile markdown to sanitized HTML, optionally following the file as it changes
#[derive(Parser, Debug)]
#[command(name = "mdpreview", version, about, long_about = None)]
struct Cli {
    /// Markdown file to preview ("-" for stdin, omit for the welcome document)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Watch file for changes and re-render
    #[arg(short, long)]
    watch: bool,

    /// Keep single newlines inside paragraphs as soft breaks
    #[arg(long)]
    no_breaks: bool,

    /// Disable GitHub-flavored extensions (strikethrough, tables, autolinks, task lists)
    #[arg(long)]
    no_gfm: bool,

    /// Wrap the preview in a complete HTML page
    #[arg(short, long)]
    standalone: bool,

    /// Write the preview to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Log compile and sanitize timings
    #[arg(long)]
    perf: bool,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

impl Cli {
    /// The flags given on this command line, in config-file form.
    fn flags(&self) -> ConfigFlags {
        ConfigFlags {
            watch: self.watch,
            no_breaks: self.no_breaks,
            no_gfm: self.no_gfm,
            standalone: self.standalone,
            perf: self.perf,
            output: self.output.clone(),
        }
    }
}

fn init_logging(perf_enabled: bool) -> Result<()> {
    let mut filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());
    if perf_enabled {
        filter = filter.add_directive("mdpreview::perf=info".parse()?);
    }
    // stdout carries the preview; logs go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = cli.flags();

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    init_logging(effective.perf)?;
    perf::set_enabled(effective.perf);
    tracing::debug!(?effective, "effective flags");

    let app = App::new(SourceInput::from_arg(cli.file))
        .with_config(effective.compiler_config())
        .with_watch(effective.watch)
        .with_standalone(effective.standalone)
        .with_output(effective.output);

    app.run().context("Application error")
}
