use anyhow::Context;
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ubermove::{Config, ExternalEditor};

const EPILOG: &str = "\
ubermove comes with ABSOLUTELY NO WARRANTY.
This is free software, and you are welcome to redistribute it under certain conditions.";

/// ubermove allows you to move, rename and delete a tree of files by editing a listing using a
/// text editor.
///
/// Every file below SOURCE is listed on its own line, and every regular file inside a tar, zip
/// or rar archive is listed as ARCHIVE!/MEMBER. Edit a line to move the entry to that path
/// below TARGET, or empty it to delete the entry. Archive members are copied out, never
/// deleted, and a member line left unchanged is skipped.
#[derive(Parser, Debug)]
#[command(name = "umv", version, after_help = EPILOG)]
struct Cli {
    /// The editor command (defaults to $EDITOR)
    #[arg(short, long, value_name = "EDITOR")]
    editor: Option<OsString>,

    /// Log more (-v for a summary, -vv for every operation)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The source path
    #[arg(value_name = "SOURCE", value_parser = existing_dir)]
    source: PathBuf,

    /// The target path
    #[arg(value_name = "TARGET")]
    target: PathBuf,
}

/// Make the source absolute and require it to be a directory
fn existing_dir(raw: &str) -> Result<PathBuf, String> {
    let path = std::path::absolute(raw).map_err(|e| format!("{raw:?}: {e}"))?;

    if !path.is_dir() {
        return Err(format!("{raw:?} does not exist or is not a directory"));
    }

    Ok(path)
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::resolve(
        cli.source,
        cli.target,
        cli.editor,
        std::env::var_os("EDITOR"),
    )?;
    let editor = ExternalEditor::new(config.editor());

    let summary = ubermove::run(&config, &editor).with_context(|| {
        format!(
            "Failed to apply listing from {} to {}",
            config.source().display(),
            config.target().display()
        )
    })?;

    info!(applied = summary.applied(), "done");
    Ok(())
}
