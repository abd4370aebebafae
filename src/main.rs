//! errpage CLI - locale-aware error page lookup
//!
//! Usage: errpage <COMMAND>
//!
//! Commands:
//!   resolve   List error page candidates in lookup order
//!   find      Print the first candidate that exists
//!   hostname  Print the host component of a URL
//!   to-path   Convert a file: URI to a local path
//!   to-uri    Convert an absolute path to a file: URI
//!   fmt-json  Validate and pretty-print a JSON document

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use errpage::config::system_language;
use errpage::util::{hostname, json_to_string, local_to_uri, parse_json, uri_to_local};
use errpage::{
    Config, ErrorPageResolver, LogLevel, NoopTraceSink, TraceSink, TracingTraceSink,
};

/// errpage - locale-aware error page lookup
#[derive(Parser, Debug)]
#[command(name = "errpage")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Machine-readable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Config file (defaults to <config dir>/errpage/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List error page candidates, most specific first
    Resolve {
        /// Generic error page location (defaults to config error_page.location)
        path: Option<String>,

        /// Language tag, e.g. en-US (defaults to config, then LANG)
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Print the first error page candidate that exists on disk
    Find {
        /// Generic error page location (defaults to config error_page.location)
        path: Option<String>,

        /// Language tag, e.g. en-US (defaults to config, then LANG)
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Print the host component of a URL
    Hostname {
        url: String,
    },

    /// Convert a file: URI to a local path
    ToPath {
        uri: String,
    },

    /// Convert an absolute local path to a file: URI
    ToUri {
        path: PathBuf,
    },

    /// Validate a JSON document and print it with four-space indentation
    FmtJson {
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, warnings) = Config::load_or_default(cli.config.as_deref())
        .context("failed to load configuration")?;
    let config = config.with_env_overrides();
    for warning in &warnings {
        eprintln!("Warning: {}", warning);
    }

    let level = if cli.verbose > 0 {
        LogLevel::Warn.raised_by(cli.verbose)
    } else {
        config.log.level
    };
    init_logging(level);

    let trace: &dyn TraceSink = if level == LogLevel::Trace {
        &TracingTraceSink
    } else {
        &NoopTraceSink
    };

    match cli.command {
        Commands::Resolve { path, lang } => cmd_resolve(&config, trace, path, lang, cli.json),
        Commands::Find { path, lang } => cmd_find(&config, trace, path, lang, cli.json),
        Commands::Hostname { url } => cmd_hostname(&url, cli.json),
        Commands::ToPath { uri } => cmd_to_path(&uri, cli.json),
        Commands::ToUri { path } => cmd_to_uri(&path, cli.json),
        Commands::FmtJson { file } => cmd_fmt_json(&file),
    }
}

fn init_logging(level: LogLevel) {
    let filter = EnvFilter::new(format!("errpage={}", level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Location and language after applying CLI > config > locale defaults
fn lookup_inputs(
    config: &Config,
    path: Option<String>,
    lang: Option<String>,
) -> Result<(String, String)> {
    let location = match path {
        Some(p) => p,
        None => match &config.error_page.location {
            Some(p) => p.to_string_lossy().into_owned(),
            None => bail!("no error page location given (pass PATH or set error_page.location)"),
        },
    };

    let language = lang
        .or_else(|| config.error_page.language.clone())
        .or_else(system_language)
        .unwrap_or_default();

    tracing::debug!(%location, %language, "lookup inputs");
    Ok((location, language))
}

fn cmd_resolve(
    config: &Config,
    trace: &dyn TraceSink,
    path: Option<String>,
    lang: Option<String>,
    json: bool,
) -> Result<()> {
    let (location, language) = lookup_inputs(config, path, lang)?;
    let resolver = ErrorPageResolver::new(config.layout.clone()).with_trace(trace);

    let candidates = resolver
        .resolve(&location, &language)
        .with_context(|| format!("cannot resolve error page candidates for '{}'", location))?;

    if json {
        let output = serde_json::json!({
            "event": "resolve",
            "location": location,
            "language": language,
            "candidates": candidates,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        for candidate in &candidates {
            println!("{}", candidate.display());
        }
    }

    Ok(())
}

fn cmd_find(
    config: &Config,
    trace: &dyn TraceSink,
    path: Option<String>,
    lang: Option<String>,
    json: bool,
) -> Result<()> {
    let (location, language) = lookup_inputs(config, path, lang)?;
    let resolver = ErrorPageResolver::new(config.layout.clone()).with_trace(trace);

    let found = resolver
        .find(&location, &language)
        .with_context(|| format!("cannot resolve error page candidates for '{}'", location))?;

    let Some(found) = found else {
        bail!("no error page found for '{}' (language '{}')", location, language);
    };

    if json {
        let output = serde_json::json!({
            "event": "find",
            "location": location,
            "language": language,
            "found": found,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", found.display());
    }

    Ok(())
}

fn cmd_hostname(url: &str, json: bool) -> Result<()> {
    let host = hostname(url);
    if host.is_empty() {
        bail!("no host in '{}'", url);
    }

    if json {
        let output = serde_json::json!({ "event": "hostname", "url": url, "host": host });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", host);
    }
    Ok(())
}

fn cmd_to_path(uri: &str, json: bool) -> Result<()> {
    let path = uri_to_local(uri);
    if path.is_empty() {
        bail!("'{}' is not a local file: URI", uri);
    }

    if json {
        let output = serde_json::json!({ "event": "to-path", "uri": uri, "path": path });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", path);
    }
    Ok(())
}

fn cmd_to_uri(path: &std::path::Path, json: bool) -> Result<()> {
    let uri = local_to_uri(path);
    if uri.is_empty() {
        bail!("'{}' is not an absolute path", path.display());
    }

    if json {
        let output = serde_json::json!({ "event": "to-uri", "path": path, "uri": uri });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", uri);
    }
    Ok(())
}

fn cmd_fmt_json(file: &std::path::Path) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let value = parse_json(&content).with_context(|| format!("invalid JSON in {}", file.display()))?;
    println!("{}", json_to_string(&value));
    Ok(())
}
