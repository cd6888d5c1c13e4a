//! OmiStack CLI - O-MI read-request generator.
//!
//! This binary reads an O-DF hierarchy from a JSON document and prints the
//! corresponding O-MI read request, ready to post to an O-MI node. The
//! document goes to stdout (or `--output`); diagnostics go to stderr through
//! `tracing`, so the XML stays pipeable.
//!
//! # Usage
//!
//! ```text
//! omistack-cli hierarchy.json
//! omistack-cli --newest 5 hierarchy.json
//! cat hierarchy.json | omistack-cli --body-only
//! ```
//!
//! A hierarchy document is a JSON object (identifiers mapped to child
//! hierarchies) or a JSON array (terminal identifiers):
//!
//! ```json
//! {"SmartHouse": {"Kitchen": ["Fridge", "Oven"], "Garage": []}}
//! ```

use std::fs;
use std::io::{self, Read as _};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use omistack_model::{Hierarchy, Newest};
use omistack_xml::{objects_to_xml, read_request_to_xml};

/// omistack-cli -- generate O-MI read requests from JSON hierarchy documents.
#[derive(Parser, Debug)]
#[command(name = "omistack-cli", version, about, long_about = None)]
struct Cli {
    /// JSON hierarchy document to read (use `-` for stdin).
    #[arg(value_name = "FILE", default_value = "-")]
    file: String,

    /// Emit a `newest` attribute with the given value on the read element.
    #[arg(long, value_name = "VALUE")]
    newest: Option<String>,

    /// Print only the `<Object>` body instead of the full envelope.
    #[arg(long)]
    body_only: bool,

    /// Save output to a file instead of stdout.
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[arg(long, value_name = "FILTER", default_value = "warn")]
    log_level: String,
}

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `--log-level` flag.
/// Events go to stderr so the generated document on stdout stays clean.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    Ok(())
}

/// Read the hierarchy document from a file, or from stdin when the path
/// is `-`.
fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("cannot read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(path).with_context(|| format!("cannot read {path}"))
    }
}

/// Render the requested document: the full read envelope, or just the
/// `<Object>` body with `--body-only`.
fn render(hierarchy: &Hierarchy, newest: Option<&Newest>, body_only: bool) -> String {
    if body_only {
        objects_to_xml(hierarchy)
    } else {
        read_request_to_xml(hierarchy, newest)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level)?;

    let input = read_input(&cli.file)?;
    let hierarchy: Hierarchy = serde_json::from_str(&input)
        .with_context(|| format!("invalid hierarchy document: {}", cli.file))?;

    let newest = cli.newest.as_deref().map(Newest::new);
    if cli.body_only && newest.is_some() {
        warn!("--newest has no effect with --body-only");
    }

    debug!(
        source = %cli.file,
        body_only = cli.body_only,
        newest = newest.is_some(),
        "rendering read request"
    );

    let mut document = render(&hierarchy, newest.as_ref(), cli.body_only);
    document.push('\n');

    match &cli.output {
        Some(path) => fs::write(path, &document)
            .with_context(|| format!("cannot write {}", path.display()))?,
        None => print!("{document}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_read_hierarchy_from_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("hierarchy.json");
        fs::write(&path, r#"{"SmartHouse": ["Kitchen"]}"#).expect("write fixture");

        let input = read_input(path.to_str().expect("utf-8 path")).expect("readable");
        let hierarchy: Hierarchy = serde_json::from_str(&input).expect("valid hierarchy");

        assert_eq!(
            hierarchy,
            Hierarchy::mapping([("SmartHouse", Hierarchy::list(["Kitchen"]))])
        );
    }

    #[test]
    fn test_should_fail_on_missing_file() {
        let result = read_input("/nonexistent/hierarchy.json");
        assert!(result.is_err());
    }

    #[test]
    fn test_should_render_envelope_by_default() {
        let hierarchy = Hierarchy::list(["a"]);
        let xml = render(&hierarchy, Some(&Newest::new("5")), false);

        assert!(xml.starts_with("<omiEnvelope"));
        assert!(xml.contains("<read msgformat=\"odf\" newest=\"5\">"));
    }

    #[test]
    fn test_should_render_body_only_when_asked() {
        let hierarchy = Hierarchy::list(["a"]);
        let xml = render(&hierarchy, None, true);

        assert_eq!(xml, "<Object>\n    <id>a</id>\n</Object>");
    }

    #[test]
    fn test_should_reject_scalar_hierarchy_documents() {
        assert!(serde_json::from_str::<Hierarchy>("42").is_err());
    }
}
