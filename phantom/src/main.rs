//! Host harness for the Phantom script plugins.
//!
//! Builds a capability registry the way a scripting host would at startup,
//! invokes capabilities by qualified name from the command line, and flushes
//! buffered page results when the run finishes.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use phantom::core::registry::Registry;
use phantom::core::types::ScriptContext;
use phantom::diagnostics::{Diagnostics, TracingDiagnostics};
use phantom::exit_codes;
use phantom::io::config::{DEFAULT_CONFIG_PATH, PhantomConfig, load_config, write_config};
use phantom::io::file_writer::FileWriter;
use phantom::io::results::{FlushReport, ResultsStore};
use phantom::logging;
use phantom::plugin::{self, PHANTOM_NAMESPACE, SAVE_TO_FILE};
use serde_json::Value;
use tracing::info;

#[derive(Parser)]
#[command(name = "phantom", version, about = "Host harness for Phantom script plugins")]
struct Cli {
    /// Path to the TOML config file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default config file.
    Init {
        /// Overwrite an existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Call `Phantom.saveToFile(text, fileName)`.
    Save {
        /// File name, appended verbatim to the script directory.
        file_name: String,
        /// Text to write. Read from stdin when omitted.
        #[arg(long)]
        text: Option<String>,
        /// Override `script_dir` from the config.
        #[arg(long)]
        script_dir: Option<String>,
    },
    /// Call any registered capability with JSON arguments.
    Call {
        /// Qualified name, e.g. `window.__phantom_writeFile`.
        capability: String,
        /// One JSON value per argument (strings must be quoted).
        args: Vec<String>,
        /// Override `script_dir` from the config.
        #[arg(long)]
        script_dir: Option<String>,
    },
    /// List registered capabilities as `Namespace.name`.
    Capabilities,
}

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Init { force } => cmd_init(&cli.config, force),
        Command::Save {
            file_name,
            text,
            script_dir,
        } => cmd_save(&setup(&cli.config)?, file_name, text, script_dir),
        Command::Call {
            capability,
            args,
            script_dir,
        } => cmd_call(&setup(&cli.config)?, &capability, &args, script_dir),
        Command::Capabilities => cmd_capabilities(&setup(&cli.config)?),
    }
}

/// Load config and install the tracing subscriber it names.
fn setup(config_path: &Path) -> Result<PhantomConfig> {
    let config = load_config(config_path)?;
    logging::init(&config.log_filter);
    Ok(config)
}

/// Registry plus the page-results buffer it feeds, for a single run.
struct Host {
    registry: Registry,
    results: Arc<ResultsStore>,
    context: ScriptContext,
    writer: FileWriter,
}

impl Host {
    fn new(context: ScriptContext) -> Self {
        let diagnostics: Arc<dyn Diagnostics> = Arc::new(TracingDiagnostics);
        let mut registry = Registry::new();
        let results = plugin::register_all(&mut registry, context.clone(), diagnostics.clone());
        Self {
            registry,
            results,
            context,
            writer: FileWriter::new(diagnostics),
        }
    }

    fn call(&self, namespace: &str, name: &str, args: &[Value]) -> Result<Value> {
        self.registry
            .call(namespace, name, args)
            .with_context(|| format!("call {namespace}.{name}"))
    }

    /// Write every buffered page result to disk.
    fn finish(&self) -> FlushReport {
        let report = self.results.flush(&self.writer, &self.context);
        if !report.written.is_empty() || !report.failed.is_empty() {
            info!(
                written = report.written.len(),
                failed = report.failed.len(),
                "page results flushed"
            );
        }
        report
    }
}

fn cmd_init(config_path: &Path, force: bool) -> Result<i32> {
    if config_path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }
    write_config(config_path, &PhantomConfig::default())?;
    Ok(exit_codes::OK)
}

fn cmd_save(
    config: &PhantomConfig,
    file_name: String,
    text: Option<String>,
    script_dir: Option<String>,
) -> Result<i32> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read text from stdin")?;
            buf
        }
    };
    let host = Host::new(script_context(config, script_dir));
    let result = host.call(
        PHANTOM_NAMESPACE,
        SAVE_TO_FILE,
        &[Value::String(text), Value::String(file_name)],
    )?;
    let report = host.finish();
    Ok(exit_code(&result, &report))
}

fn cmd_call(
    config: &PhantomConfig,
    capability: &str,
    raw_args: &[String],
    script_dir: Option<String>,
) -> Result<i32> {
    let (namespace, name) = split_qualified(capability)?;
    let args = raw_args
        .iter()
        .map(|raw| {
            serde_json::from_str::<Value>(raw).with_context(|| format!("parse argument {raw}"))
        })
        .collect::<Result<Vec<_>>>()?;
    let host = Host::new(script_context(config, script_dir));
    let result = host.call(namespace, name, &args)?;
    println!("{result}");
    let report = host.finish();
    Ok(exit_code(&result, &report))
}

fn cmd_capabilities(config: &PhantomConfig) -> Result<i32> {
    let host = Host::new(config.script_context());
    for name in host.registry.names() {
        println!("{name}");
    }
    Ok(exit_codes::OK)
}

fn script_context(config: &PhantomConfig, script_dir: Option<String>) -> ScriptContext {
    match script_dir {
        Some(dir) => ScriptContext::new(dir),
        None => config.script_context(),
    }
}

fn split_qualified(capability: &str) -> Result<(&str, &str)> {
    match capability.split_once('.') {
        Some((namespace, name)) if !namespace.is_empty() && !name.is_empty() => {
            Ok((namespace, name))
        }
        _ => bail!("expected Namespace.name, got {capability}"),
    }
}

/// `false` from a capability or any unflushed page result fails the run.
fn exit_code(result: &Value, report: &FlushReport) -> i32 {
    if *result == Value::Bool(false) || !report.failed.is_empty() {
        exit_codes::WRITE_FAILED
    } else {
        exit_codes::OK
    }
}
