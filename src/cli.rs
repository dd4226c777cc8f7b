//! CLI definition and dispatch.

use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::process_env::ProcessEnv;
use crate::domain::error::CfgError;
use crate::domain::resolver::Resolver;
use crate::domain::value::Value;
use crate::logging;
use crate::ports::env_port::EnvPort;

#[derive(Parser, Debug)]
#[command(name = "cfglookup", about = "Resolve configuration values with environment redirects")]
pub struct Cli {
    /// Log resolution steps to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a single value and print it
    Get {
        #[arg(short, long)]
        config: PathBuf,
        namespace: String,
        key: String,
        #[arg(long = "as", value_enum, default_value_t = ValueType::Raw)]
        as_type: ValueType,
        #[arg(long)]
        default: Option<String>,
    },
    /// Report whether every environment redirect in a file resolves
    Check {
        #[arg(short, long)]
        config: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueType {
    Raw,
    Integer,
    Boolean,
}

/// One `${VAR}` entry and whether its variable is currently set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectStatus {
    pub namespace: String,
    pub key: String,
    pub var: String,
    pub set: bool,
}

pub fn run(cli: Cli) -> ExitCode {
    run_with_output(cli, &mut std::io::stdout().lock())
}

/// Dispatch `cli`, writing command output to `out` and diagnostics to stderr.
pub fn run_with_output(cli: Cli, out: &mut dyn Write) -> ExitCode {
    logging::init(cli.verbose);
    let result = match cli.command {
        Command::Get {
            config,
            namespace,
            key,
            as_type,
            default,
        } => run_get(&config, &namespace, &key, as_type, default.as_deref(), out),
        Command::Check { config } => run_check(&config, out),
    };
    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_get(
    config_path: &Path,
    namespace: &str,
    key: &str,
    as_type: ValueType,
    default: Option<&str>,
    out: &mut dyn Write,
) -> Result<ExitCode, CfgError> {
    let adapter = FileConfigAdapter::from_file(config_path)?;
    let env = ProcessEnv;
    let resolver = Resolver::new(&adapter, &env);

    let value = lookup(&resolver, namespace, key, as_type, default)?;
    writeln!(out, "{value}")?;
    Ok(ExitCode::SUCCESS)
}

fn run_check(config_path: &Path, out: &mut dyn Write) -> Result<ExitCode, CfgError> {
    let adapter = FileConfigAdapter::from_file(config_path)?;

    let statuses = check_redirects(&adapter, &ProcessEnv);
    for status in &statuses {
        let state = if status.set { "set" } else { "unset" };
        writeln!(
            out,
            "{}.{} -> {}: {}",
            status.namespace, status.key, status.var, state
        )?;
    }

    let unset: Vec<CfgError> = statuses
        .iter()
        .filter(|s| !s.set)
        .map(|s| CfgError::missing(&s.namespace, &s.key))
        .collect();
    if let Some(first) = unset.first() {
        for err in &unset {
            eprintln!("error: {err}");
        }
        return Ok(first.into());
    }
    eprintln!("{} redirect(s) resolved", statuses.len());
    Ok(ExitCode::SUCCESS)
}

/// Resolve one value the way `get` does: strict without a default, defaulted with one.
pub fn lookup(
    resolver: &Resolver<'_>,
    namespace: &str,
    key: &str,
    as_type: ValueType,
    default: Option<&str>,
) -> Result<Value, CfgError> {
    match (as_type, default) {
        (ValueType::Raw, None) => resolver.require(namespace, key),
        (ValueType::Raw, Some(d)) => Ok(resolver.require_or(namespace, key, Value::from(d))),
        (ValueType::Integer, None) => resolver.require_integer(namespace, key).map(Value::from),
        (ValueType::Integer, Some(d)) => {
            let d = parse_integer_arg(d)?;
            Ok(resolver.require_integer_or(namespace, key, d).into())
        }
        (ValueType::Boolean, None) => resolver.require_boolean(namespace, key).map(Value::from),
        (ValueType::Boolean, Some(d)) => {
            let d = parse_boolean_arg(d)?;
            Ok(resolver.require_boolean_or(namespace, key, d).into())
        }
    }
}

/// `--default` for integers must be a whole integer literal.
pub fn parse_integer_arg(raw: &str) -> Result<i64, CfgError> {
    raw.parse().map_err(|_| invalid_default(raw, "an integer"))
}

pub fn parse_boolean_arg(raw: &str) -> Result<bool, CfgError> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(invalid_default(raw, "true or false")),
    }
}

fn invalid_default(raw: &str, expected: &str) -> CfgError {
    CfgError::InvalidArgument {
        name: "--default".to_string(),
        reason: format!("{raw:?} is not {expected}"),
    }
}

pub fn check_redirects(adapter: &FileConfigAdapter, env: &dyn EnvPort) -> Vec<RedirectStatus> {
    adapter
        .entries()
        .into_iter()
        .filter_map(|(namespace, key, entry)| {
            let var = entry.redirect()?.var.clone();
            let set = env.var(&var).is_some();
            Some(RedirectStatus {
                namespace,
                key,
                var,
                set,
            })
        })
        .collect()
}
