use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgAction};
use ppsdk::snmp::{AuthLevel, Oid, PduType};

pub struct CommandBuilder {
    command: clap::Command,
}

impl Default for CommandBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandBuilder {
    pub fn new() -> Self {
        let command = clap::Command::new("ppsdk-cli")
            .about("Decodes SDK status codes and builds or decodes SNMP-like messages")
            .version(clap::crate_version!())
            .arg_required_else_help(true)
            .arg(
                Arg::new("json")
                    .long("json")
                    .global(true)
                    .action(ArgAction::SetTrue)
                    .help("Print decoded output as JSON"),
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .global(true)
                    .action(ArgAction::Count)
                    .help("Raise the log level, repeat for trace output"),
            )
            .subcommand(
                clap::Command::new("status")
                    .about("Decode a 32 bit status value returned by the SDK")
                    .arg(
                        Arg::new("value")
                            .required(true)
                            .help("Status value, decimal or 0x prefixed hexadecimal"),
                    ),
            )
            .subcommand(
                clap::Command::new("encode")
                    .about("Build a message and print it as hex")
                    .arg(
                        Arg::new("auth")
                            .long("auth")
                            .default_value("user")
                            .value_parser(["undef", "none", "viewer", "user"])
                            .help("Authentication level placed in the community field"),
                    )
                    .arg(
                        Arg::new("type")
                            .long("type")
                            .default_value("get")
                            .value_parser(["set", "get", "response"])
                            .help("PDU type"),
                    )
                    .arg(
                        Arg::new("request-id")
                            .long("request-id")
                            .default_value("0")
                            .value_parser(value_parser!(u8))
                            .help("Request id echoed back by the agent"),
                    )
                    .arg(
                        Arg::new("binding")
                            .long("binding")
                            .action(ArgAction::Append)
                            .value_name("appl.group.command[.arg.ind.table]=hex")
                            .help("Variable binding, the payload size is taken from the hex value"),
                    ),
            )
            .subcommand(
                clap::Command::new("decode")
                    .about("Decode a single message given as hex")
                    .arg(Arg::new("hex").required(true).help("Message bytes")),
            )
            .subcommand(
                clap::Command::new("scan")
                    .about("Frame every message found in a capture file")
                    .arg(
                        Arg::new("file")
                            .required(true)
                            .value_parser(value_parser!(std::path::PathBuf))
                            .help("Capture of a receiver connection"),
                    )
                    .arg(
                        Arg::new("chunk")
                            .long("chunk")
                            .default_value("4096")
                            .value_parser(value_parser!(usize))
                            .help("Bytes fed to the parser at a time"),
                    ),
            );
        Self { command }
    }

    pub fn build(&self) -> clap::Command {
        self.command.clone()
    }
}

pub fn log_level(matches: &clap::ArgMatches) -> log::LevelFilter {
    match matches.get_count("verbose") {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

pub fn auth_level(name: &str) -> Result<AuthLevel> {
    AuthLevel::ALL
        .iter()
        .copied()
        .find(|level| level.name() == name)
        .with_context(|| format!("Unknown authentication level: {}", name))
}

pub fn pdu_type(name: &str) -> Result<PduType> {
    PduType::ALL
        .iter()
        .copied()
        .find(|t| t.name() == name)
        .with_context(|| format!("Unknown PDU type: {}", name))
}

/// Status value in decimal or `0x` hexadecimal
pub fn status_value(text: &str) -> Result<u32> {
    let text = text.trim();
    let value = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(digits) => u32::from_str_radix(digits, 16),
        None => text.parse::<u32>(),
    };
    value.with_context(|| format!("Invalid status value: {}", text))
}

/// Hex string, whitespace and `:` separators allowed
pub fn hex_bytes(text: &str) -> Result<Vec<u8>> {
    let digits: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    let digits = digits.strip_prefix("0x").unwrap_or(&digits);
    hex::decode(digits).with_context(|| format!("Invalid hex string: {}", text))
}

/// Parses `appl.group.command[.arg.ind.table]=hex`
pub fn binding(spec: &str) -> Result<(Oid, Vec<u8>)> {
    let (path, value) = spec
        .split_once('=')
        .with_context(|| format!("Binding {} lacks a '=' separator", spec))?;
    let ids = path
        .split('.')
        .map(|id| {
            id.trim()
                .parse::<u8>()
                .with_context(|| format!("Invalid OID component '{}' in {}", id, spec))
        })
        .collect::<Result<Vec<u8>>>()?;
    let value = if value.is_empty() {
        Vec::new()
    } else {
        hex_bytes(value)?
    };
    let size = u8::try_from(value.len())
        .with_context(|| format!("Payload of {} bytes is too long for one binding", value.len()))?;

    let oid = match ids[..] {
        [appl, group, command] => Oid::new(size, appl, group, command),
        [appl, group, command, arg, ind, table] => {
            Oid::new(size, appl, group, command).with_table(arg, ind, table)
        },
        _ => bail!(
            "Binding {} needs 3 or 6 OID components, got {}",
            spec,
            ids.len()
        ),
    };
    Ok((oid, value))
}
