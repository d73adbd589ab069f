use anyhow::{Context, Result};
use log::{debug, info, warn};
use ppsdk::{
    snmp::{MessageBuilder, MessageRef},
    ErrorCode, Parser,
};
use serde_json::json;
use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

mod cli;

fn main() -> Result<()> {
    let matches = cli::CommandBuilder::default().build().get_matches();

    env_logger::Builder::new()
        .filter_level(cli::log_level(&matches))
        .parse_env("PPSDK_LOGLEVEL")
        .init();

    let json = matches.get_flag("json");
    match matches.subcommand() {
        Some(("status", sub)) => {
            let text = sub
                .get_one::<String>("value")
                .context("Missing status value")?;
            status(cli::status_value(text)?, json)
        },
        Some(("encode", sub)) => encode(sub),
        Some(("decode", sub)) => {
            let text = sub.get_one::<String>("hex").context("Missing message")?;
            decode(&cli::hex_bytes(text)?, json)
        },
        Some(("scan", sub)) => {
            let path = sub
                .get_one::<PathBuf>("file")
                .context("Missing capture file")?;
            let chunk = sub.get_one::<usize>("chunk").copied().unwrap_or(4096);
            scan(path, chunk.max(1), json)
        },
        _ => Ok(()),
    }
}

fn status(value: u32, json: bool) -> Result<()> {
    let code = ErrorCode::from_raw(value);
    if json {
        let out = json!({
            "raw": code.raw(),
            "severity": code.severity().name(),
            "module": { "value": code.module(), "name": code.known_module().map(|m| m.name()) },
            "submodule": { "value": code.submodule(), "name": code.known_submodule().map(|s| s.name()) },
            "type": code.error_type().name(),
            "code": { "value": code.code(), "name": code.known_code().map(|c| c.name()) },
            "status": code.status(),
            "warning": code.is_warning(),
            "message": code.message(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{:#010x}: {}", code.raw(), code);
        println!("  severity:  {}", code.severity());
        println!("  module:    {} ({})", code.module(), code.module_name());
        println!("  submodule: {} ({})", code.submodule(), code.submodule_name());
        println!("  type:      {}", code.error_type());
        println!("  code:      {} ({})", code.code(), code.message());
    }
    Ok(())
}

fn encode(sub: &clap::ArgMatches) -> Result<()> {
    let auth = cli::auth_level(sub.get_one::<String>("auth").context("Missing --auth")?)?;
    let pdu_type = cli::pdu_type(sub.get_one::<String>("type").context("Missing --type")?)?;
    let request_id = sub.get_one::<u8>("request-id").copied().unwrap_or(0);

    let mut builder = MessageBuilder::new(auth, pdu_type, request_id);
    for spec in sub.get_many::<String>("binding").into_iter().flatten() {
        let (oid, value) = cli::binding(spec)?;
        debug!("binding {:?} with {} bytes", oid, value.len());
        builder = builder.var_binding(oid, &value);
    }
    let bytes = builder
        .into_message_bytes()
        .context("Failed to build message")?;
    println!("{}", hex::encode(bytes));
    Ok(())
}

fn decode(bytes: &[u8], json: bool) -> Result<()> {
    let message = MessageRef::parse(bytes).context("Failed to decode message")?;
    if message.len() < bytes.len() {
        warn!(
            "{} trailing bytes after the message ignored",
            bytes.len() - message.len()
        );
    }
    print_message(&message, json)
}

fn scan(path: &Path, chunk: usize, json: bool) -> Result<()> {
    let mut data = Vec::new();
    File::open(path)
        .and_then(|mut file| file.read_to_end(&mut data))
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut parser = Parser::default();
    let (mut found, mut errors) = (0usize, 0usize);
    for bytes in data.chunks(chunk) {
        let mut it = parser.consume(bytes);
        loop {
            match it.next() {
                Some(Ok(message)) => {
                    found += 1;
                    print_message(&message, json)?;
                },
                Some(Err(e)) => {
                    errors += 1;
                    warn!("Malformed message: {}", e);
                },
                None => break,
            }
        }
    }
    if !parser.is_buffer_empty() {
        warn!("{} bytes of incomplete message at end of file", parser.buffer_len());
    }
    info!("{} messages, {} errors", found, errors);
    Ok(())
}

fn print_message(message: &MessageRef<'_>, json: bool) -> Result<()> {
    let header = message.header();
    let pdu = message.pdu_header();
    if json {
        let bindings: Vec<_> = message
            .var_bindings()
            .map(|binding| {
                json!({
                    "oid": binding.oid,
                    "value": hex::encode(binding.value),
                    "int32": binding.value_i32(),
                })
            })
            .collect();
        let out = json!({
            "header": header,
            "auth": header.auth_level().map(|a| a.name()),
            "pdu": pdu,
            "status": pdu.status().map(|s| s.description()),
            "bindings": bindings,
        });
        println!("{}", serde_json::to_string(&out)?);
        return Ok(());
    }

    let auth = header
        .auth_level()
        .map_or("unknown", |a| a.name());
    let status = pdu.status().map_or("unknown", |s| s.description());
    println!(
        "{} request_id={} auth={} length={} status={} index={}",
        pdu.pdu_type, pdu.request_id, auth, header.length, status, pdu.error_index
    );
    for binding in message.var_bindings() {
        let oid = binding.oid;
        print!(
            "  {}.{}.{}.{}.{}.{} [{}] {}",
            oid.appl,
            oid.group,
            oid.command,
            oid.arg_table_entry,
            oid.ind_table_arg,
            oid.table_ind,
            oid.size,
            hex::encode(binding.value)
        );
        match binding.value_i32() {
            Some(v) => println!(" ({})", v),
            None => println!(),
        }
    }
    Ok(())
}
