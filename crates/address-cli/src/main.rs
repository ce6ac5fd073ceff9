//! Address parser command line
//!
//! Reads pasted shipping text from an argument, a file or stdin and prints
//! the structured address with its validation report.

use address_core::{
    config::AddressConfig, format_address, is_recognized, AddressParser, AddressResolver,
    ParseOutcome,
};
use anyhow::{bail, Context};
use clap::{Arg, ArgMatches, Command};
use std::io::Read;
use std::process::ExitCode;

const EXIT_INVALID: u8 = 2;
const EXIT_FAILURE: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Text,
}

fn cli() -> Command {
    Command::new("addr-parse")
        .version("1.0.0")
        .about("Parse pasted Chinese shipping text into address fields")
        .arg(
            Arg::new("text")
                .value_name("TEXT")
                .help("Text to parse; read from --file or stdin when omitted")
        )
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .value_name("FILE")
                .help("Read the text from a file")
                .conflicts_with("text")
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("Configuration file path")
        )
        .arg(
            Arg::new("remote")
                .long("remote")
                .help("Try the remote parser from the configuration first")
                .action(clap::ArgAction::SetTrue)
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_name("FORMAT")
                .help("Output format")
                .value_parser(["json", "text"])
                .default_value("json")
        )
        .arg(
            Arg::new("trace")
                .long("trace")
                .help("Print the spans each stage claimed to stderr")
                .action(clap::ArgAction::SetTrue)
        )
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging with INFO as default if RUST_LOG not set
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    let matches = cli().get_matches();

    match run(&matches).await {
        Ok(outcome) if outcome.validation.is_valid => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(EXIT_INVALID),
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

async fn run(matches: &ArgMatches) -> anyhow::Result<ParseOutcome> {
    let config = match matches.get_one::<String>("config") {
        Some(path) => {
            let config = AddressConfig::from_file(path)?;
            log::info!("Loaded configuration from {}", path);
            config
        }
        None => AddressConfig::default(),
    };

    let resolver = build_resolver(config, matches.get_flag("remote"))?;
    let text = read_input(
        matches.get_one::<String>("text").map(String::as_str),
        matches.get_one::<String>("file").map(String::as_str),
    )?;

    if matches.get_flag("trace") {
        print_trace(resolver.parser(), &text);
    }

    let outcome = resolver.resolve(&text).await;
    if !is_recognized(&outcome.address) {
        log::info!(
            "Only {} fields recognized, please check the input",
            outcome.address.recognized_fields()
        );
    }

    let format = match matches.get_one::<String>("format").map(String::as_str) {
        Some("text") => OutputFormat::Text,
        _ => OutputFormat::Json,
    };
    println!("{}", render(&outcome, format)?);

    Ok(outcome)
}

/// Remote settings are only honored with `--remote`
fn build_resolver(mut config: AddressConfig, remote: bool) -> anyhow::Result<AddressResolver> {
    if remote {
        if config.active_remote().is_none() {
            bail!("--remote requires an enabled \"remote\" section in the configuration");
        }
    } else {
        config.remote = None;
    }
    Ok(AddressResolver::from_config(&config)?)
}

fn read_input(text: Option<&str>, file: Option<&str>) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }
    if let Some(path) = file {
        return std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path));
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read stdin")?;
    Ok(buffer)
}

fn print_trace(parser: &AddressParser, text: &str) {
    let trace = parser.trace(text);
    eprintln!("normalized: {:?}", trace.normalized);
    for span in &trace.spans {
        eprintln!("  {:>12} {:>4}..{:<4} {}", span.kind.to_string(), span.start, span.end, span.text);
    }
    eprintln!("residue: {:?}", trace.residue);
}

fn render(outcome: &ParseOutcome, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(outcome)?),
        OutputFormat::Text => Ok(render_text(outcome)),
    }
}

fn render_text(outcome: &ParseOutcome) -> String {
    let address = &outcome.address;
    let mut lines = vec![
        format!("收件人: {}", address.name),
        format!("手机号: {}", address.phone),
        format!("省份: {}", address.province),
        format!("城市: {}", address.city),
        format!("区县: {}", address.district),
        format!("邮编: {}", address.postal_code),
        format!("详细地址: {}", address.detail),
        format!("完整地址: {}", format_address(address)),
    ];
    lines.extend(outcome.validation.errors.iter().map(|e| format!("错误: {}", e)));
    lines.extend(outcome.validation.warnings.iter().map(|w| format!("提示: {}", w)));
    lines.join("\n")
}
