use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use regmac_rs::codec::encode_ids;
use regmac_rs::logging::log_debug;
use regmac_rs::{decode, init_logger, inspect, log_info, RegisterId, Separator, SiteId};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "regmac")]
#[command(about = "Pack register/site numbers into LAA MAC addresses and back")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a register number (0-999) and site id (0-9999) into MAC addresses
    Encode {
        register: RegisterId,
        site: SiteId,
        #[arg(short, long, value_enum, default_value_t = Separator::Colon)]
        separator: Separator,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Decode a canonical or non-canonical MAC address into register and site
    Decode {
        mac: String,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show each octet's bits next to its bit-reversed form
    Bits {
        mac: String,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct EncodeReport {
    register: RegisterId,
    site: SiteId,
    canonical: String,
    non_canonical: String,
}

fn main() -> anyhow::Result<()> {
    init_logger();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            register,
            site,
            separator,
            format,
        } => {
            let mac = encode_ids(register, site);
            let report = EncodeReport {
                register,
                site,
                canonical: mac.canonical.format(separator),
                non_canonical: mac.non_canonical.format(separator),
            };
            log_info(&format!("Encoded register {register} at site {site}"));

            match format {
                OutputFormat::Text => {
                    println!("Register {register} at Site {site}:");
                    println!("    Canonical MAC: {}", report.canonical);
                    println!("Non-Canonical MAC: {}", report.non_canonical);
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
        }
        Commands::Decode { mac, format } => {
            let decoded =
                decode(&mac).with_context(|| format!("failed to decode MAC '{mac}'"))?;
            log_debug(&format!("Decoded {mac} as {}", decoded.form));

            match format {
                OutputFormat::Text => println!(
                    "MAC: {}; REG: {}; Site: {}; Form: {}",
                    decoded.normalized, decoded.register, decoded.site, decoded.form
                ),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&decoded)?),
            }
        }
        Commands::Bits { mac, format } => {
            let view = inspect(&mac).with_context(|| format!("failed to read MAC '{mac}'"))?;

            match format {
                OutputFormat::Text => {
                    println!("octet  bits      reversed  octet");
                    for row in &view.octets {
                        println!(
                            "{:<5}  {}  {}  {}",
                            row.octet, row.bits, row.reversed_bits, row.reversed_octet
                        );
                    }
                    match view.form {
                        Some(form) => println!("MAC: {} ({form})", view.mac),
                        None => println!("MAC: {} (not a register address)", view.mac),
                    }
                    println!("Reversed: {}", view.reversed);
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
            }
        }
    }

    Ok(())
}
