// src/bin/cbc_payload.rs
//! Command-line front end: encrypt or decrypt one string
//!
//! Key source, first match wins: `--key`, `--key-hex`, config / `CBCP_KEY`,
//! then a hidden prompt.

use anyhow::{bail, Context, Result};
use cbc_payload::{config, CipherContext};
use rpassword::read_password;
use std::io::Write;
use tracing::info;

const USAGE: &str = "usage:
  cbc_payload encrypt <text>    [--key KEY | --key-hex HEX] [--iv IV] [--keep-iv]
  cbc_payload decrypt <payload> [--key KEY | --key-hex HEX]";

#[derive(Default)]
struct Args {
    command: String,
    input: String,
    key: Option<Vec<u8>>,
    iv: Option<String>,
    keep_iv: bool,
}

fn parse_args() -> Result<Args> {
    let mut raw = std::env::args().skip(1);
    let mut args = Args {
        command: raw.next().context(USAGE)?,
        input: raw.next().context(USAGE)?,
        ..Args::default()
    };

    while let Some(flag) = raw.next() {
        match flag.as_str() {
            "--key" => {
                let key = raw.next().context("--key needs a value")?;
                args.key = Some(key.into_bytes());
            }
            "--key-hex" => {
                let hex_key = raw.next().context("--key-hex needs a value")?;
                args.key = Some(hex::decode(hex_key.trim()).context("--key-hex is not valid hex")?);
            }
            "--iv" => args.iv = Some(raw.next().context("--iv needs a value")?),
            "--keep-iv" => args.keep_iv = true,
            other => bail!("unknown argument: {other}\n{USAGE}"),
        }
    }
    Ok(args)
}

fn prompt_key() -> Result<Vec<u8>> {
    print!("Secret key (32 characters): ");
    std::io::stdout().flush()?;
    let key = read_password().context("failed to read secret key")?;
    Ok(strip_line_ending(&key).as_bytes().to_vec())
}

/// Drop the terminal's line ending but keep any spaces that belong to the key
fn strip_line_ending(input: &str) -> &str {
    input.trim_end_matches(&['\r', '\n'][..])
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args()?;
    let conf = config::load().context("failed to load configuration")?;
    let mut ctx = CipherContext::from_config_with_key(&conf, args.key.as_deref())
        .context("invalid key or IV")?;

    if !ctx.has_key() {
        ctx.set_key(&prompt_key()?)?;
    }

    match args.command.as_str() {
        "encrypt" => {
            if let Some(iv) = &args.iv {
                ctx.set_iv(Some(iv.as_bytes()))?;
            }
            let reset_iv = conf.cipher.reset_iv && !args.keep_iv;
            let payload = ctx.encrypt(args.input.as_bytes(), None, reset_iv)?;
            info!(payload_len = payload.len(), "encrypted");
            println!("{payload}");
        }
        "decrypt" => {
            let plaintext = ctx
                .decrypt_to_string(&args.input, None)
                .context("decryption failed (wrong key or corrupted payload?)")?;
            info!(plaintext_len = plaintext.len(), "decrypted");
            println!("{plaintext}");
        }
        other => bail!("unknown command: {other}\n{USAGE}"),
    }

    Ok(())
}
