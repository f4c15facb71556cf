// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Key Inspection Tool

Encodes coordinates into Morton keys, decodes keys, and shows prefix masks and
cell membership using the layout from `mdkey_configuration.toml` (or the 3x32
default when no file is found).

Usage:
  cargo run --bin mdkey_inspect -- [--config <file>] [--debug-mdkey-codec] <command> [args]

Commands:
  encode <c0> <c1> ...               Interleave one coordinate per dimension
  decode <key-hex>                   Split a key into coordinates
  mask <n>                           Mask for the leading n bits
  render <key-hex> <n>               Show the first n bits, '*' for the rest
  match <prefix-hex> <n> <key-hex>   Does the key fall in the cell?
  bounds <key-hex> <n>               Lowest and highest key of the cell
  split <key-hex> <n>                The two child cells at n + 1 bits

Copyright 2025 Neuraville Inc.
Licensed under the Apache License, Version 2.0
*/

use std::env;
use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};
use mdkey::config::{load_config_or_default, MdkeyConfig};
use mdkey::hex::{parse_hex, to_hex};
use mdkey::observability::{debug_flags_help, init_logging, parse_debug_flags, LogFormat};

struct Invocation {
    config_path: Option<PathBuf>,
    command: Vec<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Invocation> {
    let mut config_path = None;
    let mut command = Vec::new();

    while let Some(arg) = args.next() {
        if arg == "--config" {
            let path = args.next().context("--config requires a file path")?;
            config_path = Some(PathBuf::from(path));
        } else if arg.starts_with("--debug-") {
            // handled by parse_debug_flags
        } else {
            command.push(arg);
        }
    }

    Ok(Invocation {
        config_path,
        command,
    })
}

fn usage() -> String {
    format!(
        "Usage: mdkey_inspect [--config <file>] <command> [args]\n\n\
         Commands:\n  \
         encode <c0> <c1> ...\n  \
         decode <key-hex>\n  \
         mask <n>\n  \
         render <key-hex> <n>\n  \
         match <prefix-hex> <n> <key-hex>\n  \
         bounds <key-hex> <n>\n  \
         split <key-hex> <n>\n\n{}",
        debug_flags_help()
    )
}

fn parse_prefix_length(text: &str) -> Result<u32> {
    text.parse::<u32>()
        .with_context(|| format!("Prefix length '{}' is not a number", text))
}

fn run(config: &MdkeyConfig, command: &[String]) -> Result<bool> {
    let layout = config.layout.to_layout()?;
    tracing::debug!(%layout, "using layout");

    let args: Vec<&str> = command.iter().map(String::as_str).collect();
    match args.as_slice() {
        ["encode", coords @ ..] => {
            let coords = coords
                .iter()
                .map(|c| {
                    c.parse::<u64>()
                        .with_context(|| format!("Coordinate '{}' is not a number", c))
                })
                .collect::<Result<Vec<u64>>>()?;
            let key = layout.encode(&coords)?;
            println!("layout: {}", layout);
            println!("hex:    {:x}", key);
            println!("bits:   {}", key);
        }
        ["decode", key] => {
            let coords = layout.decode(&parse_hex(key)?)?;
            for (dimension, value) in coords.iter().enumerate() {
                println!("{} = {}", config.layout.label(dimension), value);
            }
        }
        ["mask", n] => {
            let mask = layout.make_mask(parse_prefix_length(n)?)?;
            println!("{}", to_hex(mask.as_bytes()));
        }
        ["render", key, n] => {
            println!("{}", layout.render(&parse_hex(key)?, parse_prefix_length(n)?)?);
        }
        ["match", prefix, n, key] => {
            let matched =
                layout.matches_prefix(&parse_hex(prefix)?, parse_prefix_length(n)?, &parse_hex(key)?)?;
            println!("{}", matched);
            return Ok(matched);
        }
        ["bounds", key, n] => {
            let (low, high) = layout.cell_bounds(&parse_hex(key)?, parse_prefix_length(n)?)?;
            println!("low:  {:x}", low);
            println!("high: {:x}", high);
        }
        ["split", key, n] => {
            let n = parse_prefix_length(n)?;
            let (left, right) = layout.split_cell(&parse_hex(key)?, n)?;
            println!("{}", layout.render(left.as_bytes(), n + 1)?);
            println!("{}", layout.render(right.as_bytes(), n + 1)?);
        }
        _ => bail!("{}", usage()),
    }
    Ok(true)
}

fn main() -> Result<()> {
    let invocation = parse_args(env::args().skip(1))?;
    let config = load_config_or_default(invocation.config_path.as_deref(), None)?;

    let debug_flags = parse_debug_flags();
    let format: LogFormat = config.logging.format.parse()?;
    init_logging(&debug_flags, &config.logging.level, format)?;

    if invocation.command.is_empty() {
        eprintln!("{}", usage());
        process::exit(2);
    }

    // `match` exits non-zero when the key is outside the cell
    if !run(&config, &invocation.command)? {
        process::exit(1);
    }
    Ok(())
}
