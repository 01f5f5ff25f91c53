// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! fluxline-send - ship measurement points to InfluxDB over UDP
//!
//! Points are given as JSON objects on the command line:
//!
//! ```text
//! fluxline-send --host 10.0.0.5 --tag region=eu-west-1 \
//!     '{"measurement": "cpu", "fields": {"value": 0.64}}'
//! ```

use std::path::PathBuf;

use clap::Parser;

use fluxline::{FieldValue, Point, WriteRequest};
use fluxline_client::{Options, Sender};

/// Send measurement points to InfluxDB over UDP
#[derive(Parser, Debug)]
#[command(name = "fluxline-send")]
#[command(version)]
#[command(about = "Send InfluxDB line-protocol points over UDP")]
struct Args {
    /// YAML options file (host, port, global tags)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Target host (overrides the options file)
    #[arg(long)]
    host: Option<String>,

    /// Target UDP port (overrides the options file)
    #[arg(long)]
    port: Option<u16>,

    /// Request-level tag as key=value (repeatable)
    #[arg(short, long = "tag")]
    tags: Vec<String>,

    /// Explicit RFC 3339 timestamp shared by the whole batch
    #[arg(long)]
    time: Option<String>,

    /// Points as JSON objects:
    /// {"measurement": "cpu", "tags": {...}, "fields": {...}}
    #[arg(required = true)]
    points: Vec<String>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = match &args.config {
        Some(path) => Options::from_file(path)?,
        None => Options::default(),
    };
    if let Some(host) = &args.host {
        options.host = host.clone();
    }
    if let Some(port) = args.port {
        options.port = port;
    }

    let mut request = WriteRequest::new();
    for pair in &args.tags {
        let (key, value) = parse_tag(pair)?;
        request = request.tag(key, value);
    }
    if let Some(time) = &args.time {
        request = request.time(time.clone());
    }
    for raw in &args.points {
        request = request.point(parse_point(raw)?);
    }

    log::info!(
        "sending {} point(s) to {}:{}",
        request.points.len(),
        options.host,
        options.port
    );

    let sender = Sender::connect(&options)?;
    sender.send(&request)?;
    Ok(())
}

fn parse_tag(pair: &str) -> Result<(&str, &str), String> {
    pair.split_once('=')
        .ok_or_else(|| format!("tag '{}' is not of the form key=value", pair))
}

fn parse_point(raw: &str) -> Result<Point, Box<dyn std::error::Error>> {
    let json: serde_json::Value = serde_json::from_str(raw)?;

    let measurement = json
        .get("measurement")
        .and_then(|m| m.as_str())
        .ok_or("point is missing a measurement name")?;
    let mut point = Point::new(measurement);

    if let Some(tags) = json.get("tags").and_then(|t| t.as_object()) {
        for (key, value) in tags {
            let value = value
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| format!("tag '{}' must be a string", key))?;
            point = point.tag(key, value);
        }
    }

    if let Some(fields) = json.get("fields").and_then(|f| f.as_object()) {
        for (key, value) in fields {
            point = point.field(key, FieldValue::try_from(value)?);
        }
    }

    Ok(point)
}
