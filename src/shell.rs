//! Interactive prompt loops around the pure planning core.
//!
//! All parsing and allocation lives in [`models`](crate::models) and
//! [`processing`](crate::processing); this module only collects input,
//! re-prompts on bad input and prints results. Generic over reader/writer
//! so the loops can be driven from tests.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::models::{BaseNetwork, SegmentRequest, MAX_SEGMENT_HOSTS};
use crate::output::plan_table;
use crate::processing::allocate;

fn read_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(line.trim().to_string())
}

/// Ask for a base network in CIDR form until the input parses.
pub fn prompt_base_network<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<BaseNetwork> {
    writeln!(output, "{}", "=".repeat(60))?;
    writeln!(output, "IPv4 SUBNETTING CALCULATOR")?;
    writeln!(output, "{}", "=".repeat(60))?;
    loop {
        write!(
            output,
            "\nEnter the base network address (e.g., 192.168.1.0/24): "
        )?;
        output.flush()?;
        let line = read_line(input)?;
        match BaseNetwork::parse(&line) {
            Ok(base) => {
                log::info!("base network {base}");
                return Ok(base);
            }
            Err(e) => writeln!(
                output,
                "{} {e}. Please use format: x.x.x.x/xx",
                "Invalid input:".red()
            )?,
        }
    }
}

/// Collect per-segment host counts; a `0` ends the list.
///
/// At least one segment is required, and each count must be in
/// 1..=[`MAX_SEGMENT_HOSTS`].
pub fn prompt_segments<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Vec<SegmentRequest>> {
    writeln!(output, "\n{}", "=".repeat(60))?;
    writeln!(output, "ENTER SEGMENT REQUIREMENTS")?;
    writeln!(output, "{}", "=".repeat(60))?;
    writeln!(
        output,
        "Enter the number of hosts for each segment (enter 0 to finish):"
    )?;

    let mut segments: Vec<SegmentRequest> = Vec::new();
    loop {
        write!(output, "Segment {} hosts: ", segments.len() + 1)?;
        output.flush()?;
        let line = read_line(input)?;
        // i128 so absurdly long numeric entries still reach the range
        // checks instead of reading as a parse failure.
        let hosts: i128 = match line.parse() {
            Ok(n) => n,
            Err(_) => {
                writeln!(output, "Invalid input. Please enter a number.")?;
                continue;
            }
        };
        if hosts == 0 {
            if segments.is_empty() {
                writeln!(
                    output,
                    "You need at least one segment. Please enter a valid number."
                )?;
                continue;
            }
            break;
        }
        if hosts < 1 {
            writeln!(output, "Number of hosts must be positive. Please try again.")?;
            continue;
        }
        if hosts > i128::from(MAX_SEGMENT_HOSTS) {
            writeln!(
                output,
                "Too many hosts. Maximum is {MAX_SEGMENT_HOSTS} per segment."
            )?;
            continue;
        }
        segments.push(SegmentRequest::new(segments.len(), hosts as u32));
    }
    log::info!("collected {} segments", segments.len());
    Ok(segments)
}

/// Outer calculator loop: collect inputs, allocate, render, repeat on `y`.
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<()> {
    writeln!(output, "Welcome to the IPv4 Subnetting Calculator!")?;
    writeln!(
        output,
        "This tool will help you create subnets based on segment requirements."
    )?;
    loop {
        let base = prompt_base_network(input, output)?;
        let segments = prompt_segments(input, output)?;

        match allocate(&base, &segments) {
            Ok(plan) => {
                if let Ok(json) = serde_json::to_string(&plan) {
                    log::debug!("plan: {json}");
                }
                writeln!(output, "\n{}", plan_table(&base, &plan))?;
            }
            Err(e) => {
                log::warn!("allocation failed: {e}");
                writeln!(output, "\n{} {e}", "ERROR:".on_red())?;
                writeln!(
                    output,
                    "Failed to allocate subnets. Please try with a larger base network."
                )?;
            }
        }

        write!(output, "\nPerform another calculation? (y/n): ")?;
        output.flush()?;
        let another = match read_line(input) {
            Ok(answer) => answer,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e),
        };
        if !another.eq_ignore_ascii_case("y") {
            break;
        }
    }
    Ok(())
}
