//! @acp:module "Presenter"
//! @acp:summary "Render resolved rules to the output channel"
//! @acp:domain cli
//! @acp:layer output
//!
//! A linear load, filter, render pipeline. Load failures are written as
//! `ERROR in ...` lines and the remaining rules are still rendered.

use std::fmt::Display;
use std::io::Write;

use crate::error::Result;
use crate::rule::{Rule, RuleSource};

pub const HEADER_WIDTH: usize = 50;
pub const SEPARATOR_WIDTH: usize = 30;

/// How each active rule is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresentStyle {
    /// `RULE:` / `CONTENT:` blocks
    #[default]
    Apply,
    /// Same blocks, each introduced as instructions to the model
    Instruct,
}

/// What happened to each identifier in the order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionReport {
    pub applied: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<String>,
}

pub fn write_header<W: Write + ?Sized>(out: &mut W, title: &str) -> Result<()> {
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "=".repeat(HEADER_WIDTH))?;
    Ok(())
}

pub fn write_separator<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    Ok(())
}

pub fn write_footer<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", "=".repeat(HEADER_WIDTH))?;
    Ok(())
}

/// `ERROR in <context>: <error>`, or `ERROR: <error>` without context
pub fn write_error<W, E>(out: &mut W, context: &str, error: E) -> Result<()>
where
    W: Write + ?Sized,
    E: Display,
{
    if context.is_empty() {
        writeln!(out, "ERROR: {}", error)?;
    } else {
        writeln!(out, "ERROR in {}: {}", context, error)?;
    }
    Ok(())
}

fn render_rule<W: Write + ?Sized>(out: &mut W, rule: &Rule, style: PresentStyle) -> Result<()> {
    if style == PresentStyle::Instruct {
        writeln!(out, "INSTRUCTIONS TO MODEL:")?;
    }
    writeln!(out, "RULE: {}", rule.title)?;
    writeln!(out, "CONTENT: {}", rule.content)?;
    write_separator(out)
}

/// Load and render every rule in `order`, skipping inactive ones.
///
/// Each identifier is loaded again here; nothing is cached from resolution.
pub fn execute_rules<S, W>(
    source: &S,
    order: &[String],
    style: PresentStyle,
    out: &mut W,
) -> Result<ExecutionReport>
where
    S: RuleSource + ?Sized,
    W: Write + ?Sized,
{
    let mut report = ExecutionReport::default();

    for identifier in order {
        let rule = match source.load(identifier) {
            Ok(rule) => rule,
            Err(e) => {
                write_error(out, &format!("loading rule {}", identifier), &e)?;
                report.failed.push(identifier.clone());
                continue;
            }
        };

        if !rule.is_active() {
            writeln!(out, "SKIPPING INACTIVE RULE: {}", rule.title)?;
            report.skipped.push(identifier.clone());
            continue;
        }

        render_rule(out, &rule, style)?;
        report.applied.push(identifier.clone());
    }

    Ok(report)
}
