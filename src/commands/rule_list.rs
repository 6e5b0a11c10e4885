//! @acp:module "Rule List Execution"
//! @acp:summary "Select, resolve and render one configured section"
//! @acp:domain cli
//! @acp:layer handler

use std::io::Write;

use super::CommandContext;
use crate::config::RulesConfig;
use crate::error::Result;
use crate::present::{execute_rules, write_error, write_footer, write_header, ExecutionReport, PresentStyle};
use crate::resolve::{select_rules, SectionRef};

/// Run every rule selected by `section` under `header`
pub fn execute_rule_list(
    ctx: &CommandContext,
    config: Option<&RulesConfig>,
    section: &SectionRef,
    header: &str,
    style: PresentStyle,
    out: &mut dyn Write,
) -> Result<ExecutionReport> {
    let store = ctx.workspace.store(config);
    let selection = select_rules(config, section, &store);

    for failure in &selection.resolution.failures {
        write_error(
            out,
            &format!("resolving dependencies for {}", failure.identifier),
            &failure.error,
        )?;
    }

    if selection.show_order {
        writeln!(out, "Dependency resolution order: {:?}", selection.order())?;
    }

    if selection.is_empty() {
        writeln!(
            out,
            "No rules found in rules.yaml for section '{}'",
            section.name()
        )?;
        return Ok(ExecutionReport::default());
    }

    write_header(out, header)?;
    let report = execute_rules(&store, selection.order(), style, out)?;
    write_footer(out)?;

    tracing::debug!(
        applied = report.applied.len(),
        skipped = report.skipped.len(),
        failed = report.failed.len(),
        "Finished section '{}'",
        section.name()
    );

    Ok(report)
}
