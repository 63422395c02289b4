use std::fmt::Write;

use crate::error::ChtcfgError;
use crate::perspective::{self, Condition, Group, Perspective, Rule};
use crate::terraform::StateFile;

/// Reconstruct the `cloudhealth_perspective` config blocks from a raw state
/// document. Resources of other types are skipped; zero matches yield an
/// empty string. Blocks appear in document order, back to back.
pub fn reconstruct_config(input: &str) -> Result<String, ChtcfgError> {
    let state = StateFile::parse(input)?;
    tracing::info!(resources = state.resources().len(), "state file parsed");

    let mut out = String::new();
    let mut count = 0usize;
    for resource in state.resources() {
        if resource.resource_type() != perspective::RESOURCE_TYPE {
            tracing::debug!(address = %resource.address(), "skipping resource");
            continue;
        }
        let attrs = resource.attributes()?;
        let persp = Perspective::from_attributes(resource.name(), &attrs).map_err(|source| {
            ChtcfgError::Decode {
                address: resource.address(),
                source,
            }
        })?;
        write_perspective(&mut out, &persp)?;
        count += 1;
    }

    tracing::info!(perspectives = count, "configuration reconstructed");
    Ok(out)
}

/// Emit one resource block. Indentation is hardcoded per block type to
/// reproduce the expected config shape exactly.
pub fn write_perspective(out: &mut impl Write, persp: &Perspective) -> std::fmt::Result {
    writeln!(
        out,
        "resource \"{}\" \"{}\" {{",
        perspective::RESOURCE_TYPE,
        persp.tf_name
    )?;
    writeln!(out, "    name = \"{}\"", persp.name)?;
    // include_in_reports is reproduced raw, not coerced to a bool token
    writeln!(out, "    include_in_reports = {}", persp.include_in_reports)?;

    for group in &persp.groups {
        write_group(out, group)?;
    }

    writeln!(out, "}}")
}

fn write_group(out: &mut impl Write, group: &Group) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "    group {{")?;
    writeln!(out, "        name = \"{}\"", group.name)?;
    writeln!(out, "        type = \"{}\"", group.kind)?;

    for rule in &group.rules {
        write_rule(out, rule)?;
    }

    writeln!(out, "    }}")
}

fn write_rule(out: &mut impl Write, rule: &Rule) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "        rule {{")?;
    writeln!(out, "            asset = \"{}\"", rule.asset)?;

    if let Some(combine_with) = &rule.combine_with {
        writeln!(out, "            combine_with = \"{combine_with}\"")?;
    }

    write_string_list(out, "            ", "field", &rule.field)?;
    write_string_list(out, "            ", "tag_field", &rule.tag_field)?;

    for condition in &rule.conditions {
        write_condition(out, condition)?;
    }

    writeln!(out, "        }}")
}

fn write_condition(out: &mut impl Write, condition: &Condition) -> std::fmt::Result {
    writeln!(out, "            condition {{")?;

    write_string_list(out, "                ", "field", &condition.field)?;
    write_string_list(out, "                ", "tag_field", &condition.tag_field)?;

    if condition.op != perspective::DEFAULT_OP {
        writeln!(out, "                op = \"{}\"", condition.op)?;
    }
    if !condition.val.is_empty() {
        writeln!(out, "                val = \"{}\"", condition.val)?;
    }

    writeln!(out, "            }}")
}

/// One `<field> = ["v0", "v1", ...]` line, or nothing for an empty list.
/// Elements are quoted as-is; embedded quotes or backslashes are not
/// escaped.
fn write_string_list(
    out: &mut impl Write,
    indent: &str,
    field: &str,
    values: &[String],
) -> std::fmt::Result {
    if values.is_empty() {
        return Ok(());
    }
    writeln!(out, "{indent}{field} = [\"{}\"]", values.join("\", \""))
}
