//! Constraints command - print the attribute constraint table.

use std::io::Write;

use common::AppResult;
use domain::CONSTRAINTS;

/// Execute the constraints command
pub fn execute(out: &mut impl Write) -> AppResult<()> {
    writeln!(
        out,
        "{:<12} {:<8} {:<8} {:<9} {:<11} min",
        "attribute", "type", "mutable", "optional", "max_length"
    )?;

    for constraint in CONSTRAINTS.iter() {
        let max_length = constraint
            .max_length
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            out,
            "{:<12} {:<8} {:<8} {:<9} {:<11} {}",
            constraint.attribute.name(),
            constraint.value_type,
            constraint.mutable,
            constraint.optional,
            max_length,
            constraint.min.unwrap_or("-"),
        )?;
    }

    Ok(())
}
