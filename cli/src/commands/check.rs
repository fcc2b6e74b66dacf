//! Check command - build an employee record from command-line input.

use std::io::Write;

use common::{AppConfig, AppResult};
use domain::EmployeeDraft;

use crate::args::CheckArgs;

/// Execute the check command
pub fn execute(args: CheckArgs, config: &AppConfig, out: &mut impl Write) -> AppResult<()> {
    let employee = EmployeeDraft {
        id: args.id,
        first_name: args.first_name,
        given_name: args.given_name,
        last_name: args.last_name,
        email: args.email,
        address: args.address,
        phone: args.phone,
        dob: args.dob,
        gender: args.gender,
    }
    .build(&config.date_format)?;

    tracing::info!(id = employee.id(), "Employee record is valid");

    writeln!(out, "{}", employee)?;
    writeln!(out, "Name: {}", employee.name())?;
    writeln!(out, "Year of birth: {}", employee.yob())?;
    Ok(())
}
