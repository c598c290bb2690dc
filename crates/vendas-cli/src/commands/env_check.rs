use vendas_core::diagnostics::EnvReport;

use crate::error::CliError;

pub fn run_env_check(as_json: bool) -> Result<(), CliError> {
    let report = EnvReport::from_env();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in format_report_lines(&report) {
            println!("{line}");
        }
    }

    check_report(report)
}

pub fn format_report_lines(report: &EnvReport) -> Vec<String> {
    report
        .present
        .iter()
        .map(|name| format!("ok       {name}"))
        .chain(report.missing.iter().map(|name| format!("missing  {name}")))
        .collect()
}

pub fn check_report(report: EnvReport) -> Result<(), CliError> {
    if report.all_present() {
        Ok(())
    } else {
        Err(CliError::MissingConfig(report.missing))
    }
}
