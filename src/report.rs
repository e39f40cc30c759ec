//! Console rendering of a reduction report

use crate::core::types::ReductionReport;
use std::io::{self, Write};

/// First line printed when any step failed
pub const FAILURE_HEADER: &str = "Errors encountered while reducing privileges:";

/// Only line printed when every privilege was removed
pub const SUCCESS_MESSAGE: &str = "Privileges adjusted successfully.";

/// Lines shown for `report`, in print order
pub fn render(report: &ReductionReport) -> Vec<String> {
    if report.is_success() {
        return vec![SUCCESS_MESSAGE.to_string()];
    }

    std::iter::once(FAILURE_HEADER.to_string())
        .chain(report.messages())
        .collect()
}

/// Write the rendered report, one line each
pub fn write_report<W: Write>(out: &mut W, report: &ReductionReport) -> io::Result<()> {
    for line in render(report) {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ReductionError;
    use crate::windows::utils::ErrorCode;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_success() {
        assert_eq!(
            render(&ReductionReport::new()),
            vec!["Privileges adjusted successfully."]
        );
    }

    #[test]
    fn test_render_failures() {
        let mut report = ReductionReport::new();
        report.push(ReductionError::lookup("SeUndockPrivlege", ErrorCode::NoSuchPrivilege));

        assert_eq!(
            render(&report),
            vec![
                "Errors encountered while reducing privileges:",
                "Failed to lookup privilege value SeUndockPrivlege. Error code: 1313",
            ]
        );
    }

    #[test]
    fn test_write_report() {
        let mut out = Vec::new();
        write_report(&mut out, &ReductionReport::no_privileges()).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Errors encountered while reducing privileges:\nNo privileges provided to reduce.\n"
        );
    }
}
