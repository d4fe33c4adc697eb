//! Batch line import with per-line error accumulation
//!
//! A batch never aborts on the first bad line: every line is attempted,
//! failures are collected alongside the successes, and the report keeps
//! format problems ("bad shape") separate from validation problems
//! ("bad value") so callers can present them differently.

use tracing::debug;

use renoplan_domain::error::ParseError;

use crate::record::CsvRecord;

/// One rejected line from a batch import
#[derive(Debug, Clone, PartialEq)]
pub struct LineFailure {
    /// 1-based line number within the batch
    pub line_no: usize,
    /// The raw line as supplied
    pub line: String,
    /// Why it was rejected
    pub error: ParseError,
}

/// The result of importing a batch of delimited lines
#[derive(Debug)]
pub struct ImportOutcome<R> {
    records: Vec<R>,
    failures: Vec<LineFailure>,
}

impl<R> ImportOutcome<R> {
    /// Returns the successfully parsed records, in input order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Consumes the outcome, yielding the parsed records.
    pub fn into_records(self) -> Vec<R> {
        self.records
    }

    /// Returns every rejected line.
    pub fn failures(&self) -> &[LineFailure] {
        &self.failures
    }

    /// Returns the rejected lines whose shape was wrong (field count,
    /// unconvertible segment).
    pub fn format_failures(&self) -> Vec<&LineFailure> {
        self.failures
            .iter()
            .filter(|f| f.error.is_format_error())
            .collect()
    }

    /// Returns the rejected lines that were well-formed but carried a
    /// value failing a domain rule.
    pub fn value_failures(&self) -> Vec<&LineFailure> {
        self.failures
            .iter()
            .filter(|f| !f.error.is_format_error())
            .collect()
    }

    /// True when every non-blank line parsed.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Parses a batch of delimited lines into records.
///
/// Lines are numbered from 1. Blank and whitespace-only lines are
/// skipped without being counted as failures.
pub fn import_lines<'a, R, I>(lines: I) -> ImportOutcome<R>
where
    R: CsvRecord,
    I: IntoIterator<Item = &'a str>,
{
    let mut records = Vec::new();
    let mut failures = Vec::new();

    for (index, line) in lines.into_iter().enumerate() {
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }
        match R::parse_csv_line(line) {
            Ok(record) => records.push(record),
            Err(error) => {
                debug!(line_no, %error, "rejected line during import");
                failures.push(LineFailure {
                    line_no,
                    line: line.to_string(),
                    error,
                });
            }
        }
    }

    ImportOutcome { records, failures }
}

/// Serializes records to delimited lines, one per record, in order.
pub fn export_lines<R: CsvRecord>(records: &[R]) -> Vec<String> {
    records.iter().map(CsvRecord::to_csv_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use renoplan_domain::Wall;

    #[test]
    fn clean_batch_parses_every_line() {
        let lines = ["W1,200,250,Blue", "W2,300,250,White,Window,50,120,10"];
        let outcome: ImportOutcome<Wall> = import_lines(lines);

        assert!(outcome.is_clean());
        assert_eq!(outcome.records().len(), 2);
        assert_eq!(outcome.records()[0].plan_id().as_str(), "W1");
        assert_eq!(outcome.records()[1].surface_area(), 75_000 - 6_000);
    }

    #[test]
    fn blank_lines_are_skipped_without_failure() {
        let lines = ["", "W1,200,250,Blue", "   "];
        let outcome: ImportOutcome<Wall> = import_lines(lines);
        assert!(outcome.is_clean());
        assert_eq!(outcome.records().len(), 1);
    }

    #[test]
    fn failures_carry_line_numbers_and_classification() {
        let lines = [
            "W1,200,250,Blue",        // fine
            "W2,200,250",             // wrong field count: format
            "W3,abc,250,Blue",        // non-numeric width: format
            "W4,25,250,Blue",         // below minimum: value
            "W5,200,250,Blue,Window,200,225,0", // ratio violation: value
        ];
        let outcome: ImportOutcome<Wall> = import_lines(lines);

        assert_eq!(outcome.records().len(), 1);
        assert_eq!(outcome.failures().len(), 4);

        let format_line_nos: Vec<usize> =
            outcome.format_failures().iter().map(|f| f.line_no).collect();
        assert_eq!(format_line_nos, [2, 3]);

        let value_line_nos: Vec<usize> =
            outcome.value_failures().iter().map(|f| f.line_no).collect();
        assert_eq!(value_line_nos, [4, 5]);
    }

    #[test]
    fn export_then_import_round_trips() {
        let lines = ["W1,200,250,Blue", "W2,300,250,White,Window,50,120,10"];
        let walls: Vec<Wall> = import_lines(lines).into_records();

        let exported = export_lines(&walls);
        assert_eq!(exported, lines);

        let reimported: ImportOutcome<Wall> =
            import_lines(exported.iter().map(String::as_str));
        assert_eq!(reimported.into_records(), walls);
    }
}
