//! The CSV line contract implemented by flat-file-persistable entities

use renoplan_domain::error::ParseError;
use renoplan_domain::{Employment, Opening, Wall};

/// An entity that round-trips through a single comma-delimited line.
///
/// Fields appear in constructor-argument order. No escaping is applied:
/// a free-text field containing the delimiter corrupts the round-trip,
/// which is a known, accepted limitation of the format.
pub trait CsvRecord: Sized {
    /// Serializes the record to one delimited line.
    fn to_csv_line(&self) -> String;

    /// Parses a record from one delimited line, reporting shape problems
    /// as format errors and rule violations as value errors.
    fn parse_csv_line(line: &str) -> Result<Self, ParseError>;
}

impl CsvRecord for Wall {
    fn to_csv_line(&self) -> String {
        Wall::to_csv_line(self)
    }

    fn parse_csv_line(line: &str) -> Result<Self, ParseError> {
        Wall::parse_csv_line(line)
    }
}

impl CsvRecord for Opening {
    fn to_csv_line(&self) -> String {
        Opening::to_csv_line(self)
    }

    fn parse_csv_line(line: &str) -> Result<Self, ParseError> {
        Opening::parse_csv_line(line)
    }
}

impl CsvRecord for Employment {
    fn to_csv_line(&self) -> String {
        Employment::to_csv_line(self)
    }

    fn parse_csv_line(line: &str) -> Result<Self, ParseError> {
        Employment::parse_csv_line(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use renoplan_domain::value_objects::{Color, PlanId, WallHeight, WallWidth};

    #[test]
    fn wall_round_trips_through_the_trait() {
        let wall = Wall::new(
            PlanId::new("Plan123").unwrap(),
            WallWidth::new(200).unwrap(),
            WallHeight::new(250).unwrap(),
            Color::new("Blue").unwrap(),
            None,
        )
        .unwrap();

        let line = CsvRecord::to_csv_line(&wall);
        let parsed: Wall = CsvRecord::parse_csv_line(&line).unwrap();
        assert_eq!(parsed, wall);
    }
}
