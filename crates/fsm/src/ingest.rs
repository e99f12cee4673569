//! Parsing of transition records and NFA construction from them.

use crate::automaton::Automaton;
use crate::error::{Error, RecordDefect, Result};
use std::io::BufRead;

/// Reserved name prefix marking accepting states in the text format.
///
/// This naming convention is a compatibility shim for record sources that
/// cannot carry an explicit accepting flag; inside the graph, acceptance is
/// always the explicit [`State::is_accepting`](crate::State) flag.
pub const ACCEPT_MARKER: char = 'f';

/// One ingested transition: `from` moves to `to` on `symbol`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub from: String,
    pub symbol: char,
    pub to: String,
    /// True if the record marks `from` as a start state.
    pub is_start: bool,
    pub from_accepting: bool,
    pub to_accepting: bool,
}

impl Record {
    /// Build a record, deriving the accepting flags from the reserved name
    /// prefix of the text format.
    pub fn new(
        from: impl Into<String>,
        symbol: char,
        to: impl Into<String>,
        is_start: bool,
    ) -> Self {
        let from = from.into();
        let to = to.into();
        let from_accepting = from.starts_with(ACCEPT_MARKER);
        let to_accepting = to.starts_with(ACCEPT_MARKER);
        Self {
            from,
            symbol,
            to,
            is_start,
            from_accepting,
            to_accepting,
        }
    }
}

/// Parse one `from,symbol=to` line. `line_number` is 1-based and is carried
/// into [`Error::MalformedRecord`] on failure. A trailing carriage return or
/// newline is ignored.
pub fn parse_record(line: &str, line_number: usize, is_start: bool) -> Result<Record> {
    let malformed = |defect: RecordDefect| Error::MalformedRecord {
        line: line_number,
        defect,
    };

    let line = line.trim_end_matches(['\r', '\n']);
    let (from, rest) = line
        .split_once(',')
        .ok_or_else(|| malformed(RecordDefect::MissingComma))?;
    if from.is_empty() {
        return Err(malformed(RecordDefect::EmptyName));
    }
    if from.contains('=') {
        return Err(malformed(RecordDefect::StrayDelimiter));
    }

    let mut rest = rest.chars();
    let symbol = rest.next().ok_or_else(|| malformed(RecordDefect::Truncated))?;
    match rest.next() {
        Some('=') => {}
        Some(_) => return Err(malformed(RecordDefect::MissingEquals)),
        None => return Err(malformed(RecordDefect::Truncated)),
    }

    let to = rest.as_str();
    if to.is_empty() {
        return Err(malformed(RecordDefect::EmptyName));
    }
    if to.contains(',') || to.contains('=') {
        return Err(malformed(RecordDefect::StrayDelimiter));
    }

    Ok(Record::new(from, symbol, to, is_start))
}

/// Read records from a line source, one per line, until the source is
/// exhausted or a blank (or carriage-return-only) line ends the input.
/// The first record's `from` state is a start state. Aborts on the first
/// malformed line.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim_end_matches('\r').is_empty() {
            break;
        }
        records.push(parse_record(&line, index + 1, records.is_empty())?);
    }
    Ok(records)
}

impl Automaton {
    /// Build an NFA from transition records: find-or-create both endpoint
    /// states, accumulate their start/accepting flags, register the symbol
    /// and add the transition.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        let mut automaton = Automaton::new();
        for record in records {
            let from = automaton.find_or_create(&record.from);
            from.is_start |= record.is_start;
            from.is_accepting |= record.from_accepting;

            let to = automaton.find_or_create(&record.to);
            to.is_accepting |= record.to_accepting;

            automaton.add_transition(&record.from, record.symbol, &record.to);
        }
        automaton
    }

    /// Build an NFA straight from a line source. Fails on the first
    /// malformed record without yielding a partially built graph.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Ok(Self::from_records(read_records(reader)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_basic() {
        let record = parse_record("A,a=B", 1, true).unwrap();
        assert_eq!(record.from, "A");
        assert_eq!(record.symbol, 'a');
        assert_eq!(record.to, "B");
        assert!(record.is_start);
        assert!(!record.from_accepting);
        assert!(!record.to_accepting);
    }

    #[test]
    fn test_parse_record_accept_marker() {
        let record = parse_record("B,b=fD", 2, false).unwrap();
        assert!(!record.from_accepting);
        assert!(record.to_accepting);
    }

    #[test]
    fn test_parse_record_ignores_trailing_newline() {
        let record = parse_record("A,a=B\r\n", 1, false).unwrap();
        assert_eq!(record.to, "B");
    }

    #[test]
    fn test_parse_record_missing_equals() {
        let err = parse_record("B,bfD", 2, false).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedRecord {
                line: 2,
                defect: RecordDefect::MissingEquals,
            }
        ));
    }

    #[test]
    fn test_parse_record_missing_comma() {
        let err = parse_record("Aa=B", 1, false).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedRecord {
                line: 1,
                defect: RecordDefect::MissingComma,
            }
        ));
    }

    #[test]
    fn test_parse_record_truncated() {
        let err = parse_record("A,a", 3, false).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedRecord {
                line: 3,
                defect: RecordDefect::Truncated,
            }
        ));
    }

    #[test]
    fn test_parse_record_empty_names() {
        assert!(matches!(
            parse_record(",a=B", 1, false).unwrap_err(),
            Error::MalformedRecord {
                defect: RecordDefect::EmptyName,
                ..
            }
        ));
        assert!(matches!(
            parse_record("A,a=", 1, false).unwrap_err(),
            Error::MalformedRecord {
                defect: RecordDefect::EmptyName,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_record_stray_delimiter() {
        assert!(matches!(
            parse_record("A=B,a=C", 1, false).unwrap_err(),
            Error::MalformedRecord {
                defect: RecordDefect::StrayDelimiter,
                ..
            }
        ));
        assert!(matches!(
            parse_record("A,a=B,C", 1, false).unwrap_err(),
            Error::MalformedRecord {
                defect: RecordDefect::StrayDelimiter,
                ..
            }
        ));
    }

    #[test]
    fn test_read_records_marks_first_from_as_start() {
        let input = "A,a=B\nB,b=fD\n";
        let records = read_records(input.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].is_start);
        assert!(!records[1].is_start);
    }

    #[test]
    fn test_read_records_stops_at_blank_line() {
        let input = "A,a=B\n\r\nB,b=fD\n";
        let records = read_records(input.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_read_records_reports_offending_line() {
        let input = "A,a=B\nB,bfD\n";
        let err = read_records(input.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { line: 2, .. }));
    }

    #[test]
    fn test_from_records_builds_graph() {
        let records = vec![
            Record::new("A", 'a', "B", true),
            Record::new("A", 'a', "C", false),
            Record::new("B", 'b', "fD", false),
        ];
        let automaton = Automaton::from_records(records);

        assert_eq!(automaton.len(), 4);
        assert!(automaton.state("A").unwrap().is_start);
        assert!(automaton.state("fD").unwrap().is_accepting);
        assert_eq!(automaton.state("A").unwrap().transition_count('a'), 2);
        assert_eq!(automaton.alphabet().len(), 2);
    }

    #[test]
    fn test_from_reader_aborts_on_malformed_line() {
        let input = "A,a=B\nB,bfD\n";
        assert!(Automaton::from_reader(input.as_bytes()).is_err());
    }
}
