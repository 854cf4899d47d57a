//! Line-oriented reader for SHDL circuit (`.circuit`) and variable (`.fmt`) files.
//!
//! ```text
//! <wire> input [// comment]
//! <wire> [output ]gate arity <n> table [ <bit>{2^n} ] inputs [ <wire>{n} ] [// comment]
//! <Alice|Bob> <input|output> <type> "<name>" [ <wire>+ ]
//! ```
//!
//! Line numbers are 1-based and count blank lines, which are skipped.

use std::{str::FromStr, sync::OnceLock};

use regex::Regex;

use crate::{
    core::gate::MAX_ARITY, Direction, Gate, Party, Variable, WireId,
};

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("Malformed gate on line {lineno}: {line}")]
    MalformedGateLine { lineno: usize, line: String },
    #[error("Gate arity {arity} not supported on line {lineno}")]
    UnsupportedArity { lineno: usize, arity: usize },
    #[error("Expected table of {expected} bits on line {lineno}, got {actual} bits instead")]
    TableSizeMismatch {
        lineno: usize,
        expected: usize,
        actual: usize,
    },
    #[error("Malformed variable on line {lineno}: {line}")]
    MalformedVariableLine { lineno: usize, line: String },
}
pub type ParseError = Error;

impl Error {
    pub fn lineno(&self) -> usize {
        match self {
            Error::MalformedGateLine { lineno, .. }
            | Error::UnsupportedArity { lineno, .. }
            | Error::TableSizeMismatch { lineno, .. }
            | Error::MalformedVariableLine { lineno, .. } => *lineno,
        }
    }
}

fn gate_line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"^(?P<wire>[0-9]+)\s+",
            r"(?:(?P<input>input)",
            r"|(?P<output>output\s+)?gate\s+arity\s+(?P<arity>[0-9]+)\s+",
            r"table\s*\[(?P<table>[^\]]*)\]\s*inputs\s*\[(?P<inputs>[^\]]*)\])",
            r"\s*(?://(?P<comment>.*))?$",
        ))
        .expect("gate line pattern is valid")
    })
}

fn variable_line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"^(?P<party>Alice|Bob)\s+(?P<direction>input|output)\s+(?P<ty>\S+)\s+",
            r#""(?P<name>[^"]+)"\s*\[(?P<wires>[^\]]*)\]\s*$"#,
        ))
        .expect("variable line pattern is valid")
    })
}

/// Parse every whitespace separated token, `None` if any of them fails
fn parse_tokens<T: FromStr>(s: &str) -> Option<Vec<T>> {
    s.split_whitespace().map(|token| token.parse().ok()).collect()
}

fn parse_bit(token: &str) -> Option<bool> {
    match token {
        "0" => Some(false),
        "1" => Some(true),
        _ => None,
    }
}

impl Gate {
    /// Convert one stripped line of a circuit file into a gate
    pub fn from_line(line: &str, lineno: usize) -> Result<Self, Error> {
        let malformed = || Error::MalformedGateLine {
            lineno,
            line: line.to_owned(),
        };

        let captures = gate_line_regex().captures(line).ok_or_else(malformed)?;

        let wire: WireId = captures["wire"].parse().map_err(|_| malformed())?;
        let comment = captures.name("comment").map(|c| c.as_str().to_owned());

        if captures.name("input").is_some() {
            return Ok(Self {
                comment,
                ..Self::input(wire)
            });
        }

        // digits only, so the parse fails on overflow alone
        let arity: usize = captures["arity"].parse().unwrap_or(usize::MAX);
        if arity > MAX_ARITY {
            return Err(Error::UnsupportedArity { lineno, arity });
        }

        let table = captures["table"]
            .split_whitespace()
            .map(parse_bit)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(malformed)?;

        let expected = 1 << arity;
        if table.len() != expected {
            return Err(Error::TableSizeMismatch {
                lineno,
                expected,
                actual: table.len(),
            });
        }

        let inputs: Vec<WireId> = parse_tokens(&captures["inputs"]).ok_or_else(malformed)?;
        if inputs.len() != arity {
            return Err(malformed());
        }

        Ok(Self {
            wire,
            is_input: false,
            is_output: captures.name("output").is_some(),
            table,
            inputs,
            comment,
        })
    }
}

impl Variable {
    /// Convert one stripped line of a variable file into a binding
    pub fn from_line(line: &str, lineno: usize) -> Result<Self, Error> {
        let malformed = || Error::MalformedVariableLine {
            lineno,
            line: line.to_owned(),
        };

        let captures = variable_line_regex().captures(line).ok_or_else(malformed)?;

        let wires: Vec<WireId> = parse_tokens(&captures["wires"]).ok_or_else(malformed)?;
        if wires.is_empty() {
            return Err(malformed());
        }

        Ok(Self {
            party: captures["party"].parse::<Party>().map_err(|_| malformed())?,
            direction: captures["direction"]
                .parse::<Direction>()
                .map_err(|_| malformed())?,
            ty: captures["ty"].to_owned(),
            name: captures["name"].to_owned(),
            wires,
        })
    }
}

/// Iterator over the non-blank lines of a file, parsed into records
pub struct LineReader<I, T> {
    lines: I,
    lineno: usize,
    parse: fn(&str, usize) -> Result<T, Error>,
}

impl<I, S, T> Iterator for LineReader<I, T>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    /// Record with the line number it was read from
    type Item = Result<(usize, T), Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.lineno += 1;

            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }

            return Some((self.parse)(line, self.lineno).map(|record| (self.lineno, record)));
        }
    }
}

pub fn read_gates<I>(lines: I) -> LineReader<I::IntoIter, Gate>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    LineReader {
        lines: lines.into_iter(),
        lineno: 0,
        parse: Gate::from_line,
    }
}

pub fn read_variables<I>(lines: I) -> LineReader<I::IntoIter, Variable>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    LineReader {
        lines: lines.into_iter(),
        lineno: 0,
        parse: Variable::from_line,
    }
}

/// Parse a whole variable file, stopping at the first malformed line
pub fn parse_variables<I>(lines: I) -> Result<Vec<Variable>, Error>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    read_variables(lines)
        .map(|record| record.map(|(_, variable)| variable))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wires(ids: &[usize]) -> Vec<WireId> {
        ids.iter().copied().map(WireId).collect()
    }

    #[test]
    fn test_input_line() {
        let gate = Gate::from_line("7 input", 1).unwrap();
        assert_eq!(gate, Gate::input(WireId(7)));

        let gate = Gate::from_line("7 input //input$input.alice$0", 1).unwrap();
        assert!(gate.is_input);
        assert_eq!(gate.comment.as_deref(), Some("input$input.alice$0"));
    }

    #[test]
    fn test_affirmation_lines() {
        let gate = Gate::from_line("0 gate arity 0 table [ 0 ] inputs [ ] // false", 1).unwrap();
        assert_eq!(gate.wire, WireId(0));
        assert_eq!(gate.arity(), Some(0));
        assert_eq!(gate.table, vec![false]);
        assert!(gate.inputs.is_empty());
        assert_eq!(gate.comment.as_deref(), Some(" false"));

        // compact brackets, as emitted by the unoptimised compiler
        let gate = Gate::from_line("1 gate arity 0 table [1] inputs [] //true", 2).unwrap();
        assert_eq!(gate.table, vec![true]);
        assert_eq!(gate.comment.as_deref(), Some("true"));
    }

    #[test]
    fn test_output_gate_line() {
        let gate = Gate::from_line(
            "511 output gate arity 1 table [ 0 1 ] inputs [ 510 ]\t//output$output.bob$0",
            9,
        )
        .unwrap();

        assert_eq!(gate.wire, WireId(511));
        assert!(gate.is_output);
        assert!(!gate.is_input);
        assert_eq!(gate.table, vec![false, true]);
        assert_eq!(gate.inputs, wires(&[510]));
        assert!(gate.is_passthru());
    }

    #[test]
    fn test_arity_three_line() {
        let gate = Gate::from_line(
            "40 gate arity 3 table [ 0 0 0 1 0 1 1 1 ] inputs [ 12 13 14 ]",
            1,
        )
        .unwrap();

        assert_eq!(gate.arity(), Some(3));
        assert_eq!(gate.table.len(), 8);
        assert_eq!(gate.inputs, wires(&[12, 13, 14]));
    }

    #[test]
    fn test_unsupported_arity() {
        let err = Gate::from_line(
            "40 gate arity 4 table [ 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 1 ] inputs [ 1 2 3 4 ]",
            12,
        )
        .unwrap_err();

        assert_eq!(
            err,
            Error::UnsupportedArity {
                lineno: 12,
                arity: 4
            }
        );
    }

    #[test]
    fn test_overflowing_arity_is_unsupported() {
        let err = Gate::from_line(
            "40 gate arity 18446744073709551616 table [ 0 1 ] inputs [ 1 ]",
            9,
        )
        .unwrap_err();

        assert_eq!(
            err,
            Error::UnsupportedArity {
                lineno: 9,
                arity: usize::MAX
            }
        );
    }

    #[test]
    fn test_table_size_mismatch() {
        let err = Gate::from_line("5 gate arity 2 table [ 0 1 1 ] inputs [ 3 4 ]", 3).unwrap_err();

        assert_eq!(
            err,
            Error::TableSizeMismatch {
                lineno: 3,
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_malformed_gate_lines() {
        let lines = [
            "gate arity 1 table [ 0 1 ] inputs [ 2 ]",
            "5 gate arity 1 table [ 0 2 ] inputs [ 2 ]",
            "5 gate arity 1 table [ 0 1 ] inputs [ 2 3 ]",
            "5 gate arity 1 table [ 0 1 ] inputs [ x ]",
            "5 gate arity 1 table [ 0 1 ]",
            "5 inputs",
            "-5 input",
            "5 output input",
        ];

        for (i, line) in lines.into_iter().enumerate() {
            assert_eq!(
                Gate::from_line(line, i + 1),
                Err(Error::MalformedGateLine {
                    lineno: i + 1,
                    line: line.to_owned()
                }),
                "{line:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_variable_line() {
        let variable = Variable::from_line(r#"Bob output integer "output.bob" [ 511 512 513 ]"#, 4)
            .unwrap();

        assert_eq!(variable.party, Party::Bob);
        assert_eq!(variable.direction, Direction::Output);
        assert_eq!(variable.ty, "integer");
        assert_eq!(variable.name, "output.bob");
        assert_eq!(variable.wires, wires(&[511, 512, 513]));
    }

    #[test]
    fn test_malformed_variable_lines() {
        let lines = [
            r#"Carol input integer "x" [ 1 ]"#,
            r#"Alice inout integer "x" [ 1 ]"#,
            r#"Alice input integer "x" [ ]"#,
            r#"Alice input integer x [ 1 ]"#,
            r#"Alice input integer "x" [ 1 a ]"#,
        ];

        for line in lines {
            assert!(
                matches!(
                    Variable::from_line(line, 1),
                    Err(Error::MalformedVariableLine { lineno: 1, .. })
                ),
                "{line:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_reader_skips_blank_lines() {
        let text = "\n0 input\n   \n1 gate arity 1 table [ 1 0 ] inputs [ 0 ]\n";

        let records = read_gates(text.lines()).collect::<Result<Vec<_>, _>>().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].0, 2);
        assert_eq!(records[1].0, 4);
        assert!(records[1].1.is_not());
    }

    #[test]
    fn test_reader_reports_line_number() {
        let text = ["0 input", "", "1 gate arity 5 table [ ] inputs [ ]"];

        let err = read_gates(text)
            .collect::<Result<Vec<_>, _>>()
            .unwrap_err();

        assert_eq!(err.lineno(), 3);
    }

    #[test]
    fn test_parse_variables() {
        let text = [
            r#"Alice input integer "input.alice" [ 2 3 ]"#,
            "",
            r#"Bob output integer "output.bob" [ 9 ]"#,
        ];

        let variables = parse_variables(text).unwrap();

        assert_eq!(variables.len(), 2);
        assert_eq!(variables[0].party, Party::Alice);
        assert_eq!(variables[1].wires, wires(&[9]));
    }
}
