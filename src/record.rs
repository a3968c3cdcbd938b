//! One line of a generation log: `fold \t generation \t _ \t average \t best`.

/// Minimum number of tab-separated fields a line must carry.
pub const MIN_FIELDS: usize = 5;

const FOLD_FIELD: usize = 0;
const GENERATION_FIELD: usize = 1;
const AVERAGE_FIELD: usize = 3;
const BEST_FIELD: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub fold: i64,
    pub generation: i64,
    pub average_fitness: f64,
    pub best_fitness: f64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}: expected at least 5 tab-separated fields, found {found}")]
    TooFewFields { line: usize, found: usize },
    #[error("line {line}: {field} is not an integer: {text:?}")]
    InvalidInteger {
        line: usize,
        field: &'static str,
        text: String,
    },
    #[error("line {line}: {field} is not a number: {text:?}")]
    InvalidFloat {
        line: usize,
        field: &'static str,
        text: String,
    },
}

impl Record {
    /// Parse a single line. `line_no` is 1-based and only used for diagnostics.
    pub fn parse(line: &str, line_no: usize) -> Result<Self, ParseError> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < MIN_FIELDS {
            return Err(ParseError::TooFewFields {
                line: line_no,
                found: fields.len(),
            });
        }

        Ok(Self {
            fold: parse_int(fields[FOLD_FIELD], "fold", line_no)?,
            generation: parse_int(fields[GENERATION_FIELD], "generation", line_no)?,
            average_fitness: parse_float(fields[AVERAGE_FIELD], "average fitness", line_no)?,
            best_fitness: parse_float(fields[BEST_FIELD], "best fitness", line_no)?,
        })
    }
}

fn parse_int(text: &str, field: &'static str, line: usize) -> Result<i64, ParseError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidInteger {
            line,
            field,
            text: text.to_string(),
        })
}

fn parse_float(text: &str, field: &'static str, line: usize) -> Result<f64, ParseError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidFloat {
            line,
            field,
            text: text.to_string(),
        })
}
