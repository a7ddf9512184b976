//! Line-oriented edge lists: a header line, then `from to cost` triples.
//!
//! ```text
//! 500 2184
//! 1 2 6807
//! 2 3 8874
//! ```
//!
//! The header is kept verbatim but never interpreted. Ids are integers, costs
//! are floats. Blank lines are skipped; anything else that is not exactly three
//! tokens is an error naming the 1-based line number.

use core::fmt;
use std::io::{self, BufRead};

use crate::error::MstError;
use crate::prim::{MstSummary, PrimEngine};
use crate::{GhostSpanningGraph, GhostToken};

/// One `from to cost` declaration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRecord {
    /// First endpoint.
    pub from: i64,
    /// Second endpoint.
    pub to: i64,
    /// Connection cost.
    pub cost: f64,
}

/// A parsed edge-list document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeList {
    /// The first line, untouched.
    pub header: Option<String>,
    /// Declarations in file order.
    pub edges: Vec<EdgeRecord>,
}

/// Errors produced while reading an edge list.
#[derive(Debug)]
pub enum ParseError {
    /// The underlying reader failed.
    Io(io::Error),
    /// A line had fewer than three tokens.
    MissingField {
        /// 1-based line number.
        line: usize,
    },
    /// A line had more than three tokens.
    TrailingField {
        /// 1-based line number.
        line: usize,
    },
    /// An endpoint was not an integer.
    InvalidId {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// A cost was not a number.
    InvalidCost {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        token: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read edge list: {err}"),
            Self::MissingField { line } => {
                write!(f, "line {line}: expected `from to cost`, found fewer fields")
            }
            Self::TrailingField { line } => {
                write!(f, "line {line}: expected `from to cost`, found extra fields")
            }
            Self::InvalidId { line, token } => {
                write!(f, "line {line}: `{token}` is not an integer vertex id")
            }
            Self::InvalidCost { line, token } => {
                write!(f, "line {line}: `{token}` is not a numeric cost")
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ParseError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl EdgeList {
    /// Parses an in-memory document.
    ///
    /// # Errors
    /// See [`ParseError`].
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::from_reader(input.as_bytes())
    }

    /// Reads a document from any buffered reader.
    ///
    /// # Errors
    /// See [`ParseError`].
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ParseError> {
        let mut lines = reader.lines();
        let header = lines.next().transpose()?;

        let mut edges = Vec::new();
        for (offset, line) in lines.enumerate() {
            let line = line?;
            // Header is line 1.
            if let Some(record) = parse_record(&line, offset + 2)? {
                edges.push(record);
            }
        }
        Ok(Self { header, edges })
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if there are no declarations.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Declares every record on `graph`.
    ///
    /// # Errors
    /// [`MstError::InvalidCost`] for the first negative, infinite or NaN cost.
    pub fn build_graph(&self, graph: &mut GhostSpanningGraph<'_, i64>) -> Result<(), MstError> {
        for e in &self.edges {
            graph.connect(e.from, e.to, e.cost)?;
        }
        Ok(())
    }

    /// Builds the graph in a fresh token scope and runs the engine on it.
    ///
    /// # Errors
    /// Graph construction or engine errors.
    pub fn summarize(&self) -> Result<MstSummary, MstError> {
        GhostToken::new(|mut token| {
            let mut graph = GhostSpanningGraph::with_capacity(self.edges.len() + 1);
            self.build_graph(&mut graph)?;
            PrimEngine::new().run(&graph, &mut token)
        })
    }

    /// Total spanning-tree cost of the declared graph.
    ///
    /// # Errors
    /// Graph construction or engine errors.
    pub fn mst_cost(&self) -> Result<f64, MstError> {
        self.summarize().map(|s| s.total_cost)
    }
}

fn parse_record(line: &str, line_no: usize) -> Result<Option<EdgeRecord>, ParseError> {
    let mut fields = line.split_whitespace();
    let Some(from) = fields.next() else {
        return Ok(None);
    };
    let (Some(to), Some(cost)) = (fields.next(), fields.next()) else {
        return Err(ParseError::MissingField { line: line_no });
    };
    if fields.next().is_some() {
        return Err(ParseError::TrailingField { line: line_no });
    }

    let id = |token: &str| {
        token.parse::<i64>().map_err(|_| ParseError::InvalidId {
            line: line_no,
            token: token.to_owned(),
        })
    };
    // Fields are checked left to right.
    let from = id(from)?;
    let to = id(to)?;
    let cost = cost.parse::<f64>().map_err(|_| ParseError::InvalidCost {
        line: line_no,
        token: cost.to_owned(),
    })?;

    Ok(Some(EdgeRecord { from, to, cost }))
}
