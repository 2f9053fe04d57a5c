//! Reader for written vector files.
//!
//! Accepts both variants: the marker form (`[directions=N]` or `N]`)
//! determines the variant, and the first line break determines the
//! terminator.

use crate::error::DvsError;
use crate::options::Normalisation;
use crate::variant::{Variant, DIRECTIONS_PREFIX};

/// Contents of a parsed vector file.
#[derive(Debug, Clone, PartialEq)]
pub struct DvsFile {
    pub variant: Variant,
    pub terminator: String,
    /// Full scanner path from the `# File:` comment.
    pub file: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub b_values: Option<Vec<f64>>,
    pub n_dims: Option<usize>,
    pub comment: Option<String>,
    pub directions: usize,
    pub coordinate_system: Option<String>,
    pub normalisation: Option<Normalisation>,
    pub vectors: Vec<[f64; 3]>,
}

impl DvsFile {
    /// Parse a vector file from disk.
    pub fn parse_from_file(path: &str) -> Result<Self, DvsError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_str(&content)
    }

    pub fn parse_str(content: &str) -> Result<Self, DvsError> {
        let terminator = if content.contains("\r\n") { "\r\n" } else { "\n" };

        let mut variant = None;
        let mut directions = None;
        let mut file = None;
        let mut date = None;
        let mut description = None;
        let mut b_values = None;
        let mut n_dims = None;
        let mut comment = None;
        let mut coordinate_system = None;
        let mut normalisation = None;
        let mut vectors = Vec::new();
        let mut line_no = 0;

        for (idx, line) in content.lines().enumerate() {
            line_no = idx + 1;
            let err = |message: String| DvsError::ParseError { line: line_no, message };

            if line.trim().is_empty() {
                continue;
            } else if let Some(v) = field(line, "# File:") {
                file = Some(v.to_string());
            } else if let Some(v) = field(line, "# Date:") {
                date = Some(v.to_string());
            } else if let Some(v) = field(line, "# Description:") {
                description = Some(v.to_string());
            } else if line.starts_with('#') {
                continue;
            } else if let Some(v) = field(line, "b-values:") {
                b_values = Some(parse_b_values(v).map_err(err)?);
            } else if let Some(v) = field(line, "number dimensions:") {
                n_dims = Some(v.trim().parse::<usize>().map_err(|e| err(e.to_string()))?);
            } else if let Some(v) = field(line, "Comment:") {
                comment = Some(v.to_string());
            } else if let Some(v) = line.trim_end().strip_prefix(DIRECTIONS_PREFIX) {
                directions = Some(parse_marker(v).map_err(err)?);
                variant = Some(Variant::Current);
            } else if let Some(v) = field(line, "CoordinateSystem =") {
                coordinate_system = Some(v.to_string());
            } else if let Some(v) = field(line, "Normalisation =") {
                normalisation = Some(v.parse::<Normalisation>().map_err(|e| err(e.to_string()))?);
            } else if let Some(v) = line.trim_end().strip_prefix("Vector[") {
                let (index, vector) = parse_vector(v).map_err(err)?;
                if index != vectors.len() {
                    return Err(err(format!("expected vector index {}, found {}", vectors.len(), index)));
                }
                vectors.push(vector);
            } else if directions.is_none() && line.trim_end().ends_with(']') {
                directions = Some(parse_marker(line.trim_end()).map_err(err)?);
                variant = Some(Variant::Legacy);
            } else {
                return Err(err(format!("unrecognised line {:?}", line)));
            }
        }

        let (variant, directions) = match (variant, directions) {
            (Some(v), Some(d)) => (v, d),
            _ => {
                return Err(DvsError::ParseError {
                    line: line_no,
                    message: "missing direction count marker".into(),
                });
            }
        };
        if vectors.len() != directions {
            return Err(DvsError::ParseError {
                line: line_no,
                message: format!("header announces {} directions, found {} vectors", directions, vectors.len()),
            });
        }

        Ok(DvsFile {
            variant,
            terminator: terminator.to_string(),
            file,
            date,
            description,
            b_values,
            n_dims,
            comment,
            directions,
            coordinate_system,
            normalisation,
            vectors,
        })
    }
}

/// Value after `key` and one separating space; the rest of the line is
/// kept verbatim, trailing whitespace included.
fn field<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    line.strip_prefix(key).map(|rest| rest.strip_prefix(' ').unwrap_or(rest))
}

/// Parse `N]`, the remainder of a marker line after any prefix.
fn parse_marker(s: &str) -> Result<usize, String> {
    let count = s
        .strip_suffix(']')
        .ok_or_else(|| format!("direction marker {:?} lacks closing bracket", s))?;
    count.trim().parse::<usize>().map_err(|e| format!("invalid direction count {:?}: {}", count, e))
}

fn parse_b_values(s: &str) -> Result<Vec<f64>, String> {
    let inner = s.trim().trim_start_matches('[').trim_end_matches(']');
    inner
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(|t| t.parse::<f64>().map_err(|e| format!("invalid b-value {:?}: {}", t, e)))
        .collect()
}

/// Parse `i] = ( x, y, z)`, the remainder after `Vector[`.
fn parse_vector(s: &str) -> Result<(usize, [f64; 3]), String> {
    let (index, rest) = s.split_once(']').ok_or("missing ']' after vector index")?;
    let index = index.trim().parse::<usize>().map_err(|e| format!("invalid vector index: {}", e))?;
    let body = rest
        .trim_start()
        .strip_prefix('=')
        .map(str::trim)
        .and_then(|r| r.strip_prefix('('))
        .and_then(|r| r.strip_suffix(')'))
        .ok_or("expected '= ( x, y, z)'")?;

    let components = body
        .split(',')
        .map(|t| t.trim().parse::<f64>().map_err(|e| format!("invalid component {:?}: {}", t, e)))
        .collect::<Result<Vec<f64>, String>>()?;
    match components.as_slice() {
        [x, y, z] => Ok((index, [*x, *y, *z])),
        other => Err(format!("expected 3 components, found {}", other.len())),
    }
}
