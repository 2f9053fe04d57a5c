//! Construction of the descriptive header that precedes the vector lines.

use std::path::Path;

use chrono::{Local, NaiveDateTime};

use crate::error::DvsError;
use crate::options::HeaderOptions;
use crate::variant::{Variant, DEFAULT_VECTOR_SET_NAME};

/// Rule line framing the comment block.
pub const SEPARATOR: &str =
    "# -----------------------------------------------------------------------------";

/// `strftime` layout of the `# Date:` line, e.g. `Wed Jan 15 14:32:07 2025`.
pub const DATE_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

/// Number of vector lines announced for the given acquisition.
pub fn direction_count(b_values: &[f64], n_dims: usize) -> Result<usize, DvsError> {
    if b_values.is_empty() {
        return Err(DvsError::InvalidConfiguration("at least one b-value is required".into()));
    }
    if n_dims == 0 {
        return Err(DvsError::InvalidConfiguration("number of dimensions must be positive".into()));
    }
    b_values
        .len()
        .checked_mul(n_dims)
        .ok_or_else(|| DvsError::InvalidConfiguration("direction count overflows".into()))
}

/// Render b-values as `[0, 1000]`; integral values carry no fractional part.
pub fn format_b_values(b_values: &[f64]) -> String {
    let items: Vec<String> = b_values.iter().map(|b| b.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// Builds header lines for one [`Variant`].
#[derive(Debug, Clone, Copy)]
pub struct HeaderBuilder {
    variant: Variant,
}

impl HeaderBuilder {
    pub fn new(variant: Variant) -> Self {
        HeaderBuilder { variant }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Build the header stamped with the current local time.
    pub fn build(
        &self,
        output_name: &str,
        b_values: &[f64],
        n_dims: usize,
        options: &HeaderOptions,
    ) -> Result<Vec<String>, DvsError> {
        self.build_at(output_name, b_values, n_dims, options, Local::now().naive_local())
    }

    /// Build the header with an explicit timestamp.
    ///
    /// Lines carry no terminator. Optional lines (`b-values`, `number
    /// dimensions`, `Comment`) are left out when disabled or unset.
    pub fn build_at(
        &self,
        output_name: &str,
        b_values: &[f64],
        n_dims: usize,
        options: &HeaderOptions,
        timestamp: NaiveDateTime,
    ) -> Result<Vec<String>, DvsError> {
        let directions = direction_count(b_values, n_dims)?;
        let variant = self.variant;

        let mut head = Vec::with_capacity(12);
        head.push(SEPARATOR.to_string());
        head.push(format!(
            "# File: {}{}",
            options.directory(variant),
            embedded_file_name(output_name)
        ));
        head.push(format!("# Date: {}", timestamp.format(DATE_FORMAT)));
        head.push(format!("# Description: {}", options.description()));
        if options.b_values_line(variant) {
            head.push(format!("b-values: {}", format_b_values(b_values)));
        }
        if options.dimensions_line(variant) {
            head.push(format!("number dimensions: {}", n_dims));
        }
        if let Some(comment) = options.comment() {
            head.push(format!("Comment: {}", comment));
        }
        head.push(SEPARATOR.to_string());
        head.push(variant.direction_marker(directions));
        head.push(format!("CoordinateSystem = {}", options.coordinate_system));
        head.push(format!("Normalisation = {}", options.normalisation));

        let terminator = options.newline(variant);
        if let Some(line) = head
            .iter()
            .find(|l| l.contains(['\r', '\n']) || (!terminator.is_empty() && l.contains(terminator)))
        {
            return Err(DvsError::InvalidConfiguration(format!(
                "header line contains a line break or the terminator {:?}: {:?}",
                terminator, line
            )));
        }

        tracing::debug!(%variant, directions, lines = head.len(), "built vector file header");
        Ok(head)
    }
}

/// Only the final path component ends up in the `# File:` comment.
fn embedded_file_name(output_name: &str) -> String {
    Path::new(output_name)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| DEFAULT_VECTOR_SET_NAME.to_string())
}
