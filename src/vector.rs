//! Diffusion direction vectors and their Siemens line format.

use crate::error::DvsError;

/// Ordered set of 3-component diffusion vectors, one per
/// direction and b-value combination.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DiffusionVectorSet {
    vectors: Vec<[f64; 3]>,
}

impl DiffusionVectorSet {
    pub fn new(vectors: Vec<[f64; 3]>) -> Self {
        DiffusionVectorSet { vectors }
    }

    /// Build a set from rows of arbitrary length.
    ///
    /// Rows shorter than three components are rejected; anything past the
    /// third component is ignored.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, DvsError> {
        let mut vectors = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            vectors.push(to_triplet(index, row.as_ref())?);
        }
        Ok(DiffusionVectorSet { vectors })
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, [f64; 3]> {
        self.vectors.iter()
    }

    pub fn as_slice(&self) -> &[[f64; 3]] {
        &self.vectors
    }
}

impl From<Vec<[f64; 3]>> for DiffusionVectorSet {
    fn from(vectors: Vec<[f64; 3]>) -> Self {
        DiffusionVectorSet::new(vectors)
    }
}

impl<'a> IntoIterator for &'a DiffusionVectorSet {
    type Item = &'a [f64; 3];
    type IntoIter = std::slice::Iter<'a, [f64; 3]>;

    fn into_iter(self) -> Self::IntoIter {
        self.vectors.iter()
    }
}

fn to_triplet(index: usize, components: &[f64]) -> Result<[f64; 3], DvsError> {
    match components {
        [x, y, z, rest @ ..] => {
            if !rest.is_empty() {
                tracing::warn!(index, extra = rest.len(), "ignoring vector components past the third");
            }
            Ok([*x, *y, *z])
        }
        _ => Err(DvsError::InvalidVector { index, components: components.len() }),
    }
}

/// Format one component with a sign column: a space for non-negative
/// values, `-` for negative ones. NaN is written as ` nan`.
fn format_component(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        " nan".to_string()
    } else if value.is_sign_negative() {
        format!("{:.*}", decimals, value)
    } else {
        format!(" {:.*}", decimals, value)
    }
}

/// Render a vector as a Siemens `Vector[i] = ( x, y, z)` line (no terminator).
///
/// # Examples
/// ```
/// use siemens_dvs::vector::format_vector;
///
/// let line = format_vector(1, &[-0.57735, 0.57735, 0.57735], 6).unwrap();
/// assert_eq!(line, "Vector[1] = (-0.577350, 0.577350, 0.577350)");
/// ```
pub fn format_vector(index: usize, vector: &[f64], decimals: usize) -> Result<String, DvsError> {
    let [x, y, z] = to_triplet(index, vector)?;
    Ok(format!(
        "Vector[{}] = ({},{},{})",
        index,
        format_component(x, decimals),
        format_component(y, decimals),
        format_component(z, decimals),
    ))
}
