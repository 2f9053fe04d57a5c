use std::path::{Path, PathBuf};

use crate::error::DvsError;
use crate::header::{direction_count, HeaderBuilder};
use crate::options::HeaderOptions;
use crate::variant::Variant;
use crate::vector::DiffusionVectorSet;
use crate::writer;

#[derive(Debug, Clone)]
/// High level description of a vector file to be written.
///
/// Holds the acquisition layout (b-values and dimensionality), the header
/// options and the [`Variant`] chosen at construction. The variant cannot be
/// changed afterwards; build a new `VectorFile` to target another scanner
/// generation.
pub struct VectorFile {
    variant: Variant,
    b_values: Vec<f64>,
    n_dims: usize,
    options: HeaderOptions,
}

impl VectorFile {
    /// Create a vector file description.
    ///
    /// # Arguments
    /// * `variant` - Scanner software family.
    /// * `b_values` - Non-empty list of b-values (s/mm²).
    /// * `n_dims` - Number of diffusion directions per b-value, usually 3.
    ///
    /// # Returns
    /// [`DvsError::InvalidConfiguration`] when the layout announces no directions.
    pub fn new(variant: Variant, b_values: Vec<f64>, n_dims: usize) -> Result<Self, DvsError> {
        direction_count(&b_values, n_dims)?;
        Ok(VectorFile {
            variant,
            b_values,
            n_dims,
            options: HeaderOptions::default(),
        })
    }

    /// Vector file for current (`.dvs`) scanner software.
    pub fn current(b_values: Vec<f64>, n_dims: usize) -> Result<Self, DvsError> {
        Self::new(Variant::Current, b_values, n_dims)
    }

    /// Vector file for legacy (`DiffusionVectors.txt`) scanner software.
    pub fn legacy(b_values: Vec<f64>, n_dims: usize) -> Result<Self, DvsError> {
        Self::new(Variant::Legacy, b_values, n_dims)
    }

    pub fn with_options(mut self, options: HeaderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn variant(&self) -> Variant { self.variant }

    pub fn b_values(&self) -> &[f64] { &self.b_values }

    pub fn n_dims(&self) -> usize { self.n_dims }

    pub fn options(&self) -> &HeaderOptions { &self.options }

    pub fn options_mut(&mut self) -> &mut HeaderOptions { &mut self.options }

    /// Number of `Vector[...]` lines this file expects.
    pub fn direction_count(&self) -> usize {
        self.b_values.len() * self.n_dims
    }

    /// Line terminator in effect (option override or variant default).
    pub fn terminator(&self) -> &str {
        self.options.newline(self.variant)
    }

    /// Header lines for a file saved under `output_name`.
    pub fn header(&self, output_name: &str) -> Result<Vec<String>, DvsError> {
        HeaderBuilder::new(self.variant).build(output_name, &self.b_values, self.n_dims, &self.options)
    }

    /// Write the header and `vectors` to `path`, replacing any existing file.
    ///
    /// The file name of `path` is what appears in the `# File:` header
    /// comment, prefixed by the scanner directory.
    ///
    /// # Returns
    /// [`DvsError::InvalidConfiguration`] if the vector count does not match
    /// [`direction_count`](Self::direction_count), or [`DvsError::IOError`]
    /// when the destination cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P, vectors: &DiffusionVectorSet) -> Result<(), DvsError> {
        let path = path.as_ref();
        let expected = self.direction_count();
        if vectors.len() != expected {
            return Err(DvsError::InvalidConfiguration(format!(
                "expected {} vectors ({} b-values x {} dimensions), got {}",
                expected,
                self.b_values.len(),
                self.n_dims,
                vectors.len()
            )));
        }

        let output_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let header = self.header(&output_name)?;

        writer::write(path, &header, vectors, self.terminator(), self.options.decimals)?;
        tracing::info!(
            path = %path.display(),
            variant = %self.variant,
            vectors = vectors.len(),
            "saved diffusion vector file"
        );
        Ok(())
    }

    /// Save into `dir` under the variant's conventional file name
    /// (`MyVectorSet.dvs` or `DiffusionVectors.txt`).
    pub fn save_in_dir<P: AsRef<Path>>(&self, dir: P, vectors: &DiffusionVectorSet) -> Result<PathBuf, DvsError> {
        let path = dir.as_ref().join(self.variant.default_file_name());
        self.save(&path, vectors)?;
        Ok(path)
    }
}
