//! Firmware-family conventions for Siemens diffusion vector files.
//!
//! A [`Variant`] is fixed when a [`VectorFile`](crate::api::vector_file::VectorFile)
//! is created and every formatting decision that differs between scanner
//! software generations is derived from it.

use serde::{Deserialize, Serialize};

/// Prefix of the bracketed direction-count marker.
pub const DIRECTIONS_PREFIX: &str = "[directions=";

/// File name embedded in the header when the caller does not supply one.
pub const DEFAULT_VECTOR_SET_NAME: &str = "MyVectorSet.dvs";

/// The only file name the legacy sequence software picks up.
pub const LEGACY_FILE_NAME: &str = "DiffusionVectors.txt";

const CURRENT_DIRECTORY: &str = r"C:\Medcom\MriCustomer\seq\DiffusionVectorSets\";
const LEGACY_DIRECTORY: &str = r"C:\Medcom\MriCustomer\seq\";

/// Scanner software family a vector file is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// VE-line software (e.g. VE11c), `.dvs` files in `DiffusionVectorSets`.
    #[default]
    Current,
    /// VB-line software (e.g. VB17c), a single `DiffusionVectors.txt`.
    Legacy,
}

impl Variant {
    /// Line terminator written after every header and vector line.
    pub fn terminator(self) -> &'static str {
        match self {
            Variant::Current => "\n",
            Variant::Legacy => "\r\n",
        }
    }

    /// Scanner-side directory shown in the `# File:` header comment.
    pub fn default_directory(self) -> &'static str {
        match self {
            Variant::Current => CURRENT_DIRECTORY,
            Variant::Legacy => LEGACY_DIRECTORY,
        }
    }

    /// File name used when saving without an explicit destination name.
    pub fn default_file_name(self) -> &'static str {
        match self {
            Variant::Current => DEFAULT_VECTOR_SET_NAME,
            Variant::Legacy => LEGACY_FILE_NAME,
        }
    }

    pub fn recommended_extension(self) -> &'static str {
        match self {
            Variant::Current => "dvs",
            Variant::Legacy => "txt",
        }
    }

    /// Whether the `b-values:` line is written unless options say otherwise.
    pub fn includes_b_values(self) -> bool {
        true
    }

    /// Whether the `number dimensions:` line is written unless options say otherwise.
    pub fn includes_dimensions(self) -> bool {
        matches!(self, Variant::Current)
    }

    /// Render the direction-count marker line.
    ///
    /// The legacy form only drops the `[directions=` prefix; the closing
    /// bracket stays, giving e.g. `6]`. Scanner software of that generation
    /// has been fed this exact form, so it is reproduced as is.
    pub fn direction_marker(self, directions: usize) -> String {
        let marker = format!("{DIRECTIONS_PREFIX}{directions}]");
        match self {
            Variant::Current => marker,
            Variant::Legacy => marker.replacen(DIRECTIONS_PREFIX, "", 1),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Current => write!(f, "current"),
            Variant::Legacy => write!(f, "legacy"),
        }
    }
}
