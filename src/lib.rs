pub mod error;
pub mod header;
pub mod options;
pub mod variant;
pub mod vector;
pub mod writer;

pub mod parsing {
    pub mod dvs_file;
}

pub mod api {
    pub mod vector_file;
}

pub use api::vector_file::VectorFile;
pub use error::DvsError;
pub use options::{HeaderOptions, Normalisation};
pub use variant::Variant;
pub use vector::DiffusionVectorSet;
