use siemens_dvs::{DiffusionVectorSet, DvsError, HeaderOptions, Normalisation, VectorFile};
use siemens_dvs::parsing::dvs_file::DvsFile;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), DvsError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = "write_vector_set_example.dvs";
    let s = 1.0 / 3f64.sqrt();

    let file = VectorFile::current(vec![0.0, 1000.0], 3)?.with_options(
        HeaderOptions::new()
            .with_normalisation(Normalisation::Maximum)
            .with_comment("six-direction demo set"),
    );
    let vectors = DiffusionVectorSet::new(vec![
        [0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0],
        [-s, s, s],
        [s, -s, s],
        [s, s, -s],
    ]);
    file.save(path, &vectors)?;

    let parsed = DvsFile::parse_from_file(path)?;
    println!("{} vectors written to {}", parsed.vectors.len(), path);
    Ok(())
}
