use siemens_dvs::{DiffusionVectorSet, DvsError, VectorFile};

fn main() -> Result<(), DvsError> {
    let file = VectorFile::legacy(vec![1000.0], 3)?;
    let vectors = DiffusionVectorSet::from_rows(&[
        vec![1.0, 0.0, 0.0],
        vec![0.0, 1.0, 0.0],
        vec![0.0, 0.0, 1.0],
    ])?;

    let path = file.save_in_dir(".", &vectors)?;
    println!("legacy vector file written to {}", path.display());
    Ok(())
}
