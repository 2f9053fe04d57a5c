use siemens_dvs::{DiffusionVectorSet, DvsError, HeaderOptions, Normalisation, Variant, VectorFile};

fn six_vectors() -> DiffusionVectorSet {
    let s = 0.57735;
    DiffusionVectorSet::new(vec![
        [0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0],
        [-s, s, s],
        [s, -s, s],
        [s, s, -s],
    ])
}

#[test]
fn current_file_scenario() -> Result<(), DvsError> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("scheme.dvs");

    let file = VectorFile::current(vec![0.0, 1000.0], 3)?;
    file.save(&path, &six_vectors())?;

    let content = std::fs::read_to_string(&path)?;
    assert!(!content.contains('\r'));
    assert!(content.ends_with("Vector[5] = ( 0.577350, 0.577350,-0.577350)\n"));

    let lines: Vec<&str> = content.lines().collect();
    let vector_lines: Vec<&str> = lines.iter().copied().filter(|l| l.starts_with("Vector[")).collect();
    assert_eq!(vector_lines.len(), 6);
    for (i, line) in vector_lines.iter().enumerate() {
        assert!(line.starts_with(&format!("Vector[{}] = (", i)));
    }
    assert_eq!(vector_lines[3], "Vector[3] = (-0.577350, 0.577350, 0.577350)");

    // 9 fixed header lines plus b-values: the line order (separator, file,
    // date, description, dimensions, separator, marker, coordinates,
    // normalisation) gives 9, one more than the "8 fixed lines" stated in the
    // scenario notes, which leave out one of them. The line order wins.
    assert_eq!(lines.len(), 10 + 6);
    assert_eq!(lines[1], r"# File: C:\Medcom\MriCustomer\seq\DiffusionVectorSets\scheme.dvs");
    assert_eq!(lines[7], "[directions=6]");
    Ok(())
}

#[test]
fn legacy_file_uses_crlf_and_bare_marker() -> Result<(), DvsError> {
    let dir = tempfile::tempdir()?;
    let file = VectorFile::legacy(vec![0.0, 1000.0], 3)?;
    let path = file.save_in_dir(dir.path(), &six_vectors())?;
    assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("DiffusionVectors.txt"));

    let content = std::fs::read_to_string(&path)?;
    assert!(content.ends_with("\r\n"));
    let body = content.strip_suffix("\r\n").unwrap_or(&content);
    let lines: Vec<&str> = body.split("\r\n").collect();
    for line in &lines {
        assert!(!line.contains('\n') && !line.contains('\r'));
    }
    assert!(!content.contains("[directions="));
    assert!(lines.contains(&"6]"));
    // 8 fixed header lines plus b-values: the current layout minus
    // `number dimensions`, not the 7 the scenario notes state.
    assert_eq!(lines.len(), 9 + 6);
    assert_eq!(lines[1], r"# File: C:\Medcom\MriCustomer\seq\DiffusionVectors.txt");
    Ok(())
}

#[test]
fn newline_override_applies_to_every_line() -> Result<(), DvsError> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("crlf.dvs");
    let file = VectorFile::current(vec![1000.0], 3)?
        .with_options(HeaderOptions::new().with_newline("\r\n"));
    file.save(&path, &DiffusionVectorSet::new(vec![[1.0, 0.0, 0.0]; 3]))?;

    let content = std::fs::read_to_string(&path)?;
    assert_eq!(content.matches("\r\n").count(), content.matches('\n').count());
    assert!(content.contains("[directions=3]\r\n"));
    Ok(())
}

#[test]
fn vector_count_mismatch_is_rejected() -> Result<(), DvsError> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("short.dvs");
    let file = VectorFile::current(vec![0.0, 1000.0], 3)?;
    let vectors = DiffusionVectorSet::new(vec![[0.0, 0.0, 0.0]; 5]);

    assert!(matches!(file.save(&path, &vectors), Err(DvsError::InvalidConfiguration(_))));
    assert!(!path.exists());
    Ok(())
}

#[test]
fn invalid_layout_is_rejected() {
    assert!(matches!(VectorFile::current(vec![], 3), Err(DvsError::InvalidConfiguration(_))));
    assert!(matches!(VectorFile::legacy(vec![1000.0], 0), Err(DvsError::InvalidConfiguration(_))));
}

#[test]
fn unwritable_destination_is_io_error() -> Result<(), DvsError> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("missing").join("nested.dvs");
    let file = VectorFile::current(vec![0.0], 1)?;
    let result = file.save(&path, &DiffusionVectorSet::new(vec![[0.0, 0.0, 1.0]]));
    assert!(matches!(result, Err(DvsError::IOError(_))));
    Ok(())
}

#[test]
fn existing_file_is_truncated() -> Result<(), DvsError> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("reuse.dvs");
    std::fs::write(&path, "stale content that is longer than nothing\n".repeat(100))?;

    let file = VectorFile::current(vec![0.0], 1)?;
    file.save(&path, &DiffusionVectorSet::new(vec![[0.0, 0.0, 1.0]]))?;
    let content = std::fs::read_to_string(&path)?;
    assert!(!content.contains("stale"));
    assert!(content.ends_with("Vector[0] = ( 0.000000, 0.000000, 1.000000)\n"));
    Ok(())
}

#[test]
fn accessors_reflect_construction() -> Result<(), DvsError> {
    let mut file = VectorFile::new(Variant::Legacy, vec![0.0, 500.0, 1000.0], 2)?;
    assert_eq!(file.variant(), Variant::Legacy);
    assert_eq!(file.direction_count(), 6);
    assert_eq!(file.terminator(), "\r\n");

    file.options_mut().normalisation = Normalisation::Maximum;
    let header = file.header("DiffusionVectors.txt")?;
    assert_eq!(header.last().map(String::as_str), Some("Normalisation = maximum"));
    Ok(())
}

#[test]
fn options_json_preset_roundtrip() -> Result<(), DvsError> {
    let dir = tempfile::tempdir()?;
    let preset = dir.path().join("preset.json");
    let preset = preset.to_str().unwrap();

    let options = HeaderOptions::new()
        .with_comment("site A")
        .with_normalisation(Normalisation::Maximum)
        .with_decimals(4);
    options.save_to_file(preset)?;
    assert_eq!(HeaderOptions::load_from_file(preset)?, options);

    let partial = HeaderOptions::from_json(r#"{"normalisation": "maximum"}"#)?;
    assert_eq!(partial.normalisation, Normalisation::Maximum);
    assert_eq!(partial.coordinate_system, "xyz");
    assert_eq!(partial.decimals, 6);

    assert!(matches!(
        HeaderOptions::from_json(r#"{"normalisation": "median"}"#),
        Err(DvsError::OptionsSerialization(_))
    ));
    Ok(())
}
