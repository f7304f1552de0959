//! Integration tests for CSV reading and writing through files

use std::fs;

use tempfile::TempDir;
use vizframe_core::{DataValue, ElementKind};
use vizframe_io::{CsvOptions, CsvReader, CsvWriter, FrameReader, IoError};

const SAMPLE: &str = "\
id,species,length,weight
1,setosa,5.1,
2,versicolor,7.0,3.2
3,setosa,4.9,3.0
";

#[test]
fn test_file_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.csv");
    let output = temp_dir.path().join("output.csv");
    fs::write(&input, SAMPLE).unwrap();

    let frame = CsvReader::new().read_path(&input).unwrap();
    assert_eq!(frame.num_rows(), 3);
    assert_eq!(frame.column_by_name("id").unwrap().kind(), ElementKind::Int32);
    assert_eq!(
        frame.column_by_name("weight").unwrap().kind(),
        ElementKind::Float32
    );
    let species = frame.column_by_name("species").unwrap();
    assert_eq!(
        species.as_categorical().unwrap().categories(),
        &["setosa", "versicolor"]
    );

    CsvWriter::new().write_path(&frame, &output).unwrap();
    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, SAMPLE.replace("7.0", "7").replace("3.0", "3"));

    let reread = CsvReader::new().read_path(&output).unwrap();
    assert_eq!(reread.headers(), frame.headers());
    for row in 0..frame.num_rows() {
        let expected = frame.data_item(row, true).unwrap();
        let actual = reread.data_item(row, true).unwrap();
        for (a, b) in expected.iter().zip(&actual) {
            assert!(a == b || (a.is_nan() && b.is_nan()), "{a} != {b}");
        }
    }
}

#[test]
fn test_double_precision_option() {
    let options = CsvOptions::new().with_double_precision(true);
    let frame = CsvReader::with_options(options).read_str(SAMPLE).unwrap();
    let length = frame.column_by_name("length").unwrap();
    assert_eq!(length.kind(), ElementKind::Float64);
    assert_eq!(length.value(1, false).unwrap(), DataValue::Float64(7.0));
}

#[test]
fn test_frame_reader_trait() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.tsv");
    fs::write(&path, "a\tb\n1\t2\n").unwrap();

    let reader = CsvReader::open(&path, CsvOptions::new().with_delimiter(b'\t')).unwrap();
    assert_eq!(reader.format_name(), "CSV");
    let frame = reader.read_frame().unwrap();
    assert_eq!(frame.num_columns(), 3);
    assert!(frame.is_consistent());
}

#[test]
fn test_open_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.csv");
    assert!(matches!(
        CsvReader::open(&missing, CsvOptions::new()),
        Err(IoError::FileNotFound(_))
    ));
}

#[test]
fn test_summary_of_read_frame() {
    let frame = CsvReader::new().read_str(SAMPLE).unwrap();
    let summary = frame.summary().to_string();
    assert!(summary.contains("Number of Rows: 3"));
    assert!(summary.contains("setosa, versicolor [2]"));
}
