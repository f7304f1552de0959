//! Integration tests for DataFrame construction, row insertion and identity

use proptest::prelude::*;
use vizframe_core::{
    create_data_frame, CategoricalColumn, DataFrame, DataFrameError, DataValue, ElementKind,
    FrameConfig, IndexColumn,
};

fn to_rows(rows: &[(i32, String)]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|(id, label)| vec![id.to_string(), label.clone()])
        .collect()
}

// === Scenarios ===

#[test]
fn test_create_data_frame_scenario() {
    let rows = vec![vec!["1", "a"], vec!["2", "b"]];
    let frame = create_data_frame(&rows, &["id", "label"], false).unwrap();

    assert_eq!(frame.num_columns(), 2);
    assert_eq!(frame.num_rows(), 2);
    assert_eq!(frame.column(0).unwrap().kind(), ElementKind::Int32);
    assert_eq!(frame.column(1).unwrap().format_name(), "categorical");
    assert_eq!(
        frame.data_item(1, true).unwrap(),
        vec![DataValue::Int32(2), DataValue::String("b".into())]
    );
}

#[test]
fn test_index_added_after_inference() {
    let rows = vec![vec!["1", "a"], vec!["2", "b"]];
    let mut frame = create_data_frame(&rows, &["id", "label"], false).unwrap();
    frame.update_index_buffer().unwrap();

    assert_eq!(frame.num_columns(), 3);
    assert_eq!(frame.index_position(), Some(0));
    assert_eq!(frame.index_column().unwrap().ids(), &[0, 1]);

    frame.add_row(&["3", "c"]).unwrap();
    assert_eq!(frame.index_column().unwrap().ids(), &[0, 1, 2]);
    assert!(frame.is_consistent());
}

#[test]
fn test_add_row_width_mismatch_keeps_row_count() {
    let rows = vec![vec!["1", "a"]];
    let mut frame = create_data_frame(&rows, &["id", "label"], false).unwrap();

    let err = frame.add_row(&["1", "a", "extra"]).unwrap_err();
    assert_eq!(
        err,
        DataFrameError::InvalidColCount {
            expected: 2,
            actual: 3
        }
    );
    assert_eq!(frame.num_rows(), 1);
}

#[test]
fn test_drop_column_with_duplicate_headers() {
    let mut frame = DataFrame::new();
    frame.add_column_from_vec("v", vec![1.0f32]);
    frame.add_column_from_vec("v", vec![2.0f32]);

    frame.drop_column("v");
    assert_eq!(frame.num_columns(), 1);
    assert_eq!(
        frame.column_by_name("v").unwrap().values::<f32>(),
        Some(&[2.0f32][..])
    );
}

#[test]
fn test_inference_with_loaded_config() {
    let config = FrameConfig::from_toml("[inference]\ndouble_precision = true\n").unwrap();
    let rows = vec![vec!["0.25"], vec!["4"]];
    let frame = vizframe_core::create_data_frame_with(&rows, &["v"], &config.inference).unwrap();
    assert_eq!(frame.column(0).unwrap().kind(), ElementKind::Float64);
}

#[test]
fn test_vector_columns() {
    let mut frame = DataFrame::new();
    frame.add_typed_column::<[f32; 3]>("position", 0);
    frame.add_row(&["(1, 2, 3)"]).unwrap();
    frame.add_row(&["4 5 6"]).unwrap();

    let column = frame.column(0).unwrap();
    assert_eq!(column.format_name(), "Vec3FLOAT32");
    assert_eq!(column.value_as_string(1).unwrap(), "(4, 5, 6)");
}

// === Property-Based Tests ===

proptest! {
    #[test]
    fn test_index_length_matches_rows(
        sizes in prop::collection::vec(0usize..20, 1..5),
        index_size in 0usize..30,
    ) {
        let mut frame = DataFrame::with_size(index_size);
        for (i, size) in sizes.iter().enumerate() {
            frame.add_typed_column::<i16>(format!("c{}", i), *size);
        }
        frame.update_index_buffer().unwrap();

        let index = frame.index_column().unwrap();
        let data_rows = sizes.iter().copied().max().unwrap_or(0);
        prop_assert_eq!(index.len(), data_rows);
        prop_assert!(index.is_unique());
    }

    #[test]
    fn test_data_item_has_one_value_per_column(
        rows in prop::collection::vec((any::<i32>(), "[a-z]{1,6}"), 1..20),
    ) {
        let mut frame = create_data_frame(&to_rows(&rows), &["n", "s"], false).unwrap();
        frame.update_index_buffer().unwrap();

        for row in 0..frame.num_rows() {
            let item = frame.data_item(row, false).unwrap();
            prop_assert_eq!(item.len(), frame.num_columns());
        }
    }

    #[test]
    fn test_create_data_frame_round_trip(
        rows in prop::collection::vec((any::<i32>(), "label_[a-zA-Z]{1,8}"), 1..20),
    ) {
        let strings = to_rows(&rows);
        let frame = create_data_frame(&strings, &["n", "s"], false).unwrap();

        for (row, expected) in strings.iter().enumerate() {
            let item = frame.data_item(row, true).unwrap();
            let rendered: Vec<String> = item.iter().map(|v| v.to_string()).collect();
            prop_assert_eq!(&rendered, expected);
        }
    }

    #[test]
    fn test_fresh_identities_stay_unique(
        ids in prop::collection::hash_set(0u64..1_000_000, 0..20),
        appended in 1usize..30,
    ) {
        let mut frame = DataFrame::new();
        frame.add_column(IndexColumn::from_ids("index", ids.into_iter().collect()));
        frame.add_typed_column::<i32>("n", 0);
        for i in 0..appended {
            frame.add_row(&[i.to_string()]).unwrap();
        }
        frame.add_column_from_vec("m", vec![0u8; frame.num_rows() + 3]);
        frame.update_index_buffer().unwrap();

        let index = frame.index_column().unwrap();
        prop_assert!(index.is_unique());
        prop_assert_eq!(index.next_id(), Ok(index.ids().iter().max().unwrap() + 1));
    }

    #[test]
    fn test_identity_overflow_leaves_frame_unchanged(spare in 0u64..3) {
        let mut frame = DataFrame::new();
        frame.add_column(IndexColumn::from_ids("index", vec![u64::MAX - spare]));
        frame.add_typed_column::<i32>("n", 1);

        for _ in 0..spare {
            frame.add_row(&["1"]).unwrap();
        }
        let before = frame.clone();
        let err = frame.add_row(&["2"]).unwrap_err();
        prop_assert!(matches!(err, DataFrameError::IdentityOverflow { .. }), "unexpected error: {}", err);
        prop_assert_eq!(frame, before);
    }

    #[test]
    fn test_add_category_idempotent(category in ".{0,12}", repeats in 1usize..10) {
        let mut column = CategoricalColumn::new("c");
        let first = column.add_category(&category);
        for _ in 0..repeats {
            prop_assert_eq!(column.add_category(&category), first);
        }
        prop_assert_eq!(column.categories().len(), 1);
    }

    #[test]
    fn test_add_row_wrong_width_is_rejected(width in 0usize..6) {
        prop_assume!(width != 2);
        let mut frame = DataFrame::with_size(0);
        frame.add_typed_column::<i32>("a", 0);
        frame.add_categorical_column("b", 0);
        frame.add_row(&["1", "x"]).unwrap();

        let values: Vec<String> = (0..width).map(|i| i.to_string()).collect();
        let err = frame.add_row(&values).unwrap_err();
        prop_assert_eq!(err, DataFrameError::InvalidColCount { expected: 2, actual: width });
        prop_assert_eq!(frame.num_rows(), 1);
    }
}
