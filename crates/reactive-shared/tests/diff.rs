use reactive_shared::{DiffError, Value, any_changed, changed_indices};

#[test]
fn test_diff_values_snapshot() {
    let previous = vec![
        Value::from("title"),
        Value::from(0.0),
        Value::from(f64::NAN),
        Value::Null,
        Value::from(3),
    ];
    let next = vec![
        Value::from("title"),
        Value::from(-0.0),
        Value::from(f64::NAN),
        Value::Undefined,
        Value::from("3"),
    ];

    assert_eq!(changed_indices(&previous, &next), Ok(vec![1, 3, 4]));
    assert_eq!(any_changed(&previous, &next), Ok(true));
    assert_eq!(any_changed(&previous, &previous), Ok(false));
}

#[test]
fn test_diff_strings() {
    let previous = ["a", "b", "c"];
    let next = ["a", "B", "c"];
    assert_eq!(changed_indices(&previous, &next), Ok(vec![1]));
}

#[test]
fn test_diff_length_mismatch() {
    let result = changed_indices(&[1.0, 2.0], &[1.0]);
    assert!(matches!(
        result,
        Err(DiffError::LengthMismatch {
            expected: 2,
            found: 1
        })
    ));
}

#[test]
fn test_diff_large_snapshot_ordered() {
    let n = 50_000usize;
    let previous: Vec<Option<u32>> = (0..n as u32).map(Some).collect();
    let next: Vec<Option<u32>> = (0..n as u32)
        .map(|i| if i % 1000 == 999 { None } else { Some(i) })
        .collect();

    let changed = changed_indices(&previous, &next).unwrap();
    assert_eq!(changed.len(), n / 1000);
    assert!(changed.windows(2).all(|w| w[0] < w[1]));
    assert!(changed.iter().all(|&i| i % 1000 == 999));
}
