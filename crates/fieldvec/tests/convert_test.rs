//! Integration tests for the field-to-vector filter.

use std::sync::Arc;

use fieldvec::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn grid(num_points: usize) -> Geometry {
    #[allow(clippy::cast_precision_loss)]
    let points = (0..num_points).map(|i| DVec3::new(i as f64, 0.0, 0.0)).collect();
    let cells = (1..num_points)
        .map(|i| Cell::new(CellType::Line, vec![(i - 1) as u32, i as u32]))
        .collect();
    Geometry::new(points, cells)
}

fn velocity_dataset() -> Dataset {
    Dataset::new(grid(2))
        .with_point_array(DataArray::from_f64("Pressure", 1, vec![10.0, 20.0]).unwrap())
        .unwrap()
        .with_point_array(DataArray::from_pairs("Vel", &[[1.0, 2.0], [3.0, 4.0]]))
        .unwrap()
}

#[test]
fn test_velocity_scenario() {
    init_logging();
    let input = velocity_dataset();
    let mut filter = FieldToVectorFilter::new(FilterSettings::default());
    filter.set_field_name("Vel");
    filter.set_output_name("Out");
    filter.set_default_z(5.0);

    let mut output = Dataset::default();
    assert_eq!(filter.request_data(Some(&input), &mut output), STATUS_SUCCESS);

    let out = output.point_data().find("Out").unwrap();
    assert_eq!(out.num_tuples(), 2);
    assert_eq!(out.num_components(), 3);
    assert_eq!(out.scalar_type(), ScalarType::Float64);
    assert_eq!(
        out.as_vectors().unwrap(),
        vec![DVec3::new(1.0, 2.0, 5.0), DVec3::new(3.0, 4.0, 5.0)]
    );

    // Everything else passes through by reference.
    assert_eq!(output.point_data().names(), vec!["Pressure", "Vel", "Out"]);
    assert!(Arc::ptr_eq(input.geometry(), output.geometry()));
    assert_eq!(output.geometry().num_cells(), 1);
    assert_eq!(output.geometry().cells()[0].connectivity, vec![0, 1]);
    assert_eq!(output.geometry().points(), input.geometry().points());
    assert!(Arc::ptr_eq(
        input.point_data().find("Pressure").unwrap(),
        output.point_data().find("Pressure").unwrap()
    ));
    assert_eq!(input.point_data().len(), 2);
}

#[test]
fn test_missing_field_fails() {
    init_logging();
    let input = velocity_dataset();
    let mut filter = FieldToVectorFilter::new(FilterSettings::for_field("Missing"));

    let mut output = Dataset::default();
    assert_eq!(filter.request_data(Some(&input), &mut output), STATUS_FAILURE);
    assert!(!output.point_data().contains("ConvertedVector"));

    let err = filter.execute(Some(&input)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FieldNotFound);
}

#[test]
fn test_wrong_component_count_fails() {
    init_logging();
    let mut filter = FieldToVectorFilter::new(FilterSettings::for_field("Pressure"));
    let mut output = Dataset::default();
    assert_eq!(
        filter.request_data(Some(&velocity_dataset()), &mut output),
        STATUS_FAILURE
    );

    let input = Dataset::new(grid(1))
        .with_point_array(DataArray::from_vectors("Vel", &[DVec3::ONE]))
        .unwrap();
    filter.set_field_name("Vel");
    assert_eq!(
        filter.execute(Some(&input)).unwrap_err(),
        ConvertError::WrongComponentCount {
            field: "Vel".into(),
            components: 3
        }
    );
}

#[test]
fn test_empty_field_with_wrong_component_count_fails() {
    init_logging();
    let input = Dataset::new(Geometry::default())
        .with_point_array(DataArray::from_f64("Vel", 3, vec![]).unwrap())
        .unwrap();
    let mut filter = FieldToVectorFilter::new(FilterSettings::for_field("Vel"));

    let err = convert(Some(&input), filter.settings()).unwrap_err();
    assert_eq!(
        err,
        ConvertError::WrongComponentCount {
            field: "Vel".into(),
            components: 3
        }
    );

    let mut output = Dataset::default();
    assert_eq!(filter.request_data(Some(&input), &mut output), STATUS_FAILURE);
    assert!(!output.point_data().contains(DEFAULT_OUTPUT_NAME));
}

#[test]
fn test_missing_input_fails() {
    init_logging();
    let mut filter = FieldToVectorFilter::new(FilterSettings::for_field("Vel"));
    let mut output = Dataset::default();
    assert_eq!(filter.request_data(None, &mut output), STATUS_FAILURE);
}

#[test]
fn test_no_field_configured_passes_through() {
    init_logging();
    let input = velocity_dataset();
    let mut filter = FieldToVectorFilter::default();

    let mut output = Dataset::default();
    assert_eq!(filter.request_data(Some(&input), &mut output), STATUS_SUCCESS);
    assert_eq!(output.point_data().names(), input.point_data().names());
    assert!(Arc::ptr_eq(input.geometry(), output.geometry()));

    let conversion = filter.execute(Some(&input)).unwrap();
    assert_eq!(
        conversion.skipped.map(|s| s.kind()),
        Some(ErrorKind::NoFieldConfigured)
    );
}

#[test]
fn test_empty_field_passes_through() {
    init_logging();
    let input = Dataset::new(Geometry::default())
        .with_point_array(DataArray::from_pairs("Vel", &[]))
        .unwrap();
    let mut filter = FieldToVectorFilter::new(FilterSettings::for_field("Vel"));

    let mut output = Dataset::default();
    assert_eq!(filter.request_data(Some(&input), &mut output), STATUS_SUCCESS);
    assert_eq!(output.point_data().names(), vec!["Vel"]);
}

#[test]
fn test_settings_from_json() {
    init_logging();
    let settings = FilterSettings::from_json_str(
        r#"{ "field_name": "Vel", "output_name": "Out", "default_z": -1.0 }"#,
    )
    .unwrap();
    let output = convert(Some(&velocity_dataset()), &settings)
        .unwrap()
        .into_output();
    assert_eq!(
        output.point_data().find("Out").unwrap().tuple(0),
        vec![1.0, 2.0, -1.0]
    );
}
