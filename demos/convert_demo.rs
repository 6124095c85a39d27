//! Converts a 2D velocity field on a small quad mesh into a 3D vector field.
//!
//! Run with: `RUST_LOG=debug cargo run --example convert_demo`

use fieldvec::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let points = vec![
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(1.0, 1.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
    ];
    let cells = vec![Cell::new(CellType::Quad, vec![0, 1, 2, 3])];
    let input = Dataset::new(Geometry::new(points, cells)).with_point_array(
        DataArray::from_pairs("Vel", &[[1.0, 0.0], [0.5, 0.5], [0.0, 1.0], [-0.5, 0.5]]),
    )?;

    let mut filter = FieldToVectorFilter::default();
    filter.set_field_name("Vel");
    filter.set_output_name("VecVel");

    let mut output = Dataset::default();
    if filter.request_data(Some(&input), &mut output) != STATUS_SUCCESS {
        return Err("conversion failed".into());
    }

    println!(
        "{} points, {} cells passed through",
        output.geometry().num_points(),
        output.geometry().num_cells()
    );
    if let Some(vectors) = output
        .point_data()
        .find("VecVel")
        .and_then(|a| a.as_vectors())
    {
        for (i, v) in vectors.iter().enumerate() {
            println!("point {i}: {v}");
        }
    }

    println!("settings: {}", filter.settings().to_json_string()?);
    Ok(())
}
