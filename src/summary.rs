use crate::image::DepthImage;
use crate::types::Dimensions;

pub fn print_summary(input: Dimensions, depth_image: &DepthImage) {
    print_dimensions("Dimensions", input);
    print_dimensions("Output Dimensions", depth_image.dimensions());

    println!(
        "{:20}: {} [{:?}]",
        "Orientation",
        depth_image.orientation,
        depth_image.orientation.to_exif()
    );

    print_value("Min Value", depth_image.min_value());
    print_value("Max Value", depth_image.max_value());
    print_value("Range", depth_image.result.range());

    let non_finite = depth_image.non_finite_count();
    if non_finite > 0 {
        println!("{:20}: {}", "Non-finite Samples", non_finite);
    }

    println!();
}

fn print_dimensions(name: &str, dimensions: Dimensions) {
    println!(
        "{name:20}: {dimensions} ({count} samples)",
        count = dimensions.pixel_count()
    );
}

fn print_value(name: &str, value: f32) {
    println!("{name:20}: {value}");
}
