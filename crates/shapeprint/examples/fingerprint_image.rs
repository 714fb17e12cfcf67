//! Offline reference generation: extract a fingerprint from a target image
//! and write it as JSON, ready to be injected into a `Matcher` at startup.

use std::{env, path::PathBuf};

use log::{info, LevelFilter};
use shapeprint::analyze::extract_from_image;
use shapeprint::core::init_with_level;
use shapeprint::matching::write_reference_json;
use shapeprint::ExtractParams;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_with_level(LevelFilter::Info)?;

    let mut args = env::args().skip(1);
    let image_path = args
        .next()
        .map(PathBuf::from)
        .ok_or("usage: fingerprint_image <image> [output.json]")?;
    let output_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("reference.json"));

    let img = image::ImageReader::open(&image_path)?.decode()?.to_rgba8();
    info!(
        "loaded {} ({}x{})",
        image_path.display(),
        img.width(),
        img.height()
    );

    let descriptor = extract_from_image(&img, &ExtractParams::default())?
        .ok_or("no usable shape in the image; cannot build a reference")?;
    info!(
        "ink density {:.3}, aspect {:.3}",
        descriptor.ink_density, descriptor.aspect_ratio
    );

    write_reference_json(&output_path, &descriptor)?;
    println!("wrote reference fingerprint to {}", output_path.display());
    Ok(())
}
