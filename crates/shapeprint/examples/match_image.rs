use std::{env, path::PathBuf, str::FromStr};

use log::{info, LevelFilter};
use shapeprint::analyze::{analyze_image, AnalyzeParams, MatchContext};
use shapeprint::core::init_with_level;
use shapeprint::matching::{builtins, load_reference_json, Matcher};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_level = env::var("LOG_LEVEL")
        .ok()
        .and_then(|v| LevelFilter::from_str(&v).ok())
        .unwrap_or(LevelFilter::Debug);
    init_with_level(log_level)?;

    let mut args = env::args().skip(1);
    let image_path = args
        .next()
        .map(PathBuf::from)
        .ok_or("usage: match_image <image> [reference.json]")?;
    let reference = match args.next() {
        Some(path) => load_reference_json(path)?,
        None => builtins::target_32x32_v1(),
    };

    let img = image::ImageReader::open(&image_path)?.decode()?.to_rgba8();
    info!(
        "loaded {} ({}x{})",
        image_path.display(),
        img.width(),
        img.height()
    );

    let matcher = Matcher::new(reference);
    let params = AnalyzeParams::for_context(MatchContext::SingleShot);
    let analysis = analyze_image(&img, &matcher, &params)?;

    match &analysis.descriptor {
        Some(d) => info!(
            "ink density {:.3}, aspect {:.3}, centroid ({:.3}, {:.3})",
            d.ink_density, d.aspect_ratio, d.centroid.x, d.centroid.y
        ),
        None => info!("no usable shape in the image"),
    }

    println!(
        "similarity: {}% ({})",
        analysis.percent,
        if analysis.matched { "match" } else { "no match" }
    );
    Ok(())
}
