//! Render a JSON scene, or the built-in box scene, to PPM.
//!
//! ```text
//! cargo run -p glint_renderer --example render_scene -- [scene.json] [output.ppm]
//! ```

use glint_core::SceneDesc;
use glint_renderer::{render_with_stats, save_ppm, Camera, Scene, Tracer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut args = std::env::args().skip(1);
    let desc = match args.next() {
        Some(path) => SceneDesc::load(&path)?,
        None => SceneDesc::reference_boxes(),
    };
    let output = args.next().unwrap_or_else(|| "boxes.ppm".to_string());

    println!("Glint - Scene Example");
    println!("=====================");
    println!("{} primitives, {} lights", desc.len(), desc.light_count());

    let scene = Scene::from(&desc);
    let tracer = Tracer::new(&scene);
    let camera = Camera::new(640, 480);

    let (image, stats) = render_with_stats(&camera, &tracer);
    println!("Traced {} rays (max depth {})", stats.rays, stats.max_depth_reached);

    save_ppm(&image, &output)?;
    println!("Saved to {}", output);

    Ok(())
}
