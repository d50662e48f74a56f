use anyhow::{Context, Result};
use glint_core::SceneDesc;
use glint_renderer::{render, save_ppm, Camera, Scene, Tracer};

const WIDTH: u32 = 1200;
const HEIGHT: u32 = 720;
const OUTPUT_PATH: &str = "./untitled.ppm";

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Starting Glint");

    let desc = SceneDesc::reference_spheres();
    let scene = Scene::from(&desc);
    let tracer = Tracer::new(&scene);
    let camera = Camera::new(WIDTH, HEIGHT);

    let image = render(&camera, &tracer);
    save_ppm(&image, OUTPUT_PATH).with_context(|| format!("failed to write {OUTPUT_PATH}"))?;

    Ok(())
}
