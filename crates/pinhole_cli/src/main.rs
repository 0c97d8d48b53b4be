// Render a scene to an image file.
// Run with: cargo run --release -- [scene.json] [output.ppm]

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use pinhole_renderer::{render, save_image, RenderConfig, Scene, Vec3, DEFAULT_BACKGROUND};

const DEFAULT_OUTPUT: &str = "./out.ppm";

/// Command line arguments
#[derive(Debug, PartialEq)]
struct Args {
    scene: Option<PathBuf>,
    output: PathBuf,
}

fn usage(program: &str) -> String {
    format!("Usage: {} [scene.json] [output.ppm|output.png]", program)
}

/// Parse positional arguments. Returns `None` when help was requested.
fn parse_args(args: &[String]) -> Result<Option<Args>> {
    let program = args.first().map(String::as_str).unwrap_or("pinhole");
    let rest = args.get(1..).unwrap_or_default();

    if rest.iter().any(|a| a == "-h" || a == "--help") {
        return Ok(None);
    }
    if rest.len() > 2 {
        bail!("Too many arguments\n{}", usage(program));
    }

    Ok(Some(Args {
        scene: rest.first().map(PathBuf::from),
        output: rest
            .get(1)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
    }))
}

/// Built-in scene: two diffuse spheres lit by a single light.
fn default_scene() -> Scene {
    let mut scene = Scene::new(DEFAULT_BACKGROUND);
    scene
        .add_sphere(Vec3::new(-3.0, 0.0, -16.0), 2.0)
        .add_sphere(Vec3::new(1.5, -0.5, -18.0), 1.5)
        .add_light(Vec3::new(-20.0, 20.0, 20.0), 1.5);
    scene
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let argv: Vec<String> = std::env::args().collect();
    let Some(args) = parse_args(&argv)? else {
        println!("{}", usage(argv.first().map(String::as_str).unwrap_or("pinhole")));
        return Ok(());
    };

    let scene = match &args.scene {
        Some(path) => Scene::load(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => {
            log::info!("No scene file given, using built-in scene");
            default_scene()
        }
    };

    let config = RenderConfig::default();
    let start = Instant::now();
    let image = render(&scene, &config).context("Render failed")?;

    save_image(&image, &args.output)
        .with_context(|| format!("Failed to save image to {}", args.output.display()))?;

    log::info!("Done in {:?}", start.elapsed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args_defaults() {
        let args = parse_args(&strings(&["pinhole"])).unwrap().unwrap();
        assert_eq!(args.scene, None);
        assert_eq!(args.output, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn test_parse_args_positional() {
        let args = parse_args(&strings(&["pinhole", "scene.json", "image.png"]))
            .unwrap()
            .unwrap();
        assert_eq!(args.scene, Some(PathBuf::from("scene.json")));
        assert_eq!(args.output, PathBuf::from("image.png"));
    }

    #[test]
    fn test_parse_args_rejects_extra() {
        assert!(parse_args(&strings(&["pinhole", "a", "b", "c"])).is_err());
    }

    #[test]
    fn test_parse_args_help_is_not_an_error() {
        assert_eq!(parse_args(&strings(&["pinhole", "--help"])).unwrap(), None);
        assert_eq!(parse_args(&strings(&["pinhole", "scene.json", "-h"])).unwrap(), None);
    }

    #[test]
    fn test_default_scene() {
        let scene = default_scene();
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.lights.len(), 1);
        assert!(scene.validate().is_ok());
    }
}
