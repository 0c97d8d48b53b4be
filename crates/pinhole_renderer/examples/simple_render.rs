//! Simple ray casting example.
//!
//! Renders a row of colored spheres under two lights and saves to PPM format.

use pinhole_renderer::{
    render, save_ppm, Color, Lambertian, RenderConfig, Scene, Sphere, Vec3,
};

fn main() {
    println!("Pinhole Ray Caster - Simple Example");
    println!("===================================");

    let scene = build_scene();
    println!("Created {} objects, {} lights", scene.len(), scene.lights.len());

    let config = RenderConfig::default()
        .with_resolution(800, 600)
        .with_bucket_size(32);

    println!("Rendering {}x{}...", config.width, config.height);

    let start = std::time::Instant::now();
    let image = render(&scene, &config).expect("Failed to render");
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    save_ppm(&image, filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let mut scene = Scene::new(Color::new(0.2, 0.7, 0.8));

    let albedos = [
        Color::new(0.4, 0.4, 0.3),
        Color::new(0.3, 0.1, 0.1),
        Color::new(0.1, 0.3, 0.1),
        Color::new(0.1, 0.1, 0.3),
    ];

    for (i, albedo) in albedos.into_iter().enumerate() {
        let x = -4.5 + 3.0 * i as f32;
        scene.add(Sphere::with_material(
            Vec3::new(x, 0.0, -16.0),
            1.25,
            Lambertian::new(albedo),
        ));
    }

    // Backdrop
    scene.add_sphere(Vec3::new(0.0, -1004.0, -20.0), 1000.0);

    scene
        .add_light(Vec3::new(-20.0, 20.0, 20.0), 1.5)
        .add_light(Vec3::new(30.0, 50.0, -25.0), 1.8);

    scene
}
