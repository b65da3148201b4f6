use std::fs;
use std::path::PathBuf;

use sphere_tracer::output::{read_ppm, write_ppm};
use sphere_tracer::parsing::{Config, SceneData, SphereData};
use sphere_tracer::prelude::*;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("sphere_tracer_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn single_sphere(shading: Shading) -> (Scene, RenderSettings) {
    let mut config = Config::default();
    config.render_settings.resolution.width = 40;
    config.render_settings.resolution.height = 30;
    config.render_settings.samples = 4;
    config.render_settings.seed = Some(1234);
    config.scene = SceneData {
        spheres: vec![SphereData::new([0.0, 0.0, 5.0], 1.0)],
        shading,
        ..SceneData::default()
    };
    config.build().unwrap()
}

#[test]
fn center_is_lit_and_corners_are_background() {
    let (scene, settings) = single_sphere(Shading::Depth);
    let film = render(&scene, &settings).unwrap();

    let center = film.at(20, 15);
    assert_ne!(center, Color::BLACK);
    // every sample of the center pixel hits near t = 4
    assert_eq!(center, Color::splat((255.0 * 0.6f64.powi(4)).round() as u8));

    for (x, y) in [(0, 0), (39, 0), (0, 29), (39, 29)] {
        assert_eq!(film.at(x, y), Color::BLACK, "corner ({}, {})", x, y);
    }
}

#[test]
fn default_scene_renders_ground_and_spheres() {
    let mut config = Config::default();
    config.render_settings.resolution.width = 80;
    config.render_settings.resolution.height = 60;
    config.render_settings.samples = 2;
    config.render_settings.seed = Some(5);
    let (scene, settings) = config.build().unwrap();
    let film = render(&scene, &settings).unwrap();

    // sky above the spheres, ground below them
    assert_eq!(film.at(40, 0), Color::BLACK);
    assert_ne!(film.at(40, 59), Color::BLACK);
    // the middle sphere is 2 units away at its nearest point
    assert_ne!(film.at(40, 30), Color::BLACK);
}

#[test]
fn rendered_image_survives_a_round_trip_through_disk() {
    let (scene, settings) = single_sphere(Shading::Normal);
    let film = render(&scene, &settings).unwrap();

    let dir = scratch_dir("round_trip");
    let path = dir.join("nested").join("render.ppm");
    write_ppm(&film, &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("P3\n40 30\n255\n"));

    let parsed = read_ppm(&path).unwrap();
    assert_eq!((parsed.width, parsed.height), (40, 30));
    assert_eq!(parsed, film);

    // nothing left behind besides the image
    let entries: Vec<_> = fs::read_dir(path.parent().unwrap()).unwrap().collect();
    assert_eq!(entries.len(), 1);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn failed_write_leaves_no_file() {
    let (scene, settings) = single_sphere(Shading::Silhouette);
    let film = render(&scene, &settings).unwrap();

    let dir = scratch_dir("unwritable");
    let blocker = dir.join("not_a_directory");
    fs::write(&blocker, b"").unwrap();
    let path = blocker.join("render.ppm");

    assert!(write_ppm(&film, &path).is_err());
    assert!(!path.exists());
    let _ = fs::remove_dir_all(&dir);
}
