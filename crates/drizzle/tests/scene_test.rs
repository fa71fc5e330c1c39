//! Integration tests for scene loading and the shared-viewer frame loop.

use std::path::PathBuf;

use drizzle::particles::is_back_to_front;
use drizzle::{OrbitCamera, Scene, SceneConfig, SceneError, UploadQueue};
use glam::Vec3;

fn shipped_scene() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/scene.toml")
}

fn temp_scene_path(tag: &str) -> PathBuf {
    let id = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("drizzle_scene_{tag}_{id}.toml"))
}

#[test]
fn test_shipped_scene_matches_default() {
    let loaded = SceneConfig::load(shipped_scene()).unwrap();
    assert_eq!(loaded, SceneConfig::default());
}

#[test]
fn test_missing_file_is_io_error() {
    let result = SceneConfig::load("/definitely/not/here/scene.toml");
    assert!(matches!(result, Err(SceneError::Io { .. })));
}

#[test]
fn test_invalid_emitter_in_file() {
    let path = temp_scene_path("invalid");
    let text = std::fs::read_to_string(shipped_scene())
        .unwrap()
        .replacen("capacity = 100000", "capacity = 0", 1);
    std::fs::write(&path, text).unwrap();

    let result = SceneConfig::load(&path);
    assert!(matches!(result, Err(SceneError::Config(_))));

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_malformed_scene_is_parse_error() {
    let result = SceneConfig::from_toml_str("[[emitter]]\nname = \"x\"\n");
    assert!(matches!(result, Err(SceneError::Parse(_))));
}

#[test]
fn test_orbit_run_keeps_feeds_consistent() {
    let mut config = SceneConfig::default().with_seed(3);
    for emitter in &mut config.emitters {
        emitter.capacity = 2_000;
    }
    let mut scene = Scene::new(&config).unwrap();
    let camera = OrbitCamera::default();
    let mut upload = UploadQueue::spawn(256).unwrap();

    for frame in 0..120u16 {
        let t = f32::from(frame) / 60.0;
        scene.update_with_view(1.0 / 60.0, &camera.view(t));
        upload.submit(&scene);

        for emitter in scene.emitters() {
            let feed = emitter.feed();
            assert_eq!(feed.position_size().len(), emitter.live_count());
            assert_eq!(feed.colors().len(), emitter.live_count());
            assert!(emitter.live_count() <= emitter.pool().capacity());
            assert!(is_back_to_front(emitter.pool().as_slice()));
        }
    }

    assert_eq!(scene.frame(), 120);
    let totals = upload.finish().unwrap();
    assert!(totals.frames > 0);
    assert!(totals.instances > 0);
}

#[test]
fn test_emitters_see_same_viewer() {
    let mut config = SceneConfig::default();
    for emitter in &mut config.emitters {
        emitter.capacity = 500;
    }
    let mut scene = Scene::new(&config).unwrap();
    let viewer = Vec3::new(4.0, 3.0, 2.0);

    scene.update(0.02, viewer);

    for emitter in scene.emitters() {
        for particle in emitter.pool().as_slice().iter().filter(|p| p.is_live()) {
            let expected = particle.position.distance_squared(viewer);
            assert!((particle.camera_distance_sq - expected).abs() <= expected * 1e-6);
        }
    }
}
