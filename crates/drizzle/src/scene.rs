//! # Scene
//!
//! A set of independent emitters updated with the same `dt` and the same
//! viewer position every frame.
//!
//! ## Scene File
//!
//! ```toml
//! [[emitter]]
//! name = "smoke"
//! # ... EmitterConfig fields
//!
//! [[emitter]]
//! name = "rain"
//! # ...
//! ```

use std::collections::HashSet;
use std::path::Path;

use drizzle_particles::{viewer_position_from_view, Emitter, EmitterConfig, ParticleStats};
use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};

/// Emitters making up a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// One entry per emitter, updated in this order.
    #[serde(rename = "emitter")]
    pub emitters: Vec<EmitterConfig>,
}

impl Default for SceneConfig {
    /// The smoke plume and the rain sheet.
    fn default() -> Self {
        Self {
            emitters: vec![EmitterConfig::smoke(), EmitterConfig::rain()],
        }
    }
}

impl SceneConfig {
    /// Parses and validates a scene description.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Parse`] for malformed TOML, or any
    /// [`validate`](Self::validate) error.
    pub fn from_toml_str(text: &str) -> SceneResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a scene file.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!("Loading scene from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Checks every emitter and that names are unique.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> SceneResult<()> {
        if self.emitters.is_empty() {
            return Err(SceneError::Empty);
        }

        let mut names = HashSet::with_capacity(self.emitters.len());
        for emitter in &self.emitters {
            emitter.validate()?;
            if !names.insert(emitter.name.as_str()) {
                return Err(SceneError::DuplicateEmitter(emitter.name.clone()));
            }
        }
        Ok(())
    }

    /// Derives every emitter's seed from `base`, keeping the streams
    /// distinct.
    #[must_use]
    pub fn with_seed(mut self, base: u64) -> Self {
        for (offset, emitter) in (0u64..).zip(self.emitters.iter_mut()) {
            emitter.seed = base.wrapping_add(offset);
        }
        self
    }
}

/// Running emitters of a scene.
#[derive(Debug)]
pub struct Scene {
    emitters: Vec<Emitter>,
    frame: u64,
}

impl Scene {
    /// Builds every emitter of `config`.
    ///
    /// # Errors
    ///
    /// Returns the validation error of the scene or of any emitter.
    pub fn new(config: &SceneConfig) -> SceneResult<Self> {
        config.validate()?;

        let emitters = config
            .emitters
            .iter()
            .map(Emitter::new)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!("Scene ready with {} emitters", emitters.len());

        Ok(Self { emitters, frame: 0 })
    }

    /// Runs one frame of every emitter against the same viewer.
    pub fn update(&mut self, dt: f32, viewer: Vec3) {
        self.frame += 1;
        for emitter in &mut self.emitters {
            emitter.update(dt, viewer);
        }
    }

    /// Runs one frame with the viewer taken from a view matrix.
    pub fn update_with_view(&mut self, dt: f32, view: &Mat4) {
        self.update(dt, viewer_position_from_view(view));
    }

    /// Emitters in update order.
    #[inline]
    #[must_use]
    pub fn emitters(&self) -> &[Emitter] {
        &self.emitters
    }

    /// Looks up an emitter by name.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UnknownEmitter`] if no emitter has that name.
    pub fn emitter(&self, name: &str) -> SceneResult<&Emitter> {
        self.emitters
            .iter()
            .find(|emitter| emitter.name() == name)
            .ok_or_else(|| SceneError::UnknownEmitter(name.to_owned()))
    }

    /// Mutable lookup by name.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UnknownEmitter`] if no emitter has that name.
    pub fn emitter_mut(&mut self, name: &str) -> SceneResult<&mut Emitter> {
        self.emitters
            .iter_mut()
            .find(|emitter| emitter.name() == name)
            .ok_or_else(|| SceneError::UnknownEmitter(name.to_owned()))
    }

    /// Live particles across all emitters.
    #[must_use]
    pub fn total_live(&self) -> usize {
        self.emitters.iter().map(Emitter::live_count).sum()
    }

    /// Last update's counters, per emitter.
    pub fn stats(&self) -> impl Iterator<Item = (&str, &ParticleStats)> {
        self.emitters
            .iter()
            .map(|emitter| (emitter.name(), emitter.stats()))
    }

    /// Frames updated so far.
    #[inline]
    #[must_use]
    pub const fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_default() -> SceneConfig {
        let mut config = SceneConfig::default();
        for emitter in &mut config.emitters {
            emitter.capacity = 1_000;
        }
        config
    }

    #[test]
    fn test_default_scene_is_smoke_and_rain() {
        let config = SceneConfig::default();
        assert!(config.validate().is_ok());
        let names: Vec<_> = config.emitters.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["smoke", "rain"]);
    }

    #[test]
    fn test_empty_scene_rejected() {
        let config = SceneConfig { emitters: vec![] };
        assert!(matches!(config.validate(), Err(SceneError::Empty)));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let config = SceneConfig {
            emitters: vec![EmitterConfig::smoke(), EmitterConfig::smoke()],
        };
        assert!(matches!(
            config.validate(),
            Err(SceneError::DuplicateEmitter(name)) if name == "smoke"
        ));
    }

    #[test]
    fn test_seed_derivation() {
        let config = SceneConfig::default().with_seed(100);
        assert_eq!(config.emitters[0].seed, 100);
        assert_eq!(config.emitters[1].seed, 101);
    }

    #[test]
    fn test_update_advances_every_emitter() {
        let mut scene = Scene::new(&small_default()).unwrap();
        scene.update(1.0 / 60.0, Vec3::new(0.0, 2.0, 5.0));

        assert_eq!(scene.frame(), 1);
        assert!(scene.emitter("smoke").unwrap().live_count() > 0);
        assert!(scene.emitter("rain").unwrap().live_count() > 0);
        assert_eq!(
            scene.total_live(),
            scene.emitters().iter().map(Emitter::live_count).sum::<usize>()
        );
        assert!(scene.stats().all(|(_, stats)| stats.frame == 1));
    }

    #[test]
    fn test_unknown_emitter() {
        let mut scene = Scene::new(&small_default()).unwrap();
        assert!(matches!(
            scene.emitter("snow"),
            Err(SceneError::UnknownEmitter(_))
        ));
        assert!(scene.emitter_mut("rain").is_ok());
    }
}
