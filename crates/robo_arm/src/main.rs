//! Robotic arm viewer.
//!
//! Keys: arrows orbit the camera, `+`/`-` (or PageUp/PageDown) zoom,
//! `q/a w/s e/d r/f` move base, shoulder, elbow and wrist, `t/g` open and
//! close the claw, `0` resets the arm, Home resets the camera, Escape quits.
//! Textures are read from `images/` under the working directory.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use robo_app::{App, AppConfig, AppContext, RoboApp};
use robo_core::{DrawList, SceneEvent, SceneState, TextureSlot};

const ASSET_DIR: &str = "images";
const FLOOR_TEXTURE: &str = "floor.png";
const ARM_TEXTURE: &str = "metal.png";

struct RoboArm {
    scene: SceneState,
    assets: PathBuf,
}

impl RoboArm {
    fn new(config: &AppConfig, assets: impl Into<PathBuf>) -> Self {
        Self {
            scene: SceneState::new(config.width, config.height),
            assets: assets.into(),
        }
    }

    fn textures(&self) -> [(TextureSlot, PathBuf); 2] {
        texture_paths(&self.assets)
    }
}

fn texture_paths(assets: &Path) -> [(TextureSlot, PathBuf); 2] {
    [
        (TextureSlot::Floor, assets.join(FLOOR_TEXTURE)),
        (TextureSlot::Arm, assets.join(ARM_TEXTURE)),
    ]
}

impl RoboApp for RoboArm {
    fn setup(&mut self, ctx: &mut AppContext) -> anyhow::Result<()> {
        let renderer = ctx.renderer().context("renderer is not initialised")?;
        for (slot, path) in self.textures() {
            renderer
                .load_texture(slot, &path)
                .with_context(|| format!("loading {slot:?} texture"))?;
        }
        log::info!("textures loaded from {}", self.assets.display());
        Ok(())
    }

    fn handle_event(&mut self, event: &SceneEvent, _ctx: &mut AppContext) -> bool {
        self.scene.handle(event)
    }

    fn draw(&mut self, _ctx: &mut AppContext) -> DrawList {
        self.scene.compose()
    }
}

fn main() -> anyhow::Result<()> {
    let config = AppConfig::default();
    let viewer = RoboArm::new(&config, ASSET_DIR);
    App::new(viewer).with_config(config).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn textures_resolve_under_asset_dir() {
        let paths = texture_paths(Path::new("images"));
        assert_eq!(paths[0], (TextureSlot::Floor, PathBuf::from("images/floor.png")));
        assert_eq!(paths[1], (TextureSlot::Arm, PathBuf::from("images/metal.png")));
    }

    #[test]
    fn scene_starts_at_window_size() {
        let viewer = RoboArm::new(&AppConfig::default(), ASSET_DIR);
        assert_eq!(viewer.scene.viewport(), robo_core::Viewport::full(800, 600));
    }
}
