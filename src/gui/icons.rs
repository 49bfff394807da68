use std::{
    collections::HashMap,
    path::{
        Path,
        PathBuf,
    },
};

use eframe::egui;
use image::{
    imageops,
    Rgba,
    RgbaImage,
};

use crate::core::{
    catalog::Category,
    collection::TileState,
    TrackerError,
};

pub const ICON_ROOT_DIR: &str = "Icons";
pub const TILE_WIDTH: u32 = 60;
pub const TILE_HEIGHT: u32 = 85;

const STICKER_DIR: &str = "Stickers";

/// Loads icon art off disk, scales it into the fixed tile size,
/// composites the deck's sticker badge on top, and keeps the uploaded
/// textures around for the lifetime of the app. A missing or broken
/// asset yields `None`, which the grid renders as a text placeholder.
pub struct IconStore {
    root: PathBuf,
    cache: HashMap<String, Option<egui::TextureHandle>>,
}

impl IconStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root, cache: HashMap::new() }
    }

    pub fn default_root() -> Self {
        Self::new(PathBuf::from(ICON_ROOT_DIR))
    }

    pub fn tile(
        &mut self,
        ctx: &egui::Context,
        category: Category,
        tile: &TileState,
    ) -> Option<egui::TextureHandle> {
        let key = format!(
            "{}/{}+{}",
            category.icon_dir(),
            tile.icon_file,
            tile.sticker_file.as_deref().unwrap_or("")
        );
        if let Some(cached) = self.cache.get(&key) {
            return cached.clone();
        }

        let texture = match self.compose_tile(category, tile) {
            Ok(pixels) => {
                Some(ctx.load_texture(key.clone(), pixels, egui::TextureOptions::NEAREST))
            }
            Err(err) => {
                eprintln!("Failed to load icon for {}: {err}", tile.name);
                None
            }
        };
        self.cache.insert(key, texture.clone());
        texture
    }

    /// Plain stake art for the picker. Stakes with missing art are
    /// simply absent, the picker falls back to a text button.
    pub fn stake_icon(&mut self, ctx: &egui::Context, stake: &str) -> Option<egui::TextureHandle> {
        let key = format!("{}/{stake}.png", Category::Stakes.icon_dir());
        if let Some(cached) = self.cache.get(&key) {
            return cached.clone();
        }

        let path = self.root.join(Category::Stakes.icon_dir()).join(format!("{stake}.png"));
        let texture = match load_scaled(&path) {
            Ok(pixels) => Some(ctx.load_texture(
                key.clone(),
                to_color_image(&pixels),
                egui::TextureOptions::NEAREST,
            )),
            Err(_) => None,
        };
        self.cache.insert(key, texture.clone());
        texture
    }

    fn compose_tile(
        &self,
        category: Category,
        tile: &TileState,
    ) -> Result<egui::ColorImage, TrackerError> {
        let dir = self.root.join(category.icon_dir());
        let mut path = dir.join(&tile.icon_file);
        if !path.exists() {
            path = dir.join(tile.fallback_file);
        }
        if !path.exists() {
            return Err(TrackerError::MissingAsset(path.display().to_string()));
        }

        let mut base = load_scaled(&path)?;

        if let Some(sticker_file) = &tile.sticker_file {
            let sticker_path = self.root.join(STICKER_DIR).join(sticker_file);
            if sticker_path.exists() {
                let sticker = load_scaled(&sticker_path)?;
                imageops::overlay(&mut base, &sticker, 0, 0);
            }
        }

        Ok(to_color_image(&base))
    }
}

/// Decodes and shrinks an icon to fit the tile, letterboxed onto a
/// transparent canvas so every texture ends up the same size.
fn load_scaled(path: &Path) -> Result<RgbaImage, TrackerError> {
    let icon = image::open(path)?.thumbnail(TILE_WIDTH, TILE_HEIGHT).into_rgba8();

    let mut canvas = RgbaImage::from_pixel(TILE_WIDTH, TILE_HEIGHT, Rgba([0, 0, 0, 0]));
    let x = TILE_WIDTH.saturating_sub(icon.width()) / 2;
    let y = TILE_HEIGHT.saturating_sub(icon.height()) / 2;
    imageops::overlay(&mut canvas, &icon, x as i64, y as i64);
    Ok(canvas)
}

fn to_color_image(pixels: &RgbaImage) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied(
        [pixels.width() as usize, pixels.height() as usize],
        pixels.as_raw(),
    )
}
