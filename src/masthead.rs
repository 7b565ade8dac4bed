use crate::config::Config;
use ab_glyph::{FontVec, PxScale};
use anyhow::{bail, Context, Result};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use log::warn;
use rand::seq::{IndexedRandom, SliceRandom};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 200;

const BACKGROUND: Rgb<u8> = Rgb([245, 250, 240]);
const BORDER: Rgb<u8> = Rgb([45, 90, 45]);
const TITLE_COLOR: Rgb<u8> = Rgb([45, 75, 45]);
const SUBTITLE_COLOR: Rgb<u8> = Rgb([90, 120, 90]);

const TITLE_SIZE: f32 = 72.0;
const SUBTITLE_SIZE: f32 = 36.0;

// Season pools plus weather extensions, one table so either kind of key
// resolves the same way.
const NAME_POOLS: &[(&str, &[&str])] = &[
    (
        "spring",
        &["The First Bloom", "Sprout Notes", "Emergence", "Budding", "The Green Wave"],
    ),
    (
        "summer",
        &["High Summer", "The Heat Letter", "Midseason", "Sunlit Rows", "The Long Day"],
    ),
    (
        "fall",
        &["The Frost Line", "Notes from the Mud", "Harvest Letter", "The Last Bloom", "Falling"],
    ),
    (
        "winter",
        &["The Dormant", "Winter Plot", "Frost & Folly", "The Cold Frame", "Snow Days"],
    ),
    ("sunny", &["Sun Days", "Bright Plot", "The Sunny Side"]),
    ("rainy", &["Rain Notes", "The Wet Garden", "Droplets"]),
    ("cloudy", &["Overcast", "The Grey Row", "Muted"]),
    ("snowy", &["Snow Plot", "The White Garden", "Frost Line"]),
];

#[derive(Debug, Serialize)]
pub struct MastheadResult {
    pub filename: String,
    pub masthead_name: String,
    pub font_used: String,
    pub path: PathBuf,
    pub url: String,
}

fn name_pool(key: &str) -> Option<&'static [&'static str]> {
    NAME_POOLS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, pool)| *pool)
}

/// Random masthead name from the season pool (unknown seasons fall back to
/// spring), extended by the weather pool when one exists for the bucket.
fn masthead_name(season: &str, weather: &str) -> String {
    let mut rng = rand::rng();
    let base = name_pool(season).unwrap_or_else(|| name_pool("spring").unwrap());
    let mut names: Vec<&str> = base.to_vec();
    if let Some(extra) = name_pool(weather) {
        names.extend_from_slice(extra);
    }
    names.choose(&mut rng).unwrap().to_string()
}

fn collect_font_files(dir: &Path) -> Vec<PathBuf> {
    let mut fonts = Vec::new();
    let Ok(entries) = fs::read_dir(dir) else {
        return fonts;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            fonts.extend(collect_font_files(&path));
        } else if matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("ttf") | Some("otf")
        ) {
            fonts.push(path);
        }
    }
    fonts
}

// A file that fails to parse is skipped with a warning; candidates are tried
// in random order until one loads.
fn load_font(candidates: &mut [PathBuf]) -> Result<(FontVec, PathBuf)> {
    let mut rng = rand::rng();
    candidates.shuffle(&mut rng);
    for path in candidates.iter() {
        match fs::read(path) {
            Ok(bytes) => match FontVec::try_from_vec(bytes) {
                Ok(font) => return Ok((font, path.clone())),
                Err(err) => warn!("Failed to parse font {}: {}", path.display(), err),
            },
            Err(err) => warn!("Failed to read font {}: {}", path.display(), err),
        }
    }
    bail!("No usable fonts among {} candidate(s)", candidates.len())
}

/// Stable output name for a given input key. Identical inputs hash to the
/// same file; this is a cache key, not a uniqueness guarantee.
pub fn masthead_filename(station: &str, author: &str, season: &str, weather: &str) -> String {
    let key = format!("{}-{}-{}-{}", station, author, season, weather);
    let digest = Sha256::digest(key.as_bytes());
    format!("masthead_{}.png", &hex::encode(digest)[..8])
}

pub fn generate_masthead(
    config: &Config,
    station: &str,
    author: &str,
    season: &str,
    weather: &str,
) -> Result<MastheadResult> {
    let mut fonts = collect_font_files(&config.fonts_dir);
    if fonts.is_empty() {
        bail!("No fonts found in {}", config.fonts_dir.display());
    }
    let (font, font_path) = load_font(&mut fonts)?;
    let name = masthead_name(season, weather);

    let mut img = RgbImage::from_pixel(WIDTH, HEIGHT, BACKGROUND);
    for inset in 0..3u32 {
        let rect =
            Rect::at(inset as i32, inset as i32).of_size(WIDTH - 2 * inset, HEIGHT - 2 * inset);
        draw_hollow_rect_mut(&mut img, rect, BORDER);
    }

    let title_scale = PxScale::from(TITLE_SIZE);
    let subtitle_scale = PxScale::from(SUBTITLE_SIZE);

    let (title_w, title_h) = text_size(title_scale, &font, &name);
    let title_x = (WIDTH as i32 - title_w as i32) / 2;
    let title_y = (HEIGHT as i32 - title_h as i32) / 2 - 20;
    draw_text_mut(&mut img, TITLE_COLOR, title_x, title_y, title_scale, &font, &name);

    let subtitle = format!("{} • {}", station.to_uppercase(), author);
    let (subtitle_w, _) = text_size(subtitle_scale, &font, &subtitle);
    let subtitle_x = (WIDTH as i32 - subtitle_w as i32) / 2;
    let subtitle_y = title_y + title_h as i32 + 10;
    draw_text_mut(&mut img, SUBTITLE_COLOR, subtitle_x, subtitle_y, subtitle_scale, &font, &subtitle);

    let filename = masthead_filename(station, author, season, weather);
    fs::create_dir_all(&config.mastheads_dir)
        .with_context(|| format!("Failed to create {}", config.mastheads_dir.display()))?;
    let path = config.mastheads_dir.join(&filename);
    img.save(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    let font_used = font_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(MastheadResult {
        url: format!("{}/{}", config.url_base, filename),
        filename,
        masthead_name: name,
        font_used,
        path,
    })
}
