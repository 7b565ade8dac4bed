use std::env;
use std::path::PathBuf;

const DEFAULT_URL_BASE: &str = "https://glyphmatic.us/mastheads";

/// Process-wide paths, resolved once at startup. Defaults live under the
/// user's home directory; each entry can be overridden by a PLOTLINES_*
/// environment variable.
#[derive(Debug, Clone)]
pub struct Config {
    pub authors_file: PathBuf,
    pub fonts_dir: PathBuf,
    pub mastheads_dir: PathBuf,
    pub url_base: String,
}

impl Config {
    pub fn from_env() -> Self {
        let home = env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        let base = home.join("Documents").join("theplotline");

        Self {
            authors_file: env_path("PLOTLINES_AUTHORS_FILE", PathBuf::from("assets/authors.json")),
            fonts_dir: env_path("PLOTLINES_FONTS_DIR", base.join("fonts")),
            mastheads_dir: env_path("PLOTLINES_MASTHEADS_DIR", base.join("mastheads")),
            url_base: env::var("PLOTLINES_URL_BASE")
                .unwrap_or_else(|_| DEFAULT_URL_BASE.to_string()),
        }
    }
}

fn env_path(key: &str, default: PathBuf) -> PathBuf {
    env::var_os(key).map(PathBuf::from).unwrap_or(default)
}
