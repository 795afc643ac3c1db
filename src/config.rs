//! External configuration loader.
//!
//! Reads `config.toml` from the executable's directory (or CWD).
//! Falls back to sensible defaults if the file is missing or incomplete.
//! Problems are collected in `warnings` and logged once logging is up.

use std::path::{Path, PathBuf};

use crossterm::style::Color;
use serde::Deserialize;

// ── Public Config Struct ──

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub assets_path: PathBuf,
    pub log_dir: PathBuf,
    pub keys: KeyConfig,
    pub palette: Palette,
    pub warnings: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct KeyConfig {
    pub commit: Vec<String>,
    pub quit: Vec<String>,
}

/// Foreground color per display style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub border: Color,
    pub image: Color,
    pub hit: Color,
    pub miss: Color,
    pub masked: Color,
    pub status: Color,
}

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
struct TomlConfig {
    #[serde(default)]
    general: TomlGeneral,
    #[serde(default)]
    keys: TomlKeys,
    #[serde(default)]
    colors: TomlColors,
}

#[derive(Deserialize, Debug)]
struct TomlGeneral {
    #[serde(default = "default_assets")]
    assets: String,
    #[serde(default)]
    log_dir: Option<String>,
}

#[derive(Deserialize, Debug)]
struct TomlKeys {
    #[serde(default = "default_commit")]
    commit: Vec<String>,
    #[serde(default = "default_quit")]
    quit: Vec<String>,
}

#[derive(Deserialize, Debug)]
struct TomlColors {
    #[serde(default = "default_border")]
    border: String,
    #[serde(default = "default_image")]
    image: String,
    #[serde(default = "default_hit")]
    hit: String,
    #[serde(default = "default_miss")]
    miss: String,
    #[serde(default = "default_masked")]
    masked: String,
    #[serde(default = "default_status")]
    status: String,
}

// ── Defaults ──

fn default_assets() -> String { "assets/images.json".into() }
fn default_commit() -> Vec<String> { vec!["Enter".into()] }
fn default_quit() -> Vec<String> { vec!["Esc".into()] }
fn default_border() -> String { "white".into() }
fn default_image() -> String { "white".into() }
fn default_hit() -> String { "green".into() }
fn default_miss() -> String { "red".into() }
fn default_masked() -> String { "white".into() }
fn default_status() -> String { "yellow".into() }

impl Default for TomlGeneral {
    fn default() -> Self {
        TomlGeneral {
            assets: default_assets(),
            log_dir: None,
        }
    }
}

impl Default for TomlKeys {
    fn default() -> Self {
        TomlKeys {
            commit: default_commit(),
            quit: default_quit(),
        }
    }
}

impl Default for TomlColors {
    fn default() -> Self {
        TomlColors {
            border: default_border(),
            image: default_image(),
            hit: default_hit(),
            miss: default_miss(),
            masked: default_masked(),
            status: default_status(),
        }
    }
}

// ── Loading ──

impl GameConfig {
    /// Load config from `config.toml`.
    /// Search order: (1) exe directory, (2) current working directory,
    /// (3) XDG data home, (4) system data directory.
    pub fn load() -> Self {
        let search_dirs = candidate_dirs();
        let mut warnings = Vec::new();
        let toml_cfg = load_toml(&search_dirs, &mut warnings);
        Self::resolve(toml_cfg, &search_dirs, warnings)
    }

    fn resolve(toml_cfg: TomlConfig, search_dirs: &[PathBuf], mut warnings: Vec<String>) -> Self {
        let assets_path = resolve_path(&toml_cfg.general.assets, search_dirs);
        let log_dir = match toml_cfg.general.log_dir {
            Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => default_log_dir(),
        };

        let c = &toml_cfg.colors;
        let mut color = |name: &str, value: &str, fallback: fn() -> String| -> Color {
            parse_color(value).unwrap_or_else(|| {
                warnings.push(format!("unknown color {value:?} for colors.{name}, using default"));
                parse_color(&fallback()).unwrap_or(Color::Reset)
            })
        };
        let palette = Palette {
            border: color("border", &c.border, default_border),
            image: color("image", &c.image, default_image),
            hit: color("hit", &c.hit, default_hit),
            miss: color("miss", &c.miss, default_miss),
            masked: color("masked", &c.masked, default_masked),
            status: color("status", &c.status, default_status),
        };

        GameConfig {
            assets_path,
            log_dir,
            keys: KeyConfig {
                commit: toml_cfg.keys.commit,
                quit: toml_cfg.keys.quit,
            },
            palette,
            warnings,
        }
    }
}

/// Absolute paths are used as-is; relative ones are looked up in the
/// candidate directories, defaulting to relative-to-CWD.
fn resolve_path(path: &str, search_dirs: &[PathBuf]) -> PathBuf {
    let p = PathBuf::from(path);
    if p.is_absolute() {
        return p;
    }
    search_dirs.iter()
        .map(|d| d.join(path))
        .find(|candidate| candidate.exists())
        .unwrap_or(p)
}

/// crossterm color names: `red`, `dark_grey`, `white`, ...
fn parse_color(name: &str) -> Option<Color> {
    Color::try_from(name.trim()).ok()
}

/// Candidate directories to search: exe dir + CWD + data paths (deduplicated).
fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![];

    // 1. Directory of the running executable
    if let Ok(exe) = std::env::current_exe() {
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            dirs.push(parent.to_path_buf());
        }
    }

    // 2. Current working directory
    if let Ok(cwd) = std::env::current_dir() {
        if !dirs.iter().any(|d| d == &cwd) {
            dirs.push(cwd);
        }
    }

    // 3. XDG data home (~/.local/share/hangman)
    if let Ok(home) = std::env::var("HOME") {
        let xdg = PathBuf::from(&home).join(".local/share/hangman");
        if xdg.is_dir() && !dirs.iter().any(|d| d == &xdg) {
            dirs.push(xdg);
        }
    }

    // 4. System data directory (/usr/share/hangman)
    let sys = PathBuf::from("/usr/share/hangman");
    if sys.is_dir() && !dirs.iter().any(|d| d == &sys) {
        dirs.push(sys);
    }

    if dirs.is_empty() {
        dirs.push(PathBuf::from("."));
    }

    dirs
}

/// Platform log directory.
fn default_log_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join("Library/Caches/hangman/logs");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(state) = std::env::var_os("XDG_STATE_HOME") {
            return PathBuf::from(state).join("hangman/logs");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".local/state/hangman/logs");
        }
    }

    std::env::temp_dir().join("hangman").join("logs")
}

/// Search for config.toml in candidate directories.
fn load_toml(search_dirs: &[PathBuf], warnings: &mut Vec<String>) -> TomlConfig {
    for dir in search_dirs {
        let path = dir.join("config.toml");
        if path.exists() {
            return read_toml(&path, warnings);
        }
    }
    TomlConfig::default()
}

fn read_toml(path: &Path, warnings: &mut Vec<String>) -> TomlConfig {
    match std::fs::read_to_string(path) {
        Ok(text) => match toml::from_str::<TomlConfig>(&text) {
            Ok(cfg) => cfg,
            Err(e) => {
                warnings.push(format!("{} parse error, using default settings: {e}", path.display()));
                TomlConfig::default()
            }
        },
        Err(e) => {
            warnings.push(format!("could not read {}: {e}", path.display()));
            TomlConfig::default()
        }
    }
}
