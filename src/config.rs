use crate::geometry::layout::{LayoutError, MenuConfig};
use crate::style::{ButtonStyle, MenuStyle, Shadow, StyleError};
use derive_more::{AsRef, Deref, Display, From, Into};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque action token attached to a button. The input collaborator maps it
/// to whatever callback the application registered.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct ActionId(String);

impl ActionId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ButtonConfig {
    pub label: String,
    pub action: ActionId,
    #[serde(flatten)]
    pub style: ButtonStyle,
}

/// Everything a menu is built from. Geometry values are radians and pixels;
/// the sector count is the length of `buttons`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MenuOptions {
    pub font_family: String,
    pub font_size: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub rotation: f64,
    pub gap: f64,
    pub shadow: Shadow,
    pub style: MenuStyle,
    pub buttons: Vec<ButtonConfig>,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            font_family: "Sans".to_string(),
            font_size: 14.0,
            inner_radius: 50.0,
            outer_radius: 100.0,
            rotation: 0.0,
            gap: 0.0,
            shadow: Shadow {
                color: crate::style::Color::rgba(0.0, 0.0, 0.0, 0.5).into(),
                blur: 10.0,
                offset_x: 3.0,
                offset_y: 3.0,
            },
            style: MenuStyle::default(),
            buttons: Vec::new(),
        }
    }
}

impl MenuOptions {
    /// The geometry inputs for one layout build.
    pub fn menu_config(&self) -> MenuConfig {
        MenuConfig {
            sector_count: self.buttons.len(),
            inner_radius: self.inner_radius,
            outer_radius: self.outer_radius,
            rotation: self.rotation,
            gap: self.gap,
            font_size: self.font_size,
        }
    }

    /// Check every configured paint. Geometry is validated separately when
    /// the layout is built.
    pub fn validate_style(&self) -> Result<(), StyleError> {
        self.shadow.color.validate()?;
        self.style.validate()?;
        self.buttons.iter().try_for_each(|b| b.style.validate())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Style(#[from] StyleError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "rondel", "rondel").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_options() -> Result<MenuOptions, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("RONDEL"))
        .build()?;

    let options: MenuOptions = s.try_deserialize()?;
    options.validate_style()?;
    Ok(options)
}

/// Load the user's options, falling back to the embedded defaults when the
/// file is missing or broken.
pub fn load_or_default() -> MenuOptions {
    match load_options() {
        Ok(options) => options,
        Err(e) => {
            log::warn!("Falling back to default options: {}", e);
            default_options()
        }
    }
}

fn default_options() -> MenuOptions {
    let parsed = config::Config::builder()
        .add_source(config::File::from_str(
            DEFAULT_CONFIG,
            config::FileFormat::Toml,
        ))
        .build()
        .and_then(config::Config::try_deserialize);
    match parsed {
        Ok(options) => options,
        Err(e) => {
            log::error!("Embedded default config failed to parse: {}", e);
            MenuOptions::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Paint;

    #[test]
    fn action_ids_are_transparent_strings() {
        let action: ActionId = serde_json::from_str("\"open-file\"").unwrap();
        assert_eq!(action, ActionId::new("open-file"));
        assert_eq!(action.to_string(), "open-file");
    }

    #[test]
    fn button_style_overrides_flatten_into_the_button() {
        let button: ButtonConfig = serde_json::from_str(
            r##"{"label": "", "action": "one", "background": "#f00"}"##,
        )
        .unwrap();
        assert_eq!(
            button.style.background,
            Some(Paint::Solid("#f00".parse().unwrap()))
        );
        assert_eq!(button.style.border, None);
    }

    #[test]
    fn partial_options_keep_the_defaults() {
        let options: MenuOptions =
            serde_json::from_str(r#"{"inner_radius": 30.0, "buttons": []}"#).unwrap();
        assert_eq!(options.inner_radius, 30.0);
        assert_eq!(options.outer_radius, 100.0);
        assert_eq!(options.font_size, 14.0);
        assert_eq!(options.font_family, "Sans");
    }

    #[test]
    fn sector_count_tracks_the_button_list() {
        let mut options = MenuOptions::default();
        assert_eq!(options.menu_config().sector_count, 0);
        options.buttons = vec![
            ButtonConfig {
                label: "a".to_string(),
                action: ActionId::new("a"),
                style: ButtonStyle::default(),
            },
            ButtonConfig {
                label: "b".to_string(),
                action: ActionId::new("b"),
                style: ButtonStyle::default(),
            },
        ];
        assert_eq!(options.menu_config().sector_count, 2);
    }

    #[test]
    fn embedded_defaults_parse_and_validate() {
        let options = default_options();
        assert!(!options.buttons.is_empty());
        assert!(options.validate_style().is_ok());
        assert!(
            crate::geometry::Layout::compute(&options.menu_config()).is_ok(),
            "embedded defaults must build a layout"
        );
    }

    #[test]
    fn style_validation_catches_bad_gradients() {
        let mut options = MenuOptions::default();
        options.style.background = Paint::Gradient(crate::style::Gradient {
            kind: crate::style::GradientKind::Radial,
            stops: vec![],
        });
        assert!(matches!(
            options.validate_style(),
            Err(StyleError::EmptyGradient)
        ));
    }
}
