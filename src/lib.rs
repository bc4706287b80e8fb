//! Sector geometry, hit testing and draw-list generation for radial menus.
//!
//! A radial menu partitions an annular ring into one sector per button, with
//! a configurable gap between neighbours and a rotation offset for the whole
//! ring. This crate owns the geometry: [`geometry::Layout`] turns a
//! [`MenuConfig`] into per-sector arc spans and label anchors,
//! [`geometry::locate`] inverts a center-relative pointer position back into
//! a sector index (handling the sector that straddles angle zero), and
//! [`display_list`] resolves the configured styles into plain drawing
//! instructions. Canvas creation, event wiring and window placement are up
//! to the embedding application.
//!
//! ```
//! use rondel::{ActionId, ButtonConfig, Menu, MenuOptions};
//!
//! let mut options = MenuOptions::default();
//! options.buttons = (0..4)
//!     .map(|i| ButtonConfig {
//!         label: i.to_string(),
//!         action: ActionId::new(format!("action-{i}")),
//!         style: Default::default(),
//!     })
//!     .collect();
//!
//! let mut menu = Menu::new(options)?;
//! let commands = rondel::display_list(&menu);
//! assert!(!commands.is_empty());
//!
//! menu.update_cursor(75.0, 1.0);
//! assert_eq!(menu.hovered(), Some(0));
//! # Ok::<(), rondel::LayoutError>(())
//! ```

pub mod config;
pub mod display;
pub mod geometry;
pub mod menu;
pub mod style;

pub use crate::config::{ActionId, ButtonConfig, ConfigError, MenuOptions};
pub use display::{DrawCommand, Surface, display_list};
pub use geometry::{Layout, LayoutError, MenuConfig, SectorSpan, locate};
pub use menu::{CursorAction, Menu};
pub use style::{ButtonStyle, Color, Gradient, GradientKind, MenuStyle, Paint, Shadow, StyleError};
