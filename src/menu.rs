use crate::config::{ActionId, ButtonConfig, MenuOptions};
use crate::geometry::layout::{Layout, LayoutError};

/// A radial menu instance: the current options, the layout snapshot derived
/// from them, and the hover bookkeeping.
///
/// The layout is recomputed wholesale whenever the options change; hit tests
/// read the snapshot that was current when the pointer event arrived.
pub struct Menu {
    options: MenuOptions,
    layout: Layout,
    hover_index: Option<usize>,
}

impl Menu {
    pub fn new(options: MenuOptions) -> Result<Self, LayoutError> {
        let layout = Layout::compute(&options.menu_config())?;
        Ok(Self {
            options,
            layout,
            hover_index: None,
        })
    }

    /// Replace the options and rebuild the layout snapshot. On error the
    /// previous options and snapshot stay in place.
    pub fn apply(&mut self, options: MenuOptions) -> Result<(), LayoutError> {
        let layout = Layout::compute(&options.menu_config())?;
        self.options = options;
        self.layout = layout;
        self.hover_index = None;
        Ok(())
    }

    /// Swap in a new button list. The sector count tracks the list length, so
    /// this rebuilds the layout.
    pub fn set_buttons(&mut self, buttons: Vec<ButtonConfig>) -> Result<(), LayoutError> {
        let mut options = self.options.clone();
        options.buttons = buttons;
        self.apply(options)
    }

    /// Track the pointer. `dx`/`dy` are relative to the menu center.
    pub fn update_cursor(&mut self, dx: f64, dy: f64) -> CursorAction {
        let new_index = self.layout.locate(dx, dy);
        let changed = self.hover_index != new_index;
        let hover_changed = self.hover_index.is_some() != new_index.is_some();
        self.hover_index = new_index;
        CursorAction::new(changed, hover_changed)
    }

    /// Resolve a click into the action of the sector under the pointer.
    pub fn click(&self, dx: f64, dy: f64) -> Option<&ActionId> {
        let index = self.layout.locate(dx, dy)?;
        self.options.buttons.get(index).map(|b| &b.action)
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hover_index
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn options(&self) -> &MenuOptions {
        &self.options
    }
}

/// What the caller should do after a cursor update: redraw when the hovered
/// sector changed at all, and fire its hover callback when the pointer
/// entered or left the ring.
#[derive(Debug, Clone, Copy, Default)]
pub struct CursorAction {
    pub should_redraw: bool,
    pub hover_changed: bool,
}

impl CursorAction {
    pub fn new(should_redraw: bool, hover_changed: bool) -> Self {
        Self {
            should_redraw,
            hover_changed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ButtonStyle;

    fn button(label: &str) -> ButtonConfig {
        ButtonConfig {
            label: label.to_string(),
            action: ActionId::new(format!("run-{label}")),
            style: ButtonStyle::default(),
        }
    }

    fn menu(buttons: usize) -> Menu {
        let mut options = MenuOptions::default();
        options.buttons = (0..buttons).map(|i| button(&i.to_string())).collect();
        Menu::new(options).unwrap()
    }

    #[test]
    fn empty_button_lists_are_rejected() {
        assert_eq!(
            Menu::new(MenuOptions::default()).err(),
            Some(LayoutError::NoSectors)
        );
    }

    #[test]
    fn cursor_updates_track_hover_transitions() {
        let mut menu = menu(4);

        // enter sector 0
        let action = menu.update_cursor(75.0, 1.0);
        assert!(action.should_redraw);
        assert!(action.hover_changed);
        assert_eq!(menu.hovered(), Some(0));

        // stay in sector 0
        let action = menu.update_cursor(74.0, 2.0);
        assert!(!action.should_redraw);
        assert!(!action.hover_changed);

        // cross into sector 1: redraw, but the menu is still hovered
        let action = menu.update_cursor(-1.0, 75.0);
        assert!(action.should_redraw);
        assert!(!action.hover_changed);
        assert_eq!(menu.hovered(), Some(1));

        // leave into the hole
        let action = menu.update_cursor(0.0, 0.0);
        assert!(action.should_redraw);
        assert!(action.hover_changed);
        assert_eq!(menu.hovered(), None);
    }

    #[test]
    fn clicks_map_to_button_actions() {
        let menu = menu(4);
        assert_eq!(menu.click(75.0, 1.0), Some(&ActionId::new("run-0")));
        assert_eq!(menu.click(-1.0, 75.0), Some(&ActionId::new("run-1")));
        assert_eq!(menu.click(0.0, 0.0), None);
    }

    #[test]
    fn failed_apply_keeps_the_old_snapshot() {
        let mut menu = menu(4);
        let mut bad = menu.options().clone();
        bad.inner_radius = 500.0;

        let err = menu.apply(bad).unwrap_err();
        assert!(matches!(err, LayoutError::InvertedRadii { .. }));
        assert_eq!(menu.layout().spans().len(), 4);
        assert_eq!(menu.options().inner_radius, 50.0);
        assert_eq!(menu.click(75.0, 1.0), Some(&ActionId::new("run-0")));
    }

    #[test]
    fn set_buttons_rebuilds_the_partition() {
        let mut menu = menu(4);
        menu.update_cursor(75.0, 1.0);

        menu.set_buttons((0..6).map(|i| button(&i.to_string())).collect())
            .unwrap();
        assert_eq!(menu.layout().spans().len(), 6);
        // stale hover state does not survive a rebuild
        assert_eq!(menu.hovered(), None);
    }
}
