use crate::config::MenuOptions;
use crate::menu::Menu;
use crate::style::{Paint, Shadow};
use std::iter::zip;

/// The canvas the menu is drawn into: big enough for the ring plus the blur
/// and offset of the drop shadow. Draw commands are center-relative; the
/// renderer translates them by `center_x`/`center_y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
}

impl Surface {
    pub fn for_menu(options: &MenuOptions) -> Self {
        let width =
            options.outer_radius * 2.0 + options.shadow.blur * 2.0 + options.shadow.offset_x.abs() * 2.0;
        let height =
            options.outer_radius * 2.0 + options.shadow.blur * 2.0 + options.shadow.offset_y.abs() * 2.0;
        Self {
            width,
            height,
            center_x: width / 2.0,
            center_y: height / 2.0,
        }
    }
}

/// One drawing instruction for the rendering collaborator. Angles are in
/// `[0, 2π)`; a span whose end is below its start crosses angle zero and is
/// drawn through it.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Drop shadow of the whole annulus, emitted once when there are no gaps
    /// so the shadow has no seams.
    RingShadow {
        inner_radius: f64,
        outer_radius: f64,
        shadow: Shadow,
    },
    /// One sector: an outer arc, a (narrower-gapped) inner arc and the two
    /// closing edges.
    AnnularSector {
        inner_radius: f64,
        outer_radius: f64,
        outer_start: f64,
        outer_end: f64,
        inner_start: f64,
        inner_end: f64,
        fill: Paint,
        stroke: Paint,
        shadow: Option<Shadow>,
    },
    /// A button label, anchored so the renderer draws the text as-is.
    Label {
        text: String,
        x: f64,
        y: f64,
        font_family: String,
        font_size: f64,
        fill: Paint,
        stroke: Paint,
        shadow: Shadow,
    },
}

/// Build the ordered draw list for the menu's current state, with every
/// paint resolved through the hover and per-button override rules.
pub fn display_list(menu: &Menu) -> Vec<DrawCommand> {
    let options = menu.options();
    let layout = menu.layout();
    let gapless = options.gap == 0.0;

    let mut commands = Vec::with_capacity(options.buttons.len() * 2 + 1);
    if gapless {
        commands.push(DrawCommand::RingShadow {
            inner_radius: layout.inner_radius(),
            outer_radius: layout.outer_radius(),
            shadow: options.shadow.clone(),
        });
    }

    for (i, (button, span)) in zip(&options.buttons, layout.spans()).enumerate() {
        let resolved = options.style.resolve(&button.style, menu.hovered() == Some(i));
        commands.push(DrawCommand::AnnularSector {
            inner_radius: layout.inner_radius(),
            outer_radius: layout.outer_radius(),
            outer_start: span.outer_start,
            outer_end: span.outer_end,
            inner_start: span.inner_start,
            inner_end: span.inner_end,
            fill: resolved.fill.clone(),
            stroke: resolved.stroke.clone(),
            // with gaps each sector casts its own shadow instead
            shadow: (!gapless).then(|| options.shadow.clone()),
        });
        commands.push(DrawCommand::Label {
            text: button.label.clone(),
            x: span.label_x,
            y: span.label_y,
            font_family: options.font_family.clone(),
            font_size: options.font_size,
            fill: resolved.text_fill.clone(),
            stroke: resolved.text_stroke.clone(),
            shadow: resolved.text_shadow.clone(),
        });
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ActionId, ButtonConfig};
    use crate::style::{ButtonStyle, Color};

    fn options(buttons: usize, gap: f64) -> MenuOptions {
        let mut options = MenuOptions::default();
        options.gap = gap;
        options.buttons = (0..buttons)
            .map(|i| ButtonConfig {
                label: i.to_string(),
                action: ActionId::new(i.to_string()),
                style: ButtonStyle::default(),
            })
            .collect();
        options
    }

    #[test]
    fn surface_leaves_room_for_the_shadow() {
        let surface = Surface::for_menu(&options(4, 0.0));
        // outer 100, blur 10, offsets (3, 3)
        assert_eq!(surface.width, 226.0);
        assert_eq!(surface.height, 226.0);
        assert_eq!(surface.center_x, 113.0);
        assert_eq!(surface.center_y, 113.0);
    }

    #[test]
    fn gapless_menus_share_one_ring_shadow() {
        let menu = Menu::new(options(4, 0.0)).unwrap();
        let commands = display_list(&menu);
        assert_eq!(commands.len(), 9);
        assert!(matches!(commands[0], DrawCommand::RingShadow { .. }));
        for command in &commands[1..] {
            if let DrawCommand::AnnularSector { shadow, .. } = command {
                assert_eq!(shadow, &None);
            }
        }
    }

    #[test]
    fn gapped_menus_shadow_each_sector() {
        let menu = Menu::new(options(4, 0.1)).unwrap();
        let commands = display_list(&menu);
        assert_eq!(commands.len(), 8);
        let sectors: Vec<_> = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::AnnularSector { .. }))
            .collect();
        assert_eq!(sectors.len(), 4);
        for command in sectors {
            if let DrawCommand::AnnularSector { shadow, .. } = command {
                assert!(shadow.is_some());
            }
        }
    }

    #[test]
    fn sectors_and_labels_interleave_in_button_order() {
        let menu = Menu::new(options(3, 0.0)).unwrap();
        let commands = display_list(&menu);
        let spans = menu.layout().spans();
        for (i, pair) in commands[1..].chunks(2).enumerate() {
            match pair {
                [
                    DrawCommand::AnnularSector { outer_start, .. },
                    DrawCommand::Label { text, x, y, .. },
                ] => {
                    assert_eq!(*outer_start, spans[i].outer_start);
                    assert_eq!(text, &i.to_string());
                    assert_eq!(*x, spans[i].label_x);
                    assert_eq!(*y, spans[i].label_y);
                }
                other => panic!("unexpected command pair {other:?}"),
            }
        }
    }

    #[test]
    fn hovered_sector_uses_the_hover_paint() {
        let mut opts = options(4, 0.0);
        let hover = Paint::Solid(Color::rgba(0.0, 0.0, 1.0, 1.0));
        opts.style.hover_background = Some(hover.clone());

        let mut menu = Menu::new(opts).unwrap();
        menu.update_cursor(75.0, 1.0);
        assert_eq!(menu.hovered(), Some(0));

        let commands = display_list(&menu);
        match (&commands[1], &commands[3]) {
            (
                DrawCommand::AnnularSector { fill: hovered, .. },
                DrawCommand::AnnularSector { fill: idle, .. },
            ) => {
                assert_eq!(hovered, &hover);
                assert_eq!(idle, &menu.options().style.background);
            }
            other => panic!("unexpected commands {other:?}"),
        }
    }
}
