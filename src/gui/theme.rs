use eframe::egui::{
    self,
    RichText,
};
use egui::{
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    Stroke,
    Visuals,
};

/// Table-felt palette, dark and light. The dark variant is the default
/// and matches the game's collection screens; accents follow the
/// in-game button colors (gold save, blue toggle, red remove).
#[derive(Clone)]
pub struct Theme {
    dark: Palette,
    light: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::felt()
    }
}

impl Theme {
    pub fn felt() -> Self {
        Theme { dark: Palette::felt_dark(), light: Palette::felt_light() }
    }

    pub fn heading(&self, content: &str) -> RichText {
        RichText::new(content).color(self.dark.gold).strong()
    }

    /// Gold, used for the save affordance.
    pub fn accent(&self) -> Color32 {
        self.dark.gold
    }

    /// Legible text color on top of [`Self::accent`].
    pub fn on_accent(&self) -> Color32 {
        self.dark.background_dim
    }

    /// Blue, used for the deck/stake mode toggle.
    pub fn highlight(&self) -> Color32 {
        self.dark.blue
    }

    pub fn danger(&self) -> Color32 {
        self.dark.red
    }

    pub fn muted(&self) -> Color32 {
        self.dark.muted
    }
}

#[derive(Clone)]
struct Palette {
    background: Color32,
    background_dim: Color32,
    background_raised: Color32,
    background_bright: Color32,
    outline: Color32,
    foreground: Color32,
    muted: Color32,
    gold: Color32,
    blue: Color32,
    red: Color32,
}

impl Palette {
    fn felt_dark() -> Self {
        Self {
            background: Color32::from_rgb(31, 27, 36),
            background_dim: Color32::from_rgb(24, 21, 28),
            background_raised: Color32::from_rgb(45, 39, 52),
            background_bright: Color32::from_rgb(58, 51, 66),
            outline: Color32::from_rgb(74, 64, 85),
            foreground: Color32::from_rgb(235, 230, 240),
            muted: Color32::from_rgb(150, 140, 160),
            gold: Color32::from_rgb(255, 187, 0),
            blue: Color32::from_rgb(96, 106, 255),
            red: Color32::from_rgb(204, 68, 68),
        }
    }

    fn felt_light() -> Self {
        Self {
            background: Color32::from_rgb(243, 240, 246),
            background_dim: Color32::from_rgb(230, 226, 236),
            background_raised: Color32::from_rgb(252, 250, 254),
            background_bright: Color32::from_rgb(255, 255, 255),
            outline: Color32::from_rgb(196, 188, 208),
            foreground: Color32::from_rgb(40, 35, 48),
            muted: Color32::from_rgb(130, 122, 142),
            gold: Color32::from_rgb(212, 150, 0),
            blue: Color32::from_rgb(68, 68, 220),
            red: Color32::from_rgb(190, 60, 60),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, palette: &Palette, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: WidgetVisuals {
                    bg_fill: palette.background,
                    weak_bg_fill: palette.background_bright,
                    bg_stroke: Stroke {
                        color: palette.background_dim,
                        ..default.widgets.noninteractive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: palette.foreground,
                        ..default.widgets.noninteractive.fg_stroke
                    },
                    ..default.widgets.noninteractive
                },
                inactive: WidgetVisuals {
                    bg_fill: palette.background_raised,
                    weak_bg_fill: palette.background_bright,
                    bg_stroke: Stroke {
                        color: palette.background_dim,
                        ..default.widgets.inactive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: palette.foreground,
                        ..default.widgets.inactive.fg_stroke
                    },
                    ..default.widgets.inactive
                },
                hovered: WidgetVisuals {
                    bg_fill: palette.outline,
                    weak_bg_fill: palette.background_bright,
                    bg_stroke: Stroke { color: palette.gold, ..default.widgets.hovered.bg_stroke },
                    fg_stroke: Stroke {
                        color: palette.foreground,
                        ..default.widgets.hovered.fg_stroke
                    },
                    ..default.widgets.hovered
                },
                active: WidgetVisuals {
                    bg_fill: palette.outline,
                    weak_bg_fill: palette.background_raised,
                    bg_stroke: Stroke { color: palette.gold, ..default.widgets.active.bg_stroke },
                    fg_stroke: Stroke {
                        color: palette.foreground,
                        ..default.widgets.active.fg_stroke
                    },
                    ..default.widgets.active
                },
                open: WidgetVisuals {
                    bg_fill: palette.background_dim,
                    weak_bg_fill: palette.background_bright,
                    bg_stroke: Stroke { color: palette.blue, ..default.widgets.open.bg_stroke },
                    fg_stroke: Stroke { color: palette.foreground, ..default.widgets.open.fg_stroke },
                    ..default.widgets.open
                },
            },
            selection: Selection {
                bg_fill: palette.outline,
                stroke: Stroke { color: palette.foreground, ..default.selection.stroke },
            },
            hyperlink_color: palette.blue,
            faint_bg_color: match is_dark {
                true => palette.background_dim,
                false => palette.background_raised,
            },
            extreme_bg_color: palette.background_dim,
            code_bg_color: palette.background_raised,
            error_fg_color: palette.red,
            warn_fg_color: palette.gold,
            window_shadow: Shadow { color: palette.background_dim, ..default.window_shadow },
            window_fill: palette.background,
            window_stroke: Stroke { color: palette.background_bright, ..default.window_stroke },
            panel_fill: palette.background,
            popup_shadow: Shadow { color: palette.background_dim, ..default.popup_shadow },
            ..default
        },
    );
}
