use eframe::egui::{
    self,
    Color32,
    RichText,
    Visuals,
};

use crate::core::Difficulty;

/// Color palette pair, resolved against the active egui theme so the
/// accent colors follow the dark/light switch in the top bar.
#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo()
    }
}

impl Theme {
    pub fn tokyo() -> Self {
        Theme {
            dark: ThemeDetails::tokyo_night_storm(),
            light: ThemeDetails::tokyo_night_light(),
        }
    }

    pub fn dracula() -> Self {
        Theme { dark: ThemeDetails::dracula(), light: ThemeDetails::dracula_light() }
    }

    fn details(&self, ctx: &egui::Context) -> &ThemeDetails {
        match ctx.theme() {
            egui::Theme::Dark => &self.dark,
            egui::Theme::Light => &self.light,
        }
    }

    pub fn bold(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).orange)
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).purple)
    }

    pub fn red(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).red
    }

    pub fn orange(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).orange
    }

    pub fn yellow(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).yellow
    }

    pub fn green(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).green
    }

    pub fn purple(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).purple
    }

    pub fn cyan(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).cyan
    }

    pub fn difficulty_color(&self, ctx: &egui::Context, difficulty: Difficulty) -> Color32 {
        let details = self.details(ctx);
        match difficulty {
            Difficulty::Easy => details.green,
            Difficulty::Medium => details.orange,
            Difficulty::Difficult => details.red,
        }
    }
}

#[derive(Clone)]
pub struct ThemeDetails {
    background: Color32,
    foreground: Color32,
    selection: Color32,
    red: Color32,
    orange: Color32,
    yellow: Color32,
    green: Color32,
    purple: Color32,
    cyan: Color32,
    background_darker: Color32,
    background_dark: Color32,
    background_light: Color32,
    background_lighter: Color32,
}

impl ThemeDetails {
    fn dracula() -> Self {
        Self {
            background: Color32::from_rgb(0x28, 0x2a, 0x36),
            foreground: Color32::from_rgb(0xf8, 0xf8, 0xf2),
            selection: Color32::from_rgb(0x44, 0x47, 0x5a),
            red: Color32::from_rgb(0xff, 0x55, 0x55),
            orange: Color32::from_rgb(0xff, 0xb8, 0x6c),
            yellow: Color32::from_rgb(0xf1, 0xfa, 0x8c),
            green: Color32::from_rgb(0x50, 0xfa, 0x7b),
            purple: Color32::from_rgb(0xbd, 0x93, 0xf9),
            cyan: Color32::from_rgb(0x8b, 0xe9, 0xfd),
            background_darker: Color32::from_rgb(0x19, 0x1a, 0x21),
            background_dark: Color32::from_rgb(0x21, 0x23, 0x35),
            background_light: Color32::from_rgb(0x34, 0x36, 0x42),
            background_lighter: Color32::from_rgb(0x42, 0x45, 0x50),
        }
    }

    fn dracula_light() -> Self {
        Self {
            background: Color32::from_rgb(0xf8, 0xf8, 0xf2),
            foreground: Color32::from_rgb(0x28, 0x2a, 0x36),
            selection: Color32::from_rgb(0xc8, 0xc8, 0xdc),
            red: Color32::from_rgb(0xc8, 0x50, 0x50),
            orange: Color32::from_rgb(0xdc, 0x96, 0x5a),
            yellow: Color32::from_rgb(0xdc, 0xe6, 0x78),
            green: Color32::from_rgb(0x50, 0xc8, 0x78),
            purple: Color32::from_rgb(0x96, 0x78, 0xdc),
            cyan: Color32::from_rgb(0x50, 0xbe, 0xe6),
            background_darker: Color32::from_rgb(0xeb, 0xeb, 0xe6),
            background_dark: Color32::from_rgb(0xf5, 0xf5, 0xf0),
            background_light: Color32::from_rgb(0xff, 0xff, 0xfa),
            background_lighter: Color32::from_rgb(0xff, 0xff, 0xff),
        }
    }

    fn tokyo_night_storm() -> Self {
        Self {
            background: Color32::from_rgb(0x17, 0x18, 0x26),
            foreground: Color32::from_rgb(0xcc, 0xcc, 0xcc),
            selection: Color32::from_rgb(0x44, 0x47, 0x5a),
            red: Color32::from_rgb(0xff, 0x79, 0x79),
            orange: Color32::from_rgb(0xff, 0xa1, 0x5a),
            yellow: Color32::from_rgb(0xf1, 0xfa, 0x8c),
            green: Color32::from_rgb(0x56, 0xd1, 0x7b),
            purple: Color32::from_rgb(0xbd, 0x93, 0xf9),
            cyan: Color32::from_rgb(0x61, 0xaf, 0xef),
            background_darker: Color32::from_rgb(0x13, 0x14, 0x20),
            background_dark: Color32::from_rgb(0x1b, 0x1d, 0x2d),
            background_light: Color32::from_rgb(0x2a, 0x2c, 0x42),
            background_lighter: Color32::from_rgb(0x38, 0x3a, 0x4e),
        }
    }

    fn tokyo_night_light() -> Self {
        Self {
            background: Color32::from_rgb(0xf0, 0xf0, 0xfa),
            foreground: Color32::from_rgb(0x28, 0x28, 0x28),
            selection: Color32::from_rgb(0xc8, 0xc8, 0xe6),
            red: Color32::from_rgb(0xc8, 0x50, 0x50),
            orange: Color32::from_rgb(0xdc, 0x8c, 0x3c),
            yellow: Color32::from_rgb(0xdc, 0xe6, 0x64),
            green: Color32::from_rgb(0x50, 0xb4, 0x64),
            purple: Color32::from_rgb(0x96, 0x78, 0xc8),
            cyan: Color32::from_rgb(0x50, 0xa0, 0xc8),
            background_darker: Color32::from_rgb(0xdc, 0xdc, 0xf0),
            background_dark: Color32::from_rgb(0xe6, 0xe6, 0xf5),
            background_light: Color32::from_rgb(0xf5, 0xf5, 0xff),
            background_lighter: Color32::from_rgb(0xff, 0xff, 0xff),
        }
    }
}

/// Registers both palette variants so egui's theme preference switch
/// picks the matching one.
pub fn set_theme(ctx: &egui::Context, theme: Theme) {
    set_theme_variant(ctx, &theme.dark, egui::Theme::Dark);
    set_theme_variant(ctx, &theme.light, egui::Theme::Light);

    ctx.all_styles_mut(|style| {
        style.interaction.tooltip_delay = 0.0;
        style.interaction.show_tooltips_only_when_still = false;
    });
}

fn set_theme_variant(ctx: &egui::Context, details: &ThemeDetails, variant: egui::Theme) {
    let mut visuals = match variant {
        egui::Theme::Dark => Visuals::dark(),
        egui::Theme::Light => Visuals::light(),
    };

    for (widget, bg_fill) in [
        (&mut visuals.widgets.noninteractive, details.background),
        (&mut visuals.widgets.inactive, details.background_light),
        (&mut visuals.widgets.hovered, details.selection),
        (&mut visuals.widgets.active, details.selection),
        (&mut visuals.widgets.open, details.background_dark),
    ] {
        widget.bg_fill = bg_fill;
        widget.weak_bg_fill = details.background_lighter;
        widget.bg_stroke.color = details.background_dark;
        widget.fg_stroke.color = details.foreground;
    }
    visuals.widgets.hovered.bg_stroke.color = details.cyan;
    visuals.widgets.active.bg_stroke.color = details.cyan;
    visuals.widgets.active.weak_bg_fill = details.background_light;
    visuals.widgets.open.bg_stroke.color = details.purple;

    visuals.selection.bg_fill = details.selection;
    visuals.selection.stroke.color = details.foreground;
    visuals.hyperlink_color = details.cyan;
    visuals.faint_bg_color = match variant {
        egui::Theme::Dark => details.background_darker,
        egui::Theme::Light => details.background_light,
    };
    visuals.extreme_bg_color = details.background_darker;
    visuals.code_bg_color = details.background_dark;
    visuals.error_fg_color = details.red;
    visuals.warn_fg_color = details.orange;
    visuals.window_fill = details.background;
    visuals.window_stroke.color = details.background_light;
    visuals.window_shadow.color = details.background_darker;
    visuals.popup_shadow.color = details.background_dark;
    visuals.panel_fill = details.background_dark;
    visuals.collapsing_header_frame = true;

    ctx.set_visuals_of(variant, visuals);
}
