use eframe::egui::{
    self,
    RichText,
};
use egui_flex::{
    item,
    Flex,
};

use crate::gui::{
    app::Page,
    theme::Theme,
};

pub struct HomePage;

impl HomePage {
    /// Landing page, returns a page to navigate to when one of the
    /// entry buttons is clicked.
    pub fn show(
        ui: &mut egui::Ui,
        theme: &Theme,
        word_count: usize,
        sentence_count: usize,
    ) -> Option<Page> {
        let mut navigate = None;

        ui.add_space(16.0);
        ui.label(RichText::new("Kelime").size(30.0).strong().color(theme.purple(ui.ctx())));
        ui.label(
            "An English vocabulary journal with Turkish meanings, organized by the day you \
             learned each word.",
        );
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            if ui.button(RichText::new("My Words").size(14.0)).clicked() {
                navigate = Some(Page::Words);
            }
            if ui.button(RichText::new("Review Sentences").size(14.0)).clicked() {
                navigate = Some(Page::Sentences);
            }
            if ui.button(RichText::new("Generate Practice").size(14.0)).clicked() {
                navigate = Some(Page::Generate);
            }
        });

        ui.add_space(6.0);
        ui.label(
            RichText::new(format!("{} words · {} example sentences", word_count, sentence_count))
                .color(ui.visuals().weak_text_color()),
        );

        ui.add_space(18.0);
        ui.separator();
        ui.add_space(12.0);

        let cards = [
            (
                "Daily Tracking",
                theme.cyan(ui.ctx()),
                "See which words you learned on each day and browse your history on the calendar.",
            ),
            (
                "Word Bank",
                theme.green(ui.ctx()),
                "Every learned word in one place, together with its Turkish meaning and notes.",
            ),
            (
                "Sentence Generator",
                theme.purple(ui.ctx()),
                "Practice sentences and paragraphs built around any word you pick.",
            ),
            (
                "Example Sentences",
                theme.orange(ui.ctx()),
                "Usage examples attached to each word, searchable across the whole collection.",
            ),
        ];

        Flex::horizontal().wrap(true).show(ui, |flex| {
            for (title, color, description) in cards {
                flex.add_ui(item(), |ui| {
                    egui::Frame::new()
                        .fill(ui.visuals().faint_bg_color)
                        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
                        .corner_radius(6.0)
                        .inner_margin(12.0)
                        .show(ui, |ui| {
                            ui.set_width(230.0);
                            ui.label(RichText::new(title).strong().color(color));
                            ui.add_space(4.0);
                            ui.label(RichText::new(description).size(12.5));
                        });
                });
            }
        });

        navigate
    }
}
