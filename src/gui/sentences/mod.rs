mod state;

use eframe::egui::{
    self,
    RichText,
    ScrollArea,
    TextEdit,
    Ui,
};
use egui_flex::{
    item,
    Flex,
};
pub use state::SentenceTableState;

use crate::{
    core::{
        models::{
            Difficulty,
            SentenceSource,
            SentenceWithSource,
        },
        query,
        stats::parse_day_stamp,
    },
    gui::theme::Theme,
};

/// Review page listing every collected sentence, filterable by text,
/// difficulty and month.
pub struct SentencesPage;

impl SentencesPage {
    pub fn show(
        ui: &mut Ui,
        theme: &Theme,
        records: &[SentenceWithSource],
        state: &mut SentenceTableState,
    ) {
        ui.label(theme.heading(ui.ctx(), "Example Sentences"));
        ui.weak("Browse every sentence you have collected, newest first.");
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            let mut search = state.search().to_string();
            if ui
                .add(
                    TextEdit::singleline(&mut search)
                        .hint_text("Search words or sentences...")
                        .desired_width(220.0),
                )
                .changed()
            {
                state.set_search(search);
            }

            let mut difficulty = state.difficulty();
            egui::ComboBox::from_id_salt("difficulty_filter")
                .selected_text(difficulty.map_or("All", |value| value.label()))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut difficulty, None, "All");
                    for value in Difficulty::ALL {
                        ui.selectable_value(&mut difficulty, Some(value), value.label());
                    }
                });
            state.set_difficulty(difficulty);

            let mut month = state.month().map(str::to_string);
            egui::ComboBox::from_id_salt("month_filter")
                .selected_text(month.as_deref().map_or_else(
                    || "All months".to_string(),
                    month_label,
                ))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut month, None, "All months");
                    for value in query::distinct_months(records) {
                        let label = month_label(&value);
                        ui.selectable_value(&mut month, Some(value), label);
                    }
                });
            state.set_month(month);
        });

        state.ensure_indices(records);
        ui.add_space(4.0);
        ui.weak(format!("{} sentences found", state.visible_indices().len()));
        ui.add_space(6.0);

        if state.visible_indices().is_empty() {
            ui.weak("No sentences match your filters.");
            return;
        }

        ScrollArea::vertical()
            .id_salt("sentences_scroll")
            .show(ui, |ui| {
                Flex::horizontal().wrap(true).show(ui, |flex| {
                    for &idx in state.visible_indices() {
                        let Some(record) = records.get(idx) else {
                            continue;
                        };
                        flex.add_ui(item(), |ui| {
                            sentence_card(ui, theme, record);
                        });
                    }
                });
            });
    }
}

fn sentence_card(ui: &mut Ui, theme: &Theme, record: &SentenceWithSource) {
    egui::Frame::new()
        .fill(ui.visuals().faint_bg_color)
        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
        .corner_radius(6.0)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_width(340.0);

            ui.horizontal(|ui| {
                if let Some(word) = &record.word {
                    ui.label(
                        RichText::new(word)
                            .strong()
                            .color(theme.purple(ui.ctx())),
                    );
                    if let Some(word_turkish) = &record.word_turkish {
                        ui.weak(word_turkish);
                    }
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    let (label, color) = match record.source {
                        SentenceSource::Practice => ("Practice", theme.purple(ui.ctx())),
                        SentenceSource::Word => ("Word", theme.cyan(ui.ctx())),
                    };
                    ui.label(RichText::new(label).size(11.0).color(color));
                });
            });

            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(record.difficulty.label())
                        .size(12.0)
                        .color(theme.difficulty_color(ui.ctx(), record.difficulty)),
                );
                if let Some(date) = record.sort_date() {
                    ui.weak(RichText::new(date).size(12.0));
                }
            });

            ui.add_space(4.0);
            ui.label(&record.english);
            ui.weak(RichText::new(&record.turkish).italics());
        });
}

/// "2025-03" -> "March 2025"; unparseable values fall back to the raw stamp.
fn month_label(month: &str) -> String {
    parse_day_stamp(&format!("{month}-01"))
        .map(|date| date.format("%B %Y").to_string())
        .unwrap_or_else(|| month.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_label_formats_year_month() {
        assert_eq!(month_label("2025-03"), "March 2025");
        assert_eq!(month_label("2024-12"), "December 2024");
    }

    #[test]
    fn month_label_passes_through_garbage() {
        assert_eq!(month_label("not-a-month"), "not-a-month");
    }
}
