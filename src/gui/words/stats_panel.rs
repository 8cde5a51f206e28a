use chrono::NaiveDate;
use eframe::egui::{
    self,
    Color32,
    RichText,
    Ui,
};

use crate::{
    core::{
        models::Word,
        stats::{
            daily_stats,
            monthly_stats,
        },
    },
    gui::theme::Theme,
};

/// Activity summary for the selected day and its month.
pub struct StatsPanel;

impl StatsPanel {
    pub fn show(ui: &mut Ui, theme: &Theme, words: &[Word], selected_date: NaiveDate) {
        let daily = daily_stats(words, selected_date);
        let monthly = monthly_stats(words, selected_date);

        section_frame(ui, |ui| {
            ui.label(theme.bold(ui.ctx(), "Selected Day"));
            ui.weak(selected_date.format("%B %-d, %Y").to_string());
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                big_number(ui, daily.word_count, "Words", theme.green(ui.ctx()));
                ui.add_space(18.0);
                big_number(ui, daily.sentence_count, "Sentences", theme.orange(ui.ctx()));
            });
        });

        ui.add_space(8.0);

        section_frame(ui, |ui| {
            ui.label(theme.bold(ui.ctx(), "This Month"));
            ui.weak(selected_date.format("%B %Y").to_string());
            ui.add_space(6.0);
            egui::Grid::new("monthly_stats_grid")
                .num_columns(2)
                .spacing([24.0, 4.0])
                .show(ui, |ui| {
                    ui.weak("Working days");
                    ui.strong(monthly.working_days.to_string());
                    ui.end_row();

                    ui.weak("Total words");
                    ui.strong(monthly.total_words.to_string());
                    ui.end_row();

                    ui.weak("Total sentences");
                    ui.strong(monthly.total_sentences.to_string());
                    ui.end_row();

                    ui.weak("Avg words / day");
                    ui.strong(format!("{:.1}", monthly.avg_words_per_day));
                    ui.end_row();

                    ui.weak("Avg sentences / day");
                    ui.strong(format!("{:.1}", monthly.avg_sentences_per_day));
                    ui.end_row();
                });

            if monthly.working_days >= 20 {
                ui.add_space(6.0);
                ui.label(
                    RichText::new(format!(
                        "🏆 You studied {} days this month! Great performance!",
                        monthly.working_days
                    ))
                    .color(theme.yellow(ui.ctx())),
                );
            }
        });
    }
}

fn section_frame(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui)) {
    egui::Frame::new()
        .fill(ui.visuals().faint_bg_color)
        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
        .corner_radius(6.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        });
}

fn big_number(ui: &mut Ui, value: usize, label: &str, color: Color32) {
    ui.vertical(|ui| {
        ui.label(RichText::new(value.to_string()).size(24.0).strong().color(color));
        ui.weak(label);
    });
}
