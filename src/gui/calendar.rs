use std::collections::HashSet;

use chrono::{
    Datelike,
    Duration,
    Local,
    NaiveDate,
};
use eframe::egui::{
    self,
    RichText,
    Stroke,
    Vec2,
};

use crate::gui::theme::Theme;

const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Month-grid date picker. Days with learned words carry a dot marker,
/// weeks start on Monday.
pub struct Calendar {
    visible: NaiveDate,
}

impl Calendar {
    pub fn new() -> Self {
        Self { visible: month_start(Local::now().date_naive()) }
    }

    /// Returns the date the user picked this frame, if any.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        theme: &Theme,
        selected: Option<NaiveDate>,
        marked: &HashSet<NaiveDate>,
    ) -> Option<NaiveDate> {
        let mut picked = None;
        let today = Local::now().date_naive();

        ui.heading(theme.heading(ui.ctx(), "Select a Date"));
        ui.label(
            RichText::new("Marked days are days you learned words.")
                .color(ui.visuals().weak_text_color())
                .size(12.0),
        );
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            if ui.button("◀").clicked() {
                self.visible = shift_month(self.visible, -1);
            }
            ui.label(RichText::new(self.visible.format("%B %Y").to_string()).strong());
            if ui.button("▶").clicked() {
                self.visible = shift_month(self.visible, 1);
            }
            if ui.button("Today").clicked() {
                picked = Some(today);
            }
        });
        ui.add_space(4.0);

        let leading = self.visible.weekday().num_days_from_monday() as i64;
        let grid_start = self.visible - Duration::days(leading);

        egui::Grid::new("calendar_grid").spacing(Vec2::new(4.0, 4.0)).show(ui, |ui| {
            for label in DAY_LABELS {
                ui.label(RichText::new(label).small().color(ui.visuals().weak_text_color()));
            }
            ui.end_row();

            for week in 0..6 {
                for day in 0..7 {
                    let date = grid_start + Duration::days(week * 7 + day);
                    if self.day_cell(ui, theme, date, selected, marked, today) {
                        picked = Some(date);
                    }
                }
                ui.end_row();
            }
        });

        // Picking an overflow day (or Today) pulls the view along.
        if let Some(date) = picked {
            self.visible = month_start(date);
        }

        picked
    }

    fn day_cell(
        &self,
        ui: &mut egui::Ui,
        theme: &Theme,
        date: NaiveDate,
        selected: Option<NaiveDate>,
        marked: &HashSet<NaiveDate>,
        today: NaiveDate,
    ) -> bool {
        let in_month =
            date.month() == self.visible.month() && date.year() == self.visible.year();
        let has_words = marked.contains(&date);

        let mut text = RichText::new(date.day().to_string());
        if !in_month {
            text = text.weak();
        }
        if has_words {
            text = text.strong();
        }

        let mut button = egui::Button::new(text).min_size(Vec2::new(34.0, 30.0));
        if selected == Some(date) {
            button = button.fill(ui.visuals().selection.bg_fill);
        }
        if date == today {
            button = button.stroke(Stroke::new(1.5, theme.orange(ui.ctx())));
        }

        let response = ui.add(button);

        if has_words {
            let rect = response.rect;
            let center = egui::Pos2::new(rect.center().x, rect.bottom() - 4.0);
            ui.painter().circle_filled(center, 2.0, theme.green(ui.ctx()));
        }

        response.clicked()
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new()
    }
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}

fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let months = date.year() * 12 + date.month0() as i32 + delta;
    let year = months.div_euclid(12);
    let month0 = months.rem_euclid(12) as u32;
    NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_start() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 17).unwrap();
        assert_eq!(month_start(date), NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(month_start(month_start(date)), month_start(date));
    }

    #[test]
    fn test_shift_month_crosses_year_boundaries() {
        let january = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(shift_month(january, -1), NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
        assert_eq!(shift_month(january, 12), NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert_eq!(shift_month(january, -13), NaiveDate::from_ymd_opt(2023, 12, 1).unwrap());
    }
}
