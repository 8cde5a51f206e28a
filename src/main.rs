use eframe::egui;
use kelime::gui::KelimeApp;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Kelime")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([820.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native("Kelime", options, Box::new(|cc| Ok(Box::new(KelimeApp::new(cc)))))
}
