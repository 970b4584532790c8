// Date Multiselect demo application
// Main entry point

use date_multiselect::ui_egui::MultiselectApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Date Multiselect");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Date Multiselect")
            .with_inner_size([420.0, 520.0])
            .with_min_inner_size([320.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Date Multiselect",
        options,
        Box::new(|cc| Ok(Box::new(MultiselectApp::new(cc)))),
    )
}
