use dioxus_logger::tracing::info;
use dioxus_logger::tracing::Level;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("starting DEX front-end (desktop)");
    dioxus::launch(ui::App);
}
