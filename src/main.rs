#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod config;
mod scenario;
mod session;
mod theme;

use app::AlarmDrillApp;
use eframe::egui;

/// 설정을 읽고 egui 애플리케이션을 실행하는 진입점입니다.
fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let config = config::load_or_default(&config::config_path());
    tracing::info!(
        session_secs = config.session_secs,
        tick_interval = ?config.tick_interval(),
        "Alarm Panel Drill 시작"
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_app_id("Alarm Panel Drill")
            .with_inner_size([config.window_width, config.window_height]),
        ..Default::default()
    };

    eframe::run_native(
        "Nuclear Control Room Simulation",
        native_options,
        Box::new(move |cc| Box::new(AlarmDrillApp::new(cc, &config))),
    )
}
