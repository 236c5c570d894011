use super::*;
use std::time::Duration;

/// 카운트다운이나 깜빡임이 진행 중일 때 다시 그리는 간격.
const REPAINT_INTERVAL: Duration = Duration::from_millis(100);

impl AlarmDrillApp {
    /// 상단 제목과, 시나리오 선택 전이면 시작 버튼을 그린다.
    fn render_header(&self, ui: &mut egui::Ui, view: &ScreenView) -> Option<UiAction> {
        let palette = *self.theme.palette();
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(view.title)
                    .size(28.0)
                    .color(palette.fg_text_primary)
                    .strong(),
            );
        });
        if view.session.is_some() {
            return None;
        }
        ui.add_space(10.0);
        self.render_start_controls(ui, view)
    }

    /// 시나리오 선택 전 안내 문구를 그린다.
    fn render_idle_hint(&self, ui: &mut egui::Ui) {
        let palette = *self.theme.palette();
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(
                RichText::new("Choose a mode above to begin the drill.")
                    .color(palette.fg_text_secondary)
                    .italics(),
            );
        });
    }
}

impl eframe::App for AlarmDrillApp {
    /// egui 메인 루프에서 호출되어 UI를 갱신한다.
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        self.controller.drain_events();
        self.theme.apply(ctx);
        let view = self.controller.view();
        let palette = *self.theme.palette();
        let decorations = *self.theme.decorations();
        let mut action = None;

        let toolbar_frame = egui::Frame {
            fill: palette.bg_toolbar,
            stroke: egui::Stroke::new(1.0, palette.border_soft),
            inner_margin: decorations.card_inner_margin,
            ..Default::default()
        };
        egui::TopBottomPanel::top("header")
            .frame(toolbar_frame)
            .resizable(false)
            .show(ctx, |ui| {
                if let Some(clicked) = self.render_header(ui, &view) {
                    action = Some(clicked);
                }
            });

        let central_frame = egui::Frame {
            fill: palette.bg_main,
            inner_margin: egui::Margin::symmetric(22.0, 18.0),
            ..Default::default()
        };
        egui::CentralPanel::default()
            .frame(central_frame)
            .show(ctx, |ui| match &view.session {
                Some(session) => {
                    egui::ScrollArea::vertical()
                        .auto_shrink([false; 2])
                        .show(ui, |ui| {
                            egui::Frame::none()
                                .fill(palette.bg_panel)
                                .stroke(egui::Stroke::new(1.0, palette.border_soft))
                                .rounding(egui::Rounding::same(decorations.container_rounding))
                                .inner_margin(decorations.card_inner_margin)
                                .show(ui, |ui| {
                                    if let Some(clicked) = self.render_session_panel(ui, session) {
                                        action = Some(clicked);
                                    }
                                });
                        });
                }
                None => self.render_idle_hint(ui),
            });

        if let Some(action) = action {
            self.apply_action(action);
            ctx.request_repaint();
        }
        let animating = view.session.as_ref().is_some_and(SessionView::is_animating);
        if animating || self.controller.is_counting_down() {
            ctx.request_repaint_after(REPAINT_INTERVAL);
        }
    }
}
