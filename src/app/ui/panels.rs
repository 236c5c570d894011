use super::*;

/// 남은 시간 표시를 경고색으로 바꾸는 기준(초).
const LOW_TIME_SECS: u32 = 10;

impl AlarmDrillApp {
    /// 진행 중인 세션 카드를 그린다.
    pub(super) fn render_session_panel(
        &self,
        ui: &mut egui::Ui,
        session: &SessionView,
    ) -> Option<UiAction> {
        let palette = *self.theme.palette();
        let mut action = None;
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(&session.title)
                    .size(24.0)
                    .color(palette.fg_text_primary)
                    .strong(),
            );
            ui.add_space(6.0);
            let time_color = if session.time_left_secs <= LOW_TIME_SECS {
                palette.accent_error
            } else {
                palette.fg_text_secondary
            };
            ui.label(
                RichText::new(&session.time_label)
                    .size(17.0)
                    .color(time_color),
            );
        });
        ui.add_space(8.0);
        ui.add(egui::ProgressBar::new(session.progress).fill(palette.accent_primary));
        ui.add_space(14.0);

        section_label(ui, &self.theme, "Alarms");
        ui.add_space(8.0);
        if let Some(alarm) = self.render_alarm_grid(ui, session) {
            action = Some(UiAction::Acknowledge(alarm));
        }

        if let Some(hint) = session.decision_aid {
            ui.add_space(14.0);
            egui::Frame::none()
                .fill(palette.accent_primary)
                .rounding(egui::Rounding::same(self.theme.decorations().card_rounding))
                .inner_margin(egui::Margin::symmetric(12.0, 10.0))
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(hint).color(palette.fg_text_primary));
                    });
                });
        }

        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            let confirm = PrimaryButton::new(&self.theme, CONFIRM_LABEL)
                .icon("🛡")
                .fill(status::confirm_fill(session.phase, &palette));
            if ui.add_enabled(session.confirm_enabled, confirm).clicked() {
                action = Some(UiAction::Confirm);
            }
            if let Some(outcome) = session.outcome {
                let (icon, color) = status::outcome_indicator(outcome, &palette);
                ui.add_space(8.0);
                ui.label(
                    RichText::new(format!("{icon} {}", outcome.message()))
                        .size(16.0)
                        .color(color)
                        .strong(),
                );
            }
        });
        action
    }

    /// 배치 방식에 맞춰 알람 카드를 그린다. 클릭된 알람 이름을 반환한다.
    fn render_alarm_grid(&self, ui: &mut egui::Ui, session: &SessionView) -> Option<String> {
        let decorations = *self.theme.decorations();
        let columns = session.layout.columns();
        let gap = decorations.grid_gap;
        let card_width = (ui.available_width() - gap * (columns as f32 - 1.0)) / columns as f32;
        let time = ui.ctx().input(|i| i.time);
        let grid_id = match session.layout {
            AlarmLayout::Scattered => "alarm_grid_scattered",
            AlarmLayout::Organized => "alarm_grid_organized",
        };
        let mut clicked = None;
        egui::Grid::new(grid_id)
            .num_columns(columns)
            .spacing([gap, gap])
            .show(ui, |ui| {
                for (index, alarm) in session.alarms.iter().enumerate() {
                    let fill = self
                        .theme
                        .alarm_fill(alarm.acknowledged, session.emphasis, time);
                    let card = AlarmCard::new(&self.theme, alarm.caption(), fill).width(card_width);
                    if ui.add(card).clicked() {
                        clicked = Some(alarm.label.clone());
                    }
                    if (index + 1) % columns == 0 {
                        ui.end_row();
                    }
                }
            });
        clicked
    }
}
