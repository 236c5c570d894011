use super::*;

impl AlarmDrillApp {
    /// 시나리오 시작 버튼을 그린다.
    pub(super) fn render_start_controls(
        &self,
        ui: &mut egui::Ui,
        view: &ScreenView,
    ) -> Option<UiAction> {
        let decorations = *self.theme.decorations();
        let palette = *self.theme.palette();
        let mut action = None;
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = decorations.button_gap;
            for choice in &view.choices {
                let button = PrimaryButton::new(&self.theme, choice.label)
                    .icon("▶")
                    .fill(status::start_fill(choice.key, &palette));
                if ui.add(button).clicked() {
                    action = Some(UiAction::Start(choice.key));
                }
            }
        });
        action
    }
}
