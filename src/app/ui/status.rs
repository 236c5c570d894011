use super::*;

/// 세션 결과에 대응하는 아이콘과 색상을 반환한다.
pub(super) fn outcome_indicator(outcome: Outcome, palette: &Palette) -> (&'static str, egui::Color32) {
    match outcome {
        Outcome::DecisionRecorded => ("✅", palette.accent_success),
        Outcome::TimeRanOut => ("⏰", palette.accent_error),
    }
}

/// 확정 버튼 배경색. 진행 중이 아니면 회색으로 표시한다.
pub(super) fn confirm_fill(phase: SessionPhase, palette: &Palette) -> egui::Color32 {
    if phase == SessionPhase::InProgress {
        palette.accent_confirm
    } else {
        palette.inactive
    }
}

/// 시나리오 시작 버튼 배경색.
pub(super) fn start_fill(key: ScenarioKey, palette: &Palette) -> egui::Color32 {
    match key {
        ScenarioKey::BadUi => palette.accent_danger,
        ScenarioKey::GoodUi => palette.accent_safe,
    }
}
