use crate::scenario::AlarmEmphasis;
use eframe::egui::{self, Color32};

/// 화면 전반에서 사용하는 색상 팔레트.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_main: Color32,
    pub bg_panel: Color32,
    pub bg_toolbar: Color32,
    pub border_soft: Color32,
    pub fg_text_primary: Color32,
    pub fg_text_secondary: Color32,
    /// 진행 막대 색상.
    pub accent_primary: Color32,
    /// 확정 버튼 색상.
    pub accent_confirm: Color32,
    pub accent_success: Color32,
    pub accent_error: Color32,
    /// Bad UI 시작 버튼 색상.
    pub accent_danger: Color32,
    /// Good UI 시작 버튼 색상.
    pub accent_safe: Color32,
    /// 비활성 버튼 색상.
    pub inactive: Color32,
}

/// 둥글기와 여백 같은 장식 값.
#[derive(Debug, Clone, Copy)]
pub struct Decorations {
    pub card_rounding: f32,
    pub container_rounding: f32,
    pub card_inner_margin: egui::Margin,
    pub button_rounding: f32,
    pub button_height: f32,
    pub button_min_width: f32,
    pub button_gap: f32,
    pub alarm_card_height: f32,
    pub grid_gap: f32,
}

/// 알람 카드 색상.
#[derive(Debug, Clone, Copy)]
pub struct AlarmColors {
    pub acknowledged: Color32,
    pub flashing: Color32,
    pub steady: Color32,
}

/// UI 전체에서 참조할 공통 테마 정보.
pub struct Theme {
    palette: Palette,
    decorations: Decorations,
    alarms: AlarmColors,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            palette: Palette {
                bg_main: Color32::from_rgb(17, 24, 39),
                bg_panel: Color32::from_rgb(31, 41, 55),
                bg_toolbar: Color32::from_rgb(24, 32, 46),
                border_soft: Color32::from_rgb(75, 85, 99),
                fg_text_primary: Color32::WHITE,
                fg_text_secondary: Color32::from_rgb(190, 196, 206),
                accent_primary: Color32::from_rgb(59, 130, 246),
                accent_confirm: Color32::from_rgb(234, 179, 8),
                accent_success: Color32::from_rgb(74, 222, 128),
                accent_error: Color32::from_rgb(248, 113, 113),
                accent_danger: Color32::from_rgb(220, 38, 38),
                accent_safe: Color32::from_rgb(22, 163, 74),
                inactive: Color32::from_rgb(75, 85, 99),
            },
            decorations: Decorations {
                card_rounding: 6.0,
                container_rounding: 8.0,
                card_inner_margin: egui::Margin::symmetric(18.0, 14.0),
                button_rounding: 8.0,
                button_height: 40.0,
                button_min_width: 180.0,
                button_gap: 16.0,
                alarm_card_height: 56.0,
                grid_gap: 14.0,
            },
            alarms: AlarmColors {
                acknowledged: Color32::from_rgb(34, 197, 94),
                flashing: Color32::from_rgb(239, 68, 68),
                steady: Color32::from_rgb(59, 130, 246),
            },
        }
    }
}

impl Theme {
    /// egui Context에 테마 기반 스타일을 적용한다.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::dark();
        visuals.window_rounding = egui::Rounding::same(self.decorations.container_rounding);
        visuals.panel_fill = self.palette.bg_main;
        visuals.widgets.inactive.bg_fill = self.palette.bg_panel;
        ctx.set_visuals(visuals);
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn decorations(&self) -> &Decorations {
        &self.decorations
    }

    /// 알람 카드 배경색을 계산한다.
    ///
    /// `time`은 초 단위 애니메이션 시각이며 `Flashing`일 때 밝기를 주기적으로 바꾼다.
    pub fn alarm_fill(&self, acknowledged: bool, emphasis: AlarmEmphasis, time: f64) -> Color32 {
        if acknowledged {
            return self.alarms.acknowledged;
        }
        match emphasis {
            AlarmEmphasis::Steady => self.alarms.steady,
            AlarmEmphasis::Flashing => {
                let pulse = pulse_factor(time);
                blend_color(self.alarms.flashing, self.palette.bg_panel, 0.5 * (1.0 - pulse))
            }
        }
    }
}

/// 2초 주기로 0.0과 1.0 사이를 오가는 값.
pub fn pulse_factor(time: f64) -> f32 {
    let phase = (time * std::f64::consts::PI).cos();
    (0.5 + 0.5 * phase) as f32
}

/// 두 색상을 `t` 비율로 섞는다. `t = 0.0`이면 `a`, `1.0`이면 `b`.
pub fn blend_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgba_unmultiplied(
        mix(a.r(), b.r()),
        mix(a.g(), b.g()),
        mix(a.b(), b.b()),
        mix(a.a(), b.a()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_color_interpolates_channels() {
        let a = Color32::from_rgb(0, 100, 200);
        let b = Color32::from_rgb(100, 200, 0);
        assert_eq!(blend_color(a, b, 0.0), a);
        assert_eq!(blend_color(a, b, 1.0), b);
        assert_eq!(blend_color(a, b, 0.5), Color32::from_rgb(50, 150, 100));
        assert_eq!(blend_color(a, b, 3.0), b);
    }

    #[test]
    fn acknowledged_alarm_ignores_emphasis() {
        let theme = Theme::default();
        let flashing = theme.alarm_fill(true, AlarmEmphasis::Flashing, 0.3);
        let steady = theme.alarm_fill(true, AlarmEmphasis::Steady, 0.3);
        assert_eq!(flashing, steady);
    }

    /// 깜빡임 모드에서는 시각에 따라 색이 달라진다.
    #[test]
    fn flashing_alarm_changes_over_time() {
        let theme = Theme::default();
        let bright = theme.alarm_fill(false, AlarmEmphasis::Flashing, 0.0);
        let dim = theme.alarm_fill(false, AlarmEmphasis::Flashing, 1.0);
        assert_ne!(bright, dim);
        assert_eq!(
            theme.alarm_fill(false, AlarmEmphasis::Steady, 0.0),
            theme.alarm_fill(false, AlarmEmphasis::Steady, 1.0)
        );
    }
}
