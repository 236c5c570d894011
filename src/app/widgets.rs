use crate::theme::{Palette, Theme, blend_color};
use eframe::egui::{self, Color32, RichText, Widget};

/// 단색 배경과 일정한 간격을 제공하는 기본 버튼 위젯.
pub(super) struct PrimaryButton<'a> {
    theme: &'a Theme,
    label: &'a str,
    icon: &'a str,
    fill: Option<Color32>,
}

impl<'a> PrimaryButton<'a> {
    pub(super) fn new(theme: &'a Theme, label: &'a str) -> Self {
        Self {
            theme,
            label,
            icon: "",
            fill: None,
        }
    }

    pub(super) fn icon(mut self, icon: &'a str) -> Self {
        self.icon = icon;
        self
    }

    /// 기본 강조색 대신 사용할 배경색.
    pub(super) fn fill(mut self, fill: Color32) -> Self {
        self.fill = Some(fill);
        self
    }
}

/// 버튼의 상호작용 상태.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ButtonState {
    Disabled,
    Idle,
    Hovered,
    Pressed,
}

impl ButtonState {
    fn of(enabled: bool, response: &egui::Response) -> Self {
        if !enabled {
            ButtonState::Disabled
        } else if response.is_pointer_button_down_on() {
            ButtonState::Pressed
        } else if response.hovered() {
            ButtonState::Hovered
        } else {
            ButtonState::Idle
        }
    }
}

/// 상태별 버튼 배경색. 비활성 버튼은 테두리색 쪽으로 흐려진다.
fn button_fill(base: Color32, state: ButtonState, palette: &Palette) -> Color32 {
    match state {
        ButtonState::Disabled => blend_color(base, palette.border_soft, 0.55),
        ButtonState::Idle => base,
        ButtonState::Hovered => blend_color(base, palette.fg_text_primary, 0.1),
        ButtonState::Pressed => blend_color(base, palette.bg_main, 0.25),
    }
}

impl<'a> Widget for PrimaryButton<'a> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let decorations = self.theme.decorations();
        let palette = self.theme.palette();
        let enabled = ui.is_enabled();

        let caption = match self.icon {
            "" => self.label.to_string(),
            icon => format!("{icon}  {}", self.label),
        };
        let font = egui::FontId::proportional(16.0);
        let text_color = if enabled {
            Color32::WHITE
        } else {
            blend_color(palette.fg_text_secondary, palette.bg_panel, 0.4)
        };
        let galley = ui.painter().layout_no_wrap(caption, font, text_color);

        let padding = ui.spacing().button_padding;
        let size = egui::vec2(
            (galley.size().x + padding.x * 2.0).max(decorations.button_min_width),
            (galley.size().y + padding.y * 2.0).max(decorations.button_height),
        );
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let state = ButtonState::of(enabled, &response);
            let fill = button_fill(self.fill.unwrap_or(palette.accent_primary), state, palette);
            let rounding = egui::Rounding::same(decorations.button_rounding);
            ui.painter().rect(
                rect,
                rounding,
                fill,
                egui::Stroke::new(1.0, blend_color(fill, palette.border_soft, 0.5)),
            );
            let text_pos = rect.center() - galley.size() / 2.0;
            ui.painter().galley(text_pos, galley, text_color);
        }

        if enabled && response.hovered() {
            ui.output_mut(|o| o.cursor_icon = egui::CursorIcon::PointingHand);
        }
        response
    }
}

/// 클릭 가능한 알람 카드 위젯.
pub(super) struct AlarmCard<'a> {
    theme: &'a Theme,
    caption: String,
    fill: Color32,
    width: f32,
}

impl<'a> AlarmCard<'a> {
    pub(super) fn new(theme: &'a Theme, caption: String, fill: Color32) -> Self {
        Self {
            theme,
            caption,
            fill,
            width: 0.0,
        }
    }

    /// 카드 너비. 0이면 사용 가능한 전체 너비를 쓴다.
    pub(super) fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }
}

impl<'a> Widget for AlarmCard<'a> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let decorations = self.theme.decorations();
        let palette = self.theme.palette();
        let width = if self.width > 0.0 {
            self.width
        } else {
            ui.available_width()
        };
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(width, decorations.alarm_card_height),
            egui::Sense::click(),
        );
        if ui.is_rect_visible(rect) {
            let fill = if response.hovered() {
                blend_color(self.fill, palette.fg_text_primary, 0.12)
            } else {
                self.fill
            };
            // 그림자
            ui.painter().rect_filled(
                rect.translate(egui::vec2(0.0, 3.0)),
                egui::Rounding::same(decorations.card_rounding),
                Color32::from_black_alpha(90),
            );
            ui.painter().rect(
                rect,
                egui::Rounding::same(decorations.card_rounding),
                fill,
                egui::Stroke::new(1.0, blend_color(fill, palette.border_soft, 0.4)),
            );
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                &self.caption,
                egui::FontId::proportional(15.0),
                palette.fg_text_primary,
            );
        }
        if response.hovered() {
            ui.output_mut(|o| {
                o.cursor_icon = egui::CursorIcon::PointingHand;
            });
        }
        response
    }
}

/// 얇은 구분선과 함께 소제목을 그린다.
pub(super) fn section_label(ui: &mut egui::Ui, theme: &Theme, text: &str) {
    let palette = theme.palette();
    ui.label(
        RichText::new(text)
            .size(14.0)
            .color(palette.fg_text_secondary)
            .strong(),
    );
    ui.add_space(4.0);
    ui.separator();
}
