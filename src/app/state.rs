use crate::config::DrillConfig;
use crate::scenario::ScenarioKey;
use crate::session::SessionController;
use crate::theme::Theme;
use tokio::runtime::Runtime;

/// 화면에서 발생한 사용자 입력이다. 렌더링이 끝난 뒤 한 번에 반영한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum UiAction {
    Start(ScenarioKey),
    Acknowledge(String),
    Confirm,
}

/// egui 애플리케이션의 전체 상태를 보관한다.
pub struct AlarmDrillApp {
    /// UI 테마 정보.
    pub(crate) theme: Theme,
    /// 세션 상태와 카운트다운.
    pub(crate) controller: SessionController,
    /// Tokio 런타임. 컨트롤러보다 나중에 해제되어야 한다.
    _runtime: Runtime,
}

impl AlarmDrillApp {
    /// egui Context와 설정을 받아 초기 상태를 구성한다.
    pub fn new(cc: &eframe::CreationContext<'_>, config: &DrillConfig) -> Self {
        let theme = Theme::default();
        theme.apply(&cc.egui_ctx);
        let runtime = Runtime::new().expect("Tokio 런타임 생성 실패");
        let controller = SessionController::new(
            runtime.handle().clone(),
            config.session_secs,
            config.tick_interval(),
        );
        Self {
            theme,
            controller,
            _runtime: runtime,
        }
    }

    /// 사용자 입력을 세션 컨트롤러에 전달한다.
    pub(super) fn apply_action(&mut self, action: UiAction) {
        match action {
            UiAction::Start(key) => self.controller.start(key),
            UiAction::Acknowledge(alarm) => self.controller.acknowledge(&alarm),
            UiAction::Confirm => {
                if !self.controller.confirm() {
                    let state = self.controller.state();
                    tracing::debug!(
                        acknowledged = state.acknowledged.len(),
                        total = state.alarms.len(),
                        time_left = state.time_left_secs,
                        "확정 조건이 충족되지 않았습니다."
                    );
                }
            }
        }
    }
}
