use super::state::{SessionPhase, SessionState};
use crate::scenario::{AlarmEmphasis, AlarmLayout, ScenarioKey};

/// 화면 최상단 제목.
pub const SCREEN_TITLE: &str = "Nuclear Control Room Simulation";
/// 의사결정 보조 문구.
pub const DECISION_AID_HINT: &str = "AI Decision Aid: Check Reactor Core Status First";
/// 확정 버튼 문구.
pub const CONFIRM_LABEL: &str = "Confirm Response";

/// 세션 종료 결과이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    DecisionRecorded,
    TimeRanOut,
}

impl Outcome {
    /// 화면에 표시할 결과 문구.
    pub fn message(self) -> &'static str {
        match self {
            Outcome::DecisionRecorded => "All alarms acknowledged! Decision Recorded!",
            Outcome::TimeRanOut => "Time Ran Out!",
        }
    }
}

/// 시작 버튼 하나의 표시 정보.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartChoice {
    pub key: ScenarioKey,
    pub label: &'static str,
}

/// 알람 카드 하나의 표시 정보.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlarmView {
    pub label: String,
    pub acknowledged: bool,
}

impl AlarmView {
    /// 확인 표시가 붙은 카드 문구.
    pub fn caption(&self) -> String {
        if self.acknowledged {
            format!("{} ✔", self.label)
        } else {
            self.label.clone()
        }
    }
}

/// 진행 중인 세션 영역의 표시 정보.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView {
    pub title: String,
    pub phase: SessionPhase,
    pub time_left_secs: u32,
    pub time_label: String,
    /// 남은 시간 비율(0.0 ~ 1.0).
    pub progress: f32,
    pub layout: AlarmLayout,
    pub emphasis: AlarmEmphasis,
    pub alarms: Vec<AlarmView>,
    pub decision_aid: Option<&'static str>,
    pub confirm_enabled: bool,
    pub outcome: Option<Outcome>,
}

impl SessionView {
    /// 깜빡이는 미확인 알람이 남아 있어 계속 다시 그려야 하는지 여부.
    pub fn is_animating(&self) -> bool {
        self.emphasis == AlarmEmphasis::Flashing && self.alarms.iter().any(|a| !a.acknowledged)
    }
}

/// 화면 전체의 표시 정보.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenView {
    pub title: &'static str,
    /// 시작 버튼. 시나리오를 선택한 뒤에는 비어 있다.
    pub choices: Vec<StartChoice>,
    /// 시나리오를 선택하기 전에는 `None`이다.
    pub session: Option<SessionView>,
}

/// 세션 상태를 화면 표시 정보로 변환한다. 부수 효과가 없다.
pub fn render(state: &SessionState) -> ScreenView {
    let session = render_session(state);
    let choices = if session.is_some() {
        Vec::new()
    } else {
        ScenarioKey::ALL
            .iter()
            .map(|&key| StartChoice {
                key,
                label: key.start_label(),
            })
            .collect()
    };
    ScreenView {
        title: SCREEN_TITLE,
        choices,
        session,
    }
}

fn render_session(state: &SessionState) -> Option<SessionView> {
    let definition = state.scenario()?;
    let outcome = match state.phase() {
        SessionPhase::Confirmed => Some(Outcome::DecisionRecorded),
        SessionPhase::TimedOut => Some(Outcome::TimeRanOut),
        SessionPhase::NotStarted | SessionPhase::InProgress => None,
    };
    let alarms = state
        .alarms
        .iter()
        .map(|label| AlarmView {
            label: label.clone(),
            acknowledged: state.is_acknowledged(label),
        })
        .collect();
    Some(SessionView {
        title: format!("{} Scenario", definition.name),
        phase: state.phase(),
        time_left_secs: state.time_left_secs,
        time_label: format!("Time Left: {} seconds", state.time_left_secs),
        progress: state.time_ratio().clamp(0.0, 1.0),
        layout: definition.layout,
        emphasis: definition.emphasis,
        alarms,
        decision_aid: definition.decision_aid.then_some(DECISION_AID_HINT),
        confirm_enabled: state.can_confirm(),
        outcome,
    })
}
