use crate::scenario::{ScenarioDefinition, ScenarioKey};
use std::collections::BTreeSet;

/// 세션 기본 제한 시간(초).
pub const DEFAULT_SESSION_SECS: u32 = 60;

/// 세션 진행 단계를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// 아직 시나리오가 선택되지 않았다.
    NotStarted,
    /// 카운트다운이 진행 중이다.
    InProgress,
    /// 사용자가 결정을 확정했다.
    Confirmed,
    /// 확정 전에 시간이 모두 소진되었다.
    TimedOut,
}

/// 한 세션의 전체 상태이다. 전이 함수로만 갱신한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// 현재 시나리오 키.
    pub active_scenario: Option<ScenarioKey>,
    /// 세션 시작 시 복사한 알람 목록.
    pub alarms: Vec<String>,
    /// 확인 완료된 알람 집합.
    pub acknowledged: BTreeSet<String>,
    /// 남은 시간(초).
    pub time_left_secs: u32,
    /// 결정 확정 여부.
    pub decision_confirmed: bool,
    /// 세션 제한 시간(초).
    pub session_secs: u32,
}

impl SessionState {
    /// 시나리오가 선택되지 않은 초기 상태를 만든다.
    pub fn new(session_secs: u32) -> Self {
        Self {
            active_scenario: None,
            alarms: Vec::new(),
            acknowledged: BTreeSet::new(),
            time_left_secs: session_secs,
            decision_confirmed: false,
            session_secs,
        }
    }

    /// 현재 시나리오 정의.
    pub fn scenario(&self) -> Option<&'static ScenarioDefinition> {
        self.active_scenario.map(ScenarioKey::definition)
    }

    /// 상태로부터 진행 단계를 계산한다.
    pub fn phase(&self) -> SessionPhase {
        if self.active_scenario.is_none() {
            SessionPhase::NotStarted
        } else if self.decision_confirmed {
            SessionPhase::Confirmed
        } else if self.time_left_secs == 0 {
            SessionPhase::TimedOut
        } else {
            SessionPhase::InProgress
        }
    }

    /// 알람 확인 여부.
    pub fn is_acknowledged(&self, alarm: &str) -> bool {
        self.acknowledged.contains(alarm)
    }

    /// 결정 확정이 허용되는지 여부.
    pub fn can_confirm(&self) -> bool {
        self.active_scenario.is_some()
            && self.acknowledged.len() == self.alarms.len()
            && !self.decision_confirmed
            && self.time_left_secs > 0
    }

    /// 남은 시간 비율(0.0 ~ 1.0).
    pub fn time_ratio(&self) -> f32 {
        if self.session_secs == 0 {
            return 0.0;
        }
        self.time_left_secs as f32 / self.session_secs as f32
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_SECS)
    }
}

/// 시나리오를 시작해 새 세션 상태를 만든다. 이전 세션은 모두 버린다.
pub fn apply_start(state: SessionState, key: ScenarioKey) -> SessionState {
    let definition = key.definition();
    SessionState {
        active_scenario: Some(key),
        alarms: definition.alarms.iter().map(|a| a.to_string()).collect(),
        acknowledged: BTreeSet::new(),
        time_left_secs: state.session_secs,
        decision_confirmed: false,
        session_secs: state.session_secs,
    }
}

/// 알람을 확인 처리한다. 이미 확인했거나 목록에 없으면 변화가 없다.
pub fn apply_acknowledge(mut state: SessionState, alarm: &str) -> SessionState {
    if state.phase() != SessionPhase::InProgress {
        return state;
    }
    if state.alarms.iter().any(|a| a == alarm) && !state.acknowledged.contains(alarm) {
        state.acknowledged.insert(alarm.to_string());
    }
    state
}

/// 조건이 충족되면 결정을 확정한다. 아니면 그대로 반환한다.
pub fn apply_confirm(mut state: SessionState) -> SessionState {
    if state.can_confirm() {
        state.decision_confirmed = true;
    }
    state
}

/// 카운트다운 한 틱을 반영한다.
pub fn apply_tick(mut state: SessionState) -> SessionState {
    if state.phase() == SessionPhase::InProgress {
        state.time_left_secs = state.time_left_secs.saturating_sub(1);
    }
    state
}
