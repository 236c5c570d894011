use super::countdown::CountdownHandle;
use super::events::{SessionEvent, SessionId};
use super::state::{
    SessionPhase, SessionState, apply_acknowledge, apply_confirm, apply_start, apply_tick,
};
use super::view::{ScreenView, render};
use crate::scenario::ScenarioKey;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// 세션 상태와 카운트다운 태스크를 함께 관리한다.
///
/// 모든 상태 전이는 UI 스레드에서 동기적으로 일어나며,
/// 카운트다운 태스크는 채널로 틱 이벤트만 전달한다.
pub struct SessionController {
    /// 현재 세션 상태.
    state: SessionState,
    /// 카운트다운 태스크를 띄울 런타임 핸들.
    runtime: Handle,
    /// 틱 간격.
    tick_interval: Duration,
    /// 현재 세션 ID.
    session: SessionId,
    /// 세션 시작 시각.
    started_at: Option<Instant>,
    /// 진행 중인 카운트다운.
    countdown: Option<CountdownHandle>,
    events_tx: UnboundedSender<SessionEvent>,
    events_rx: UnboundedReceiver<SessionEvent>,
}

impl SessionController {
    /// 아직 시나리오가 선택되지 않은 컨트롤러를 만든다.
    pub fn new(runtime: Handle, session_secs: u32, tick_interval: Duration) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state: SessionState::new(session_secs),
            runtime,
            tick_interval,
            session: 0,
            started_at: None,
            countdown: None,
            events_tx,
            events_rx,
        }
    }

    /// 현재 세션 상태.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// 현재 상태의 화면 표시 정보.
    pub fn view(&self) -> ScreenView {
        render(&self.state)
    }

    /// 카운트다운이 진행 중인지 여부.
    pub fn is_counting_down(&self) -> bool {
        self.countdown
            .as_ref()
            .is_some_and(|countdown| !countdown.is_finished())
    }

    /// 시나리오를 시작한다. 이전 세션과 카운트다운은 폐기한다.
    pub fn start(&mut self, key: ScenarioKey) {
        self.stop_countdown();
        if let Some(previous) = self.state.active_scenario {
            tracing::info!(
                previous = %previous,
                phase = ?self.state.phase(),
                "이전 세션을 종료하고 새 세션을 시작합니다."
            );
        }
        self.session += 1;
        let state = std::mem::take(&mut self.state);
        self.state = apply_start(state, key);
        self.started_at = Some(Instant::now());
        self.countdown = Some(CountdownHandle::spawn(
            &self.runtime,
            self.session,
            self.state.time_left_secs,
            self.tick_interval,
            self.events_tx.clone(),
        ));
        tracing::info!(
            session = self.session,
            scenario = %key,
            alarms = self.state.alarms.len(),
            "세션 시작"
        );
    }

    /// 알람을 확인 처리한다.
    pub fn acknowledge(&mut self, alarm: &str) {
        let before = self.state.acknowledged.len();
        let state = std::mem::take(&mut self.state);
        self.state = apply_acknowledge(state, alarm);
        if self.state.acknowledged.len() > before {
            tracing::debug!(
                session = self.session,
                alarm,
                acknowledged = self.state.acknowledged.len(),
                total = self.state.alarms.len(),
                "알람 확인"
            );
        }
    }

    /// 결정을 확정한다. 실제로 확정되었으면 `true`를 반환한다.
    pub fn confirm(&mut self) -> bool {
        if !self.state.can_confirm() {
            return false;
        }
        let state = std::mem::take(&mut self.state);
        self.state = apply_confirm(state);
        self.stop_countdown();
        tracing::info!(
            session = self.session,
            time_left = self.state.time_left_secs,
            elapsed = ?self.started_at.map(|t| t.elapsed()),
            "결정 확정"
        );
        true
    }

    /// 카운트다운 이벤트를 모두 소비하여 상태를 갱신한다.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            match event {
                SessionEvent::Tick { session } if session == self.session => {
                    self.on_tick();
                }
                SessionEvent::CountdownFinished { session } if session == self.session => {
                    self.countdown = None;
                }
                stale => {
                    tracing::trace!(?stale, current = self.session, "이전 세션 이벤트 무시");
                }
            }
        }
    }

    fn on_tick(&mut self) {
        let state = std::mem::take(&mut self.state);
        self.state = apply_tick(state);
        if self.state.phase() == SessionPhase::TimedOut {
            self.stop_countdown();
            tracing::info!(
                session = self.session,
                acknowledged = self.state.acknowledged.len(),
                total = self.state.alarms.len(),
                "시간 초과"
            );
        }
    }

    fn stop_countdown(&mut self) {
        if let Some(countdown) = self.countdown.take() {
            tracing::debug!(session = countdown.session(), "카운트다운 취소");
            countdown.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::view::Outcome;
    use tokio::time::sleep;

    fn controller(session_secs: u32) -> SessionController {
        SessionController::new(Handle::current(), session_secs, Duration::from_secs(1))
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_decrement_remaining_time() {
        let mut ctl = controller(60);
        ctl.start(ScenarioKey::BadUi);
        assert!(ctl.is_counting_down());
        sleep(Duration::from_millis(3500)).await;
        ctl.drain_events();
        assert_eq!(ctl.state().time_left_secs, 57);
    }

    /// 제한 시간이 모두 지나면 시간 초과가 되고 카운트다운이 정리된다.
    #[tokio::test(start_paused = true)]
    async fn countdown_runs_out_to_timeout() {
        let mut ctl = controller(60);
        ctl.start(ScenarioKey::BadUi);
        sleep(Duration::from_millis(65_000)).await;
        ctl.drain_events();
        assert_eq!(ctl.state().time_left_secs, 0);
        assert_eq!(ctl.state().phase(), SessionPhase::TimedOut);
        assert!(!ctl.state().decision_confirmed);
        assert!(!ctl.is_counting_down());
        let session = ctl.view().session.expect("세션 화면이 없습니다.");
        assert_eq!(session.outcome, Some(Outcome::TimeRanOut));

        ctl.acknowledge("Pump Failure");
        assert!(!ctl.confirm());
        assert!(ctl.state().acknowledged.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn restart_ignores_ticks_from_previous_session() {
        let mut ctl = controller(60);
        ctl.start(ScenarioKey::BadUi);
        sleep(Duration::from_millis(2500)).await;
        ctl.start(ScenarioKey::GoodUi);
        ctl.drain_events();
        assert_eq!(ctl.state().time_left_secs, 60);
        assert_eq!(ctl.state().active_scenario, Some(ScenarioKey::GoodUi));

        sleep(Duration::from_millis(1500)).await;
        ctl.drain_events();
        assert_eq!(ctl.state().time_left_secs, 59);
    }

    #[tokio::test(start_paused = true)]
    async fn confirmation_freezes_countdown() {
        let mut ctl = controller(60);
        ctl.start(ScenarioKey::GoodUi);
        sleep(Duration::from_millis(1500)).await;
        ctl.drain_events();
        for alarm in ctl.state().alarms.clone() {
            ctl.acknowledge(&alarm);
        }
        assert!(ctl.confirm());
        assert!(!ctl.is_counting_down());
        assert!(!ctl.confirm());

        sleep(Duration::from_secs(5)).await;
        ctl.drain_events();
        assert_eq!(ctl.state().time_left_secs, 59);
        let session = ctl.view().session.expect("세션 화면이 없습니다.");
        assert_eq!(session.outcome, Some(Outcome::DecisionRecorded));
        assert!(!session.confirm_enabled);
    }

    #[tokio::test(start_paused = true)]
    async fn partial_acknowledgement_cannot_confirm() {
        let mut ctl = controller(60);
        ctl.start(ScenarioKey::GoodUi);
        let alarms = ctl.state().alarms.clone();
        ctl.acknowledge(&alarms[0]);
        ctl.acknowledge(&alarms[0]);
        ctl.acknowledge(&alarms[2]);
        assert_eq!(ctl.state().acknowledged.len(), 2);
        assert!(!ctl.confirm());
        assert!(!ctl.state().decision_confirmed);
        assert!(ctl.is_counting_down());
    }

    #[tokio::test(start_paused = true)]
    async fn short_session_uses_configured_length() {
        let mut ctl = controller(3);
        ctl.start(ScenarioKey::GoodUi);
        assert_eq!(ctl.state().time_left_secs, 3);
        sleep(Duration::from_millis(4500)).await;
        ctl.drain_events();
        assert_eq!(ctl.state().phase(), SessionPhase::TimedOut);
        assert!(!ctl.is_counting_down());
    }
}
