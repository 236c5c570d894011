use super::events::{SessionEvent, SessionId};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

/// 지정한 횟수만큼 고정 간격으로 틱 이벤트를 송신한다.
///
/// 매 틱마다 새로 `interval`만큼 대기하므로 누적 오차는 보정하지 않는다.
/// 취소되거나 수신 측이 사라지면 즉시 종료하고, 종료 시 `CountdownFinished`를 보낸다.
pub async fn run_countdown(
    session: SessionId,
    ticks: u32,
    interval: Duration,
    sender: UnboundedSender<SessionEvent>,
    cancel: CancellationToken,
) {
    tracing::debug!(session, ticks, ?interval, "카운트다운 시작");
    let mut sent = 0;
    while sent < ticks {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = sleep(interval) => {}
        }
        if cancel.is_cancelled() {
            break;
        }
        if sender.send(SessionEvent::Tick { session }).is_err() {
            break;
        }
        sent += 1;
    }
    tracing::debug!(session, sent, cancelled = cancel.is_cancelled(), "카운트다운 종료");
    let _ = sender.send(SessionEvent::CountdownFinished { session });
}

/// 세션 컨트롤러가 소유하는 카운트다운 태스크 핸들이다.
#[derive(Debug)]
pub struct CountdownHandle {
    session: SessionId,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl CountdownHandle {
    /// 런타임에 카운트다운 태스크를 띄운다.
    pub fn spawn(
        runtime: &Handle,
        session: SessionId,
        ticks: u32,
        interval: Duration,
        sender: UnboundedSender<SessionEvent>,
    ) -> Self {
        let cancel = CancellationToken::new();
        let task = runtime.spawn(run_countdown(
            session,
            ticks,
            interval,
            sender,
            cancel.clone(),
        ));
        Self {
            session,
            cancel,
            task,
        }
    }

    /// 이 핸들이 담당하는 세션 ID.
    pub fn session(&self) -> SessionId {
        self.session
    }

    /// 태스크가 이미 끝났는지 여부.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// 대기 중인 틱을 취소한다.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
