/// 세션을 구분하기 위한 식별자이다. 새 세션마다 증가한다.
pub type SessionId = u64;

/// 카운트다운 태스크에서 UI로 전달되는 이벤트이다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// 한 틱이 경과했다.
    Tick { session: SessionId },
    /// 카운트다운 태스크가 종료되었다.
    CountdownFinished { session: SessionId },
}
