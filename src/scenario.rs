use std::fmt;

/// 알람 카드 배치 방식을 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmLayout {
    /// 3열 그리드에 흩어 배치한다.
    Scattered,
    /// 우선순위 순서대로 1열로 배치한다.
    Organized,
}

impl AlarmLayout {
    /// 그리드 열 개수를 반환한다.
    pub fn columns(self) -> usize {
        match self {
            AlarmLayout::Scattered => 3,
            AlarmLayout::Organized => 1,
        }
    }
}

/// 미확인 알람을 강조하는 방식이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmEmphasis {
    /// 붉은색으로 깜빡인다.
    Flashing,
    /// 고정된 색으로 표시한다.
    Steady,
}

/// 정적으로 정의된 시나리오 정보이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioDefinition {
    /// 화면에 표시할 시나리오 이름.
    pub name: &'static str,
    /// 세션에서 확인해야 할 알람 목록(순서 고정).
    pub alarms: &'static [&'static str],
    /// 알람 배치 방식.
    pub layout: AlarmLayout,
    /// 의사결정 보조 문구 표시 여부.
    pub decision_aid: bool,
    /// 미확인 알람 강조 방식.
    pub emphasis: AlarmEmphasis,
}

const BAD_UI: ScenarioDefinition = ScenarioDefinition {
    name: "Bad UI",
    alarms: &[
        "Coolant Pressure Low",
        "Pump Failure",
        "High Radiation Levels",
        "Reactor Overheat",
        "Water Leak Detected",
        "System Error 505",
    ],
    layout: AlarmLayout::Scattered,
    decision_aid: false,
    emphasis: AlarmEmphasis::Flashing,
};

const GOOD_UI: ScenarioDefinition = ScenarioDefinition {
    name: "Good UI",
    alarms: &[
        "Reactor Overheat (Critical)",
        "Coolant Pressure Low (High Priority)",
        "Pump Failure (Moderate)",
    ],
    layout: AlarmLayout::Organized,
    decision_aid: true,
    emphasis: AlarmEmphasis::Steady,
};

/// 시나리오 레지스트리의 키. 정의되지 않은 키는 만들 수 없다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioKey {
    BadUi,
    GoodUi,
}

impl ScenarioKey {
    /// 선택 화면에 노출되는 순서대로의 전체 키 목록.
    pub const ALL: [ScenarioKey; 2] = [ScenarioKey::BadUi, ScenarioKey::GoodUi];

    /// 키에 대응하는 시나리오 정의를 반환한다.
    pub fn definition(self) -> &'static ScenarioDefinition {
        match self {
            ScenarioKey::BadUi => &BAD_UI,
            ScenarioKey::GoodUi => &GOOD_UI,
        }
    }

    /// 외부 식별자(`badUI`, `goodUI`)를 반환한다.
    pub fn as_str(self) -> &'static str {
        match self {
            ScenarioKey::BadUi => "badUI",
            ScenarioKey::GoodUi => "goodUI",
        }
    }

    /// 시작 버튼 문구.
    pub fn start_label(self) -> &'static str {
        match self {
            ScenarioKey::BadUi => "Start Bad UI Mode",
            ScenarioKey::GoodUi => "Start Good UI Mode",
        }
    }
}

impl fmt::Display for ScenarioKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 두 시나리오의 알람 개수와 구성이 고정값과 일치하는지 확인한다.
    #[test]
    fn registry_matches_fixed_definitions() {
        let bad = ScenarioKey::BadUi.definition();
        assert_eq!(bad.name, "Bad UI");
        assert_eq!(bad.alarms.len(), 6);
        assert_eq!(bad.layout, AlarmLayout::Scattered);
        assert!(!bad.decision_aid);

        let good = ScenarioKey::GoodUi.definition();
        assert_eq!(good.name, "Good UI");
        assert_eq!(good.alarms.len(), 3);
        assert_eq!(good.layout, AlarmLayout::Organized);
        assert!(good.decision_aid);
    }

    #[test]
    fn alarm_labels_are_unique_per_scenario() {
        for key in ScenarioKey::ALL {
            let alarms = key.definition().alarms;
            let unique: std::collections::BTreeSet<_> = alarms.iter().collect();
            assert_eq!(unique.len(), alarms.len(), "{key}");
        }
    }

    #[test]
    fn key_exposes_external_identifier() {
        assert_eq!(ScenarioKey::GoodUi.as_str(), "goodUI");
        assert_eq!(ScenarioKey::BadUi.to_string(), "badUI");
        assert_eq!(AlarmLayout::Scattered.columns(), 3);
        assert_eq!(AlarmLayout::Organized.columns(), 1);
    }
}
