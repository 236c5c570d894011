use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 설정 파일 경로를 지정하는 환경 변수 이름.
pub const CONFIG_ENV_VAR: &str = "ALARM_DRILL_CONFIG";
/// 환경 변수가 없을 때 작업 디렉터리에서 찾는 기본 파일명.
pub const DEFAULT_CONFIG_FILE: &str = "alarm-drill.yaml";
/// 세션 제한 시간의 상한(초). 남은 시간은 항상 0~60 사이에 있다.
pub const MAX_SESSION_SECS: u32 = 60;
/// 카운트다운 한 틱의 간격. 한 틱이 1초를 의미하므로 고정이다.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// 시뮬레이션 실행 설정이다.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DrillConfig {
    /// 한 세션의 제한 시간(초 단위, 1~60).
    pub session_secs: u32,
    /// 창 너비.
    pub window_width: f32,
    /// 창 높이.
    pub window_height: f32,
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            session_secs: MAX_SESSION_SECS,
            window_width: 960.0,
            window_height: 720.0,
        }
    }
}

/// 설정 값이 허용 범위를 벗어난 경우의 오류이다.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("세션 시간은 1~60초 사이여야 합니다: {0}")]
    SessionLength(u32),
    #[error("창 크기가 올바르지 않습니다: {width}x{height}")]
    WindowSize { width: f32, height: f32 },
}

impl DrillConfig {
    /// 값의 범위를 검증한다.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_SESSION_SECS).contains(&self.session_secs) {
            return Err(ConfigError::SessionLength(self.session_secs));
        }
        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            return Err(ConfigError::WindowSize {
                width: self.window_width,
                height: self.window_height,
            });
        }
        Ok(())
    }

    /// 카운트다운 틱 간격.
    pub fn tick_interval(&self) -> Duration {
        TICK_INTERVAL
    }
}

/// YAML 파일을 읽어 설정으로 역직렬화한다.
pub fn load_config_from_file(path: &Path) -> anyhow::Result<DrillConfig> {
    let mut file = File::open(path)?;
    load_config_from_reader(&mut file)
}

/// Reader에서 YAML을 읽어 검증된 설정을 만든다.
pub fn load_config_from_reader<R: Read>(reader: &mut R) -> anyhow::Result<DrillConfig> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    if buf.trim().is_empty() {
        return Ok(DrillConfig::default());
    }
    let config: DrillConfig = serde_yaml::from_str(&buf)?;
    config.validate()?;
    Ok(config)
}

/// 환경 변수 또는 기본 파일명으로 설정 경로를 결정한다.
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// 설정을 로드한다. 파일이 없거나 잘못되었으면 기본값을 사용한다.
pub fn load_or_default(path: &Path) -> DrillConfig {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "설정 파일이 없어 기본값을 사용합니다.");
        return DrillConfig::default();
    }
    match load_config_from_file(path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), ?config, "설정 파일을 불러왔습니다.");
            config
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "설정 파일이 잘못되어 기본값을 사용합니다.");
            DrillConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn empty_input_yields_defaults() {
        let config = load_config_from_reader(&mut "".as_bytes()).expect("빈 설정 파싱 실패");
        assert_eq!(config, DrillConfig::default());
        assert_eq!(config.session_secs, 60);
        assert_eq!(config.tick_interval(), Duration::from_secs(1));
    }

    /// 일부 필드만 지정해도 나머지는 기본값으로 채워지는지 확인한다.
    #[test]
    fn partial_yaml_keeps_remaining_defaults() {
        let yaml = "session_secs: 30\nwindow_width: 800\n";
        let config = load_config_from_reader(&mut yaml.as_bytes()).expect("설정 파싱 실패");
        assert_eq!(config.session_secs, 30);
        assert_eq!(config.window_width, 800.0);
        assert_eq!(config.window_height, 720.0);
        assert_eq!(config.tick_interval(), TICK_INTERVAL);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = load_config_from_reader(&mut "session_secs: 0\n".as_bytes())
            .expect_err("0초 세션이 허용되었습니다.");
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::SessionLength(0))
        );

        let config = DrillConfig {
            window_height: 0.0,
            ..DrillConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::WindowSize {
                width: 960.0,
                height: 0.0
            })
        );
    }

    /// 남은 시간이 60초를 넘을 수 없도록 세션 시간 상한을 강제한다.
    #[test]
    fn session_longer_than_sixty_seconds_is_rejected() {
        let err = load_config_from_reader(&mut "session_secs: 61\n".as_bytes())
            .expect_err("61초 세션이 허용되었습니다.");
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::SessionLength(61))
        );
        let config = load_config_from_reader(&mut "session_secs: 60\n".as_bytes())
            .expect("60초 세션 파싱 실패");
        assert_eq!(config.session_secs, MAX_SESSION_SECS);
    }

    /// 틱 간격은 설정할 수 없으며 알 수 없는 키는 거부된다.
    #[test]
    fn tick_interval_is_not_configurable() {
        let result = load_config_from_reader(&mut "tick_interval_ms: 250\n".as_bytes());
        assert!(result.is_err());
        assert_eq!(DrillConfig::default().tick_interval(), Duration::from_secs(1));
    }

    #[test]
    fn invalid_or_missing_file_falls_back_to_defaults() {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("시스템 시간이 UTC epoch 이전입니다.")
            .as_nanos();
        let base_dir = std::env::temp_dir().join(format!("drill_config_test_{timestamp}"));
        std::fs::create_dir_all(&base_dir).expect("임시 디렉터리 생성 실패");

        let missing = base_dir.join("missing.yaml");
        assert_eq!(load_or_default(&missing), DrillConfig::default());

        let broken = base_dir.join("broken.yaml");
        std::fs::write(&broken, "session_secs: [not, a, number]\n").expect("파일 작성 실패");
        assert_eq!(load_or_default(&broken), DrillConfig::default());

        let valid = base_dir.join("valid.yaml");
        std::fs::write(&valid, "session_secs: 45\n").expect("파일 작성 실패");
        assert_eq!(load_or_default(&valid).session_secs, 45);

        let _ = std::fs::remove_dir_all(&base_dir);
    }
}
