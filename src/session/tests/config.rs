/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Tests for session configuration parsing and validation.

#[cfg(test)]
mod tests {
    use crate::algorithms::Algorithm;
    use crate::model::{DEFAULT_DELAY, DEFAULT_SIZE, MAX_DELAY};
    use crate::session::{ConfigError, SessionConfig};
    use std::time::Duration;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.algorithm, Algorithm::QuickSort);
        assert_eq!(config.size, DEFAULT_SIZE);
        assert_eq!(config.speed().delay(), DEFAULT_DELAY);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = SessionConfig::from_json("{}").unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn test_full_document() {
        let config = SessionConfig::from_json(
            r#"{ "algorithm": "BubbleSort", "size": 150, "speed_secs": 0.2, "seed": 12 }"#,
        )
        .unwrap();
        assert_eq!(config.algorithm, Algorithm::BubbleSort);
        assert_eq!(config.size, 150);
        assert_eq!(config.speed().delay(), Duration::from_millis(200));
        assert_eq!(config.seed, Some(12));
    }

    #[test]
    fn test_size_out_of_range() {
        for size in [0, 9, 151] {
            let config = SessionConfig {
                size,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::SizeOutOfRange { size: s, min: 10, max: 150 }) if s == size
            ));
        }
    }

    #[test]
    fn test_invalid_speed() {
        let config = SessionConfig {
            speed_secs: -0.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSpeed { .. })
        ));
    }

    #[test]
    fn test_non_finite_speed_rejected() {
        for speed_secs in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let config = SessionConfig {
                speed_secs,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidSpeed { .. })
            ));
        }
    }

    #[test]
    fn test_huge_speed_stays_slowest() {
        let config = SessionConfig::from_json(r#"{ "speed_secs": 1e300 }"#).unwrap();
        assert_eq!(config.speed().delay(), MAX_DELAY);
        assert!(config.speed() > SessionConfig::default().speed());
    }

    #[test]
    fn test_zero_speed_is_clamped_not_rejected() {
        let config = SessionConfig::from_json(r#"{ "speed_secs": 0.0 }"#).unwrap();
        assert_eq!(config.speed().delay(), Duration::from_millis(1));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            SessionConfig::from_json("{ size: }"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            SessionConfig::from_json(r#"{ "algorithm": "ShellSort" }"#),
            Err(ConfigError::Parse(_))
        ));
    }
}
