use thiserror::Error;

#[derive(Error, Debug)]
pub enum SvTalError {
    // 编码错误
    #[error("Number out of range: {value} > {max}")]
    OutOfRange { value: u64, max: u64 },

    // 解码错误
    #[error("Unrecognized number word at byte {offset}: {token:?}")]
    Parse { token: String, offset: usize },

    #[error("No number words in input")]
    EmptyInput,

    #[error("Number overflows u64: {0}")]
    Overflow(String),

    // 配置错误
    #[error("Config parse error: {path} - {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("Config serialize error: {path} - {reason}")]
    ConfigSerialize { path: String, reason: String },

    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SvTalResult<T> = Result<T, SvTalError>;

impl SvTalError {
    /// 是否为输入内容本身的错误（而非配置或 I/O 错误）
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            SvTalError::OutOfRange { .. }
                | SvTalError::Parse { .. }
                | SvTalError::EmptyInput
                | SvTalError::Overflow(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SvTalError::OutOfRange {
            value: 1_000_000_000_000,
            max: 999_999_999_999,
        };
        assert_eq!(
            err.to_string(),
            "Number out of range: 1000000000000 > 999999999999"
        );

        let err = SvTalError::Parse {
            token: "xyz".to_string(),
            offset: 5,
        };
        assert_eq!(err.to_string(), "Unrecognized number word at byte 5: \"xyz\"");

        let err = SvTalError::ConfigSerialize {
            path: "/tmp/config.toml".to_string(),
            reason: "unsupported type".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Config serialize error: /tmp/config.toml - unsupported type"
        );
    }

    #[test]
    fn test_is_input_error() {
        assert!(SvTalError::EmptyInput.is_input_error());
        assert!(SvTalError::Overflow("hundra".to_string()).is_input_error());
        assert!(!SvTalError::ConfigNotFound("/tmp/x".to_string()).is_input_error());
        assert!(!SvTalError::ConfigSerialize {
            path: "/tmp/x".to_string(),
            reason: "unsupported".to_string(),
        }
        .is_input_error());
    }
}
