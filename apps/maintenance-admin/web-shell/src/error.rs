use admin_forms_core::ConfigError;

#[cfg_attr(test, expect(dead_code))]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum ShellError {
    #[error("window is unavailable")]
    WindowUnavailable,
    #[error("document is unavailable")]
    DocumentUnavailable,
    #[error("failed to register {event} listener on {target}")]
    Listener { event: &'static str, target: String },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listener_error_names_event_and_target() {
        let error = ShellError::Listener {
            event: "input",
            target: "id_quantidade".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "failed to register input listener on id_quantidade"
        );
    }

    #[test]
    fn config_errors_pass_through_unchanged() {
        let error = ShellError::from(ConfigError::EmptyAllowedTokens);
        assert_eq!(error.to_string(), ConfigError::EmptyAllowedTokens.to_string());
    }
}
