use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    MissingEnv { name: &'static str },
    InvalidBaseUrl { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::MissingEnv { name } => {
                write!(f, "environment variable {name} is not set")
            }
            Self::InvalidBaseUrl { input } => write!(f, "invalid base url: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty {
            field: "sb-api-key-id",
        };
        assert_eq!(err.to_string(), "sb-api-key-id must not be empty");

        let err = ValidationError::MissingEnv {
            name: "SENDBLUE_API_KEY_ID",
        };
        assert_eq!(
            err.to_string(),
            "environment variable SENDBLUE_API_KEY_ID is not set"
        );

        let err = ValidationError::InvalidBaseUrl {
            input: "nope".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid base url: nope");
    }
}
