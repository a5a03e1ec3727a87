use std::env;
use std::fmt::Debug;

#[derive(Clone, Debug)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Error {
    pub fn is_rejection_error(&self) -> bool {
        self.code >= 100
    }

    pub fn is_not_found_error(&self) -> bool {
        self.code == 104
    }

    pub fn is_timeout_error(&self) -> bool {
        self.code == 6
    }

    pub fn is_aborted_error(&self) -> bool {
        self.code == 7
    }
}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return timeout_error();
        }

        transport_error(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        decode_error(err)
    }
}

pub fn env_var_error(_: env::VarError) -> Error {
    Error {
        code: 1,
        message: "environment variable error".into(),
    }
}

pub fn transport_error(_: reqwest::Error) -> Error {
    Error {
        code: 2,
        message: "network error".into(),
    }
}

pub fn decode_error<T: Debug>(_: T) -> Error {
    Error {
        code: 3,
        message: "malformed response".into(),
    }
}

pub fn upstream_error() -> Error {
    Error {
        code: 4,
        message: "upstream error".into(),
    }
}

pub fn unexpected_error() -> Error {
    Error {
        code: 5,
        message: "unexpected error".into(),
    }
}

pub fn timeout_error() -> Error {
    Error {
        code: 6,
        message: "request timed out".into(),
    }
}

pub fn aborted_error() -> Error {
    Error {
        code: 7,
        message: "request aborted".into(),
    }
}

pub fn invalid_invocation_error() -> Error {
    Error {
        code: 100,
        message: "invalid invocation".into(),
    }
}

pub fn invalid_input_error() -> Error {
    Error {
        code: 101,
        message: "invalid input".into(),
    }
}

pub fn rejection_error(detail: Option<String>) -> Error {
    Error {
        code: 102,
        message: detail.unwrap_or_else(|| "request rejected".into()),
    }
}

pub fn unauthorized_error() -> Error {
    Error {
        code: 103,
        message: "unauthorized".into(),
    }
}

pub fn not_found_error() -> Error {
    Error {
        code: 104,
        message: "not found".into(),
    }
}
