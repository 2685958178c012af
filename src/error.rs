// SPDX-License-Identifier: Apache-2.0

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[non_exhaustive]
pub enum ErrorKind {
    InvalidArgument,
    NetBoxRequestFailed,
    InvalidNetBoxReply,
    NotFound,
    NotEnabled,
    InvalidAddress,
    InvalidDhcpMessage,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DhcpError {
    kind: ErrorKind,
    msg: String,
}

impl DhcpError {
    pub fn new(kind: ErrorKind, msg: String) -> Self {
        Self { kind, msg }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn msg(&self) -> &str {
        self.msg.as_str()
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::fmt::Display for DhcpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.msg)
    }
}

impl std::error::Error for DhcpError {}

pub(crate) trait ErrorContext<T> {
    fn context<C>(self, ctx: C) -> Result<T, DhcpError>
    where
        C: std::fmt::Display;
}

impl<T> ErrorContext<T> for Result<T, DhcpError> {
    fn context<C>(self, ctx: C) -> Result<T, DhcpError>
    where
        C: std::fmt::Display,
    {
        self.map_err(|e| DhcpError::new(e.kind, format!("{ctx}: {}", e.msg)))
    }
}

impl From<reqwest::Error> for DhcpError {
    fn from(e: reqwest::Error) -> Self {
        Self::new(
            ErrorKind::NetBoxRequestFailed,
            format!("NetBox request failed: {e}"),
        )
    }
}

impl From<serde_json::Error> for DhcpError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(
            ErrorKind::InvalidNetBoxReply,
            format!("Invalid NetBox reply: {e}"),
        )
    }
}
