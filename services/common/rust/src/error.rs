use std::fmt::{Debug, Display};

#[derive(Debug, Clone, PartialEq)]
pub enum AppErrorCode {
    MissingSysBasePath,
    MissingAppBasePath,
    MissingConfigPath,
    InvalidJsonFormat,
    MissingAliasLogHdlerCfg,
    MissingAliasLoggerCfg,
    NoLogHandlerCfg,
    NoLoggerCfg,
    NoHandlerInLoggerCfg,
    InvalidHandlerLoggerCfg,
    InvalidBackendCfg,
    InvalidDataSourceCfg,
    EmptyInputData,
    InvalidInput,
    RemoteRequestFailure,
    ExceedingMaxLimit,
    IOerror(std::io::ErrorKind),
} // end of AppErrorCode

#[derive(Debug)]
pub struct AppCfgError {
    pub code: AppErrorCode,
    pub detail: Option<String>,
}

impl Display for AppCfgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dp = self.detail.as_deref().unwrap_or("none");
        write!(f, "code:{:?}, detail:{}", self.code, dp)
    }
}
