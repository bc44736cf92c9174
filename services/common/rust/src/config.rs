use std::collections::hash_map::RandomState;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::result::Result as DefaultResult;

use serde::de::{Error as DeserializeError, Expected};
use serde::Deserialize;

use crate::constant::{env_vars, logging as const_log};
use crate::error::{AppCfgError, AppErrorCode};
use crate::AppLogAlias;

#[derive(Deserialize)]
pub struct AppLogHandlerCfg {
    pub min_level: const_log::Level,
    pub destination: const_log::Destination,
    pub alias: AppLogAlias,
    pub path: Option<String>,
}

#[derive(Deserialize)]
pub struct AppLoggerCfg {
    pub alias: AppLogAlias,
    pub handlers: Vec<String>,
    pub level: Option<const_log::Level>,
}

#[derive(Deserialize)]
pub struct AppLoggingCfg {
    pub handlers: Vec<AppLogHandlerCfg>,
    pub loggers: Vec<AppLoggerCfg>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AppBackendCfg {
    #[serde(deserialize_with = "jsn_deny_empty_string")]
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub secure: bool,
    // max number of transactions requested per listing
    pub list_limit: u32,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "_type")]
pub enum AppDataSourceCfg {
    Mock {
        num_transactions: u32,
        seed: Option<u64>,
    },
    Fixture {
        #[serde(deserialize_with = "jsn_deny_empty_string")]
        path: String,
    },
    Backend,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AppPresentationCfg {
    pub num_recent: usize,
    pub low_stock_threshold: i64,
}

#[derive(Deserialize)]
pub struct AppDashboardCfg {
    pub logging: AppLoggingCfg,
    pub backend: AppBackendCfg,
    pub data_source: AppDataSourceCfg,
    pub presentation: AppPresentationCfg,
    pub stack_sz_kb: u16,
}

pub struct AppBasepathCfg {
    pub system: String,
    pub service: String,
}

pub struct AppConfig {
    pub basepath: AppBasepathCfg,
    pub dashboard: AppDashboardCfg,
}

pub struct AppCfgHardLimit {
    pub max_mock_transactions: u32,
    pub max_list_limit: u32,
}
pub struct AppCfgInitArgs {
    pub env_var_map: HashMap<String, String, RandomState>,
    pub limit: AppCfgHardLimit,
}

impl AppConfig {
    pub fn new(args: AppCfgInitArgs) -> DefaultResult<Self, AppCfgError> {
        let (mut env_var_map, limit) = (args.env_var_map, args.limit);
        let sys_basepath = if let Some(s) = env_var_map.remove(env_vars::SYS_BASEPATH) {
            s + "/"
        } else {
            return Err(AppCfgError {
                detail: None,
                code: AppErrorCode::MissingSysBasePath,
            });
        };
        let app_basepath = if let Some(a) = env_var_map.remove(env_vars::SERVICE_BASEPATH) {
            a + "/"
        } else {
            return Err(AppCfgError {
                detail: None,
                code: AppErrorCode::MissingAppBasePath,
            });
        };
        let dashboard_cfg = if let Some(cfg_path) = env_var_map.remove(env_vars::CFG_FILEPATH) {
            let fullpath = app_basepath.clone() + &cfg_path;
            Self::parse_from_file(fullpath, limit)?
        } else {
            return Err(AppCfgError {
                detail: None,
                code: AppErrorCode::MissingConfigPath,
            });
        };
        Ok(Self {
            dashboard: dashboard_cfg,
            basepath: AppBasepathCfg {
                system: sys_basepath,
                service: app_basepath,
            },
        })
    } // end of new

    pub fn parse_from_file(
        filepath: String,
        limit: AppCfgHardLimit,
    ) -> DefaultResult<AppDashboardCfg, AppCfgError> {
        let fileobj = File::open(filepath).map_err(|e| AppCfgError {
            detail: Some(e.to_string()),
            code: AppErrorCode::IOerror(e.kind()),
        })?;
        let reader = BufReader::new(fileobj);
        let jsnobj = serde_json::from_reader::<BufReader<File>, AppDashboardCfg>(reader)
            .map_err(|e| AppCfgError {
                detail: Some(e.to_string()),
                code: AppErrorCode::InvalidJsonFormat,
            })?;
        Self::_check_logging(&jsnobj.logging)?;
        Self::_check_backend(&jsnobj.backend, &limit)?;
        Self::_check_datasource(&jsnobj.data_source, &limit)?;
        Ok(jsnobj)
    }

    fn _check_backend(
        obj: &AppBackendCfg,
        limit: &AppCfgHardLimit,
    ) -> DefaultResult<(), AppCfgError> {
        if obj.port == 0 {
            Err(AppCfgError {
                detail: Some(format!("backend-port, host:{}", obj.host)),
                code: AppErrorCode::InvalidBackendCfg,
            })
        } else if obj.list_limit == 0 {
            Err(AppCfgError {
                detail: Some("backend-list-limit".to_string()),
                code: AppErrorCode::InvalidBackendCfg,
            })
        } else if obj.list_limit > limit.max_list_limit {
            Err(AppCfgError {
                detail: Some(format!("limit:{}", limit.max_list_limit)),
                code: AppErrorCode::ExceedingMaxLimit,
            })
        } else {
            Ok(())
        }
    } // end of _check_backend

    fn _check_datasource(
        obj: &AppDataSourceCfg,
        limit: &AppCfgHardLimit,
    ) -> DefaultResult<(), AppCfgError> {
        match obj {
            AppDataSourceCfg::Mock {
                num_transactions,
                seed: _,
            } => {
                let lmt = limit.max_mock_transactions;
                if *num_transactions == 0 {
                    Err(AppCfgError {
                        detail: Some("mock-num-transactions".to_string()),
                        code: AppErrorCode::InvalidDataSourceCfg,
                    })
                } else if *num_transactions > lmt {
                    Err(AppCfgError {
                        detail: Some(format!("limit:{}", lmt)),
                        code: AppErrorCode::ExceedingMaxLimit,
                    })
                } else {
                    Ok(())
                }
            }
            AppDataSourceCfg::Fixture { path: _ } | AppDataSourceCfg::Backend => Ok(()),
        }
    } // end of _check_datasource

    fn _check_logging(obj: &AppLoggingCfg) -> DefaultResult<(), AppCfgError> {
        let mut filtered = obj.loggers.iter().filter(|item| item.handlers.is_empty());
        let mut filtered2 = obj.handlers.iter().filter(|item| match &item.destination {
            const_log::Destination::LOCALFS => item.path.is_none(),
            _other => false,
        }); // for file-type handler, the field `path` has to be provided
        let mut filtered3 = obj.handlers.iter().filter(|item| item.alias.is_empty());
        let mut filtered4 = obj.loggers.iter().filter(|item| item.alias.is_empty());
        if obj.handlers.is_empty() {
            Err(AppCfgError {
                detail: None,
                code: AppErrorCode::NoLogHandlerCfg,
            })
        } else if obj.loggers.is_empty() {
            Err(AppCfgError {
                detail: None,
                code: AppErrorCode::NoLoggerCfg,
            })
        } else if let Some(alogger) = filtered.next() {
            let msg = format!("the logger does not have handler: {}", alogger.alias);
            Err(AppCfgError {
                detail: Some(msg),
                code: AppErrorCode::NoHandlerInLoggerCfg,
            })
        } else if let Some(_hdlr) = filtered3.next() {
            Err(AppCfgError {
                detail: None,
                code: AppErrorCode::MissingAliasLogHdlerCfg,
            })
        } else if let Some(_logger) = filtered4.next() {
            Err(AppCfgError {
                detail: None,
                code: AppErrorCode::MissingAliasLoggerCfg,
            })
        } else if let Some(alogger) = filtered2.next() {
            let msg = format!("file-type handler does not contain path: {}", alogger.alias);
            Err(AppCfgError {
                detail: Some(msg),
                code: AppErrorCode::InvalidHandlerLoggerCfg,
            })
        } else {
            let iter = obj.handlers.iter().map(|i| i.alias.as_str());
            let hdlr_alias_map: HashSet<&str> = HashSet::from_iter(iter);
            let mut filtered = obj.loggers.iter().filter(|item| {
                item.handlers
                    .iter()
                    .any(|i| !hdlr_alias_map.contains(i.as_str()))
            }); // handler alias in each logger has to be present
            if let Some(alogger) = filtered.next() {
                let msg = format!(
                    "the logger contains invalid handler alias: {}",
                    alogger.alias
                );
                Err(AppCfgError {
                    detail: Some(msg),
                    code: AppErrorCode::InvalidHandlerLoggerCfg,
                })
            } else {
                Ok(())
            }
        }
    } // end of _check_logging
} // end of impl AppConfig

struct ExpectNonEmptyString {
    min_len: u32,
}

impl Expected for ExpectNonEmptyString {
    fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        let msg = format!("minimum string length >= {}", self.min_len);
        formatter.write_str(msg.as_str())
    }
}

fn jsn_deny_empty_string<'de, D>(raw: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(raw)?;
    if s.is_empty() {
        let exp = ExpectNonEmptyString { min_len: 1 };
        Err(DeserializeError::invalid_length(s.len(), &exp))
    } else {
        Ok(s)
    }
}
