use std::collections::HashMap;
use std::env;
use std::result::Result;
use std::sync::Arc;

use chrono::Local;
use clap::Parser;
use num_format::{Locale, ToFormattedString};
use tokio::runtime::Builder;

use wms_common::config::{AppCfgInitArgs, AppConfig};
use wms_common::constant::env_vars::EXPECTED_LABELS;
use wms_common::logging::{app_log_event, AppLogContext, AppLogLevel};

use inventory::api::cli::{
    render_metrics, render_recent, render_remote_summary, render_stock, render_transactions,
    DashboardCli, DashboardCmd, DashboardTab, RecordArgs, ViewArgs,
};
use inventory::api::dto::StockMetricsDto;
use inventory::auth::AppAuthSession;
use inventory::model::TransactionFilterModel;
use inventory::usecase::{DashboardViewUseCase, EditTransactionUseCase, RemoteSummaryUseCase};
use inventory::{hard_limit, AppSharedState};

async fn run_view(
    shr_state: &AppSharedState,
    args: ViewArgs,
    session: Option<&AppAuthSession>,
) -> Result<(), String> {
    let filter = TransactionFilterModel::try_from(&args).map_err(|e| e.to_string())?;
    let uc = DashboardViewUseCase {
        source: shr_state.transaction_source(session),
        num_recent: shr_state.config().dashboard.presentation.num_recent,
        logctx: shr_state.log_context(),
    };
    let view = uc.execute(filter).await.map_err(|e| format!("{:?}", e))?;
    match args.tab {
        DashboardTab::Dashboard => {
            println!("{}", render_metrics(&view.metrics));
            println!("Recent Transactions");
            println!("{}", render_recent(&view.recent));
        }
        DashboardTab::Transactions => {
            if view.filtered.is_empty() {
                println!("No transactions found matching your filters");
            } else {
                println!("{}", render_transactions(&view.filtered));
            }
        }
        DashboardTab::Stock => {
            println!(
                "Current Inventory: {} unique items, {} total units",
                view.stock.len(),
                view.metrics.total_stock.to_formatted_string(&Locale::en)
            );
            println!("{}", render_stock(&view.stock));
        }
    }
    Ok(())
}

async fn run_remote(
    shr_state: &AppSharedState,
    session: Option<&AppAuthSession>,
) -> Result<(), String> {
    let cfg = shr_state.config();
    let uc = RemoteSummaryUseCase {
        backend: shr_state.backend(),
        list_limit: cfg.dashboard.backend.list_limit,
        low_stock_threshold: cfg.dashboard.presentation.low_stock_threshold,
        session,
    };
    let (data, metrics) = uc.execute().await.map_err(|e| format!("{:?}", e))?;
    let metrics = StockMetricsDto::from(metrics);
    println!("{}", render_remote_summary(&data, &metrics));
    Ok(())
}

async fn run_record(
    shr_state: &AppSharedState,
    args: RecordArgs,
    session: Option<&AppAuthSession>,
) -> Result<(), String> {
    let today = Local::now().date_naive();
    let (direction, req) = args.into_request(today).map_err(|e| e.to_string())?;
    let uc = EditTransactionUseCase {
        backend: shr_state.backend(),
        session,
    };
    let saved = uc
        .create(direction, req)
        .await
        .map_err(|e| format!("{:?}", e))?;
    println!("{}", render_transactions(&[saved]));
    Ok(())
}

async fn start_dashboard(shr_state: AppSharedState, cli: DashboardCli) -> Result<(), ()> {
    let logctx = shr_state.log_context();
    let backend = shr_state.backend();
    let session = if let Some(cred) = cli.credential() {
        let s = backend.user().login(&cred).await.map_err(|e| {
            app_log_event!(logctx, AppLogLevel::ERROR, "login failure, {}", e);
        })?;
        Some(s)
    } else {
        None
    };
    let cmd = cli
        .command
        .unwrap_or_else(|| DashboardCmd::View(ViewArgs::default()));
    let result = match cmd {
        DashboardCmd::View(args) => run_view(&shr_state, args, session.as_ref()).await,
        DashboardCmd::Remote => run_remote(&shr_state, session.as_ref()).await,
        DashboardCmd::Record(args) => run_record(&shr_state, args, session.as_ref()).await,
    };
    if let Some(s) = session {
        if let Err(e) = backend.user().logout(s).await {
            app_log_event!(logctx, AppLogLevel::WARNING, "logout failure, {}", e);
        }
    }
    result.map_err(|detail| {
        report_failure(&logctx, detail.as_str());
    })
}

fn report_failure(logctx: &Arc<AppLogContext>, detail: &str) {
    app_log_event!(logctx, AppLogLevel::ERROR, "{}", detail);
    eprintln!("[ERROR] {}", detail);
}

fn init_config() -> Result<AppConfig, ()> {
    let iter = env::vars().filter(|(k, _v)| EXPECTED_LABELS.contains(&k.as_str()));
    let env_var_map = HashMap::from_iter(iter);
    let args = AppCfgInitArgs {
        env_var_map,
        limit: hard_limit(),
    };
    AppConfig::new(args).map_err(|e| {
        println!(
            "[ERROR] config failure, code:{:?}, detail:{:?}",
            e.code, e.detail
        );
    })
}

fn main() -> Result<(), ()> {
    let cli = DashboardCli::parse();
    let cfg = init_config()?;
    let shr_state = AppSharedState::new(cfg).map_err(|e| {
        println!("[ERROR] shared state init failure, {:?}", e);
    })?;
    let cfg = shr_state.config();
    let logctx = shr_state.log_context();
    let stack_nbytes = (cfg.dashboard.stack_sz_kb as usize) << 10;
    let runtime = Builder::new_current_thread()
        .thread_stack_size(stack_nbytes)
        .thread_name("inventory-dashboard")
        .enable_io()
        .build()
        .map_err(|e| {
            app_log_event!(logctx, AppLogLevel::ERROR, "{:?}", e);
        })?;
    runtime.block_on(async move { start_dashboard(shr_state, cli).await })
} // end of fn main
