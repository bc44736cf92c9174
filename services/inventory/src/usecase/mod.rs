mod dashboard;
mod edit_transaction;
mod remote_summary;

pub use dashboard::{DashboardViewModel, DashboardViewUcError, DashboardViewUseCase};
pub use edit_transaction::{EditTransactionUcError, EditTransactionUseCase};
pub use remote_summary::{RemoteSummaryUcError, RemoteSummaryUseCase};
