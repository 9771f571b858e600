pub mod filter;
pub mod selection;
pub mod store;
pub mod view;

pub use filter::{records_on_day, records_on_local_day};
pub use selection::SelectionSet;
pub use store::{load_history, HISTORY_LIMIT};
pub use view::HistoryView;
