pub mod codec;
pub mod history;

pub use history::FileHistoryStore;
