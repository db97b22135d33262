pub mod data_loading;
pub mod navigation;
pub mod search;
pub mod toasts;

pub use data_loading::reduce_data_loading;
pub use navigation::reduce_navigation;
pub use search::reduce_search;
pub use toasts::reduce_toasts;
