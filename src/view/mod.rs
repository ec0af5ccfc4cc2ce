pub mod figure;
pub mod options;
pub mod palette;
pub mod reducer;
pub mod toggle;

pub use figure::FigureSpec;
pub use reducer::{ViewState, compute_view};
pub use toggle::toggle_table;
