pub mod environment;
pub mod format;
pub mod terminal;

pub use environment::get_data_dir;
pub use format::{format_baths, format_price, format_thousands, format_timestamp, parse_amount};
pub use terminal::{sanitize, single_line};
