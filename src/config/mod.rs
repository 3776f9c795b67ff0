pub mod load;
pub mod types;

pub use types::{
    CaptureLayout, Config, DATE_TIME_ORIGINAL_TAG, MONTH_LENGTH, MONTH_START, PROGRESS_INTERVAL,
    YEAR_LENGTH, YEAR_START,
};
