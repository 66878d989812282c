// Application constants

/// Handle name of the main toolbar element
pub const HWND_MAIN_TOOLBAR: &str = "hwndMainToolbar";

/// Width the indicator's scale factor is expressed against
pub const INDICATOR_INTRINSIC_WIDTH: f64 = 100.0;

/// Environment variable naming the log file
pub const LOG_FILE_ENV: &str = "SUPER_TABS_LOG";

/// Cells a horizontal wheel step scrolls the toolbar by
pub const SCROLL_STEP: u16 = 2;
