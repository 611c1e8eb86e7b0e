// ABOUTME: Shared constants for Peachy Task
// ABOUTME: Label color palette and default request limits

/// Preset label colors offered by the UI; also the source of the default.
pub const COLOR_PALETTE: [&str; 4] = [
    "#f97316", // orange
    "#ec4899", // pink
    "#dc2626", // red
    "#f59e0b", // amber
];

/// Default number of tasks requested from the server per list call.
pub const DEFAULT_TASK_LIMIT: usize = 50;

/// Color assigned to a label created without an explicit color.
pub fn default_label_color() -> &'static str {
    COLOR_PALETTE[0]
}
