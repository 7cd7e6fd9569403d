// 参考分辨率：布局与字号按 min(w/1920, h/1080) 等比缩放
pub const WINDOW_WIDTH: f32 = 1920.0;
pub const WINDOW_HEIGHT: f32 = 1080.0;

// 引擎步进间隔（秒）
pub const TICK_SECONDS: f32 = 1.0;

// 字号（参考分辨率下的像素值）
pub const CLOCK_FONT: f32 = 440.0;
pub const CLOCK_FONT_OVERTIME: f32 = 350.0;
pub const BANNER_FONT: f32 = 150.0;
pub const SEGMENT_FONT: f32 = 56.0;

// 进度条与石壶尺寸（与原版资源宽度一致）
pub const PROGRESS_SEG_WIDTH: f32 = 175.0;
pub const PROGRESS_SEG_HEIGHT: f32 = 90.0;
pub const PROGRESS_SEG_GAP: f32 = 6.0;
pub const STONE_DIAMETER: f32 = 150.0;
pub const STONE_GRID_GAP: f32 = 12.0;
