use crate::settings::{
    PROGRESS_SEG_GAP, PROGRESS_SEG_HEIGHT, PROGRESS_SEG_WIDTH, STONE_DIAMETER, STONE_GRID_GAP,
    WINDOW_HEIGHT, WINDOW_WIDTH,
};

/// 整屏布局信息（按参考分辨率等比缩放）
pub struct ScreenLayout {
    pub screen_w: f32,
    pub screen_h: f32,
    pub scale: f32,
    progress_origin_x: f32,
    progress_y: f32,
    seg_w: f32,
    seg_h: f32,
    seg_gap: f32,
    stones_origin_x: f32,
    stones_y: f32,
    stone_cell: f32,
    stone_cols: usize,
}

impl ScreenLayout {
    pub fn compute(screen_w: f32, screen_h: f32, total_ends: usize, num_stones: usize) -> Self {
        let scale = (screen_w / WINDOW_WIDTH).min(screen_h / WINDOW_HEIGHT);

        let seg_w = PROGRESS_SEG_WIDTH * scale;
        let seg_h = PROGRESS_SEG_HEIGHT * scale;
        let seg_gap = PROGRESS_SEG_GAP * scale;
        let row_w = total_ends as f32 * seg_w + total_ends.saturating_sub(1) as f32 * seg_gap;

        let stone_cols = (num_stones / 2).max(1);
        let stone_cell = (STONE_DIAMETER + STONE_GRID_GAP) * scale;
        let grid_w = stone_cols as f32 * stone_cell;

        Self {
            screen_w,
            screen_h,
            scale,
            progress_origin_x: (screen_w - row_w) * 0.5,
            progress_y: screen_h * 0.56,
            seg_w,
            seg_h,
            seg_gap,
            stones_origin_x: (screen_w - grid_w) * 0.5,
            stones_y: screen_h * 0.70,
            stone_cell,
            stone_cols,
        }
    }

    /// 时钟中心点（屏幕上半部）
    pub fn clock_center(&self) -> (f32, f32) {
        (self.screen_w * 0.5, self.screen_h * 0.30)
    }

    /// 横幅中心点（零点横幅与封顶横幅共用）
    pub fn banner_center(&self) -> (f32, f32) {
        (self.screen_w * 0.5, self.screen_h * 0.58)
    }

    /// 第 end 块进度段的矩形 (x, y, w, h)
    pub fn segment_rect(&self, end: usize) -> (f32, f32, f32, f32) {
        let x = self.progress_origin_x + end as f32 * (self.seg_w + self.seg_gap);
        (x, self.progress_y, self.seg_w, self.seg_h)
    }

    /// 第 slot 格石壶的中心点（上下两行，每队一行）
    pub fn stone_center(&self, slot: usize) -> (f32, f32) {
        let col = slot % self.stone_cols;
        let row = slot / self.stone_cols;
        (
            self.stones_origin_x + (col as f32 + 0.5) * self.stone_cell,
            self.stones_y + (row as f32 + 0.5) * self.stone_cell,
        )
    }

    pub fn stone_radius(&self) -> f32 {
        STONE_DIAMETER * 0.5 * self.scale
    }

    pub fn stone_cols(&self) -> usize {
        self.stone_cols
    }
}
