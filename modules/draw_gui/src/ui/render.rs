use macroquad::prelude::*;

use draw_core::{ColorBand, DisplayPhase, EndProgress, StonePacing, TickOutput};

use super::layout::ScreenLayout;
use crate::settings::{BANNER_FONT, CLOCK_FONT, CLOCK_FONT_OVERTIME, SEGMENT_FONT};

/// 渲染上下文，负责所有绘制操作
pub struct Renderer;

impl Renderer {
    // ─────────────────────────────────────────────────────
    // 颜色常量
    // ─────────────────────────────────────────────────────
    const BG_NORMAL: Color = Color::new(0.6, 1.0, 0.6, 1.0);         // 99FF99
    const BG_WARNING: Color = Color::new(1.0, 1.0, 0.0, 1.0);        // FFFF00
    const BG_EXPIRED: Color = Color::new(1.0, 0.0, 0.0, 1.0);        // FF0000
    const CLOCK_FG: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    const CLOCK_OVERTIME_FG: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    const BANNER_FG: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    const SEG_DONE: Color = Color::new(0.6, 0.6, 0.6, 1.0);          // 灰色已完成
    const SEG_TODO: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    const SEG_BORDER: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    const SEG_TEXT: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    const STONE_BODY: Color = Color::new(0.42, 0.44, 0.47, 1.0);     // 花岗岩
    const STONE_BELT: Color = Color::new(0.80, 0.81, 0.83, 1.0);
    const HANDLE_TEAM_A: Color = Color::new(0.85, 0.12, 0.12, 1.0);
    const HANDLE_TEAM_B: Color = Color::new(0.95, 0.80, 0.10, 1.0);
    const STONE_THROWN_DIM: Color = Color::new(0.0, 0.0, 0.0, 0.55);

    // ─────────────────────────────────────────────────────
    // 整体绘制入口
    // ─────────────────────────────────────────────────────
    pub fn draw_frame(
        layout: &ScreenLayout,
        out: &TickOutput,
        progress: &EndProgress,
        pacing: &StonePacing,
        zero_message: &str,
        max_message: &str,
    ) {
        clear_background(match out.band {
            ColorBand::Normal => Self::BG_NORMAL,
            ColorBand::Warning => Self::BG_WARNING,
            ColorBand::Expired => Self::BG_EXPIRED,
        });

        match out.phase {
            DisplayPhase::Capped => {
                Self::draw_banner(layout, max_message);
            }
            DisplayPhase::Expired => {
                Self::draw_clock(layout, out);
                Self::draw_banner(layout, zero_message);
            }
            DisplayPhase::Running => {
                Self::draw_clock(layout, out);
                Self::draw_progress(layout, progress);
            }
        }

        // 石壶在倒计时归零前一直显示（包括提前封顶的情形）
        if out.stones_visible {
            Self::draw_stones(layout, out.stone_index, pacing);
        }
    }

    // ─────────────────────────────────────────────────────
    // 时钟
    // ─────────────────────────────────────────────────────
    fn draw_clock(layout: &ScreenLayout, out: &TickOutput) {
        let text = out.clock.to_string();
        let (font_px, color) = if out.clock.overtime {
            (CLOCK_FONT_OVERTIME, Self::CLOCK_OVERTIME_FG)
        } else {
            (CLOCK_FONT, Self::CLOCK_FG)
        };
        let font_px = (font_px * layout.scale).max(16.0) as u16;
        let dims = measure_text(&text, None, font_px, 1.0);
        let (cx, cy) = layout.clock_center();
        draw_text(
            &text,
            cx - dims.width * 0.5,
            cy + dims.offset_y * 0.5,
            font_px as f32,
            color,
        );
    }

    // ─────────────────────────────────────────────────────
    // 横幅（零点 / 封顶共用）
    // ─────────────────────────────────────────────────────
    fn draw_banner(layout: &ScreenLayout, message: &str) {
        let font_px = (BANNER_FONT * layout.scale).max(16.0) as u16;
        let dims = measure_text(message, None, font_px, 1.0);
        let (cx, cy) = layout.banner_center();
        draw_text(
            message,
            cx - dims.width * 0.5,
            cy + dims.offset_y * 0.5,
            font_px as f32,
            Self::BANNER_FG,
        );
    }

    // ─────────────────────────────────────────────────────
    // 进度条：每局一段，灰色填充 + 黑色描边 + 局号
    // ─────────────────────────────────────────────────────
    fn draw_progress(layout: &ScreenLayout, progress: &EndProgress) {
        for end in 0..progress.total_ends() {
            let (x, y, w, h) = layout.segment_rect(end);
            let fill_w = w * progress.fill(end) as f32 / 100.0;

            draw_rectangle(x, y, w, h, Self::SEG_TODO);
            draw_rectangle(x, y, fill_w, h, Self::SEG_DONE);
            draw_rectangle_lines(x, y, w, h, 4.0 * layout.scale, Self::SEG_BORDER);

            let label = format!("{}", end + 1);
            let font_px = (SEGMENT_FONT * layout.scale).max(12.0) as u16;
            let dims = measure_text(&label, None, font_px, 1.0);
            draw_text(
                &label,
                x + (w - dims.width) * 0.5,
                y + (h + dims.offset_y) * 0.5,
                font_px as f32,
                Self::SEG_TEXT,
            );
        }
    }

    // ─────────────────────────────────────────────────────
    // 石壶：矢量绘制（壶身 + 握柄），已投掷的压暗
    // ─────────────────────────────────────────────────────
    fn draw_stones(layout: &ScreenLayout, stone_index: usize, pacing: &StonePacing) {
        let mut thrown = vec![false; pacing.num_stones()];
        for slot in pacing.thrown_slots(stone_index) {
            thrown[slot] = true;
        }

        for slot in 0..pacing.num_stones() {
            let (x, y) = layout.stone_center(slot);
            let r = layout.stone_radius();
            let team_b = slot / layout.stone_cols() == 1;
            let handle = if team_b {
                Self::HANDLE_TEAM_B
            } else {
                Self::HANDLE_TEAM_A
            };

            draw_circle(x, y, r, Self::STONE_BODY);
            draw_circle(x, y, r * 0.72, Self::STONE_BELT);
            draw_circle(x, y, r * 0.45, handle);
            draw_rectangle(x - r * 0.5, y - r * 0.1, r, r * 0.2, handle);

            if thrown[slot] {
                draw_circle(x, y, r, Self::STONE_THROWN_DIM);
            }
        }
    }
}
