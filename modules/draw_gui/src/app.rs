use macroquad::prelude::*;

use draw_core::{CountdownTimer, DrawConfig, MinuteFile, TickOutput};

use crate::input::{Action, InputHandler};
use crate::settings::TICK_SECONDS;
use crate::ui::{Renderer, ScreenLayout};

/// 应用层：编排引擎步进、副作用（分钟文件）、渲染
pub struct App {
    timer: CountdownTimer,
    minute_file: Option<MinuteFile>,
    zero_message: String,
    max_message: String,
    latest: TickOutput,
    tick_accum: f32,
    fullscreen: bool,
}

impl App {
    pub fn new(config: &DrawConfig, fullscreen: bool) -> Self {
        let mut timer = CountdownTimer::new(config);
        // 启动即走一拍，首帧直接显示配置的初始值（含已投的石壶）
        let latest = timer.tick();
        Self {
            timer,
            minute_file: config.elapsed_min_out_file.clone().map(MinuteFile::new),
            zero_message: config.zero_message.clone(),
            max_message: config.max_message.clone(),
            latest,
            tick_accum: 0.0,
            fullscreen,
        }
    }

    /// 每帧调用：处理输入 → 固定步长更新 → 渲染。返回 false 表示退出
    pub fn tick(&mut self) -> bool {
        for action in InputHandler::poll() {
            match action {
                Action::Quit => return false,
                Action::ToggleFullscreen => {
                    self.fullscreen = !self.fullscreen;
                    set_fullscreen(self.fullscreen);
                }
            }
        }

        self.update(get_frame_time());
        self.render();
        true
    }

    // ─────────────────────────────────────────────────────
    // 逻辑更新：积累真实帧时间，每满一秒走一拍
    // ─────────────────────────────────────────────────────
    fn update(&mut self, dt: f32) {
        self.tick_accum += dt;
        while self.tick_accum >= TICK_SECONDS {
            self.tick_accum -= TICK_SECONDS;
            self.latest = self.timer.tick();
            self.export_minute();
        }
    }

    fn export_minute(&mut self) {
        let (Some(file), Some(minute)) = (self.minute_file.as_ref(), self.latest.elapsed_min)
        else {
            return;
        };
        if let Err(err) = file.write(minute) {
            log::warn!(
                "failed to write elapsed minutes to {}: {err}",
                file.path().display()
            );
        }
    }

    // ─────────────────────────────────────────────────────
    // 渲染
    // ─────────────────────────────────────────────────────
    fn render(&self) {
        let layout = ScreenLayout::compute(
            screen_width(),
            screen_height(),
            self.timer.progress().total_ends(),
            self.timer.pacing().num_stones(),
        );

        Renderer::draw_frame(
            &layout,
            &self.latest,
            self.timer.progress(),
            self.timer.pacing(),
            &self.zero_message,
            &self.max_message,
        );
    }
}
