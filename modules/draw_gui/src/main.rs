//! Draw Timer GUI - 冰壶计时大屏
//!
//! 模块结构:
//! - app: 应用层编排（引擎步进 + 副作用 + 渲染）
//! - input: 键盘事件翻译
//! - settings: 显示常量
//! - ui: 布局计算与渲染

mod app;
mod input;
mod settings;
mod ui;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use macroquad::prelude::*;

use draw_core::DrawConfig;
use settings::{WINDOW_HEIGHT, WINDOW_WIDTH};

#[derive(Parser)]
#[command(version, about = "Full-screen curling draw timer")]
struct Args {
    /// Path to the YAML config file
    config_file: PathBuf,

    /// Start in a window instead of fullscreen (development)
    #[arg(long)]
    windowed: bool,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Draw Timer".to_owned(),
        window_width: WINDOW_WIDTH as i32,
        window_height: WINDOW_HEIGHT as i32,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = match DrawConfig::load(&args.config_file) {
        Ok(config) => config,
        Err(err) => {
            log::error!("failed to load config: {err:#}");
            process::exit(1);
        }
    };
    log::info!(
        "draw timer: {} ends x {} min/end, {} stones, countdown {} min",
        config.total_ends,
        config.min_per_end,
        config.num_stones,
        config.countdown_min,
    );

    let fullscreen = !args.windowed;
    if fullscreen {
        set_fullscreen(true);
    }

    let mut app = app::App::new(&config, fullscreen);
    loop {
        if !app.tick() {
            break;
        }
        next_frame().await;
    }
}
