use macroquad::prelude::*;

/// 用户意图（从按键翻译而来）
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    Quit,
    ToggleFullscreen,
}

/// 输入处理器：把键盘事件翻译成 Action
pub struct InputHandler;

impl InputHandler {
    /// 检测本帧按键，返回动作列表
    pub fn poll() -> Vec<Action> {
        let mut actions = Vec::new();

        if is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q) {
            actions.push(Action::Quit);
        }
        if is_key_pressed(KeyCode::F) {
            actions.push(Action::ToggleFullscreen);
        }

        actions
    }
}
