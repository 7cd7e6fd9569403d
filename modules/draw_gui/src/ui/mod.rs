mod layout;
mod render;

pub use layout::ScreenLayout;
pub use render::Renderer;
