use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("pixels surface error: {0}")]
    Pixels(#[from] pixels::Error),
    #[error("failed to resize framebuffer: {0}")]
    Texture(#[from] pixels::TextureError),
}
