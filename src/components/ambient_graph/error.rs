use super::raf::RafError;

/// Reasons the background could not be attached to a canvas.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SurfaceError {
	#[error("window is not available")]
	WindowUnavailable,

	#[error("viewport size is not available")]
	Viewport,

	#[error("canvas 2d context is not available: {0}")]
	ContextUnavailable(String),

	#[error("failed to size canvas: {0}")]
	Style(String),

	#[error("failed to register resize listener: {0}")]
	Listener(String),

	#[error(transparent)]
	Loop(#[from] RafError),
}
