use thiserror::Error;

/// Reasons a particle field cannot attach to its canvas. None of these reach
/// the page; the component logs them and stays blank.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceError {
	#[error("no browser window available")]
	NoWindow,
	#[error("canvas refused to create a 2d context")]
	ContextRejected,
	#[error("canvas has no 2d context")]
	NoContext,
	#[error("context is not a CanvasRenderingContext2d")]
	NotCanvas2d,
}
