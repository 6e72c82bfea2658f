#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod palette;
pub mod panels;
pub mod renderer;
pub mod session;
pub mod stroke;
pub mod style;

pub use app::DoodlerApp;
pub use config::Config;
pub use error::{ConfigError, SessionError};
pub use input::{InputController, InputEvent, InputHandler};
pub use renderer::Renderer;
pub use session::DrawingSession;
pub use stroke::{MutableStroke, Stroke, StrokeRef};
pub use style::{Color, PaletteColor, StrokeStyle, StyleUpdate};
