//! Board renderers.
use std::io::{self, Write};
use std::str::FromStr;

use tracing::warn;

use crate::error::{ConfigError, ConfigErrorKind};
use crate::tic_tac_toe::Board;

/// Something that observes the board after every move. Renderers only read the board.
pub trait Renderer {
    fn render_board(&mut self, board: &Board);
}

/// Renders nothing, for silent batch runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct VoidRenderer;

impl Renderer for VoidRenderer {
    fn render_board(&mut self, _board: &Board) {}
}

/// Writes the board as text, one labelled line per row.
#[derive(Debug)]
pub struct ConsoleRenderer<W: Write = io::Stdout> {
    out: W,
}

impl ConsoleRenderer {
    pub fn new() -> ConsoleRenderer {
        ConsoleRenderer { out: io::stdout() }
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn with_writer(out: W) -> ConsoleRenderer<W> {
        ConsoleRenderer { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn render_board(&mut self, board: &Board) {
        if let Err(err) = writeln!(self.out, "{}", board).and_then(|_| self.out.flush()) {
            warn!(%err, "failed to render board");
        }
    }
}

/// Renderer selected by name on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RendererKind {
    Console,
    Void,
}

impl FromStr for RendererKind {
    type Err = ConfigError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key.to_lowercase().as_str() {
            "console" => Ok(RendererKind::Console),
            "void" => Ok(RendererKind::Void),
            _ => Err(ConfigError::new(ConfigErrorKind::UnknownRenderer(
                key.to_string(),
            ))),
        }
    }
}

impl RendererKind {
    pub fn build(self) -> Box<dyn Renderer> {
        match self {
            RendererKind::Console => Box::new(ConsoleRenderer::new()),
            RendererKind::Void => Box::new(VoidRenderer),
        }
    }
}
