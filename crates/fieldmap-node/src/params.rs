//! Field parameter readers.
//!
//! Parameters arrive either as whitespace-separated integers (typed at a
//! prompt or piped in) or as a JSON [`FieldSpec`]. The integer order is:
//! `X Y`, `Sx Sy`, `Fx Fy`, the obstacle count `p`, then `p` groups of
//! `x1 y1 x2 y2`.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::path::Path;

use fieldmap_core::{FieldSpec, Obstacle, Point};

use crate::error::ParamsError;

/// Pulls integer tokens from a line-oriented reader, one line at a time,
/// so prompts interleave with interactive input.
pub struct TokenReader<R, W> {
    input: R,
    prompts: Option<W>,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> TokenReader<R, W> {
    /// Read from `input`, writing prompts to `prompts` when given.
    pub fn new(input: R, prompts: Option<W>) -> Self {
        Self {
            input,
            prompts,
            pending: VecDeque::new(),
        }
    }

    /// Show `text` if prompting is enabled.
    pub fn prompt(&mut self, text: &str) -> Result<(), ParamsError> {
        if let Some(out) = self.prompts.as_mut() {
            out.write_all(text.as_bytes())?;
            out.flush()?;
        }
        Ok(())
    }

    /// Next integer token; `what` names it in errors.
    pub fn next_int(&mut self, what: &'static str) -> Result<i32, ParamsError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ParamsError::MissingValue { what });
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        let token = self.pending.pop_front().unwrap_or_default();
        token
            .parse()
            .map_err(|_| ParamsError::NotAnInteger { what, token })
    }

    fn next_point(&mut self, what: &'static str) -> Result<Point, ParamsError> {
        let x = self.next_int(what)?;
        let y = self.next_int(what)?;
        Ok(Point::new(x, y))
    }

    /// Read a complete field description.
    pub fn read_field_spec(&mut self) -> Result<FieldSpec, ParamsError> {
        self.prompt("Enter field size (X Y): ")?;
        let width = self.next_int("field width")?;
        let height = self.next_int("field height")?;
        if width <= 0 || height <= 0 {
            return Err(ParamsError::BadDimensions { width, height });
        }

        self.prompt("Enter start point S (x y): ")?;
        let start = self.next_point("start coordinate")?;

        self.prompt("Enter finish point F (x y): ")?;
        let finish = self.next_point("finish coordinate")?;

        self.prompt("Enter number of obstacles: ")?;
        let count = self.next_int("obstacle count")?;
        if count < 0 {
            return Err(ParamsError::NegativeCount(count));
        }

        let mut spec = FieldSpec::new(width, height, start, finish);
        for i in 1..=count {
            self.prompt(&format!(
                "Enter diagonal corners of obstacle {i} (x1 y1 x2 y2): "
            ))?;
            let a = self.next_point("obstacle corner")?;
            let b = self.next_point("obstacle corner")?;
            spec.obstacles.push(Obstacle { a, b });
        }
        Ok(spec)
    }
}

/// Parse a JSON field description.
pub fn field_spec_from_json(text: &str) -> Result<FieldSpec, ParamsError> {
    let spec: FieldSpec = serde_json::from_str(text)?;
    if spec.width <= 0 || spec.height <= 0 {
        return Err(ParamsError::BadDimensions {
            width: spec.width,
            height: spec.height,
        });
    }
    Ok(spec)
}

/// Load a JSON field description from a file.
pub fn load_field_spec(path: impl AsRef<Path>) -> Result<FieldSpec, ParamsError> {
    let text = std::fs::read_to_string(path)?;
    field_spec_from_json(&text)
}
