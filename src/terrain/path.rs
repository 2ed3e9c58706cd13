use std::fmt::Write;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A single drawing instruction in viewport pixel space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo(Vec2),
    LineTo(Vec2),
    CubicTo { c1: Vec2, c2: Vec2, to: Vec2 },
    Close,
}

/// Closed silhouette outline made of move/line/cubic commands
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClosedPath {
    commands: Vec<PathCommand>,
}

impl ClosedPath {
    pub fn builder(start: Vec2) -> PathBuilder {
        PathBuilder {
            commands: vec![PathCommand::MoveTo(start)],
        }
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// First point of the outline
    pub fn start(&self) -> Option<Vec2> {
        match self.commands.first() {
            Some(PathCommand::MoveTo(p)) => Some(*p),
            _ => None,
        }
    }

    /// Last explicit point before the path closes
    pub fn end(&self) -> Option<Vec2> {
        self.commands.iter().rev().find_map(|cmd| match cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
            PathCommand::CubicTo { to, .. } => Some(*to),
            PathCommand::Close => None,
        })
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// Render as SVG path data with two decimals per coordinate
    pub fn to_svg(&self) -> String {
        let mut out = String::with_capacity(self.commands.len() * 24);
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            // Writing into a String cannot fail
            let _ = match cmd {
                PathCommand::MoveTo(p) => write!(out, "M {:.2} {:.2}", p.x, p.y),
                PathCommand::LineTo(p) => write!(out, "L {:.2} {:.2}", p.x, p.y),
                PathCommand::CubicTo { c1, c2, to } => write!(
                    out,
                    "C {:.2} {:.2}, {:.2} {:.2}, {:.2} {:.2}",
                    c1.x, c1.y, c2.x, c2.y, to.x, to.y
                ),
                PathCommand::Close => write!(out, "Z"),
            };
        }
        out
    }
}

/// Accumulates commands until the outline is closed
#[derive(Debug)]
pub struct PathBuilder {
    commands: Vec<PathCommand>,
}

impl PathBuilder {
    pub fn line_to(mut self, to: Vec2) -> Self {
        self.commands.push(PathCommand::LineTo(to));
        self
    }

    pub fn cubic_to(mut self, c1: Vec2, c2: Vec2, to: Vec2) -> Self {
        self.commands.push(PathCommand::CubicTo { c1, c2, to });
        self
    }

    pub fn close(mut self) -> ClosedPath {
        self.commands.push(PathCommand::Close);
        ClosedPath {
            commands: self.commands,
        }
    }
}
