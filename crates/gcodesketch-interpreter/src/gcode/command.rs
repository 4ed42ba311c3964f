//! G-Code command types

use gcodesketch_core::Point3D;
use serde::{Deserialize, Serialize};

/// Motion mode selected by the G word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// G0, non-cutting repositioning
    Rapid,
    /// G1, straight cut
    Linear,
    /// G2, clockwise arc
    ArcClockwise,
    /// G3, counter-clockwise arc
    ArcCounterClockwise,
}

impl MoveKind {
    /// Map a G word value to a motion mode
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::Rapid),
            1 => Some(Self::Linear),
            2 => Some(Self::ArcClockwise),
            3 => Some(Self::ArcCounterClockwise),
            _ => None,
        }
    }

    /// The G word value for this motion mode
    pub fn code(&self) -> u32 {
        match self {
            Self::Rapid => 0,
            Self::Linear => 1,
            Self::ArcClockwise => 2,
            Self::ArcCounterClockwise => 3,
        }
    }

    /// True for G2 and G3
    pub fn is_arc(&self) -> bool {
        matches!(self, Self::ArcClockwise | Self::ArcCounterClockwise)
    }

    /// True for every mode except G0
    pub fn is_cutting(&self) -> bool {
        !matches!(self, Self::Rapid)
    }
}

impl std::fmt::Display for MoveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "G{}", self.code())
    }
}

/// One validated motion command
///
/// `radius` is present for arcs only; `feed_rate` is carried along for
/// export and has no effect on the generated geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Command {
    /// Motion mode
    pub kind: MoveKind,
    /// Absolute end point of the move
    pub target: Point3D,
    /// Arc radius (G2/G3 only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    /// Feed rate word, if one was given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed_rate: Option<f64>,
}

impl Command {
    /// G0 to `target`
    pub fn rapid(target: Point3D) -> Self {
        Self {
            kind: MoveKind::Rapid,
            target,
            radius: None,
            feed_rate: None,
        }
    }

    /// G1 to `target`
    pub fn linear(target: Point3D) -> Self {
        Self {
            kind: MoveKind::Linear,
            target,
            radius: None,
            feed_rate: None,
        }
    }

    /// G2 or G3 to `target` with the given radius
    pub fn arc(target: Point3D, radius: f64, clockwise: bool) -> Self {
        Self {
            kind: if clockwise {
                MoveKind::ArcClockwise
            } else {
                MoveKind::ArcCounterClockwise
            },
            target,
            radius: Some(radius),
            feed_rate: None,
        }
    }

    /// Attach a feed rate word
    pub fn with_feed_rate(mut self, feed_rate: f64) -> Self {
        self.feed_rate = Some(feed_rate);
        self
    }
}

impl std::fmt::Display for Command {
    /// Canonical line form, e.g. `G2 X10 Y0 Z0 R5 F100`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} X{} Y{} Z{}",
            self.kind, self.target.x, self.target.y, self.target.z
        )?;
        if self.kind.is_arc() {
            if let Some(radius) = self.radius {
                write!(f, " R{}", radius)?;
            }
        }
        if let Some(feed) = self.feed_rate {
            write!(f, " F{}", feed)?;
        }
        Ok(())
    }
}
