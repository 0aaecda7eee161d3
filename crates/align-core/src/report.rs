// File: crates/align-core/src/report.rs
// Summary: Plain-text summary of a comparison (coordinates, per-corner deltas, rotation).

use std::fmt;

use crate::compare::Comparison;
use crate::geometry::Corner;

/// Report text split into the sections the figure lays out side by side.
///
/// Corner labels are applied by input position. A measured point that was
/// supplied in the wrong slot is reported under the wrong name.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub points: String,
    pub corners: [String; 4],
    pub rotation: String,
}

impl Report {
    pub fn new(cmp: &Comparison) -> Self {
        let mut points = String::from("Actual working points:\n");
        for p in cmp.actual.points() {
            points.push_str(&format!("({:.3}, {:.3}) mm\n", p.x, p.y));
        }

        let corners = Corner::ALL.map(|c| {
            let a = cmp.actual.corner(c);
            let d = cmp.delta(c);
            format!(
                "{}:\nActual:   ({:.3}, {:.3}) mm\nΔX = {:+.3} mm | ΔY = {:+.3} mm\n",
                c.label(),
                a.x,
                a.y,
                d.dx,
                d.dy
            )
        });

        let rotation = match cmp.rotation_deg {
            Some(a) => format!("Rotation angle of actual shape: {a:+.3}°"),
            None => "Rotation angle of actual shape: undefined (degenerate bottom edge)".to_string(),
        };

        Self { points, corners, rotation }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.points)?;
        writeln!(f, "Actual corners:\n")?;
        for c in &self.corners {
            writeln!(f, "{c}")?;
        }
        writeln!(f, "{}", self.rotation)
    }
}
