use std::fmt;

/// Which sides of the plane a body's box crossed (or was clamped against).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundaryContact {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl BoundaryContact {
    /// True if any side is touched.
    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }

    /// True if the contact is on the x axis.
    pub fn horizontal(&self) -> bool {
        self.left || self.right
    }

    /// True if the contact is on the y axis.
    pub fn vertical(&self) -> bool {
        self.top || self.bottom
    }
}

impl fmt::Display for BoundaryContact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sides: Vec<&str> = [
            (self.left, "left"),
            (self.right, "right"),
            (self.top, "top"),
            (self.bottom, "bottom"),
        ]
        .iter()
        .filter(|(hit, _)| *hit)
        .map(|(_, side)| *side)
        .collect();

        if sides.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", sides.join("+"))
        }
    }
}
