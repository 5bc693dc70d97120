/// Ephemeral state of one pointer drag over the seek bar.
///
/// Holds the last observed vertical coordinate so each move can be turned into
/// a delta. Created on pointer-down, updated on every move, dropped on
/// pointer-up or cancel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    reference_y: f32,
}

impl DragSession {
    pub fn start(y: f32) -> Self {
        Self { reference_y: y }
    }

    pub fn reference_y(&self) -> f32 {
        self.reference_y
    }

    /// Percentage delta for a move to `y`, then advance the reference to `y`.
    ///
    /// Screen y grows downward, so moving up yields a positive delta. A full
    /// view height of travel maps to 100.
    pub fn advance(&mut self, y: f32, view_height: f32) -> f32 {
        let delta = (self.reference_y - y) / view_height * 100.0;
        self.reference_y = y;
        delta
    }
}
