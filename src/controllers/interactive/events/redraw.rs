/// What a shell has to repaint after the controller handled an event.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Redraw {
    Nothing,
    /// Markers or orbit moved; the field is unchanged.
    Overlay,
    /// The field was recomputed.
    Everything,
}

impl Redraw {
    #[must_use]
    pub fn field_changed(self) -> bool {
        self == Self::Everything
    }

    #[must_use]
    pub fn needs_repaint(self) -> bool {
        self != Self::Nothing
    }
}
