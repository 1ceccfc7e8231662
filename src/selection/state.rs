use crate::scene::ObjectId;

/// Hover/selection state of the garage.
///
/// A selected part is also the hovered part: selection is modal and
/// suppresses hover changes until it is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// Nothing under the pointer, nothing selected.
    #[default]
    Idle,
    /// Pointer rests on a part, which is highlighted.
    Hovering(ObjectId),
    /// Part is selected; the camera is focused on it.
    Selected(ObjectId),
}

impl SelectionState {
    /// The highlighted part, if any.
    #[must_use]
    pub fn hovered(self) -> Option<ObjectId> {
        match self {
            Self::Idle => None,
            Self::Hovering(id) | Self::Selected(id) => Some(id),
        }
    }

    /// The selected part, if any.
    #[must_use]
    pub fn selected(self) -> Option<ObjectId> {
        match self {
            Self::Selected(id) => Some(id),
            Self::Idle | Self::Hovering(_) => None,
        }
    }

    /// Whether a part is selected.
    #[must_use]
    pub fn is_selected(self) -> bool {
        matches!(self, Self::Selected(_))
    }
}
