/// Which of the two named arrangements is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Start,
    End,
}

impl AnimationState {
    /// The other state.
    pub fn next(self) -> Self {
        match self {
            AnimationState::Start => AnimationState::End,
            AnimationState::End => AnimationState::Start,
        }
    }

    /// Flip to the other state in place.
    pub fn advance(&mut self) {
        *self = self.next();
    }
}
