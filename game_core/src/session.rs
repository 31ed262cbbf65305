//! Session state machine gating the simulation tick

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Playing,
    Paused,
    Stopped,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Start,
    Pause,
    Resume,
    Stop,
}

impl SessionAction {
    /// Parse an action name (for easier JS interop)
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "START" => Some(SessionAction::Start),
            "PAUSE" => Some(SessionAction::Pause),
            "RESUME" => Some(SessionAction::Resume),
            "STOP" => Some(SessionAction::Stop),
            _ => None,
        }
    }
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub success: bool,
    pub from_state: SessionState,
    pub to_state: SessionState,
    pub action: SessionAction,
}

#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn can_transition(&self, action: SessionAction) -> bool {
        self.next_state(action).is_some()
    }

    /// Attempt a transition. Invalid ones leave the state untouched.
    pub fn transition(&mut self, action: SessionAction) -> Transition {
        let from_state = self.state;
        match self.next_state(action) {
            Some(next_state) => {
                self.state = next_state;
                Transition {
                    success: true,
                    from_state,
                    to_state: next_state,
                    action,
                }
            }
            None => Transition {
                success: false,
                from_state,
                to_state: from_state,
                action,
            },
        }
    }

    fn next_state(&self, action: SessionAction) -> Option<SessionState> {
        use SessionAction::*;
        use SessionState::*;

        match (self.state, action) {
            (Idle, Start) => Some(Playing),
            (Playing, Pause) => Some(Paused),
            (Paused, Resume) => Some(Playing),

            // Stopped is terminal
            (Idle | Playing | Paused, Stop) => Some(Stopped),

            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state == SessionState::Playing
    }

    pub fn is_stopped(&self) -> bool {
        self.state == SessionState::Stopped
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
