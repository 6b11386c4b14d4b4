#![forbid(unsafe_code)]

//! Overlay lifecycle policy.
//!
//! [`decide`] is a pure function over `(action, current, config)`. It knows
//! nothing about the value or about how the overlay is drawn.
//!
//! # Rules
//!
//! | Action | Uncontrolled result |
//! |--------|---------------------|
//! | `UserOpen` | open (`UserFocus`), an already open overlay keeps its reason |
//! | `ExplicitOpen` | open (`ExplicitOpenCall`) |
//! | `ExplicitClose` / `OutsideClick` / `Escape` | closed |
//! | `CommitSelected` | closed, unless `disable_close_on_select`, or the overlay was forced open by `open()` and `close_on_commit_when_forced_open` is off |
//!
//! When `controlled_open` is set it overrides the visible state. The
//! uncontrolled outcome is still reported as
//! [`OverlayDecision::requested_open`] so the host can be asked to change
//! its prop.

/// Why the overlay is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OpenReason {
    /// Opened by focusing or clicking an input.
    UserFocus,
    /// Opened by an explicit `open()` call.
    ExplicitOpenCall,
    /// Held open by the host's controlled `open = true`.
    Controlled,
    /// Closed.
    #[default]
    None,
}

/// Visibility plus the reason it was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OpenState {
    /// Whether the overlay is visible.
    pub open: bool,
    /// Why it is open (`None` while closed).
    pub reason: OpenReason,
}

impl OpenState {
    /// The closed state.
    #[must_use]
    pub const fn closed() -> Self {
        Self {
            open: false,
            reason: OpenReason::None,
        }
    }

    /// Open for `reason`.
    #[must_use]
    pub const fn opened(reason: OpenReason) -> Self {
        Self { open: true, reason }
    }
}

/// Something asking the overlay to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayAction {
    /// Input focused or clicked.
    UserOpen,
    /// Programmatic open.
    ExplicitOpen,
    /// Programmatic close.
    ExplicitClose,
    /// A value was committed from the calendar.
    CommitSelected,
    /// Interaction outside the overlay.
    OutsideClick,
    /// Escape pressed.
    Escape,
}

/// The configuration the policy reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayConfig {
    /// Host-controlled visibility.
    pub controlled_open: Option<bool>,
    /// Keep the overlay open after a commit.
    pub disable_close_on_select: bool,
    /// Close after a commit even when the overlay was forced open.
    pub close_on_commit_when_forced_open: bool,
}

/// Outcome of [`decide`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayDecision {
    /// State after the action, controlled prop applied.
    pub state: OpenState,
    /// Visibility the action asks for, before the controlled prop.
    pub requested_open: bool,
}

/// Apply one action to the current open state.
#[must_use]
pub fn decide(action: OverlayAction, current: OpenState, config: &OverlayConfig) -> OverlayDecision {
    let requested = match action {
        OverlayAction::UserOpen if current.open => current,
        OverlayAction::UserOpen => OpenState::opened(OpenReason::UserFocus),
        OverlayAction::ExplicitOpen => OpenState::opened(OpenReason::ExplicitOpenCall),
        OverlayAction::ExplicitClose | OverlayAction::OutsideClick | OverlayAction::Escape => {
            OpenState::closed()
        }
        OverlayAction::CommitSelected => {
            let forced = current.reason == OpenReason::ExplicitOpenCall
                && !config.close_on_commit_when_forced_open;
            if !current.open || config.disable_close_on_select || forced {
                current
            } else {
                OpenState::closed()
            }
        }
    };

    OverlayDecision {
        state: apply_controlled(requested, config.controlled_open),
        requested_open: requested.open,
    }
}

fn apply_controlled(state: OpenState, controlled: Option<bool>) -> OpenState {
    match controlled {
        None => state,
        Some(true) if state.open => state,
        Some(true) => OpenState::opened(OpenReason::Controlled),
        Some(false) => OpenState::closed(),
    }
}

// ---------------------------------------------------------------------------
// OverlayCoordinator
// ---------------------------------------------------------------------------

/// Holds the current [`OpenState`] and runs actions through [`decide`].
#[derive(Debug, Clone, Default)]
pub struct OverlayCoordinator {
    state: OpenState,
    config: OverlayConfig,
}

impl OverlayCoordinator {
    /// Coordinator starting in the state the controlled prop dictates.
    #[must_use]
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            state: apply_controlled(OpenState::closed(), config.controlled_open),
            config,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> OpenState {
        self.state
    }

    /// Whether the overlay is visible.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.open
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Apply an action.
    ///
    /// Returns the requested visibility when it differs from what was
    /// visible before, which is when the host should hear about it.
    pub fn apply(&mut self, action: OverlayAction) -> Option<bool> {
        let before = self.state;
        let decision = decide(action, before, &self.config);
        self.state = decision.state;
        datepick_core::trace!(
            ?action,
            was_open = before.open,
            open = decision.state.open,
            requested_open = decision.requested_open,
            "overlay decision"
        );
        (decision.requested_open != before.open).then_some(decision.requested_open)
    }

    /// Update the controlled prop. Returns the new visibility if it changed.
    pub fn set_controlled(&mut self, controlled: Option<bool>) -> Option<bool> {
        self.config.controlled_open = controlled;
        let before = self.state.open;
        self.state = apply_controlled(self.state, controlled);
        (self.state.open != before).then_some(self.state.open)
    }
}
