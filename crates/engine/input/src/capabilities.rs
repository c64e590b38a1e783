//! Narrow capability traits over the input reader
//!
//! Gameplay systems depend on the one capability they use: the player
//! controller takes a [`MoveSource`] and a [`JumpSource`], the pause menu a
//! [`PauseSource`], and so on. [`InputReader`](crate::InputReader)
//! implements all of them.

use crate::events::SubscriptionId;
use crate::mode::{InputControlMode, ModeWatch};
use glam::Vec3;

/// Shared subscription management
pub trait EventSource {
    /// Remove a subscription made through any capability.
    /// Returns false if the id was unknown.
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;
}

/// Horizontal movement, walking or sprinting
pub trait MoveSource: EventSource {
    fn on_move(&mut self, callback: impl FnMut(Vec3) + 'static) -> SubscriptionId;

    fn on_sprint_move(&mut self, callback: impl FnMut(Vec3) + 'static) -> SubscriptionId;
}

pub trait JumpSource: EventSource {
    /// Fires on every tick the jump control is held
    fn on_jump(&mut self, callback: impl FnMut() + 'static) -> SubscriptionId;
}

pub trait ScanSource: EventSource {
    fn on_start_scan(&mut self, callback: impl FnMut() + 'static) -> SubscriptionId;

    fn on_stop_scan(&mut self, callback: impl FnMut() + 'static) -> SubscriptionId;
}

/// Pause menu entry and exit
///
/// Subscribers run after the mode switch, so a [`ModeWatch`] read inside
/// the callback already reports the new mode.
pub trait PauseSource: EventSource {
    fn on_pause_enter(&mut self, callback: impl FnMut() + 'static) -> SubscriptionId;

    fn on_pause_exit(&mut self, callback: impl FnMut() + 'static) -> SubscriptionId;
}

/// Forcing the active input mode (e.g. when opening a non-pause menu)
pub trait ModeSwitch {
    fn change_mode(&mut self, mode: InputControlMode);

    fn mode(&self) -> InputControlMode;

    fn mode_watch(&self) -> ModeWatch;
}
