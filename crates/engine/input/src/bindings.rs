//! Binding layer contract
//!
//! The reader never touches devices directly. It talks to an
//! [`InputBindings`] implementation that owns the action maps, samples
//! continuous actions and performs edge detection for discrete ones.

use crate::action::{Action, ActionEdge, ActionMap};
use glam::Vec2;

/// Capability interface of an input binding object
///
/// Implementations must honour these rules:
/// - a disabled map reads as idle: [`read_axis`](Self::read_axis) returns
///   `Vec2::ZERO` and [`is_pressed`](Self::is_pressed) returns false for its
///   actions, and it produces no new edges;
/// - disabling a map cancels its in-progress discrete actions. An action
///   whose `Started` edge was already handed out gets a queued
///   [`ActionPhase::Canceled`](crate::ActionPhase::Canceled); one whose start
///   is still queued has those pending edges withdrawn instead;
/// - enabling or disabling a map that is already in that state does nothing.
pub trait InputBindings {
    fn enable_map(&mut self, map: ActionMap);

    fn disable_map(&mut self, map: ActionMap);

    fn is_map_enabled(&self, map: ActionMap) -> bool;

    /// Disable every map
    fn disable_all(&mut self) {
        for map in ActionMap::ALL {
            self.disable_map(map);
        }
    }

    /// Current value of a 2D axis action
    fn read_axis(&self, action: Action) -> Vec2;

    /// Whether the action's control is currently held
    fn is_pressed(&self, action: Action) -> bool;

    /// Take the oldest pending edge
    ///
    /// Edges are handed out one at a time so that a mode switch made while
    /// handling one edge still affects the edges queued behind it.
    fn next_edge(&mut self) -> Option<ActionEdge>;
}
