//! Movement domain: the jump / wall-jump / slide state machine.
//!
//! The vertical phase is a single enum so jumping, wall-jumping and
//! falling-from-a-jump are mutually exclusive by construction. Jump-cut and
//! sliding are orthogonal modifiers. `MotionState::resolve` is the only
//! writer of any of them.

use bevy::prelude::*;

use crate::config::MovementConfig;
use crate::movement::facing::Facing;
use crate::movement::resources::MovementInput;
use crate::movement::timers::TimerBank;

/// Dominant vertical phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum JumpPhase {
    /// No jump in progress: standing, running, or dropped off a ledge.
    #[default]
    Idle,
    /// Rising from a ground jump.
    Jumping,
    /// Inside the wall-jump window.
    WallJumping,
    /// Descending after a ground jump, until landing.
    JumpFalling,
}

/// Inputs to the phase transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEvent {
    /// Vertical velocity turned negative.
    Apex,
    /// `wall_jump_time` elapsed since the wall jump.
    WallJumpExpired,
    /// Ground timer active while not jumping.
    Landed,
    GroundJump,
    WallJump,
}

impl JumpPhase {
    /// Transition table. Events that do not apply to a phase leave it unchanged.
    pub fn next(self, event: PhaseEvent) -> Self {
        use JumpPhase::*;
        use PhaseEvent::*;

        match (self, event) {
            (_, GroundJump) => Jumping,
            (_, WallJump) => WallJumping,
            (Jumping, Apex) => JumpFalling,
            (WallJumping, WallJumpExpired) => Idle,
            (JumpFalling, Landed) => Idle,
            (Idle | WallJumping | JumpFalling, Apex) => self,
            (Idle | Jumping | JumpFalling, WallJumpExpired) => self,
            (Idle | Jumping | WallJumping, Landed) => self,
        }
    }
}

/// Which jump fired this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JumpKind {
    Ground,
    /// `direction` is the horizontal push sign: -1 off a right wall, +1 off a left wall.
    Wall { direction: f32 },
}

/// Per-character motion state.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
pub struct MotionState {
    pub phase: JumpPhase,
    pub jump_cut: bool,
    pub sliding: bool,
    pub facing: Facing,
    /// -1 or +1; 0 before the first wall jump.
    pub last_wall_jump_dir: f32,
    /// Absolute time of the last wall jump, in seconds.
    pub wall_jump_start_time: f32,
}

impl MotionState {
    pub fn is_jumping(&self) -> bool {
        self.phase == JumpPhase::Jumping
    }

    pub fn is_wall_jumping(&self) -> bool {
        self.phase == JumpPhase::WallJumping
    }

    pub fn is_jump_falling(&self) -> bool {
        self.phase == JumpPhase::JumpFalling
    }

    /// Contact probes are ignored mid-jump so they cannot re-arm coyote time.
    pub fn accepts_contacts(&self) -> bool {
        !self.is_jumping() && !self.is_wall_jumping()
    }

    pub fn can_jump(&self, timers: &TimerBank) -> bool {
        timers.ground_active() && !self.is_jumping()
    }

    pub fn can_wall_jump(&self, timers: &TimerBank) -> bool {
        timers.wall_active()
            && !timers.ground_active()
            && !self.is_wall_jumping()
            && !(self.is_jumping() && self.jump_cut)
    }

    pub fn can_jump_cut(&self, velocity: Vec2) -> bool {
        self.is_jumping() && velocity.y > 0.0
    }

    pub fn can_wall_jump_cut(&self, velocity: Vec2) -> bool {
        self.is_wall_jumping() && velocity.y > 0.0
    }

    pub fn can_slide(&self, timers: &TimerBank) -> bool {
        timers.wall_active()
            && !timers.ground_active()
            && !self.is_jumping()
            && !self.is_wall_jumping()
    }

    fn transition(&mut self, event: PhaseEvent) {
        let next = self.phase.next(event);
        if next != self.phase {
            debug!("Phase {:?} -> {:?} on {:?}", self.phase, next, event);
        }
        self.phase = next;
    }

    /// Run one logic tick of state resolution: phase cleanup, landing, jump
    /// arbitration, jump-cut and slide, in that order.
    pub fn resolve(
        &mut self,
        timers: &mut TimerBank,
        velocity: &mut Vec2,
        input: &MovementInput,
        config: &MovementConfig,
        now: f32,
    ) -> Option<JumpKind> {
        if self.is_jumping() && velocity.y < 0.0 {
            self.transition(PhaseEvent::Apex);
        }
        if self.is_wall_jumping() && now - self.wall_jump_start_time > config.wall_jump_time {
            self.transition(PhaseEvent::WallJumpExpired);
        }

        if timers.ground_active() && !self.is_jumping() && !self.is_wall_jumping() {
            if self.jump_cut || self.is_jump_falling() {
                debug!("Landed: jump_cut={}, phase={:?}", self.jump_cut, self.phase);
            }
            self.jump_cut = false;
            self.transition(PhaseEvent::Landed);
        }

        let jump = self.arbitrate_jump(timers, velocity, config, now);

        let can_cut = self.can_jump_cut(*velocity) || self.can_wall_jump_cut(*velocity);
        if input.jump_released && can_cut {
            if !self.jump_cut {
                debug!("Jump cut: phase={:?}, vy={}", self.phase, velocity.y);
            }
            self.jump_cut = true;
        }

        self.sliding = self.can_slide(timers)
            && ((timers.wall_left_active() && input.axis.x < 0.0)
                || (timers.wall_right_active() && input.axis.x > 0.0));

        jump
    }

    fn arbitrate_jump(
        &mut self,
        timers: &mut TimerBank,
        velocity: &mut Vec2,
        config: &MovementConfig,
        now: f32,
    ) -> Option<JumpKind> {
        if !timers.jump_buffered() {
            return None;
        }

        if self.can_jump(timers) {
            self.transition(PhaseEvent::GroundJump);
            self.jump_cut = false;
            timers.consume_jump_buffer();
            apply_impulse(velocity, Vec2::new(0.0, config.jump_force));
            debug!("Ground jump: vy={}", velocity.y);
            return Some(JumpKind::Ground);
        }

        if self.can_wall_jump(timers) {
            let direction = if timers.wall_right_active() { -1.0 } else { 1.0 };
            self.transition(PhaseEvent::WallJump);
            self.jump_cut = false;
            self.wall_jump_start_time = now;
            self.last_wall_jump_dir = direction;
            timers.consume_jump_buffer();
            apply_impulse(
                velocity,
                Vec2::new(config.wall_jump_force * direction, config.jump_force),
            );
            debug!(
                "Wall jump: direction={}, velocity=({}, {})",
                direction, velocity.x, velocity.y
            );
            return Some(JumpKind::Wall { direction });
        }

        None
    }
}

/// Apply an instantaneous velocity change (unit mass).
///
/// Downward velocity is cancelled before the upward part is added, and
/// horizontal velocity opposing a sideways push is cancelled first, so the
/// result does not depend on how fast the character was falling.
pub fn apply_impulse(velocity: &mut Vec2, impulse: Vec2) {
    if impulse.x != 0.0 && velocity.x.signum() != impulse.x.signum() {
        velocity.x = 0.0;
    }
    if impulse.y > 0.0 && velocity.y < 0.0 {
        velocity.y = 0.0;
    }
    *velocity += impulse;
}
