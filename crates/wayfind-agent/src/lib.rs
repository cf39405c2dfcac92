//! Tick-driven agent movement along grid navigation paths.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

use wayfind_nav::{NavPath, Navigator, Vec2};

/// Fixed constants for the seek-steering model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringConfig {
    /// Magnitude of the desired velocity (world units per second).
    pub speed: f32,
    /// Divisor applied to the steering impulse each tick.
    pub mass: f32,
    /// Distance below which a waypoint counts as reached.
    pub arrival_distance: f32,
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            speed: 200.0,
            mass: 10.0,
            arrival_distance: 10.0,
        }
    }
}

/// Movement mode of the agent.
///
/// `Following` carries its own path and cursor so the two can never
/// desynchronize.
#[derive(Debug, Clone)]
pub enum AgentState {
    Idle,
    Following { path: NavPath, next: usize },
}

impl AgentState {
    pub fn is_following(&self) -> bool {
        matches!(self, Self::Following { .. })
    }
}

/// Single-agent path-following controller.
///
/// Owns the agent's position, velocity, and heading, and consumes waypoint
/// paths from the constructor-injected navigator one tick at a time. Every
/// failure mode (invalid target, no route, degenerate same-cell request)
/// degrades silently to `Idle`.
#[derive(Debug)]
pub struct AgentController<N: Navigator> {
    navigator: N,
    config: SteeringConfig,
    position: Vec2,
    velocity: Vec2,
    rotation: f32,
    state: AgentState,
}

impl<N: Navigator> AgentController<N> {
    pub fn new(navigator: N, config: SteeringConfig, position: Vec2) -> Self {
        Self {
            navigator,
            config,
            position,
            velocity: Vec2::ZERO,
            rotation: 0.0,
            state: AgentState::Idle,
        }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn config(&self) -> SteeringConfig {
        self.config
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Heading in radians, derived from the velocity each steering step.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn state(&self) -> &AgentState {
        &self.state
    }

    /// External input entry point: a follow request or a teleport.
    pub fn on_follow_request(&mut self, target: Vec2, teleport: bool) {
        if teleport {
            self.teleport(target);
        } else {
            self.request_follow(target);
        }
    }

    /// Plan a route from the current position and start following it.
    ///
    /// A request while already following supersedes the current path. Fewer
    /// than two waypoints means there is nothing to follow and the agent goes
    /// `Idle` without moving.
    pub fn request_follow(&mut self, target: Vec2) {
        let path = match self.navigator.find_path(self.position, target) {
            Some(path) if path.points.len() >= 2 => path,
            _ => {
                self.state = AgentState::Idle;
                return;
            }
        };
        // points[0] is the cell the agent already stands in.
        self.state = AgentState::Following { path, next: 1 };
    }

    /// Move the agent directly, bypassing steering and dropping any active
    /// path.
    pub fn teleport(&mut self, position: Vec2) {
        self.position = position;
        self.velocity = Vec2::ZERO;
        self.state = AgentState::Idle;
    }

    /// Advance the state machine by one steering step.
    ///
    /// `Idle` ticks leave position, velocity, and rotation untouched.
    pub fn tick(&mut self, dt: f32) {
        let AgentState::Following { path, next } = &self.state else {
            return;
        };
        let Some(target) = path.points.get(*next).copied() else {
            self.state = AgentState::Idle;
            return;
        };

        if !self.move_towards(target, dt) {
            return;
        }

        if let AgentState::Following { path, next } = &mut self.state {
            *next += 1;
            if *next >= path.points.len() {
                self.state = AgentState::Idle;
            }
        }
    }

    /// One seek-steering step toward `target`; true when the arrival distance
    /// is reached.
    ///
    /// Under-damped: the velocity chases the desired velocity, so the agent
    /// approaches the target asymptotically and only the arrival distance
    /// terminates the approach.
    fn move_towards(&mut self, target: Vec2, dt: f32) -> bool {
        let desired = (target - self.position).normalized_or_zero() * self.config.speed;
        let steering = desired - self.velocity;
        self.velocity = self.velocity + steering / self.config.mass;
        self.position = self.position + self.velocity * dt.max(0.0);
        self.rotation = self.velocity.angle();
        self.position.distance(target) < self.config.arrival_distance
    }
}
