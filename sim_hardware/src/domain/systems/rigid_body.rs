use super::{finite_or_zero, sanitize_dt};
use crate::domain::errors::{SimError, positive};
use crate::domain::obstacle::{Obstacle, cast_ray};
use crate::domain::state::{BodySnapshot, BodyState};
use crate::domain::tuning::PhysicsTuning;
use crate::domain::vector::Vector3;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

/// Distance reported by [`RigidBodyEngine::raycast`] when nothing is hit.
pub const NO_HIT: f64 = -1.0;

/// Point-mass integrator for one vehicle: gravity, quadratic drag and world-frame
/// thrust, a ground plane at `z = 0`, and the static obstacle registry.
///
/// The engine is the only writer of its state. Readers hold a [`BodyObserver`] and
/// see a fresh snapshot after every `update` or `add_obstacle`.
pub struct RigidBodyEngine {
    mass: f64,
    tuning: PhysicsTuning,
    state: BodyState,
    obstacles: Arc<Vec<Obstacle>>,
    grounded: bool,
    snapshot_tx: watch::Sender<BodySnapshot>,
}

impl RigidBodyEngine {
    pub fn new(mass: f64) -> Result<Self, SimError> {
        Self::with_tuning(mass, PhysicsTuning::default())
    }

    pub fn with_tuning(mass: f64, tuning: PhysicsTuning) -> Result<Self, SimError> {
        let mass = positive(mass, SimError::InvalidMass)?;
        let (snapshot_tx, _) = watch::channel(BodySnapshot::default());
        Ok(Self {
            mass,
            tuning,
            state: BodyState::default(),
            obstacles: Arc::new(Vec::new()),
            grounded: true,
            snapshot_tx,
        })
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Appends an obstacle to the registry. Bounds are not validated.
    pub fn add_obstacle(&mut self, obstacle: Obstacle) {
        Arc::make_mut(&mut self.obstacles).push(obstacle);
        self.publish();
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Distance to the nearest obstacle along `direction`, if within `max_range`.
    pub fn cast_ray(&self, origin: Vector3, direction: Vector3, max_range: f64) -> Option<f64> {
        cast_ray(&self.obstacles, origin, direction, max_range)
    }

    /// Same query as [`cast_ray`](Self::cast_ray), returning [`NO_HIT`] on a miss.
    pub fn raycast(&self, origin: Vector3, direction: Vector3, max_range: f64) -> f64 {
        self.cast_ray(origin, direction, max_range).unwrap_or(NO_HIT)
    }

    /// Advances the body by `dt` seconds with forward Euler.
    ///
    /// `thrust` is a world-frame force in newtons; no attitude rotation happens here.
    /// Negative or non-finite `dt` is treated as zero, as is any non-finite thrust axis.
    pub fn update(&mut self, dt: f64, thrust: Vector3) {
        let dt = sanitize_dt(dt);
        let thrust = Vector3::new(
            finite_or_zero(thrust.x),
            finite_or_zero(thrust.y),
            finite_or_zero(thrust.z),
        );

        let gravity = Vector3::new(0.0, 0.0, -self.tuning.gravity * self.mass);
        let drag = self.drag_force();
        let net = thrust + gravity + drag;

        let mut next = self.state;
        next.acceleration = net * (1.0 / self.mass);
        next.velocity += next.acceleration * dt;
        next.position += next.velocity * dt;

        let grounded = next.position.z <= 0.0;
        if grounded {
            next.position.z = 0.0;
            next.velocity.z = 0.0;
            next.acceleration.z = 0.0;
        }
        if grounded != self.grounded {
            debug!(grounded, altitude = next.position.z, "ground contact changed");
        }

        self.grounded = grounded;
        self.state = next;
        self.publish();
    }

    fn drag_force(&self) -> Vector3 {
        let v = self.state.velocity;
        let speed_sq = v.length_squared();
        match v.normalized() {
            Some(dir) => -dir * (self.tuning.drag_coefficient * speed_sq),
            None => Vector3::ZERO,
        }
    }

    pub fn position(&self) -> Vector3 {
        self.state.position
    }

    pub fn velocity(&self) -> Vector3 {
        self.state.velocity
    }

    pub fn acceleration(&self) -> Vector3 {
        self.state.acceleration
    }

    pub fn state(&self) -> BodyState {
        self.state
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Read-only handle for measurement models.
    pub fn observer(&self) -> BodyObserver {
        BodyObserver {
            snapshot_rx: self.snapshot_tx.subscribe(),
        }
    }

    fn publish(&self) {
        self.snapshot_tx.send_replace(BodySnapshot {
            state: self.state,
            obstacles: Arc::clone(&self.obstacles),
        });
    }
}

/// Read side of a [`RigidBodyEngine`]. Cheap to clone; every accessor returns a copy.
#[derive(Debug, Clone)]
pub struct BodyObserver {
    snapshot_rx: watch::Receiver<BodySnapshot>,
}

impl BodyObserver {
    pub fn state(&self) -> BodyState {
        self.snapshot_rx.borrow().state
    }

    pub fn snapshot(&self) -> BodySnapshot {
        self.snapshot_rx.borrow().clone()
    }

    pub fn position(&self) -> Vector3 {
        self.state().position
    }

    pub fn velocity(&self) -> Vector3 {
        self.state().velocity
    }

    pub fn acceleration(&self) -> Vector3 {
        self.state().acceleration
    }

    pub fn cast_ray(&self, origin: Vector3, direction: Vector3, max_range: f64) -> Option<f64> {
        cast_ray(&self.snapshot_rx.borrow().obstacles, origin, direction, max_range)
    }

    pub fn raycast(&self, origin: Vector3, direction: Vector3, max_range: f64) -> f64 {
        self.cast_ray(origin, direction, max_range).unwrap_or(NO_HIT)
    }
}
