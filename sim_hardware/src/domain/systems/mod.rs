// Per-tick simulation systems. Each owns its state and is advanced by the scheduler.

pub mod battery;
pub mod motor;
pub mod rigid_body;

pub use battery::Battery;
pub use motor::Motor;
pub use rigid_body::{BodyObserver, NO_HIT, RigidBodyEngine};

/// Time step actually integrated: negative and non-finite steps collapse to zero.
pub fn sanitize_dt(dt: f64) -> f64 {
    if dt.is_finite() && dt > 0.0 { dt } else { 0.0 }
}

/// Force and load inputs: NaN and infinities count as zero.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
