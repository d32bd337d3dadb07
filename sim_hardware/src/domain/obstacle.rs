// Static world geometry and ray queries against it.

use super::vector::Vector3;

/// Direction components smaller than this are treated as parallel to the slab.
const PARALLEL_EPSILON: f64 = 1e-6;

/// Axis-aligned box obstacle. Bounds are taken as given; callers keep `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub min: Vector3,
    pub max: Vector3,
}

impl Obstacle {
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64, min_z: f64, max_z: f64) -> Self {
        Self {
            min: Vector3::new(min_x, min_y, min_z),
            max: Vector3::new(max_x, max_y, max_z),
        }
    }

    /// Slab test for a unit-length ray. Returns the entry distance when the box lies
    /// ahead of the origin.
    pub fn ray_entry(&self, origin: Vector3, dir: Vector3) -> Option<f64> {
        let mut t_min = f64::NEG_INFINITY;
        let mut t_max = f64::INFINITY;

        let axes = [
            (origin.x, dir.x, self.min.x, self.max.x),
            (origin.y, dir.y, self.min.y, self.max.y),
            (origin.z, dir.z, self.min.z, self.max.z),
        ];

        for (o, d, lo, hi) in axes {
            let (t0, t1) = slab_interval(o, d, lo, hi)?;
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
        }

        (t_max >= t_min && t_min >= 0.0).then_some(t_min)
    }
}

fn slab_interval(origin: f64, dir: f64, lo: f64, hi: f64) -> Option<(f64, f64)> {
    if dir.abs() < PARALLEL_EPSILON {
        // Parallel ray only overlaps the slab if it already starts inside it.
        return (lo..=hi)
            .contains(&origin)
            .then_some((f64::NEG_INFINITY, f64::INFINITY));
    }
    let a = (lo - origin) / dir;
    let b = (hi - origin) / dir;
    Some((a.min(b), a.max(b)))
}

/// Closest obstacle hit along `direction` within `max_range`.
///
/// `direction` is normalized here; a zero-length or non-finite direction never hits.
pub fn cast_ray(
    obstacles: &[Obstacle],
    origin: Vector3,
    direction: Vector3,
    max_range: f64,
) -> Option<f64> {
    let dir = direction.normalized()?;
    obstacles
        .iter()
        .filter_map(|o| o.ray_entry(origin, dir))
        .filter(|t| *t <= max_range)
        .min_by(|a, b| a.total_cmp(b))
}
