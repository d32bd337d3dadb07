/// Noise and geometry for the simulated sensor suite.

#[derive(Debug, Clone, Copy)]
pub struct ImuTuning {
    /// Accelerometer white-noise standard deviation in m/s².
    pub accel_noise_sigma: f64,

    /// Gyroscope white-noise standard deviation in rad/s.
    pub gyro_noise_sigma: f64,

    /// Standard deviation of the per-read gyro bias random walk step, in rad/s.
    pub bias_walk_sigma: f64,

    /// Reaction of the accelerometer to gravity at rest, in m/s².
    pub gravity: f64,

    /// Steady-state die temperature in °C.
    pub operating_temperature: f64,

    /// Upper bound of the uniform jitter added to the temperature.
    pub temperature_jitter: f64,
}

impl Default for ImuTuning {
    fn default() -> Self {
        Self {
            accel_noise_sigma: 0.05,
            gyro_noise_sigma: 0.01,
            bias_walk_sigma: 0.0001,
            gravity: 9.81,
            operating_temperature: 40.0,
            temperature_jitter: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GpsTuning {
    /// Latitude of the local frame origin in degrees.
    pub origin_lat: f64,

    /// Longitude of the local frame origin in degrees.
    pub origin_lon: f64,

    /// Meters spanned by one degree of latitude.
    pub meters_per_degree_lat: f64,

    /// Span of the horizontal drift step per read, in meters.
    pub drift_step: f64,

    /// Vertical drift step as a fraction of the horizontal step.
    pub vertical_drift_factor: f64,

    /// Inclusive lower bound of the reported satellite count.
    pub min_satellites: u32,

    /// Exclusive upper bound of the reported satellite count.
    pub max_satellites: u32,

    /// Lower bound of the reported HDOP.
    pub min_hdop: f64,

    /// Upper bound of the reported HDOP.
    pub max_hdop: f64,
}

impl Default for GpsTuning {
    fn default() -> Self {
        Self {
            origin_lat: 37.7749,
            origin_lon: -122.4194,
            meters_per_degree_lat: 111_320.0,
            drift_step: 0.5,
            vertical_drift_factor: 0.2,
            min_satellites: 8,
            max_satellites: 12,
            min_hdop: 1.0,
            max_hdop: 1.5,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BaroTuning {
    /// Reference pressure at zero altitude, in hPa.
    pub sea_level_pressure: f64,

    /// Lapse term of the barometric power law, per meter.
    pub lapse: f64,

    /// Exponent of the barometric power law.
    pub exponent: f64,

    /// Span of the uniform pressure noise, in hPa.
    pub pressure_noise: f64,

    /// Base sensor temperature in °C.
    pub base_temperature: f64,

    /// Upper bound of the uniform temperature jitter.
    pub temperature_jitter: f64,
}

impl Default for BaroTuning {
    fn default() -> Self {
        Self {
            sea_level_pressure: 1013.25,
            lapse: 2.25577e-5,
            exponent: 5.25588,
            pressure_noise: 0.1,
            base_temperature: 20.0,
            temperature_jitter: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LidarTuning {
    /// Number of evenly spaced rays in the horizontal plane.
    pub rays: usize,

    /// Maximum measurable distance in meters.
    pub max_range: f64,
}

impl Default for LidarTuning {
    fn default() -> Self {
        Self {
            rays: 8,
            max_range: 20.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct VioTuning {
    /// Span of the uniform optical-flow noise on each horizontal axis, in meters.
    pub flow_noise: f64,

    /// Lower bound of the reported confidence.
    pub min_confidence: f64,

    /// Upper bound of the reported confidence.
    pub max_confidence: f64,
}

impl Default for VioTuning {
    fn default() -> Self {
        Self {
            flow_noise: 0.01,
            min_confidence: 0.9,
            max_confidence: 1.0,
        }
    }
}
