//! Simulation constants and tuning parameters.

// --- Time ---

/// Host frame rate (Hz) used by the tick loop and fast-forward runs.
pub const TICK_RATE: u32 = 60;

/// Lower bound for the time scale (simulated hours per real second).
pub const MIN_TIME_SCALE: f64 = 0.1;

/// Upper bound for the time scale.
pub const MAX_TIME_SCALE: f64 = 10.0;

/// Time scale of a freshly constructed engine.
pub const DEFAULT_TIME_SCALE: f64 = 1.0;

// --- Mission phases ---

/// Progress fraction below which the vehicle is in the launch phase.
pub const PHASE_LAUNCH_END: f64 = 0.10;

/// Progress fraction below which the vehicle is departing Earth.
pub const PHASE_EARTH_DEPARTURE_END: f64 = 0.30;

/// Progress fraction below which the vehicle is in trans-lunar injection.
pub const PHASE_TLI_END: f64 = 0.70;

/// Progress fraction below which the vehicle is approaching the Moon.
/// Everything at or beyond this is lunar orbit insertion.
pub const PHASE_LUNAR_APPROACH_END: f64 = 0.90;

// --- Kinematics ---

/// Earth-Moon reference distance (km). Distance-to-target shrinks linearly from here.
pub const EARTH_MOON_DISTANCE_KM: f64 = 384_400.0;

/// Scale from trajectory units per hour to the reported velocity figure.
pub const VELOCITY_SCALE: f64 = 1000.0;

// --- Propellant ---

/// Fraction of the tank a nominal mission burns by arrival.
pub const NOMINAL_FUEL_FRACTION: f64 = 0.3;

/// Additional tank fraction consumed per active hazard.
pub const HAZARD_FUEL_FRACTION: f64 = 0.05;

/// Extra fuel mass (kg) per m/s of hazard-induced delta-V penalty.
pub const FUEL_MASS_PER_DELTA_V_PENALTY: f64 = 0.8;

// --- Hazard impact (radiation multiplier, delta-V penalty m/s) ---

pub const LOW_RADIATION_MULTIPLIER: f64 = 1.1;
pub const LOW_DELTA_V_PENALTY: f64 = 50.0;

pub const MEDIUM_RADIATION_MULTIPLIER: f64 = 1.2;
pub const MEDIUM_DELTA_V_PENALTY: f64 = 100.0;

pub const HIGH_RADIATION_MULTIPLIER: f64 = 1.3;
pub const HIGH_DELTA_V_PENALTY: f64 = 150.0;

pub const CRITICAL_RADIATION_MULTIPLIER: f64 = 1.5;
pub const CRITICAL_DELTA_V_PENALTY: f64 = 200.0;

/// Radiation exposure is a percentage and never reported above this.
pub const MAX_RADIATION_EXPOSURE: f64 = 100.0;

// --- Crew consumables ---

/// Consumables are normalised against the baseline mission duration (hours).
pub const CREW_BASELINE_HOURS: f64 = 72.0;

/// Consumption-rate increase per active hazard.
pub const CREW_HAZARD_RATE: f64 = 0.1;

pub const OXYGEN_USE_PER_MISSION: f64 = 25.0;
pub const WATER_USE_PER_MISSION: f64 = 20.0;
pub const FOOD_USE_PER_MISSION: f64 = 15.0;
pub const POWER_USE_PER_MISSION: f64 = 30.0;

/// Power reserve that is never drawn down.
pub const POWER_FLOOR: f64 = 10.0;

/// Levels above this are reported as good.
pub const RESOURCE_GOOD_ABOVE: f64 = 50.0;

/// Levels above this (and not good) are reported as warning.
pub const RESOURCE_WARNING_ABOVE: f64 = 20.0;
