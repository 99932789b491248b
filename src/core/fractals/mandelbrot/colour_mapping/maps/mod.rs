pub mod hsv_ramp;
pub mod rgb_ramp;
