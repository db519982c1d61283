//! Fixed lookup tables behind the worst-case figures.
//!
//! Mock values for the demo, not a certified accounting dataset.

use verdante_core::GpuClass;

/// Intensity assumed for regions missing from the table, and the floor
/// of every worst-case intensity.
pub const DEFAULT_GRID_G_PER_KWH: f64 = 350.0;

/// Hourly CPU baseline charged to every job.
pub const BASE_CPU_USD_PER_H: f64 = 0.18;

/// GPU rate for classes missing from the table.
pub const UNKNOWN_GPU_USD_PER_H: f64 = 1.4;

/// Draw of a job without accelerators.
pub const CPU_ONLY_POWER_KW: f64 = 0.8;

/// Draw of a GPU job whose class has no table entry.
pub const UNKNOWN_GPU_POWER_KW: f64 = 2.5;

pub const TIME_BUFFER: f64 = 1.45;
pub const CO2_BUFFER: f64 = 1.25;
pub const COST_BUFFER: f64 = 1.18;

pub const MIN_RUNTIME_HOURS: f64 = 0.1;
pub const MAX_RUNTIME_HOURS: f64 = 240.0;

/// Grid carbon intensity of a region in gCO2e/kWh.
pub fn grid_intensity(region: &str) -> f64 {
    match region {
        "CA" => 140.0,
        "EU" => 260.0,
        "FR" => 90.0,
        "DE" => 420.0,
        "NL" => 380.0,
        "IE" => 300.0,
        "UK" => 230.0,
        "US" => 400.0,
        _ => DEFAULT_GRID_G_PER_KWH,
    }
}

/// Hourly accelerator rate in USD.
pub fn gpu_rate_usd_per_h(class: GpuClass) -> f64 {
    match class {
        GpuClass::None => 0.0,
        GpuClass::T4 => 0.85,
        GpuClass::L4 => 1.2,
        GpuClass::A10 => 1.45,
        GpuClass::A100 => 3.2,
        GpuClass::H100 => 4.5,
        GpuClass::Unknown => UNKNOWN_GPU_USD_PER_H,
    }
}

/// Peak draw in kW for a job with the given accelerator requirement.
pub fn power_kw(gpu_required: bool, class: GpuClass) -> f64 {
    if !gpu_required {
        return CPU_ONLY_POWER_KW;
    }
    match class {
        GpuClass::T4 => 1.8,
        GpuClass::L4 => 2.6,
        GpuClass::A10 => 3.0,
        GpuClass::A100 => 5.0,
        GpuClass::H100 => 5.5,
        GpuClass::None | GpuClass::Unknown => UNKNOWN_GPU_POWER_KW,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_use_defaults() {
        assert_eq!(grid_intensity("JP"), DEFAULT_GRID_G_PER_KWH);
        assert_eq!(gpu_rate_usd_per_h(GpuClass::Unknown), UNKNOWN_GPU_USD_PER_H);
        assert_eq!(power_kw(true, GpuClass::Unknown), UNKNOWN_GPU_POWER_KW);
        assert_eq!(power_kw(true, GpuClass::None), UNKNOWN_GPU_POWER_KW);
    }

    #[test]
    fn cpu_jobs_ignore_gpu_class() {
        assert_eq!(power_kw(false, GpuClass::H100), CPU_ONLY_POWER_KW);
    }
}
