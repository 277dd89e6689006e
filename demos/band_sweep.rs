use photonic_tmm::errors::PhotonicTmmError;
use photonic_tmm::prelude::*;

fn main() -> Result<(), PhotonicTmmError> {
    // N=30 stack of 15 cm / 5 cm layers, εᵣ = 2 and 4, placed in vacuum.
    let mut crystal = PhotonicCrystal1d::new(
        30,
        0.15,
        0.05,
        RelativeMaterial::dielectric(2.0),
        RelativeMaterial::dielectric(4.0),
    )?;
    crystal.set_environment(RelativeMaterial::vacuum())?;

    // Sweep 1.5 GHz .. 4 GHz across the first band gap.
    let omegas = angular_freq_linspace(1.5e9, 4.0e9, 300);
    let spectrum = sweep_power(&mut crystal, omegas)?;

    println!("f_hz, reflectance, transmittance");
    for p in spectrum {
        let f_hz = p.omega / (2.0 * std::f64::consts::PI);
        println!("{:.6e}, {:.6e}, {:.6e}", f_hz, p.reflectance, p.transmittance);
    }
    Ok(())
}
