use photonic_tmm::errors::PhotonicTmmError;
use photonic_tmm::prelude::*;

fn main() -> Result<(), PhotonicTmmError> {
    let mut crystal = PhotonicCrystal1d::new(
        30,
        0.15,
        0.05,
        RelativeMaterial::dielectric(2.0),
        RelativeMaterial::dielectric(4.0),
    )?;
    crystal.set_environment(RelativeMaterial::vacuum())?;

    // One passband point, one point deep in the band gap, one band edge.
    for f_hz in [3.1e9, 3.38e9, 3.6e9] {
        crystal.set_frequency(angular_frequency(f_hz));
        crystal.show_parameters();
        let power = crystal.power()?;
        println!("Result:");
        println!("R = {:.2}", power.reflectance);
        println!("T = {:.2}", power.transmittance);
        println!();
    }
    Ok(())
}
