use glvec2::core::prelude::*;

fn main() -> Result<()> {
    setup_log()?;

    let normal = Vec2::unit_y();
    for incident in [Vec2::new(1.0, -1.0), Vec2::new(1.0, -0.1), Vec2::new(0.0, -1.0)] {
        let incident = incident.normal();
        info!(
            "incident {:.4} (angle {:.4}): reflected {:.4}",
            incident,
            incident.angle(),
            incident.reflect(normal)
        );
        for eta in [0.75, 1.0, 1.5] {
            let refracted = incident.refract(normal, eta);
            if refracted.equal(Vec2::zero()) {
                info!("  eta {eta}: total internal reflection");
            } else {
                info!("  eta {eta}: refracted {refracted:.4}");
            }
        }
    }

    let v = Vec2::new(3.0, 4.0);
    info!(
        "{v}: len {}, normal {:.2}, rotated a quarter turn {:.2}",
        v.len(),
        v.normal(),
        v.rotate(std::f64::consts::FRAC_PI_2)
    );
    Ok(())
}
