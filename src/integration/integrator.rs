use crate::error::PhysicsError;
use crate::math::vec2::Vec2;
use crate::objects::Body;

/// Integrates the body's state forward in time using Semi-Implicit Euler.
///
/// Velocity is updated first from the body's own acceleration plus `gravity`,
/// then the center moves by the new velocity. If the result is not finite the
/// body is left exactly as it was and `NonFiniteState` is returned.
/// `dt` must be positive and finite.
pub fn integrate(body: &mut Body, dt: f64, gravity: Vec2) -> Result<(), PhysicsError> {
    check_dt(dt)?;

    // v = v + (a + g) * dt
    let velocity = body.velocity + (body.acceleration + gravity) * dt;
    // p = p + v * dt
    let center = body.center + velocity * dt;

    if !velocity.is_finite() || !center.is_finite() {
        return Err(PhysicsError::NonFiniteState { name: body.name.clone() });
    }

    body.velocity = velocity;
    body.center = center;
    Ok(())
}

/// Rejects time steps that are zero, negative or not finite.
pub(crate) fn check_dt(dt: f64) -> Result<(), PhysicsError> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(PhysicsError::invalid(format!("dt must be positive and finite, got {dt}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::Plane;
    use crate::common::MaterialFactory;
    const EPSILON: f64 = 1e-9;

    fn test_body() -> Body {
        let plane = Plane::new(1000.0, 2000.0).unwrap();
        let mut materials = MaterialFactory::new();
        Body::with_mass("box", Vec2::new(500.0, 100.0), 100, 100, 1.0, &mut materials, &plane).unwrap()
    }

    #[test]
    fn test_integrate_gravity_only() {
        let mut body = test_body();
        integrate(&mut body, 1.0, Vec2::new(0.0, 5.0)).unwrap();
        assert_eq!(body.velocity(), Vec2::new(0.0, 5.0));
        assert_eq!(body.center(), Vec2::new(500.0, 105.0));
        assert_eq!(body.top_y(), 55.0);
        assert_eq!(body.bottom_y(), 155.0);
    }

    #[test]
    fn test_integrate_constant_velocity_no_gravity() {
        let mut body = test_body();
        body.set_velocity(Vec2::new(10.0, -5.0));
        integrate(&mut body, 0.1, Vec2::ZERO).unwrap();
        assert!((body.center().x - 501.0).abs() < EPSILON);
        assert!((body.center().y - 99.5).abs() < EPSILON);
        assert_eq!(body.velocity(), Vec2::new(10.0, -5.0));
    }

    #[test]
    fn test_integrate_own_acceleration_adds_to_gravity() {
        let mut body = test_body();
        body.set_acceleration(Vec2::new(2.0, 1.0));
        integrate(&mut body, 0.5, Vec2::new(0.0, 5.0)).unwrap();
        // v = (2, 6) * 0.5 = (1, 3); p += v * 0.5
        assert!((body.velocity().x - 1.0).abs() < EPSILON);
        assert!((body.velocity().y - 3.0).abs() < EPSILON);
        assert!((body.center().x - 500.5).abs() < EPSILON);
        assert!((body.center().y - 101.5).abs() < EPSILON);
        // Acceleration is a persistent property, not an accumulator
        assert_eq!(body.acceleration(), Vec2::new(2.0, 1.0));
    }

    #[test]
    fn test_integrate_rejects_bad_dt() {
        let mut body = test_body();
        body.set_velocity(Vec2::new(1.0, 1.0));
        let before = body.clone();
        for dt in [-1.0, 0.0, f64::NAN, f64::INFINITY] {
            let err = body.integrate(dt, Vec2::new(0.0, 5.0)).unwrap_err();
            assert!(matches!(err, PhysicsError::InvalidArgument(_)));
        }
        assert_eq!(body, before);
    }

    #[test]
    fn test_integrate_non_finite_leaves_body_untouched() {
        let mut body = test_body();
        body.set_velocity(Vec2::new(f64::NAN, 0.0));
        let before = body.clone();
        let err = integrate(&mut body, 1.0, Vec2::new(0.0, 5.0)).unwrap_err();
        assert_eq!(err, PhysicsError::NonFiniteState { name: "box".into() });
        // NaN != NaN, so compare the finite parts and the bit pattern
        assert_eq!(body.center(), before.center());
        assert!(body.velocity().x.is_nan());
        assert_eq!(body.velocity().y, 0.0);
    }
}
