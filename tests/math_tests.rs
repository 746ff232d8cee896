use approx::assert_relative_eq;
use isophys::math::{clamp, Cuboid, Projector, Vector2, Vector3, CLASSIC_PROJECTION_ANGLE};

#[test]
fn test_vector3_operations() {
    let v1 = Vector3::new(1.0, 2.0, 3.0);
    let v2 = Vector3::new(4.0, 5.0, 6.0);

    // Addition
    let sum = v1 + v2;
    assert_eq!(sum.x, 5.0);
    assert_eq!(sum.y, 7.0);
    assert_eq!(sum.z, 9.0);

    // Subtraction
    let diff = v2 - v1;
    assert_eq!(diff.x, 3.0);
    assert_eq!(diff.y, 3.0);
    assert_eq!(diff.z, 3.0);

    // Scalar multiplication and division
    let scaled = v1 * 2.0;
    assert_eq!(scaled.x, 2.0);
    assert_eq!(scaled.y, 4.0);
    assert_eq!(scaled.z, 6.0);
    let halved = scaled / 2.0;
    assert_eq!(halved, v1);

    // Negation
    let neg = -v1;
    assert_eq!(neg.x, -1.0);
    assert_eq!(neg.y, -2.0);
    assert_eq!(neg.z, -3.0);

    // Dot product
    let dot = v1.dot(&v2);
    assert_eq!(dot, 1.0 * 4.0 + 2.0 * 5.0 + 3.0 * 6.0);

    // Length
    let length = v1.length();
    assert_relative_eq!(length, (1.0f32 + 4.0 + 9.0).sqrt());
    assert_relative_eq!(v1.length_squared(), 14.0);

    // Distance
    assert_relative_eq!(v1.distance(&v2), (27.0f32).sqrt());
    assert_relative_eq!(v1.distance_squared(&v2), 27.0);

    // Zero checks
    assert!(Vector3::zero().is_zero());
    assert!(!v1.is_zero());
}

#[test]
fn test_vector2_operations() {
    let a = Vector2::new(3.0, 4.0);
    let b = Vector2::new(1.0, 1.0);

    assert_relative_eq!(a.length(), 5.0);
    assert_relative_eq!(a.distance(&Vector2::zero()), 5.0);

    let sum = a + b;
    assert_eq!(sum.x, 4.0);
    assert_eq!(sum.y, 5.0);

    assert!(Vector2::zero().is_zero());
    assert!(!a.is_zero());
}

#[test]
fn test_clamp() {
    assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
    assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
    assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
}

#[test]
fn test_cuboid_geometry() {
    let c = Cuboid::new(10.0, 20.0, 30.0, 4.0, 6.0, 8.0);

    assert_eq!(c.front_x(), 14.0);
    assert_eq!(c.front_y(), 26.0);
    assert_eq!(c.top(), 38.0);

    let center = c.center();
    assert_eq!(center.x, 12.0);
    assert_eq!(center.y, 23.0);
    assert_eq!(center.z, 34.0);

    // Containment is inclusive of the faces
    assert!(c.contains(10.0, 20.0, 30.0));
    assert!(c.contains(14.0, 26.0, 38.0));
    assert!(c.contains(12.0, 23.0, 34.0));
    assert!(!c.contains(9.9, 23.0, 34.0));
    assert!(!c.contains(12.0, 26.1, 34.0));

    // A degenerate cuboid contains nothing
    let flat = Cuboid::new(0.0, 0.0, 0.0, 4.0, 4.0, 0.0);
    assert!(!flat.contains(2.0, 2.0, 0.0));
}

#[test]
fn test_cuboid_corner_order() {
    let c = Cuboid::new(1.0, 2.0, 3.0, 10.0, 20.0, 30.0);
    let corners = c.corners();

    // Binary axis order: x is the most significant bit, z the least
    assert_eq!(corners[0], Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(corners[1], Vector3::new(1.0, 2.0, 33.0));
    assert_eq!(corners[2], Vector3::new(1.0, 22.0, 3.0));
    assert_eq!(corners[3], Vector3::new(1.0, 22.0, 33.0));
    assert_eq!(corners[4], Vector3::new(11.0, 2.0, 3.0));
    assert_eq!(corners[5], Vector3::new(11.0, 2.0, 33.0));
    assert_eq!(corners[6], Vector3::new(11.0, 22.0, 3.0));
    assert_eq!(corners[7], Vector3::new(11.0, 22.0, 33.0));
}

#[test]
fn test_cuboid_intersection() {
    let a = Cuboid::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0);
    let b = Cuboid::new(5.0, 5.0, 5.0, 10.0, 10.0, 10.0);
    let c = Cuboid::new(20.0, 20.0, 20.0, 10.0, 10.0, 10.0);

    // Overlapping pair intersects, symmetrically
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));

    // Far apart
    assert!(!a.intersects(&c));
    assert!(!c.intersects(&a));

    // Exactly shared faces do not intersect (exclusive boundaries)
    let touching_x = Cuboid::new(10.0, 0.0, 0.0, 10.0, 10.0, 10.0);
    assert!(!a.intersects(&touching_x));
    assert!(!touching_x.intersects(&a));

    let touching_z = Cuboid::new(0.0, 0.0, 10.0, 10.0, 10.0, 10.0);
    assert!(!a.intersects(&touching_z));
    assert!(!touching_z.intersects(&a));

    // A cuboid intersects itself
    assert!(a.intersects(&a));
}

#[test]
fn test_projection_known_values() {
    let projector = Projector::default();
    assert_relative_eq!(projector.projection_angle, CLASSIC_PROJECTION_ANGLE);

    // A point on the x axis projects right and down by the angle's cos/sin
    let p = projector.project(&Vector3::new(10.0, 0.0, 0.0));
    assert_relative_eq!(p.x, 10.0 * CLASSIC_PROJECTION_ANGLE.cos(), epsilon = 1e-5);
    assert_relative_eq!(p.y, 10.0 * CLASSIC_PROJECTION_ANGLE.sin(), epsilon = 1e-5);

    // Elevation moves the screen point straight up
    let raised = projector.project(&Vector3::new(10.0, 0.0, 7.0));
    assert_relative_eq!(raised.x, p.x, epsilon = 1e-5);
    assert_relative_eq!(raised.y, p.y - 7.0, epsilon = 1e-5);

    // x and y are symmetric about the screen's vertical axis
    let px = projector.project(&Vector3::new(10.0, 0.0, 0.0));
    let py = projector.project(&Vector3::new(0.0, 10.0, 0.0));
    assert_relative_eq!(px.x, -py.x, epsilon = 1e-5);
    assert_relative_eq!(px.y, py.y, epsilon = 1e-5);
}

#[test]
fn test_projection_round_trip() {
    let projector = Projector::new(Vector2::new(400.0, 300.0), CLASSIC_PROJECTION_ANGLE);

    let original = Vector3::new(120.0, -45.0, 33.0);
    let screen = projector.project(&original);
    let recovered = projector.unproject(&screen, original.z);

    assert_relative_eq!(recovered.x, original.x, epsilon = 1e-3);
    assert_relative_eq!(recovered.y, original.y, epsilon = 1e-3);
    assert_relative_eq!(recovered.z, original.z, epsilon = 1e-3);
}

#[test]
fn test_nalgebra_interop() {
    let v3 = Vector3::new(1.5, -2.5, 3.25);
    let na3 = v3.to_nalgebra();
    assert_eq!(na3.x, 1.5);
    assert_eq!(na3.y, -2.5);
    assert_eq!(na3.z, 3.25);
    assert_eq!(Vector3::from_nalgebra(&na3), v3);

    let v2 = Vector2::new(-4.75, 8.5);
    let na2 = v2.to_nalgebra();
    assert_eq!(na2.x, -4.75);
    assert_eq!(na2.y, 8.5);
    assert_eq!(Vector2::from_nalgebra(&na2), v2);
}
