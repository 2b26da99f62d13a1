use air_base::Vec2;

#[test]
fn test_vec2_arithmetic() {
    let a = Vec2::new(100, 100);
    let b = Vec2::new(10, 0);
    assert_eq!(a + b, Vec2::new(110, 100));
    assert_eq!(a - b, Vec2::new(90, 100));
    assert_eq!(b * 3, Vec2::new(30, 0));
}

#[test]
fn test_vec2_from_tuple_and_zero() {
    let v: Vec2<i32> = (320, 240).into();
    assert_eq!(v.x, 320);
    assert_eq!(v.y, 240);
    assert_eq!(Vec2::<i32>::zero(), Vec2::new(0, 0));
}

#[test]
fn test_vec2_debug_is_compact() {
    assert_eq!(format!("{:?}", Vec2::new(1, 2)), "(1, 2)");
}
