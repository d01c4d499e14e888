use dualmodel::{ErrorKind, ErrorOrigin, convert, primitives::CoercionPolicy};

#[test]
fn helpers_fail_before_the_load_phase() {
    let err = dualmodel::registry().expect_err("nothing registered");
    assert_eq!(err.kind, ErrorKind::NotRegistered);
    assert_eq!(err.origin, ErrorOrigin::Registry);

    let err = convert::new_persistence("Note").expect_err("nothing registered");
    assert_eq!(err.kind, ErrorKind::NotRegistered);

    assert_eq!(convert::transformer().policy(), CoercionPolicy::Strict);
}
