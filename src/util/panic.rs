/// Asserts that running `$run` panics. If an expected message is given, the panic's payload must
/// be a formatted message equal to it.
macro_rules! assert_panics {
    ($run:block) => {
        assert!(std::panic::catch_unwind(|| $run).is_err(), "assertion failed to panic");
        println!("^ panic caught");
    };
    ($run:block, $expected:expr) => {
        match std::panic::catch_unwind(|| $run) {
            Ok(_) => panic!("assertion failed to panic"),
            Err(payload) => {
                let message = payload.downcast_ref::<String>().map(String::as_str)
                    .or_else(|| payload.downcast_ref::<&str>().copied());
                assert_eq!(message, Some(&*$expected.to_string()), "panicked with the wrong message");
                println!("^ panic caught");
            },
        }
    };
}

pub(crate) use assert_panics;
