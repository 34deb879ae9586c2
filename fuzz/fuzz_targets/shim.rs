// Lets a fuzz target be built as a regular binary (without `--cfg fuzzing`)
// that replays saved inputs, e.g., from `fuzz/artifacts/iso8601_parse/`.
// This makes it possible to debug a crash without cargo-fuzz.

use std::{env, error::Error, ffi::c_int, fs, ptr};

extern "C" {
    // Installs the panic hook that libfuzzer-sys uses to report crashes.
    fn LLVMFuzzerInitialize(
        argc: *const isize,
        argv: *const *const *const u8,
    ) -> c_int;

    // Runs the body of `fuzz_target!` on a single input.
    #[allow(improper_ctypes)]
    fn rust_fuzzer_test_input(input: &[u8]) -> i32;
}

#[allow(unused)]
pub fn main() -> Result<(), Box<dyn Error>> {
    unsafe {
        let _ = LLVMFuzzerInitialize(ptr::null(), ptr::null());
    }
    let mut replayed = 0usize;
    for path in env::args_os().skip(1) {
        let input = fs::read(&path)?;
        unsafe {
            let _ = rust_fuzzer_test_input(&input);
        }
        replayed += 1;
    }
    if replayed == 0 {
        eprintln!("usage: iso8601_parse <input-file>...");
    } else {
        println!("replayed {replayed} inputs without a crash");
    }
    Ok(())
}

#[macro_export]
macro_rules! maybe_define_main {
    () => {
        #[cfg(not(fuzzing))]
        fn main() {
            let _ = $crate::shim::main();
        }
    };
}
