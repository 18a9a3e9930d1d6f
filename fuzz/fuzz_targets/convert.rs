#![no_main]

use libfuzzer_sys::fuzz_target;
use ts_significance::convert;

fuzz_target!(|data: &[u8]| {
    if data.len() < 16 {
        return;
    }

    let mut ts = [0u8; 8];
    let mut dof = [0u8; 8];
    ts.copy_from_slice(&data[..8]);
    dof.copy_from_slice(&data[8..16]);

    // Any bit pattern either converts to a valid sigma or is rejected; never panics
    if let Ok(sigma) = convert(f64::from_le_bytes(ts), f64::from_le_bytes(dof)) {
        assert!(sigma >= 0.0 && !sigma.is_nan());
    }
});
