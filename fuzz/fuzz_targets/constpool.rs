#![no_main]

use libfuzzer_sys::fuzz_target;
use classpool::{ConstantPool, DecoderConfig, Parser};

fuzz_target!(|data: &[u8]| {
    if let Ok(pool) = ConstantPool::from_bytes(data) {
        for index in 0..=pool.count() {
            let _ = pool.render_integer_float_class_string(index);
            let _ = pool.render_long_double_string(index);
        }
    }

    let mut parser = Parser::new(data);
    let _ = ConstantPool::decode_with(&mut parser, &DecoderConfig::lenient());
});
