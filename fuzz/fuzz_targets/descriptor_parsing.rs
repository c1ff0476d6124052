#![no_main]

use jvm_descriptors::types::{field_type::FieldType, method_descriptor::MethodDescriptor};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(descriptor) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(method) = descriptor.parse::<MethodDescriptor>() {
        assert_eq!(method.descriptor(), descriptor);
    }
    if let Ok(field_type) = descriptor.parse::<FieldType>() {
        assert_eq!(field_type.descriptor(), descriptor);
    }
});
