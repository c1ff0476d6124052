use proptest::prelude::*;

use crate::types::{
    field_type::{FieldType, ObjectType, PrimitiveType},
    method_descriptor::{MethodDescriptor, ReturnType},
    qualified_name::QualifiedName,
};

const MAX_PARAMS: usize = 10;

pub(crate) fn arb_class_name() -> impl Strategy<Value = String> {
    let arb_ident = prop::string::string_regex(r"[a-zA-Z][\w\$_]*").expect("The regex is invalid");
    prop::collection::vec(arb_ident, 1..10).prop_map(|v| v.join("/"))
}

pub(crate) fn arb_non_array_field_type() -> impl Strategy<Value = FieldType> {
    prop_oneof![
        any::<PrimitiveType>().prop_map(FieldType::Base),
        arb_class_name()
            .prop_map(|it| {
                QualifiedName::from_slash_qualified(&it).expect("The class name is invalid")
            })
            .prop_map(ObjectType::new)
            .prop_map(FieldType::Object),
    ]
}

prop_compose! {
    fn arb_array_field_type()(
        t in arb_non_array_field_type(),
        dim in 1..=u8::MAX
    ) -> FieldType {
        FieldType::array_of(t, dim)
    }
}

pub(crate) fn arb_field_type() -> impl Strategy<Value = FieldType> {
    prop_oneof![arb_non_array_field_type(), arb_array_field_type()]
}

pub(crate) fn arb_return_type() -> impl Strategy<Value = ReturnType> {
    prop_oneof![
        Just(ReturnType::Void),
        arb_field_type().prop_map(ReturnType::Some),
    ]
}

prop_compose! {
    pub(crate) fn arb_method_descriptor()(
        params in prop::collection::vec(arb_field_type(), 0..MAX_PARAMS),
        ret in arb_return_type(),
    ) -> MethodDescriptor {
        MethodDescriptor::new(params, ret)
    }
}
