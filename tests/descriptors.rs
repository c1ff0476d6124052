use std::{
    collections::{HashMap, HashSet},
    str::FromStr,
};

use jvm_descriptors::types::{
    InvalidDescriptor, InvalidMethodDescriptor,
    field_type::{ArrayType, FieldType, ObjectType, PrimitiveType},
    method_descriptor::{MethodDescriptor, ReturnType},
    qualified_name::QualifiedName,
    tree::{self, DescriptorRef},
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Descriptors taken from `java.lang.String` and `java.util.Map`.
const METHOD_DESCRIPTORS: [&str; 8] = [
    "()V",
    "([C)V",
    "([BIILjava/lang/String;)V",
    "(Ljava/lang/CharSequence;)Z",
    "(I)C",
    "()[Ljava/lang/String;",
    "(Ljava/lang/Object;Ljava/lang/Object;)Ljava/lang/Object;",
    "()Ljava/util/Set;",
];

#[test]
fn method_descriptors_round_trip() {
    init_logger();
    for descriptor in METHOD_DESCRIPTORS {
        let parsed = MethodDescriptor::from_str(descriptor).expect("Failed to parse descriptor");
        assert_eq!(parsed.descriptor(), descriptor);
        let reparsed = MethodDescriptor::from_str(parsed.descriptor()).unwrap();
        assert_eq!(parsed, reparsed);
    }
}

#[test]
fn rendering() {
    init_logger();
    let cases = [
        ("([BIILjava/lang/String;)V", "(byte[], int, int, String): void"),
        ("()[Ljava/lang/String;", "(): String[]"),
        (
            "(Ljava/util/Map$Entry;[[D)J",
            "(Map.Entry, double[][]): long",
        ),
    ];
    for (descriptor, rendered) in cases {
        let parsed = MethodDescriptor::from_str(descriptor).unwrap();
        assert_eq!(parsed.to_string(), rendered);
    }
}

#[test]
fn programmatic_and_parsed_descriptors_are_interchangeable() {
    init_logger();
    let string = FieldType::Object(ObjectType::from_name("java.lang.String", true).unwrap());
    let built = MethodDescriptor::new([FieldType::INT, string], ReturnType::VOID);
    let parsed = MethodDescriptor::from_str("(ILjava/lang/String;)V").unwrap();
    assert_eq!(built, parsed);

    let mut names = HashMap::new();
    names.insert(built, "built");
    assert_eq!(names.get(&parsed), Some(&"built"));
}

#[test]
fn primitives_are_shared_constants() {
    let parsed: HashSet<FieldType> = "BCDFIJSZ"
        .chars()
        .map(|it| FieldType::from_str(&it.to_string()).unwrap())
        .collect();
    let constants: HashSet<FieldType> = PrimitiveType::ALL
        .into_iter()
        .map(FieldType::Base)
        .collect();
    assert_eq!(parsed, constants);
    assert!(parsed.contains(&FieldType::LONG));
    assert_eq!(FieldType::LONG.descriptor(), "J");
}

#[test]
fn malformed_descriptors() {
    init_logger();
    assert_eq!(FieldType::from_str(""), Err(InvalidDescriptor::UnexpectedEnd));
    assert_eq!(
        FieldType::from_str("X"),
        Err(InvalidDescriptor::UnexpectedChar {
            found: 'X',
            offset: 0
        })
    );
    assert_eq!(
        FieldType::from_str("Ljava/lang/String"),
        Err(InvalidDescriptor::UnterminatedObjectType { offset: 0 })
    );
    assert_eq!(
        MethodDescriptor::from_str("(I"),
        Err(InvalidMethodDescriptor::MissingClosingParenthesis)
    );
}

#[test]
fn errors_have_readable_messages() {
    let err = MethodDescriptor::from_str("(IQ)V").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid parameter #1: Unexpected character 'Q' at offset 2"
    );
    let err = FieldType::from_str("Ljava..String;").unwrap_err();
    assert_eq!(err.to_string(), "Invalid qualified name: \"java..String\"");
}

#[test]
fn traversal_of_nested_arrays() {
    let int_matrix = FieldType::from_str("[[I").unwrap();
    let visited: Vec<_> = tree::pre_order(&int_matrix).collect();
    assert_eq!(visited.len(), 3);
    assert!(matches!(visited[0], DescriptorRef::Array(_)));
    assert!(matches!(visited[1], DescriptorRef::Array(_)));
    assert_eq!(visited[2], DescriptorRef::Primitive(PrimitiveType::Int));
    assert_eq!(visited[0].descriptor(), "[[I");
    assert_eq!(visited[1].descriptor(), "[I");
}

#[test]
fn collect_referenced_classes() {
    let method = MethodDescriptor::from_str(
        "(Ljava/util/List;[Ljava/lang/String;)Ljava/util/Map$Entry;",
    )
    .unwrap();
    let classes: HashSet<QualifiedName> = tree::referenced_classes(&method).cloned().collect();
    let expected: HashSet<QualifiedName> = [
        "java/util/List",
        "java/lang/String",
        "java/util/Map$Entry",
    ]
    .into_iter()
    .map(|it| QualifiedName::from_str(it).unwrap())
    .collect();
    assert_eq!(classes, expected);
}

#[test]
fn descriptors_are_shareable_across_threads() {
    let method = MethodDescriptor::from_str("([Ljava/lang/String;)V").unwrap();
    let rendered = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| method.to_string()))
            .collect();
        handles
            .into_iter()
            .map(|it| it.join().unwrap())
            .collect::<Vec<_>>()
    });
    assert!(rendered.iter().all(|it| it == "(String[]): void"));
}

#[test]
fn arrays_deeper_than_the_jvm_allows_are_rejected() {
    init_logger();
    let deepest = format!("{}Ljava/lang/Object;", "[".repeat(ArrayType::MAX_DIMENSIONS));
    let parsed = FieldType::from_str(&deepest).unwrap();
    assert_eq!(parsed.dimensions(), ArrayType::MAX_DIMENSIONS);
    drop(parsed);

    let too_deep = format!("{}I", "[".repeat(40_000));
    let err = FieldType::from_str(&too_deep).unwrap_err();
    assert_eq!(err, InvalidDescriptor::TooManyDimensions { offset: 0 });
    assert_eq!(
        err.to_string(),
        "Array type starting at offset 0 has more than 255 dimensions"
    );
    assert!(matches!(
        ReturnType::from_str(&too_deep),
        Err(InvalidDescriptor::TooManyDimensions { offset: 0 })
    ));
}

#[test]
fn synthetic_class_names() {
    let proxy = FieldType::from_str("Ljdk/proxy1/$Proxy12;").unwrap();
    assert_eq!(proxy.to_string(), "$Proxy12");
    let FieldType::Object(object) = &proxy else {
        panic!("Expected an object type, got {proxy:?}");
    };
    assert!(object.class_name().outer_class().is_none());

    let lambda = FieldType::from_str("Lcom/example/Foo$$Lambda;").unwrap();
    assert_eq!(lambda.to_string(), "Foo$$Lambda");
    let FieldType::Object(object) = &lambda else {
        panic!("Expected an object type, got {lambda:?}");
    };
    let outer = ObjectType::new(object.class_name().outer_class().unwrap());
    assert_eq!(outer.descriptor(), "Lcom/example/Foo$;");
    assert_eq!(
        FieldType::from_str(outer.descriptor()).unwrap(),
        FieldType::Object(outer)
    );
}
