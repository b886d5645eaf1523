use scope_resolver_core::{
    ActionPreference, Anchor, Config, Document, DocumentId, FullTarget, InferenceContext,
    InferenceError, LanguageId, Mark, PartialListElement, PartialPrimitiveTarget,
    PartialRangeTarget, PartialTarget, Position, PositionModifier, ScopeType, SourceParser,
    TargetField, TargetInference, TargetScope, TargetShape, TextRange,
};

const GREETER: &str = r#"class Greeter {
  greet(name: string) {
    if (name) {
      console.log(name);
    }
  }
}
const config = { a: 1, b: [2, 3] };
const nested = [[10, 20], 30];
"#;

fn parse(id: &str, language: LanguageId, source: &str) -> Document {
    SourceParser::new()
        .parse(DocumentId::new(id), language, source)
        .unwrap()
}

fn position_of(doc: &Document, needle: &str) -> Position {
    let offset = doc.source().find(needle).expect("needle not in source");
    let before = &doc.source()[..offset];
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    Position::new(
        before.matches('\n').count() as u32,
        (offset - line_start) as u32,
    )
}

fn cursor(doc: &Document, needle: &str) -> TextRange {
    let at = position_of(doc, needle);
    doc.range(at, at).unwrap()
}

/// Explicit mark over the first occurrence of a single-line `needle`
fn span(doc: &Document, needle: &str) -> Mark {
    let start = position_of(doc, needle);
    Mark::Range {
        start,
        end: Position::new(start.line, start.character + needle.len() as u32),
    }
}

fn scope(scope_type: ScopeType) -> PartialTarget {
    PartialPrimitiveTarget::new().with_scope(scope_type).into()
}

fn primitive(target: &FullTarget) -> &scope_resolver_core::PrimitiveTarget {
    target.as_primitive().expect("primitive target")
}

fn texts(doc: &Document, target: &FullTarget) -> Vec<String> {
    target
        .ranges()
        .iter()
        .map(|range| doc.text(range).to_string())
        .collect()
}

#[test]
fn test_scope_type_carries_forward() {
    let doc = parse("greeter.ts", LanguageId::TypeScript, GREETER);
    let ctx = InferenceContext::new(&doc).with_cursor(cursor(&doc, "console"));
    let targets = vec![scope(ScopeType::Class), PartialPrimitiveTarget::new().into()];
    let preferences = vec![ActionPreference::permissive(); 2];

    let resolved = TargetInference::new()
        .infer(&ctx, &targets, &preferences)
        .unwrap();

    let second = primitive(&resolved[1]);
    assert_eq!(
        second.scope,
        TargetScope::Enclosing {
            scope_type: ScopeType::Class
        }
    );
    assert_eq!(second.mark, Mark::Cursor);
    assert_eq!(second.position, PositionModifier::Contents);
    assert!(texts(&doc, &resolved[1])[0].starts_with("class Greeter {"));
    assert_eq!(
        second.selections[0].node_kind.as_deref(),
        Some("class_declaration")
    );
}

#[test]
fn test_required_explicit_field_is_reported() {
    let doc = parse("greeter.ts", LanguageId::TypeScript, GREETER);
    let ctx = InferenceContext::new(&doc).with_cursor(cursor(&doc, "console"));
    let preferences = vec![
        ActionPreference::permissive(),
        ActionPreference::permissive().requiring(TargetField::Position),
    ];
    let targets = vec![
        PartialPrimitiveTarget::new()
            .with_scope(ScopeType::Statement)
            .with_position(PositionModifier::After)
            .into(),
        scope(ScopeType::Statement),
    ];

    // The first preference states no constraint, so the second one decides
    let err = TargetInference::new()
        .infer(&ctx, &targets, &preferences)
        .unwrap_err();
    assert_eq!(
        err,
        InferenceError::MissingField {
            index: 1,
            field: TargetField::Position
        }
    );
}

#[test]
fn test_infer_is_deterministic() {
    let doc = parse("greeter.ts", LanguageId::TypeScript, GREETER);
    let ctx = InferenceContext::new(&doc)
        .with_cursor(cursor(&doc, "console"))
        .with_cursor(cursor(&doc, "2,"));
    let targets = vec![
        scope(ScopeType::Statement),
        PartialTarget::List {
            elements: vec![
                PartialListElement::Primitive(
                    PartialPrimitiveTarget::new().with_position(PositionModifier::Entire),
                ),
                PartialListElement::Primitive(PartialPrimitiveTarget::new()),
            ],
        },
    ];
    let preferences = vec![ActionPreference::permissive(); 2];

    let mut engine = TargetInference::new();
    let first = engine.infer(&ctx, &targets, &preferences);
    let second = engine.infer(&ctx, &targets, &preferences);
    let fresh = TargetInference::new().infer(&ctx, &targets, &preferences);
    assert!(first.is_ok());
    assert_eq!(first, second);
    assert_eq!(first, fresh);

    let failing = vec![scope(ScopeType::IfStatement)];
    let ctx = InferenceContext::new(&doc).with_cursor(cursor(&doc, "const config"));
    let errors = (
        engine.infer(&ctx, &failing, &preferences[..1]),
        engine.infer(&ctx, &failing, &preferences[..1]),
    );
    assert!(errors.0.is_err());
    assert_eq!(errors.0, errors.1);
}

#[test]
fn test_unsupported_and_missing_scopes() {
    let json = parse("data.json", LanguageId::Json, r#"{"a": [1]}"#);
    let ctx = InferenceContext::new(&json).with_cursor(cursor(&json, "1"));
    let preferences = vec![ActionPreference::permissive()];

    let err = TargetInference::new()
        .infer(&ctx, &[scope(ScopeType::Class)], &preferences)
        .unwrap_err();
    assert_eq!(
        err,
        InferenceError::UnsupportedScope {
            index: 0,
            language: LanguageId::Json,
            scope_type: ScopeType::Class
        }
    );

    let doc = parse("greeter.ts", LanguageId::TypeScript, GREETER);
    let at = cursor(&doc, "const config");
    let ctx = InferenceContext::new(&doc).with_cursor(at);
    let err = TargetInference::new()
        .infer(&ctx, &[scope(ScopeType::IfStatement)], &preferences)
        .unwrap_err();
    assert_eq!(
        err,
        InferenceError::NoEnclosingScope {
            index: 0,
            scope_type: ScopeType::IfStatement,
            anchor: at.start
        }
    );
}

#[test]
fn test_ordinal_picks_outer_match() {
    let doc = parse("greeter.ts", LanguageId::TypeScript, GREETER);
    let ctx = InferenceContext::new(&doc).with_cursor(cursor(&doc, "10"));
    let preferences = vec![ActionPreference::permissive()];

    let mut engine = TargetInference::new();
    let inner = engine
        .infer(&ctx, &[scope(ScopeType::Collection)], &preferences)
        .unwrap();
    assert_eq!(texts(&doc, &inner[0]), vec!["10, 20"]);

    let outer_target: PartialTarget = PartialPrimitiveTarget::new()
        .with_scope(ScopeType::Collection)
        .with_ordinal(2)
        .into();
    let outer = engine.infer(&ctx, &[outer_target], &preferences).unwrap();
    assert_eq!(texts(&doc, &outer[0]), vec!["[10, 20], 30"]);
    assert_eq!(primitive(&outer[0]).ordinal, 2);

    let too_far: PartialTarget = PartialPrimitiveTarget::new()
        .with_scope(ScopeType::Collection)
        .with_ordinal(3)
        .into();
    assert!(matches!(
        engine.infer(&ctx, &[too_far], &preferences),
        Err(InferenceError::NoEnclosingScope { .. })
    ));
}

#[test]
fn test_position_modifiers_and_action_defaults() {
    let doc = parse("greeter.ts", LanguageId::TypeScript, GREETER);
    let ctx = InferenceContext::new(&doc).with_cursor(cursor(&doc, "2,"));
    let chuck = Config::default().action("chuck").unwrap();

    let resolved = TargetInference::new()
        .infer(&ctx, &[scope(ScopeType::CollectionItem)], &chuck)
        .unwrap();
    assert_eq!(primitive(&resolved[0]).position, PositionModifier::Entire);
    assert_eq!(texts(&doc, &resolved[0]), vec!["2, "]);

    let before: PartialTarget = PartialPrimitiveTarget::new()
        .with_scope(ScopeType::CollectionItem)
        .with_position(PositionModifier::Before)
        .into();
    let take = vec![ActionPreference::permissive()];
    let resolved = TargetInference::new().infer(&ctx, &[before.clone()], &take).unwrap();
    let range = resolved[0].ranges()[0];
    assert!(range.is_empty());
    let next = TextRange::new(range.start, range.end, range.start_byte, range.start_byte + 1);
    assert_eq!(doc.text(&next), "2");

    let err = TargetInference::new()
        .infer(&ctx, &[before], &[ActionPreference::permissive().with_shape(TargetShape::Range)])
        .unwrap_err();
    assert_eq!(err, InferenceError::RangeRequired { index: 0 });
}

#[test]
fn test_range_target_covers_both_ends() {
    let doc = parse("greeter.ts", LanguageId::TypeScript, GREETER);
    let ctx = InferenceContext::new(&doc).with_cursor(cursor(&doc, "a:"));
    let target = PartialTarget::Range(PartialRangeTarget {
        start: PartialPrimitiveTarget::new().with_scope(ScopeType::CollectionItem),
        // Scope type carries over from the start
        end: PartialPrimitiveTarget::new().with_mark(span(&doc, "b")),
        exclude_start: false,
        exclude_end: false,
    });

    let resolved = TargetInference::new()
        .infer(&ctx, &[target], &[ActionPreference::permissive()])
        .unwrap();
    match &resolved[0] {
        FullTarget::Range(range) => {
            assert_eq!(doc.text(&range.covering), "a: 1, b: [2, 3]");
            assert_eq!(
                range.end.scope,
                TargetScope::Enclosing {
                    scope_type: ScopeType::CollectionItem
                }
            );
        }
        other => panic!("expected a range target, got {other:?}"),
    }
}

#[test]
fn test_list_targets_and_multiplicity() {
    let doc = parse("greeter.ts", LanguageId::TypeScript, GREETER);
    let ctx = InferenceContext::new(&doc);
    let list = PartialTarget::List {
        elements: vec![
            PartialListElement::Primitive(
                PartialPrimitiveTarget::new()
                    .with_mark(span(&doc, "a:"))
                    .with_scope(ScopeType::CollectionKey),
            ),
            PartialListElement::Primitive(PartialPrimitiveTarget::new().with_mark(span(&doc, "b:"))),
        ],
    };

    let resolved = TargetInference::new()
        .infer(&ctx, std::slice::from_ref(&list), &[ActionPreference::permissive()])
        .unwrap();
    assert_eq!(resolved[0].selection_count(), 2);
    assert_eq!(texts(&doc, &resolved[0]), vec!["a", "b"]);

    let err = TargetInference::new()
        .infer(&ctx, &[list], &[ActionPreference::permissive().single()])
        .unwrap_err();
    assert_eq!(err, InferenceError::MultipleTargets { index: 0, count: 2 });
}

#[test]
fn test_preference_count_must_match() {
    let doc = parse("greeter.ts", LanguageId::TypeScript, GREETER);
    let ctx = InferenceContext::new(&doc);
    let err = TargetInference::new()
        .infer(&ctx, &[scope(ScopeType::Class)], &[])
        .unwrap_err();
    assert_eq!(
        err,
        InferenceError::PreferenceCount {
            expected: 1,
            actual: 0
        }
    );
}

#[test]
fn test_nothing_mark_and_exact_scope() {
    let doc = parse("greeter.ts", LanguageId::TypeScript, GREETER);
    let ctx = InferenceContext::new(&doc).with_cursor(cursor(&doc, "greet("));
    let preferences = vec![ActionPreference::permissive(); 2];
    let targets = vec![
        PartialPrimitiveTarget::new().with_mark(Mark::Nothing).into(),
        PartialPrimitiveTarget::new().with_mark(span(&doc, "greet")).into(),
    ];

    let resolved = TargetInference::new()
        .infer(&ctx, &targets, &preferences)
        .unwrap();
    assert_eq!(resolved[0].selection_count(), 0);
    let exact = primitive(&resolved[1]);
    assert_eq!(exact.scope, TargetScope::Exact);
    assert_eq!(exact.selections[0].node_kind, None);
    assert_eq!(texts(&doc, &resolved[1]), vec!["greet"]);
}

#[test]
fn test_marks_without_anchors_are_rejected() {
    let doc = parse("greeter.ts", LanguageId::TypeScript, GREETER);
    let ctx = InferenceContext::new(&doc);
    let chuck = ActionPreference::permissive()
        .with_shape(TargetShape::Range)
        .single();

    let err = TargetInference::new()
        .infer(&ctx, &[scope(ScopeType::Class)], std::slice::from_ref(&chuck))
        .unwrap_err();
    assert_eq!(err, InferenceError::NoAnchor { index: 0 });

    for mark in [Mark::That, Mark::Source] {
        let target: PartialTarget = PartialPrimitiveTarget::new().with_mark(mark).into();
        let err = TargetInference::new()
            .infer(&ctx, &[target], &[ActionPreference::permissive()])
            .unwrap_err();
        assert_eq!(err, InferenceError::NoAnchor { index: 0 });
    }

    let nothing: PartialTarget = PartialPrimitiveTarget::new().with_mark(Mark::Nothing).into();
    let err = TargetInference::new()
        .infer(&ctx, &[nothing], &[chuck])
        .unwrap_err();
    assert_eq!(err, InferenceError::RangeRequired { index: 0 });
}

#[test]
fn test_cross_document_ranges_and_unknown_documents() {
    let left = parse("left.json", LanguageId::Json, "[1, 2]");
    let right = parse("right.json", LanguageId::Json, "[3, 4]");
    let that = vec![Anchor::new(right.id().clone(), cursor(&right, "4"))];
    let ctx = InferenceContext::new(&left)
        .with_document(&right)
        .with_cursor(cursor(&left, "1"))
        .with_that(that);

    let target = PartialTarget::Range(PartialRangeTarget {
        start: PartialPrimitiveTarget::new().with_scope(ScopeType::CollectionItem),
        end: PartialPrimitiveTarget::new().with_mark(Mark::That),
        exclude_start: false,
        exclude_end: false,
    });
    let err = TargetInference::new()
        .infer(&ctx, &[target], &[ActionPreference::permissive()])
        .unwrap_err();
    assert_eq!(err, InferenceError::RangeAcrossDocuments { index: 0 });

    let ghost = vec![Anchor::new(DocumentId::new("ghost.json"), cursor(&left, "1"))];
    let ctx = InferenceContext::new(&left).with_source(ghost);
    let target: PartialTarget = PartialPrimitiveTarget::new().with_mark(Mark::Source).into();
    let err = TargetInference::new()
        .infer(&ctx, &[target], &[ActionPreference::permissive()])
        .unwrap_err();
    assert_eq!(
        err,
        InferenceError::UnknownDocument {
            index: 0,
            document: "ghost.json".to_string()
        }
    );
}

#[test]
fn test_depth_bound_stops_the_walk() {
    let doc = parse("greeter.ts", LanguageId::TypeScript, GREETER);
    let ctx = InferenceContext::new(&doc).with_cursor(cursor(&doc, "console"));
    let preferences = vec![ActionPreference::permissive()];

    let err = TargetInference::new()
        .with_max_depth(2)
        .infer(&ctx, &[scope(ScopeType::Class)], &preferences)
        .unwrap_err();
    assert!(matches!(err, InferenceError::NoEnclosingScope { .. }));

    let config = Config {
        max_ancestor_depth: 2,
        ..Default::default()
    };
    assert!(
        TargetInference::from_config(&config)
            .infer(&ctx, &[scope(ScopeType::Class)], &preferences)
            .is_err()
    );
}

#[test]
fn test_multiple_cursors_and_rust_documents() {
    let source = "fn one() {\n    a();\n}\n\nfn two() {\n    b();\n}\n";
    let doc = parse("lib.rs", LanguageId::Rust, source);
    let ctx = InferenceContext::new(&doc)
        .with_cursor(cursor(&doc, "a()"))
        .with_cursor(cursor(&doc, "b()"));

    let mut engine = TargetInference::new();
    let resolved = engine
        .infer(&ctx, &[scope(ScopeType::NamedFunction)], &[ActionPreference::permissive()])
        .unwrap();
    assert_eq!(
        texts(&doc, &resolved[0]),
        vec!["fn one() {\n    a();\n}", "fn two() {\n    b();\n}"]
    );
    assert_eq!(engine.language_cache().stats().hits, 1);
}
