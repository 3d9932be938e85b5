//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - pattern polarity and basename matching
//! - suffix exemption
//! - purity and order-insensitivity of evaluation

use crate::checker::Checker;
use crate::classifier::is_suffix_exempt;
use crate::engine::PolicyEngine;
use crate::model::{DeclarationKind, DeclarationNode, ProjectModel, SourceFileModel};
use crate::pattern::{PatternSet, is_file_allowed};
use crate::policy::RuleOptions;
use crate::test_support::{config_with_rule, record};
use declguard_types::{Severity, SourcePath};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_segment() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_-]{0,10}").unwrap()
}

fn arb_extension() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(".ts"), Just(".tsx"), Just(".d.ts"), Just(".mts")]
}

/// Repo-relative paths like `src/a/b.ts`.
fn arb_path() -> impl Strategy<Value = String> {
    (prop::collection::vec(arb_segment(), 1..4), arb_extension())
        .prop_map(|(segments, ext)| format!("{}{}", segments.join("/"), ext))
}

/// Patterns from the flat dialect, either polarity.
fn arb_pattern() -> impl Strategy<Value = String> {
    let body = prop_oneof![
        Just("*.d.ts".to_string()),
        Just("*".to_string()),
        Just("src*".to_string()),
        arb_segment().prop_map(|s| format!("{s}*")),
        arb_segment().prop_map(|s| format!("*/{s}/*")),
        arb_segment().prop_map(|s| format!("{s}.?s")),
    ];
    (any::<bool>(), body).prop_map(|(neg, b)| if neg { format!("!{b}") } else { b })
}

fn arb_identifier() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][A-Za-z0-9]{0,15}").unwrap()
}

fn arb_suffixes() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![
            Just("Props".to_string()),
            Just("Dto".to_string()),
            prop::string::string_regex("[A-Za-z]{1,4}").unwrap(),
        ],
        0..3,
    )
}

fn arb_kind() -> impl Strategy<Value = DeclarationKind> {
    prop_oneof![Just(DeclarationKind::Interface), Just(DeclarationKind::TypeAlias)]
}

fn arb_project() -> impl Strategy<Value = ProjectModel> {
    prop::collection::vec(
        (
            arb_path(),
            prop::collection::vec((arb_kind(), arb_identifier(), any::<bool>()), 0..5),
        ),
        0..6,
    )
    .prop_map(|files| ProjectModel {
        files: files
            .into_iter()
            .map(|(path, decls)| SourceFileModel {
                path: SourcePath::new(path),
                declarations: decls
                    .into_iter()
                    .enumerate()
                    .map(|(i, (kind, name, exported))| DeclarationNode {
                        kind,
                        name,
                        exported,
                        line: Some(i as u32 + 1),
                        col: Some(1),
                    })
                    .collect(),
            })
            .collect(),
    })
}

fn basename(path: &str) -> String {
    SourcePath::new(path).basename().to_string()
}

proptest! {
    #[test]
    fn exact_basename_pattern_allows_file(
        path in arb_path(),
        others in prop::collection::vec(arb_pattern(), 0..4),
    ) {
        let mut patterns: Vec<String> = others.into_iter().filter(|p| !p.starts_with('!')).collect();
        patterns.push(basename(&path));
        let set = PatternSet::compile(&patterns).unwrap();
        prop_assert!(is_file_allowed(&path, &set));
    }

    #[test]
    fn negated_basename_always_wins(
        path in arb_path(),
        others in prop::collection::vec(arb_pattern(), 0..4),
    ) {
        let mut patterns = others;
        patterns.push(basename(&path));
        prop_assert!(is_file_allowed(&path, &PatternSet::compile(&patterns).unwrap())
            || patterns.iter().any(|p| p.starts_with('!')));

        patterns.push(format!("!{}", basename(&path)));
        prop_assert!(!is_file_allowed(&path, &PatternSet::compile(&patterns).unwrap()));
    }

    #[test]
    fn all_negative_sets_allow_nothing(
        path in arb_path(),
        negatives in prop::collection::vec(arb_segment(), 1..4),
    ) {
        let patterns: Vec<String> = negatives.iter().map(|s| format!("!{s}*")).collect();
        prop_assert!(!is_file_allowed(&path, &PatternSet::compile(&patterns).unwrap()));
    }

    #[test]
    fn star_prefix_pattern_matches_paths_with_that_prefix(
        prefix in arb_segment(),
        rest in arb_path(),
    ) {
        let path = format!("{prefix}/{rest}");
        let set = PatternSet::compile(&[format!("{prefix}*")]).unwrap();
        prop_assert!(is_file_allowed(&path, &set));
    }

    #[test]
    fn pattern_order_is_irrelevant(
        path in arb_path(),
        patterns in prop::collection::vec(arb_pattern(), 1..6),
    ) {
        let mut reversed = patterns.clone();
        reversed.reverse();
        prop_assert_eq!(
            is_file_allowed(&path, &PatternSet::compile(&patterns).unwrap()),
            is_file_allowed(&path, &PatternSet::compile(&reversed).unwrap())
        );
    }

    #[test]
    fn suffix_exemption_is_ends_with_any(
        stem in arb_identifier(),
        suffixes in arb_suffixes(),
        pick in any::<prop::sample::Index>(),
    ) {
        if suffixes.is_empty() {
            prop_assert!(!is_suffix_exempt(&stem, &suffixes));
        } else {
            let chosen = pick.get(&suffixes);
            let name = format!("{stem}{chosen}");
            prop_assert!(is_suffix_exempt(&name, &suffixes));
            prop_assert!(is_suffix_exempt(chosen, &suffixes));
        }
        prop_assert_eq!(
            is_suffix_exempt(&stem, &suffixes),
            suffixes.iter().any(|s| stem.ends_with(s.as_str()))
        );
    }

    #[test]
    fn unexported_declarations_never_violate(
        path in arb_path(),
        patterns in prop::collection::vec(arb_pattern(), 1..5),
        suffixes in arb_suffixes(),
        kind in arb_kind(),
        name in arb_identifier(),
    ) {
        let engine = PolicyEngine::new(&RuleOptions {
            allowed_file_patterns: patterns,
            allowed_type_suffixes: suffixes,
        }).unwrap();
        let decl = record(kind, &name, false);
        prop_assert!(engine.evaluate(&decl, &SourcePath::new(path)).is_allowed());
    }

    #[test]
    fn evaluation_is_pure_and_scope_consistent(
        path in arb_path(),
        patterns in prop::collection::vec(arb_pattern(), 1..5),
        suffixes in arb_suffixes(),
        kind in arb_kind(),
        name in arb_identifier(),
        exported in any::<bool>(),
    ) {
        let engine = PolicyEngine::new(&RuleOptions {
            allowed_file_patterns: patterns,
            allowed_type_suffixes: suffixes,
        }).unwrap();
        let path = SourcePath::new(path);
        let decl = record(kind, &name, exported);

        let first = engine.evaluate(&decl, &path);
        prop_assert_eq!(&first, &engine.evaluate(&decl, &path));
        prop_assert_eq!(&first, &engine.file(&path).evaluate(&decl));
    }

    #[test]
    fn violation_requires_all_three_conditions(
        path in arb_path(),
        patterns in prop::collection::vec(arb_pattern(), 1..5),
        suffixes in arb_suffixes(),
        kind in arb_kind(),
        name in arb_identifier(),
        exported in any::<bool>(),
    ) {
        let set = PatternSet::compile(&patterns).unwrap();
        let file_allowed = is_file_allowed(&path, &set);
        let exempt = is_suffix_exempt(&name, &suffixes);

        let engine = PolicyEngine::new(&RuleOptions {
            allowed_file_patterns: patterns,
            allowed_type_suffixes: suffixes,
        }).unwrap();
        let verdict = engine.evaluate(&record(kind, &name, exported), &SourcePath::new(path));

        prop_assert_eq!(!verdict.is_allowed(), exported && !file_allowed && !exempt);
    }

    #[test]
    fn findings_do_not_depend_on_file_order(model in arb_project()) {
        let cfg = config_with_rule(Severity::Error, RuleOptions::default());
        let checker = Checker::new(&cfg).unwrap();

        let mut reversed = model.clone();
        reversed.files.reverse();

        let a = checker.evaluate(&model).unwrap();
        let b = checker.evaluate(&reversed).unwrap();
        prop_assert_eq!(a.findings, b.findings);
        prop_assert_eq!(a.verdict, b.verdict);
    }
}
