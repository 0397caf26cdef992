//! End-to-end corpus loads through the public API.

use rule_harness::{load_corpus, resolve_rules_for_file, IssueKind, Severity};

fn corpus(sources: &[(&str, &str)]) -> rule_harness::LoadOutcome {
    load_corpus(
        sources
            .iter()
            .map(|(id, text)| (id.to_string(), text.to_string())),
    )
}

fn resolved_ids(outcome: &rule_harness::LoadOutcome, path: &str) -> Vec<String> {
    resolve_rules_for_file(&outcome.index, path)
        .iter()
        .map(|d| d.id.clone())
        .collect()
}

#[test]
fn three_document_scenario() {
    // A targets Python, B targets JavaScript, C applies everywhere.
    let outcome = corpus(&[
        ("A", "---\ndescription: python\nglobs: *.py\n---\nPython advice."),
        ("B", "---\ndescription: javascript\nglobs: *.js\n---\nJS advice."),
        ("C", "---\ndescription: general\nmatchAll: true\n---\nGeneral advice."),
    ]);
    assert!(!outcome.has_errors());

    assert_eq!(resolved_ids(&outcome, "main.py"), vec!["A", "C"]);
    assert_eq!(resolved_ids(&outcome, "main.js"), vec!["B", "C"]);
    assert_eq!(resolved_ids(&outcome, "main.go"), vec!["C"]);
}

#[test]
fn most_specific_pattern_first() {
    let outcome = corpus(&[
        ("broad", "---\nglobs: **/*.py\n---\n"),
        ("narrow", "---\nglobs: src/*.py\n---\n"),
    ]);
    assert_eq!(resolved_ids(&outcome, "src/app.py"), vec!["narrow", "broad"]);
}

#[test]
fn malformed_document_is_isolated() {
    let outcome = corpus(&[
        ("ok-1.md", "---\nglobs: *.rs\n---\nRust advice."),
        ("bad.md", "---\ndescription: fence never closes\nRust advice."),
        ("ok-2.md", "---\nglobs: *.rs\n---\nMore Rust advice."),
    ]);

    assert_eq!(outcome.index.len(), 2);
    assert_eq!(resolved_ids(&outcome, "lib.rs"), vec!["ok-1.md", "ok-2.md"]);

    let unterminated: Vec<_> = outcome
        .issues
        .iter()
        .filter(|i| i.kind == IssueKind::UnterminatedFrontMatter)
        .collect();
    assert_eq!(unterminated.len(), 1);
    assert_eq!(unterminated[0].source_id, "bad.md");
}

#[test]
fn duplicate_id_keeps_first_seen() {
    let outcome = corpus(&[
        ("rules/a.md", "---\nid: style\n---\nfirst version"),
        ("rules/b.md", "---\nid: style\n---\nsecond version"),
    ]);

    assert_eq!(outcome.index.len(), 1);
    assert_eq!(outcome.index.by_id("style").unwrap().body, "first version");

    let dup = outcome
        .issues
        .iter()
        .find(|i| i.kind == IssueKind::DuplicateId)
        .expect("duplicate id should be reported");
    assert_eq!(dup.severity, Severity::Warning);
    assert_eq!(dup.source_id, "rules/b.md");
    assert!(!outcome.has_errors());
}

#[test]
fn invalid_glob_keeps_document_alive() {
    let outcome = corpus(&[(
        "fabric.md",
        "---\ndescription: canvas advice\nglobs: src/{canvas}.ts, *.ts\n---\nFabric advice.",
    )]);

    let doc = outcome.index.by_id("fabric.md").unwrap();
    assert_eq!(doc.globs, vec!["*.ts"]);
    assert_eq!(resolved_ids(&outcome, "canvas.ts"), vec!["fabric.md"]);

    assert!(outcome
        .issues
        .iter()
        .any(|i| i.kind == IssueKind::InvalidPattern && i.source_id == "fabric.md"));
}

#[test]
fn zero_glob_document_never_resolves() {
    let outcome = corpus(&[
        ("silent.md", "---\ndescription: no globs\n---\nNever applies."),
        ("py.md", "---\nglobs: *.py\n---\n"),
    ]);
    assert!(outcome.index.by_id("silent.md").is_some());
    for path in ["main.py", "silent.md", "a/b/c.txt", ""] {
        assert!(!resolved_ids(&outcome, path).contains(&"silent.md".to_string()));
    }
}

#[test]
fn unknown_front_matter_keys_round_trip() {
    let outcome = corpus(&[(
        "x.md",
        "---\ndescription: d\nglobs: *.py\nseverity: strict\nowner: infra\n---\nbody",
    )]);
    let doc = outcome.index.by_id("x.md").unwrap();
    assert_eq!(doc.metadata["severity"], "strict");
    assert_eq!(doc.metadata["owner"], "infra");
}

#[test]
fn issues_serialize_for_external_consumers() {
    let outcome = corpus(&[("bad.md", "---\nno close")]);
    let json = serde_json::to_value(&outcome.issues).unwrap();
    let first = &json[0];
    assert_eq!(first["kind"], "UnterminatedFrontMatter");
    assert_eq!(first["severity"], "Error");
    assert_eq!(first["source_id"], "bad.md");
}

#[test]
fn resolution_survives_reload_semantics() {
    // A reload is a wholly new load; nothing carries over implicitly.
    let first = corpus(&[("a.md", "---\nglobs: *.py\n---\nold advice")]);
    let second = corpus(&[("a.md", "---\nglobs: *.go\n---\nnew advice")]);

    assert_eq!(resolved_ids(&first, "main.py"), vec!["a.md"]);
    assert!(resolved_ids(&second, "main.py").is_empty());
    assert_eq!(resolved_ids(&second, "main.go"), vec!["a.md"]);
    assert_ne!(
        first.index.by_id("a.md").unwrap().content_hash,
        second.index.by_id("a.md").unwrap().content_hash
    );
}
