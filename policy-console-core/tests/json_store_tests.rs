#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `JsonRuleStore`, covering the `RuleStore` trait
//! implementation over a repository directory, signer requirements and
//! persistence across reopen.

use std::fs;

use policy_console_core::repository::PolicyDocument;
use policy_console_core::{
    load_repository, load_signer, GlobalRule, JsonRuleStore, Repository, Rule, RuleStore,
    StoreError,
};

// ===== Helpers =====

const POLICY: &str = "targets";

fn create_repository() -> (Repository, tempfile::TempDir) {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    fs::write(tmp.path().join("signing.key"), b"test signing key").unwrap();
    let repo = load_repository(tmp.path()).expect("failed to load repository");
    (repo, tmp)
}

fn signed_store(repo: &Repository) -> JsonRuleStore {
    let signer = load_signer(repo, Some("signing.key")).expect("failed to load signer");
    repo.open_store(POLICY, Some(signer))
}

fn make_rule(name: &str, key: &str) -> Rule {
    Rule::new(name, format!("git:refs/heads/{name}"), key)
}

fn add(store: &mut JsonRuleStore, rule: &Rule) {
    store.add_rule(rule, &rule.principals()).unwrap();
}

fn names(store: &JsonRuleStore) -> Vec<String> {
    store
        .fetch_rules()
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect()
}

// ===== Rule Tests =====

#[test]
fn empty_repository_has_no_rules() {
    let (repo, _tmp) = create_repository();
    let store = signed_store(&repo);
    assert!(store.fetch_rules().unwrap().is_empty());
    assert!(store.fetch_global_rules().unwrap().is_empty());
    assert!(!repo.policy_file().exists());
}

#[test]
fn rules_persist_across_reopen() {
    let (repo, _tmp) = create_repository();
    let mut store = signed_store(&repo);
    add(&mut store, &make_rule("main", "alice, bob"));
    add(&mut store, &make_rule("release", "carol"));

    let reopened = repo.open_store(POLICY, None);
    let rules = reopened.fetch_rules().unwrap();
    assert_eq!(
        rules,
        vec![
            make_rule("main", "alice, bob"),
            make_rule("release", "carol")
        ]
    );
}

#[test]
fn update_and_remove_rule() {
    let (repo, _tmp) = create_repository();
    let mut store = signed_store(&repo);
    add(&mut store, &make_rule("main", "alice"));

    let updated = Rule::new("main", "git:refs/heads/trunk", "bob");
    store.update_rule(&updated, &updated.principals()).unwrap();
    assert_eq!(store.fetch_rules().unwrap(), vec![updated]);

    store.remove_rule("main").unwrap();
    assert!(store.fetch_rules().unwrap().is_empty());
    assert_eq!(
        store.remove_rule("main"),
        Err(StoreError::RuleNotFound("main".to_string()))
    );
}

#[test]
fn reorder_is_persisted() {
    let (repo, _tmp) = create_repository();
    let mut store = signed_store(&repo);
    for name in ["a", "b", "c"] {
        add(&mut store, &make_rule(name, "alice"));
    }

    let mut rules = store.fetch_rules().unwrap();
    rules.swap(1, 2);
    store.reorder_rules(&rules).unwrap();

    assert_eq!(names(&repo.open_store(POLICY, None)), vec!["a", "c", "b"]);
}

#[test]
fn policies_are_isolated() {
    let (repo, _tmp) = create_repository();
    let mut store = signed_store(&repo);
    add(&mut store, &make_rule("main", "alice"));

    let other = repo.open_store("other", None);
    assert!(other.fetch_rules().unwrap().is_empty());
}

// ===== Global Rule Tests =====

#[test]
fn global_rules_round_trip() {
    let (repo, _tmp) = create_repository();
    let mut store = signed_store(&repo);
    let threshold = GlobalRule::threshold(
        "two-approvals",
        vec!["git:refs/heads/main".to_string(), "git:refs/tags/*".to_string()],
        2,
    );
    let block = GlobalRule::block_force_pushes("no-force", vec!["git:refs/heads/*".to_string()]);

    store.add_global_rule(&threshold).unwrap();
    store.add_global_rule(&block).unwrap();
    assert_eq!(
        repo.open_store(POLICY, None).fetch_global_rules().unwrap(),
        vec![threshold.clone(), block]
    );

    let raised = GlobalRule {
        threshold: 3,
        ..threshold
    };
    store.update_global_rule(&raised).unwrap();
    store.remove_global_rule("no-force").unwrap();
    assert_eq!(store.fetch_global_rules().unwrap(), vec![raised]);
}

// ===== Signer / read-only Tests =====

#[test]
fn store_without_signer_is_read_only() {
    let (repo, _tmp) = create_repository();
    let mut store = repo.open_store(POLICY, None);
    assert!(store.is_read_only());

    let rule = make_rule("main", "alice");
    assert_eq!(
        store.add_rule(&rule, &rule.principals()),
        Err(StoreError::ReadOnly)
    );
    assert!(!repo.policy_file().exists());
}

#[test]
fn changes_are_stamped_with_signer() {
    let (repo, _tmp) = create_repository();
    let signer = load_signer(&repo, Some("signing.key")).unwrap();
    let key_id = signer.key_id().to_string();
    let mut store = repo.open_store(POLICY, Some(signer));
    add(&mut store, &make_rule("main", "alice"));

    let content = fs::read_to_string(repo.policy_file()).unwrap();
    let document: PolicyDocument = serde_json::from_str(&content).unwrap();
    assert_eq!(document.last_signed_by, Some(key_id));
    assert!(document.updated_at.is_some());
    assert_eq!(document.policies[POLICY].rules[0].principals, vec!["alice"]);
}

#[test]
fn failed_mutation_leaves_file_untouched() {
    let (repo, _tmp) = create_repository();
    let mut store = signed_store(&repo);
    add(&mut store, &make_rule("main", "alice"));
    let before = fs::read_to_string(repo.policy_file()).unwrap();

    let duplicate = make_rule("main", "bob");
    assert_eq!(
        store.add_rule(&duplicate, &duplicate.principals()),
        Err(StoreError::DuplicateRule("main".to_string()))
    );
    assert_eq!(fs::read_to_string(repo.policy_file()).unwrap(), before);
}

// ===== On-disk Format Tests =====

#[test]
fn policy_file_uses_snake_case_keys() {
    let (repo, _tmp) = create_repository();
    let mut store = signed_store(&repo);
    add(&mut store, &make_rule("main", "alice"));
    store
        .add_global_rule(&GlobalRule::threshold(
            "two",
            vec!["git:refs/heads/main".to_string()],
            2,
        ))
        .unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(repo.policy_file()).unwrap()).unwrap();

    let global = &raw["root"]["global_rules"][0];
    assert_eq!(global["rule_name"], "two");
    assert_eq!(global["rule_type"], "threshold");
    assert_eq!(global["rule_patterns"][0], "git:refs/heads/main");
    assert_eq!(global["threshold"], 2);

    let rule = &raw["policies"][POLICY]["rules"][0];
    assert_eq!(rule["name"], "main");
    assert_eq!(rule["principals"][0], "alice");

    assert!(raw["updated_at"].is_string());
    assert!(raw["last_signed_by"].is_string());
    assert!(raw.get("globalRules").is_none());
    assert!(raw.get("updatedAt").is_none());
}
