//! Tests for corpus parsing, validation and filtering.

use super::{Corpus, Template};
use crate::config::{ContentMix, CtaType, Tone};
use crate::error::PlanError;
use crate::goals::Goal;
use crate::test_support::template_with_pools;
use std::collections::BTreeSet;
use tempfile::TempDir;

#[test]
fn test_builtin_corpus_parses() {
    let corpus = Corpus::builtin().unwrap();
    assert_eq!(corpus.len(), 18);
    assert!(!corpus.is_empty());

    let step = corpus.get("step-framework").unwrap();
    assert_eq!(step.cta, CtaType::Save);
    assert!(step.serves(&Goal::Calls));
    assert!(step.hooks.get(Tone::Bold).starts_with("Steal my"));
    assert_eq!(step.pools["number"], vec!["3", "4", "5"]);
}

#[test]
fn test_builtin_pools_cover_every_goal_and_mix() {
    let corpus = Corpus::builtin().unwrap();
    for goal in Goal::RECOGNIZED {
        assert!(corpus.for_goal(&goal).len() >= 2, "{}", goal);
        for mix in ContentMix::ALL {
            let filter: BTreeSet<ContentMix> = [mix].into_iter().collect();
            let pool = corpus.for_goal_and_mix(&goal, &filter);
            assert!(pool.len() >= 2, "{} / {} has {} templates", goal, mix, pool.len());
        }
    }
}

#[test]
fn test_builtin_uses_every_cta_type() {
    let corpus = Corpus::builtin().unwrap();
    for cta in CtaType::ALL {
        assert!(corpus.templates().iter().any(|t| t.cta == cta), "{}", cta);
    }
}

#[test]
fn test_unknown_goal_has_no_templates() {
    let corpus = Corpus::builtin().unwrap();
    assert!(corpus.for_goal(&Goal::parse("hiring")).is_empty());
}

#[test]
fn test_empty_mix_filter_is_no_filter() {
    let corpus = Corpus::builtin().unwrap();
    assert_eq!(
        corpus.for_goal_and_mix(&Goal::Sales, &BTreeSet::new()).len(),
        corpus.for_goal(&Goal::Sales).len()
    );
}

#[test]
fn test_mix_filter_matches_any_category() {
    let corpus = Corpus::builtin().unwrap();
    let filter: BTreeSet<ContentMix> = [ContentMix::Proof, ContentMix::Engagement]
        .into_iter()
        .collect();
    for template in corpus.for_goal_and_mix(&Goal::Followers, &filter) {
        assert!(template.in_mix(&filter));
        assert!(template.serves(&Goal::Followers));
    }
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let result = Corpus::new(vec![template_with_pools(&[]), template_with_pools(&[])]);
    assert!(matches!(result, Err(PlanError::UserError(msg)) if msg.contains("duplicate")));
}

#[test]
fn test_blank_pattern_is_rejected() {
    let template = Template {
        angle: "  ".to_string(),
        ..template_with_pools(&[])
    };
    let err = Corpus::new(vec![template]).unwrap_err();
    assert!(err.to_string().contains("angle"));
}

#[test]
fn test_empty_pool_is_rejected() {
    let template = template_with_pools(&[("number", &[])]);
    assert!(Corpus::new(vec![template]).is_err());
}

#[test]
fn test_template_without_goals_is_rejected() {
    let template = Template {
        goals: Vec::new(),
        ..template_with_pools(&[])
    };
    assert!(Corpus::new(vec![template]).is_err());
}

#[test]
fn test_from_yaml_minimal_template() {
    let yaml = r#"
templates:
  - id: quick-tip
    goals: [followers]
    mix: [education]
    cta: save
    hooks:
      mild: "A tip for {audience}."
      balanced: "Quick tip for {audience}."
      bold: "Do this today, {audience}."
    angle: "One tip, one example."
    comment: "{question}"
"#;
    let corpus = Corpus::from_yaml(yaml).unwrap();
    let template = corpus.get("quick-tip").unwrap();
    assert!(template.pools.is_empty());
    assert_eq!(template.mix, vec![ContentMix::Education]);
}

#[test]
fn test_from_yaml_rejects_unknown_cta() {
    let yaml = r#"
templates:
  - id: x
    goals: [calls]
    mix: [story]
    cta: carrier_pigeon
    hooks: { mild: a, balanced: b, bold: c }
    angle: a
    comment: c
"#;
    assert!(matches!(Corpus::from_yaml(yaml), Err(PlanError::UserError(_))));
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("corpus.yaml");
    let yaml = serde_yaml::to_string(&Corpus::new(vec![template_with_pools(&[])]).unwrap()).unwrap();
    std::fs::write(&path, yaml).unwrap();

    let corpus = Corpus::load(&path).unwrap();
    assert_eq!(corpus.len(), 1);
    assert_eq!(corpus.templates()[0].id, "fixture");
}

#[test]
fn test_load_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = Corpus::load(temp_dir.path().join("nope.yaml")).unwrap_err();
    assert!(matches!(err, PlanError::Io(_)));
}

#[test]
fn test_unclosed_brace_is_rejected() {
    let yaml = r#"
templates:
  - id: half-open
    goals: [calls]
    mix: [story]
    cta: dm
    hooks:
      mild: "{audience} need {offer"
      balanced: "{audience}"
      bold: "{audience}"
    angle: "angle"
    comment: "{question}"
"#;
    let err = Corpus::from_yaml(yaml).unwrap_err();
    assert!(matches!(err, PlanError::UserError(_)));
    let message = err.to_string();
    assert!(message.contains("half-open"), "{}", message);
    assert!(message.contains("hooks.mild"), "{}", message);
    assert!(message.contains("unmatched"), "{}", message);
}

#[test]
fn test_empty_placeholder_is_rejected() {
    let template = Template {
        comment: "{question} {}".to_string(),
        ..template_with_pools(&[])
    };
    let err = Corpus::new(vec![template]).unwrap_err();
    assert!(err.to_string().contains("comment"));
}

#[test]
fn test_escaped_braces_are_accepted() {
    let template = Template {
        angle: "Use {{curly}} braces for {audience}".to_string(),
        ..template_with_pools(&[])
    };
    assert!(Corpus::new(vec![template]).is_ok());
}

#[test]
fn test_goal_tags_match_case_insensitively() {
    let yaml = r#"
templates:
  - id: hiring-post
    goals: [Hiring]
    mix: [story]
    cta: comment
    hooks: { mild: "{audience}", balanced: "{audience}", bold: "{audience}" }
    angle: "angle"
    comment: "{question}"
"#;
    let corpus = Corpus::from_yaml(yaml).unwrap();
    assert_eq!(corpus.for_goal(&Goal::parse("hiring")).len(), 1);
    assert_eq!(corpus.for_goal(&Goal::parse("HIRING")).len(), 1);
}
