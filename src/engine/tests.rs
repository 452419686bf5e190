//! Tests for board generation.

use super::*;
use crate::config::{ContentMix, Tone};
use crate::corpus::ToneVariants;
use crate::test_support::{assert_no_placeholders, founders_context, seeded_rng};
use std::collections::BTreeSet;

fn generator() -> BoardGenerator {
    BoardGenerator::builtin().unwrap()
}

fn config(posts_per_week: u32) -> Config {
    Config {
        posts_per_week,
        ..Default::default()
    }
}

#[test]
fn test_post_count_follows_posts_per_week() {
    let generator = generator();
    let ctx = founders_context();
    for ppw in 1..=10u32 {
        let board = generator
            .generate_seeded(&Goal::Calls, &ctx, &config(ppw), u64::from(ppw))
            .unwrap();
        assert_eq!(board.len(), (ppw as usize * 4).min(30), "ppw {}", ppw);
        assert!(board.has_contiguous_slots());
    }
}

#[test]
fn test_no_placeholders_for_any_goal_tone_or_platform() {
    let generator = generator();
    let platforms: [&[&str]; 4] = [&["LinkedIn"], &["X"], &["Instagram"], &["TikTok"]];

    for goal in Goal::RECOGNIZED {
        for tone in Tone::ALL {
            for (i, names) in platforms.iter().enumerate() {
                let ctx = founders_context()
                    .with_platforms(names.iter().copied())
                    .with_promotion("my pricing guide");
                let cfg = Config {
                    posts_per_week: 10,
                    tone,
                    ..Default::default()
                };
                let board = generator.generate_seeded(&goal, &ctx, &cfg, i as u64).unwrap();
                assert_no_placeholders(&board);
            }
        }
    }
}

#[test]
fn test_empty_context_still_resolves() {
    let board = generator()
        .generate_seeded(&Goal::Followers, &Context::default(), &config(4), 3)
        .unwrap();
    assert_no_placeholders(&board);
    assert!(board.posts.iter().all(|p| p.cta.contains("grow their business")));
}

#[test]
fn test_no_consecutive_template_repeats() {
    let generator = generator();
    let ctx = founders_context();
    for goal in Goal::RECOGNIZED {
        for seed in 0..10 {
            let board = generator
                .generate_seeded(&goal, &ctx, &config(10), seed)
                .unwrap();
            for pair in board.posts.windows(2) {
                assert_ne!(pair[0].template_id, pair[1].template_id);
            }
        }
    }
}

#[test]
fn test_pool_is_exhausted_before_repeats() {
    let generator = generator();
    let cfg = config(10);
    let pool_size = generator.candidate_pool(&Goal::Sales, &cfg).unwrap().len();
    let board = generator
        .generate_seeded(&Goal::Sales, &founders_context(), &cfg, 17)
        .unwrap();

    let first_cycle: BTreeSet<&str> = board.posts[..pool_size]
        .iter()
        .map(|p| p.template_id.as_str())
        .collect();
    assert_eq!(first_cycle.len(), pool_size);
}

#[test]
fn test_scenario_calls_for_founders() {
    let board = generator()
        .generate_seeded(&Goal::Calls, &founders_context(), &config(5), 2024)
        .unwrap();

    assert_eq!(board.len(), 20);
    let slots: Vec<u32> = board.posts.iter().map(|p| p.slot).collect();
    assert_eq!(slots, (1..=20).collect::<Vec<_>>());
    for post in &board.posts {
        assert!(post.cta.contains("close more deals"), "{}", post.cta);
        assert!(!post.edited);
        assert!(post.notes.is_empty());
    }
    assert_eq!(board.goal, Goal::Calls);
    assert_eq!(board.seed, Some(2024));
}

#[test]
fn test_scenario_slot_cap() {
    let board = generator()
        .generate_seeded(&Goal::Followers, &founders_context(), &config(10), 1)
        .unwrap();
    assert_eq!(board.len(), 30);
}

#[test]
fn test_scenario_empty_mix_means_no_filter() {
    let generator = generator();
    let unfiltered = generator.candidate_pool(&Goal::Calls, &config(3)).unwrap();
    assert_eq!(unfiltered.len(), generator.corpus().for_goal(&Goal::Calls).len());
}

#[test]
fn test_mix_filter_restricts_pool() {
    let generator = generator();
    let cfg = Config {
        posts_per_week: 3,
        content_mix: [ContentMix::Proof].into_iter().collect(),
        ..Default::default()
    };
    let board = generator
        .generate_seeded(&Goal::Sales, &founders_context(), &cfg, 8)
        .unwrap();

    for post in &board.posts {
        let template = generator.corpus().get(&post.template_id).unwrap();
        assert!(template.mix.contains(&ContentMix::Proof), "{}", template.id);
    }
}

#[test]
fn test_mix_filter_falls_back_to_goal_pool() {
    let corpus = generator().corpus().clone();
    let story_only: Vec<Template> = corpus
        .templates()
        .iter()
        .filter(|t| t.mix == vec![ContentMix::Story])
        .cloned()
        .collect();
    let generator = BoardGenerator::new(Corpus::new(story_only).unwrap());

    let cfg = Config {
        content_mix: [ContentMix::Proof].into_iter().collect(),
        ..Default::default()
    };
    let pool = generator.candidate_pool(&Goal::Calls, &cfg).unwrap();
    assert_eq!(pool.len(), generator.corpus().for_goal(&Goal::Calls).len());
}

#[test]
fn test_scenario_same_inputs_vary_but_stay_valid() {
    let generator = generator();
    let ctx = founders_context();
    let cfg = config(5);

    let a = generator.generate_seeded(&Goal::Calls, &ctx, &cfg, 1).unwrap();
    let b = generator.generate_seeded(&Goal::Calls, &ctx, &cfg, 2).unwrap();
    assert_no_placeholders(&a);
    assert_no_placeholders(&b);
    assert_eq!(a.len(), b.len());
    assert_ne!(a.posts, b.posts);
}

#[test]
fn test_same_seed_reproduces_posts() {
    let generator = generator();
    let ctx = founders_context().with_platforms(["X"]);
    let cfg = Config {
        posts_per_week: 6,
        tone: Tone::Bold,
        ..Default::default()
    };

    let a = generator.generate_seeded(&Goal::Sales, &ctx, &cfg, 99).unwrap();
    let b = generator.generate_seeded(&Goal::Sales, &ctx, &cfg, 99).unwrap();
    assert_eq!(a.posts, b.posts);
}

#[test]
fn test_generate_with_rng_matches_seeded() {
    let generator = generator();
    let ctx = founders_context();
    let cfg = config(2);

    let seeded = generator.generate_seeded(&Goal::Calls, &ctx, &cfg, 5).unwrap();
    let manual = generator
        .generate_with_rng(&Goal::Calls, &ctx, &cfg, &mut seeded_rng(5))
        .unwrap();
    assert_eq!(seeded.posts, manual.posts);
    assert_eq!(manual.seed, None);
}

#[test]
fn test_unrecognized_goal_has_empty_pool() {
    let err = generator()
        .generate_seeded(&Goal::parse("hiring"), &founders_context(), &config(3), 1)
        .unwrap_err();
    assert!(matches!(err, PlanError::EmptyTemplatePool { ref goal } if goal == "hiring"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let err = generator()
        .generate_seeded(&Goal::Calls, &founders_context(), &config(0), 1)
        .unwrap_err();
    assert!(matches!(err, PlanError::UserError(_)));
}

#[test]
fn test_tone_changes_hooks() {
    let generator = generator();
    let ctx = founders_context();
    let mild = generator
        .generate_seeded(&Goal::Calls, &ctx, &Config { tone: Tone::Mild, ..config(3) }, 4)
        .unwrap();

    for post in &mild.posts {
        let template = generator.corpus().get(&post.template_id).unwrap();
        let first_word = template.hooks.mild.split_whitespace().next().unwrap();
        if !first_word.contains('{') {
            assert!(post.hook.starts_with(first_word), "{}", post.hook);
        }
    }
}

#[test]
fn test_unresolved_placeholder_is_left_in_place() {
    let template = Template {
        id: "broken".into(),
        goals: vec![Goal::Calls],
        mix: vec![ContentMix::Story],
        cta: crate::config::CtaType::Dm,
        hooks: ToneVariants {
            mild: "{nowhere}".into(),
            balanced: "{nowhere}".into(),
            bold: "{nowhere}".into(),
        },
        angle: "angle".into(),
        comment: "{question}".into(),
        pools: Default::default(),
    };
    let generator = BoardGenerator::new(Corpus::new(vec![template]).unwrap());
    let board = generator
        .generate_seeded(&Goal::Calls, &founders_context(), &config(1), 1)
        .unwrap();

    assert_eq!(board.len(), 4);
    assert!(board.posts.iter().all(|p| p.hook == "{nowhere}"));
}

#[test]
fn test_generate_board_uses_builtin_corpus() {
    let board = generate_board(&Goal::Followers, &founders_context(), &config(1)).unwrap();
    assert_eq!(board.len(), 4);
    assert!(board.seed.is_some());
    assert_no_placeholders(&board);
}

#[test]
fn test_custom_goal_tag_matches_regardless_of_case() {
    let yaml = r#"
templates:
  - id: hiring-story
    goals: [Hiring]
    mix: [story]
    cta: dm
    hooks: { mild: "We are hiring {role}s", balanced: "Hiring {role}s", bold: "{role}s wanted" }
    angle: "Why {audience} should care"
    comment: "{question} {reply_ask}"
    pools:
      role: ["engineer", "designer"]
  - id: hiring-proof
    goals: [hiring]
    mix: [proof]
    cta: comment
    hooks: { mild: "Our team", balanced: "Our team", bold: "Our team" }
    angle: "Show the team"
    comment: "{goal_question}"
"#;
    let generator = BoardGenerator::new(Corpus::from_yaml(yaml).unwrap());
    let board = generator
        .generate_seeded(&Goal::parse("HIRING"), &founders_context(), &config(1), 6)
        .unwrap();

    assert_eq!(board.len(), 4);
    assert_eq!(board.goal, Goal::parse("hiring"));
    assert_no_placeholders(&board);
}

#[test]
fn test_large_posts_per_week_caps_at_thirty() {
    let board = generator()
        .generate_seeded(&Goal::Calls, &founders_context(), &config(100), 12)
        .unwrap();
    assert_eq!(board.len(), 30);
    assert!(board.has_contiguous_slots());
}
