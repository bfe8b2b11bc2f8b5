//! End-to-end tests for the companion engine: orchestrator + rule brain
//! + in-memory stores.

use std::sync::Arc;

use companion_core::{
    AudioRef, ImageRecord, InboundMessage, LogicAction, LogicRule, MonitorKind, Persona,
    PersonaStore, ResponseOption, Rule,
};
use mem_store::{InMemoryImageStore, InMemoryPersonaStore};
use orchestrator::{EngineConfig, Orchestrator, TurnResult};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn text_rule(trigger: &str, reply: &str) -> Rule {
    Rule::text(vec![trigger.to_string()], vec![ResponseOption::any(reply)]).unwrap()
}

async fn setup(persona: Persona) -> (Orchestrator, Arc<InMemoryPersonaStore>, Arc<InMemoryImageStore>) {
    init_tracing();
    let personas = Arc::new(InMemoryPersonaStore::new());
    personas.put(persona).await.unwrap();
    let images = Arc::new(InMemoryImageStore::new());
    let orchestrator =
        Orchestrator::with_rule_brain(images.clone(), personas.clone(), EngineConfig::default());
    (orchestrator, personas, images)
}

/// Process one text turn and return the reply text.
async fn reply(orchestrator: &Orchestrator, persona_id: &str, text: &str, sent_at: u64) -> String {
    let message = InboundMessage::text(persona_id, text, sent_at);
    match orchestrator.process_turn(&message, &[]).await.unwrap() {
        TurnResult::Applied { bundle } => bundle.text.unwrap_or_default(),
        TurnResult::Discarded { .. } => panic!("turn unexpectedly discarded"),
    }
}

#[tokio::test]
async fn exact_match_beats_fuzzy_overlap() {
    let mut persona = Persona::new("p1", "Ada");
    // Fuzzy candidate: 4 of 5 trigger tokens appear in the message
    persona
        .trained_rules
        .push(text_rule("morning to you my friend", "fuzzy wins"));
    // Exact candidate: the phrase appears verbatim
    persona.trained_rules.push(text_rule("good morning", "exact wins"));
    let (orchestrator, _, _) = setup(persona).await;

    let text = reply(&orchestrator, "p1", "good morning to you my", 1).await;
    assert_eq!(text, "exact wins");
}

#[tokio::test]
async fn coverage_threshold_boundaries() {
    let mut persona = Persona::new("p1", "Ada");
    // 3-token phrase: needs all 3 tokens
    persona.trained_rules.push(text_rule("alpha beta gamma", "three"));
    // 4-token phrase: needs 3 of 4 tokens
    persona.trained_rules.push(text_rule("one two three four", "four"));
    let (orchestrator, _, _) = setup(persona).await;

    // 3/3 tokens, reordered so it is not a substring match
    assert_eq!(reply(&orchestrator, "p1", "gamma then alpha then beta", 1).await, "three");
    // 3/4 tokens, reordered: exactly at the 75% boundary
    assert_eq!(reply(&orchestrator, "p1", "three then one then two", 2).await, "four");

    // 2/3 tokens: below threshold, falls through to the teach-me prompt
    let text = reply(&orchestrator, "p1", "alpha beta", 3).await;
    assert!(text.contains("What should I say"));
}

#[tokio::test]
async fn teach_me_flow_end_to_end() {
    let (orchestrator, personas, _) = setup(Persona::new("p1", "Ada")).await;

    // Unknown message: teach-me prompt, pending definition persisted
    let text = reply(&orchestrator, "p1", "zorble", 1).await;
    assert!(text.contains("\"zorble\""));
    let persona = personas.get("p1").await.unwrap().unwrap();
    assert_eq!(
        persona.memory.awaiting_definition_for.as_deref(),
        Some("zorble")
    );

    // The next message is the answer: one rule learned
    let text = reply(&orchestrator, "p1", "it means hello", 2).await;
    assert_eq!(text, rule_brain::LEARN_ACK);
    let persona = personas.get("p1").await.unwrap().unwrap();
    assert_eq!(persona.trained_rules.len(), 1);

    // The original message now gets the taught response
    assert_eq!(reply(&orchestrator, "p1", "zorble", 3).await, "it means hello");
}

#[tokio::test]
async fn logic_rule_fires_across_persisted_turns() {
    let mut persona = Persona::new("p1", "Ada");
    persona.trained_rules.push(text_rule("coffee", "sure"));
    persona.logic_rules.push(
        LogicRule::new(
            MonitorKind::UserKeyword,
            "coffee",
            3,
            LogicAction::EmitText("that's a lot of coffee".to_string()),
            true,
        )
        .unwrap(),
    );
    let (orchestrator, personas, _) = setup(persona).await;

    assert_eq!(reply(&orchestrator, "p1", "coffee", 1).await, "sure");
    assert_eq!(reply(&orchestrator, "p1", "coffee", 2).await, "sure");
    // Third occurrence reaches the threshold
    assert_eq!(
        reply(&orchestrator, "p1", "coffee", 3).await,
        "sure that's a lot of coffee"
    );
    // reset_on_fire: the counter restarted from zero
    assert_eq!(reply(&orchestrator, "p1", "coffee", 4).await, "sure");
    let persona = personas.get("p1").await.unwrap().unwrap();
    assert_eq!(persona.memory.counter("keyword:coffee"), 1);
}

#[tokio::test]
async fn image_and_text_rules_fire_together() {
    let mut persona = Persona::new("p1", "Ada");
    persona.trained_rules.push(text_rule("good morning", "morning!"));
    persona.trained_rules.push(
        Rule::image_trigger(
            vec!["selfie".to_string()],
            vec![ResponseOption::any("here you go")],
            "selfie",
        )
        .unwrap(),
    );
    let (orchestrator, _, images) = setup(persona).await;
    images
        .add("p1", ImageRecord::new("img1", vec!["selfie".to_string()], ""))
        .await;

    let message = InboundMessage::text("p1", "good morning, selfie please", 1);
    let TurnResult::Applied { bundle } = orchestrator.process_turn(&message, &[]).await.unwrap()
    else {
        panic!("turn unexpectedly discarded");
    };

    assert_eq!(bundle.text.as_deref(), Some("morning!"));
    assert_eq!(bundle.image.unwrap().id, "img1");
}

#[tokio::test]
async fn audio_trigger_round_trip() {
    let mut persona = Persona::new("p1", "Ada");
    persona.trained_rules.push(
        Rule::audio_trigger(
            vec!["sing something".to_string()],
            vec![ResponseOption::any("hope you like it")],
            AudioRef::new("clip1"),
        )
        .unwrap(),
    );
    let (orchestrator, _, _) = setup(persona).await;

    let message = InboundMessage::text("p1", "sing something", 1);
    let TurnResult::Applied { bundle } = orchestrator.process_turn(&message, &[]).await.unwrap()
    else {
        panic!("turn unexpectedly discarded");
    };

    assert_eq!(bundle.audio.unwrap().id, "clip1");
    assert_eq!(bundle.text.as_deref(), Some("hope you like it"));
}

#[tokio::test]
async fn stale_reply_never_reaches_the_transcript() {
    let (orchestrator, personas, _) = setup(Persona::new("p1", "Ada")).await;

    // Message sent at t=0; the user clears the conversation at t=500
    // while the reply is still being computed; the reply lands at
    // t=1200 and must be dropped.
    orchestrator.clear_conversation("p1", 500).await;
    let message = InboundMessage::text("p1", "hello", 0);

    let result = orchestrator.process_turn(&message, &[]).await.unwrap();
    assert!(matches!(result, TurnResult::Discarded { cleared_at: 500 }));

    // The discarded turn left no trace in the persona either
    let persona = personas.get("p1").await.unwrap().unwrap();
    assert!(persona.memory.counters.is_empty());

    // A message sent after the clear goes through normally
    let message = InboundMessage::text("p1", "hello", 900);
    let result = orchestrator.process_turn(&message, &[]).await.unwrap();
    assert!(matches!(result, TurnResult::Applied { .. }));
}

#[tokio::test]
async fn distinct_personas_process_concurrently() {
    init_tracing();
    let personas = Arc::new(InMemoryPersonaStore::new());
    for (id, name) in [("p1", "Ada"), ("p2", "Grace")] {
        let mut persona = Persona::new(id, name);
        persona.trained_rules.push(text_rule("hello", "hi!"));
        personas.put(persona).await.unwrap();
    }
    let orchestrator = Arc::new(Orchestrator::with_rule_brain(
        Arc::new(InMemoryImageStore::new()),
        personas.clone(),
        EngineConfig::default(),
    ));

    let turns = ["p1", "p2", "p1", "p2"].map(|id| {
        let orchestrator = orchestrator.clone();
        let message = InboundMessage::text(id, "hello", 1);
        async move { orchestrator.process_turn(&message, &[]).await }
    });
    let results = futures::future::join_all(turns).await;

    for result in results {
        assert!(matches!(result.unwrap(), TurnResult::Applied { .. }));
    }

    // Two turns each: counters serialized correctly per persona
    for id in ["p1", "p2"] {
        let persona = personas.get(id).await.unwrap().unwrap();
        assert_eq!(persona.memory.counter("keyword:hello"), 2);
    }
}
