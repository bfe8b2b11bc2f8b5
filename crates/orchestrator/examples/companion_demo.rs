//! Companion engine demo.
//!
//! Trains a small persona, then runs a scripted conversation through the
//! orchestrator and prints each reply bundle.
//!
//! Run with: cargo run -p orchestrator --example companion_demo

use std::sync::Arc;

use companion_core::{
    AudioRef, ImageRecord, InboundMessage, LogicAction, LogicRule, MonitorKind, Persona,
    PersonaStore, ResponseOption, Rule, TimeOfDayTag,
};
use mem_store::{InMemoryImageStore, InMemoryPersonaStore};
use orchestrator::{EngineConfig, Orchestrator, TurnResult};

fn build_persona() -> Result<Persona, Box<dyn std::error::Error>> {
    let mut persona = Persona::new("demo", "Ada");
    persona.occupation = "astronomer".to_string();

    persona.trained_rules.push(Rule::text(
        vec!["good morning".to_string()],
        vec![
            ResponseOption::tagged("Morning! The stars kept me up late.", TimeOfDayTag::Morning),
            ResponseOption::any("Hello! Lovely to hear from you."),
        ],
    )?);
    persona.trained_rules.push(Rule::text(
        vec!["telescope".to_string()],
        vec![ResponseOption::any("Ooh, tell me more about it!")],
    )?);
    persona.trained_rules.push(Rule::image_trigger(
        vec!["send me a selfie".to_string()],
        vec![ResponseOption::any("Here's one from the observatory!")],
        "selfie",
    )?);
    persona.trained_rules.push(Rule::audio_trigger(
        vec!["sing something".to_string()],
        vec![ResponseOption::any("A little stargazing tune for you.")],
        AudioRef::new("tune-01"),
    )?);

    persona.logic_rules.push(LogicRule::new(
        MonitorKind::UserKeyword,
        "telescope",
        3,
        LogicAction::EmitText("You ask about my telescope a lot! I love that.".to_string()),
        true,
    )?);

    Ok(persona)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("orchestrator=debug".parse()?)
                .add_directive("rule_brain=debug".parse()?),
        )
        .init();

    let personas = Arc::new(InMemoryPersonaStore::new());
    personas.put(build_persona()?).await?;

    let images = Arc::new(InMemoryImageStore::new());
    for id in ["obs-01", "obs-02"] {
        images
            .add("demo", ImageRecord::new(id, vec!["selfie".to_string()], "at the observatory"))
            .await;
    }

    let orchestrator =
        Orchestrator::with_rule_brain(images, personas.clone(), EngineConfig::default());

    let script = [
        "good morning!",
        "send me a selfie",
        "sing something",
        "my telescope arrived",
        "the telescope is huge",
        "telescope setup done, what do you think",
        "what is a pulsar?",
        "It's a spinning neutron star that flashes like a lighthouse.",
        "what is a pulsar?",
    ];

    for (turn, text) in script.iter().enumerate() {
        let message = InboundMessage::text("demo", *text, turn as u64 + 1);
        println!("you> {}", text);

        match orchestrator.process_turn(&message, &[]).await? {
            TurnResult::Applied { bundle } => {
                if let Some(reply) = &bundle.text {
                    println!("ada> {}", reply);
                }
                if let Some(image) = &bundle.image {
                    println!("ada> [image {} tagged '{}']", image.id, image.tag);
                }
                if let Some(audio) = &bundle.audio {
                    println!("ada> [audio {}]", audio.id);
                }
            }
            TurnResult::Discarded { cleared_at } => {
                println!("(reply discarded: conversation cleared at {})", cleared_at);
            }
        }
        println!();
    }

    let persona = personas
        .get("demo")
        .await?
        .ok_or("demo persona missing after the conversation")?;
    println!(
        "Ada now knows {} rules and tracks {} counters.",
        persona.trained_rules.len(),
        persona.memory.counters.len()
    );

    Ok(())
}
