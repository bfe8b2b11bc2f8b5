//! The rule-matching responder.

use std::sync::Arc;

use async_trait::async_trait;
use companion_core::{
    ConversationTurn, ImageRecord, ImageRef, ImageStore, InboundMessage, LogicAction, MessageKind,
    Persona, PersonaMemory, Responder, ResponderError, ResponseBundle, ResponseOption, Rule,
    RuleKind, TimeOfDay, TurnOutcome,
};
use rand::seq::SliceRandom;
use rand::thread_rng;
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::EngineConfig;
use crate::fallback::{
    is_greeting, is_how_are_you, is_time_greeting, teach_me_prompt, time_greeting_replies,
    AUDIO_INPUT_REPLIES, AUDIO_PLACEHOLDER, HOW_ARE_YOU_REPLIES, IMAGE_INPUT_REPLIES, LEARN_ACK,
    UNKNOWN_REPLIES,
};
use crate::matcher::best_match;
use crate::tokenizer::tokenize;

/// A responder that matches messages against a persona's trained rules.
///
/// One turn runs the full pipeline: pending-definition learning,
/// independent text/image/audio rule matching, the counter tally and
/// logic-rule pass, and the canned fallback conversation. The image
/// store is read-only; all mutations land in the returned persona.
pub struct RuleBrain {
    images: Arc<dyn ImageStore>,
    clock: Arc<dyn Clock>,
    config: EngineConfig,
}

impl RuleBrain {
    /// Create a brain with the default configuration and system clock.
    pub fn new(images: Arc<dyn ImageStore>) -> Self {
        Self::with_config(images, EngineConfig::default())
    }

    /// Create a brain with a custom configuration.
    pub fn with_config(images: Arc<dyn ImageStore>, config: EngineConfig) -> Self {
        Self {
            images,
            clock: Arc::new(SystemClock),
            config,
        }
    }

    /// Create a brain with a custom clock, for tests.
    pub fn with_clock(
        images: Arc<dyn ImageStore>,
        config: EngineConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            images,
            clock,
            config,
        }
    }

    /// Pick a canned reply uniformly at random.
    fn canned(options: &[&str]) -> String {
        options
            .choose(&mut thread_rng())
            .copied()
            .unwrap_or("")
            .to_string()
    }

    /// Pick a response from a rule, filtered to the current time of day
    /// (falling back to the full list when the filter empties it).
    /// `exclude` drops a placeholder text when another option remains.
    fn pick_response(rule: &Rule, time_of_day: TimeOfDay, exclude: Option<&str>) -> String {
        let mut candidates: Vec<&ResponseOption> = rule
            .responses
            .iter()
            .filter(|option| option.time_of_day.matches(time_of_day))
            .collect();
        if candidates.is_empty() {
            candidates = rule.responses.iter().collect();
        }

        if let Some(placeholder) = exclude {
            let kept: Vec<&ResponseOption> = candidates
                .iter()
                .copied()
                .filter(|option| option.text != placeholder)
                .collect();
            if !kept.is_empty() {
                candidates = kept;
            }
        }

        candidates
            .choose(&mut thread_rng())
            .map(|option| option.text.clone())
            .unwrap_or_default()
    }

    /// Pick an image, avoiding recently sent ids. When every candidate
    /// was sent recently, forget only the ids belonging to this
    /// candidate set and pick among all of them again.
    fn pick_fresh_image<'a>(
        memory: &mut PersonaMemory,
        candidates: &'a [ImageRecord],
    ) -> &'a ImageRecord {
        let fresh: Vec<&ImageRecord> = candidates
            .iter()
            .filter(|record| !memory.recent_image_ids.contains(&record.id))
            .collect();

        if fresh.is_empty() {
            memory
                .recent_image_ids
                .retain(|id| !candidates.iter().any(|record| &record.id == id));
            candidates.choose(&mut thread_rng()).unwrap_or(&candidates[0])
        } else {
            fresh
                .choose(&mut thread_rng())
                .copied()
                .unwrap_or(&candidates[0])
        }
    }

    /// Greeting reply with identity filler.
    fn greeting_reply(persona: &Persona) -> String {
        let mut options = vec![
            "Hi there!".to_string(),
            "Hey! Good to see you.".to_string(),
            format!("Hey, it's {}! What's up?", persona.name),
        ];
        if !persona.occupation.is_empty() {
            options.push(format!(
                "Hello! {} the {}, at your service.",
                persona.name, persona.occupation
            ));
        }
        options
            .choose(&mut thread_rng())
            .cloned()
            .unwrap_or_default()
    }

    /// Learn a new text rule from a pending definition. Returns the
    /// acknowledgment reply, or `None` if the synthesized rule was
    /// malformed (e.g. a whitespace-only question).
    fn learn_definition(persona: &mut Persona, question: String, answer: &str) -> Option<String> {
        match Rule::text(vec![question], vec![ResponseOption::any(answer)]) {
            Ok(rule) => {
                persona.trained_rules.push(rule);
                Some(LEARN_ACK.to_string())
            }
            Err(err) => {
                warn!("discarding unlearnable pending definition: {}", err);
                None
            }
        }
    }

    /// Run the logic-rule pass: fire every rule whose counter is at or
    /// above its threshold, in list order. Later rules may overwrite an
    /// earlier rule's image or audio output (last-writer-wins, faithful
    /// to the original engine).
    async fn apply_logic_rules(&self, persona: &mut Persona, bundle: &mut ResponseBundle) {
        let logic_rules = persona.logic_rules.clone();
        for rule in &logic_rules {
            let key = rule.counter_key();
            if persona.memory.counter(&key) < rule.threshold {
                continue;
            }
            debug!(rule_target = %rule.target, threshold = rule.threshold, "logic rule fired");

            match &rule.action {
                LogicAction::EmitText(text) => bundle.append_text(text),
                LogicAction::EmitImageTag(tag) => {
                    match self
                        .images
                        .query_by_tags(&persona.id, std::slice::from_ref(tag))
                        .await
                    {
                        Ok(candidates) => {
                            if let Some(record) = candidates.choose(&mut thread_rng()) {
                                bundle.image = Some(ImageRef::new(record.id.clone(), tag.clone()));
                            }
                        }
                        Err(err) => {
                            warn!("image store query failed during logic pass: {}", err);
                        }
                    }
                }
                LogicAction::EmitAudio(audio) => bundle.audio = Some(audio.clone()),
            }

            if rule.reset_on_fire {
                persona.memory.reset_counter(&key);
            }
        }
    }
}

#[async_trait]
impl Responder for RuleBrain {
    async fn respond(
        &self,
        mut persona: Persona,
        message: &InboundMessage,
        _history: &[ConversationTurn],
    ) -> Result<TurnOutcome, ResponderError> {
        // Non-text input is answered immediately from canned replies and
        // never reaches the rule pipeline.
        match message.kind {
            MessageKind::Audio => {
                return Ok(TurnOutcome {
                    bundle: ResponseBundle::text(Self::canned(&AUDIO_INPUT_REPLIES)),
                    persona,
                });
            }
            MessageKind::Image => {
                return Ok(TurnOutcome {
                    bundle: ResponseBundle::text(Self::canned(&IMAGE_INPUT_REPLIES)),
                    persona,
                });
            }
            MessageKind::Text => {}
        }

        // Step 1: pending-definition resolution. The whole message is
        // the user teaching us the answer; this pre-empts matching.
        if self.config.learning_enabled {
            if let Some(question) = persona.memory.awaiting_definition_for.take() {
                if let Some(ack) = Self::learn_definition(&mut persona, question, &message.text) {
                    return Ok(TurnOutcome {
                        bundle: ResponseBundle::text(ack),
                        persona,
                    });
                }
            }
        }

        let lowered = message.text.to_lowercase();
        let tokens = tokenize(&message.text);
        let time_of_day = TimeOfDay::from_hour(self.clock.hour());

        // Step 2: independent winners per rule kind, over the full rule
        // set, so one message can trigger text and image at once.
        let text_winner =
            best_match(&persona.trained_rules, RuleKind::Text, &lowered, &tokens).cloned();
        let image_winner = best_match(
            &persona.trained_rules,
            RuleKind::ImageTrigger,
            &lowered,
            &tokens,
        )
        .cloned();
        let audio_winner = best_match(
            &persona.trained_rules,
            RuleKind::AudioTrigger,
            &lowered,
            &tokens,
        )
        .cloned();

        let mut bundle = ResponseBundle::empty();

        // Step 2a: text winner.
        if let Some(rule) = &text_winner {
            bundle.text = Some(Self::pick_response(rule, time_of_day, None));
        }

        // Step 2b: image winner. The caption is only used when 2a left
        // the text channel empty.
        let mut sent_tag: Option<String> = None;
        if let Some(rule) = &image_winner {
            if bundle.text.is_none() {
                bundle.text = Some(Self::pick_response(rule, time_of_day, None));
            }
            if let Some(tag) = rule.image_tag.clone() {
                match self
                    .images
                    .query_by_tags(&persona.id, std::slice::from_ref(&tag))
                    .await
                {
                    Ok(candidates) if !candidates.is_empty() => {
                        let record = Self::pick_fresh_image(&mut persona.memory, &candidates);
                        persona.memory.recent_image_ids.push(record.id.clone());
                        bundle.image = Some(ImageRef::new(record.id.clone(), tag.clone()));
                        sent_tag = Some(tag);
                    }
                    Ok(_) => {
                        debug!(tag = %tag, "no images found for tag");
                    }
                    Err(err) => {
                        warn!("image store query failed, sending without image: {}", err);
                    }
                }
            }
        }

        // Step 2c: audio winner.
        if let Some(rule) = &audio_winner {
            bundle.audio = rule.audio.clone();
            if bundle.text.is_none() {
                bundle.text = Some(Self::pick_response(
                    rule,
                    time_of_day,
                    Some(AUDIO_PLACEHOLDER),
                ));
            }
        }

        // Step 3: tally. Counters update on every text turn whether or
        // not a rule matched; only the firing pass below is conditional.
        for token in &tokens {
            persona.memory.increment(&PersonaMemory::keyword_key(token));
        }
        if let Some(tag) = &sent_tag {
            persona.memory.increment(&PersonaMemory::tag_key(tag));
        }

        let rule_matched =
            text_winner.is_some() || image_winner.is_some() || audio_winner.is_some();
        if rule_matched {
            self.apply_logic_rules(&mut persona, &mut bundle).await;
            return Ok(TurnOutcome { bundle, persona });
        }

        // Step 4: fallback conversation. Runs in place of the firing
        // pass when nothing matched.
        let text = if is_greeting(&tokens) {
            Self::greeting_reply(&persona)
        } else if is_time_greeting(&lowered) {
            Self::canned(time_greeting_replies(time_of_day))
        } else if is_how_are_you(&lowered) {
            Self::canned(&HOW_ARE_YOU_REPLIES)
        } else if self.config.learning_enabled {
            persona.memory.awaiting_definition_for = Some(message.text.clone());
            teach_me_prompt(&message.text)
        } else {
            Self::canned(&UNKNOWN_REPLIES)
        };

        Ok(TurnOutcome {
            bundle: ResponseBundle::text(text),
            persona,
        })
    }

    fn name(&self) -> &str {
        "RuleBrain"
    }
}
