//! In-process stand-ins for LLM providers and the human at the terminal.

use crate::agents::HumanInput;
use crate::chat::GroupMessage;
use crate::config::LlmConfig;
use crate::errors::{Error, Result};
use crate::llm::providers::LlmProvider;
use crate::llm::{ChatMessage, ProviderRegistry};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

/// Provider answering from a fixed script, then with "<model> reply <n>"
#[derive(Debug)]
pub struct ScriptedProvider {
    model: String,
    replies: Mutex<VecDeque<String>>,
    calls: Mutex<usize>,
    prompts: Arc<Mutex<Vec<Vec<ChatMessage>>>>,
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn call_llm_api(&self, messages: Vec<ChatMessage>) -> Result<String> {
        self.prompts.lock().unwrap().push(messages);
        let mut calls = self.calls.lock().unwrap();
        *calls += 1;
        Ok(self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| format!("{} reply {}", self.model, calls)))
    }
}

/// Provider whose every call fails
#[derive(Debug)]
pub struct FailingProvider;

#[async_trait]
impl LlmProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    fn model(&self) -> &str {
        "failing"
    }

    async fn call_llm_api(&self, _messages: Vec<ChatMessage>) -> Result<String> {
        Err(Error::ProviderApi {
            provider: "failing".to_string(),
            message: "service unavailable".to_string(),
        })
    }
}

/// Prompts received by scripted providers, keyed by model
pub type PromptLog = Arc<Mutex<HashMap<String, Arc<Mutex<Vec<Vec<ChatMessage>>>>>>>;

/// Registry with a "scripted" provider (replies taken from `scripts` by model)
/// and a "failing" provider
pub fn scripted_registry(scripts: &[(&str, &[&str])]) -> ProviderRegistry {
    scripted_registry_with_log(scripts).0
}

pub fn scripted_registry_with_log(scripts: &[(&str, &[&str])]) -> (ProviderRegistry, PromptLog) {
    let scripts: HashMap<String, Vec<String>> = scripts
        .iter()
        .map(|(model, replies)| {
            (
                model.to_string(),
                replies.iter().map(|r| r.to_string()).collect(),
            )
        })
        .collect();
    let log: PromptLog = Arc::new(Mutex::new(HashMap::new()));

    let mut registry = ProviderRegistry::new();
    let factory_log = log.clone();
    registry.register("scripted", move |config: &LlmConfig| {
        let prompts = factory_log
            .lock()
            .unwrap()
            .entry(config.model.clone())
            .or_default()
            .clone();
        Ok(Box::new(ScriptedProvider {
            model: config.model.clone(),
            replies: Mutex::new(
                scripts
                    .get(&config.model)
                    .cloned()
                    .unwrap_or_default()
                    .into(),
            ),
            calls: Mutex::new(0),
            prompts,
        }))
    });
    registry.register("failing", |_| Ok(Box::new(FailingProvider)));
    (registry, log)
}

/// Human that answers from a script and counts how often it was asked
#[derive(Debug)]
pub struct ScriptedHumanInput {
    answers: Mutex<VecDeque<Option<String>>>,
    asked: Mutex<usize>,
}

impl ScriptedHumanInput {
    pub fn new(answers: Vec<Option<String>>) -> Self {
        Self {
            answers: Mutex::new(answers.into()),
            asked: Mutex::new(0),
        }
    }

    pub fn times_asked(&self) -> usize {
        *self.asked.lock().unwrap()
    }
}

impl HumanInput for ScriptedHumanInput {
    fn ask(&self, _agent: &str, _last_message: Option<&GroupMessage>) -> Result<Option<String>> {
        *self.asked.lock().unwrap() += 1;
        Ok(self.answers.lock().unwrap().pop_front().flatten())
    }
}
