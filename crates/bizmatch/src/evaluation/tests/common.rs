use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::config::EvaluatorConfig;
use crate::evaluation::{
    ChatCompletionRequest, ChatCompletionResponse, ChatEndpoint, ChatTransport, EvaluationError,
    EvaluationGateway, EvaluationRequest,
};

/// Transport double that replays queued replies and records every call.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<ChatCompletionResponse, EvaluationError>>>,
    requests: Mutex<Vec<ChatCompletionRequest>>,
    calls: AtomicUsize,
}

impl ScriptedTransport {
    pub(crate) fn replying(content: &str) -> Self {
        Self::with_reply(Ok(ChatCompletionResponse::from_content(content)))
    }

    pub(crate) fn failing(err: EvaluationError) -> Self {
        Self::with_reply(Err(err))
    }

    pub(crate) fn with_reply(reply: Result<ChatCompletionResponse, EvaluationError>) -> Self {
        let transport = Self::default();
        transport
            .replies
            .lock()
            .expect("replies mutex poisoned")
            .push_back(reply);
        transport
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_request(&self) -> Option<ChatCompletionRequest> {
        self.requests
            .lock()
            .expect("requests mutex poisoned")
            .last()
            .cloned()
    }
}

#[async_trait]
impl ChatTransport for ScriptedTransport {
    async fn complete(
        &self,
        _endpoint: &ChatEndpoint,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, EvaluationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .expect("requests mutex poisoned")
            .push(request.clone());
        self.replies
            .lock()
            .expect("replies mutex poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(EvaluationError::Transport("no scripted reply".to_string())))
    }
}

pub(crate) fn evaluator_config() -> EvaluatorConfig {
    EvaluatorConfig {
        api_url: Some("https://llm.test/v1/chat/completions".to_string()),
        api_key: Some("sk-test".to_string()),
        ..EvaluatorConfig::default()
    }
}

pub(crate) fn gateway(transport: &Arc<ScriptedTransport>) -> EvaluationGateway<ScriptedTransport> {
    EvaluationGateway::new(transport.clone(), evaluator_config())
}

pub(crate) fn unconfigured_gateway(
    transport: &Arc<ScriptedTransport>,
) -> EvaluationGateway<ScriptedTransport> {
    EvaluationGateway::new(transport.clone(), EvaluatorConfig::default())
}

pub(crate) fn idea() -> EvaluationRequest {
    EvaluationRequest::from_idea("Prodhim i mjaltit organik për eksport në rajon")
}

pub(crate) fn business_profile() -> EvaluationRequest {
    EvaluationRequest {
        name: Some("Ferma Organike Malësia".to_string()),
        owner: Some("Besnik Gjoni".to_string()),
        description: "Fermë organike që prodhon fruta dhe perime pa pesticide kimike."
            .to_string(),
        funding_needed: Some(40000.0),
        industry: Some("Bujqësi".to_string()),
    }
}

pub(crate) const STRUCTURED_REPLY: &str = r#"{"score":82,"analysis":"Treg në rritje me konkurrencë të ulët.","recommendations":["A","B"],"riskLevel":"low","investmentPotential":"good"}"#;

pub(crate) async fn response_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    serde_json::from_slice(&bytes).expect("response is JSON")
}
