use std::sync::Arc;

use bizmatch::config::AppConfig;
use bizmatch::error::AppError;
use bizmatch::evaluation::{EvaluationGateway, EvaluationRequest, HttpChatTransport};
use clap::Args;
use serde_json::json;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Business idea or description to rate
    #[arg(long)]
    pub(crate) idea: String,
    /// Request the detailed JSON report instead of the quick 10-100 score
    #[arg(long)]
    pub(crate) structured: bool,
    /// Business name (structured report only)
    #[arg(long)]
    pub(crate) name: Option<String>,
    /// Owner name (structured report only)
    #[arg(long)]
    pub(crate) owner: Option<String>,
    /// Funding needed in euros (structured report only)
    #[arg(long)]
    pub(crate) funding: Option<f64>,
    /// Industry label (structured report only)
    #[arg(long)]
    pub(crate) industry: Option<String>,
}

impl EvaluateArgs {
    fn into_request(self) -> EvaluationRequest {
        EvaluationRequest {
            name: self.name,
            owner: self.owner,
            description: self.idea,
            funding_needed: self.funding,
            industry: self.industry,
        }
    }
}

pub(crate) async fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let transport = HttpChatTransport::new(config.evaluator.timeout)?;
    let gateway = EvaluationGateway::new(Arc::new(transport), config.evaluator);

    let structured = args.structured;
    let request = args.into_request();

    if structured {
        let rating = gateway.evaluate_structured(&request).await?;
        println!("{}", serde_json::to_string_pretty(&rating)?);
        return Ok(());
    }

    let evaluation = gateway.evaluate_simple(&request).await?;
    if let Some(cause) = &evaluation.degraded {
        eprintln!("warning: using fallback score ({cause})");
    }
    println!("{}", json!({ "score": evaluation.rating.score }));
    Ok(())
}
