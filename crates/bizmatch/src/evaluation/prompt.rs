use super::domain::{EvaluationMode, EvaluationRequest};

/// System message shared by both templates.
pub const SYSTEM_PROMPT: &str = "Je një analist i investimeve";

/// Albanian grading instructions, one variant per evaluation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptTemplate {
    /// Asks for a bare integer from 1 to 10.
    IntegerGrade,
    /// Asks for a JSON object with five named fields.
    StructuredReport,
}

impl PromptTemplate {
    pub fn for_mode(mode: EvaluationMode) -> Self {
        match mode {
            EvaluationMode::Simple => PromptTemplate::IntegerGrade,
            EvaluationMode::Structured => PromptTemplate::StructuredReport,
        }
    }

    pub fn render(self, request: &EvaluationRequest) -> String {
        match self {
            PromptTemplate::IntegerGrade => render_integer_grade(request),
            PromptTemplate::StructuredReport => render_structured_report(request),
        }
    }
}

fn render_integer_grade(request: &EvaluationRequest) -> String {
    format!(
        "\nJe një investitor profesional që vlerëson idetë e bizneseve të vogla. \
Vlerëso këtë ide biznesi nga 1 deri në 10, bazuar në:\n\
\n\
1. Potenciali i tregut\n\
2. Krijimtaria e produktit ose shërbimit\n\
3. Sa e realizueshme është me burime të kufizuara\n\
\n\
Kthe vetëm një numër të plotë nga 1 deri në 10, pa shpjegim, pa komente.\n\
\n\
Ideja:\n\
{}\n",
        request.description
    )
}

fn render_structured_report(request: &EvaluationRequest) -> String {
    let funding = request
        .funding_needed
        .map(|amount| amount.to_string())
        .unwrap_or_default();

    format!(
        "\nAnalizoni këtë biznes dhe jepni një vlerësim të detajuar:\n\
\n\
Emri i biznesit: {name}\n\
Pronari: {owner}\n\
Përshkrimi: {description}\n\
Financimi i kërkuar: {funding}€\n\
Industria: {industry}\n\
\n\
Ju lutemi jepni një analizë të detajuar që përfshin:\n\
1. Vlerësimi nga 1-100\n\
2. Analiza e detajuar e biznesit\n\
3. Rekomandimet për përmirësim\n\
4. Niveli i rrezikut (low/medium/high)\n\
5. Potenciali i investimit (excellent/good/fair/poor)\n\
\n\
Përgjigjuni në formatin JSON:\n\
{{\n  \"score\": number,\n  \"analysis\": \"string\",\n  \"recommendations\": [\"string\"],\n  \
\"riskLevel\": \"low|medium|high\",\n  \"investmentPotential\": \"excellent|good|fair|poor\"\n}}\n",
        name = request.name.as_deref().unwrap_or_default(),
        owner = request.owner.as_deref().unwrap_or_default(),
        description = request.description,
        funding = funding,
        industry = request.industry.as_deref().unwrap_or_default(),
    )
}
