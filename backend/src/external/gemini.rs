//! Crop Image Analysis Gateway
//!
//! Client for the external vision-capable generative model. Each call is
//! stateless: one request, one structured-JSON response, no retries.

use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use shared::{CropAnalysis, Language};

use crate::error::{AppError, AppResult};

/// Client for the generative vision model API
#[derive(Clone)]
pub struct GeminiClient {
    api_endpoint: String,
    api_key: String,
    model: String,
    http_client: Client,
}

/// generateContent request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: SystemInstruction,
    generation_config: GenerationConfig,
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

impl Part {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    fn inline_data(mime_type: &str, data: String) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.to_string(),
                data,
            }),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

/// generateContent response body (only the fields we read)
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GeminiClient {
    /// Create a new client
    pub fn new(api_endpoint: String, api_key: String, model: String) -> Self {
        // The source applies no timeout; 60s is a defensive bound
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_endpoint,
            api_key,
            model,
            http_client,
        }
    }

    /// Analyze a crop/soil image and return the structured diagnosis
    pub async fn analyze(
        &self,
        image_bytes: &[u8],
        mime_type: &str,
        language: Language,
    ) -> AppResult<CropAnalysis> {
        let image_base64 = base64::engine::general_purpose::STANDARD.encode(image_bytes);

        let request = GenerateContentRequest {
            system_instruction: SystemInstruction {
                parts: vec![Part::text(analysis_prompt(language))],
            },
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: analysis_schema(),
            },
            contents: vec![Content {
                parts: vec![
                    Part::inline_data(mime_type, image_base64),
                    Part::text(
                        "Analyze this crop/soil image and provide detailed diagnosis with solutions.",
                    ),
                ],
            }],
        };

        let text = self.generate(&request).await?;
        parse_analysis(&text)
    }

    /// Translate an already-produced English analysis into Hindi
    ///
    /// Structure, severity values and bullet markers are preserved by
    /// instruction; the result is re-parsed against the same schema.
    pub async fn translate(&self, analysis: &CropAnalysis) -> AppResult<CropAnalysis> {
        let payload = serde_json::to_string(analysis)
            .map_err(|e| AppError::Internal(format!("Failed to serialize analysis: {}", e)))?;

        let request = GenerateContentRequest {
            system_instruction: SystemInstruction {
                parts: vec![Part::text(TRANSLATE_PROMPT)],
            },
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: analysis_schema(),
            },
            contents: vec![Content {
                parts: vec![Part::text(payload)],
            }],
        };

        let text = self.generate(&request).await?;
        parse_analysis(&text)
    }

    /// Send one generateContent request and extract the candidate text
    async fn generate(&self, request: &GenerateContentRequest) -> AppResult<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_endpoint, self.model
        );

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::AnalysisFailed(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::AnalysisFailed(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let result: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::AnalysisFailed(format!("Failed to parse response: {}", e)))?;

        let text = result
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .unwrap_or_default();

        if text.is_empty() {
            return Err(AppError::AnalysisFailed("Empty response from model".into()));
        }

        Ok(text)
    }
}

/// Parse the model's JSON text into a `CropAnalysis`
///
/// Field values are returned verbatim; the schema constraint delegated to
/// the model is the only severity validation.
fn parse_analysis(text: &str) -> AppResult<CropAnalysis> {
    serde_json::from_str(text)
        .map_err(|e| AppError::AnalysisFailed(format!("Unparseable analysis JSON: {}", e)))
}

/// The fixed agronomist system instruction, language-conditioned
fn analysis_prompt(language: Language) -> String {
    let language_instruction = match language {
        Language::Hi => "Respond in Hindi language (Devanagari script).",
        Language::En => "Respond in English language.",
    };

    format!(
        r#"You are an expert agricultural advisor specializing in crop disease identification and soil health analysis for small farmers in India.

{language_instruction}

Analyze the uploaded image and identify:
1. Any diseases, pests, or nutrient deficiencies visible on leaves or plants
2. Soil health issues if soil is visible
3. Overall plant health status

For each issue found, provide:
- Type of issue (disease name, pest name, or deficiency)
- Severity level (low, medium, high)
- Clear description in simple terms
- Practical, affordable solution using locally available materials. Format solutions as bullet points (each point on a new line starting with •)

Respond with JSON in this exact format:
{{
  "issues": [
    {{
      "type": "Issue name",
      "severity": "low/medium/high",
      "description": "Simple description",
      "solution": "• First step\n• Second step\n• Third step"
    }}
  ],
  "generalHealth": "Overall health assessment",
  "recommendations": ["Recommendation 1", "Recommendation 2"]
}}

If the image shows healthy crops with no issues, return an empty issues array and positive health assessment."#
    )
}

/// Translation-only instruction for converting an English analysis to Hindi
const TRANSLATE_PROMPT: &str = r#"You will receive a crop analysis as JSON. Translate every natural-language field (type, description, solution, generalHealth, recommendations) into Hindi (Devanagari script).

Rules:
- Keep the JSON structure exactly as given: same keys, same number and order of issues and recommendations.
- Do NOT translate the "severity" values; they must stay exactly "low", "medium" or "high".
- Preserve bullet-point formatting markers (lines starting with •) in solution fields.

Respond with the translated JSON only."#;

/// JSON schema the model output must conform to
fn analysis_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "issues": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "type": { "type": "string" },
                        "severity": { "type": "string", "enum": ["low", "medium", "high"] },
                        "description": { "type": "string" },
                        "solution": { "type": "string" }
                    },
                    "required": ["type", "severity", "description", "solution"]
                }
            },
            "generalHealth": { "type": "string" },
            "recommendations": {
                "type": "array",
                "items": { "type": "string" }
            }
        },
        "required": ["issues", "generalHealth", "recommendations"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Severity;

    #[test]
    fn test_parse_analysis_valid() {
        let text = r#"{
            "issues": [
                {
                    "type": "Leaf Blight",
                    "severity": "high",
                    "description": "Brown lesions on leaves",
                    "solution": "• Remove affected leaves\n• Spray neem oil"
                }
            ],
            "generalHealth": "Stressed",
            "recommendations": ["Improve drainage"]
        }"#;

        let analysis = parse_analysis(text).unwrap();
        assert_eq!(analysis.issues.len(), 1);
        assert_eq!(analysis.issues[0].severity, Severity::High);
        assert!(analysis.issues[0].solution.starts_with('•'));
        assert_eq!(analysis.recommendations, vec!["Improve drainage"]);
    }

    #[test]
    fn test_parse_analysis_rejects_garbage() {
        assert!(matches!(
            parse_analysis("not json at all"),
            Err(AppError::AnalysisFailed(_))
        ));
        assert!(matches!(
            parse_analysis(""),
            Err(AppError::AnalysisFailed(_))
        ));
        // Valid JSON but wrong shape is still a failure, never partial data
        assert!(matches!(
            parse_analysis(r#"{"issues": []}"#),
            Err(AppError::AnalysisFailed(_))
        ));
    }

    #[test]
    fn test_parse_analysis_rejects_bad_severity() {
        let text = r#"{
            "issues": [
                {
                    "type": "Rust",
                    "severity": "catastrophic",
                    "description": "d",
                    "solution": "s"
                }
            ],
            "generalHealth": "ok",
            "recommendations": []
        }"#;
        assert!(matches!(
            parse_analysis(text),
            Err(AppError::AnalysisFailed(_))
        ));
    }

    #[test]
    fn test_prompt_language_conditioning() {
        assert!(analysis_prompt(Language::Hi).contains("Devanagari"));
        assert!(analysis_prompt(Language::En).contains("Respond in English"));
    }

    #[test]
    fn test_translate_prompt_preserves_contract() {
        assert!(TRANSLATE_PROMPT.contains("severity"));
        assert!(TRANSLATE_PROMPT.contains("same number and order"));
        assert!(TRANSLATE_PROMPT.contains('•'));
    }

    #[test]
    fn test_schema_constrains_severity() {
        let schema = analysis_schema();
        let severity_enum = &schema["properties"]["issues"]["items"]["properties"]["severity"]["enum"];
        assert_eq!(*severity_enum, json!(["low", "medium", "high"]));
    }
}
