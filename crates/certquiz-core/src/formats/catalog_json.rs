//! # Catalog JSON Format
//!
//! Decoding of the catalog document:
//!
//! ```json
//! {
//!   "stages": [{ "id": 1, "title": "...", "passingScore": 12,
//!                "questions": [{ "id": 1, "question": "...", "options": ["..", ".."],
//!                                "correctAnswer": 0, "explanation": "..." }] }],
//!   "ranks": { "master": {..}, "high": {..}, "medium": {..}, "low": {..} }
//! }
//! ```
//!
//! The size limit is checked before parsing. Parse failures are
//! [`QuizError::Serialization`]; a well-formed document that fails
//! validation is [`QuizError::Catalog`] with the typed [`CatalogError`].
//!
//! [`CatalogError`]: crate::CatalogError

use crate::catalog::CatalogDocument;
use crate::primitives::MAX_CATALOG_BYTES;
use crate::{Catalog, QuizError};

/// Decode and validate a catalog from JSON bytes.
pub fn catalog_from_json(bytes: &[u8]) -> Result<Catalog, QuizError> {
    if bytes.len() > MAX_CATALOG_BYTES {
        return Err(QuizError::Serialization(format!(
            "Catalog size {} bytes exceeds maximum allowed {} bytes",
            bytes.len(),
            MAX_CATALOG_BYTES
        )));
    }

    let doc: CatalogDocument = serde_json::from_slice(bytes)
        .map_err(|e| QuizError::Serialization(format!("Malformed catalog JSON: {}", e)))?;
    Ok(Catalog::new(doc.stages, doc.ranks)?)
}

/// Encode a catalog as pretty-printed JSON.
pub fn catalog_to_json(catalog: &Catalog) -> Result<String, QuizError> {
    serde_json::to_string_pretty(catalog).map_err(|e| QuizError::Serialization(e.to_string()))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CatalogError, StageId};

    const RANKS: &str = r#"{
        "master": {"title": "Master", "description": "d", "icon": "*", "razryad": "6"},
        "high": {"title": "High", "description": "d", "icon": "*"},
        "medium": {"title": "Medium", "description": "d", "icon": "*"},
        "low": {"title": "Low", "description": "d", "icon": "*"}
    }"#;

    fn doc(stages: &str) -> String {
        format!(r#"{{"stages": {stages}, "ranks": {RANKS}}}"#)
    }

    #[test]
    fn parses_valid_document() {
        let json = doc(
            r#"[{"id": 1, "title": "Basics", "icon": "⚙", "passingScore": 1,
                 "questions": [{"id": 1, "question": "Q?", "options": ["x", "y"],
                                "correctAnswer": 1, "explanation": "because"}]}]"#,
        );

        let catalog = catalog_from_json(json.as_bytes()).expect("parse");
        let stage = catalog.stage(StageId(1)).expect("stage");
        assert_eq!(stage.title, "Basics");
        assert_eq!(stage.icon.as_deref(), Some("⚙"));
        assert_eq!(stage.subtitle, None);
        assert_eq!(stage.questions[0].prompt, "Q?");
        assert_eq!(stage.questions[0].correct_answer, 1);
        assert_eq!(catalog.ranks().master.razryad.as_deref(), Some("6"));
        assert_eq!(catalog.ranks().low.razryad, None);
    }

    #[test]
    fn invalid_content_rejected_at_load() {
        let json = doc(
            r#"[{"id": 1, "title": "Basics", "passingScore": 1,
                 "questions": [{"id": 1, "question": "Q?", "options": ["x", "y"],
                                "correctAnswer": 5, "explanation": ""}]}]"#,
        );

        let err = catalog_from_json(json.as_bytes()).expect_err("out of range");
        assert!(
            matches!(
                err,
                QuizError::Catalog(CatalogError::CorrectAnswerOutOfRange {
                    stage: StageId(1),
                    question: 0,
                    correct: 5,
                    count: 2,
                })
            ),
            "{err:?}"
        );
    }

    #[test]
    fn non_contiguous_stage_ids_are_catalog_errors() {
        let json = doc(
            r#"[{"id": 2, "title": "Late", "passingScore": 0,
                 "questions": [{"id": 1, "question": "Q?", "options": ["x", "y"],
                                "correctAnswer": 0, "explanation": ""}]}]"#,
        );

        let err = catalog_from_json(json.as_bytes()).expect_err("gap");
        assert!(matches!(
            err,
            QuizError::Catalog(CatalogError::NonContiguousStageId { .. })
        ));
    }

    #[test]
    fn missing_rank_rejected() {
        let json = r#"{"stages": [], "ranks": {"master": {"title": "", "description": "", "icon": ""}}}"#;
        assert!(matches!(
            catalog_from_json(json.as_bytes()),
            Err(QuizError::Serialization(_))
        ));
    }

    #[test]
    fn syntax_error_reported() {
        let err = catalog_from_json(b"{ not json").expect_err("syntax");
        assert!(err.to_string().contains("Malformed catalog JSON"));
    }

    #[test]
    fn oversized_document_rejected_before_parsing() {
        let bytes = vec![b' '; MAX_CATALOG_BYTES + 1];
        let err = catalog_from_json(&bytes).expect_err("too large");
        assert!(err.to_string().contains("exceeds maximum"));
    }

    #[test]
    fn encode_then_decode_preserves_catalog() {
        let json = doc(
            r#"[{"id": 1, "title": "Basics", "passingScore": 0,
                 "questions": [{"id": 4, "question": "Q?", "options": ["x", "y", "z"],
                                "correctAnswer": 2, "explanation": "e"}]}]"#,
        );
        let catalog = catalog_from_json(json.as_bytes()).expect("parse");
        let encoded = catalog_to_json(&catalog).expect("encode");
        assert!(encoded.contains("\"passingScore\": 0"));
        assert!(encoded.contains("\"correctAnswer\": 2"));

        let decoded = catalog_from_json(encoded.as_bytes()).expect("decode");
        assert_eq!(decoded, catalog);
    }
}
