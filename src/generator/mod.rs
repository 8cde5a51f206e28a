//! Offline practice-content generator. Output is template-based for
//! now, shaped like the eventual model-backed service would respond, so
//! the rest of the app already treats generation as an async task with
//! a delay.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationKind {
    #[default]
    Sentence,
    Paragraph,
}

impl GenerationKind {
    pub fn label(&self) -> &'static str {
        match self {
            GenerationKind::Sentence => "Sentence",
            GenerationKind::Paragraph => "Paragraph",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LanguageLevel {
    A1,
    A2,
    #[default]
    B1,
    B2,
    C1,
    C2,
}

impl LanguageLevel {
    pub const ALL: [LanguageLevel; 6] = [
        LanguageLevel::A1,
        LanguageLevel::A2,
        LanguageLevel::B1,
        LanguageLevel::B2,
        LanguageLevel::C1,
        LanguageLevel::C2,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LanguageLevel::A1 => "A1",
            LanguageLevel::A2 => "A2",
            LanguageLevel::B1 => "B1",
            LanguageLevel::B2 => "B2",
            LanguageLevel::C1 => "C1",
            LanguageLevel::C2 => "C2",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    pub word: String,
    pub kind: GenerationKind,
    /// Only set when the context toggle is on and the field is non-empty.
    pub context: Option<String>,
    pub level: Option<LanguageLevel>,
}

pub fn generate(request: &GenerationRequest) -> Vec<String> {
    let word = request.word.trim();
    let level_info = match request.level {
        Some(level) => format!(" ({} seviyesi)", level.label()),
        None => String::new(),
    };

    let mut results = match (request.kind, request.context.as_deref()) {
        (GenerationKind::Sentence, Some(context)) => vec![
            format!("In the context of {}, the {} played a crucial role.", context, word),
            format!("Understanding {} within {} requires careful study.", word, context),
            format!("The {} demonstrated its importance in {}.", word, context),
        ],
        (GenerationKind::Sentence, None) => vec![
            format!("The {} was absolutely magnificent in the morning light.", word),
            format!("She couldn't believe how {} the experience had been.", word),
            format!("Learning about {} changed his perspective completely.", word),
        ],
        (GenerationKind::Paragraph, Some(context)) => vec![format!(
            "In the fascinating world of {context}, the concept of {word} holds significant \
             importance. Throughout history, {word} has been studied extensively by scholars and \
             practitioners alike. The {word} demonstrates unique characteristics that make it \
             stand out in {context}. Understanding {word} requires dedication and careful \
             observation. Many experts believe that {word} will continue to play a vital role in \
             shaping our understanding of {context}. The intricate relationship between {word} \
             and {context} reveals deeper insights into both concepts.",
        )],
        (GenerationKind::Paragraph, None) => vec![format!(
            "The {word} represents a fascinating subject worthy of exploration. Throughout \
             various contexts, {word} has demonstrated its versatility and importance. Many \
             people find {word} to be both challenging and rewarding to understand. The concept \
             of {word} extends beyond simple definitions, encompassing a wide range of \
             applications and interpretations. As we delve deeper into {word}, we discover its \
             multifaceted nature. Experts continue to study {word} from different perspectives, \
             each revealing new insights.",
        )],
    };

    for result in &mut results {
        result.push_str(&level_info);
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_sentences() {
        let request = GenerationRequest { word: "harbor".to_string(), ..Default::default() };

        let results = generate(&request);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0], "The harbor was absolutely magnificent in the morning light.");
        assert!(results.iter().all(|r| r.contains("harbor")));
    }

    #[test]
    fn test_context_sentences_mention_the_context() {
        let request = GenerationRequest {
            word: "harbor".to_string(),
            context: Some("maritime trade".to_string()),
            ..Default::default()
        };

        let results = generate(&request);
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.contains("maritime trade")));
        assert_eq!(
            results[0],
            "In the context of maritime trade, the harbor played a crucial role."
        );
    }

    #[test]
    fn test_level_suffix_lands_on_every_result() {
        let request = GenerationRequest {
            word: "harbor".to_string(),
            level: Some(LanguageLevel::B2),
            ..Default::default()
        };

        let results = generate(&request);
        assert!(results.iter().all(|r| r.ends_with(" (B2 seviyesi)")));
    }

    #[test]
    fn test_paragraph_is_a_single_result() {
        let request = GenerationRequest {
            word: "harbor".to_string(),
            kind: GenerationKind::Paragraph,
            ..Default::default()
        };

        let results = generate(&request);
        assert_eq!(results.len(), 1);
        assert!(results[0].starts_with("The harbor represents a fascinating subject"));

        let with_context = GenerationRequest {
            context: Some("geography".to_string()),
            ..request
        };
        let results = generate(&with_context);
        assert_eq!(results.len(), 1);
        assert!(results[0].contains("In the fascinating world of geography"));
    }

    #[test]
    fn test_word_is_trimmed() {
        let request = GenerationRequest { word: "  harbor  ".to_string(), ..Default::default() };
        let results = generate(&request);
        assert!(results[0].contains("The harbor was"));
    }
}
