use crate::domain::id::CardId;
use crate::error::{Result, TaskflowError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Display colour a label maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelColor {
    Purple,
    Blue,
    Yellow,
    Green,
    Orange,
    Gray,
    Red,
    Indigo,
}

/// A card label drawn from the fixed palette, or a custom tag.
///
/// Labels compare by name, so `Custom("design")` equals `Design`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Label {
    Design,
    Development,
    Research,
    Backend,
    Frontend,
    Setup,
    Bug,
    Feature,
    Custom(String),
}

impl Label {
    /// The known palette, in display order
    pub const PALETTE: [Label; 8] = [
        Label::Design,
        Label::Development,
        Label::Research,
        Label::Backend,
        Label::Frontend,
        Label::Setup,
        Label::Bug,
        Label::Feature,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Design => "design",
            Self::Development => "development",
            Self::Research => "research",
            Self::Backend => "backend",
            Self::Frontend => "frontend",
            Self::Setup => "setup",
            Self::Bug => "bug",
            Self::Feature => "feature",
            Self::Custom(name) => name,
        }
    }

    /// Colour for the label; anything outside the palette is gray
    pub fn color(&self) -> LabelColor {
        match self {
            Self::Design => LabelColor::Purple,
            Self::Development => LabelColor::Blue,
            Self::Research => LabelColor::Yellow,
            Self::Backend => LabelColor::Green,
            Self::Frontend => LabelColor::Orange,
            Self::Setup => LabelColor::Gray,
            Self::Bug => LabelColor::Red,
            Self::Feature => LabelColor::Indigo,
            Self::Custom(name) => match Label::from(name.as_str()) {
                Self::Custom(_) => LabelColor::Gray,
                known => known.color(),
            },
        }
    }
}

impl PartialEq for Label {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Label {}

impl Hash for Label {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        match s {
            "design" => Self::Design,
            "development" => Self::Development,
            "research" => Self::Research,
            "backend" => Self::Backend,
            "frontend" => Self::Frontend,
            "setup" => Self::Setup,
            "bug" => Self::Bug,
            "feature" => Self::Feature,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Label::from(s.as_str())
    }
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        label.as_str().to_string()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parses a due date as entered in a date field; blank means no date
pub fn parse_due(input: &str) -> Result<Option<NaiveDate>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| TaskflowError::InvalidDate(input.to_string()))
}

pub(crate) fn require_title(title: &str, entity: &'static str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TaskflowError::EmptyTitle { entity });
    }
    Ok(trimmed.to_string())
}

fn normalize_description(description: Option<String>) -> Option<String> {
    description.filter(|d| !d.trim().is_empty())
}

fn push_unique(labels: &mut Vec<Label>, label: Label) {
    if !labels.contains(&label) {
        labels.push(label);
    }
}

/// Field values collected by a card form before the card exists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDraft {
    pub title: String,
    pub description: Option<String>,
    pub labels: Vec<Label>,
    pub due: Option<NaiveDate>,
}

impl CardDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<Label>) -> Self {
        push_unique(&mut self.labels, label.into());
        self
    }

    pub fn with_due(mut self, due: NaiveDate) -> Self {
        self.due = Some(due);
        self
    }

    /// Adds the label if absent, removes it otherwise
    pub fn toggle_label(&mut self, label: Label) {
        if let Some(pos) = self.labels.iter().position(|l| *l == label) {
            self.labels.remove(pos);
        } else {
            self.labels.push(label);
        }
    }

    /// Converts the draft into a patch that overwrites every field
    pub fn into_patch(self) -> CardPatch {
        CardPatch {
            title: Some(self.title),
            description: Some(self.description),
            labels: Some(self.labels),
            due: Some(self.due),
        }
    }
}

/// Partial update for a card; `None` leaves the field as it was
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub labels: Option<Vec<Label>>,
    pub due: Option<Option<NaiveDate>>,
}

impl CardPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Checks the patch without touching any card
    pub fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            require_title(title, "Card")?;
        }
        Ok(())
    }
}

/// A single task item on a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<NaiveDate>,
}

impl Card {
    /// Builds a card from a draft, rejecting a blank title
    pub fn from_draft(id: CardId, draft: CardDraft) -> Result<Self> {
        let title = require_title(&draft.title, "Card")?;
        let mut labels = Vec::with_capacity(draft.labels.len());
        for label in draft.labels {
            push_unique(&mut labels, label);
        }
        Ok(Self {
            id,
            title,
            description: normalize_description(draft.description),
            labels,
            due: draft.due,
        })
    }

    /// Merges a validated patch into the card
    pub fn apply(&mut self, patch: CardPatch) -> Result<()> {
        patch.validate()?;

        if let Some(title) = patch.title {
            self.title = require_title(&title, "Card")?;
        }
        if let Some(description) = patch.description {
            self.description = normalize_description(description);
        }
        if let Some(labels) = patch.labels {
            self.labels.clear();
            for label in labels {
                push_unique(&mut self.labels, label);
            }
        }
        if let Some(due) = patch.due {
            self.due = due;
        }
        Ok(())
    }

    /// Returns a draft pre-filled with this card's fields
    pub fn to_draft(&self) -> CardDraft {
        CardDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            labels: self.labels.clone(),
            due: self.due,
        }
    }

    pub fn has_label(&self, label: &Label) -> bool {
        self.labels.contains(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn card(title: &str) -> Card {
        Card::from_draft(CardId::generate(), CardDraft::new(title)).unwrap()
    }

    #[test]
    fn test_label_colors() {
        assert_eq!(Label::Design.color(), LabelColor::Purple);
        assert_eq!(Label::Bug.color(), LabelColor::Red);
        assert_eq!(Label::from("urgent").color(), LabelColor::Gray);
    }

    #[test]
    fn test_label_parsing() {
        assert_eq!(Label::from("backend"), Label::Backend);
        assert_eq!(Label::from("urgent"), Label::Custom("urgent".to_string()));
        assert_eq!(Label::Custom("urgent".to_string()).to_string(), "urgent");
    }

    #[test]
    fn test_custom_label_with_palette_name_equals_palette_label() {
        let custom = Label::Custom("design".to_string());
        assert_eq!(custom, Label::Design);
        assert_eq!(custom.color(), LabelColor::Purple);

        let json = serde_json::to_string(&custom).unwrap();
        let restored: Label = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, custom);
        assert_eq!(restored.color(), LabelColor::Purple);

        let mut draft = CardDraft::new("Task").with_label(Label::Design);
        draft.toggle_label(custom);
        assert!(draft.labels.is_empty());
    }

    #[test]
    fn test_has_label() {
        let card = Card::from_draft(
            CardId::generate(),
            CardDraft::new("Fix login").with_label(Label::Bug),
        )
        .unwrap();
        assert!(card.has_label(&Label::Bug));
        assert!(card.has_label(&Label::from("bug")));
        assert!(!card.has_label(&Label::Feature));
    }

    #[test]
    fn test_label_serializes_as_string() {
        let json = serde_json::to_string(&vec![Label::Design, Label::from("urgent")]).unwrap();
        assert_eq!(json, r#"["design","urgent"]"#);

        let labels: Vec<Label> = serde_json::from_str(&json).unwrap();
        assert_eq!(labels, vec![Label::Design, Label::from("urgent")]);
    }

    #[test]
    fn test_from_draft_rejects_blank_title() {
        let err = Card::from_draft(CardId::generate(), CardDraft::new("   ")).unwrap_err();
        assert!(matches!(err, TaskflowError::EmptyTitle { entity: "Card" }));
    }

    #[test]
    fn test_from_draft_normalizes_fields() {
        let draft = CardDraft::new("  Write docs ")
            .with_description("")
            .with_label(Label::Design)
            .with_label(Label::Design);
        let card = Card::from_draft(CardId::generate(), draft).unwrap();

        assert_eq!(card.title, "Write docs");
        assert!(card.description.is_none());
        assert_eq!(card.labels, vec![Label::Design]);
    }

    #[test]
    fn test_apply_merges_only_given_fields() {
        let mut card = Card::from_draft(
            CardId::generate(),
            CardDraft::new("Research")
                .with_description("Analyze competitors")
                .with_label(Label::Research),
        )
        .unwrap();

        card.apply(CardPatch::title("Research market")).unwrap();

        assert_eq!(card.title, "Research market");
        assert_eq!(card.description.as_deref(), Some("Analyze competitors"));
        assert_eq!(card.labels, vec![Label::Research]);
    }

    #[test]
    fn test_apply_rejects_blank_title_without_changes() {
        let mut card = card("Original");
        let patch = CardPatch {
            title: Some(" ".to_string()),
            description: Some(Some("changed".to_string())),
            ..CardPatch::default()
        };

        assert!(card.apply(patch).is_err());
        assert_eq!(card.title, "Original");
        assert!(card.description.is_none());
    }

    #[test]
    fn test_apply_can_clear_due_date() {
        let mut card = card("Ship");
        let due = NaiveDate::from_ymd_opt(2023, 12, 10).unwrap();
        card.apply(CardPatch {
            due: Some(Some(due)),
            ..CardPatch::default()
        })
        .unwrap();
        assert_eq!(card.due, Some(due));

        card.apply(CardPatch {
            due: Some(None),
            ..CardPatch::default()
        })
        .unwrap();
        assert!(card.due.is_none());
    }

    #[test]
    fn test_toggle_label() {
        let mut draft = CardDraft::new("Task");
        draft.toggle_label(Label::Bug);
        draft.toggle_label(Label::Feature);
        assert_eq!(draft.labels, vec![Label::Bug, Label::Feature]);

        draft.toggle_label(Label::Bug);
        assert_eq!(draft.labels, vec![Label::Feature]);
    }

    #[test]
    fn test_parse_due() {
        assert_eq!(parse_due("").unwrap(), None);
        assert_eq!(
            parse_due("2023-12-15").unwrap(),
            NaiveDate::from_ymd_opt(2023, 12, 15)
        );
        assert!(matches!(
            parse_due("15/12/2023"),
            Err(TaskflowError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_card_deserialization_with_missing_optional_fields() {
        let json = r#"{ "id": "card-1", "title": "Legacy" }"#;
        let card: Card = serde_json::from_str(json).unwrap();

        assert_eq!(card.id, CardId::from_str("card-1").unwrap());
        assert!(card.labels.is_empty());
        assert!(card.due.is_none());
    }
}
