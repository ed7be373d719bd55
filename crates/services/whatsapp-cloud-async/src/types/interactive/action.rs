use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::{char_len, too_long};
use crate::error::ResourceError;

/// Maximum characters of a reply button title
pub const REPLY_BUTTON_TITLE_MAXIMUM: usize = 20;
/// Maximum characters of a reply button or row id, after trimming
pub const ID_MAXIMUM: usize = 256;
/// Maximum characters of a row or section title
pub const SECTION_TITLE_MAXIMUM: usize = 24;
/// Maximum characters of a row description
pub const ROW_DESCRIPTION_MAXIMUM: usize = 72;
/// Maximum rows in one section
pub const SECTION_ROWS_MAXIMUM: usize = 10;
/// Maximum characters of the list action button label
pub const LIST_BUTTON_TITLE_MAXIMUM: usize = 20;
/// Allowed number of sections in a list action
pub const SECTIONS_RANGE: std::ops::RangeInclusive<usize> = 1..=10;
/// Allowed number of buttons in a reply-button action
pub const REPLY_BUTTONS_RANGE: std::ops::RangeInclusive<usize> = 1..=3;

fn check_id(id: &str, location: &str) -> Result<(), String> {
    let len = char_len(id.trim());
    if len > ID_MAXIMUM {
        return Err(too_long(len, &format!("id in {location}"), ID_MAXIMUM));
    }
    Ok(())
}

/// Quick reply button of a `button` interactive message
///
/// The id is trimmed for the length check only; the stored id keeps its whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyButton {
    title: String,
    id: String,
}

impl ReplyButton {
    /// Creates a reply button
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidInteractiveActionReplyButton`] when the title exceeds
    /// 20 characters or the trimmed id exceeds 256.
    pub fn new(title: impl Into<String>, id: impl Into<String>) -> Result<Self, ResourceError> {
        let title = title.into();
        let id = id.into();

        let title_len = char_len(&title);
        if title_len > REPLY_BUTTON_TITLE_MAXIMUM {
            return Err(ResourceError::InvalidInteractiveActionReplyButton(too_long(
                title_len,
                "title in button",
                REPLY_BUTTON_TITLE_MAXIMUM,
            )));
        }
        check_id(&id, "button").map_err(ResourceError::InvalidInteractiveActionReplyButton)?;

        Ok(Self { title, id })
    }

    /// Button title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Button id, as supplied
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Serialize for ReplyButton {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Reply<'a> {
            title: &'a str,
            id: &'a str,
        }

        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", "reply")?;
        map.serialize_entry(
            "reply",
            &Reply {
                title: &self.title,
                id: &self.id,
            },
        )?;
        map.end()
    }
}

/// Row of a list section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionRow {
    id: String,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl SectionRow {
    /// Creates a row; an empty description is treated as absent
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidInteractiveActionSectionRow`] when the title exceeds
    /// 24 characters, the trimmed id exceeds 256 or the description exceeds 72.
    pub fn new(
        title: impl Into<String>,
        id: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self, ResourceError> {
        let title = title.into();
        let id = id.into();
        let description = description.filter(|d| !d.is_empty());

        let title_len = char_len(&title);
        if title_len > SECTION_TITLE_MAXIMUM {
            return Err(ResourceError::InvalidInteractiveActionSectionRow(too_long(
                title_len,
                "title in section row",
                SECTION_TITLE_MAXIMUM,
            )));
        }
        check_id(&id, "section row").map_err(ResourceError::InvalidInteractiveActionSectionRow)?;
        if let Some(description) = &description {
            let len = char_len(description);
            if len > ROW_DESCRIPTION_MAXIMUM {
                return Err(ResourceError::InvalidInteractiveActionSectionRow(too_long(
                    len,
                    "description in section row",
                    ROW_DESCRIPTION_MAXIMUM,
                )));
            }
        }

        Ok(Self {
            id,
            title,
            description,
        })
    }

    /// Row title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Row id, as supplied
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Row description
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Titled group of rows in a list message
///
/// The constructor checks the title only. Rows added later are counted by
/// [`Section::validate`], which the owning action runs before it is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    title: String,
    rows: Vec<SectionRow>,
}

impl Section {
    /// Creates an empty section
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidInteractiveActionSection`] when the title exceeds 24 characters.
    pub fn new(title: impl Into<String>) -> Result<Self, ResourceError> {
        let section = Self {
            title: title.into(),
            rows: Vec::new(),
        };
        section.validate_title()?;
        Ok(section)
    }

    /// Appends a row without validating the row count
    pub fn add_row(&mut self, row: SectionRow) {
        self.rows.push(row);
    }

    /// Appends a row, builder style
    #[must_use]
    pub fn with_row(mut self, row: SectionRow) -> Self {
        self.add_row(row);
        self
    }

    /// Section title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Rows in insertion order
    #[must_use]
    pub fn rows(&self) -> &[SectionRow] {
        &self.rows
    }

    /// Checks the title and the number of rows
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidInteractiveActionSection`] on the first violation.
    pub fn validate(&self) -> Result<(), ResourceError> {
        self.validate_title()?;
        let count = self.rows.len();
        if count > SECTION_ROWS_MAXIMUM {
            return Err(ResourceError::InvalidInteractiveActionSection(format!(
                "Invalid number of rows {count} in section.Maximum count: {SECTION_ROWS_MAXIMUM}."
            )));
        }
        Ok(())
    }

    fn validate_title(&self) -> Result<(), ResourceError> {
        let len = char_len(&self.title);
        if len > SECTION_TITLE_MAXIMUM {
            return Err(ResourceError::InvalidInteractiveActionSection(too_long(
                len,
                "title in section",
                SECTION_TITLE_MAXIMUM,
            )));
        }
        Ok(())
    }
}

/// Validated action of an interactive message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractiveAction {
    /// Menu opened by a button, listing sections of rows
    ListMessage {
        /// Label of the button that opens the list
        button: String,
        /// Between 1 and 10 sections
        sections: Vec<Section>,
    },
    /// Up to three quick reply buttons
    ReplyButton {
        /// Between 1 and 3 buttons with unique ids
        buttons: Vec<ReplyButton>,
    },
}

impl InteractiveAction {
    /// Starts a list action with the given button label; sections are added afterwards
    #[must_use]
    pub fn list_message(button: impl Into<String>) -> InteractiveActionBuilder {
        InteractiveActionBuilder::ListMessage {
            button: button.into(),
            sections: Vec::new(),
        }
    }

    /// Starts a reply-button action; buttons are added afterwards
    #[must_use]
    pub const fn reply_button() -> InteractiveActionBuilder {
        InteractiveActionBuilder::ReplyButton {
            buttons: Vec::new(),
        }
    }
}

impl Serialize for InteractiveAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::ListMessage { button, sections } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("button", button)?;
                map.serialize_entry("sections", sections)?;
                map.end()
            }
            Self::ReplyButton { buttons } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("buttons", buttons)?;
                map.end()
            }
        }
    }
}

/// Incrementally assembled action
///
/// Adding buttons or sections never validates; call [`validate`](Self::validate)
/// or [`build`](Self::build) once assembly is complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractiveActionBuilder {
    /// List action under construction
    ListMessage {
        /// Button label
        button: String,
        /// Sections added so far
        sections: Vec<Section>,
    },
    /// Reply-button action under construction
    ReplyButton {
        /// Buttons added so far
        buttons: Vec<ReplyButton>,
    },
}

impl InteractiveActionBuilder {
    /// Appends a reply button; ignored by list actions
    pub fn add_reply_button(&mut self, reply_button: ReplyButton) {
        if let Self::ReplyButton { buttons } = self {
            buttons.push(reply_button);
        } else {
            tracing::warn!("reply button added to a list action is ignored");
        }
    }

    /// Appends a section; ignored by reply-button actions
    pub fn add_section(&mut self, section: Section) {
        if let Self::ListMessage { sections, .. } = self {
            sections.push(section);
        } else {
            tracing::warn!("section added to a reply-button action is ignored");
        }
    }

    /// Builder-style [`add_reply_button`](Self::add_reply_button)
    #[must_use]
    pub fn with_reply_button(mut self, reply_button: ReplyButton) -> Self {
        self.add_reply_button(reply_button);
        self
    }

    /// Builder-style [`add_section`](Self::add_section)
    #[must_use]
    pub fn with_section(mut self, section: Section) -> Self {
        self.add_section(section);
        self
    }

    /// Checks the assembled action
    ///
    /// # Errors
    ///
    /// List actions: [`ResourceError::InvalidInteractiveActionButton`] for an empty or
    /// over-long button label, [`ResourceError::InvalidInteractiveActionSection`] for a
    /// section count outside 1..=10 or the first invalid section.
    ///
    /// Reply-button actions: [`ResourceError::InvalidInteractiveActionReplyButton`] for a
    /// button count outside 1..=3 or duplicate ids.
    pub fn validate(&self) -> Result<(), ResourceError> {
        match self {
            Self::ListMessage { button, sections } => validate_list(button, sections),
            Self::ReplyButton { buttons } => validate_reply_buttons(buttons),
        }
    }

    /// Validates and freezes the action
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate).
    pub fn build(self) -> Result<InteractiveAction, ResourceError> {
        self.validate()?;
        Ok(match self {
            Self::ListMessage { button, sections } => {
                InteractiveAction::ListMessage { button, sections }
            }
            Self::ReplyButton { buttons } => InteractiveAction::ReplyButton { buttons },
        })
    }
}

fn validate_list(button: &str, sections: &[Section]) -> Result<(), ResourceError> {
    let button_len = char_len(button);
    if button_len == 0 || button_len > LIST_BUTTON_TITLE_MAXIMUM {
        return Err(ResourceError::InvalidInteractiveActionButton(format!(
            "Invalid length {button_len} for button. Length should be between 1 and {LIST_BUTTON_TITLE_MAXIMUM}."
        )));
    }

    let count = sections.len();
    if !SECTIONS_RANGE.contains(&count) {
        return Err(ResourceError::InvalidInteractiveActionSection(format!(
            "Invalid length {count} for sections in action. It should be between {} and {}.",
            SECTIONS_RANGE.start(),
            SECTIONS_RANGE.end()
        )));
    }

    sections.iter().try_for_each(Section::validate)
}

fn validate_reply_buttons(buttons: &[ReplyButton]) -> Result<(), ResourceError> {
    let count = buttons.len();
    if !REPLY_BUTTONS_RANGE.contains(&count) {
        return Err(ResourceError::InvalidInteractiveActionReplyButton(format!(
            "Invalid length {count} for buttons in action. It should be between {} and {}.",
            REPLY_BUTTONS_RANGE.start(),
            REPLY_BUTTONS_RANGE.end()
        )));
    }

    let ids: Vec<&str> = buttons.iter().map(ReplyButton::id).collect();
    let unique: std::collections::HashSet<&str> = ids.iter().map(|id| id.trim()).collect();
    if unique.len() != ids.len() {
        return Err(ResourceError::InvalidInteractiveActionReplyButton(format!(
            "Duplicate ids {ids:?} for buttons in action. They should be unique."
        )));
    }
    Ok(())
}
