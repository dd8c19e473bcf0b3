#![forbid(unsafe_code)]

//! Template descriptors for the floating preview window.
//!
//! A theme lists the window's content as an ordered sequence of small maps:
//!
//! ```yaml
//! window:
//!   - {start: "[", composition: "%s", end: "]", letter_spacing: 0}
//!   - {start: "\n", candidate: "%s", label: "%s.", comment: " %s", sep: " "}
//!   - {click: "Page_Up", label: "◀", when: paging}
//!   - {move: "⋮", align: right}
//! ```
//!
//! Each map becomes one [`WindowComponent`]. The kind is picked by key
//! priority: `move`, then `candidate`, then `composition`, then `click`.
//! Maps with none of those keys are skipped.
//!
//! # Usage
//!
//! ```
//! use ahash::AHashMap;
//! use cwin_style::{WindowComponent, TextAlign};
//!
//! let mut map = AHashMap::new();
//! map.insert("move".to_string(), "⋮".to_string());
//! map.insert("align".to_string(), "right".to_string());
//! let component = WindowComponent::decode(&map).unwrap().unwrap();
//! assert_eq!(component.decoration().align, TextAlign::End);
//! ```

use ahash::AHashMap;

use crate::{StyleError, TextAlign};

/// Literal text around a component's content, plus its alignment group.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Decoration {
    pub start: String,
    pub end: String,
    pub align: TextAlign,
}

impl Decoration {
    fn from_map(map: &AHashMap<String, String>) -> Self {
        Self {
            start: map.get("start").cloned().unwrap_or_default(),
            end: map.get("end").cloned().unwrap_or_default(),
            align: map
                .get("align")
                .map(|a| TextAlign::from_theme(a))
                .unwrap_or_default(),
        }
    }
}

/// Show the pre-edit text.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CompositionTemplate {
    pub decoration: Decoration,
    /// Extra letter spacing in ems; only values above zero apply.
    pub letter_spacing: f32,
}

/// Show candidates, each through `%s` format templates.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CandidateTemplate {
    pub decoration: Decoration,
    pub candidate: String,
    pub label: Option<String>,
    pub comment: Option<String>,
    /// Separator placed between candidates on the same line.
    pub sep: String,
}

impl Default for CandidateTemplate {
    fn default() -> Self {
        Self {
            decoration: Decoration::default(),
            candidate: "%s".to_owned(),
            label: None,
            comment: None,
            sep: String::new(),
        }
    }
}

/// When a button is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ButtonCondition {
    /// Only when a previous page exists.
    Paging,
    /// Only when at least one candidate exists.
    HasMenu,
}

impl ButtonCondition {
    /// Unknown values mean "always shown".
    pub fn from_theme(value: &str) -> Option<Self> {
        match value.trim() {
            "paging" => Some(Self::Paging),
            "has_menu" => Some(Self::HasMenu),
            _ => None,
        }
    }

    pub fn holds(self, has_prev_page: bool, has_menu: bool) -> bool {
        match self {
            Self::Paging => has_prev_page,
            Self::HasMenu => has_menu,
        }
    }
}

/// A clickable label bound to a key command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ButtonTemplate {
    pub decoration: Decoration,
    /// Command name forwarded to the engine, e.g. `Page_Up`.
    pub command: String,
    /// Explicit label; when absent the command's own label is used.
    pub label: Option<String>,
    pub when: Option<ButtonCondition>,
}

/// A drag handle for moving the window.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MoveTemplate {
    pub decoration: Decoration,
    pub label: String,
}

/// One entry of the window template list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WindowComponent {
    Composition(CompositionTemplate),
    Candidates(CandidateTemplate),
    Button(ButtonTemplate),
    Move(MoveTemplate),
}

impl WindowComponent {
    pub fn decoration(&self) -> &Decoration {
        match self {
            Self::Composition(t) => &t.decoration,
            Self::Candidates(t) => &t.decoration,
            Self::Button(t) => &t.decoration,
            Self::Move(t) => &t.decoration,
        }
    }

    #[inline]
    pub fn is_button(&self) -> bool {
        matches!(self, Self::Button(_))
    }

    /// Decode one descriptor map.
    ///
    /// Returns `Ok(None)` for maps that name no known component.
    pub fn decode(map: &AHashMap<String, String>) -> Result<Option<Self>, StyleError> {
        let decoration = Decoration::from_map(map);
        let label = map.get("label").cloned();

        let component = if let Some(handle) = map.get("move") {
            Self::Move(MoveTemplate {
                decoration,
                label: handle.clone(),
            })
        } else if let Some(candidate) = map.get("candidate") {
            Self::Candidates(CandidateTemplate {
                decoration,
                candidate: candidate.clone(),
                label,
                comment: map.get("comment").cloned(),
                sep: map.get("sep").cloned().unwrap_or_default(),
            })
        } else if map.contains_key("composition") {
            let letter_spacing = match map.get("letter_spacing") {
                Some(raw) => parse_number("letter_spacing", raw)?,
                None => 0.0,
            };
            Self::Composition(CompositionTemplate {
                decoration,
                letter_spacing,
            })
        } else if let Some(command) = map.get("click") {
            Self::Button(ButtonTemplate {
                decoration,
                command: command.clone(),
                label,
                when: map.get("when").and_then(|w| ButtonCondition::from_theme(w)),
            })
        } else {
            tracing::debug!(keys = map.len(), "skipping unrecognised window component");
            return Ok(None);
        };
        Ok(Some(component))
    }

    /// Decode a theme's ordered descriptor list, dropping unrecognised maps.
    pub fn decode_list<'a, I>(maps: I) -> Result<Vec<Self>, StyleError>
    where
        I: IntoIterator<Item = &'a AHashMap<String, String>>,
    {
        let mut out = Vec::new();
        for map in maps {
            if let Some(component) = Self::decode(map)? {
                out.push(component);
            }
        }
        Ok(out)
    }
}

fn parse_number(field: &'static str, raw: &str) -> Result<f32, StyleError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| StyleError::InvalidNumber {
            field,
            value: raw.to_owned(),
        })
}
