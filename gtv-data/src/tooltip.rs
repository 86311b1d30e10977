//! Hover tooltip as an explicit two-state machine.
//!
//! ```text
//!            enter(cell)                 enter(other cell)
//!   Hidden ───────────────► Visible ◄──────────────────┐
//!     ▲                        │ └─────────────────────┘
//!     └──────── leave() ───────┘
//! ```
//!
//! The element is never taken out of layout: `Hidden` keeps it displayed with
//! `visibility: hidden; opacity: 0`, so `Visible` has an opacity-0 frame to
//! fade from through the CSS transition. `leave()` drops the transition along
//! with the content, so a fade still in progress is cut off and the label
//! disappears at once.

use crate::config::TooltipConfig;
use crate::render::CellMark;

const BASE_STYLE: &str = "position: absolute; background: black; color: white; \
border: 1px solid black; padding: 5px; border-radius: 5px; pointer-events: none;";

/// What a visible tooltip shows and where.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub text: String,
    pub year: i32,
    /// Page coordinates of the label's top-left corner.
    pub left: f64,
    pub top: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum TooltipState {
    #[default]
    Hidden,
    Visible(TooltipContent),
}

/// Owns the single tooltip instance for the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipController {
    state: TooltipState,
    config: TooltipConfig,
}

impl TooltipController {
    pub fn new(config: TooltipConfig) -> Self {
        Self {
            state: TooltipState::Hidden,
            config,
        }
    }

    pub fn state(&self) -> &TooltipState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, TooltipState::Visible(_))
    }

    /// Pointer entered `cell` at page coordinates `(page_x, page_y)`.
    ///
    /// From either state this shows the tooltip for `cell`; a tooltip already
    /// visible for another cell is retargeted.
    pub fn enter(&mut self, cell: &CellMark, page_x: f64, page_y: f64) {
        self.state = TooltipState::Visible(TooltipContent {
            text: cell.tooltip_text(),
            year: cell.year,
            left: page_x + self.config.offset_x,
            top: page_y + self.config.offset_y,
        });
    }

    /// Pointer left the cell: hide immediately and forget the content.
    pub fn leave(&mut self) {
        self.state = TooltipState::Hidden;
    }

    pub fn text(&self) -> &str {
        match &self.state {
            TooltipState::Visible(content) => &content.text,
            TooltipState::Hidden => "",
        }
    }

    /// Value of the `data-year` attribute; empty while hidden.
    pub fn data_year(&self) -> String {
        match &self.state {
            TooltipState::Visible(content) => content.year.to_string(),
            TooltipState::Hidden => String::new(),
        }
    }

    /// Inline CSS for the tooltip element in the current state.
    pub fn style(&self) -> String {
        match &self.state {
            TooltipState::Visible(content) => format!(
                "{BASE_STYLE} left: {}px; top: {}px; visibility: visible; opacity: {}; transition: opacity {}ms;",
                content.left, content.top, self.config.opacity, self.config.fade_in_ms
            ),
            TooltipState::Hidden => format!("{BASE_STYLE} visibility: hidden; opacity: 0;"),
        }
    }
}

impl Default for TooltipController {
    fn default() -> Self {
        Self::new(TooltipConfig::default())
    }
}
