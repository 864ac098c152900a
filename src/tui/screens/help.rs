//! Help screen for the waitlist TUI

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::tui::ui::{SelectableList, Styles};

/// Help sections
#[derive(Debug, Clone, PartialEq)]
pub enum HelpSection {
    Overview,
    Navigation,
    Waitlist,
    Configuration,
}

impl HelpSection {
    pub fn as_str(&self) -> &str {
        match self {
            HelpSection::Overview => "Overview",
            HelpSection::Navigation => "Navigation",
            HelpSection::Waitlist => "Waitlist Form",
            HelpSection::Configuration => "Configuration",
        }
    }

    fn content(&self) -> &str {
        match self {
            HelpSection::Overview => {
                "Ameen Pay provides instant commission advances to real estate \
                 agencies in the UAE.\n\n\
                 This terminal client presents the product story and lets you \
                 join the waitlist without leaving your shell. Your details go \
                 straight to our lead collector; nothing is stored locally."
            }
            HelpSection::Navigation => {
                "O - Overview\n\
                 P - How It Works\n\
                 W - Join the Waitlist\n\
                 F - Hosted form link\n\
                 H - This help\n\n\
                 Esc returns to the overview, q quits from anywhere, and ? or \
                 F1 toggles the shortcut popup."
            }
            HelpSection::Waitlist => {
                "Tab and Shift+Tab move between fields; typing edits the \
                 focused field. Company, contact, email, and phone are \
                 required. The volume range is optional: press Enter on it to \
                 open the list, Enter again to pick, Backspace to clear.\n\n\
                 Enter on any other field submits the form. If submission \
                 fails, your input is kept so you can retry."
            }
            HelpSection::Configuration => {
                "Submission needs collector credentials in the environment:\n\n\
                 AMEEN_AIRTABLE_API_KEY   access key (required)\n\
                 AMEEN_AIRTABLE_BASE_ID   base identifier (required)\n\
                 AMEEN_AIRTABLE_TABLE     table name (default: Waitlist)\n\n\
                 Without them the form reports a configuration problem and the \
                 hosted form remains available."
            }
        }
    }
}

/// Help screen state
pub struct HelpScreen {
    pub sections: SelectableList<HelpSection>,
    pub scroll_offset: u16,
}

impl HelpScreen {
    pub fn new() -> Self {
        let sections = vec![
            HelpSection::Overview,
            HelpSection::Navigation,
            HelpSection::Waitlist,
            HelpSection::Configuration,
        ];

        Self {
            sections: SelectableList::new(sections),
            scroll_offset: 0,
        }
    }

    pub fn previous_section(&mut self) {
        self.sections.previous();
        self.scroll_offset = 0;
    }

    pub fn next_section(&mut self) {
        self.sections.next();
        self.scroll_offset = 0;
    }

    pub fn draw(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(24), Constraint::Min(0)])
            .split(area);

        let items: Vec<ListItem> = self
            .sections
            .items
            .iter()
            .enumerate()
            .map(|(i, section)| {
                let style = if Some(i) == self.sections.state.selected() {
                    Styles::selected()
                } else {
                    Style::default()
                };
                ListItem::new(section.as_str().to_string()).style(style)
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title("Help")
                .borders(Borders::ALL)
                .border_style(Styles::active_border()),
        );

        f.render_stateful_widget(list, chunks[0], &mut self.sections.state);

        let content = self
            .sections
            .selected()
            .map(|s| s.content())
            .unwrap_or_default();

        let lines: Vec<Line> = content.lines().map(Line::from).collect();
        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .scroll((self.scroll_offset, 0))
            .block(
                Block::default()
                    .title(
                        self.sections
                            .selected()
                            .map(|s| s.as_str().to_string())
                            .unwrap_or_default(),
                    )
                    .borders(Borders::ALL)
                    .border_style(Styles::inactive_border()),
            );

        f.render_widget(paragraph, chunks[1]);
    }
}
