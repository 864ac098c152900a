//! How-it-works screen: the six-step advance process

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::tui::ui::{SelectableList, Styles};

/// One step of the commission advance process
pub struct ProcessStep {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct ProcessScreen {
    pub steps: SelectableList<ProcessStep>,
}

impl ProcessScreen {
    pub fn new() -> Self {
        let steps = vec![
            ProcessStep {
                title: "Request Advance",
                description:
                    "Real estate agency submits a commission advance request to Ameen Pay.",
            },
            ProcessStep {
                title: "Validation",
                description: "Ameen Pay validates documents with the developer.",
            },
            ProcessStep {
                title: "Transfer Agreement",
                description:
                    "Ameen Pay and the agency sign a transfer of receivables ownership.",
            },
            ProcessStep {
                title: "Get Paid",
                description: "Ameen Pay releases the money transfer to your agency.",
            },
            ProcessStep {
                title: "Notice Sent",
                description: "Ameen Pay sends a Notice of Assignment to the developer.",
            },
            ProcessStep {
                title: "Settlement",
                description: "The developer sends the commission payment to Ameen Pay.",
            },
        ];

        Self {
            steps: SelectableList::new(steps),
        }
    }

    pub fn draw(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(4)])
            .split(area);

        let items: Vec<ListItem> = self
            .steps
            .items
            .iter()
            .enumerate()
            .map(|(i, step)| {
                let style = if Some(i) == self.steps.state.selected() {
                    Styles::selected()
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{}. ", i + 1), Styles::info()),
                    Span::styled(step.title, style.add_modifier(Modifier::BOLD)),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title("How It Works - Simple, transparent, and secure")
                .borders(Borders::ALL)
                .border_style(Styles::active_border()),
        );

        f.render_stateful_widget(list, chunks[0], &mut self.steps.state);

        let detail = self
            .steps
            .selected()
            .map(|step| step.description)
            .unwrap_or_default();

        let detail_paragraph = Paragraph::new(detail)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title("Step Detail")
                    .borders(Borders::ALL)
                    .border_style(Styles::inactive_border()),
            );

        f.render_widget(detail_paragraph, chunks[1]);
    }
}
