//! Hosted form screen
//!
//! Points at the hosted Airtable shared form for the same waitlist table.
//! This is the alternate collaborator for lead capture; it shares nothing
//! with the in-app submission path.

use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::collector::hosted_form_url;
use crate::tui::ui::Styles;

pub struct HostedScreen;

impl HostedScreen {
    pub fn new() -> Self {
        Self
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let content = vec![
            Line::from(""),
            Line::from(
                "Prefer a browser? The same waitlist form is hosted by our \
                 collector and works without any local configuration:",
            ),
            Line::from(""),
            Line::from(Span::styled(
                hosted_form_url(),
                Styles::info().add_modifier(Modifier::UNDERLINED),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Open the link in any browser to join the waitlist.",
                Styles::inactive(),
            )),
        ];

        let paragraph = Paragraph::new(content)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title("Hosted Waitlist Form")
                    .borders(Borders::ALL)
                    .border_style(Styles::active_border()),
            );

        f.render_widget(paragraph, area);
    }
}
